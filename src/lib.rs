pub mod control;
pub mod osc;

use std::sync::Arc;

pub use control::HarmonicAmount;
pub use osc::interp::Interpolation;
use osc::{
    chord::{ChordOscillator, ChordOscillatorState},
    Oscillator,
};

pub struct Config {
    /// The sample rate of the audio stream, in Hz.
    pub sample_rate: f32,
    /// How the wavetable is read between samples.
    pub interpolation: Interpolation,
}

pub const DEFAULT_SAMPLE_RATE: f32 = 44_100.0;

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            interpolation: Interpolation::default(),
        }
    }
}

/// A single voice of the chord oscillator, driven one buffer at a time by its host.
///
/// The host owns the voice on its audio thread and calls [`Voice::process`] once per buffer.
/// The harmonic amount can be changed from anywhere through the handle returned by
/// [`Voice::harmonic_amount`].
pub struct Voice {
    /// The sample rate the next buffer will be processed at.
    sample_rate: f32,

    /// The oscillator used to generate the sound.
    osc: ChordOscillator,

    /// Phase carried from one buffer to the next.
    state: ChordOscillatorState,
}

impl Voice {
    /// Create a voice. `harmonic_amount` is stored without clamping.
    pub fn new(cfg: Config, harmonic_amount: f32) -> Self {
        log::debug!(
            "new voice: sample rate {}, harmonic amount {}, {:?} interpolation",
            cfg.sample_rate,
            harmonic_amount,
            cfg.interpolation
        );
        let osc = ChordOscillator::new(Arc::new(HarmonicAmount::new(harmonic_amount)))
            .with_interpolation(cfg.interpolation);
        let state = osc.create_state();
        Self {
            sample_rate: cfg.sample_rate,
            osc,
            state,
        }
    }

    /// Called by the host before processing starts at a new rate.
    pub fn set_sample_rate(&mut self, sample_rate: f32) {
        debug_assert!(sample_rate > 0.0, "sample rate must be positive");
        if sample_rate != self.sample_rate {
            log::debug!(
                "sample rate changed from {} to {}",
                self.sample_rate,
                sample_rate
            );
        }
        self.sample_rate = sample_rate;
    }

    pub fn sample_rate(&self) -> f32 {
        self.sample_rate
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.osc.set_interpolation(interpolation);
    }

    /// Shared handle to the harmonic amount, for use by a control thread.
    pub fn harmonic_amount(&self) -> Arc<HarmonicAmount> {
        self.osc.harmonic_amount().clone()
    }

    /// Set the harmonic amount, clamped to `[1, 100]`.
    pub fn set_harmonic_amount(&self, amount: f32) -> f32 {
        self.osc.harmonic_amount().set(amount)
    }

    /// The current phase, in cycles of the root.
    pub fn phase(&self) -> f32 {
        self.state.phase()
    }

    pub fn reset(&mut self) {
        self.state.reset();
    }

    /// Render one output sample per input frequency.
    ///
    /// Real-time safe: no allocation, no locking, linear in the buffer length.
    pub fn process(&mut self, freq: &[f32], out: &mut [f32]) {
        debug_assert_eq!(freq.len(), out.len(), "buffer lengths differ");
        self.osc
            .fill_samples(&mut self.state, freq, out, self.sample_rate);
    }

    /// Render with a fixed frequency, for hosts with no frequency signal connected.
    pub fn process_constant(&mut self, freq: f32, out: &mut [f32]) {
        const CHUNK: usize = 64;
        let freq_chunk = [freq; CHUNK];
        for chunk in out.chunks_mut(CHUNK) {
            let len = chunk.len();
            self.osc
                .fill_samples(&mut self.state, &freq_chunk[..len], chunk, self.sample_rate);
        }
    }
}
