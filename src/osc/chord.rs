use std::sync::Arc;

use super::{interp::Interpolation, phase::PhaseAccumulator, table::Wavetable, Oscillator};
use crate::control::HarmonicAmount;

#[derive(Debug, Clone, Copy)]
struct Partial {
    /// Frequency relative to the root.
    ratio: f32,
    /// The partial is divided by this before mixing.
    divisor: f32,
    /// Whether the divisor is scaled by `1 / weight` of the harmonic amount.
    blended: bool,
}

/// Root, major third, perfect fifth and major seventh.
const PARTIALS: [Partial; 4] = [
    Partial {
        ratio: 1.0,
        divisor: 2.0,
        blended: false,
    },
    Partial {
        ratio: 5.0 / 4.0,
        divisor: 4.0,
        blended: true,
    },
    Partial {
        ratio: 3.0 / 2.0,
        divisor: 6.0,
        blended: true,
    },
    Partial {
        ratio: 15.0 / 8.0,
        divisor: 8.0,
        blended: true,
    },
];

/// A major seventh chord built from one sine table read at four ratios of a shared phase.
#[derive(Debug, Clone)]
pub struct ChordOscillator {
    table: Wavetable,
    interpolation: Interpolation,
    harmonic_amount: Arc<HarmonicAmount>,
}

impl ChordOscillator {
    pub fn new(harmonic_amount: Arc<HarmonicAmount>) -> Self {
        Self {
            table: Wavetable::sine(),
            interpolation: Interpolation::default(),
            harmonic_amount,
        }
    }

    pub fn with_interpolation(mut self, interpolation: Interpolation) -> Self {
        self.interpolation = interpolation;
        self
    }

    pub fn set_interpolation(&mut self, interpolation: Interpolation) {
        self.interpolation = interpolation;
    }

    pub fn interpolation(&self) -> Interpolation {
        self.interpolation
    }

    pub fn harmonic_amount(&self) -> &Arc<HarmonicAmount> {
        &self.harmonic_amount
    }

    pub fn table(&self) -> &Wavetable {
        &self.table
    }

    /// Mix all partials at `phase` with the given harmonic `weight` (amount / 100).
    ///
    /// With a weight of 1 the partials contribute 1/2, 1/4, 1/6 and 1/8. Smaller weights shrink
    /// the upper three; the root always contributes 1/2. The sum is not clipped.
    #[inline]
    pub fn mix(&self, phase: f32, weight: f32) -> f32 {
        let mut out = 0.0;
        for partial in &PARTIALS {
            let sample = self.interpolation.read(&self.table, phase, partial.ratio);
            let divisor = if partial.blended {
                partial.divisor / weight
            } else {
                partial.divisor
            };
            out += sample / divisor;
        }
        out
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChordOscillatorState {
    phase: PhaseAccumulator,
}

impl ChordOscillatorState {
    pub fn phase(&self) -> f32 {
        self.phase.value()
    }

    pub fn reset(&mut self) {
        self.phase.reset();
    }
}

impl Oscillator for ChordOscillator {
    type State = ChordOscillatorState;

    fn create_state(&self) -> Self::State {
        ChordOscillatorState::default()
    }

    fn fill_samples(
        &self,
        state: &mut Self::State,
        freq: &[f32],
        buffer: &mut [f32],
        sample_rate: f32,
    ) {
        for (out, freq) in buffer.iter_mut().zip(freq.iter()) {
            let phase = state.phase.advance(*freq, sample_rate);
            *out = self.mix(phase, self.harmonic_amount.weight());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn osc(amount: f32) -> ChordOscillator {
        ChordOscillator::new(Arc::new(HarmonicAmount::new(amount)))
    }

    fn partial(osc: &ChordOscillator, phase: f32, ratio: f32) -> f32 {
        Interpolation::Linear.read(osc.table(), phase, ratio)
    }

    #[test]
    fn full_blend_weights() {
        let osc = osc(100.0);
        for phase in [0.0, 0.1234, 0.37, 7.9, 59.99] {
            let expected = partial(&osc, phase, 1.0) / 2.0
                + partial(&osc, phase, 1.25) / 4.0
                + partial(&osc, phase, 1.5) / 6.0
                + partial(&osc, phase, 1.875) / 8.0;
            let got = osc.mix(phase, 1.0);
            assert!((got - expected).abs() < 1e-6, "phase {}", phase);
        }
    }

    #[test]
    fn minimum_blend_leaks_upper_partials() {
        let osc = osc(1.0);
        let phase = 0.1;
        let root = partial(&osc, phase, 1.0) / 2.0;
        let leak = partial(&osc, phase, 1.25) * 0.01 / 4.0
            + partial(&osc, phase, 1.5) * 0.01 / 6.0
            + partial(&osc, phase, 1.875) * 0.01 / 8.0;
        let got = osc.mix(phase, 0.01);
        assert!((got - (root + leak)).abs() < 1e-6);
        assert!((got - root).abs() > 1e-4);
    }

    #[test]
    fn zero_weight_is_root_only() {
        let osc = osc(0.0);
        let phase = 0.3;
        assert_eq!(osc.mix(phase, 0.0), partial(&osc, phase, 1.0) / 2.0);
    }

    #[test]
    fn fill_overwrites_and_advances() {
        let osc = osc(50.0);
        let mut state = osc.create_state();
        let freq = [480.0; 10];
        let mut buffer = [9.0; 10];
        osc.fill_samples(&mut state, &freq, &mut buffer, 48000.0);
        assert!((state.phase() - 0.1).abs() < 1e-6);
        assert!(buffer.iter().all(|s| s.abs() <= 1.0));

        let mut phase = PhaseAccumulator::new();
        let expected = osc.mix(phase.advance(480.0, 48000.0), 0.5);
        assert_eq!(buffer[0], expected);
    }

    #[test]
    fn reads_amount_on_every_buffer() {
        let amount = Arc::new(HarmonicAmount::new(1.0));
        let osc = ChordOscillator::new(amount.clone());
        let mut quiet = osc.create_state();
        let mut loud = osc.create_state();
        let freq = [1000.0; 32];
        let mut a = [0.0; 32];
        let mut b = [0.0; 32];
        osc.fill_samples(&mut quiet, &freq, &mut a, 44100.0);
        amount.set(100.0);
        osc.fill_samples(&mut loud, &freq, &mut b, 44100.0);
        assert_ne!(a, b);
    }

    #[test]
    fn shorter_frequency_buffer_leaves_tail() {
        let osc = osc(100.0);
        let mut state = osc.create_state();
        let mut buffer = [7.0; 4];
        osc.fill_samples(&mut state, &[440.0, 440.0], &mut buffer, 48000.0);
        assert!(buffer[2..].iter().all(|s| *s == 7.0));
    }
}
