/// Upper bound of the accumulated phase, in cycles.
///
/// The phase spans sixty cycles of the fundamental rather than one. Ratio-scaled partials index
/// the table with `phase * ratio`, so the bound decides where their waveforms restart; changing it
/// changes the sound.
pub const WRAP_BOUND: f32 = 60.0;

/// Running phase shared by all partials of a voice, kept within `[0, WRAP_BOUND)`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhaseAccumulator {
    phase: f32,
}

impl PhaseAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> f32 {
        self.phase
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }

    /// Advance by `frequency / sample_rate` cycles and wrap. Returns the new phase.
    ///
    /// Neither input is validated. A non-finite increment (e.g. a zero sample rate) resets the
    /// phase to 0 instead of looping forever.
    #[inline]
    pub fn advance(&mut self, frequency: f32, sample_rate: f32) -> f32 {
        self.phase += frequency / sample_rate;
        if !(0.0..WRAP_BOUND).contains(&self.phase) {
            self.phase = wrap(self.phase);
        }
        self.phase
    }
}

/// Same result as repeatedly adding or subtracting `WRAP_BOUND`, in constant time.
fn wrap(phase: f32) -> f32 {
    if !phase.is_finite() {
        return 0.0;
    }
    let wrapped = phase.rem_euclid(WRAP_BOUND);
    // A tiny negative remainder plus the bound can round up to the bound itself.
    if wrapped >= WRAP_BOUND {
        0.0
    } else {
        wrapped
    }
}
