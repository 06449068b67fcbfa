pub mod chord;
pub mod interp;
pub mod phase;
pub mod table;

pub trait Oscillator {
    /// This type should store the state of the oscillator.
    type State;

    /// Create a new state for the oscillator.
    fn create_state(&self) -> Self::State;

    /// Fill the buffer with samples of the oscillator.
    ///
    /// The implementation **overwrites** `buffer[i]` with the sample produced for `freq[i]`.
    /// Only the first `min(freq.len(), buffer.len())` samples are touched.
    ///
    /// - `freq` is the per-sample frequency of the oscillator, in Hz.
    /// - `sample_rate` is the rate of the stream, in Hz.
    ///
    /// Implementations must not allocate, lock or block.
    fn fill_samples(
        &self,
        state: &mut Self::State,
        freq: &[f32],
        buffer: &mut [f32],
        sample_rate: f32,
    );
}
