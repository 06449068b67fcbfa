//! A fixed-size sine lookup table.

/// Number of samples in one period of the table.
pub const TABLE_SIZE: usize = 1024;

/// One period of a sine wave, sampled at [`TABLE_SIZE`] points.
///
/// The table is filled once on construction and only read afterwards, so it can be shared with
/// the audio thread without synchronization.
#[derive(Debug, Clone)]
pub struct Wavetable {
    samples: Box<[f32; TABLE_SIZE]>,
}

impl Wavetable {
    /// Fill a new table with `sin(2π·i/N)`.
    pub fn sine() -> Self {
        let mut samples = Box::new([0.0; TABLE_SIZE]);
        let size = TABLE_SIZE as f32;
        for (i, sample) in samples.iter_mut().enumerate() {
            *sample = (std::f32::consts::TAU * i as f32 / size).sin();
        }
        Self { samples }
    }

    /// Sample at `index mod N`. Negative indices wrap from the end of the table.
    #[inline]
    pub fn at(&self, index: i64) -> f32 {
        self.samples[index.rem_euclid(TABLE_SIZE as i64) as usize]
    }

    pub fn samples(&self) -> &[f32] {
        &self.samples[..]
    }

    pub fn len(&self) -> usize {
        TABLE_SIZE
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}
