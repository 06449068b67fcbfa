use super::table::{Wavetable, TABLE_SIZE};

/// How a fractional table position is turned into a sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Interpolation {
    /// Truncate to the sample at or below the position.
    Nearest,
    /// Straight line between the two neighbouring samples.
    #[default]
    Linear,
    /// Third-order curve through the four samples around the position.
    Cubic,
}

impl Interpolation {
    /// Read the table at `phase * N * ratio`.
    ///
    /// `phase` must be non-negative, which the phase accumulator guarantees.
    #[inline]
    pub fn read(self, table: &Wavetable, phase: f32, ratio: f32) -> f32 {
        let position = phase * TABLE_SIZE as f32 * ratio;
        let index = position as i64;
        let frac = position - index as f32;

        match self {
            Interpolation::Nearest => table.at(index),
            Interpolation::Linear => {
                let y1 = table.at(index);
                let y2 = table.at(index + 1);
                y1 + frac * (y2 - y1)
            }
            Interpolation::Cubic => {
                let inm1 = table.at(index - 1);
                let in0 = table.at(index);
                let inp1 = table.at(index + 1);
                let inp2 = table.at(index + 2);

                in0 + 0.5
                    * frac
                    * (inp1 - inm1
                        + frac
                            * (4.0 * inp1 + 2.0 * inm1 - 5.0 * in0 - inp2
                                + frac * (3.0 * (in0 - inp1) - inm1 + inp2)))
            }
        }
    }
}
