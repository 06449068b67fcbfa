//! The harmonic-amount control, written from a control context and read by the audio thread.

use std::sync::atomic::{AtomicU32, Ordering};

pub const MIN_HARMONIC_AMOUNT: f32 = 1.0;
pub const MAX_HARMONIC_AMOUNT: f32 = 100.0;

/// How loud the upper partials are relative to the fundamental, in percent.
///
/// Stored as `f32` bits in an atomic so a writer on another thread never tears a read.
#[derive(Debug)]
pub struct HarmonicAmount {
    bits: AtomicU32,
}

impl HarmonicAmount {
    /// Store `amount` as is. Only [`HarmonicAmount::set`] clamps.
    ///
    /// An amount of 0 silences the upper partials entirely.
    pub fn new(amount: f32) -> Self {
        Self {
            bits: AtomicU32::new(amount.to_bits()),
        }
    }

    /// Set the amount, clamped to `[1, 100]`. NaN is treated as the minimum.
    ///
    /// Returns the stored value.
    pub fn set(&self, amount: f32) -> f32 {
        let clamped = clamp(amount);
        if clamped != amount {
            log::trace!("harmonic amount {} clamped to {}", amount, clamped);
        }
        self.bits.store(clamped.to_bits(), Ordering::Relaxed);
        clamped
    }

    #[inline]
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// The amount as a fraction, `get() / 100`.
    #[inline]
    pub fn weight(&self) -> f32 {
        self.get() / 100.0
    }
}

impl Default for HarmonicAmount {
    fn default() -> Self {
        Self::new(0.0)
    }
}

fn clamp(amount: f32) -> f32 {
    if amount > MAX_HARMONIC_AMOUNT {
        MAX_HARMONIC_AMOUNT
    } else if amount >= MIN_HARMONIC_AMOUNT {
        amount
    } else {
        MIN_HARMONIC_AMOUNT
    }
}
