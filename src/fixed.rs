//! 16.16 fixed point numbers
//!
//! Horizontal edge positions are accumulated row by row in this format.
//! The upper 16 bits hold the signed whole part, the lower 16 bits the
//! fraction. All arithmetic wraps, matching the 32-bit registers of the
//! reference renderer.

use std::ops::Add;
use std::ops::AddAssign;

/// Number of fractional bits
pub const FRACTION_BITS: u32 = 16;
/// Mask covering the fractional bits
pub const FRACTION_MASK: i32 = (1 << FRACTION_BITS) - 1;

/// Signed 16.16 fixed point value
#[derive(Debug,Copy,Clone,PartialEq,Eq,PartialOrd,Ord,Default,Hash)]
pub struct Fixed(i32);

impl Fixed {
    /// Zero
    pub const ZERO: Fixed = Fixed(0);

    /// Create from the raw 32-bit representation
    pub const fn from_raw(raw: i32) -> Self {
        Fixed(raw)
    }
    /// Create from a whole number with an empty fraction
    ///
    ///     use polyfill::Fixed;
    ///
    ///     let f = Fixed::from_whole(-3);
    ///     assert_eq!(f.whole(), -3);
    ///     assert_eq!(f.fraction(), 0);
    ///
    pub fn from_whole(whole: i16) -> Self {
        Fixed(i32::from(whole) << FRACTION_BITS)
    }
    /// Raw 32-bit representation
    pub fn raw(self) -> i32 {
        self.0
    }
    /// Whole part, truncated towards negative infinity
    pub fn whole(self) -> i32 {
        self.0 >> FRACTION_BITS
    }
    /// Fractional bits
    pub fn fraction(self) -> u16 {
        (self.0 & FRACTION_MASK) as u16
    }
    /// Replace the fractional bits, keeping the whole part
    ///
    ///     use polyfill::Fixed;
    ///
    ///     let f = Fixed::from_whole(7).with_fraction(0x8000);
    ///     assert_eq!(f.whole(), 7);
    ///     assert_eq!(f.raw(), 0x0007_8000);
    ///
    pub fn with_fraction(self, fraction: u16) -> Self {
        Fixed((self.0 & !FRACTION_MASK) | i32::from(fraction))
    }
}

impl Add for Fixed {
    type Output = Fixed;
    fn add(self, other: Fixed) -> Fixed {
        Fixed(self.0.wrapping_add(other.0))
    }
}

impl AddAssign for Fixed {
    fn add_assign(&mut self, other: Fixed) {
        self.0 = self.0.wrapping_add(other.0);
    }
}
