//! Reciprocal lookup table for edge slopes
//!
//! Every edge of a polygon spans between 0 and [`MAX_VERTICAL_SPAN`] rows.
//! Rather than dividing per edge, the horizontal step is found by multiplying
//! the edge's horizontal delta by a precomputed reciprocal of its height.

use crate::fixed::Fixed;
use once_cell::sync::Lazy;

/// Largest vertical span covered by the table
pub const MAX_VERTICAL_SPAN: usize = 1023;

/// Numerator of the reciprocals, before scaling to 16.16
///
/// The table keeps the precision of the reference renderer: 14-bit
/// reciprocals that are then shifted into the fractional range.
const RECIPROCAL_BASE: i32 = 0x4000;
const RECIPROCAL_SHIFT: u32 = 2;

static SLOPE_TABLE: Lazy<SlopeTable> = Lazy::new(SlopeTable::build);

/// Table of `1/n` for `n` in `0..=MAX_VERTICAL_SPAN`, as 16.16 values
///
/// Entry `0` holds the same value as entry `1`, so a flat edge moves by its
/// full horizontal delta in a single step.
pub struct SlopeTable {
    reciprocals: Vec<Fixed>,
}

impl SlopeTable {
    fn build() -> Self {
        let reciprocals = (0 ..= MAX_VERTICAL_SPAN as i32)
            .map(|n| RECIPROCAL_BASE / n.max(1))
            .map(|r| Fixed::from_raw(r << RECIPROCAL_SHIFT))
            .collect();
        SlopeTable { reciprocals }
    }
    /// Shared table, built on first use
    pub fn get() -> &'static SlopeTable {
        &SLOPE_TABLE
    }
    /// Reciprocal of `dy`, or `None` if `dy` falls outside the table
    ///
    ///     use polyfill::SlopeTable;
    ///
    ///     let t = SlopeTable::get();
    ///     assert_eq!(t.reciprocal(1).unwrap().raw(), 0x1_0000);
    ///     assert_eq!(t.reciprocal(4).unwrap().raw(), 0x4000);
    ///     assert!(t.reciprocal(1024).is_none());
    ///
    pub fn reciprocal(&self, dy: i32) -> Option<Fixed> {
        if dy < 0 {
            return None;
        }
        self.reciprocals.get(dy as usize).copied()
    }
    /// Per-row horizontal step of an edge moving `dx` pixels over `dy` rows
    pub fn step(&self, dx: i32, dy: i32) -> Option<Fixed> {
        self.reciprocal(dy)
            .map(|r| Fixed::from_raw(dx.wrapping_mul(r.raw())))
    }
    /// Number of entries
    pub fn len(&self) -> usize {
        self.reciprocals.len()
    }
}
