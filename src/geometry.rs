//! Points and bounding boxes in screen space
//!
//! Coordinates are 16-bit and every offset operation wraps, as the
//! resources were authored against 16-bit registers.

use std::cmp::max;
use std::cmp::min;

/// Signed screen coordinate
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Hash)]
pub struct Point {
    pub x: i16,
    pub y: i16,
}

impl Point {
    pub const fn new(x: i16, y: i16) -> Self {
        Point { x, y }
    }
    /// Component-wise wrapping addition
    pub fn offset_by(self, other: Point) -> Point {
        Point::new(self.x.wrapping_add(other.x), self.y.wrapping_add(other.y))
    }
    /// Component-wise wrapping subtraction
    pub fn offset_back(self, other: Point) -> Point {
        Point::new(self.x.wrapping_sub(other.x), self.y.wrapping_sub(other.y))
    }
}

impl From<(i16,i16)> for Point {
    fn from(p: (i16, i16)) -> Self {
        Point::new(p.0, p.1)
    }
}

/// Inclusive rectangle `min_x ..= max_x`, `min_y ..= max_y`
#[derive(Debug,Copy,Clone,PartialEq,Eq,Default,Hash)]
pub struct BoundingBox {
    pub min_x: i16,
    pub min_y: i16,
    pub max_x: i16,
    pub max_y: i16,
}

impl BoundingBox {
    pub const fn new(min_x: i16, min_y: i16, max_x: i16, max_y: i16) -> Self {
        BoundingBox { min_x, min_y, max_x, max_y }
    }
    /// Box of `width` by `height` centered on `center`
    ///
    /// Each side extends by half the size, rounded down, so a width of 0 or
    /// 1 gives a single column.
    ///
    ///     use polyfill::{BoundingBox,Point};
    ///
    ///     let b = BoundingBox::centered(Point::new(10, 10), 4, 1);
    ///     assert_eq!(b, BoundingBox::new(8, 10, 12, 10));
    ///
    pub fn centered(center: Point, width: i16, height: i16) -> Self {
        let half = Point::new(width / 2, height / 2);
        let lo = center.offset_back(half);
        let hi = center.offset_by(half);
        BoundingBox::new(lo.x, lo.y, hi.x, hi.y)
    }
    /// Box covering a `width` by `height` surface anchored at the origin
    pub fn of_size(width: usize, height: usize) -> Self {
        BoundingBox::new(0, 0, (width as i16).wrapping_sub(1), (height as i16).wrapping_sub(1))
    }
    /// Top left corner
    pub fn origin(&self) -> Point {
        Point::new(self.min_x, self.min_y)
    }
    pub fn width(&self) -> i32 {
        i32::from(self.max_x) - i32::from(self.min_x) + 1
    }
    pub fn height(&self) -> i32 {
        i32::from(self.max_y) - i32::from(self.min_y) + 1
    }
    /// Overlapping region of both boxes, if any
    ///
    ///     use polyfill::BoundingBox;
    ///
    ///     let a = BoundingBox::new(0, 0, 9, 9);
    ///     let b = BoundingBox::new(5, -3, 20, 4);
    ///     assert_eq!(a.intersection(&b), Some(BoundingBox::new(5, 0, 9, 4)));
    ///     assert_eq!(a.intersection(&BoundingBox::new(10, 0, 12, 2)), None);
    ///
    pub fn intersection(&self, other: &BoundingBox) -> Option<BoundingBox> {
        let min_x = max(self.min_x, other.min_x);
        let max_x = min(self.max_x, other.max_x);
        let min_y = max(self.min_y, other.min_y);
        let max_y = min(self.max_y, other.max_y);
        if min_x > max_x || min_y > max_y {
            return None;
        }
        Some(BoundingBox::new(min_x, min_y, max_x, max_y))
    }
    pub fn intersects(&self, other: &BoundingBox) -> bool {
        self.intersection(other).is_some()
    }
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x && p.x <= self.max_x &&
            p.y >= self.min_y && p.y <= self.max_y
    }
    /// True if `other` lies entirely inside this box
    pub fn encloses(&self, other: &BoundingBox) -> bool {
        self.contains(other.origin()) &&
            self.contains(Point::new(other.max_x, other.max_y))
    }
    /// True for a box covering exactly one pixel
    pub fn is_unit(&self) -> bool {
        self.min_x == self.max_x && self.min_y == self.max_y
    }
}
