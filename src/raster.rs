//! Scanline polygon fill
//!
//! Polygons are filled one quadrilateral at a time, walking the vertex
//! strip from both ends. Each side keeps a 16.16 horizontal position that
//! is advanced by its slope every row, and every row between the two sides
//! is written as one horizontal span.
//!
//! Output matches the reference renderer pixel for pixel, including the
//! rounding seeds applied to each side at the start of every quadrilateral
//! and the single step taken across flat edges.

use crate::buffer::IndexedBuffer;
use crate::draw_mode::DrawMode;
use crate::fixed::Fixed;
use crate::geometry::Point;
use crate::polygon::Polygon;
use crate::polygon::MIN_VERTICES;
use crate::slope::SlopeTable;
use crate::slope::MAX_VERTICAL_SPAN;

use log::trace;

use std::cmp::max;
use std::cmp::min;
use std::error;
use std::fmt;

/// Fraction seeded into the clockwise side before each quadrilateral
const CLOCKWISE_SEED: u16 = 0x8000;
/// Fraction seeded into the counterclockwise side before each quadrilateral
const COUNTERCLOCKWISE_SEED: u16 = 0x7FFF;
/// Bit set by the highlight ramp
const HIGHLIGHT_BIT: u8 = 0x08;

/// Problems found while filling a polygon
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum RasterError {
    /// Fewer than four vertices
    VertexCountTooLow { count: usize },
    /// An edge spans a negative or too large number of rows
    InvalidVerticalDelta { delta: i32 },
    /// Mask polygon drawn without a source buffer
    MaskSourceMissing,
    /// Mask source and destination differ in size
    MaskSourceMismatch { expected: (usize, usize), found: (usize, usize) },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            RasterError::VertexCountTooLow { count } =>
                write!(f, "cannot fill polygon with {} vertices, needs at least {}", count, MIN_VERTICES),
            RasterError::InvalidVerticalDelta { delta } =>
                write!(f, "edge spans {} rows, expected 0 to {}", delta, MAX_VERTICAL_SPAN),
            RasterError::MaskSourceMissing =>
                write!(f, "mask polygon drawn without a source buffer"),
            RasterError::MaskSourceMismatch { expected, found } =>
                write!(f, "mask source is {}x{}, destination is {}x{}",
                       found.0, found.1, expected.0, expected.1),
        }
    }
}

impl error::Error for RasterError {}

/// Highlight ramp applied to a single palette index
///
///     use polyfill::highlight;
///
///     assert_eq!(highlight(3), 11);
///     assert_eq!(highlight(12), 12);
///
pub fn highlight(index: u8) -> u8 {
    index | HIGHLIGHT_BIT
}

/// Draw mode resolved against its buffers
enum SpanOp<'a> {
    Solid(u8),
    Highlight,
    Mask(&'a IndexedBuffer),
}

impl<'a> SpanOp<'a> {
    fn resolve(mode: DrawMode, dst: &IndexedBuffer, mask_source: Option<&'a IndexedBuffer>) -> Result<Self, RasterError> {
        match mode {
            DrawMode::SolidColor(index) => Ok(SpanOp::Solid(index)),
            DrawMode::Highlight => Ok(SpanOp::Highlight),
            DrawMode::Mask => {
                let src = mask_source.ok_or(RasterError::MaskSourceMissing)?;
                if !src.same_size(dst) {
                    return Err(RasterError::MaskSourceMismatch {
                        expected: (dst.width(), dst.height()),
                        found: (src.width(), src.height()),
                    });
                }
                Ok(SpanOp::Mask(src))
            }
        }
    }
    /// Write pixels `x1 ..= x2` of row `y`; the span must lie inside `dst`
    fn apply(&self, dst: &mut IndexedBuffer, y: usize, x1: usize, x2: usize) {
        let span = &mut dst.row_mut(y)[x1 ..= x2];
        match *self {
            SpanOp::Solid(index) => span.iter_mut().for_each(|p| *p = index),
            SpanOp::Highlight => span.iter_mut().for_each(|p| *p = highlight(*p)),
            SpanOp::Mask(src) => span.copy_from_slice(&src.row(y)[x1 ..= x2]),
        }
    }
}

/// Per-row step and row count of the edge from `from` to `to`
fn edge_step(table: &SlopeTable, from: Point, to: Point) -> Result<(Fixed, usize), RasterError> {
    let dy = i32::from(to.y) - i32::from(from.y);
    let dx = i32::from(to.x) - i32::from(from.x);
    let step = table.step(dx, dy)
        .ok_or(RasterError::InvalidVerticalDelta { delta: dy })?;
    Ok((step, dy as usize))
}

/// Fill `poly` into `dst`
///
/// `mask_source` supplies the pixels of mask polygons and must match the
/// size of `dst`; other modes ignore it. Polygons entirely off the buffer
/// are skipped before the draw mode is looked at.
///
/// Rows are counted from the first vertex, not from the top of the
/// bounding box.
///
///     use polyfill::{draw_polygon,BoundingBox,DrawMode,IndexedBuffer,Point,Polygon};
///
///     let mut buf = IndexedBuffer::new(4, 4);
///     let dot = Polygon::new(DrawMode::SolidColor(9),
///                            BoundingBox::new(1, 1, 1, 1),
///                            vec![Point::new(1,1); 4]).unwrap();
///     draw_polygon(&mut buf, &dot, None).unwrap();
///     assert_eq!(buf.get(1, 1), Some(9));
///
pub fn draw_polygon(dst: &mut IndexedBuffer, poly: &Polygon, mask_source: Option<&IndexedBuffer>) -> Result<(), RasterError> {
    let clip = dst.bounds();
    if !poly.bounds.intersects(&clip) {
        trace!("DRAW_POLYGON: {:?} off buffer", poly.bounds);
        return Ok(());
    }
    let op = SpanOp::resolve(poly.draw_mode, dst, mask_source)?;
    if poly.is_dot() {
        let p = poly.bounds.origin();
        trace!("DRAW_POLYGON: dot at {:?}", p);
        op.apply(dst, p.y as usize, p.x as usize, p.x as usize);
        return Ok(());
    }
    let count = poly.vertices.len();
    if count < MIN_VERTICES {
        return Err(RasterError::VertexCountTooLow { count });
    }

    let table = SlopeTable::get();
    let v = &poly.vertices;
    let (left, right) = (i32::from(clip.min_x), i32::from(clip.max_x));
    let (top, bottom) = (i32::from(clip.min_y), i32::from(clip.max_y));

    let mut cw = 0;
    let mut ccw = count - 1;
    let mut x_cw = Fixed::from_whole(v[cw].x);
    let mut x_ccw = Fixed::from_whole(v[ccw].x);
    let mut y = i32::from(v[cw].y);

    while cw + 1 < ccw {
        let (step_cw, rows) = edge_step(table, v[cw], v[cw + 1])?;
        let (step_ccw, _) = edge_step(table, v[ccw], v[ccw - 1])?;

        x_cw = x_cw.with_fraction(CLOCKWISE_SEED);
        x_ccw = x_ccw.with_fraction(COUNTERCLOCKWISE_SEED);

        if rows == 0 {
            x_cw += step_cw;
            x_ccw += step_ccw;
        }
        for _ in 0 .. rows {
            if y >= top && y <= bottom {
                let (a, b) = (x_cw.whole(), x_ccw.whole());
                let (x1, x2) = (min(a, b), max(a, b));
                if x1 <= right && x2 >= left {
                    op.apply(dst, y as usize, max(x1, left) as usize, min(x2, right) as usize);
                }
            }
            x_cw += step_cw;
            x_ccw += step_ccw;
            y += 1;
            if y > bottom {
                trace!("DRAW_POLYGON: left buffer at row {}", y);
                return Ok(());
            }
        }
        cw += 1;
        ccw -= 1;
    }
    Ok(())
}
