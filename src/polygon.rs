//! Resolved polygons
//!
//! A polygon is stored as a strip of vertex pairs. Vertex `i` from the start
//! and vertex `count - 1 - i` from the end share a row; walking the pairs from
//! the first to the last moves down the screen. The rasterizer fills the
//! quadrilateral between each consecutive pair of pairs.

use crate::draw_mode::DrawMode;
use crate::geometry::BoundingBox;
use crate::geometry::Point;
use crate::slope::MAX_VERTICAL_SPAN;

use smallvec::SmallVec;

use std::error;
use std::fmt;

/// Fewest vertices in a polygon
pub const MIN_VERTICES: usize = 4;
/// Most vertices in a polygon
pub const MAX_VERTICES: usize = 50;

/// Vertex list, stored inline up to [`MAX_VERTICES`]
pub type Vertices = SmallVec<[Point; MAX_VERTICES]>;

/// Structural problems with a polygon's vertex list
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum PolygonError {
    /// Fewer than four vertices
    VertexCountTooLow { count: usize },
    /// More than fifty vertices
    VertexCountTooHigh { count: usize },
    /// Vertices do not form pairs
    VertexCountUneven { count: usize },
    /// The two vertices of pair `pair` sit on different rows
    VerticesMisaligned { pair: usize },
    /// Pair `pair` sits above the pair before it
    VerticesBacktracked { pair: usize },
    /// Pair `pair` is too many rows below the pair before it
    VerticesTooFarApart { pair: usize, delta: i32 },
}

impl fmt::Display for PolygonError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            PolygonError::VertexCountTooLow { count } =>
                write!(f, "polygon has {} vertices, needs at least {}", count, MIN_VERTICES),
            PolygonError::VertexCountTooHigh { count } =>
                write!(f, "polygon has {} vertices, allows at most {}", count, MAX_VERTICES),
            PolygonError::VertexCountUneven { count } =>
                write!(f, "polygon has an odd number of vertices ({})", count),
            PolygonError::VerticesMisaligned { pair } =>
                write!(f, "vertex pair {} is not on a single row", pair),
            PolygonError::VerticesBacktracked { pair } =>
                write!(f, "vertex pair {} is above the previous pair", pair),
            PolygonError::VerticesTooFarApart { pair, delta } =>
                write!(f, "vertex pair {} is {} rows below the previous pair, at most {} allowed",
                       pair, delta, MAX_VERTICAL_SPAN),
        }
    }
}

impl error::Error for PolygonError {}

/// Scaled, positioned polygon ready for rasterization
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct Polygon {
    pub draw_mode: DrawMode,
    pub bounds: BoundingBox,
    pub vertices: Vertices,
}

impl Polygon {
    /// Create a polygon, checking its vertex layout
    ///
    ///     use polyfill::{BoundingBox,DrawMode,Point,Polygon,PolygonError};
    ///
    ///     let square = Polygon::new(DrawMode::SolidColor(1),
    ///                               BoundingBox::new(0, 0, 3, 3),
    ///                               vec![Point::new(0,0), Point::new(0,3),
    ///                                    Point::new(3,3), Point::new(3,0)]);
    ///     assert!(square.is_ok());
    ///
    ///     let bad = Polygon::new(DrawMode::SolidColor(1),
    ///                            BoundingBox::new(0, 0, 3, 3),
    ///                            vec![Point::new(0,0), Point::new(3,0)]);
    ///     assert_eq!(bad, Err(PolygonError::VertexCountTooLow { count: 2 }));
    ///
    pub fn new<V: Into<Vertices>>(draw_mode: DrawMode, bounds: BoundingBox, vertices: V) -> Result<Self, PolygonError> {
        let poly = Polygon { draw_mode, bounds, vertices: vertices.into() };
        poly.validate()?;
        Ok(poly)
    }
    /// Check the vertex count and the pairing of vertices
    pub fn validate(&self) -> Result<(), PolygonError> {
        let count = self.vertices.len();
        if count < MIN_VERTICES {
            return Err(PolygonError::VertexCountTooLow { count });
        }
        if count > MAX_VERTICES {
            return Err(PolygonError::VertexCountTooHigh { count });
        }
        if count % 2 != 0 {
            return Err(PolygonError::VertexCountUneven { count });
        }
        let mut previous_y = None;
        for (pair, (cw, ccw)) in self.pairs().enumerate() {
            if cw.y != ccw.y {
                return Err(PolygonError::VerticesMisaligned { pair });
            }
            if let Some(prev) = previous_y {
                let delta = i32::from(cw.y) - i32::from(prev);
                if delta < 0 {
                    return Err(PolygonError::VerticesBacktracked { pair });
                }
                if delta > MAX_VERTICAL_SPAN as i32 {
                    return Err(PolygonError::VerticesTooFarApart { pair, delta });
                }
            }
            previous_y = Some(cw.y);
        }
        Ok(())
    }
    /// Vertex pairs from the top of the polygon down
    ///
    /// Each item is the clockwise vertex and its mirrored counterclockwise
    /// partner.
    pub fn pairs(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0 .. n / 2).map(move |i| (self.vertices[i], self.vertices[n - 1 - i]))
    }
    /// True for a four vertex polygon inside a single pixel
    pub fn is_dot(&self) -> bool {
        self.vertices.len() == MIN_VERTICES && self.bounds.is_unit()
    }
}
