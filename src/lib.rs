
//! Reader and rasterizer for recursive polygon resources
//!
//! How does this work
//!
//! ```text
//!    reader = PolygonReader( resource bytes )
//!    buf    = IndexedBuffer( width, height )
//!  Reader Operations
//!    iterate_polygons(address, origin, scale, visitor)
//!      walk()                 -- 'WALK: group', depth bounded
//!        read_header()
//!        read_group()
//!          read_pointer()     -- offset and draw mode override
//!            walk()
//!        read_polygon()       -- scaled, positioned, validated
//!          visitor(polygon)
//!  Raster Operations
//!    draw_polygon(buf, polygon, mask_source)
//!      is_dot()               -- 'DRAW_POLYGON: dot'
//!      edge_step()            -- SlopeTable reciprocal * dx
//!        SpanOp::apply()      -- solid, highlight or mask span
//!  Both at once
//!    draw_resource(reader, address, origin, scale, buf, mask_source)
//! ```
//!
//!     use polyfill::{draw_resource,IndexedBuffer,Point,PolygonReader};
//!
//!     // One polygon, color 5, a 4x4 square centered on the origin
//!     let data = [0xC5, 4, 4, 4, 0,0, 0,4, 4,4, 4,0];
//!     let mut buf = IndexedBuffer::new(8, 8);
//!     let n = draw_resource(&PolygonReader::new(&data), 0, Point::new(4, 4), 64,
//!                           &mut buf, None).unwrap();
//!     assert_eq!(n, 1);
//!     assert_eq!(buf.get(2, 2), Some(5));
//!     assert_eq!(buf.get(0, 0), Some(0));
//!

pub mod fixed;
pub mod slope;
pub mod geometry;
pub mod draw_mode;
pub mod polygon;
pub mod entry;
pub mod reader;
pub mod buffer;
pub mod raster;
pub mod render;
pub mod export;

pub use fixed::*;
pub use slope::*;
pub use geometry::*;
pub use draw_mode::*;
pub use polygon::*;
pub use entry::*;
pub use reader::*;
pub use buffer::*;
pub use raster::*;
pub use render::*;
pub use export::*;

use std::error;
use std::fmt;

/// Access to the raw bytes of a pixel surface
pub trait PixelData<'a> {
    fn pixeldata(&'a self) -> &'a [u8];
}

/// Any failure while reading or drawing a resource
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum Error {
    Parse(ParseError),
    Raster(RasterError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Parse(err) => write!(f, "reading polygon resource: {}", err),
            Error::Raster(err) => write!(f, "drawing polygon: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Parse(err) => Some(err),
            Error::Raster(err) => Some(err),
        }
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Error {
        Error::Parse(err)
    }
}

impl From<RasterError> for Error {
    fn from(err: RasterError) -> Error {
        Error::Raster(err)
    }
}
