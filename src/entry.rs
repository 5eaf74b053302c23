//! Polygon resource entries
//!
//! Layout of an entry, all multi-byte fields big-endian:
//!
//! ```text
//!     header   1 byte   0b11mmmmmm  polygon with draw mode m
//!                       0bxx000010  group
//!     polygon  width, height, count, count x (dx, dy)
//!     group    dx, dy, count - 1, count x pointer
//!     pointer  control word (override flag << 15 | address / 2), dx, dy,
//!              [override draw mode, padding]    when the flag is set
//! ```
//!
//! Every width, height and offset byte is scaled before use.

use crate::draw_mode::DrawMode;
use crate::geometry::BoundingBox;
use crate::geometry::Point;
use crate::polygon::Polygon;
use crate::polygon::PolygonError;
use crate::polygon::Vertices;

use byteorder::BigEndian;
use byteorder::ReadBytesExt;

use std::error;
use std::fmt;
use std::io::Cursor;

/// Header bits marking a polygon entry
const POLYGON_FLAG: u8 = 0xC0;
/// Bits of a header or override byte holding the draw mode
const DRAW_MODE_BITS: u8 = 0x3F;
/// Header value, after masking, of a group entry
const GROUP_SENTINEL: u8 = 0x02;
/// Control word bit marking a draw mode override
const OVERRIDE_FLAG: u16 = 0x8000;
/// Reserved bit of an override byte
const OVERRIDE_RESERVED: u8 = 0x80;

/// Scale value treated as 1x by the original resources
pub const DEFAULT_BASE_SCALE: u16 = 64;

/// Problems found while reading a polygon resource
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum ParseError {
    /// Entry address is past the end of the resource
    InvalidAddress { address: usize, len: usize },
    /// Header byte is neither a polygon nor a group
    UnrecognizedEntryHeader { address: usize, header: u8 },
    /// Groups nest deeper than the reader allows
    RecursionDepthExceeded { address: usize, depth: usize },
    /// Resource ends in the middle of a field
    UnexpectedEnd { address: usize },
    /// Polygon at `address` has an illegal vertex layout
    InvalidPolygon { address: usize, source: PolygonError },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::InvalidAddress { address, len } =>
                write!(f, "entry address {:#06x} outside resource of {} bytes", address, len),
            ParseError::UnrecognizedEntryHeader { address, header } =>
                write!(f, "unrecognized entry header {:#04x} at {:#06x}", header, address),
            ParseError::RecursionDepthExceeded { address, depth } =>
                write!(f, "group nesting reached depth {} at {:#06x}", depth, address),
            ParseError::UnexpectedEnd { address } =>
                write!(f, "resource ends while reading field at {:#06x}", address),
            ParseError::InvalidPolygon { address, ref source } =>
                write!(f, "polygon at {:#06x}: {}", address, source),
        }
    }
}

impl error::Error for ParseError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ParseError::InvalidPolygon { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Applies `raw * scale / base` to unscaled resource bytes
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct Scaler {
    scale: u16,
    base: u16,
}

impl Scaler {
    /// A `base` of zero is treated as one
    pub fn new(scale: u16, base: u16) -> Self {
        Scaler { scale, base: base.max(1) }
    }
    /// Scale a single byte; results past `i16::MAX` wrap
    ///
    ///     use polyfill::Scaler;
    ///
    ///     let s = Scaler::new(96, 64);
    ///     assert_eq!(s.apply(10), 15);
    ///     assert_eq!(Scaler::new(64, 64).apply(255), 255);
    ///
    pub fn apply(&self, raw: u8) -> i16 {
        (u32::from(raw) * u32::from(self.scale) / u32::from(self.base)) as i16
    }
    pub fn point(&self, dx: u8, dy: u8) -> Point {
        Point::new(self.apply(dx), self.apply(dy))
    }
}

/// Kind of entry introduced by a header byte
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub enum EntryHeader {
    /// Leaf polygon with its own draw mode
    Polygon(DrawMode),
    /// List of pointers to further entries
    Group,
}

impl EntryHeader {
    /// Decode a header byte read at `address`
    ///
    ///     use polyfill::{DrawMode,EntryHeader};
    ///
    ///     assert_eq!(EntryHeader::decode(0xC9, 0), Ok(EntryHeader::Polygon(DrawMode::SolidColor(9))));
    ///     assert_eq!(EntryHeader::decode(0x02, 0), Ok(EntryHeader::Group));
    ///     assert!(EntryHeader::decode(0x41, 0).is_err());
    ///
    pub fn decode(header: u8, address: usize) -> Result<Self, ParseError> {
        if header & POLYGON_FLAG == POLYGON_FLAG {
            Ok(EntryHeader::Polygon(DrawMode::from_raw(header & DRAW_MODE_BITS)))
        } else if header & DRAW_MODE_BITS == GROUP_SENTINEL {
            Ok(EntryHeader::Group)
        } else {
            Err(ParseError::UnrecognizedEntryHeader { address, header })
        }
    }
}

/// Group body preceding its pointers
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct GroupHeader {
    /// Subtracted from the parent origin
    pub offset: Point,
    /// Number of pointers that follow, `1 ..= 256`
    pub count: usize,
}

/// Reference from a group to another entry
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct EntryPointer {
    pub address: usize,
    /// Added to the group origin
    pub offset: Point,
    pub draw_mode: Option<DrawMode>,
}

/// Cursor reading entries out of a resource
pub struct EntryReader<'a> {
    cursor: Cursor<&'a [u8]>,
    scaler: Scaler,
}

impl<'a> EntryReader<'a> {
    /// Position a reader at `address`
    pub fn at(data: &'a [u8], address: usize, scaler: Scaler) -> Result<Self, ParseError> {
        if address >= data.len() {
            return Err(ParseError::InvalidAddress { address, len: data.len() });
        }
        let mut cursor = Cursor::new(data);
        cursor.set_position(address as u64);
        Ok(EntryReader { cursor, scaler })
    }
    /// Offset of the next byte to be read
    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }
    fn byte(&mut self) -> Result<u8, ParseError> {
        let address = self.position();
        self.cursor.read_u8()
            .map_err(|_| ParseError::UnexpectedEnd { address })
    }
    fn word(&mut self) -> Result<u16, ParseError> {
        let address = self.position();
        self.cursor.read_u16::<BigEndian>()
            .map_err(|_| ParseError::UnexpectedEnd { address })
    }
    fn scaled_point(&mut self) -> Result<Point, ParseError> {
        let dx = self.byte()?;
        let dy = self.byte()?;
        Ok(self.scaler.point(dx, dy))
    }
    pub fn read_header(&mut self) -> Result<EntryHeader, ParseError> {
        let address = self.position();
        let header = self.byte()?;
        EntryHeader::decode(header, address)
    }
    /// Read a polygon body centered on `origin`
    ///
    /// Vertices are offsets from the top left of the scaled bounding box.
    /// The vertex layout is validated once all vertices are read; only an
    /// oversized, and so rejected, vertex list leaves inline storage.
    pub fn read_polygon(&mut self, origin: Point, draw_mode: DrawMode) -> Result<Polygon, ParseError> {
        let address = self.position();
        let size = self.scaled_point()?;
        let count = usize::from(self.byte()?);
        let bounds = BoundingBox::centered(origin, size.x, size.y);
        let top_left = bounds.origin();
        let mut vertices = Vertices::new();
        for _ in 0 .. count {
            vertices.push(top_left.offset_by(self.scaled_point()?));
        }
        let poly = Polygon { draw_mode, bounds, vertices };
        poly.validate()
            .map_err(|source| ParseError::InvalidPolygon { address, source })?;
        Ok(poly)
    }
    pub fn read_group(&mut self) -> Result<GroupHeader, ParseError> {
        let offset = self.scaled_point()?;
        let count = usize::from(self.byte()?) + 1;
        Ok(GroupHeader { offset, count })
    }
    pub fn read_pointer(&mut self) -> Result<EntryPointer, ParseError> {
        let control = self.word()?;
        let address = usize::from(control & !OVERRIDE_FLAG) * 2;
        let offset = self.scaled_point()?;
        let draw_mode = if control & OVERRIDE_FLAG != 0 {
            let mode = self.byte()? & !OVERRIDE_RESERVED;
            let _padding = self.byte()?;
            Some(DrawMode::from_raw(mode))
        } else {
            None
        };
        Ok(EntryPointer { address, offset, draw_mode })
    }
}
