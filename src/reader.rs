//! Recursive polygon resource walk
//!
//! Groups are resolved depth first. Each level composes its offset into the
//! origin handed down and may override the draw mode of everything below it.
//! Nothing is retained between levels; a bounded depth is the only guard
//! against pointer cycles.

use crate::draw_mode::DrawMode;
use crate::entry::EntryHeader;
use crate::entry::EntryReader;
use crate::entry::ParseError;
use crate::entry::Scaler;
use crate::entry::DEFAULT_BASE_SCALE;
use crate::geometry::Point;
use crate::polygon::Polygon;

use log::debug;
use log::trace;

/// Deepest group nesting followed by default
pub const MAX_RECURSION_DEPTH: usize = 10;

/// Reader settings
#[derive(Debug,Copy,Clone,PartialEq,Eq)]
pub struct ReaderOptions {
    /// Scale value meaning 1x
    pub base_scale: u16,
    /// Deepest group nesting followed before failing
    pub max_depth: usize,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        ReaderOptions { base_scale: DEFAULT_BASE_SCALE, max_depth: MAX_RECURSION_DEPTH }
    }
}

impl ReaderOptions {
    pub fn base_scale(mut self, base_scale: u16) -> Self {
        self.base_scale = base_scale;
        self
    }
    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Resolves polygon resources into positioned polygons
#[derive(Debug,Copy,Clone)]
pub struct PolygonReader<'a> {
    data: &'a [u8],
    options: ReaderOptions,
}

impl<'a> PolygonReader<'a> {
    /// Reader over decompressed resource bytes with default options
    pub fn new(data: &'a [u8]) -> Self {
        Self::with_options(data, ReaderOptions::default())
    }
    pub fn with_options(data: &'a [u8], options: ReaderOptions) -> Self {
        PolygonReader { data, options }
    }
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }
    /// Visit every polygon reachable from `address`
    ///
    /// Polygons are delivered in resource order, which is also their drawing
    /// order. The first error stops the walk; polygons visited before it are
    /// not taken back. Errors from `visitor` are returned unchanged.
    ///
    ///     use polyfill::{DrawMode,ParseError,Point,PolygonReader};
    ///
    ///     // A group at 0 holding one polygon at 10, drawn with color 3
    ///     let data = [0x02, 0, 0, 0,
    ///                 0x80, 0x05, 0, 0, 0x03, 0,
    ///                 0xC1, 2, 2, 4, 0, 0, 0, 2, 2, 2, 2, 0];
    ///     let mut modes = vec![];
    ///     PolygonReader::new(&data)
    ///         .iterate_polygons(0, Point::new(10, 10), 64, |p| -> Result<(), ParseError> {
    ///             modes.push(p.draw_mode);
    ///             Ok(())
    ///         })
    ///         .unwrap();
    ///     assert_eq!(modes, vec![DrawMode::SolidColor(3)]);
    ///
    pub fn iterate_polygons<E, F>(&self, address: usize, origin: Point, scale: u16, mut visitor: F) -> Result<(), E>
        where E: From<ParseError>,
              F: FnMut(Polygon) -> Result<(), E>
    {
        let scaler = Scaler::new(scale, self.options.base_scale);
        self.walk(address, origin, scaler, None, 0, &mut visitor)
    }

    fn walk<E, F>(&self, address: usize, origin: Point, scaler: Scaler,
                  inherited: Option<DrawMode>, depth: usize, visitor: &mut F) -> Result<(), E>
        where E: From<ParseError>,
              F: FnMut(Polygon) -> Result<(), E>
    {
        let mut entry = EntryReader::at(self.data, address, scaler)?;
        if depth > self.options.max_depth {
            debug!("WALK: giving up at {:#06x}, depth {}", address, depth);
            return Err(ParseError::RecursionDepthExceeded { address, depth }.into());
        }
        match entry.read_header()? {
            EntryHeader::Polygon(own) => {
                let mode = inherited.unwrap_or(own);
                trace!("WALK: polygon at {:#06x} origin {:?} mode {:?}", address, origin, mode);
                let poly = entry.read_polygon(origin, mode)?;
                visitor(poly)
            }
            EntryHeader::Group => {
                let group = entry.read_group()?;
                let group_origin = origin.offset_back(group.offset);
                trace!("WALK: group at {:#06x} origin {:?} entries {} depth {}",
                       address, group_origin, group.count, depth);
                for _ in 0 .. group.count {
                    let pointer = entry.read_pointer()?;
                    let entry_origin = group_origin.offset_by(pointer.offset);
                    let mode = pointer.draw_mode.or(inherited);
                    self.walk(pointer.address, entry_origin, scaler, mode, depth + 1, visitor)?;
                }
                Ok(())
            }
        }
    }
}

/// Visit every polygon reachable from `address` with default options
///
/// See [`PolygonReader::iterate_polygons`].
pub fn iterate_polygons<E, F>(data: &[u8], address: usize, origin: Point, scale: u16, visitor: F) -> Result<(), E>
    where E: From<ParseError>,
          F: FnMut(Polygon) -> Result<(), E>
{
    PolygonReader::new(data).iterate_polygons(address, origin, scale, visitor)
}

/// Gather every polygon reachable from `address`
pub fn collect_polygons(data: &[u8], address: usize, origin: Point, scale: u16) -> Result<Vec<Polygon>, ParseError> {
    let mut polys = vec![];
    iterate_polygons(data, address, origin, scale, |p| -> Result<(), ParseError> {
        polys.push(p);
        Ok(())
    })?;
    Ok(polys)
}
