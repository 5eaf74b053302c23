//! Rendering whole resources

use crate::buffer::IndexedBuffer;
use crate::geometry::Point;
use crate::raster::draw_polygon;
use crate::reader::PolygonReader;
use crate::Error;

use log::debug;

/// Walk a resource from `address` and fill every polygon into `dst`
///
/// Returns the number of polygons drawn. On error, polygons drawn before
/// the failure stay in `dst`.
pub fn draw_resource(reader: &PolygonReader, address: usize, origin: Point, scale: u16,
                     dst: &mut IndexedBuffer, mask_source: Option<&IndexedBuffer>) -> Result<usize, Error> {
    let mut drawn = 0;
    let result = reader.iterate_polygons(address, origin, scale, |poly| -> Result<(), Error> {
        draw_polygon(dst, &poly, mask_source)?;
        drawn += 1;
        Ok(())
    });
    if let Err(ref err) = result {
        debug!("DRAW_RESOURCE: {:#06x} stopped after {} polygons: {}", address, drawn, err);
    }
    result.map(|_| drawn)
}
