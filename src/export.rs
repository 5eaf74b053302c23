//! Writing of indexed buffers to image files
//!
//! Palettes belong to the host; these helpers only expand indices through
//! whatever palette they are handed, for inspecting rendered scenes.

use crate::buffer::IndexedBuffer;

use image::ImageError;
use image::Rgb;
use image::RgbImage;
use log::debug;

use std::path::Path;

/// Sixteen evenly spaced grays, index 0 black
pub fn grayscale_palette() -> Vec<[u8; 3]> {
    (0 .. 16u8).map(|i| [i * 17; 3]).collect()
}

/// Expand `buf` through `palette`; indices past the palette become black
pub fn to_rgb_image(buf: &IndexedBuffer, palette: &[[u8; 3]]) -> RgbImage {
    RgbImage::from_fn(buf.width() as u32, buf.height() as u32, |x, y| {
        let index = usize::from(buf[(x as usize, y as usize)]);
        Rgb(palette.get(index).copied().unwrap_or([0, 0, 0]))
    })
}

/// Save `buf` through `palette`; the format follows the file extension
pub fn write_file<P: AsRef<Path>>(buf: &IndexedBuffer, palette: &[[u8; 3]], filename: P) -> Result<(), ImageError> {
    to_rgb_image(buf, palette).save(filename)
}

/// Read an image as RGB bytes with its width and height
pub fn read_file<P: AsRef<Path>>(filename: P) -> Result<(Vec<u8>,usize,usize), ImageError> {
    let img = image::open(filename)?.to_rgb8();
    let (w, h) = img.dimensions();
    Ok((img.into_raw(), w as usize, h as usize))
}

/// True if both images have the same size and pixels
pub fn img_diff<P: AsRef<Path>>(f1: P, f2: P) -> Result<bool, ImageError> {
    let (d1,w1,h1) = read_file(f1)?;
    let (d2,w2,h2) = read_file(f2)?;
    if w1 != w2 || h1 != h2 {
        debug!("IMG_DIFF: sizes differ {}x{} {}x{}", w1, h1, w2, h2);
        return Ok(false);
    }
    let mut flag = true;
    for (i,(v1,v2)) in d1.iter().zip(d2.iter()).enumerate() {
        if v1 != v2 {
            debug!("IMG_DIFF: {} [{},{},{}]: {} {}", i, (i/3)%w1, (i/3)/w1, i%3, v1, v2);
            flag = false;
        }
    }
    Ok(flag)
}
