//! Indexed color buffer

use crate::geometry::BoundingBox;
use crate::PixelData;

use std::ops::Index;
use std::ops::IndexMut;

/// Indexed Color Buffer
///
/// One byte per pixel holding a palette index. Data is stored in row-major
/// order (C-format).
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct IndexedBuffer {
    /// Palette index of every pixel
    data: Vec<u8>,
    /// Image Width in pixels
    width: usize,
    /// Image Height in pixels
    height: usize,
}

impl IndexedBuffer {
    /// Create a new buffer of width and height, filled with index 0
    ///
    /// Panics if either dimension is 0 or does not fit screen coordinates
    pub fn new(width: usize, height: usize) -> Self {
        Self::check_size(width, height);
        IndexedBuffer { width, height, data: vec![0u8; width * height] }
    }
    /// Wrap existing pixel data
    ///
    /// Returns `None` if `data` does not hold exactly `width * height` pixels
    pub fn from_vec(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        Self::check_size(width, height);
        if data.len() != width * height {
            return None;
        }
        Some(IndexedBuffer { width, height, data })
    }
    fn check_size(width: usize, height: usize) {
        if width == 0 || height == 0 {
            panic!("Cannot create buffer with 0 width or height");
        }
        if width > i16::MAX as usize || height > i16::MAX as usize {
            panic!("Cannot create buffer larger than {} pixels on a side", i16::MAX);
        }
    }
    pub fn width(&self) -> usize {
        self.width
    }
    pub fn height(&self) -> usize {
        self.height
    }
    /// Size of underlying buffer
    pub fn len(&self) -> usize {
        self.data.len()
    }
    /// Rectangle covered by the buffer
    pub fn bounds(&self) -> BoundingBox {
        BoundingBox::of_size(self.width, self.height)
    }
    /// True if both buffers have the same dimensions
    pub fn same_size(&self, other: &IndexedBuffer) -> bool {
        self.width == other.width && self.height == other.height
    }
    /// Set every pixel to `index`
    pub fn fill(&mut self, index: u8) {
        self.data.iter_mut().for_each(|v| *v = index);
    }
    /// Copy all pixels of a buffer with the same dimensions
    ///
    /// Returns false, leaving this buffer untouched, if the sizes differ
    pub fn copy_from(&mut self, other: &IndexedBuffer) -> bool {
        if !self.same_size(other) {
            return false;
        }
        self.data.copy_from_slice(&other.data);
        true
    }
    /// Pixel at (`x`,`y`), `None` outside the buffer
    ///
    ///     use polyfill::IndexedBuffer;
    ///
    ///     let mut buf = IndexedBuffer::new(2, 2);
    ///     buf.set(1, 0, 7);
    ///     buf.set(5, 5, 7); // Ignored, outside of range
    ///     assert_eq!(buf.get(1, 0), Some(7));
    ///     assert_eq!(buf.get(0, 0), Some(0));
    ///     assert_eq!(buf.get(2, 0), None);
    ///
    pub fn get(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y * self.width + x])
    }
    /// Set the pixel at (`x`,`y`); locations outside the buffer are ignored
    pub fn set(&mut self, x: usize, y: usize, index: u8) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = index;
    }
    /// Pixels of row `y`
    pub fn row(&self, y: usize) -> &[u8] {
        debug_assert!(y < self.height);
        let start = y * self.width;
        &self.data[start .. start + self.width]
    }
    /// Mutable pixels of row `y`
    pub fn row_mut(&mut self, y: usize) -> &mut [u8] {
        debug_assert!(y < self.height);
        let start = y * self.width;
        &mut self.data[start .. start + self.width]
    }
    /// Consume the buffer, returning its pixels
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }
}

impl<'a> PixelData<'a> for IndexedBuffer {
    fn pixeldata(&'a self) -> &'a [u8] {
        &self.data
    }
}

impl Index<(usize,usize)> for IndexedBuffer {
    type Output = u8;
    fn index(&self, index: (usize, usize)) -> &u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index", index.1, self.height);
        &self.data[index.1 * self.width + index.0]
    }
}
impl IndexMut<(usize,usize)> for IndexedBuffer {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut u8 {
        assert!(index.0 < self.width, "request {} >= {} width :: index_mut", index.0, self.width);
        assert!(index.1 < self.height, "request {} >= {} height :: index_mut", index.1, self.height);
        &mut self.data[index.1 * self.width + index.0]
    }
}
