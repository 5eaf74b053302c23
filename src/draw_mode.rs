//! Pixel combination rules

/// Largest raw code that selects a solid palette index
const LAST_SOLID_CODE: u8 = 0x0F;
/// Raw code selecting the highlight ramp
const HIGHLIGHT_CODE: u8 = 0x10;

/// How a polygon's covered pixels are written
#[derive(Debug,Copy,Clone,PartialEq,Eq,Hash)]
pub enum DrawMode {
    /// Overwrite with a palette index in `0..16`
    SolidColor(u8),
    /// Force the upper half of the 16 color palette
    Highlight,
    /// Copy the pixel from a secondary buffer
    Mask,
}

impl DrawMode {
    /// Decode a raw draw mode code
    ///
    ///     use polyfill::DrawMode;
    ///
    ///     assert_eq!(DrawMode::from_raw(9), DrawMode::SolidColor(9));
    ///     assert_eq!(DrawMode::from_raw(16), DrawMode::Highlight);
    ///     assert_eq!(DrawMode::from_raw(17), DrawMode::Mask);
    ///     assert_eq!(DrawMode::from_raw(63), DrawMode::Mask);
    ///
    pub fn from_raw(code: u8) -> Self {
        match code {
            0 ..= LAST_SOLID_CODE => DrawMode::SolidColor(code),
            HIGHLIGHT_CODE => DrawMode::Highlight,
            _ => DrawMode::Mask,
        }
    }
    /// Raw code for this mode; masks encode as `0x11`
    pub fn to_raw(self) -> u8 {
        match self {
            DrawMode::SolidColor(c) => c & LAST_SOLID_CODE,
            DrawMode::Highlight => HIGHLIGHT_CODE,
            DrawMode::Mask => HIGHLIGHT_CODE + 1,
        }
    }
}
