#![allow(dead_code)]

//! Hand assembled polygon resources

use polyfill::{BoundingBox,DrawMode,IndexedBuffer,Point,Polygon,Vertices};

/// Lays out entries back to back, returning each entry's address
#[derive(Default)]
pub struct Resource {
    pub bytes: Vec<u8>,
}

/// Pointer record: target address, offset and optional raw override
pub struct Ptr {
    pub address: usize,
    pub dx: u8,
    pub dy: u8,
    pub mode: Option<u8>,
}

pub fn ptr(address: usize) -> Ptr {
    Ptr { address, dx: 0, dy: 0, mode: None }
}

impl Ptr {
    pub fn offset(mut self, dx: u8, dy: u8) -> Self {
        self.dx = dx;
        self.dy = dy;
        self
    }
    pub fn mode(mut self, raw: u8) -> Self {
        self.mode = Some(raw);
        self
    }
}

impl Resource {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn leaf(&mut self, mode: u8, w: u8, h: u8, verts: &[(u8,u8)]) -> usize {
        let at = self.bytes.len();
        self.bytes.extend_from_slice(&[0xC0 | mode, w, h, verts.len() as u8]);
        for &(x,y) in verts {
            self.bytes.extend_from_slice(&[x, y]);
        }
        at
    }
    /// Single pixel polygon
    pub fn dot(&mut self, mode: u8) -> usize {
        self.leaf(mode, 0, 0, &[(0,0); 4])
    }
    pub fn group(&mut self, dx: u8, dy: u8, ptrs: &[Ptr]) -> usize {
        let at = self.bytes.len();
        self.bytes.extend_from_slice(&[0x02, dx, dy, (ptrs.len() - 1) as u8]);
        for p in ptrs {
            self.pointer(p);
        }
        at
    }
    /// Group header whose pointers are patched in later with `patch_pointer`
    pub fn group_placeholder(&mut self, dx: u8, dy: u8, n: usize) -> usize {
        let at = self.bytes.len();
        self.bytes.extend_from_slice(&[0x02, dx, dy, (n - 1) as u8]);
        self.bytes.extend(std::iter::repeat(0).take(4 * n));
        at
    }
    /// Overwrite pointer `i` of a placeholder group; no override allowed
    pub fn patch_pointer(&mut self, group: usize, i: usize, target: usize) {
        let at = group + 4 + 4 * i;
        let word = (target / 2) as u16;
        self.bytes[at] = (word >> 8) as u8;
        self.bytes[at + 1] = word as u8;
    }
    fn pointer(&mut self, p: &Ptr) {
        assert_eq!(p.address % 2, 0);
        let mut word = (p.address / 2) as u16;
        if p.mode.is_some() {
            word |= 0x8000;
        }
        self.bytes.extend_from_slice(&[(word >> 8) as u8, word as u8, p.dx, p.dy]);
        if let Some(m) = p.mode {
            self.bytes.extend_from_slice(&[m, 0xEE]);
        }
    }
}

/// Polygon from integer vertices, bounds taken from the vertices
pub fn polygon(mode: DrawMode, verts: &[(i16,i16)]) -> Polygon {
    let vertices: Vertices = verts.iter().map(|&p| Point::from(p)).collect();
    let min_x = vertices.iter().map(|p| p.x).min().unwrap();
    let max_x = vertices.iter().map(|p| p.x).max().unwrap();
    let min_y = vertices.iter().map(|p| p.y).min().unwrap();
    let max_y = vertices.iter().map(|p| p.y).max().unwrap();
    Polygon { draw_mode: mode, bounds: BoundingBox::new(min_x, min_y, max_x, max_y), vertices }
}

/// Six vertex outline spanning rows 0 to 4
pub const HEXAGON: [(i16,i16); 6] = [(2,0), (0,2), (2,4), (3,4), (5,2), (3,0)];

pub fn rows(buf: &IndexedBuffer) -> Vec<Vec<u8>> {
    (0 .. buf.height()).map(|y| buf.row(y).to_vec()).collect()
}
