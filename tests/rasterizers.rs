mod common;

use common::{polygon, rows, HEXAGON};
use polyfill::{draw_polygon,BoundingBox,DrawMode,IndexedBuffer,Point,Polygon,RasterError,Vertices};

fn filled(w: usize, h: usize, index: u8) -> IndexedBuffer {
    let mut buf = IndexedBuffer::new(w, h);
    buf.fill(index);
    buf
}

#[test]
fn dot_writes_one_pixel() {
    let mut buf = IndexedBuffer::new(4, 4);
    let dot = Polygon::new(DrawMode::SolidColor(9), BoundingBox::new(1, 1, 1, 1),
                           vec![Point::new(1, 1); 4]).unwrap();
    assert!(dot.is_dot());
    draw_polygon(&mut buf, &dot, None).unwrap();
    for y in 0 .. 4 {
        for x in 0 .. 4 {
            let expected = if (x,y) == (1,1) { 9 } else { 0 };
            assert_eq!(buf[(x,y)], expected, "pixel {},{}", x, y);
        }
    }
}

#[test]
fn dot_matches_single_row_fill() {
    let mut a = IndexedBuffer::new(4, 4);
    let dot = Polygon::new(DrawMode::SolidColor(9), BoundingBox::new(1, 1, 1, 1),
                           vec![Point::new(1, 1); 4]).unwrap();
    draw_polygon(&mut a, &dot, None).unwrap();

    let mut b = IndexedBuffer::new(4, 4);
    let row = polygon(DrawMode::SolidColor(9), &[(1,1), (1,2), (1,2), (1,1)]);
    assert!(!row.is_dot());
    draw_polygon(&mut b, &row, None).unwrap();
    assert_eq!(a, b);
}

#[test]
fn hexagon() {
    let mut buf = IndexedBuffer::new(6, 6);
    draw_polygon(&mut buf, &polygon(DrawMode::SolidColor(1), &HEXAGON), None).unwrap();
    assert_eq!(rows(&buf), vec![
        vec![0, 0, 1, 1, 0, 0],
        vec![0, 1, 1, 1, 1, 0],
        vec![1, 1, 1, 1, 1, 1],
        vec![0, 1, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ]);
}

#[test]
fn slanted_edges_round_per_side() {
    let mut buf = IndexedBuffer::new(6, 6);
    let poly = polygon(DrawMode::SolidColor(1), &[(0,0), (3,5), (5,5), (1,0)]);
    draw_polygon(&mut buf, &poly, None).unwrap();
    assert_eq!(rows(&buf), vec![
        vec![1, 1, 0, 0, 0, 0],
        vec![0, 1, 1, 0, 0, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 0, 1, 1, 0, 0],
        vec![0, 0, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 0],
    ]);
}

#[test]
fn flat_edge_moves_to_next_vertex() {
    let mut buf = IndexedBuffer::new(6, 6);
    let poly = polygon(DrawMode::SolidColor(1),
                       &[(1,0), (1,2), (0,2), (0,4), (4,4), (4,2), (3,2), (3,0)]);
    assert_eq!(poly.validate(), Ok(()));
    draw_polygon(&mut buf, &poly, None).unwrap();
    assert_eq!(rows(&buf), vec![
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![1, 1, 1, 1, 1, 0],
        vec![1, 1, 1, 1, 1, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ]);
}

#[test]
fn clipped_to_buffer() {
    let mut buf = IndexedBuffer::new(4, 4);
    let poly = polygon(DrawMode::SolidColor(2), &[(-2,-2), (-2,2), (2,2), (2,-2)]);
    draw_polygon(&mut buf, &poly, None).unwrap();
    assert_eq!(rows(&buf), vec![
        vec![2, 2, 2, 0],
        vec![2, 2, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    // Runs off the bottom
    let mut buf = IndexedBuffer::new(6, 3);
    let poly = polygon(DrawMode::SolidColor(1), &[(1,0), (1,900), (3,900), (3,0)]);
    draw_polygon(&mut buf, &poly, None).unwrap();
    assert_eq!(rows(&buf), vec![vec![0, 1, 1, 1, 0, 0]; 3]);
}

#[test]
fn off_buffer_is_skipped() {
    let mut buf = IndexedBuffer::new(4, 4);
    // Vertices are never looked at once the bounds miss the buffer
    let poly = Polygon {
        draw_mode: DrawMode::SolidColor(3),
        bounds: BoundingBox::new(10, 10, 20, 20),
        vertices: Vertices::new(),
    };
    assert_eq!(draw_polygon(&mut buf, &poly, None), Ok(()));
    assert_eq!(buf, IndexedBuffer::new(4, 4));
}

#[test]
fn mask_copies_source() {
    let mut src = IndexedBuffer::new(6, 6);
    for y in 0 .. 6 {
        for x in 0 .. 6 {
            src.set(x, y, ((x + y * 6) % 16) as u8);
        }
    }
    let mut dst = filled(6, 6, 5);
    let poly = polygon(DrawMode::Mask, &HEXAGON);
    draw_polygon(&mut dst, &poly, Some(&src)).unwrap();

    let mut reference = IndexedBuffer::new(6, 6);
    draw_polygon(&mut reference, &polygon(DrawMode::SolidColor(1), &HEXAGON), None).unwrap();
    for y in 0 .. 6 {
        for x in 0 .. 6 {
            let expected = if reference[(x,y)] == 1 { src[(x,y)] } else { 5 };
            assert_eq!(dst[(x,y)], expected, "pixel {},{}", x, y);
        }
    }
}

#[test]
fn mask_needs_matching_source() {
    let mut dst = IndexedBuffer::new(6, 6);
    let poly = polygon(DrawMode::Mask, &HEXAGON);
    assert_eq!(draw_polygon(&mut dst, &poly, None), Err(RasterError::MaskSourceMissing));
    let small = IndexedBuffer::new(3, 6);
    assert_eq!(draw_polygon(&mut dst, &poly, Some(&small)),
               Err(RasterError::MaskSourceMismatch { expected: (6, 6), found: (3, 6) }));
}

#[test]
fn highlight_sets_upper_bit() {
    let poly = polygon(DrawMode::Highlight, &HEXAGON);
    let mut low = filled(6, 6, 3);
    draw_polygon(&mut low, &poly, None).unwrap();
    assert_eq!(low[(2,0)], 11);
    assert_eq!(low[(0,0)], 3);

    let mut high = filled(6, 6, 12);
    draw_polygon(&mut high, &poly, None).unwrap();
    assert_eq!(high, filled(6, 6, 12));
}

#[test]
fn too_few_vertices() {
    let mut buf = IndexedBuffer::new(4, 4);
    let poly = polygon(DrawMode::SolidColor(1), &[(0,0), (3,3)]);
    assert_eq!(draw_polygon(&mut buf, &poly, None),
               Err(RasterError::VertexCountTooLow { count: 2 }));
}

#[test]
fn edges_must_move_down() {
    let mut buf = IndexedBuffer::new(4, 4);
    let poly = polygon(DrawMode::SolidColor(1), &[(0,3), (0,0), (2,0), (2,3)]);
    assert_eq!(draw_polygon(&mut buf, &poly, None),
               Err(RasterError::InvalidVerticalDelta { delta: -3 }));
    let poly = polygon(DrawMode::SolidColor(1), &[(0,0), (0,1500), (2,1500), (2,0)]);
    assert_eq!(draw_polygon(&mut buf, &poly, None),
               Err(RasterError::InvalidVerticalDelta { delta: 1500 }));
}

#[test]
fn off_buffer_mask_needs_no_source() {
    let mut buf = IndexedBuffer::new(4, 4);
    let mut poly = polygon(DrawMode::Mask, &HEXAGON);
    poly.bounds = BoundingBox::new(-20, -20, -10, -10);
    assert_eq!(draw_polygon(&mut buf, &poly, None), Ok(()));
    assert_eq!(buf, IndexedBuffer::new(4, 4));
}

#[test]
fn rows_start_at_first_vertex() {
    let mut buf = IndexedBuffer::new(6, 6);
    let mut poly = polygon(DrawMode::SolidColor(1), &[(1,2), (1,4), (3,4), (3,2)]);
    poly.bounds = BoundingBox::new(0, 0, 5, 5);
    draw_polygon(&mut buf, &poly, None).unwrap();
    assert_eq!(rows(&buf), vec![
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 1, 1, 1, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
        vec![0, 0, 0, 0, 0, 0],
    ]);
}
