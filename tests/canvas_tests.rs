//! Canvas tests - painting, erasing, bounding box and export text

use proptest::prelude::*;

use ascii_art::core::{Canvas, CellRect};
use ascii_art::types::{Glyph, GridPos, CANVAS_HEIGHT, CANVAS_WIDTH};

fn glyph(ch: char) -> Glyph {
    Glyph::from_char(ch).unwrap()
}

#[test]
fn test_canvas_defaults_to_500_square() {
    let canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    assert_eq!(canvas.width(), 500);
    assert_eq!(canvas.height(), 500);
    assert!(canvas.is_blank());
}

#[test]
fn test_export_single_cell() {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    canvas.paint(GridPos::new(10, 10), glyph('A'));

    let text = canvas.export_text().unwrap();
    assert_eq!(text, "A\n");
    assert_eq!(text.lines().count(), 1);
}

#[test]
fn test_export_two_corners_is_4x4_block() {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    canvas.paint(GridPos::new(2, 2), glyph('X'));
    canvas.paint(GridPos::new(5, 5), glyph('Y'));

    assert_eq!(
        canvas.bounding_box(),
        Some(CellRect {
            left: 2,
            top: 2,
            right: 5,
            bottom: 5
        })
    );

    let text = canvas.export_text().unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines, vec!["X   ", "    ", "    ", "   Y"]);
    assert!(text.ends_with('\n'));
}

#[test]
fn test_export_blank_canvas_is_nothing() {
    let canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    assert_eq!(canvas.export_text(), None);
}

#[test]
fn test_export_trims_outer_margins_only() {
    let mut canvas = Canvas::new(30, 30);
    canvas.paint(GridPos::new(10, 4), glyph('|'));
    canvas.paint(GridPos::new(12, 6), glyph('|'));
    canvas.paint(GridPos::new(11, 5), glyph('-'));
    assert_eq!(canvas.export_text().unwrap(), "|  \n - \n  |\n");
}

#[test]
fn test_canvas_edges_are_paintable() {
    let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
    assert!(canvas.paint(GridPos::new(0, 0), glyph('<')));
    assert!(canvas.paint(GridPos::new(499, 499), glyph('>')));
    assert!(!canvas.paint(GridPos::new(500, 499), glyph('>')));

    let text = canvas.export_text().unwrap();
    assert_eq!(text.lines().count(), 500);
    assert!(text.lines().all(|l| l.len() == 500));
}

proptest! {
    /// Property: painting then erasing any valid cell leaves it EMPTY
    #[test]
    fn prop_paint_then_erase_restores_empty(
        x in 0i64..CANVAS_WIDTH as i64,
        y in 0i64..CANVAS_HEIGHT as i64,
        index in 0usize..Glyph::COUNT,
    ) {
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        let pos = GridPos::new(x, y);
        prop_assert!(canvas.paint(pos, Glyph::from_index(index)));
        prop_assert_eq!(canvas.get(pos), Some(Some(Glyph::from_index(index))));
        prop_assert!(canvas.erase(pos));
        prop_assert_eq!(canvas.get(pos), Some(None));
        prop_assert!(canvas.is_blank());
    }

    /// Property: out-of-range targets never mutate the canvas
    #[test]
    fn prop_out_of_range_paint_is_ignored(
        x in prop_oneof![-10_000i64..0, 500i64..10_000],
        y in -10_000i64..10_000,
    ) {
        let mut canvas = Canvas::new(CANVAS_WIDTH, CANVAS_HEIGHT);
        prop_assert!(!canvas.paint(GridPos::new(x, y), Glyph::from_index(0)));
        prop_assert!(!canvas.paint(GridPos::new(y, x), Glyph::from_index(0)));
        prop_assert!(canvas.is_blank());
    }

    /// Property: export dimensions equal the bounding box
    #[test]
    fn prop_export_matches_bounding_box(
        cells in prop::collection::vec((0i64..40, 0i64..40), 1..20),
    ) {
        let mut canvas = Canvas::new(40, 40);
        for &(x, y) in &cells {
            canvas.paint(GridPos::new(x, y), Glyph::from_index((x + y) as usize));
        }
        let rect = canvas.bounding_box().unwrap();
        let text = canvas.export_text().unwrap();
        prop_assert_eq!(text.lines().count(), rect.height());
        prop_assert!(text.lines().all(|l| l.chars().count() == rect.width()));
        prop_assert_eq!(rect.left as i64, cells.iter().map(|c| c.0).min().unwrap());
        prop_assert_eq!(rect.bottom as i64, cells.iter().map(|c| c.1).max().unwrap());
    }
}
