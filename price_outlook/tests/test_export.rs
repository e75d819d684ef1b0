use approx::assert_relative_eq;
use price_outlook::{ImagePlacement, PageLayout};

#[test]
fn test_wide_image_fills_printable_width() {
    let layout = PageLayout::default();

    let placement = layout.place(1900, 1000).unwrap();

    assert_eq!((placement.x_mm, placement.y_mm), (10.0, 10.0));
    assert_relative_eq!(placement.width_mm, 190.0);
    assert_relative_eq!(placement.height_mm, 100.0, epsilon = 1e-9);
}

#[test]
fn test_tall_image_is_limited_by_height() {
    let layout = PageLayout::default();

    let placement = layout.place(1000, 5540).unwrap();

    assert_relative_eq!(placement.height_mm, 277.0);
    assert_relative_eq!(placement.width_mm, 50.0, epsilon = 1e-9);
    assert!(placement.width_mm <= layout.printable_width());
}

#[test]
fn test_zero_sized_image_is_not_placed() {
    let layout = PageLayout::default();

    assert_eq!(layout.place(0, 100), None);
    assert_eq!(layout.place(100, 0), None);
}

#[test]
fn test_one_image_per_page() {
    let layout = PageLayout {
        width_mm: 100.0,
        height_mm: 100.0,
        margin_mm: 0.0,
    };

    let pages = layout.paginate(&[(200, 100), (0, 50), (100, 200)]);

    assert_eq!(pages.len(), 2);
    assert_eq!(pages[0].page, 1);
    assert_eq!(
        pages[0].placement,
        ImagePlacement {
            x_mm: 0.0,
            y_mm: 0.0,
            width_mm: 100.0,
            height_mm: 50.0
        }
    );
    assert_eq!(pages[1].page, 2);
    assert_relative_eq!(pages[1].placement.width_mm, 50.0);
    assert_relative_eq!(pages[1].placement.height_mm, 100.0);
}
