use assert_approx_eq::assert_approx_eq;
use hexgrid::{Hex, Layout, LayoutConfig, Orientation, OrientationKind, Point};

/// All cells within a few steps of the origin, plus a couple far-flung ones
fn sample_cells() -> Vec<Hex> {
    let mut cells = Vec::new();
    for q in -6..=6 {
        for r in -6..=6 {
            cells.push(Hex::new(q, r));
        }
    }
    cells.push(Hex::new(1000, -250));
    cells.push(Hex::new(-731, 2048));
    cells
}

fn layouts() -> Vec<Layout> {
    vec![
        Layout::new(
            Orientation::pointy(),
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
        )
        .unwrap(),
        Layout::new(
            Orientation::flat(),
            Point::new(10.0, 10.0),
            Point::new(0.0, 0.0),
        )
        .unwrap(),
        Layout::new(
            Orientation::pointy(),
            Point::new(32.0, 18.0),
            Point::new(640.0, 360.0),
        )
        .unwrap(),
        Layout::new(
            Orientation::flat(),
            Point::new(-7.5, 12.25),
            Point::new(-3.0, 99.0),
        )
        .unwrap(),
    ]
}

#[test]
fn test_pixel_round_trip() {
    for layout in layouts() {
        for hex in sample_cells() {
            let pixel = layout.hex_to_pixel(hex);
            assert_eq!(
                layout.pixel_to_hex(pixel).round(),
                hex,
                "round trip failed for {} via {} in {:?}",
                hex,
                pixel,
                layout
            );
            assert_eq!(layout.hex_at(pixel).unwrap(), hex);
        }
    }
}

#[test]
fn test_fractional_round_trip() {
    for layout in layouts() {
        for hex in sample_cells() {
            let fractional = layout.pixel_to_hex(layout.hex_to_pixel(hex));
            assert_approx_eq!(fractional.q(), hex.q() as f64, 1e-6);
            assert_approx_eq!(fractional.r(), hex.r() as f64, 1e-6);
            assert_approx_eq!(fractional.s(), hex.s() as f64, 1e-6);
        }
    }
}

#[test]
fn test_polygon_corners_on_ellipse() {
    for layout in layouts() {
        let size = layout.size();
        for hex in sample_cells() {
            let center = layout.hex_to_pixel(hex);
            let corners = layout.polygon_corners(hex);
            assert_eq!(corners.len(), 6);
            for corner in corners.iter() {
                let offset = *corner - center;
                // Each corner is on the ellipse with radii size.x and size.y.
                // When the two are equal, that's just a circle of radius size
                let normalized = (offset.x / size.x).powi(2)
                    + (offset.y / size.y).powi(2);
                assert_approx_eq!(normalized, 1.0, 1e-6);
            }
        }
    }
}

#[test]
fn test_adjacent_cells_share_corners() {
    for kind in [OrientationKind::Pointy, OrientationKind::Flat].iter() {
        let layout = Layout::from_config(LayoutConfig {
            orientation: *kind,
            size: Point::new(10.0, 10.0),
            origin: Point::new(0.0, 0.0),
        })
        .unwrap();
        let corners = layout.polygon_corners(Hex::ORIGIN);
        for neighbor in Hex::ORIGIN.neighbors() {
            // Contiguous tiling means each neighbor touches exactly 2 of our
            // corners
            let shared = layout
                .polygon_corners(neighbor)
                .iter()
                .filter(|theirs| {
                    corners.iter().any(|ours| {
                        (ours.x - theirs.x).abs() < 1e-6
                            && (ours.y - theirs.y).abs() < 1e-6
                    })
                })
                .count();
            assert_eq!(shared, 2, "{:?} neighbor {}", kind, neighbor);
        }
    }
}

#[test]
fn test_line_through_pixels() {
    // Draw a line in hex space, then make sure each cell center maps back to
    // the same cell
    let layout = Layout::new(
        Orientation::flat(),
        Point::new(16.0, 16.0),
        Point::new(0.0, 0.0),
    )
    .unwrap();
    let start = Hex::new(-4, 1);
    let end = Hex::new(5, -2);
    let line: Vec<Hex> = start.line_to(end).collect();
    assert_eq!(line.len(), start.distance_to(end) as usize + 1);
    for cell in line {
        assert_eq!(layout.hex_at(layout.hex_to_pixel(cell)).unwrap(), cell);
    }
}

#[test]
fn test_far_pixels() {
    // Anything hex_at hands back has to be a real cell, no matter how far out
    // the pixel is
    let coords = [0.0, 1.0, -37.5, 1e6, -1e9, 5e9, -5e9, 1e18, f64::MAX];
    for layout in layouts() {
        for x in coords.iter() {
            for y in coords.iter() {
                let point = Point::new(*x, *y);
                if let Ok(hex) = layout.hex_at(point) {
                    let sum = i64::from(hex.q())
                        + i64::from(hex.r())
                        + i64::from(hex.s());
                    assert_eq!(sum, 0, "{} from {}", hex, point);
                    assert!(
                        hex.length() <= Hex::MAX_COMPONENT as u32,
                        "{} from {}",
                        hex,
                        point
                    );
                }
            }
        }
        assert!(layout.hex_at(Point::new(-5e12, 0.0)).is_err());
    }
}

#[test]
fn test_zero_size_rejected() {
    let size = Point::new(0.0, 10.0);
    assert!(Layout::new(Orientation::pointy(), size, Point::new(0.0, 0.0))
        .is_err());
    assert!(Layout::from_config(LayoutConfig {
        size,
        ..Default::default()
    })
    .is_err());
}
