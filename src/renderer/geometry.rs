//! Decomposition math for rounded rectangles and borders.
//!
//! A rounded rectangle is tiled by four quarter-disk arcs and five
//! axis-aligned fills; a border reuses the same layout with the strip
//! thickness decoupled from the corner radius. Everything here is pure so
//! the tiling invariants are unit-testable without a backend.

use crate::types::{BorderWidth, Rect, Vec2};

/// Corner index order used throughout: bottom-right, bottom-left, top-left,
/// top-right. Arcs sweep 90° starting at `90.0 * index` degrees, so index 0
/// covers the bottom-right quadrant.
pub const CORNER_COUNT: usize = 4;

/// Centers of the four corner arcs, in [`CORNER_COUNT`] order.
pub fn corner_centers(bounds: Rect, radius: f32) -> [Vec2; CORNER_COUNT] {
    [
        Vec2::new(
            bounds.x + bounds.width - radius,
            bounds.y + bounds.height - radius,
        ),
        Vec2::new(bounds.x + radius, bounds.y + bounds.height - radius),
        Vec2::new(bounds.x + radius, bounds.y + radius),
        Vec2::new(bounds.x + bounds.width - radius, bounds.y + radius),
    ]
}

/// The five fills that tile a rounded rectangle together with its corner
/// arcs: top, right, bottom, left strips (inset by `radius` at both ends
/// along the perimeter, `thickness` deep) and the inner rectangle.
///
/// With `thickness == radius` the strips meet the arcs exactly and the six
/// pieces cover the bounds with no gap or overlap. Borders pass a smaller
/// `thickness`, leaving the middle open.
pub fn edge_rects(bounds: Rect, radius: f32, thickness: f32) -> [Rect; 5] {
    [
        Rect::new(
            bounds.x + radius,
            bounds.y,
            bounds.width - 2.0 * radius,
            thickness,
        ),
        Rect::new(
            bounds.x + bounds.width - thickness,
            bounds.y + radius,
            thickness,
            bounds.height - 2.0 * radius,
        ),
        Rect::new(
            bounds.x + radius,
            bounds.y + bounds.height - thickness,
            bounds.width - 2.0 * radius,
            thickness,
        ),
        Rect::new(
            bounds.x,
            bounds.y + radius,
            thickness,
            bounds.height - 2.0 * radius,
        ),
        Rect::new(
            bounds.x + radius,
            bounds.y + radius,
            bounds.width - 2.0 * radius,
            bounds.height - 2.0 * radius,
        ),
    ]
}

/// Square corner fills of side `size`, in [`CORNER_COUNT`] order. Used for
/// the non-rounded border pass where the radius is already spent.
pub fn corner_squares(bounds: Rect, size: f32) -> [Rect; CORNER_COUNT] {
    [
        Rect::new(
            bounds.x + bounds.width - size,
            bounds.y + bounds.height - size,
            size,
            size,
        ),
        Rect::new(bounds.x, bounds.y + bounds.height - size, size, size),
        Rect::new(bounds.x, bounds.y, size, size),
        Rect::new(bounds.x + bounds.width - size, bounds.y, size, size),
    ]
}

/// Which corners a border draws, in [`CORNER_COUNT`] order. A corner is
/// enabled when either adjacent edge has nonzero width; corners are shared
/// between neighbors.
pub fn enabled_corners(width: &BorderWidth) -> [bool; CORNER_COUNT] {
    let mut corners = [false; CORNER_COUNT];

    if width.bottom != 0.0 {
        corners[0] = true;
        corners[1] = true;
    }
    if width.left != 0.0 {
        corners[1] = true;
        corners[2] = true;
    }
    if width.top != 0.0 {
        corners[2] = true;
        corners[3] = true;
    }
    if width.right != 0.0 {
        corners[3] = true;
        corners[0] = true;
    }

    corners
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect {
        x: 10.0,
        y: 20.0,
        width: 100.0,
        height: 60.0,
    };
    const RADIUS: f32 = 8.0;

    #[test]
    fn test_corner_centers_inset_by_radius() {
        let centers = corner_centers(BOUNDS, RADIUS);
        assert_eq!(centers[0], Vec2::new(102.0, 72.0)); // bottom-right
        assert_eq!(centers[1], Vec2::new(18.0, 72.0)); // bottom-left
        assert_eq!(centers[2], Vec2::new(18.0, 28.0)); // top-left
        assert_eq!(centers[3], Vec2::new(102.0, 28.0)); // top-right
    }

    #[test]
    fn test_rounded_rect_pieces_tile_exactly() {
        // Five rects plus four quarter disks must cover the bounds with no
        // overlap: the rect areas plus one full disk equal the area of the
        // bounds minus the four square corner cutouts' non-disk remainder.
        let rects = edge_rects(BOUNDS, RADIUS, RADIUS);

        let rect_area: f32 = rects.iter().map(Rect::area).sum();
        let disk_area = std::f32::consts::PI * RADIUS * RADIUS;
        let expected = BOUNDS.area() - (4.0 - std::f32::consts::PI) * RADIUS * RADIUS;
        assert!((rect_area + disk_area - expected).abs() < 1e-3);

        // No two fills overlap.
        for (i, a) in rects.iter().enumerate() {
            for b in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn test_arcs_confined_to_corner_squares() {
        // Every arc stays inside its corner's radius*radius square, which
        // the strip fills leave uncovered.
        let centers = corner_centers(BOUNDS, RADIUS);
        let squares = corner_squares(BOUNDS, RADIUS);
        let rects = edge_rects(BOUNDS, RADIUS, RADIUS);

        for (center, square) in centers.iter().zip(squares.iter()) {
            // The arc is bounded by the disk around its center.
            let disk = Rect::new(
                center.x - RADIUS,
                center.y - RADIUS,
                2.0 * RADIUS,
                2.0 * RADIUS,
            );
            assert!(disk.intersects(square));
            for rect in &rects {
                assert!(!square.intersects(rect), "{square:?} overlaps {rect:?}");
            }
        }
    }

    #[test]
    fn test_edge_rects_with_thinner_strips_leave_middle_open() {
        let rects = edge_rects(BOUNDS, RADIUS, 2.0);
        assert_eq!(rects[0].height, 2.0); // top
        assert_eq!(rects[1].width, 2.0); // right
        assert_eq!(rects[2].height, 2.0); // bottom
        assert_eq!(rects[3].width, 2.0); // left
        // Inner rect is still the radius inset, independent of thickness.
        assert_eq!(rects[4], Rect::new(18.0, 28.0, 84.0, 44.0));
    }

    #[test]
    fn test_single_edge_enables_its_two_corners() {
        let bottom_only = BorderWidth {
            bottom: 3.0,
            ..BorderWidth::default()
        };
        assert_eq!(enabled_corners(&bottom_only), [true, true, false, false]);

        let top_only = BorderWidth {
            top: 3.0,
            ..BorderWidth::default()
        };
        assert_eq!(enabled_corners(&top_only), [false, false, true, true]);

        let right_only = BorderWidth {
            right: 3.0,
            ..BorderWidth::default()
        };
        assert_eq!(enabled_corners(&right_only), [true, false, false, true]);
    }

    #[test]
    fn test_adjacent_edges_share_a_corner() {
        let width = BorderWidth {
            bottom: 3.0,
            left: 3.0,
            ..BorderWidth::default()
        };
        // Bottom-left is shared, not double-counted.
        assert_eq!(enabled_corners(&width), [true, true, true, false]);
    }

    #[test]
    fn test_no_edges_enable_no_corners() {
        assert_eq!(
            enabled_corners(&BorderWidth::default()),
            [false, false, false, false]
        );
    }
}
