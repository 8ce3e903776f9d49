//! Shape adapters from icon geometry onto `imageproc` drawing calls
//!
//! Coordinates are pixel indices. Nothing is anti-aliased, so results are
//! exact and reproducible at every size.

use crate::geometry::Point;
use image::{Rgba, RgbaImage};
use imageproc::{
    drawing::{
        draw_filled_ellipse_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
    },
    point::Point as Vertex,
    rect::Rect,
};

/// Fill the ellipse inscribed in the box `[x0, y0, x1, y1]`
///
/// Parts of the box that fall outside the canvas are clipped.
pub fn fill_ellipse(canvas: &mut RgbaImage, bounds: [u32; 4], color: Rgba<u8>) {
    let [x0, y0, x1, y1] = bounds;
    if x1 < x0 || y1 < y0 {
        return;
    }

    let center = (((x0 + x1) / 2) as i32, ((y0 + y1) / 2) as i32);
    let width_radius = ((x1 - x0) / 2) as i32;
    let height_radius = ((y1 - y0) / 2) as i32;
    draw_filled_ellipse_mut(canvas, center, width_radius, height_radius, color);
}

/// Draw a straight segment of the given thickness with flat ends
///
/// The stroke is the quad spanned by offsetting both endpoints by half the
/// thickness along the segment's normal.
pub fn draw_thick_line(
    canvas: &mut RgbaImage,
    from: Point,
    to: Point,
    thickness: u32,
    color: Rgba<u8>,
) {
    if thickness == 0 {
        return;
    }

    let (ax, ay) = (from.0 as f32, from.1 as f32);
    let (bx, by) = (to.0 as f32, to.1 as f32);
    let half = thickness as f32 / 2.0;

    let dx = bx - ax;
    let dy = by - ay;
    let length = (dx * dx + dy * dy).sqrt();

    if length == 0.0 {
        let corner = |c: f32| (c - half).round() as i32;
        let dot = Rect::at(corner(ax), corner(ay)).of_size(thickness, thickness);
        draw_filled_rect_mut(canvas, dot, color);
        return;
    }

    let normal_x = (-dy / length * half).round() as i32;
    let normal_y = (dx / length * half).round() as i32;

    // Too thin for a quad: the offset corners would collapse
    if normal_x == 0 && normal_y == 0 {
        draw_line_segment_mut(canvas, (ax, ay), (bx, by), color);
        return;
    }

    let (ax, ay) = (from.0 as i32, from.1 as i32);
    let (bx, by) = (to.0 as i32, to.1 as i32);
    let quad = [
        Vertex::new(ax + normal_x, ay + normal_y),
        Vertex::new(bx + normal_x, by + normal_y),
        Vertex::new(bx - normal_x, by - normal_y),
        Vertex::new(ax - normal_x, ay - normal_y),
    ];
    draw_polygon_mut(canvas, &quad, color);
}

#[cfg(test)]
mod tests {
    use super::*;

    const CLEAR: Rgba<u8> = Rgba([0, 0, 0, 0]);
    const INK: Rgba<u8> = Rgba([10, 20, 30, 255]);

    #[test]
    fn test_ellipse_stays_inside_bounds() {
        let mut canvas = RgbaImage::new(16, 16);
        fill_ellipse(&mut canvas, [1, 1, 15, 15], INK);

        // Center and the middle of each edge of the box are painted
        assert_eq!(*canvas.get_pixel(8, 8), INK);
        assert_eq!(*canvas.get_pixel(1, 8), INK);
        assert_eq!(*canvas.get_pixel(15, 8), INK);
        assert_eq!(*canvas.get_pixel(8, 1), INK);
        assert_eq!(*canvas.get_pixel(8, 15), INK);

        // Box corners are outside the circle, the margin is never touched
        assert_eq!(*canvas.get_pixel(1, 1), CLEAR);
        assert_eq!(*canvas.get_pixel(15, 15), CLEAR);
        for i in 0..16 {
            assert_eq!(*canvas.get_pixel(0, i), CLEAR);
            assert_eq!(*canvas.get_pixel(i, 0), CLEAR);
        }
    }

    #[test]
    fn test_ellipse_clips_to_canvas() {
        let mut canvas = RgbaImage::new(8, 8);
        fill_ellipse(&mut canvas, [0, 0, 8, 8], INK);

        assert_eq!(*canvas.get_pixel(4, 4), INK);
        assert_eq!(*canvas.get_pixel(7, 4), INK);
    }

    #[test]
    fn test_ellipse_with_inverted_bounds_is_noop() {
        let mut canvas = RgbaImage::new(8, 8);
        fill_ellipse(&mut canvas, [6, 6, 2, 2], INK);

        assert!(canvas.pixels().all(|p| *p == CLEAR));
    }

    #[test]
    fn test_thick_diagonal_line() {
        let mut canvas = RgbaImage::new(16, 16);
        draw_thick_line(&mut canvas, (4, 4), (12, 12), 2, INK);

        // On the axis, end to end
        for i in 4..=12 {
            assert_eq!(*canvas.get_pixel(i, i), INK, "axis pixel {i}");
        }
        // Next to the axis
        assert_eq!(*canvas.get_pixel(9, 8), INK);
        assert_eq!(*canvas.get_pixel(8, 9), INK);
        // Well off the axis
        assert_eq!(*canvas.get_pixel(12, 8), CLEAR);
        assert_eq!(*canvas.get_pixel(4, 12), CLEAR);
        // Flat ends: nothing beyond the endpoints
        assert_eq!(*canvas.get_pixel(3, 3), CLEAR);
        assert_eq!(*canvas.get_pixel(13, 13), CLEAR);
    }

    #[test]
    fn test_thick_horizontal_line() {
        let mut canvas = RgbaImage::new(20, 20);
        draw_thick_line(&mut canvas, (2, 10), (17, 10), 4, INK);

        for x in 2..=17 {
            for y in 8..=12 {
                assert_eq!(*canvas.get_pixel(x, y), INK, "pixel ({x}, {y})");
            }
            assert_eq!(*canvas.get_pixel(x, 7), CLEAR);
            assert_eq!(*canvas.get_pixel(x, 13), CLEAR);
        }
        assert_eq!(*canvas.get_pixel(1, 10), CLEAR);
        assert_eq!(*canvas.get_pixel(18, 10), CLEAR);
    }

    #[test]
    fn test_degenerate_line_is_a_square_dot() {
        let mut canvas = RgbaImage::new(10, 10);
        draw_thick_line(&mut canvas, (5, 5), (5, 5), 2, INK);

        assert_eq!(*canvas.get_pixel(4, 4), INK);
        assert_eq!(*canvas.get_pixel(5, 5), INK);
        assert_eq!(*canvas.get_pixel(7, 5), CLEAR);
    }

    #[test]
    fn test_hairline_falls_back_to_segment() {
        let mut canvas = RgbaImage::new(10, 10);
        draw_thick_line(&mut canvas, (1, 1), (8, 8), 1, INK);

        assert_eq!(*canvas.get_pixel(1, 1), INK);
        assert_eq!(*canvas.get_pixel(5, 5), INK);
        assert_eq!(*canvas.get_pixel(8, 8), INK);
        assert_eq!(*canvas.get_pixel(8, 1), CLEAR);
    }

    #[test]
    fn test_line_near_edge_is_clipped() {
        let mut canvas = RgbaImage::new(10, 10);
        draw_thick_line(&mut canvas, (0, 0), (9, 0), 4, INK);

        assert_eq!(*canvas.get_pixel(0, 0), INK);
        assert_eq!(*canvas.get_pixel(9, 2), INK);
        assert_eq!(*canvas.get_pixel(5, 3), CLEAR);
    }
}
