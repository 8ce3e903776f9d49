//! Size-derived layout of the block icon
//!
//! Every measurement is obtained from the icon size with integer division,
//! so small icons get truncated values (a 16px icon has a 1px margin and a
//! 2px stroke).

/// A point in canvas pixel coordinates
pub type Point = (u32, u32);

/// Layout of the circle and the "X" for one icon size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGeometry {
    /// Width and height of the canvas in pixels
    pub size: u32,
    /// Inset between the canvas edge and the circle's bounding box
    pub margin: u32,
    /// Middle of the canvas; the "X" crosses here
    pub center: u32,
    /// Stroke thickness of both "X" segments
    pub line_width: u32,
    /// Lower coordinate shared by both segments
    pub start: u32,
    /// Upper coordinate shared by both segments
    pub end: u32,
}

impl IconGeometry {
    /// Derives the layout for a square icon of `size` pixels
    pub fn for_size(size: u32) -> Self {
        Self {
            size,
            margin: size / 16,
            center: size / 2,
            line_width: (size / 8).max(2),
            start: size / 4,
            end: size * 3 / 4,
        }
    }

    /// Bounding box of the filled circle as `[x0, y0, x1, y1]`
    pub fn circle_bounds(&self) -> [u32; 4] {
        let far = self.size - self.margin;
        [self.margin, self.margin, far, far]
    }

    /// The two segments forming the "X": falling diagonal first, then rising
    pub fn strokes(&self) -> [(Point, Point); 2] {
        [
            ((self.start, self.start), (self.end, self.end)),
            ((self.end, self.start), (self.start, self.end)),
        ]
    }
}
