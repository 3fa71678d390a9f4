/// Marks one half of a sample interval divided at a day boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Split {
    /// Half in the earlier day; its sibling follows it.
    First,
    /// Half in the next day; its sibling precedes it.
    Second,
}

impl Split {
    /// `+1` for the first half, `-1` for the second: the index offset of the sibling.
    pub fn sign(self) -> isize {
        match self {
            Self::First => 1,
            Self::Second => -1,
        }
    }
}

/// A rectangle representing one sample, in day-column x time-of-day coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    /// Sample timestamp, seconds since epoch.
    pub time: i64,
    pub value: f64,
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub split: Option<Split>,
}

impl Cell {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Index of the other half of a split pair, given this cell's index.
    pub fn sibling_index(&self, index: usize) -> Option<usize> {
        let split = self.split?;
        index.checked_add_signed(split.sign())
    }

    /// Snaps a normalized cell onto a pixel grid of `width` x `height`.
    ///
    /// Every edge is floored on its own so that two cells sharing an edge in
    /// normalized space share it exactly in pixels.
    pub fn pixel_rect(&self, width: f32, height: f32) -> PixelRect {
        let x0 = (self.left as f32 * width).floor();
        let x1 = (self.right as f32 * width).floor();
        let y0 = (self.top as f32 * height).floor();
        let y1 = (self.bottom as f32 * height).floor();
        PixelRect {
            x: x0,
            y: y0,
            width: x1 - x0,
            height: y1 - y0,
        }
    }
}

/// Integer-aligned rectangle in plot pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PixelRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl PixelRect {
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(top: f64, bottom: f64, split: Option<Split>) -> Cell {
        Cell {
            time: 0,
            value: 1.0,
            left: 0.25,
            top,
            right: 0.5,
            bottom,
            split,
        }
    }

    #[test]
    fn test_sibling_index() {
        assert_eq!(cell(0.0, 0.1, None).sibling_index(3), None);
        assert_eq!(cell(0.9, 1.0, Some(Split::First)).sibling_index(3), Some(4));
        assert_eq!(cell(0.0, 0.1, Some(Split::Second)).sibling_index(4), Some(3));
        assert_eq!(cell(0.0, 0.1, Some(Split::Second)).sibling_index(0), None);
    }

    #[test]
    fn test_pixel_rect_shares_edges() {
        let a = cell(0.1, 0.37, None);
        let b = cell(0.37, 0.61, None);
        let ra = a.pixel_rect(333.0, 217.0);
        let rb = b.pixel_rect(333.0, 217.0);
        assert_eq!(ra.bottom(), rb.y);
        assert_eq!(ra.x, 83.0);
        assert_eq!(ra.width, 166.0 - 83.0);
    }

    #[test]
    fn test_contains() {
        let r = PixelRect {
            x: 10.0,
            y: 10.0,
            width: 5.0,
            height: 5.0,
        };
        assert!(r.contains(10.0, 14.9));
        assert!(!r.contains(15.0, 12.0));
    }
}
