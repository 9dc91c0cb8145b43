use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in pixel coordinates, top-left origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Region {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Region {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Smallest rectangle enclosing every point, `None` for an empty set.
    pub fn bounding<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let mut points = points.into_iter();
        let (x0, y0) = points.next()?;
        let (mut min_x, mut min_y, mut max_x, mut max_y) = (x0, y0, x0, y0);

        for (x, y) in points {
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }

        Some(Self::new(min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
    }

    pub fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.width)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.height)
    }

    /// True when both sides reach the given minimums.
    pub fn meets_minimum(&self, min_width: u32, min_height: u32) -> bool {
        self.width >= min_width && self.height >= min_height
    }

    /// Intersect with a `width` x `height` canvas. `None` if nothing is left.
    pub fn clamp_to(&self, width: u32, height: u32) -> Option<Self> {
        if self.x >= width || self.y >= height {
            return None;
        }

        let clamped = Self::new(
            self.x,
            self.y,
            self.right().min(width) - self.x,
            self.bottom().min(height) - self.y,
        );

        (clamped.width > 0 && clamped.height > 0).then_some(clamped)
    }
}
