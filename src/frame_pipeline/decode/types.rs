//! Decoded frame types

/// A decoded grayscale frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageGrid {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Row-major pixel data, row 0 first, `width * height` samples
    pub data: Vec<u16>,
}

impl ImageGrid {
    /// Returns row `y` of the grid.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: usize) -> &[u16] {
        &self.data[y * self.width..(y + 1) * self.width]
    }

    /// Iterates over the rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[u16]> {
        self.data.chunks_exact(self.width)
    }
}
