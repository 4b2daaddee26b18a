/// One pixel of a decoded image.
///
/// Channels are full integers rather than bytes: the plain PPM decoder
/// accepts whatever values the stream holds, and the life rule only ever
/// compares the red channel against the literals 0 and 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    pub red: i32,
    pub green: i32,
    pub blue: i32,
}

impl Pixel {
    /// A pixel with all three channels set to `value`.
    #[inline]
    pub fn splat(value: i32) -> Self {
        Self {
            red: value,
            green: value,
            blue: value,
        }
    }
}

/// A rectangular pixel buffer with explicit dimensions.
///
/// Cells are stored row-major (`row * width + col`). A tolerant decode may
/// leave `cells.len() != width * height`, so every accessor checks the real
/// buffer length as well as the declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: usize,
    height: usize,
    cells: Vec<Pixel>,
}

impl Image {
    /// Creates an image of the given size with all channels zeroed.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![Pixel::default(); width * height],
        }
    }

    /// Wraps an already-read cell buffer. The length is *not* required to
    /// match `width * height`; accessors never read past the buffer.
    pub fn from_cells(width: usize, height: usize, cells: Vec<Pixel>) -> Self {
        debug_assert!(width > 0 && height > 0, "image dimensions must be positive");
        Self {
            width,
            height,
            cells,
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    #[inline]
    pub fn cells(&self) -> &[Pixel] {
        &self.cells
    }
    #[inline]
    pub fn cells_mut(&mut self) -> &mut [Pixel] {
        &mut self.cells
    }

    /// Whether the buffer holds exactly `width * height` pixels.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.cells.len() == self.width * self.height
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Pixel at `(row, col)`, or [`None`] when the coordinate is outside the
    /// declared dimensions or beyond the actual buffer.
    pub fn get(&self, row: usize, col: usize) -> Option<Pixel> {
        if row < self.height && col < self.width {
            self.cells.get(self.index(row, col)).copied()
        } else {
            None
        }
    }

    /// Mutable pixel at `(row, col)`, with the same bounds rules as [`get`].
    ///
    /// [`get`]: #method.get
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Pixel> {
        if row < self.height && col < self.width {
            let idx = self.index(row, col);
            self.cells.get_mut(idx)
        } else {
            None
        }
    }

    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        if let Some(cell) = self.get_mut(row, col) {
            *cell = pixel;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_uses_row_major_order() {
        let mut image = Image::new(3, 2);
        image.set(1, 2, Pixel::splat(7));

        assert_eq!(image.cells()[5], Pixel::splat(7));
        assert_eq!(image.get(1, 2), Some(Pixel::splat(7)));
    }

    #[test]
    fn get_out_of_bounds_is_none() {
        let image = Image::new(3, 2);

        assert_eq!(image.get(0, 3), None);
        assert_eq!(image.get(2, 0), None);
    }

    #[test]
    fn short_buffer_is_tolerated() {
        // 3x2 header but only 4 pixels decoded
        let image = Image::from_cells(3, 2, vec![Pixel::splat(1); 4]);

        assert!(!image.is_complete());
        assert_eq!(image.get(1, 0), Some(Pixel::splat(1)));
        assert_eq!(image.get(1, 1), None);
        assert_eq!(image.get(1, 2), None);
    }
}
