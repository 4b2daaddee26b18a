mod rule;

use crate::image::{Image, Pixel};
use rayon::prelude::*;

/// One generation of the automaton.
///
/// Owns the working image and clones it into a frozen reference before each
/// step, so cell updates never read partially-written state.
#[derive(Debug)]
pub struct GameOfLife {
    image: Image,
}

impl GameOfLife {
    #[inline]
    pub fn from_image(image: Image) -> Self {
        Self { image }
    }

    pub fn next_generation(&mut self) {
        let reference = self.image.clone();
        step(&mut self.image, &reference);
    }

    pub fn next_generation_parallel(&mut self) {
        let reference = self.image.clone();
        step_parallel(&mut self.image, &reference);
    }

    #[inline]
    pub fn image(&self) -> &Image {
        &self.image
    }

    #[inline]
    pub fn take(self) -> Image {
        self.image
    }
}

/// Advances `current` by one generation, reading only from `reference`.
///
/// Cells the rule does not cover are left untouched in `current`, so the
/// caller must hand in a copy of `reference` to get a meaningful result.
pub fn step(current: &mut Image, reference: &Image) {
    debug_assert_eq!(
        current.dimensions(),
        reference.dimensions(),
        "step buffers must share dimensions"
    );
    for row in 0..reference.height() {
        for col in 0..reference.width() {
            apply_cell(current, reference, row, col);
        }
    }
}

/// Row-parallel variant of [`step`]. Every row of `current` only reads the
/// frozen `reference`, so rows are independent.
pub fn step_parallel(current: &mut Image, reference: &Image) {
    debug_assert_eq!(
        current.dimensions(),
        reference.dimensions(),
        "step buffers must share dimensions"
    );
    let width = reference.width();
    current
        .cells_mut()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(row, cells)| {
            for (col, cell) in cells.iter_mut().enumerate() {
                let Some(center) = reference.get(row, col) else {
                    continue;
                };
                let live = live_cells_around(reference, row, col);
                if let Some(value) = rule::transition(center.red, live) {
                    *cell = Pixel::splat(value);
                }
            }
        });
}

fn apply_cell(current: &mut Image, reference: &Image, row: usize, col: usize) {
    let Some(center) = reference.get(row, col) else {
        return;
    };
    let live = live_cells_around(reference, row, col);
    if let Some(value) = rule::transition(center.red, live) {
        current.set(row, col, Pixel::splat(value));
    }
}

/// Sum of red channels over the 3x3 window centered on `(row, col)`, clipped
/// at the image edges. The center cell is part of the sum.
fn live_cells_around(reference: &Image, row: usize, col: usize) -> i64 {
    let top = row.saturating_sub(1);
    let bottom = (row + 1).min(reference.height() - 1);
    let left = col.saturating_sub(1);
    let right = (col + 1).min(reference.width() - 1);

    let mut live = 0i64;
    for y in top..=bottom {
        for x in left..=right {
            live += reference.get(y, x).map_or(0, |p| i64::from(p.red));
        }
    }
    live
}
