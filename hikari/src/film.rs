use serde::{Deserialize, Serialize};

use crate::math::Spectrum;

/// Pixel dimensions of a [`Film`]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Resolution {
    pub columns: usize,
    pub rows: usize,
}

impl Resolution {
    pub fn new(columns: usize, rows: usize) -> Self {
        Self { columns, rows }
    }
}

/// Grid drawn over a finished render
#[derive(Copy, Clone, Debug, Deserialize, Serialize)]
pub struct GridSettings {
    /// Pixels between consecutive grid lines
    pub interval: usize,
    pub color: Spectrum,
}

/// Row-major pixel buffer
pub struct Film {
    res: Resolution,
    pixels: Vec<Spectrum>,
}

impl Film {
    /// Creates a black `Film`.
    pub fn new(res: Resolution) -> Self {
        Self {
            res,
            pixels: vec![Spectrum::zeros(); res.columns * res.rows],
        }
    }

    pub fn res(&self) -> Resolution {
        self.res
    }

    /// Returns a reference to the the pixels of this `Film`.
    pub fn pixels(&self) -> &[Spectrum] {
        &self.pixels
    }

    /// Returns the pixels for writing. Consecutive chunks of `res().columns` pixels are rows.
    pub fn pixels_mut(&mut self) -> &mut [Spectrum] {
        &mut self.pixels
    }

    pub fn pixel(&self, col: usize, row: usize) -> Spectrum {
        self.pixels[row * self.res.columns + col]
    }

    pub fn write_pixel(&mut self, col: usize, row: usize, color: Spectrum) {
        self.pixels[row * self.res.columns + col] = color;
    }

    /// Overwrites every `interval`th row and column with `color`.
    pub fn print_grid(&mut self, interval: usize, color: Spectrum) {
        if interval == 0 {
            return;
        }
        for row in 0..self.res.rows {
            for col in 0..self.res.columns {
                if row % interval == 0 || col % interval == 0 {
                    self.write_pixel(col, row, color);
                }
            }
        }
    }
}
