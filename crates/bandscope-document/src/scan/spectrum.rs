// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Two-dimensional spectrum of a raster: forward/inverse FFT, the centring
// shift, and the centred binary frequency mask.

use bandscope_core::error::{BandscopeError, Result};
use bandscope_core::types::FilterMode;
use rustfft::num_complex::Complex;
use rustfft::{FftDirection, FftPlanner};

use crate::image::raster::RasterImage;

/// Row-major complex spectrum with the same shape as its source raster.
#[derive(Debug, Clone)]
pub struct Spectrum {
    width: usize,
    height: usize,
    bins: Vec<Complex<f64>>,
    centred: bool,
}

impl Spectrum {
    /// Forward 2-D DFT of the raster's intensities. The zero frequency sits at
    /// `(0, 0)` until [`Spectrum::shift`] is called.
    pub fn forward(raster: &RasterImage) -> Self {
        let width = raster.width() as usize;
        let height = raster.height() as usize;
        let mut bins: Vec<Complex<f64>> = raster
            .samples()
            .iter()
            .map(|&v| Complex::new(f64::from(v), 0.0))
            .collect();
        transform_2d(&mut bins, width, height, FftDirection::Forward);
        Self {
            width,
            height,
            bins,
            centred: false,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_centred(&self) -> bool {
        self.centred
    }

    /// Bin at column `x`, row `y`. Panics when out of bounds.
    pub fn bin(&self, x: usize, y: usize) -> Complex<f64> {
        self.bins[y * self.width + x]
    }

    /// Move the zero frequency to `(width / 2, height / 2)`.
    pub fn shift(&mut self) {
        if self.centred {
            return;
        }
        self.bins = roll(&self.bins, self.width, self.height, self.width / 2, self.height / 2);
        self.centred = true;
    }

    /// Undo [`Spectrum::shift`]. Correct for odd sizes too.
    pub fn unshift(&mut self) {
        if !self.centred {
            return;
        }
        let dx = self.width - self.width / 2;
        let dy = self.height - self.height / 2;
        self.bins = roll(&self.bins, self.width, self.height, dx, dy);
        self.centred = false;
    }

    /// Zero every bin the mask does not pass.
    pub fn apply(&mut self, mask: &FrequencyMask) -> Result<()> {
        if mask.width != self.width || mask.height != self.height {
            return Err(BandscopeError::ImageError(format!(
                "mask is {}x{} but spectrum is {}x{}",
                mask.width, mask.height, self.width, self.height
            )));
        }
        for (bin, &keep) in self.bins.iter_mut().zip(&mask.pass) {
            if !keep {
                *bin = Complex::new(0.0, 0.0);
            }
        }
        Ok(())
    }

    /// Inverse 2-D DFT, normalised by `1 / (width * height)`. An uncentred
    /// spectrum is expected; a centred one is unshifted first.
    pub fn inverse(mut self) -> Vec<Complex<f64>> {
        self.unshift();
        transform_2d(&mut self.bins, self.width, self.height, FftDirection::Inverse);
        let scale = 1.0 / (self.width * self.height) as f64;
        for bin in &mut self.bins {
            *bin *= scale;
        }
        self.bins
    }
}

/// Row FFTs, then column FFTs through a transposed scratch buffer.
fn transform_2d(bins: &mut [Complex<f64>], width: usize, height: usize, direction: FftDirection) {
    let mut planner = FftPlanner::<f64>::new();

    let row_fft = planner.plan_fft(width, direction);
    row_fft.process(bins);

    let column_fft = planner.plan_fft(height, direction);
    let mut columns = transpose(bins, width, height);
    column_fft.process(&mut columns);

    let restored = transpose(&columns, height, width);
    bins.copy_from_slice(&restored);
}

/// Transpose a row-major `width x height` grid into `height x width`.
fn transpose(grid: &[Complex<f64>], width: usize, height: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::new(0.0, 0.0); grid.len()];
    for y in 0..height {
        for x in 0..width {
            out[x * height + y] = grid[y * width + x];
        }
    }
    out
}

/// Circularly move every element by `(dx, dy)`.
fn roll(grid: &[Complex<f64>], width: usize, height: usize, dx: usize, dy: usize) -> Vec<Complex<f64>> {
    let mut out = vec![Complex::new(0.0, 0.0); grid.len()];
    for y in 0..height {
        let ty = (y + dy) % height;
        for x in 0..width {
            let tx = (x + dx) % width;
            out[ty * width + tx] = grid[y * width + x];
        }
    }
    out
}

/// Binary pass/stop grid over a centred spectrum.
///
/// The square covers columns `[cx - r, cx + r)` and rows `[cy - r, cy + r)`
/// around `(cx, cy) = (width / 2, height / 2)`. High-pass stops the square;
/// low-pass passes only the square.
#[derive(Debug, Clone)]
pub struct FrequencyMask {
    width: usize,
    height: usize,
    mode: FilterMode,
    radius: usize,
    pass: Vec<bool>,
}

impl FrequencyMask {
    pub fn centered(width: usize, height: usize, radius: usize, mode: FilterMode) -> Self {
        let (cx, cy) = (width / 2, height / 2);
        let columns = cx.saturating_sub(radius)..(cx + radius).min(width);
        let rows = cy.saturating_sub(radius)..(cy + radius).min(height);

        let mut pass = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                let inside = rows.contains(&y) && columns.contains(&x);
                pass.push(match mode {
                    FilterMode::HighPass => !inside,
                    FilterMode::LowPass => inside,
                });
            }
        }

        Self {
            width,
            height,
            mode,
            radius,
            pass,
        }
    }

    pub fn mode(&self) -> FilterMode {
        self.mode
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Whether bin `(x, y)` survives. Panics when out of bounds.
    pub fn passes(&self, x: usize, y: usize) -> bool {
        self.pass[y * self.width + x]
    }

    pub fn passing_count(&self) -> usize {
        self.pass.iter().filter(|&&keep| keep).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(width: u32, height: u32) -> RasterImage {
        let samples = (0..width * height).map(|i| (i * 7 % 256) as u8).collect();
        RasterImage::new(width, height, samples).unwrap()
    }

    #[test]
    fn dc_bin_is_the_sample_sum() {
        let raster = RasterImage::uniform(4, 3, 10).unwrap();
        let spectrum = Spectrum::forward(&raster);
        let dc = spectrum.bin(0, 0);
        assert!((dc.re - 120.0).abs() < 1e-9);
        assert!(dc.im.abs() < 1e-9);
        assert!(spectrum.bin(1, 0).norm() < 1e-9);
    }

    #[test]
    fn shift_centres_the_zero_frequency() {
        for (w, h) in [(4u32, 4u32), (5, 3), (7, 6)] {
            let raster = RasterImage::uniform(w, h, 50).unwrap();
            let mut spectrum = Spectrum::forward(&raster);
            spectrum.shift();
            let centre = spectrum.bin(w as usize / 2, h as usize / 2);
            assert!((centre.re - 50.0 * (w * h) as f64).abs() < 1e-6, "{w}x{h}");
        }
    }

    #[test]
    fn unshift_reverses_shift_for_odd_and_even_sizes() {
        for (w, h) in [(4u32, 6u32), (5, 5), (3, 8), (9, 2)] {
            let original = Spectrum::forward(&ramp(w, h));
            let mut moved = original.clone();
            moved.shift();
            moved.unshift();
            assert_eq!(moved.bins, original.bins, "{w}x{h}");
        }
    }

    #[test]
    fn inverse_recovers_the_samples() {
        let raster = ramp(6, 5);
        let mut spectrum = Spectrum::forward(&raster);
        spectrum.shift();
        let back = spectrum.inverse();
        for (value, &sample) in back.iter().zip(raster.samples()) {
            assert!((value.re - f64::from(sample)).abs() < 1e-6);
            assert!(value.im.abs() < 1e-6);
        }
    }

    #[test]
    fn mask_square_has_side_two_radius() {
        let low = FrequencyMask::centered(20, 16, 3, FilterMode::LowPass);
        assert_eq!(low.passing_count(), 36);
        assert!(low.passes(10, 8));
        assert!(low.passes(7, 5));
        assert!(!low.passes(13, 8));
        assert!(!low.passes(10, 11));

        let high = FrequencyMask::centered(20, 16, 3, FilterMode::HighPass);
        assert_eq!(high.passing_count(), 20 * 16 - 36);
        assert!(!high.passes(10, 8));
        assert_eq!(high.mode(), FilterMode::HighPass);
        assert_eq!(high.radius(), 3);
    }

    #[test]
    fn mismatched_mask_is_rejected() {
        let mut spectrum = Spectrum::forward(&ramp(8, 8));
        let mask = FrequencyMask::centered(4, 4, 1, FilterMode::LowPass);
        assert!(spectrum.apply(&mask).is_err());
    }

    #[test]
    fn high_pass_removes_the_mean() {
        let raster = ramp(8, 8);
        let mut spectrum = Spectrum::forward(&raster);
        spectrum.shift();
        spectrum
            .apply(&FrequencyMask::centered(8, 8, 1, FilterMode::HighPass))
            .unwrap();
        let back = spectrum.inverse();
        let mean: f64 = back.iter().map(|c| c.re).sum::<f64>() / back.len() as f64;
        assert!(mean.abs() < 1e-9);
    }

    #[test]
    #[should_panic]
    fn bin_outside_the_grid_panics() {
        let spectrum = Spectrum::forward(&ramp(4, 4));
        let _ = spectrum.bin(0, 4);
    }

    #[test]
    #[should_panic]
    fn mask_lookup_outside_the_grid_panics() {
        let mask = FrequencyMask::centered(4, 4, 1, FilterMode::HighPass);
        let _ = mask.passes(0, 4);
    }
}
