//! Euclidean distance transform.
//!
//! Turns a thresholded grid (occupied = 0, free = large sentinel) into a
//! distance field in world units.
//!
//! ## Algorithm
//!
//! The exact separable transform of Felzenszwalb & Huttenlocher: the squared
//! distance at a cell is the lower envelope of parabolas rooted at every
//! input cell,
//!
//! ```text
//! D(q) = min_p ( (q - p)² + f(p) )
//!
//!   f(p) ┐  ╲        ╱      ╲   ╱
//!        │   ╲      ╱        ╲ ╱
//!        │    ╲____╱    ...   ╳
//!        └──────────────────────── q
//! ```
//!
//! computed in O(n) per line, first down every column and then along every
//! row. Input values are interpreted as squared distances in cells, so the
//! free sentinel `99999` bounds the result at `resolution * sqrt(99999)` on
//! grids with no occupied cell.

/// Fills a thresholded grid with distances to the nearest occupied cell.
pub trait DistanceTransform {
    /// Replace every cell of `grid` (row-major, `width * height` long) with
    /// its distance in world units to the nearest zero-valued cell.
    fn transform(&self, grid: &mut [f64], width: usize, height: usize, resolution: f64);
}

/// Exact Euclidean distance transform (lower envelope of parabolas).
#[derive(Clone, Copy, Debug, Default)]
pub struct EuclideanDistanceTransform;

impl DistanceTransform for EuclideanDistanceTransform {
    fn transform(&self, grid: &mut [f64], width: usize, height: usize, resolution: f64) {
        debug_assert_eq!(grid.len(), width * height);
        if grid.is_empty() {
            return;
        }

        let mut envelope = LowerEnvelope::with_capacity(width.max(height));
        let mut line = vec![0.0; height];
        let mut squared = vec![0.0; height];

        // Columns
        for col in 0..width {
            for row in 0..height {
                line[row] = grid[row * width + col];
            }
            envelope.squared_distances(&line, &mut squared);
            for row in 0..height {
                grid[row * width + col] = squared[row];
            }
        }

        // Rows
        line.resize(width, 0.0);
        squared.resize(width, 0.0);
        for row in grid.chunks_exact_mut(width) {
            line.copy_from_slice(row);
            envelope.squared_distances(&line, &mut squared);
            row.copy_from_slice(&squared);
        }

        for value in grid.iter_mut() {
            *value = resolution * value.sqrt();
        }
    }
}

/// Scratch buffers for the 1D pass, reused across lines.
struct LowerEnvelope {
    /// Grid index of each parabola in the envelope
    roots: Vec<usize>,
    /// Left boundary of each parabola's interval (one extra for the right end)
    boundaries: Vec<f64>,
}

impl LowerEnvelope {
    fn with_capacity(n: usize) -> Self {
        Self {
            roots: vec![0; n],
            boundaries: vec![0.0; n + 1],
        }
    }

    /// 1D squared distance transform of `input` into `output`.
    fn squared_distances(&mut self, input: &[f64], output: &mut [f64]) {
        let n = input.len();
        if n == 0 {
            return;
        }

        let intersection = |input: &[f64], q: usize, p: usize| {
            let (qf, pf) = (q as f64, p as f64);
            ((input[q] + qf * qf) - (input[p] + pf * pf)) / (2.0 * qf - 2.0 * pf)
        };

        let mut k = 0;
        self.roots[0] = 0;
        self.boundaries[0] = f64::NEG_INFINITY;
        self.boundaries[1] = f64::INFINITY;

        for q in 1..n {
            let mut s = intersection(input, q, self.roots[k]);
            while k > 0 && s <= self.boundaries[k] {
                k -= 1;
                s = intersection(input, q, self.roots[k]);
            }
            k += 1;
            self.roots[k] = q;
            self.boundaries[k] = s;
            self.boundaries[k + 1] = f64::INFINITY;
        }

        let mut k = 0;
        for (q, out) in output.iter_mut().enumerate().take(n) {
            while self.boundaries[k + 1] < q as f64 {
                k += 1;
            }
            let root = self.roots[k];
            let offset = q as f64 - root as f64;
            *out = offset * offset + input[root];
        }
    }
}
