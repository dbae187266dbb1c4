//! The rectangular sampling grid of a surface.
//!
//! Each axis is discretized from `0` to its half width and mirrored, so the
//! grid always holds the origin and is symmetric about it:
//!
//! ```text
//! pos = arange(0, half + dx / 4, dx)
//! axis = [-pos[n-1], ..., -pos[1], pos[0], ..., pos[n-1]]
//! ```

use crate::geometry::{HalfExtent, Position};
use ndarray::{Array1, Array2};
use wavefield_core::{padded_arange, require_positive, ArgumentError, Interval};

/// Sample coordinates of a surface, `x` along columns and `y` along rows.
#[derive(Clone, Debug, PartialEq)]
pub struct SurfaceGrid {
    x: Array1<f64>,
    y: Array1<f64>,
}

fn mirrored_axis(half: f64, step: f64) -> Array1<f64> {
    let positive = padded_arange(Interval::new(0.0, half), step);
    positive
        .iter()
        .skip(1)
        .rev()
        .map(|v| -v)
        .chain(positive.iter().copied())
        .collect()
}

impl SurfaceGrid {
    /// Discretize the rectangle `half` with spacing `step`.
    pub fn new(half: HalfExtent, step: f64) -> Result<Self, ArgumentError> {
        let half = HalfExtent::new(half.x, half.y)?;
        let step = require_positive("spatial_step", step)?;
        Ok(Self {
            x: mirrored_axis(half.x, step),
            y: mirrored_axis(half.y, step),
        })
    }

    /// Column coordinates.
    pub fn x_vect(&self) -> &Array1<f64> {
        &self.x
    }

    /// Row coordinates.
    pub fn y_vect(&self) -> &Array1<f64> {
        &self.y
    }

    /// `(rows, columns)`, i.e. `(y_vect.len(), x_vect.len())`.
    pub fn shape(&self) -> (usize, usize) {
        (self.y.len(), self.x.len())
    }

    /// Meshgrid of the coordinates: `(X, Y)`, each of shape [`shape`](Self::shape).
    pub fn xy_grid(&self) -> (Array2<f64>, Array2<f64>) {
        let xs = Array2::from_shape_fn(self.shape(), |(_, j)| self.x[j]);
        let ys = Array2::from_shape_fn(self.shape(), |(i, _)| self.y[i]);
        (xs, ys)
    }

    /// Half widths as actually discretized: the outermost sample on each
    /// axis.
    pub fn edges(&self) -> HalfExtent {
        HalfExtent {
            x: self.x.last().copied().unwrap_or(0.0),
            y: self.y.last().copied().unwrap_or(0.0),
        }
    }

    /// Whether `p` lies within the outermost samples, edges included.
    pub fn contains(&self, p: Position) -> bool {
        self.edges().contains(p)
    }

    /// Distance from `p` to every grid node, shape [`shape`](Self::shape).
    pub fn distance_field(&self, p: Position) -> Array2<f64> {
        Array2::from_shape_fn(self.shape(), |(i, j)| p.distance_to(self.x[j], self.y[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> SurfaceGrid {
        SurfaceGrid::new(HalfExtent::from(1.0), 0.1).unwrap()
    }

    #[test]
    fn axes_are_symmetric_about_origin() {
        let g = unit();
        assert_eq!(g.shape(), (21, 21));
        let x = g.x_vect();
        assert_eq!(x[10], 0.0);
        for i in 0..21 {
            assert_eq!(x[i], -x[20 - i]);
        }
    }

    #[test]
    fn meshgrid_repeats_axes() {
        let g = SurfaceGrid::new(HalfExtent::new(0.2, 0.1).unwrap(), 0.1).unwrap();
        let (xs, ys) = g.xy_grid();
        assert_eq!(xs.dim(), (3, 5));
        assert_eq!(xs.row(2).to_vec(), g.x_vect().to_vec());
        assert_eq!(ys.column(4).to_vec(), g.y_vect().to_vec());
    }

    #[test]
    fn distance_field_is_zero_at_source_node() {
        let g = unit();
        let d = g.distance_field(Position::new(0.0, 0.0));
        assert_eq!(d[[10, 10]], 0.0);
        assert_eq!(d[[10, 20]], d[[0, 10]]);
    }

    #[test]
    fn containment_uses_outer_samples() {
        let g = unit();
        assert!(g.contains(Position::new(-1.0, 1.0)));
        assert!(!g.contains(Position::new(0.0, 1.5)));
    }

    #[test]
    fn rejects_zero_extent() {
        assert!(SurfaceGrid::new(HalfExtent { x: 0.0, y: 1.0 }, 0.1).is_err());
    }
}
