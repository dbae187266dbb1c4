//! Linear interpolation of 1D profiles onto scalar fields.
//!
//! Values are linear between table samples and clamped to the first/last
//! value outside the table. The table abscissae must be increasing.
//!
//! [`LinearLookup`] resolves every query point against the table once and
//! is then reused for each time row of a profile, which is how a 1D radial
//! wave is painted onto a 2D distance field.

use ndarray::{Array2, Array3, ArrayBase, Axis, Data, Ix1, Ix2};
use wavefield_core::{require_finite, ArgumentError};

/// Precomputed bracketing indices and weights for a set of query points.
#[derive(Clone, Debug, PartialEq)]
pub struct LinearLookup {
    lower: Vec<usize>,
    weight: Vec<f64>,
    table_len: usize,
}

impl LinearLookup {
    /// Resolve `queries` against the increasing abscissae `table`.
    ///
    /// # Errors
    ///
    /// [`ArgumentError::EmptyTable`] for an empty table,
    /// [`ArgumentError::NonFinite`] for a NaN or infinite query.
    pub fn new<S>(
        table: &ArrayBase<S, Ix1>,
        queries: impl IntoIterator<Item = f64>,
    ) -> Result<Self, ArgumentError>
    where
        S: Data<Elem = f64>,
    {
        let n = table.len();
        if n == 0 {
            return Err(ArgumentError::EmptyTable);
        }
        let first = table[0];
        let last = table[n - 1];

        let queries = queries.into_iter();
        let (hint, _) = queries.size_hint();
        let mut lower = Vec::with_capacity(hint);
        let mut weight = Vec::with_capacity(hint);

        for x in queries {
            let x = require_finite("query", x)?;
            let (j, w) = if x <= first {
                (0, 0.0)
            } else if x >= last {
                (n - 1, 0.0)
            } else {
                // first < x < last, so 1 <= upper <= n - 1.
                let upper = table
                    .as_slice()
                    .map(|s| s.partition_point(|&v| v <= x))
                    .unwrap_or_else(|| table.iter().take_while(|&&v| v <= x).count());
                let j = upper - 1;
                let (x0, x1) = (table[j], table[j + 1]);
                (j, (x - x0) / (x1 - x0))
            };
            lower.push(j);
            weight.push(w);
        }

        Ok(Self {
            lower,
            weight,
            table_len: n,
        })
    }

    /// Number of query points.
    pub fn len(&self) -> usize {
        self.lower.len()
    }

    /// Whether there are no query points.
    pub fn is_empty(&self) -> bool {
        self.lower.is_empty()
    }

    /// Number of table samples the lookup was built against.
    pub fn table_len(&self) -> usize {
        self.table_len
    }

    /// Interpolated value of query `q` for the ordinates `fp`.
    #[inline]
    fn value<S>(&self, q: usize, fp: &ArrayBase<S, Ix1>) -> f64
    where
        S: Data<Elem = f64>,
    {
        let j = self.lower[q];
        let w = self.weight[q];
        if w == 0.0 {
            fp[j]
        } else {
            fp[j] * (1.0 - w) + fp[j + 1] * w
        }
    }

    /// Evaluate every query against one profile.
    pub fn apply<S>(&self, fp: &ArrayBase<S, Ix1>) -> Result<Vec<f64>, ArgumentError>
    where
        S: Data<Elem = f64>,
    {
        self.check_table(fp.len())?;
        Ok((0..self.len()).map(|q| self.value(q, fp)).collect())
    }

    /// Add `data` (shape `(m, table_len)`, one profile per time row) into
    /// `out` (shape `(p, q, m)`), where the `p · q` query points were given
    /// in row-major order.
    pub fn accumulate_into<S>(
        &self,
        data: &ArrayBase<S, Ix2>,
        out: &mut Array3<f64>,
    ) -> Result<(), ArgumentError>
    where
        S: Data<Elem = f64>,
    {
        let (p, q, m) = out.dim();
        self.check_table(data.ncols())?;
        if p * q != self.len() {
            return Err(ArgumentError::ShapeMismatch {
                expected: self.len(),
                found: p * q,
            });
        }
        if m != data.nrows() {
            return Err(ArgumentError::ShapeMismatch {
                expected: m,
                found: data.nrows(),
            });
        }
        for (point, mut lane) in out.lanes_mut(Axis(2)).into_iter().enumerate() {
            for (slot, row) in lane.iter_mut().zip(data.outer_iter()) {
                *slot += self.value(point, &row);
            }
        }
        Ok(())
    }

    fn check_table(&self, found: usize) -> Result<(), ArgumentError> {
        if found == self.table_len {
            Ok(())
        } else {
            Err(ArgumentError::ShapeMismatch {
                expected: self.table_len,
                found,
            })
        }
    }
}

/// Interpolate one point `x` against the table `(xp, fp)`.
///
/// ```
/// use ndarray::array;
/// use wavefield_packet::interp;
///
/// let xp = array![0.0, 1.0, 2.0];
/// let fp = array![0.0, 10.0, 0.0];
/// assert_eq!(interp(0.5, &xp, &fp).unwrap(), 5.0);
/// assert_eq!(interp(-3.0, &xp, &fp).unwrap(), 0.0);
/// ```
pub fn interp<S, T>(
    x: f64,
    xp: &ArrayBase<S, Ix1>,
    fp: &ArrayBase<T, Ix1>,
) -> Result<f64, ArgumentError>
where
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    let lookup = LinearLookup::new(xp, [x])?;
    Ok(lookup.apply(fp)?[0])
}

/// Interpolate each row of `data` (shape `(m, n)`, abscissae `xs`) at the
/// points of `matrix` (shape `(p,)`). Returns shape `(m, p)`.
pub fn interp_onto_line<A, S, T>(
    matrix: &ArrayBase<A, Ix1>,
    xs: &ArrayBase<S, Ix1>,
    data: &ArrayBase<T, Ix2>,
) -> Result<Array2<f64>, ArgumentError>
where
    A: Data<Elem = f64>,
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    let lookup = LinearLookup::new(xs, matrix.iter().copied())?;
    lookup.check_table(data.ncols())?;
    let mut out = Array2::zeros((data.nrows(), matrix.len()));
    for (mut out_row, row) in out.outer_iter_mut().zip(data.outer_iter()) {
        for (point, slot) in out_row.iter_mut().enumerate() {
            *slot = lookup.value(point, &row);
        }
    }
    Ok(out)
}

/// Interpolate each row of `data` (shape `(m, n)`, abscissae `xs`) at the
/// points of `matrix` (shape `(p, q)`). Returns shape `(p, q, m)`.
pub fn interp_onto_grid<A, S, T>(
    matrix: &ArrayBase<A, Ix2>,
    xs: &ArrayBase<S, Ix1>,
    data: &ArrayBase<T, Ix2>,
) -> Result<Array3<f64>, ArgumentError>
where
    A: Data<Elem = f64>,
    S: Data<Elem = f64>,
    T: Data<Elem = f64>,
{
    let (p, q) = matrix.dim();
    let lookup = LinearLookup::new(xs, matrix.iter().copied())?;
    let mut out = Array3::zeros((p, q, data.nrows()));
    lookup.accumulate_into(data, &mut out)?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;
    use proptest::prelude::*;

    #[test]
    fn empty_table_is_rejected() {
        let xp = ndarray::Array1::<f64>::zeros(0);
        assert_eq!(
            LinearLookup::new(&xp, [0.0]).unwrap_err(),
            ArgumentError::EmptyTable
        );
    }

    #[test]
    fn single_sample_table_is_constant() {
        let xp = array![2.0];
        let fp = array![7.0];
        for x in [-1.0, 2.0, 9.0] {
            assert_eq!(interp(x, &xp, &fp).unwrap(), 7.0);
        }
    }

    #[test]
    fn exact_sample_hits_table_value() {
        let xp = array![0.0, 0.1, 0.2, 0.3];
        let fp = array![1.0, 2.0, 3.0, 4.0];
        assert_eq!(interp(0.2, &xp, &fp).unwrap(), 3.0);
        assert_eq!(interp(0.3, &xp, &fp).unwrap(), 4.0);
    }

    #[test]
    fn line_result_is_time_by_point() {
        let xs = array![0.0, 1.0];
        let data = array![[0.0, 1.0], [10.0, 20.0], [5.0, 5.0]];
        let pts = array![0.25, 0.5, 2.0];
        let out = interp_onto_line(&pts, &xs, &data).unwrap();
        assert_eq!(out.dim(), (3, 3));
        assert_eq!(out.row(0).to_vec(), vec![0.25, 0.5, 1.0]);
        assert_eq!(out.row(1).to_vec(), vec![12.5, 15.0, 20.0]);
    }

    #[test]
    fn grid_result_puts_time_last() {
        let xs = array![0.0, 1.0];
        let data = array![[0.0, 1.0], [2.0, 4.0]];
        let field = array![[0.0, 0.5], [1.0, 0.75]];
        let out = interp_onto_grid(&field, &xs, &data).unwrap();
        assert_eq!(out.dim(), (2, 2, 2));
        assert_eq!(out[[0, 1, 0]], 0.5);
        assert_eq!(out[[0, 1, 1]], 3.0);
        assert_eq!(out[[1, 1, 1]], 3.5);
    }

    #[test]
    fn mismatched_profile_is_rejected() {
        let xs = array![0.0, 1.0, 2.0];
        let data = array![[0.0, 1.0]];
        let pts = array![0.5];
        assert!(matches!(
            interp_onto_line(&pts, &xs, &data),
            Err(ArgumentError::ShapeMismatch { expected: 3, found: 2 })
        ));
    }

    #[test]
    fn nan_query_is_rejected() {
        let xs = array![0.0, 1.0];
        assert!(LinearLookup::new(&xs, [f64::NAN]).is_err());
    }

    proptest! {
        #[test]
        fn linear_profile_is_reproduced(x in -1.0f64..3.0, slope in -5.0f64..5.0) {
            let xp = ndarray::Array1::linspace(0.0, 2.0, 21);
            let fp = xp.mapv(|v| slope * v);
            let y = interp(x, &xp, &fp).unwrap();
            let expected = slope * x.clamp(0.0, 2.0);
            prop_assert!((y - expected).abs() < 1e-9);
        }
    }
}
