use crate::matrix::Matrix;

/// Textbook i-j-k product: `c = a * b` for `n x n` row-major slices.
///
/// Each output cell is a dot product of row `i` of `a` and column `j` of `b`,
/// so the inner loop walks `b` with stride `n`. Every cell of `c` is assigned,
/// whatever it held before.
pub fn matmul_naive(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_lengths(a, b, c, n);

    for i in 0..n {
        for j in 0..n {
            let mut sum = 0.0;
            for k in 0..n {
                sum += a[i * n + k] * b[k * n + j];
            }
            c[i * n + j] = sum;
        }
    }
}

/// i-k-j product: `c += a * b` for `n x n` row-major slices.
///
/// Swapping the two inner loops makes the innermost loop walk rows of both
/// `b` and `c` with stride 1. Results are accumulated, so `c` must be zeroed
/// first to get a plain product.
pub fn matmul_cache_friendly(a: &[f64], b: &[f64], c: &mut [f64], n: usize) {
    check_lengths(a, b, c, n);

    for i in 0..n {
        let c_row = &mut c[i * n..(i + 1) * n];
        for k in 0..n {
            let aik = a[i * n + k];
            let b_row = &b[k * n..(k + 1) * n];
            for (cij, bkj) in c_row.iter_mut().zip(b_row) {
                *cij += aik * bkj;
            }
        }
    }
}

fn check_lengths(a: &[f64], b: &[f64], c: &[f64], n: usize) {
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);
}

impl Matrix {

    pub fn mul_naive_into(&self, other: &Matrix, out: &mut Matrix) {
        self.check_dims(other, out);
        matmul_naive(self.as_slice(), other.as_slice(), &mut out.data, self.size());
    }

    /// Accumulates into `out`; call [`Matrix::fill_zero`] beforehand for a plain product.
    pub fn mul_cache_friendly_into(&self, other: &Matrix, out: &mut Matrix) {
        self.check_dims(other, out);
        matmul_cache_friendly(self.as_slice(), other.as_slice(), &mut out.data, self.size());
    }

    pub fn mul_naive(&self, other: &Matrix) -> Matrix {
        let mut out = Matrix::zeros(self.size());
        self.mul_naive_into(other, &mut out);
        out
    }

    pub fn mul_cache_friendly(&self, other: &Matrix) -> Matrix {
        let mut out = Matrix::zeros(self.size());
        self.mul_cache_friendly_into(other, &mut out);
        out
    }

    fn check_dims(&self, other: &Matrix, out: &Matrix) {
        let (n, m, o) = (self.size(), other.size(), out.size());
        assert_eq!(n, m, "Matrix dimensions don't match: {}x{} * {}x{}", n, n, m, m);
        assert_eq!(n, o, "Output is {}x{}, expected {}x{}", o, o, n, n);
    }
}
