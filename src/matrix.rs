use rand_pcg::Pcg64;
use rand::distributions::{Distribution, Uniform};

pub mod mul;

/// Dense square matrix stored row-major: element (r, c) lives at `r * size + c`.
#[derive(Debug, Clone)]
pub struct Matrix {
    pub data: Vec<f64>,
    pub size: usize,
}

impl Matrix {

    pub fn new(data: Vec<f64>, size: usize) -> Matrix {
        assert_eq!(data.len(), size * size,
            "Data length {} doesn't match a {}x{} matrix (expected {})",
            data.len(), size, size, size * size);
        Matrix { data, size }
    }

    pub fn zeros(size: usize) -> Matrix {
        Matrix::new(vec![0.0; size * size], size)
    }

    /// Uniform values in [0, 1). The same `(size, seed)` always yields the same matrix.
    ///
    /// The stream comes from PCG-64, so values (and checksums) will not match
    /// a Mersenne Twister seeded with the same number.
    pub fn random(size: usize, seed: u64) -> Self {
        use rand::SeedableRng;
        let mut rng = Pcg64::seed_from_u64(seed);
        let uniform = Uniform::new(0.0, 1.0);
        let data = (0..size * size)
            .map(|_| uniform.sample(&mut rng))
            .collect::<Vec<f64>>();

        Matrix::new(data, size)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.size + col]
    }

    pub fn set(&mut self, row: usize, col: usize, val: f64) {
        self.data[row * self.size + col] = val;
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn fill_zero(&mut self) {
        self.data.fill(0.0);
    }

    /// Memory footprint of the element buffer.
    pub fn bytes(&self) -> usize {
        self.data.len() * std::mem::size_of::<f64>()
    }

    /// Sum of all elements, used as a cheap fingerprint when comparing results.
    pub fn checksum(&self) -> f64 {
        self.data.iter().sum()
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        let epsilon = 1e-9;
        if self.size != other.size {
            return false;
        }

        self.data.iter()
            .zip(&other.data)
            .all(|(a, b)| (a - b).abs() < epsilon)
    }
}
