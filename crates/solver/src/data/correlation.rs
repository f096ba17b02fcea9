use iqtools_utils::{f, MeshExt};
use ndarray::{Array2, Array3};
use serde::Serialize;

/// Spin-spin correlation function `<S_z(0) S_z(τ)>` from `solver.schi.dat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpinCorrelation {
    /// Imaginary time mesh from the final block
    pub tmesh: Vec<f64>,
    /// Total correlation function
    pub schi: Vec<f64>,
    /// Band resolved correlation function as `(ntime, nband)`
    pub sschi: Array2<f64>,
}

impl std::fmt::Display for SpinCorrelation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "SpinCorrelation {\n".to_string();
        s += &f!("    tmesh: {}\n", self.tmesh.describe());
        s += &f!("    bands: {}\n}}", self.sschi.ncols());
        write!(f, "{}", s)
    }
}

/// Orbital-orbital correlation function `<N_i(0) N_j(τ)>` from
/// `solver.ochi.dat`
///
/// Note the orbital ordering of `oochi`. The block for the pair `(i, j)` in
/// the file is stored at `oochi[[t, j, i]]`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrbitalCorrelation {
    /// Imaginary time mesh from the final block
    pub tmesh: Vec<f64>,
    /// Total correlation function
    pub ochi: Vec<f64>,
    /// Orbital resolved correlation function as `(ntime, norbs, norbs)`
    pub oochi: Array3<f64>,
}

impl std::fmt::Display for OrbitalCorrelation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "OrbitalCorrelation {\n".to_string();
        s += &f!("    tmesh: {}\n", self.tmesh.describe());
        s += &f!("    orbitals: {}\n}}", self.oochi.dim().1);
        write!(f, "{}", s)
    }
}

/// Screening function `K(τ)` and its first derivative from
/// `solver.kernel.dat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScreeningKernel {
    /// Imaginary time mesh
    pub tmesh: Vec<f64>,
    /// Screening function K(τ)
    pub ktau: Vec<f64>,
    /// First derivative K'(τ)
    pub ptau: Vec<f64>,
}

impl std::fmt::Display for ScreeningKernel {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "ScreeningKernel {{\n    tmesh: {}\n}}", self.tmesh.describe())
    }
}
