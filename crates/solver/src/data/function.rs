// iqtools modules
use iqtools_utils::{f, ComplexExt, MeshExt};

// external crates
use ndarray::{Array1, Array3, Axis};
use num_complex::Complex64;
use serde::Serialize;

/// Matrix valued function on the imaginary time axis
///
/// Produced by the readers for `solver.green.dat`, `solver.weiss.dat` and
/// `solver.hybri.dat`. The `values` are indexed as `(time, orbital, orbital)`.
///
/// Only the diagonal is written by the solver. For band `i` of `nband` the
/// entries `(i, i)` and `(i + nband, i + nband)` are populated and everything
/// off the diagonal is zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImaginaryTimeFunction {
    /// Imaginary time mesh
    pub tmesh: Vec<f64>,
    /// Function values as `(ntime, norbs, norbs)`
    pub values: Array3<f64>,
}

impl ImaginaryTimeFunction {
    /// Number of imaginary time points
    pub fn number_of_points(&self) -> usize {
        self.values.dim().0
    }

    /// Number of orbitals (spin included)
    pub fn number_of_orbitals(&self) -> usize {
        self.values.dim().1
    }

    /// Diagonal element for `orbital` across the whole mesh
    ///
    /// Returns `None` if the orbital index is out of range.
    pub fn diagonal(&self, orbital: usize) -> Option<Array1<f64>> {
        (orbital < self.number_of_orbitals()).then(|| {
            self.values
                .index_axis(Axis(2), orbital)
                .index_axis(Axis(1), orbital)
                .to_owned()
        })
    }
}

impl std::fmt::Display for ImaginaryTimeFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "ImaginaryTimeFunction {\n".to_string();
        s += &f!("    tmesh: {}\n", self.tmesh.describe());
        s += &f!("    orbitals: {}\n}}", self.number_of_orbitals());
        write!(f, "{}", s)
    }
}

/// Matrix valued function on the Matsubara frequency axis
///
/// Produced by the readers for `solver.grn.dat`, `solver.wss.dat`,
/// `solver.hyb.dat` and `solver.sgm.dat`. The `values` are indexed as
/// `(frequency, orbital, orbital)` with the same diagonal-only population as
/// [ImaginaryTimeFunction].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatsubaraFunction {
    /// Matsubara frequency mesh
    pub rmesh: Vec<f64>,
    /// Function values as `(mfreq, norbs, norbs)`
    pub values: Array3<Complex64>,
}

impl MatsubaraFunction {
    /// Number of Matsubara frequency points
    pub fn number_of_points(&self) -> usize {
        self.values.dim().0
    }

    /// Number of orbitals (spin included)
    pub fn number_of_orbitals(&self) -> usize {
        self.values.dim().1
    }

    /// Diagonal element for `orbital` across the whole mesh
    pub fn diagonal(&self, orbital: usize) -> Option<Array1<Complex64>> {
        (orbital < self.number_of_orbitals()).then(|| {
            self.values
                .index_axis(Axis(2), orbital)
                .index_axis(Axis(1), orbital)
                .to_owned()
        })
    }
}

impl std::fmt::Display for MatsubaraFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "MatsubaraFunction {\n".to_string();
        s += &f!("    rmesh: {}\n", self.rmesh.describe());
        s += &f!("    orbitals: {}\n", self.number_of_orbitals());
        if let Some(value) = self.values.first() {
            s += &f!("    lowest frequency: {}\n", value.sci(5, 2));
        }
        s += "}";
        write!(f, "{}", s)
    }
}

/// Hubbard-I Green's function and self-energy
///
/// Both are written together to `solver.hub.dat` on a shared Matsubara mesh,
/// one block per orbital rather than per band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HubbardFunction {
    /// Matsubara frequency mesh
    pub rmesh: Vec<f64>,
    /// Hubbard-I Green's function as `(mfreq, norbs, norbs)`
    pub ghub: Array3<Complex64>,
    /// Hubbard-I self-energy as `(mfreq, norbs, norbs)`
    pub shub: Array3<Complex64>,
}

impl std::fmt::Display for HubbardFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "HubbardFunction {\n".to_string();
        s += &f!("    rmesh: {}\n", self.rmesh.describe());
        s += &f!("    orbitals: {}\n}}", self.ghub.dim().1);
        write!(f, "{}", s)
    }
}
