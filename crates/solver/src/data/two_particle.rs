use iqtools_utils::f;
use ndarray::Array5;
use num_complex::Complex64;
use serde::Serialize;
use std::ops::Range;

/// Two-particle Green's function and vertex function
///
/// Read from either `solver.twop.dat` or `solver.vrtx.dat`, which share a
/// layout. Both arrays are indexed as
/// `(fermionic, fermionic, bosonic, orbital, orbital)`.
///
/// Every value read for an orbital pair `(m, n)` is also stored at `(n, m)`,
/// so `g2[[i, j, k, m, n]] == g2[[i, j, k, n, m]]` always holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoParticleFunction {
    /// Two-particle Green's function
    pub g2: Array5<Complex64>,
    /// Two-particle vertex function
    pub f2: Array5<Complex64>,
}

impl TwoParticleFunction {
    /// Dimensions as `(nffrq, nbfrq, norbs)`
    pub fn dimensions(&self) -> (usize, usize, usize) {
        let (nffrq, _, nbfrq, norbs, _) = self.g2.dim();
        (nffrq, nbfrq, norbs)
    }
}

impl std::fmt::Display for TwoParticleFunction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let (nffrq, nbfrq, norbs) = self.dimensions();
        let mut s = "TwoParticleFunction {\n".to_string();
        s += &f!("    fermionic frequencies: {nffrq}\n");
        s += &f!("    bosonic frequencies: {nbfrq}\n");
        s += &f!("    orbitals: {norbs}\n}}");
        write!(f, "{}", s)
    }
}

/// Orbital pairs written to the two-particle files
///
/// The solver loops over `m` and then `n` for each orbital pair block. How
/// far `n` runs is not recorded in the file, so it has to be chosen here.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairOrder {
    /// Every `n` in `0..norbs` for every `m`
    #[default]
    Full,
    /// Only `n` in `0..=m`, relying on the `(m, n)`/`(n, m)` mirror
    LowerTriangle,
}

impl PairOrder {
    /// Range of the second orbital index for a given first index `m`
    ///
    /// ```rust
    /// # use iqtools_solver::PairOrder;
    /// assert_eq!(PairOrder::Full.partners(1, 4), 0..4);
    /// assert_eq!(PairOrder::LowerTriangle.partners(1, 4), 0..2);
    /// ```
    pub fn partners(&self, m: usize, norbs: usize) -> Range<usize> {
        match self {
            Self::Full => 0..norbs,
            Self::LowerTriangle => 0..(m + 1).min(norbs),
        }
    }

    /// Total number of orbital pair blocks expected in a file
    ///
    /// ```rust
    /// # use iqtools_solver::PairOrder;
    /// assert_eq!(PairOrder::Full.number_of_pairs(4), 16);
    /// assert_eq!(PairOrder::LowerTriangle.number_of_pairs(4), 10);
    /// ```
    pub fn number_of_pairs(&self, norbs: usize) -> usize {
        (0..norbs).map(|m| self.partners(m, norbs).len()).sum()
    }
}
