use iqtools_utils::{f, ValueExt};
use ndarray::Array2;
use serde::Serialize;

/// Atomic state probabilities from `solver.prob.dat`
///
/// The sector probabilities are only present when a number of sectors was
/// requested, which is only meaningful for the sector-based solvers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Probability {
    /// Probability of every atomic configuration
    pub prob: Vec<f64>,
    /// Probability of every subspace sector, if requested
    pub sprob: Option<Vec<f64>>,
}

impl Probability {
    /// Sum over every atomic state, should be close to unity
    pub fn total(&self) -> f64 {
        self.prob.iter().sum()
    }
}

impl std::fmt::Display for Probability {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "Probability {\n".to_string();
        s += &f!("    configurations: {}\n", self.prob.len());
        if let Some(sprob) = &self.sprob {
            s += &f!("    sectors: {}\n", sprob.len());
        }
        s += &f!("    total: {}\n}}", self.total().sci(5, 2));
        write!(f, "{}", s)
    }
}

/// Orbital occupations from `solver.nmat.dat`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occupation {
    /// Occupation number `<N_i>` for every orbital
    pub nmat: Vec<f64>,
    /// Double occupation `<N_i N_j>` as `(norbs, norbs)`
    pub nnmat: Array2<f64>,
}

impl Occupation {
    /// Total occupation summed over all orbitals
    pub fn total(&self) -> f64 {
        self.nmat.iter().sum()
    }
}

impl std::fmt::Display for Occupation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "Occupation {{\n    orbitals: {}\n    total: {}\n}}",
            self.nmat.len(),
            self.total().sci(5, 2)
        )
    }
}
