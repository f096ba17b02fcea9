//! Readers for quantum impurity solver output files
//!
//! The solvers dump every measured quantity to a plain text file with a rigid
//! line and column layout. This crate reads each file into typed arrays for
//! post-processing.
//!
//! | File                  | Reader           | Result                    |
//! | --------------------- | ---------------- | ------------------------- |
//! | `solver.green.dat`    | [read_green()]   | [ImaginaryTimeFunction]   |
//! | `solver.weiss.dat`    | [read_weiss()]   | [ImaginaryTimeFunction]   |
//! | `solver.hybri.dat`    | [read_hybri()]   | [ImaginaryTimeFunction]   |
//! | `solver.grn.dat`      | [read_grn()]     | [MatsubaraFunction]       |
//! | `solver.wss.dat`      | [read_wss()]     | [MatsubaraFunction]       |
//! | `solver.hyb.dat`      | [read_hyb()]     | [MatsubaraFunction]       |
//! | `solver.sgm.dat`      | [read_sgm()]     | [MatsubaraFunction]       |
//! | `solver.hub.dat`      | [read_hub()]     | [HubbardFunction]         |
//! | `solver.hist.dat`     | [read_hist()]    | `Vec<f64>`                |
//! | `solver.prob.dat`     | [read_prob()]    | [Probability]             |
//! | `solver.nmat.dat`     | [read_nmat()]    | [Occupation]              |
//! | `solver.schi.dat`     | [read_schi()]    | [SpinCorrelation]         |
//! | `solver.ochi.dat`     | [read_ochi()]    | [OrbitalCorrelation]      |
//! | `solver.twop.dat`     | [read_twop()]    | [TwoParticleFunction]     |
//! | `solver.vrtx.dat`     | [read_vrtx()]    | [TwoParticleFunction]     |
//! | `solver.kernel.dat`   | [read_kernel()]  | [ScreeningKernel]         |
//!
//! # Quickstart example
//!
//! The dimensions are not stored in the files, so they have to be provided
//! and must match the solver input.
//!
//! ```rust, no_run
//! # use iqtools_solver::{read_green, SolverOutput};
//! // Read a specific file
//! let green = read_green("path/to/solver.green.bin.10", 2, 1024).unwrap();
//!
//! // Or use the default file names in a run directory
//! let output = SolverOutput::new("path/to/run");
//! let sigma = output.sgm(2, 8193).unwrap();
//! let hist = output.hist(1024).unwrap();
//! ```
//!
//! Matrix valued functions only populate the diagonal. For `norbs` orbitals
//! there are `nband = norbs / 2` blocks in the file, and block `i` fills the
//! `(i, i)` and `(i + nband, i + nband)` entries.

mod data;
mod error;
mod output;
mod parsers;

pub mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use output::{SolverFile, SolverOutput};

#[doc(inline)]
pub use reader::{
    read_green, read_grn, read_hist, read_hub, read_hyb, read_hybri, read_kernel, read_nmat,
    read_ochi, read_prob, read_schi, read_sgm, read_twop, read_twop_with, read_vrtx,
    read_vrtx_with, read_weiss, read_wss,
};

#[doc(inline)]
pub use data::*;
