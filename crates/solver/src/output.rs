//! Default file names and the solver output directory

// crate modules
use crate::data::*;
use crate::error::Result;
use crate::reader::*;

// standard library
use std::path::{Path, PathBuf};

/// Every output file understood by the readers
///
/// The solver always writes to fixed file names in its working directory.
///
/// ```rust
/// # use iqtools_solver::SolverFile;
/// assert_eq!(SolverFile::Green.file_name(), "solver.green.dat");
/// assert_eq!(SolverFile::GreenBin(10).file_name(), "solver.green.bin.10");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SolverFile {
    /// Imaginary time Green's function
    Green,
    /// Binned snapshot of the imaginary time Green's function
    GreenBin(u32),
    /// Matsubara Green's function
    Grn,
    /// Imaginary time Weiss function
    Weiss,
    /// Matsubara Weiss function
    Wss,
    /// Imaginary time hybridization function
    Hybri,
    /// Matsubara hybridization function
    Hyb,
    /// Matsubara self-energy
    Sgm,
    /// Hubbard-I Green's function and self-energy
    Hub,
    /// Expansion order histogram
    Hist,
    /// Atomic state probability
    Prob,
    /// Occupation numbers
    Nmat,
    /// Spin-spin correlation function
    Schi,
    /// Orbital-orbital correlation function
    Ochi,
    /// Two-particle Green's function
    Twop,
    /// Two-particle vertex function
    Vrtx,
    /// Screening function
    Kernel,
}

impl SolverFile {
    /// Default file name written by the solver
    pub fn file_name(&self) -> String {
        let name = match self {
            Self::Green => "green",
            Self::GreenBin(n) => return format!("solver.green.bin.{n}"),
            Self::Grn => "grn",
            Self::Weiss => "weiss",
            Self::Wss => "wss",
            Self::Hybri => "hybri",
            Self::Hyb => "hyb",
            Self::Sgm => "sgm",
            Self::Hub => "hub",
            Self::Hist => "hist",
            Self::Prob => "prob",
            Self::Nmat => "nmat",
            Self::Schi => "schi",
            Self::Ochi => "ochi",
            Self::Twop => "twop",
            Self::Vrtx => "vrtx",
            Self::Kernel => "kernel",
        };
        format!("solver.{name}.dat")
    }
}

impl std::fmt::Display for SolverFile {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.file_name())
    }
}

/// Directory containing the output of a solver run
///
/// Convenience wrapper that resolves the default [SolverFile] name for each
/// quantity. Defaults to the current working directory, which is where the
/// solver writes everything.
///
/// ```rust, no_run
/// # use iqtools_solver::SolverOutput;
/// // Read from the current directory
/// let output = SolverOutput::default();
/// let green = output.green(2, 1024).unwrap();
///
/// // Read from a specific run
/// let output = SolverOutput::new("path/to/run");
/// let hist = output.hist(1024).unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverOutput {
    directory: PathBuf,
}

impl Default for SolverOutput {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
        }
    }
}

impl SolverOutput {
    /// Output files in `directory`
    pub fn new<P: AsRef<Path>>(directory: P) -> Self {
        Self {
            directory: directory.as_ref().to_path_buf(),
        }
    }

    /// Directory containing the output files
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Full path to a specific output file
    ///
    /// ```rust
    /// # use iqtools_solver::{SolverFile, SolverOutput};
    /// # use std::path::Path;
    /// let output = SolverOutput::new("run");
    /// assert_eq!(output.path(SolverFile::Hist), Path::new("run/solver.hist.dat"));
    /// ```
    pub fn path(&self, file: SolverFile) -> PathBuf {
        self.directory.join(file.file_name())
    }

    /// See [read_green()]
    pub fn green(&self, norbs: usize, ntime: usize) -> Result<ImaginaryTimeFunction> {
        read_green(self.path(SolverFile::Green), norbs, ntime)
    }

    /// Read the `solver.green.bin.<index>` snapshot, see [read_green()]
    pub fn green_bin(
        &self,
        index: u32,
        norbs: usize,
        ntime: usize,
    ) -> Result<ImaginaryTimeFunction> {
        read_green(self.path(SolverFile::GreenBin(index)), norbs, ntime)
    }

    /// See [read_grn()]
    pub fn grn(&self, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
        read_grn(self.path(SolverFile::Grn), norbs, mfreq)
    }

    /// See [read_weiss()]
    pub fn weiss(&self, norbs: usize, ntime: usize) -> Result<ImaginaryTimeFunction> {
        read_weiss(self.path(SolverFile::Weiss), norbs, ntime)
    }

    /// See [read_wss()]
    pub fn wss(&self, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
        read_wss(self.path(SolverFile::Wss), norbs, mfreq)
    }

    /// See [read_hybri()]
    pub fn hybri(&self, norbs: usize, ntime: usize) -> Result<ImaginaryTimeFunction> {
        read_hybri(self.path(SolverFile::Hybri), norbs, ntime)
    }

    /// See [read_hyb()]
    pub fn hyb(&self, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
        read_hyb(self.path(SolverFile::Hyb), norbs, mfreq)
    }

    /// See [read_sgm()]
    pub fn sgm(&self, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
        read_sgm(self.path(SolverFile::Sgm), norbs, mfreq)
    }

    /// See [read_hub()]
    pub fn hub(&self, norbs: usize, mfreq: usize) -> Result<HubbardFunction> {
        read_hub(self.path(SolverFile::Hub), norbs, mfreq)
    }

    /// See [read_hist()]
    pub fn hist(&self, mkink: usize) -> Result<Vec<f64>> {
        read_hist(self.path(SolverFile::Hist), mkink)
    }

    /// See [read_prob()]
    pub fn prob(&self, ncfgs: usize, nsect: usize) -> Result<Probability> {
        read_prob(self.path(SolverFile::Prob), ncfgs, nsect)
    }

    /// See [read_nmat()]
    pub fn nmat(&self, norbs: usize) -> Result<Occupation> {
        read_nmat(self.path(SolverFile::Nmat), norbs)
    }

    /// See [read_schi()]
    pub fn schi(&self, nband: usize, ntime: usize) -> Result<SpinCorrelation> {
        read_schi(self.path(SolverFile::Schi), nband, ntime)
    }

    /// See [read_ochi()]
    pub fn ochi(&self, norbs: usize, ntime: usize) -> Result<OrbitalCorrelation> {
        read_ochi(self.path(SolverFile::Ochi), norbs, ntime)
    }

    /// See [read_twop()]
    pub fn twop(&self, norbs: usize, nffrq: usize, nbfrq: usize) -> Result<TwoParticleFunction> {
        read_twop(self.path(SolverFile::Twop), norbs, nffrq, nbfrq)
    }

    /// See [read_twop_with()]
    pub fn twop_with(
        &self,
        norbs: usize,
        nffrq: usize,
        nbfrq: usize,
        order: PairOrder,
    ) -> Result<TwoParticleFunction> {
        read_twop_with(self.path(SolverFile::Twop), norbs, nffrq, nbfrq, order)
    }

    /// See [read_vrtx()]
    pub fn vrtx(&self, norbs: usize, nffrq: usize, nbfrq: usize) -> Result<TwoParticleFunction> {
        read_vrtx(self.path(SolverFile::Vrtx), norbs, nffrq, nbfrq)
    }

    /// See [read_vrtx_with()]
    pub fn vrtx_with(
        &self,
        norbs: usize,
        nffrq: usize,
        nbfrq: usize,
        order: PairOrder,
    ) -> Result<TwoParticleFunction> {
        read_vrtx_with(self.path(SolverFile::Vrtx), norbs, nffrq, nbfrq, order)
    }

    /// See [read_kernel()]
    pub fn kernel(&self, ntime: usize) -> Result<ScreeningKernel> {
        read_kernel(self.path(SolverFile::Kernel), ntime)
    }
}
