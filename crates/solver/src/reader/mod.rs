//! Readers for every fixed-format solver output file
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Implementation overview
//!
//! Each file is read line-by-line through a buffered input stream. The layout
//! of every file is rigid, so the reader simply walks a known sequence of data
//! lines and separator lines:
//!
//! - data lines are split on whitespace and fields converted by column index
//! - comment and blank separator lines are skipped without inspection
//!
//! Dimensions are taken on trust. Asking for fewer points than the file holds
//! silently reads the wrong slices, asking for more fails at the first line
//! that is missing or malformed.
//!
//! The file handle is owned by the reader and released on every exit path,
//! including parse failures.

mod correlation;
mod function;
mod statistics;
mod two_particle;

// crate modules
use crate::data::*;
use crate::error::{Error, Result};
use crate::parsers::Record;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

// external crates
use log::{debug, info, warn};

/// Internal line reader shared by every file format
pub(crate) struct LineReader<R> {
    reader: R,
    cached_line: String,
    skipped_line: Vec<u8>,
    line_number: usize,
}

impl LineReader<BufReader<File>> {
    /// Open the file at `path`, reporting a missing file explicitly
    pub(crate) fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::FileNotFound(path.to_path_buf()),
            _ => Error::IOError(e),
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

// ! Internal API
impl<R: BufRead> LineReader<R> {
    pub(crate) fn new(reader: R) -> Self {
        Self {
            reader,
            cached_line: String::new(),
            skipped_line: Vec::new(),
            line_number: 0,
        }
    }

    /// Advances to the next data line and splits it into fields
    pub(crate) fn next_record(&mut self) -> Result<Record<'_>> {
        self.line_number += 1;
        self.cached_line.clear();
        if self.reader.read_line(&mut self.cached_line)? == 0 {
            return Err(Error::UnexpectedEndOfFile {
                line: self.line_number,
            });
        }
        Ok(Record::new(self.line_number, &self.cached_line))
    }

    /// Skips `n` comment or blank lines
    ///
    /// Separators at the very end of a file are often missing, so running out
    /// of lines here is not an error.
    pub(crate) fn skip(&mut self, n: usize) -> Result<()> {
        for _ in 0..n {
            // raw bytes, comment lines are not required to be valid UTF-8
            self.skipped_line.clear();
            if self.reader.read_until(b'\n', &mut self.skipped_line)? == 0 {
                break;
            }
            self.line_number += 1;
        }
        Ok(())
    }
}

/// Number of bands for a spin-degenerate orbital count
fn bands(norbs: usize) -> usize {
    if norbs % 2 != 0 {
        warn!("Odd number of orbitals ({norbs}), the last orbital is never read");
    }
    norbs / 2
}

/// Open `path` and hand the reader to `parse`
fn read_file<T>(
    path: &Path,
    parse: impl FnOnce(&mut LineReader<BufReader<File>>) -> Result<T>,
) -> Result<T> {
    info!("Reading {:?}", path.file_name().unwrap_or(path.as_os_str()));
    let mut reader = LineReader::open(path)?;
    let result = parse(&mut reader)?;
    debug!("Read {} lines", reader.line_number);
    Ok(result)
}

/// Read the imaginary time Green's function G(τ)
///
/// Reads `solver.green.dat` or any `solver.green.bin.<n>` snapshot, which
/// share the same layout.
///
/// - `path` - Path to the file, can be [&str], [String], [Path], etc...
/// - `norbs` - Number of orbitals (spin included), assumed to be even
/// - `ntime` - Number of imaginary time points
///
/// Example
/// ```rust, no_run
/// # use iqtools_solver::read_green;
/// let green = read_green("solver.green.dat", 2, 1024).unwrap();
/// let g00 = green.diagonal(0).unwrap();
/// ```
pub fn read_green<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    ntime: usize,
) -> Result<ImaginaryTimeFunction> {
    read_file(path.as_ref(), |r| r.imaginary_time_function(norbs, ntime))
}

/// Read the imaginary time Weiss function 𝒢(τ) from `solver.weiss.dat`
///
/// See [read_green()] for the arguments.
pub fn read_weiss<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    ntime: usize,
) -> Result<ImaginaryTimeFunction> {
    read_file(path.as_ref(), |r| r.imaginary_time_function(norbs, ntime))
}

/// Read the imaginary time hybridization function Δ(τ) from `solver.hybri.dat`
///
/// See [read_green()] for the arguments.
pub fn read_hybri<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    ntime: usize,
) -> Result<ImaginaryTimeFunction> {
    read_file(path.as_ref(), |r| r.imaginary_time_function(norbs, ntime))
}

/// Read the Matsubara Green's function G(iω) from `solver.grn.dat`
///
/// - `path` - Path to the file, can be [&str], [String], [Path], etc...
/// - `norbs` - Number of orbitals (spin included), assumed to be even
/// - `mfreq` - Number of Matsubara frequency points
///
/// Example
/// ```rust, no_run
/// # use iqtools_solver::read_grn;
/// let grn = read_grn("solver.grn.dat", 2, 8193).unwrap();
/// println!("{grn}");
/// ```
pub fn read_grn<P: AsRef<Path>>(path: P, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
    read_file(path.as_ref(), |r| r.matsubara_function(norbs, mfreq))
}

/// Read the Matsubara Weiss function 𝒢(iω) from `solver.wss.dat`
///
/// See [read_grn()] for the arguments.
pub fn read_wss<P: AsRef<Path>>(path: P, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
    read_file(path.as_ref(), |r| r.matsubara_function(norbs, mfreq))
}

/// Read the Matsubara hybridization function Δ(iω) from `solver.hyb.dat`
///
/// See [read_grn()] for the arguments.
pub fn read_hyb<P: AsRef<Path>>(path: P, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
    read_file(path.as_ref(), |r| r.matsubara_function(norbs, mfreq))
}

/// Read the Matsubara self-energy Σ(iω) from `solver.sgm.dat`
///
/// See [read_grn()] for the arguments.
pub fn read_sgm<P: AsRef<Path>>(path: P, norbs: usize, mfreq: usize) -> Result<MatsubaraFunction> {
    read_file(path.as_ref(), |r| r.matsubara_function(norbs, mfreq))
}

/// Read the Hubbard-I Green's function and self-energy from `solver.hub.dat`
///
/// Unlike the other Matsubara files there is one block per orbital, so `norbs`
/// does not need to be even here.
pub fn read_hub<P: AsRef<Path>>(path: P, norbs: usize, mfreq: usize) -> Result<HubbardFunction> {
    read_file(path.as_ref(), |r| r.hubbard_function(norbs, mfreq))
}

/// Read the perturbation expansion order histogram from `solver.hist.dat`
///
/// - `mkink` - Maximum expansion order, i.e. the number of histogram entries
///
/// Example
/// ```rust, no_run
/// # use iqtools_solver::read_hist;
/// let hist: Vec<f64> = read_hist("solver.hist.dat", 1024).unwrap();
/// ```
pub fn read_hist<P: AsRef<Path>>(path: P, mkink: usize) -> Result<Vec<f64>> {
    read_file(path.as_ref(), |r| r.histogram(mkink))
}

/// Read the atomic state probabilities from `solver.prob.dat`
///
/// - `ncfgs` - Number of atomic configurations
/// - `nsect` - Number of subspace sectors, `0` to skip the sector block
///
/// Example
/// ```rust, no_run
/// # use iqtools_solver::read_prob;
/// let probability = read_prob("solver.prob.dat", 4, 3).unwrap();
/// assert!(probability.sprob.is_some());
/// ```
pub fn read_prob<P: AsRef<Path>>(path: P, ncfgs: usize, nsect: usize) -> Result<Probability> {
    read_file(path.as_ref(), |r| r.probability(ncfgs, nsect))
}

/// Read the occupation and double occupation numbers from `solver.nmat.dat`
pub fn read_nmat<P: AsRef<Path>>(path: P, norbs: usize) -> Result<Occupation> {
    read_file(path.as_ref(), |r| r.occupation(norbs))
}

/// Read the spin-spin correlation function from `solver.schi.dat`
///
/// Note this takes the number of bands, not the number of orbitals.
pub fn read_schi<P: AsRef<Path>>(path: P, nband: usize, ntime: usize) -> Result<SpinCorrelation> {
    read_file(path.as_ref(), |r| r.spin_correlation(nband, ntime))
}

/// Read the orbital-orbital correlation function from `solver.ochi.dat`
pub fn read_ochi<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    ntime: usize,
) -> Result<OrbitalCorrelation> {
    read_file(path.as_ref(), |r| r.orbital_correlation(norbs, ntime))
}

/// Read the two-particle Green's function from `solver.twop.dat`
///
/// Assumes every orbital pair was written, see [PairOrder::Full]. Use
/// [read_twop_with()] to choose otherwise.
///
/// - `norbs` - Number of orbitals (spin included)
/// - `nffrq` - Number of fermionic frequencies
/// - `nbfrq` - Number of bosonic frequencies
pub fn read_twop<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    nffrq: usize,
    nbfrq: usize,
) -> Result<TwoParticleFunction> {
    read_twop_with(path, norbs, nffrq, nbfrq, PairOrder::default())
}

/// Read the two-particle Green's function with an explicit [PairOrder]
///
/// Example
/// ```rust, no_run
/// # use iqtools_solver::{read_twop_with, PairOrder};
/// let twop = read_twop_with("solver.twop.dat", 2, 16, 4, PairOrder::LowerTriangle).unwrap();
/// ```
pub fn read_twop_with<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    nffrq: usize,
    nbfrq: usize,
    order: PairOrder,
) -> Result<TwoParticleFunction> {
    read_file(path.as_ref(), |r| {
        r.two_particle_function(norbs, nffrq, nbfrq, order)
    })
}

/// Read the two-particle vertex data from `solver.vrtx.dat`
///
/// Same layout and arguments as [read_twop()].
pub fn read_vrtx<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    nffrq: usize,
    nbfrq: usize,
) -> Result<TwoParticleFunction> {
    read_vrtx_with(path, norbs, nffrq, nbfrq, PairOrder::default())
}

/// Read the two-particle vertex data with an explicit [PairOrder]
pub fn read_vrtx_with<P: AsRef<Path>>(
    path: P,
    norbs: usize,
    nffrq: usize,
    nbfrq: usize,
    order: PairOrder,
) -> Result<TwoParticleFunction> {
    read_file(path.as_ref(), |r| {
        r.two_particle_function(norbs, nffrq, nbfrq, order)
    })
}

/// Read the screening function K(τ) and its derivative from `solver.kernel.dat`
///
/// Example
/// ```rust, no_run
/// # use iqtools_solver::read_kernel;
/// let kernel = read_kernel("solver.kernel.dat", 1024).unwrap();
/// assert_eq!(kernel.ktau.len(), 1024);
/// ```
pub fn read_kernel<P: AsRef<Path>>(path: P, ntime: usize) -> Result<ScreeningKernel> {
    read_file(path.as_ref(), |r| r.screening_kernel(ntime))
}
