// internal
use super::{bands, LineReader};
use crate::error::Result;
use crate::{HubbardFunction, ImaginaryTimeFunction, MatsubaraFunction};

// external
use log::{debug, trace};
use ndarray::Array3;
use num_complex::Complex64;
use std::io::BufRead;

impl<R: BufRead> LineReader<R> {
    /// green, weiss, and hybri layouts
    ///
    /// One block of `ntime` lines per band followed by two blank lines. Each
    /// line holds the mesh in column 2 and the spin up/down values in
    /// columns 3 and 4.
    pub(crate) fn imaginary_time_function(
        &mut self,
        norbs: usize,
        ntime: usize,
    ) -> Result<ImaginaryTimeFunction> {
        let nband = bands(norbs);
        debug!("Bands       = {nband}");
        debug!("Time points = {ntime}");

        let mut tmesh = vec![0.0; ntime];
        let mut values = Array3::<f64>::zeros((ntime, norbs, norbs));

        for i in 0..nband {
            trace!("Reading band {i}");
            for (j, t) in tmesh.iter_mut().enumerate() {
                let record = self.next_record()?;
                *t = record.real(2)?;
                values[[j, i, i]] = record.real(3)?;
                values[[j, i + nband, i + nband]] = record.real(4)?;
            }
            self.skip(2)?;
        }

        Ok(ImaginaryTimeFunction { tmesh, values })
    }

    /// grn, wss, hyb, and sgm layouts
    ///
    /// One block of `mfreq` lines per band followed by two blank lines. The
    /// mesh is in column 1, then real/imaginary pairs in columns 2-3 and 4-5.
    pub(crate) fn matsubara_function(
        &mut self,
        norbs: usize,
        mfreq: usize,
    ) -> Result<MatsubaraFunction> {
        let nband = bands(norbs);
        debug!("Bands       = {nband}");
        debug!("Frequencies = {mfreq}");

        let mut rmesh = vec![0.0; mfreq];
        let mut values = Array3::<Complex64>::zeros((mfreq, norbs, norbs));

        for i in 0..nband {
            trace!("Reading band {i}");
            for (j, w) in rmesh.iter_mut().enumerate() {
                let record = self.next_record()?;
                *w = record.real(1)?;
                values[[j, i, i]] = record.complex(2, 3)?;
                values[[j, i + nband, i + nband]] = record.complex(4, 5)?;
            }
            self.skip(2)?;
        }

        Ok(MatsubaraFunction { rmesh, values })
    }

    /// hub layout
    ///
    /// One block per orbital, with the Green's function in columns 2-3 and
    /// the self-energy in columns 4-5.
    pub(crate) fn hubbard_function(&mut self, norbs: usize, mfreq: usize) -> Result<HubbardFunction> {
        debug!("Orbitals    = {norbs}");
        debug!("Frequencies = {mfreq}");

        let mut rmesh = vec![0.0; mfreq];
        let mut ghub = Array3::<Complex64>::zeros((mfreq, norbs, norbs));
        let mut shub = Array3::<Complex64>::zeros((mfreq, norbs, norbs));

        for i in 0..norbs {
            trace!("Reading orbital {i}");
            for (j, w) in rmesh.iter_mut().enumerate() {
                let record = self.next_record()?;
                *w = record.real(1)?;
                ghub[[j, i, i]] = record.complex(2, 3)?;
                shub[[j, i, i]] = record.complex(4, 5)?;
            }
            self.skip(2)?;
        }

        Ok(HubbardFunction { rmesh, ghub, shub })
    }
}
