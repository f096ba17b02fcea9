// internal
use super::LineReader;
use crate::error::Result;
use crate::{OrbitalCorrelation, SpinCorrelation};

// external
use log::{debug, trace};
use ndarray::{Array2, Array3};
use std::io::BufRead;

impl<R: BufRead> LineReader<R> {
    /// schi layout
    ///
    /// Per band: a comment line, `ntime` values in column 1, two blank lines.
    /// Then a comment line and the total with the mesh in column 0.
    pub(crate) fn spin_correlation(&mut self, nband: usize, ntime: usize) -> Result<SpinCorrelation> {
        debug!("Bands       = {nband}");
        debug!("Time points = {ntime}");

        let mut sschi = Array2::<f64>::zeros((ntime, nband));
        for i in 0..nband {
            trace!("Reading band {i}");
            self.skip(1)?;
            for j in 0..ntime {
                sschi[[j, i]] = self.next_record()?.real(1)?;
            }
            self.skip(2)?;
        }

        self.skip(1)?;
        let (tmesh, schi) = self.total_correlation(ntime)?;

        Ok(SpinCorrelation { tmesh, schi, sschi })
    }

    /// ochi layout
    ///
    /// Per orbital pair `(i, j)`: a comment line and `ntime` values in column
    /// 1. The two blank lines only follow the last `j` of each `i`. Then a
    /// comment line and the total with the mesh in column 0.
    pub(crate) fn orbital_correlation(
        &mut self,
        norbs: usize,
        ntime: usize,
    ) -> Result<OrbitalCorrelation> {
        debug!("Orbitals    = {norbs}");
        debug!("Time points = {ntime}");

        let mut oochi = Array3::<f64>::zeros((ntime, norbs, norbs));
        for i in 0..norbs {
            for j in 0..norbs {
                trace!("Reading orbital pair ({i}, {j})");
                self.skip(1)?;
                for k in 0..ntime {
                    oochi[[k, j, i]] = self.next_record()?.real(1)?;
                }
            }
            self.skip(2)?;
        }

        self.skip(1)?;
        let (tmesh, ochi) = self.total_correlation(ntime)?;

        Ok(OrbitalCorrelation { tmesh, ochi, oochi })
    }

    /// Final block shared by schi and ochi, mesh in column 0 and value in 1
    fn total_correlation(&mut self, ntime: usize) -> Result<(Vec<f64>, Vec<f64>)> {
        let mut tmesh = Vec::with_capacity(ntime);
        let mut values = Vec::with_capacity(ntime);
        for _ in 0..ntime {
            let record = self.next_record()?;
            tmesh.push(record.real(0)?);
            values.push(record.real(1)?);
        }
        Ok((tmesh, values))
    }
}
