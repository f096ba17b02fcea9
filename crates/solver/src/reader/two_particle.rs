// internal
use super::LineReader;
use crate::error::Result;
use crate::{PairOrder, TwoParticleFunction};

// external
use log::{debug, trace};
use ndarray::Array5;
use num_complex::Complex64;
use std::io::BufRead;

impl<R: BufRead> LineReader<R> {
    /// twop and vrtx layout
    ///
    /// For every orbital pair `(m, n)` and bosonic frequency `k` there are
    /// three comment lines followed by `nffrq * nffrq` lines, iterating the
    /// second fermionic index in the outer loop. The Green's function is in
    /// columns 2-3 and the vertex in columns 8-9.
    pub(crate) fn two_particle_function(
        &mut self,
        norbs: usize,
        nffrq: usize,
        nbfrq: usize,
        order: PairOrder,
    ) -> Result<TwoParticleFunction> {
        debug!("Orbitals    = {norbs}");
        debug!("Fermionic   = {nffrq}");
        debug!("Bosonic     = {nbfrq}");
        debug!("Pair blocks = {}", order.number_of_pairs(norbs));

        let shape = (nffrq, nffrq, nbfrq, norbs, norbs);
        let mut g2 = Array5::<Complex64>::zeros(shape);
        let mut f2 = Array5::<Complex64>::zeros(shape);

        for m in 0..norbs {
            for n in order.partners(m, norbs) {
                trace!("Reading orbital pair ({m}, {n})");
                for k in 0..nbfrq {
                    self.skip(3)?;
                    for j in 0..nffrq {
                        for i in 0..nffrq {
                            let record = self.next_record()?;
                            let g = record.complex(2, 3)?;
                            let f = record.complex(8, 9)?;
                            g2[[i, j, k, n, m]] = g;
                            g2[[i, j, k, m, n]] = g;
                            f2[[i, j, k, n, m]] = f;
                            f2[[i, j, k, m, n]] = f;
                        }
                    }
                }
            }
        }

        Ok(TwoParticleFunction { g2, f2 })
    }
}
