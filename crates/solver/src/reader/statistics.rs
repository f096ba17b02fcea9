// internal
use super::LineReader;
use crate::error::Result;
use crate::{Occupation, Probability, ScreeningKernel};

// external
use log::debug;
use ndarray::Array2;
use std::io::BufRead;

impl<R: BufRead> LineReader<R> {
    /// hist layout, one comment line then the count in column 2
    pub(crate) fn histogram(&mut self, mkink: usize) -> Result<Vec<f64>> {
        debug!("Histogram entries = {mkink}");
        self.skip(1)?;

        let mut hist = Vec::with_capacity(mkink);
        for _ in 0..mkink {
            hist.push(self.next_record()?.real(2)?);
        }

        Ok(hist)
    }

    /// prob layout
    ///
    /// A comment line, the state probabilities in column 1, then optionally
    /// another comment line and the sector probabilities in column 2.
    pub(crate) fn probability(&mut self, ncfgs: usize, nsect: usize) -> Result<Probability> {
        debug!("Configurations = {ncfgs}");
        debug!("Sectors        = {nsect}");
        self.skip(1)?;

        let mut prob = Vec::with_capacity(ncfgs);
        for _ in 0..ncfgs {
            prob.push(self.next_record()?.real(1)?);
        }

        let sprob = if nsect > 0 {
            self.skip(1)?;
            let mut sprob = Vec::with_capacity(nsect);
            for _ in 0..nsect {
                sprob.push(self.next_record()?.real(2)?);
            }
            Some(sprob)
        } else {
            None
        };

        Ok(Probability { prob, sprob })
    }

    /// nmat layout
    ///
    /// A comment line, `norbs` occupations in column 1, four lines of totals
    /// and comments, then `norbs * norbs` double occupations in column 2.
    pub(crate) fn occupation(&mut self, norbs: usize) -> Result<Occupation> {
        debug!("Orbitals = {norbs}");
        self.skip(1)?;

        let mut nmat = Vec::with_capacity(norbs);
        for _ in 0..norbs {
            nmat.push(self.next_record()?.real(1)?);
        }

        self.skip(4)?;

        let mut nnmat = Array2::<f64>::zeros((norbs, norbs));
        for i in 0..norbs {
            for j in 0..norbs {
                nnmat[[i, j]] = self.next_record()?.real(2)?;
            }
        }

        Ok(Occupation { nmat, nnmat })
    }

    /// kernel layout, no headers and mesh/K/K' in columns 1 to 3
    pub(crate) fn screening_kernel(&mut self, ntime: usize) -> Result<ScreeningKernel> {
        debug!("Time points = {ntime}");

        let mut tmesh = Vec::with_capacity(ntime);
        let mut ktau = Vec::with_capacity(ntime);
        let mut ptau = Vec::with_capacity(ntime);

        for _ in 0..ntime {
            let record = self.next_record()?;
            tmesh.push(record.real(1)?);
            ktau.push(record.real(2)?);
            ptau.push(record.real(3)?);
        }

        Ok(ScreeningKernel { tmesh, ktau, ptau })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn histogram_layout() {
        let text = "# histogram\n1 x 5.0\n2 x 7.0\n3 x 9.0\n";
        let mut reader = LineReader::new(text.as_bytes());
        assert_eq!(reader.histogram(3).unwrap(), vec![5.0, 7.0, 9.0]);
    }

    #[test]
    fn histogram_short_line_is_an_error() {
        let text = "# histogram\n1 x 5.0\n2 x\n";
        let mut reader = LineReader::new(text.as_bytes());
        assert!(matches!(
            reader.histogram(2),
            Err(Error::MissingField { line: 3, .. })
        ));
    }

    #[test]
    fn probability_without_sectors() {
        let text = "# state probability\n1 0.25\n2 0.75\n";
        let mut reader = LineReader::new(text.as_bytes());
        let probability = reader.probability(2, 0).unwrap();

        assert_eq!(probability.prob, vec![0.25, 0.75]);
        assert_eq!(probability.sprob, None);
        assert_eq!(probability.total(), 1.0);
    }

    #[test]
    fn probability_with_sectors() {
        let text = "\
# state probability
1 0.25
2 0.75
# sector probability
1 2 0.5
2 1 0.5
";
        let mut reader = LineReader::new(text.as_bytes());
        let probability = reader.probability(2, 2).unwrap();

        assert_eq!(probability.prob, vec![0.25, 0.75]);
        assert_eq!(probability.sprob, Some(vec![0.5, 0.5]));
    }

    #[test]
    fn occupation_layout() {
        let text = "\
# nmat
1 0.40
2 0.60
----------
sup 0.40
sdn 0.60
# nnmat
1 1 0.40
1 2 0.10
2 1 0.10
2 2 0.60
";
        let mut reader = LineReader::new(text.as_bytes());
        let occupation = reader.occupation(2).unwrap();

        assert_eq!(occupation.nmat, vec![0.4, 0.6]);
        assert_eq!(occupation.nnmat[[0, 1]], 0.1);
        assert_eq!(occupation.nnmat[[1, 1]], 0.6);
        assert_eq!(occupation.total(), 1.0);
    }

    #[test]
    fn kernel_layout() {
        let text = "1 0.0 0.1 0.2\n2 1.0 0.3 0.4\n";
        let mut reader = LineReader::new(text.as_bytes());
        let kernel = reader.screening_kernel(2).unwrap();

        assert_eq!(kernel.tmesh, vec![0.0, 1.0]);
        assert_eq!(kernel.ktau, vec![0.1, 0.3]);
        assert_eq!(kernel.ptau, vec![0.2, 0.4]);
    }
}
