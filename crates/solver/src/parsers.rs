//! Field level parsers for whitespace separated solver output

// crate modules
use crate::error::{Error, Result};

// external crates
use num_complex::Complex64;

// nom parser combinators
use nom::combinator::all_consuming;
use nom::number::complete::double;
use nom::IResult;

/// A whole token as an f64, anything left over after the number is an error
pub(crate) fn real(i: &str) -> IResult<&str, f64> {
    all_consuming(double)(i)
}

/// One line of a solver file split into whitespace separated fields
///
/// Columns are 0-based positions after the split. The line number is kept
/// purely for error reporting.
#[derive(Debug)]
pub(crate) struct Record<'a> {
    line: usize,
    fields: Vec<&'a str>,
}

impl<'a> Record<'a> {
    pub(crate) fn new(line: usize, text: &'a str) -> Self {
        Self {
            line,
            fields: text.split_whitespace().collect(),
        }
    }

    /// Real value in `column`
    pub(crate) fn real(&self, column: usize) -> Result<f64> {
        let token = self.fields.get(column).ok_or(Error::MissingField {
            line: self.line,
            column,
            found: self.fields.len(),
        })?;

        let (_, value) = real(token).map_err(|_| Error::InvalidNumber {
            line: self.line,
            column,
            token: token.to_string(),
        })?;

        Ok(value)
    }

    /// Complex value from the real part in `re` and imaginary part in `im`
    pub(crate) fn complex(&self, re: usize, im: usize) -> Result<Complex64> {
        Ok(Complex64::new(self.real(re)?, self.real(im)?))
    }
}
