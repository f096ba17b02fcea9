use crate::f;
use num_complex::Complex64;

/// Extends primitives with more specific formatting options
pub trait ValueExt {
    /// Better scientific number formatting
    ///
    /// The default is not very consistent for scientific in particular, so this
    /// allows easy definition. The exponent is always signed and padded with
    /// zeros to at least `exp_pad` digits.
    ///
    /// ```rust
    /// # use iqtools_utils::ValueExt;
    /// assert_eq!((-1.0_f64).sci(5, 2), "-1.00000e+00".to_string());
    /// assert_eq!((0.015_f64).sci(3, 3), "1.500e-002".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl ValueExt for f64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let raw = f!("{:.precision$e}", &self, precision = precision);

        // `LowerExp` always writes an 'e', fall back to the raw string anyway
        let Some((mantissa, exponent)) = raw.split_once('e') else {
            return raw;
        };

        let (sign, digits) = match exponent.strip_prefix('-') {
            Some(digits) => ('-', digits),
            None => ('+', exponent),
        };

        f!("{mantissa}e{sign}{digits:0>exp_pad$}")
    }
}

/// Extends complex values with the same scientific formatting
pub trait ComplexExt {
    /// Scientific formatting of both parts as `re+imi`
    ///
    /// ```rust
    /// # use iqtools_utils::ComplexExt;
    /// # use num_complex::Complex64;
    /// let z = Complex64::new(0.5, -2.0);
    /// assert_eq!(z.sci(2, 2), "5.00e-01-2.00e+00i".to_string());
    /// ```
    fn sci(&self, precision: usize, exp_pad: usize) -> String;
}

impl ComplexExt for Complex64 {
    fn sci(&self, precision: usize, exp_pad: usize) -> String {
        let re = self.re.sci(precision, exp_pad);
        let im = self.im.sci(precision, exp_pad);
        if self.im.is_sign_negative() {
            f!("{re}{im}i")
        } else {
            f!("{re}+{im}i")
        }
    }
}
