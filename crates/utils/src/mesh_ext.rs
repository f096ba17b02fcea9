use crate::{f, ValueExt};

/// Extends slices of mesh points with summary helpers
pub trait MeshExt {
    /// First and last points of the mesh
    ///
    /// Meshes written by the solver are ordered, so these are the bounds of
    /// the grid. Returns `None` for an empty mesh.
    ///
    /// ```rust
    /// # use iqtools_utils::MeshExt;
    /// assert_eq!([0.0_f64, 0.5, 1.0].span(), Some((0.0, 1.0)));
    /// assert_eq!(Vec::<f64>::new().span(), None);
    /// ```
    fn span(&self) -> Option<(f64, f64)>;

    /// Human readable description of the mesh bounds
    ///
    /// ```rust
    /// # use iqtools_utils::MeshExt;
    /// assert_eq!([0.0_f64, 10.0].describe(), "2 points, 0.00000e+00 to 1.00000e+01");
    /// assert_eq!(Vec::<f64>::new().describe(), "0 points");
    /// ```
    fn describe(&self) -> String;
}

impl MeshExt for [f64] {
    fn span(&self) -> Option<(f64, f64)> {
        Some((*self.first()?, *self.last()?))
    }

    fn describe(&self) -> String {
        match self.span() {
            Some((lower, upper)) => f!(
                "{} points, {} to {}",
                self.len(),
                lower.sci(5, 2),
                upper.sci(5, 2)
            ),
            None => f!("{} points", self.len()),
        }
    }
}
