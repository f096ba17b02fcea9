//! Core data types returned by the readers
//!
//! Every type is a plain owned collection of arrays, created fresh on each
//! read. Nothing is shared between reads.

mod correlation;
mod function;
mod statistics;
mod two_particle;

pub use correlation::{OrbitalCorrelation, ScreeningKernel, SpinCorrelation};
pub use function::{HubbardFunction, ImaginaryTimeFunction, MatsubaraFunction};
pub use statistics::{Occupation, Probability};
pub use two_particle::{PairOrder, TwoParticleFunction};
