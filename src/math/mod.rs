//! Mathematical utilities: least squares and the fitted rating line.

pub mod ols;

pub use ols::*;
