//! Fitted model artifacts
//!
//! Models are fitted offline; this crate only restores and applies them.

mod linear;

pub use linear::LinearRegression;
