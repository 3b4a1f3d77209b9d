//! Views built on the primitives.

mod calculation;

pub use calculation::{calculation, Calculation, CalculationProps, CalculationView};
