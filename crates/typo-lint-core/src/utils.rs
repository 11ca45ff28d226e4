//! Utility functions for rule implementations.

pub mod lines;
pub mod paths;

// Re-export commonly used utilities for rule implementations
#[doc(inline)]
pub use lines::Lines;
#[doc(inline)]
pub use paths::normalize;
