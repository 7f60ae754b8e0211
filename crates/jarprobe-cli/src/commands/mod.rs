//! Command implementations.

pub mod scan;
