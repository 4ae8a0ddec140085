//! Utility functions.
//!
//! - [`id_generator`] - Random record identifiers

pub mod id_generator;
