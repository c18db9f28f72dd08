//! Shared settings, errors and logging bootstrap for calfold.

pub mod config;
pub mod error;
pub mod logging;
