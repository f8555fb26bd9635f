pub mod classifier;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod path_utils;
pub mod scanner;

pub use error::{ProjectIndexError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_CONFIG_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
