#![forbid(unsafe_code)]

pub mod classifier;
pub mod config;
pub mod datamodel;
pub mod importers;
pub mod infer;
pub mod report;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
