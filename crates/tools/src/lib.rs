//! Fixture loading and reports behind the `swathctl` binary.

pub mod fixture;
pub mod report;
