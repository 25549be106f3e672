//! File format implementations

pub mod ff;
