//! On-disk inputs.

pub mod translation;
