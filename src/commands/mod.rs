//! CLI entry points.

pub mod compare;
pub mod resolve;
