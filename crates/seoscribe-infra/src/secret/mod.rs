//! API credential resolution.

pub mod env;
