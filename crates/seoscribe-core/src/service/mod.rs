//! Application services built on the core traits.

pub mod generation;
