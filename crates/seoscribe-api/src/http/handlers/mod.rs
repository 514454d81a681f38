//! HTTP request handlers for the REST API.

pub mod connection;
pub mod generate;
