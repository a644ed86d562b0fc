//! Application layer - configuration and the load input form

pub mod config;
pub mod form;
