//! Typed request and response messages for the Alibaba Cloud DNS API
//! (`Alidns`, version `2015-01-09`), with helpers to turn them into RPC
//! query parameters.

pub mod api;
pub mod config;
pub mod models;
pub mod planner;

#[cfg(test)]
mod tests;
