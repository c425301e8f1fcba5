//! Reference REST API for the Youth Balance dashboard and the `youth-balance`
//! command line entry points.

pub mod cli;
pub mod config;
pub mod handlers;
pub mod router;
pub mod schemas;
pub mod seed;
pub mod store;
