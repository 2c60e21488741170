//! roster - a small in-memory student record service
//!
//! `student` holds the store, `http_server` maps the JSON API onto it.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod student;
