//! # HTTP Server Module
//!
//! Maps HTTP verbs and paths onto `StudentStore` operations.
//!
//! # Endpoints
//!
//! - `GET /` - Browser page (a client of the endpoints below)
//! - `GET /health` - Health check
//! - `GET /students` - List all students
//! - `POST /students` - Create a student
//! - `GET /students/{id}` - Fetch one student
//! - `PUT /students/{id}` - Partially update a student
//! - `DELETE /students/{id}` - Delete a student
//!
//! Handlers hold no state of their own; the store is shared through
//! `Arc<StudentStore>`.

pub mod config;
pub mod errors;
pub mod server;
pub mod site_routes;
pub mod student_routes;

pub use config::{ConfigError, HttpServerConfig};
pub use errors::{ApiError, ApiResult, MessageResponse};
pub use server::HttpServer;
