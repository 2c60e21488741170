//! Observability for the student service
//!
//! Structured logging through `tracing`. HTTP requests are traced by the
//! server's `TraceLayer`; store mutations emit `debug` events carrying the
//! affected `student_id`.

mod logging;

pub use logging::{init_logging, Verbosity};
