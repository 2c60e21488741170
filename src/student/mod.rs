//! # Student Records
//!
//! The in-memory authority for student records.
//!
//! `StudentStore` exclusively owns the collection. Every read and mutation
//! goes through its methods and is serialized behind a single lock, so the
//! HTTP layer can share one store across all request tasks.

pub mod errors;
pub mod model;
pub mod store;

pub use errors::{StoreError, StoreResult};
pub use model::{Grade, NewStudent, Student, StudentPatch, Text};
pub use store::StudentStore;
