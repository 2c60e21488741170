//! # Student Store
//!
//! Records are kept in insertion order. New ids are `max(existing) + 1`
//! (1 when empty), recomputed on every insert. Deleting the record that
//! holds the maximum id therefore lets that id be handed out again; ids
//! below the maximum are never reused.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::errors::{StoreError, StoreResult};
use super::model::{NewStudent, Student, StudentPatch};

/// In-memory student collection
#[derive(Debug, Default)]
pub struct StudentStore {
    students: Mutex<Vec<Student>>,
}

impl StudentStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `records` in the given order
    pub fn with_records(records: Vec<Student>) -> Self {
        Self {
            students: Mutex::new(records),
        }
    }

    /// Create a store seeded with the two demo records
    pub fn with_demo_records() -> Self {
        Self::with_records(vec![
            NewStudent::new("Emily Pajarpa", 10, "Stallman").with_id(1),
            NewStudent::new("John Doe", 9, "Torvalds").with_id(2),
        ])
    }

    // Nothing panics while the guard is held, so a poisoned lock still
    // guards a consistent collection.
    fn lock(&self) -> MutexGuard<'_, Vec<Student>> {
        self.students.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<Student> {
        self.lock().clone()
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> StoreResult<Student> {
        self.lock()
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    /// Assign the next id and append the record
    pub fn insert(&self, new: NewStudent) -> Student {
        let mut students = self.lock();
        let id = next_id(&students);
        let student = new.with_id(id);
        students.push(student.clone());

        debug!(student_id = id, "student inserted");
        student
    }

    /// Apply a partial update to an existing record
    pub fn update(&self, id: u64, patch: StudentPatch) -> StoreResult<Student> {
        let mut students = self.lock();
        let student = students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        student.apply(patch);

        debug!(student_id = id, "student updated");
        Ok(student.clone())
    }

    /// Remove a record
    pub fn delete(&self, id: u64) -> StoreResult<()> {
        let mut students = self.lock();
        let index = students
            .iter()
            .position(|s| s.id == id)
            .ok_or(StoreError::NotFound(id))?;
        students.remove(index);

        debug!(student_id = id, "student deleted");
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

fn next_id(students: &[Student]) -> u64 {
    students.iter().map(|s| s.id).max().unwrap_or(0) + 1
}
