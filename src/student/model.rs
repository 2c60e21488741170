//! # Student Model

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Grade level of a student
///
/// Normally an integer. Neither create nor update coerces types, so any
/// other JSON value a client sends is kept verbatim and echoed back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Grade {
    Level(i64),
    Raw(Value),
}

/// Free-text field of a student (`name`, `section`)
///
/// Normally a string; like `Grade`, any other JSON value is stored as given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Text {
    Plain(String),
    Raw(Value),
}

impl From<String> for Text {
    fn from(s: String) -> Self {
        Text::Plain(s)
    }
}

impl From<&str> for Text {
    fn from(s: &str) -> Self {
        Text::Plain(s.to_string())
    }
}

impl PartialEq<str> for Text {
    fn eq(&self, other: &str) -> bool {
        matches!(self, Text::Plain(s) if s == other)
    }
}

impl PartialEq<&str> for Text {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

/// A student record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    /// Assigned by the store, never changes
    pub id: u64,
    pub name: Text,
    pub grade: Grade,
    pub section: Text,
}

impl Student {
    /// Overwrite every field present in `patch`
    pub fn apply(&mut self, patch: StudentPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(grade) = patch.grade {
            self.grade = grade;
        }
        if let Some(section) = patch.section {
            self.section = section;
        }
    }
}

/// Fields for a record that has not been assigned an id yet
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewStudent {
    pub name: Text,
    pub grade: Grade,
    pub section: Text,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, grade: i64, section: impl Into<String>) -> Self {
        Self {
            name: Text::Plain(name.into()),
            grade: Grade::Level(grade),
            section: Text::Plain(section.into()),
        }
    }

    pub(crate) fn with_id(self, id: u64) -> Student {
        Student {
            id,
            name: self.name,
            grade: self.grade,
            section: self.section,
        }
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Text>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<Grade>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Text>,
}
