//! Student HTTP Routes
//!
//! CRUD endpoints over the shared `StudentStore`.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;

use super::errors::{ApiError, ApiResult, MessageResponse};
use crate::student::{Grade, NewStudent, Student, StudentPatch, StudentStore, Text};

// ==================
// Request Types
// ==================

/// Create body; every field is required but checked by hand so that a
/// missing one maps to `InvalidInput` instead of an extractor error.
/// Field values themselves are taken as given.
#[derive(Debug, Deserialize)]
pub struct CreateStudentRequest {
    #[serde(default)]
    pub name: Option<Text>,
    #[serde(default)]
    pub grade: Option<Grade>,
    #[serde(default)]
    pub section: Option<Text>,
}

impl CreateStudentRequest {
    /// Presence check only, no type checks, coercion or range checks
    pub fn into_new_student(self) -> ApiResult<NewStudent> {
        match (self.name, self.grade, self.section) {
            (Some(name), Some(grade), Some(section)) => Ok(NewStudent {
                name,
                grade,
                section,
            }),
            _ => Err(ApiError::InvalidInput),
        }
    }
}

// ==================
// Student Routes
// ==================

/// Create student routes
pub fn student_routes(store: Arc<StudentStore>) -> Router {
    Router::new()
        .route(
            "/students",
            get(list_students_handler).post(create_student_handler),
        )
        .route(
            "/students/:id",
            get(get_student_handler)
                .put(update_student_handler)
                .delete(delete_student_handler),
        )
        .with_state(store)
}

// Typed `{id}` segment: a segment that is not all ASCII digits behaves as
// if no route matched. Digits too large for `u64` can never name a stored
// record, so they are a plain NotFound.
fn student_id(segment: Result<Path<String>, PathRejection>) -> ApiResult<u64> {
    let Path(segment) = segment.map_err(|rejection| {
        debug!(%rejection, "undecodable student id");
        ApiError::NoRoute
    })?;

    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        debug!(%segment, "non-integer student id");
        return Err(ApiError::NoRoute);
    }

    segment.parse::<u64>().map_err(|_| {
        debug!(%segment, "student id out of range");
        ApiError::NotFound
    })
}

// Request bodies must be JSON objects; arrays are not read positionally.
fn object_body<T: DeserializeOwned>(
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> Result<T, String> {
    let Json(object) = body.map_err(|rejection| rejection.to_string())?;
    serde_json::from_value(Value::Object(object)).map_err(|e| e.to_string())
}

// ==================
// Handlers
// ==================

async fn list_students_handler(State(store): State<Arc<StudentStore>>) -> Json<Vec<Student>> {
    Json(store.list())
}

async fn get_student_handler(
    State(store): State<Arc<StudentStore>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<Student>> {
    let id = student_id(id)?;
    Ok(Json(store.get(id)?))
}

async fn create_student_handler(
    State(store): State<Arc<StudentStore>>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Student>)> {
    let request: CreateStudentRequest = object_body(body).map_err(|reason| {
        debug!(%reason, "rejected create body");
        ApiError::InvalidInput
    })?;
    let new = request
        .into_new_student()
        .inspect_err(|_| debug!("create body missing required fields"))?;

    let student = store.insert(new);
    Ok((StatusCode::CREATED, Json(student)))
}

async fn update_student_handler(
    State(store): State<Arc<StudentStore>>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Map<String, Value>>, JsonRejection>,
) -> ApiResult<Json<Student>> {
    let id = student_id(id)?;
    let patch: StudentPatch = match object_body(body) {
        Ok(patch) => patch,
        Err(reason) => {
            // An unknown id is reported before a bad body
            store.get(id)?;
            debug!(%reason, student_id = id, "rejected update body");
            return Err(ApiError::InvalidInput);
        }
    };

    Ok(Json(store.update(id, patch)?))
}

async fn delete_student_handler(
    State(store): State<Arc<StudentStore>>,
    id: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let id = student_id(id)?;
    store.delete(id)?;
    Ok(Json(MessageResponse::new("Student deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(value: serde_json::Value) -> CreateStudentRequest {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_create_request_all_fields_present() {
        let new = request(json!({"name": "Ann", "grade": 9, "section": "A"}))
            .into_new_student()
            .unwrap();
        assert_eq!(new, NewStudent::new("Ann", 9, "A"));
    }

    #[test]
    fn test_create_request_missing_fields() {
        let result = request(json!({"name": "X"})).into_new_student();
        assert_eq!(result, Err(ApiError::InvalidInput));
    }

    #[test]
    fn test_create_request_null_counts_as_missing() {
        let result = request(json!({"name": "X", "grade": null, "section": "A"})).into_new_student();
        assert_eq!(result, Err(ApiError::InvalidInput));
    }

    #[test]
    fn test_create_request_does_not_coerce_grade() {
        let new = request(json!({"name": "Ann", "grade": "9", "section": "A"}))
            .into_new_student()
            .unwrap();
        assert_eq!(new.grade, Grade::Raw(json!("9")));
    }

    #[test]
    fn test_empty_object_body_is_missing_fields() {
        let request: CreateStudentRequest = object_body(Ok(Json(Map::new()))).unwrap();
        assert_eq!(request.into_new_student(), Err(ApiError::InvalidInput));

        let patch: StudentPatch = object_body(Ok(Json(Map::new()))).unwrap();
        assert_eq!(patch, StudentPatch::default());
    }

    #[test]
    fn test_create_request_accepts_any_present_name() {
        let new = request(json!({"name": 5, "grade": 9, "section": ["A"]}))
            .into_new_student()
            .unwrap();
        assert_eq!(new.name, Text::Raw(json!(5)));
        assert_eq!(new.section, Text::Raw(json!(["A"])));
    }

    fn segment(s: &str) -> Result<Path<String>, PathRejection> {
        Ok(Path(s.to_string()))
    }

    #[test]
    fn test_student_id_parsing() {
        assert_eq!(student_id(segment("42")), Ok(42));
        assert_eq!(student_id(segment("007")), Ok(7));
        assert_eq!(student_id(segment("abc")), Err(ApiError::NoRoute));
        assert_eq!(student_id(segment("-1")), Err(ApiError::NoRoute));
        assert_eq!(student_id(segment("+1")), Err(ApiError::NoRoute));
        assert_eq!(student_id(segment("")), Err(ApiError::NoRoute));
        assert_eq!(
            student_id(segment("99999999999999999999999")),
            Err(ApiError::NotFound)
        );
    }
}
