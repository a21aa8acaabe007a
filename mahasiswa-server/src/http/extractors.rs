//! Custom Axum extractors
//!
//! Wrap the stock `Path`, `Form` and `Multipart` extractors so rejections
//! come back as `ApiError::Unprocessable` with the usual `{"detail": ...}`
//! body.

use axum::extract::{Form, FromRequest, FromRequestParts, Multipart, Path, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::request::Parts;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::models::Student;

/// Extract an integer record id from the path
pub struct StudentId(pub i64);

impl<S> FromRequestParts<S> for StudentId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id): Path<i64> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Unprocessable {
                message: format!("id: {}", e.body_text()),
            })?;

        Ok(Self(id))
    }
}

/// Extract the five student fields from a form body
///
/// Accepts `application/x-www-form-urlencoded` and `multipart/form-data`.
pub struct StudentForm(pub Student);

impl<S> FromRequest<S> for StudentForm
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_multipart(&req) {
            return from_multipart(req, state).await.map(Self);
        }

        let Form(student): Form<Student> = Form::from_request(req, state)
            .await
            .map_err(|e| ApiError::Unprocessable {
                message: e.body_text(),
            })?;

        Ok(Self(student))
    }
}

fn is_multipart(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.starts_with("multipart/form-data"))
}

/// Collect text parts by name, then deserialize like an urlencoded form.
async fn from_multipart<S>(req: Request, state: &S) -> Result<Student, ApiError>
where
    S: Send + Sync,
{
    let unprocessable = |message: String| ApiError::Unprocessable { message };

    let mut multipart = Multipart::from_request(req, state)
        .await
        .map_err(|e| unprocessable(e.body_text()))?;

    let mut fields = Map::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| unprocessable(e.body_text()))?
    {
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let text = field.text().await.map_err(|e| unprocessable(e.body_text()))?;
        if fields.insert(name.clone(), Value::String(text)).is_some() {
            return Err(unprocessable(format!(
                "Failed to deserialize form: duplicate field `{}`",
                name
            )));
        }
    }

    serde_json::from_value(Value::Object(fields))
        .map_err(|e| unprocessable(format!("Failed to deserialize form: {}", e)))
}
