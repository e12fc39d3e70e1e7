use crate::error::ApiError;
use axum::{
    Form,
    extract::{FromRequest, Multipart, Request, rejection::FormRejection},
    http::header::CONTENT_TYPE,
};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Form fields from either an urlencoded or a `multipart/form-data` body.
///
/// Any other body (JSON, no body at all) carries no fields and yields
/// `T::default()`. Uploaded files are not form fields and are skipped; when a
/// field repeats, its first value wins.
pub struct FormFields<T>(pub T);

impl<S, T> FromRequest<S> for FormFields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|val| val.to_str().ok())
            .is_some_and(|val| val.starts_with("multipart/form-data"));

        if is_multipart {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;
            return read_multipart(multipart).await.map(FormFields);
        }

        match Form::<T>::from_request(req, state).await {
            Ok(Form(fields)) => Ok(FormFields(fields)),
            Err(FormRejection::InvalidFormContentType(_)) => Ok(FormFields(T::default())),
            Err(rejection) => Err(ApiError::BadRequest(rejection.body_text())),
        }
    }
}

async fn read_multipart<T: DeserializeOwned>(mut multipart: Multipart) -> Result<T, ApiError> {
    let mut fields = Map::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.file_name().is_some() {
            continue;
        }
        let Some(name) = field.name().map(str::to_owned) else {
            continue;
        };
        let value = field
            .text()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        fields.entry(name).or_insert(Value::String(value));
    }

    serde_json::from_value(Value::Object(fields)).map_err(|e| ApiError::BadRequest(e.to_string()))
}
