use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use vidly_core::AppError;

const DESERIALIZE_PREFIX: &str = "Failed to deserialize the JSON body into the target type: ";

/// Flattens validation errors into one message per failed rule, ordered by
/// field name.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect()
}

fn rejection_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if error_msg.contains("missing field") {
        let field = error_msg
            .split("missing field `")
            .nth(1)
            .and_then(|s| s.split('`').next())
            .unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if let JsonRejection::JsonDataError(_) = rejection {
        let detail = error_msg
            .strip_prefix(DESERIALIZE_PREFIX)
            .unwrap_or(&error_msg);
        return AppError::bad_request(anyhow!("{}", detail));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

/// JSON body extractor that runs the DTO's `validator` rules.
///
/// Any failure, whether malformed JSON, a missing field, a malformed
/// identifier or a rule violation, is rejected with 400 and the first
/// validation message.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_error)?;

        value.validate().map_err(|errors| {
            let message = validation_messages(&errors)
                .into_iter()
                .next()
                .unwrap_or_else(|| "Invalid request body".to_string());
            AppError::bad_request(anyhow!(message))
        })?;

        Ok(ValidatedJson(value))
    }
}
