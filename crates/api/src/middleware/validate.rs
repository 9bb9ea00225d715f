use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request, rejection::PathRejection},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::errors::{HttpError, ValidationErrorItem};
use utoipa::{
    PartialSchema, ToSchema,
    openapi::{RefOr, Schema},
};
use validator::{Validate, ValidationErrors};

/// JSON body that has been decoded and then checked with its `validator`
/// rules.
///
/// The body is read as JSON whatever the `Content-Type` says. Anything that
/// is not valid JSON, misses a required field, has a wrong type or breaks a
/// rule becomes a 422 with one item per problem.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate + ToSchema + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|rejection| HttpError::Rejected(rejection.status(), rejection.body_text()))?;

        let json_value = decode_body::<T>(&bytes).map_err(HttpError::UnprocessableEntity)?;

        json_value
            .validate()
            .map_err(|errors| HttpError::UnprocessableEntity(format_validation_errors(&errors)))?;

        Ok(Self(json_value))
    }
}

fn decode_body<T>(bytes: &[u8]) -> Result<T, Vec<ValidationErrorItem>>
where
    T: DeserializeOwned + ToSchema,
{
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(vec![ValidationErrorItem::new(
            &["body"],
            "Field required",
            "missing",
        )]);
    }

    let value: Value = serde_json::from_slice(bytes).map_err(|err| {
        vec![ValidationErrorItem::new(
            &["body"],
            format!("JSON decode error: {err}"),
            "json_invalid",
        )]
    })?;

    if let Value::Object(fields) = &value {
        let missing: Vec<ValidationErrorItem> = required_fields::<T>()
            .iter()
            .filter(|name| !fields.contains_key(name.as_str()))
            .map(|name| {
                ValidationErrorItem::new(&["body", name.as_str()], "Field required", "missing")
            })
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }
    }

    serde_json::from_value(value).map_err(|err| vec![data_error(&err)])
}

/// Keys the payload must carry, in declaration order. Fields with a serde
/// default or an `Option` type are not listed.
fn required_fields<T: ToSchema>() -> Vec<String> {
    match <T as PartialSchema>::schema() {
        RefOr::T(Schema::Object(object)) => object.required,
        _ => Vec::new(),
    }
}

fn data_error(err: &serde_json::Error) -> ValidationErrorItem {
    let msg = err.to_string();

    if let Some(field) = msg
        .strip_prefix("missing field `")
        .and_then(|rest| rest.split('`').next())
    {
        return ValidationErrorItem::new(&["body", field], "Field required", "missing");
    }

    let kind = if msg.starts_with("invalid type") {
        "type_error"
    } else {
        "value_error"
    };
    ValidationErrorItem::new(&["body"], msg, kind)
}

/// Integer `{id}` path segment.
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| match rejection {
                PathRejection::FailedToDeserializePathParams(_) => {
                    HttpError::UnprocessableEntity(vec![ValidationErrorItem::new(
                        &["path", "id"],
                        "Input should be a valid integer, unable to parse string as an integer",
                        "int_parsing",
                    )])
                }
                other => HttpError::Internal(other.body_text()),
            })?;

        Ok(Self(id))
    }
}

fn format_validation_errors(errors: &ValidationErrors) -> Vec<ValidationErrorItem> {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|(a, _), (b, _)| a.cmp(b));

    fields
        .into_iter()
        .flat_map(|(field, field_errors)| {
            let field = field.to_string();
            field_errors.iter().map(move |error| {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| match error.code.as_ref() {
                        "email" => "Invalid email format".to_string(),
                        "length" => "Invalid length".to_string(),
                        "range" => "Value out of range".to_string(),
                        _ => format!("Invalid {field}"),
                    });

                ValidationErrorItem::new(
                    &["body", field.as_str()],
                    message,
                    error.code.to_string(),
                )
            })
        })
        .collect()
}
