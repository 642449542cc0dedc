//! Shared validation helpers for inbound HTTP adapters.
//!
//! Malformed input is rejected here, before any domain entity is touched.

use chrono::NaiveDate;
use serde_json::json;

use crate::domain::Error;

/// Wire format for calendar dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidDate,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

pub(crate) fn invalid_date_error(field: FieldName, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} must be a YYYY-MM-DD date")).with_details(json!({
        "field": field,
        "value": value,
        "code": ErrorCode::InvalidDate.as_str(),
    }))
}

pub(crate) fn parse_birth_date(value: String, field: FieldName) -> Result<NaiveDate, Error> {
    NaiveDate::parse_from_str(&value, DATE_FORMAT).map_err(|_| invalid_date_error(field, &value))
}

pub(crate) fn parse_optional_birth_date(
    value: Option<String>,
    field: FieldName,
) -> Result<Option<NaiveDate>, Error> {
    value.map(|raw| parse_birth_date(raw, field)).transpose()
}
