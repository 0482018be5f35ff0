//! Shared form field validation for inbound HTTP adapters.

use serde_json::json;

use crate::domain::{BookId, Error};

/// Validation error codes reported in error details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    MissingField,
    InvalidBookId,
    InvalidPrice,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingField => "missing_field",
            ErrorCode::InvalidBookId => "invalid_book_id",
            ErrorCode::InvalidPrice => "invalid_price",
        }
    }
}

/// Newtype wrapper for form field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const BOOK_ID: FieldName = FieldName::new("book_id");
pub(crate) const BOOK_ID_UPDATE: FieldName = FieldName::new("book_id_update");
pub(crate) const ISBN: FieldName = FieldName::new("isbn");
pub(crate) const BOOK_NAME: FieldName = FieldName::new("book_name");
pub(crate) const PRICE: FieldName = FieldName::new("price");
pub(crate) const AUTHOR: FieldName = FieldName::new("author");

pub(crate) fn missing_field_error(field: FieldName) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("missing required field: {field}")).with_details(json!({
        "field": field,
        "code": ErrorCode::MissingField.as_str(),
    }))
}

fn invalid_value_error(field: FieldName, code: ErrorCode, message: &str, value: &str) -> Error {
    let field = field.as_str();
    Error::invalid_request(format!("{field} {message}")).with_details(json!({
        "field": field,
        "value": value,
        "code": code.as_str(),
    }))
}

/// Unwrap a required field. An empty value still counts as present.
pub(crate) fn require(value: Option<String>, field: FieldName) -> Result<String, Error> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_book_id(value: &str, field: FieldName) -> Result<BookId, Error> {
    value.parse().map_err(|_| {
        invalid_value_error(field, ErrorCode::InvalidBookId, "must be an integer", value)
    })
}

/// Parse a price, rejecting NaN and infinities.
pub(crate) fn parse_price(value: &str, field: FieldName) -> Result<f64, Error> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .ok_or_else(|| invalid_value_error(field, ErrorCode::InvalidPrice, "must be a number", value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainCode;
    use rstest::rstest;

    fn detail<'a>(error: &'a Error, key: &str) -> Option<&'a str> {
        error.details()?.get(key)?.as_str()
    }

    #[rstest]
    fn missing_field_reports_the_field() {
        let err = require(None, ISBN).expect_err("absent");
        assert_eq!(err.code(), DomainCode::InvalidRequest);
        assert_eq!(err.message(), "missing required field: isbn");
        assert_eq!(detail(&err, "field"), Some("isbn"));
        assert_eq!(detail(&err, "code"), Some("missing_field"));
    }

    #[rstest]
    fn empty_values_are_present() {
        assert_eq!(require(Some(String::new()), AUTHOR).expect("present"), "");
    }

    #[rstest]
    #[case("12", 12)]
    #[case(" 12 ", 12)]
    fn book_ids_parse(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(
            parse_book_id(raw, BOOK_ID).expect("valid"),
            BookId::new(expected)
        );
    }

    #[rstest]
    #[case("")]
    #[case("twelve")]
    #[case("1e3")]
    fn bad_book_ids_are_rejected(#[case] raw: &str) {
        let err = parse_book_id(raw, BOOK_ID_UPDATE).expect_err("invalid");
        assert_eq!(detail(&err, "code"), Some("invalid_book_id"));
        assert_eq!(detail(&err, "field"), Some("book_id_update"));
        assert_eq!(detail(&err, "value"), Some(raw));
    }

    #[rstest]
    #[case("9.99", 9.99)]
    #[case("10", 10.0)]
    #[case(" 0.5", 0.5)]
    fn prices_parse(#[case] raw: &str, #[case] expected: f64) {
        let price = parse_price(raw, PRICE).expect("valid");
        assert!((price - expected).abs() < f64::EPSILON);
    }

    #[rstest]
    #[case("")]
    #[case("cheap")]
    #[case("NaN")]
    #[case("inf")]
    fn bad_prices_are_rejected(#[case] raw: &str) {
        let err = parse_price(raw, PRICE).expect_err("invalid");
        assert_eq!(detail(&err, "code"), Some("invalid_price"));
    }

    #[rstest]
    fn book_name_field_is_named() {
        assert_eq!(BOOK_NAME.as_str(), "book_name");
    }
}
