//! Cross-field validation of event candidates.
//!
//! The rules compare prices against each other and the four schedule
//! timestamps pairwise. Every rule is evaluated; a candidate that breaks
//! several rules gets one violation per offending field, so a client can fix
//! everything in one round trip.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use strum::{AsRefStr, Display};
use utoipa::ToSchema;

use crate::models::EventInput;

/// Object name reported on every violation
pub const OBJECT_NAME: &str = "event";

/// Machine-readable reason for a violation
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, AsRefStr, ToSchema,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum ViolationCode {
    /// The value conflicts with another field
    WrongValue,
}

/// A validation failure attributable to a single field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FieldViolation {
    pub object_name: String,
    pub field: String,
    pub code: ViolationCode,
    pub default_message: String,
    /// The offending value, for diagnostics
    #[schema(value_type = Object)]
    pub rejected_value: Value,
}

impl FieldViolation {
    pub fn wrong_value(field: &str, message: &str, rejected_value: impl Serialize) -> Self {
        Self {
            object_name: OBJECT_NAME.to_string(),
            field: field.to_string(),
            code: ViolationCode::WrongValue,
            default_message: message.to_string(),
            rejected_value: serde_json::to_value(rejected_value).unwrap_or(Value::Null),
        }
    }
}

/// Check the pricing and schedule rules of an event candidate.
///
/// Presence of the required fields is checked while binding the request, so
/// this only looks at business rules. Returns an empty list for a valid
/// candidate.
pub fn validate(input: &EventInput) -> Vec<FieldViolation> {
    let mut violations = Vec::new();

    if input.base_price > input.max_price && input.max_price != 0 {
        violations.push(FieldViolation::wrong_value(
            "basePrice",
            "BasePrice is wrong",
            input.base_price,
        ));
        violations.push(FieldViolation::wrong_value(
            "maxPrice",
            "MaxPrice is wrong",
            input.max_price,
        ));
    }

    let begin_enrollment = input.begin_enrollment_date_time;
    let close_enrollment = input.close_enrollment_date_time;
    let begin_event = input.begin_event_date_time;
    let end_event = input.end_event_date_time;

    if end_event < begin_event || end_event < close_enrollment || end_event < begin_enrollment {
        violations.push(FieldViolation::wrong_value(
            "endEventDateTime",
            "EndEventDateTime is wrong",
            end_event,
        ));
    }

    if begin_event < begin_enrollment || begin_event < close_enrollment || begin_event > end_event
    {
        violations.push(FieldViolation::wrong_value(
            "beginEventDateTime",
            "BeginEventDateTime is wrong",
            begin_event,
        ));
    }

    if close_enrollment < begin_enrollment
        || close_enrollment > begin_event
        || close_enrollment > end_event
    {
        violations.push(FieldViolation::wrong_value(
            "closeEnrollmentDateTime",
            "CloseEnrollmentDateTime is wrong",
            close_enrollment,
        ));
    }

    violations
}
