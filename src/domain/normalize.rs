//! Field resolution for heterogeneous aggregate records.
//!
//! The backend's aggregate endpoints return records whose key names vary by
//! data source: a performance row may carry `therapistName` or `userName`,
//! `totalAppointments` or `chatSessions`, and a breakdown bucket may identify
//! itself by a date string, a `{year, month}` composite, or a raw categorical
//! value. Rather than scattering fallback chains through the renderers, each
//! logical field has one ordered candidate-key table here, and resolution picks
//! the first candidate *present* in the record (a JSON `null` counts as
//! absent). If no candidate is present, the type-appropriate default applies:
//! `0` for counts, absent for rates, empty for names.
//!
//! Everything in this module is a pure function: same record in, same row out.

use serde_json::Value;

use crate::domain::entities::{AggregateBucket, PerformanceRow};

/// Candidate keys for a performance row's display name.
pub const PERFORMANCE_NAME: &[&str] = &["therapistName", "userName"];

/// Candidate keys for a performance row's total-count metric.
pub const PERFORMANCE_PRIMARY: &[&str] = &["totalAppointments", "chatSessions"];

/// Candidate keys for a performance row's completed-count metric.
pub const PERFORMANCE_SECONDARY: &[&str] = &["completedAppointments", "totalMessages"];

/// Candidate keys for a performance row's completion rate.
pub const PERFORMANCE_RATE: &[&str] = &["completionRate"];

/// Returns the first candidate value present in the record.
///
/// A key whose value is JSON `null` is treated as absent, so resolution falls
/// through to the next candidate.
fn resolve<'a>(record: &'a Value, candidates: &[&str]) -> Option<&'a Value> {
    candidates
        .iter()
        .filter_map(|key| record.get(key))
        .find(|value| !value.is_null())
}

/// Resolves a string field; `None` when no candidate is present.
pub fn resolve_name(record: &Value, candidates: &[&str]) -> Option<String> {
    resolve(record, candidates).map(display_scalar)
}

/// Resolves a count field, defaulting to `0` when no candidate is present or
/// the present value is not numeric.
pub fn resolve_count(record: &Value, candidates: &[&str]) -> u64 {
    resolve(record, candidates).map(as_count).unwrap_or(0)
}

/// Resolves an optional percentage field.
pub fn resolve_rate(record: &Value, candidates: &[&str]) -> Option<f64> {
    resolve(record, candidates).and_then(Value::as_f64)
}

/// Converts a JSON number to a display count, clamping negatives to zero.
fn as_count(value: &Value) -> u64 {
    value
        .as_u64()
        .or_else(|| value.as_f64().map(|f| f.max(0.0) as u64))
        .unwrap_or(0)
}

/// Renders a JSON scalar verbatim for use as a label.
fn display_scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

/// Resolves a bucket's label from its polymorphic `_id`.
///
/// Priority order:
/// 1. `_id.date` — an explicit date string, used verbatim;
/// 2. `_id.year` + `-` + `_id.month` — composite, when both parts are present;
/// 3. the raw `_id` scalar itself, rendered as a label.
///
/// Records with no usable identifier resolve to an empty label, which renders
/// as a blank cell rather than an error.
pub fn bucket_label(record: &Value) -> String {
    let Some(id) = record.get("_id").filter(|v| !v.is_null()) else {
        return String::new();
    };

    match id {
        Value::Object(fields) => {
            if let Some(date) = fields.get("date").and_then(Value::as_str) {
                return date.to_string();
            }

            match (non_null(fields.get("year")), non_null(fields.get("month"))) {
                (Some(year), Some(month)) => {
                    format!("{}-{}", display_scalar(year), display_scalar(month))
                }
                _ => String::new(),
            }
        }
        scalar => display_scalar(scalar),
    }
}

fn non_null(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Normalizes one raw breakdown record into a display bucket.
pub fn normalize_bucket(record: &Value) -> AggregateBucket {
    AggregateBucket {
        label: bucket_label(record),
        count: resolve_count(record, &["count"]),
    }
}

/// Normalizes one raw activity record into a performance row.
///
/// The same function serves therapist-performance and chat-engagement records;
/// the candidate tables above absorb the schema difference.
pub fn normalize_performance_row(record: &Value) -> PerformanceRow {
    PerformanceRow {
        name: resolve_name(record, PERFORMANCE_NAME).unwrap_or_default(),
        primary: resolve_count(record, PERFORMANCE_PRIMARY),
        secondary: resolve_count(record, PERFORMANCE_SECONDARY),
        rate: resolve_rate(record, PERFORMANCE_RATE),
    }
}

/// Normalizes a whole breakdown series.
pub fn normalize_buckets(records: &[Value]) -> Vec<AggregateBucket> {
    records.iter().map(normalize_bucket).collect()
}

/// Normalizes a whole performance series, preserving backend order.
pub fn normalize_performance_rows(records: &[Value]) -> Vec<PerformanceRow> {
    records.iter().map(normalize_performance_row).collect()
}
