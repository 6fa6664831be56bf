use serde::Serialize;
use serde_json::Value;

const NAME_MESSAGE: &str = "Name is required and must be a non-empty string";
const ADDRESS_MESSAGE: &str = "Address is required and must be a non-empty string";
const LATITUDE_MESSAGE: &str = "Latitude is required and must be a number";
const LONGITUDE_MESSAGE: &str = "Longitude is required and must be a number";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: &'static str,
}

impl FieldError {
    fn new(field: &'static str, message: &'static str) -> Self {
        Self { field, message }
    }
}

/// A creation payload that passed validation.
///
/// Text fields are kept exactly as submitted (untrimmed); the raw coordinate
/// values are kept so the response can echo what the caller sent.
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolSubmission<'a> {
    pub name: &'a str,
    pub address: &'a str,
    pub latitude: f64,
    pub longitude: f64,
    pub raw_latitude: &'a Value,
    pub raw_longitude: &'a Value,
}

/// Checks every field independently and accumulates one error per failing field.
pub fn parse_school_payload(payload: &Value) -> Result<SchoolSubmission<'_>, Vec<FieldError>> {
    let name = required_text(payload, "name");
    let address = required_text(payload, "address");
    let latitude = coordinate(payload, "latitude");
    let longitude = coordinate(payload, "longitude");

    match (name, address, latitude, longitude) {
        (Some(name), Some(address), Some((raw_latitude, lat)), Some((raw_longitude, lon))) => {
            Ok(SchoolSubmission {
                name,
                address,
                latitude: lat,
                longitude: lon,
                raw_latitude,
                raw_longitude,
            })
        }
        (name, address, latitude, longitude) => {
            let mut errors = Vec::new();
            if name.is_none() {
                errors.push(FieldError::new("name", NAME_MESSAGE));
            }
            if address.is_none() {
                errors.push(FieldError::new("address", ADDRESS_MESSAGE));
            }
            if latitude.is_none() {
                errors.push(FieldError::new("latitude", LATITUDE_MESSAGE));
            }
            if longitude.is_none() {
                errors.push(FieldError::new("longitude", LONGITUDE_MESSAGE));
            }
            Err(errors)
        }
    }
}

fn required_text<'a>(payload: &'a Value, field: &str) -> Option<&'a str> {
    payload
        .get(field)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

fn coordinate<'a>(payload: &'a Value, field: &str) -> Option<(&'a Value, f64)> {
    let raw = payload.get(field)?;
    parse_coordinate(raw).map(|n| (raw, n))
}

/// Numbers pass through; strings go through [`parse_float_prefix`].
///
/// Arrays are flattened to their comma-joined text first, so `[40]` and
/// `["40", "x"]` both read as `40`. Null, booleans and objects are rejected.
pub fn parse_coordinate(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_float_prefix(s),
        Value::Array(_) => parse_float_prefix(&coerce_to_text(value)),
        Value::Null | Value::Bool(_) | Value::Object(_) => None,
    }
}

fn coerce_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(coerce_to_text)
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Lenient float parse: skips leading whitespace and parses the longest
/// numeric prefix, ignoring whatever follows (`"40.5km"` is `40.5`).
pub fn parse_float_prefix(raw: &str) -> Option<f64> {
    let s = raw.trim_start();
    let bytes = s.as_bytes();

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate_school_payload(payload: &Value) -> Vec<FieldError> {
        parse_school_payload(payload).err().unwrap_or_default()
    }

    fn fields(errors: &[FieldError]) -> Vec<&'static str> {
        errors.iter().map(|e| e.field).collect()
    }

    #[test]
    fn valid_payload_has_no_errors() {
        let payload = json!({
            "name": "Lincoln High",
            "address": "1 Main St",
            "latitude": "40.0",
            "longitude": -75.0
        });
        assert!(validate_school_payload(&payload).is_empty());
    }

    #[test]
    fn zero_coordinates_are_accepted() {
        let payload = json!({ "name": "Null Island", "address": "0,0", "latitude": "0", "longitude": 0 });
        assert!(validate_school_payload(&payload).is_empty());

        let parsed = parse_school_payload(&payload).unwrap();
        assert_eq!(parsed.latitude, 0.0);
        assert_eq!(parsed.longitude, 0.0);
    }

    #[test]
    fn blank_name_is_reported_alongside_other_errors() {
        let payload = json!({ "name": "   ", "address": "", "latitude": "abc" });
        let errors = validate_school_payload(&payload);
        assert_eq!(fields(&errors), vec!["name", "address", "latitude", "longitude"]);
        assert_eq!(errors[0].message, NAME_MESSAGE);
    }

    #[test]
    fn missing_name_is_reported_even_when_everything_else_is_valid() {
        let payload = json!({ "address": "1 Main St", "latitude": 1, "longitude": 2 });
        assert_eq!(fields(&validate_school_payload(&payload)), vec!["name"]);
    }

    #[test]
    fn omitted_latitude_yields_a_single_error() {
        let payload = json!({ "name": "Lincoln High", "address": "1 Main St", "longitude": "-75.0" });
        let errors = validate_school_payload(&payload);
        assert_eq!(
            errors,
            vec![FieldError::new("latitude", LATITUDE_MESSAGE)]
        );
    }

    #[test]
    fn wrong_types_are_rejected_without_panicking() {
        let payload = json!({
            "name": 42,
            "address": ["1 Main St"],
            "latitude": [],
            "longitude": null
        });
        assert_eq!(
            fields(&validate_school_payload(&payload)),
            vec!["name", "address", "latitude", "longitude"]
        );
    }

    #[test]
    fn non_object_payload_fails_every_field() {
        for payload in [json!([]), json!(null), json!("school")] {
            assert_eq!(validate_school_payload(&payload).len(), 4);
        }
    }

    #[test]
    fn empty_string_coordinate_is_rejected() {
        let payload = json!({ "name": "A", "address": "B", "latitude": "", "longitude": " " });
        assert_eq!(
            fields(&validate_school_payload(&payload)),
            vec!["latitude", "longitude"]
        );
    }

    #[test]
    fn submission_keeps_raw_text_and_coordinates() {
        let payload = json!({ "name": " Lincoln ", "address": "1 Main St", "latitude": "40.5", "longitude": 1 });
        let parsed = parse_school_payload(&payload).unwrap();
        assert_eq!(parsed.name, " Lincoln ");
        assert_eq!(parsed.raw_latitude, &json!("40.5"));
        assert_eq!(parsed.latitude, 40.5);
        assert_eq!(parsed.raw_longitude, &json!(1));
    }

    #[test]
    fn arrays_coerce_through_their_joined_text() {
        assert_eq!(parse_coordinate(&json!([40])), Some(40.0));
        assert_eq!(parse_coordinate(&json!(["40.5", "x"])), Some(40.5));
        assert_eq!(parse_coordinate(&json!([[-75]])), Some(-75.0));
        assert_eq!(parse_coordinate(&json!([])), None);
        assert_eq!(parse_coordinate(&json!([null, 1])), None);
        assert_eq!(parse_coordinate(&json!([{}])), None);
        assert_eq!(parse_coordinate(&json!(true)), None);

        let payload = json!({ "name": "A", "address": "B", "latitude": [40], "longitude": ["-75"] });
        let parsed = parse_school_payload(&payload).unwrap();
        assert_eq!((parsed.latitude, parsed.longitude), (40.0, -75.0));
        assert_eq!(parsed.raw_latitude, &json!([40]));
    }

    #[test]
    fn float_prefix_parsing() {
        assert_eq!(parse_float_prefix("40.0"), Some(40.0));
        assert_eq!(parse_float_prefix("  -75.25"), Some(-75.25));
        assert_eq!(parse_float_prefix("+3"), Some(3.0));
        assert_eq!(parse_float_prefix("40.5km"), Some(40.5));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("7."), Some(7.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("1e"), Some(1.0));
        assert_eq!(parse_float_prefix("2E-1x"), Some(0.2));
        assert_eq!(parse_float_prefix("1.2.3"), Some(1.2));
        assert_eq!(parse_float_prefix("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(parse_float_prefix(""), None);
        assert_eq!(parse_float_prefix("   "), None);
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("."), None);
        assert_eq!(parse_float_prefix("-"), None);
        assert_eq!(parse_float_prefix("NaN"), None);
        assert_eq!(parse_float_prefix("inf"), None);
    }
}
