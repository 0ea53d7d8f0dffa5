//! Inbound request parsing and validation.

use serde_json::{Map, Number, Value};

/// The two caller-supplied values that flow into the outbound call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundRequest {
    pub cookie: String,
    pub code: String,
}

/// Why an inbound body was rejected.
///
/// Every variant maps to the same parameter-error envelope; the distinction
/// only exists for logs.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("body could not be read: {0}")]
    Unreadable(String),

    #[error("body is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("body is not a JSON object")]
    NotAnObject,

    #[error("field '{0}' is missing or empty")]
    MissingField(&'static str),
}

/// Parse a raw body into an [`InboundRequest`].
///
/// A field counts as empty when it is absent, `null`, `false`, `0`, `""`,
/// `"0"`, or an array/object. Other scalars are taken in their text form.
pub fn parse_and_validate(raw: &[u8]) -> Result<InboundRequest, ValidationError> {
    let value: Value = serde_json::from_slice(raw)?;
    let Value::Object(fields) = value else {
        return Err(ValidationError::NotAnObject);
    };

    let cookie = required_text(&fields, "cookie")?;
    let code = required_text(&fields, "code")?;

    Ok(InboundRequest { cookie, code })
}

fn required_text(fields: &Map<String, Value>, name: &'static str) -> Result<String, ValidationError> {
    fields
        .get(name)
        .and_then(non_empty_text)
        .ok_or(ValidationError::MissingField(name))
}

fn non_empty_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if s.is_empty() || s == "0" => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::Number(n) => Some(number_text(n)),
        Value::Null | Value::Bool(false) | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Integral floats lose their fraction (`1.0` → `1`, `1e2` → `100`).
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => (f as i64).to_string(),
        _ => n.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_body() {
        let req = parse_and_validate(br#"{"cookie":"sid=abc; uid=1","code":"ABC123"}"#).unwrap();
        assert_eq!(
            req,
            InboundRequest {
                cookie: "sid=abc; uid=1".into(),
                code: "ABC123".into(),
            }
        );
    }

    #[test]
    fn test_extra_fields_ignored() {
        let req = parse_and_validate(br#"{"cookie":"c","code":"x","other":[1,2]}"#).unwrap();
        assert_eq!(req.code, "x");
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(matches!(
            parse_and_validate(b"cookie=c&code=x"),
            Err(ValidationError::Malformed(_))
        ));
        assert!(matches!(parse_and_validate(b""), Err(ValidationError::Malformed(_))));
    }

    #[test]
    fn test_rejects_non_object() {
        assert!(matches!(
            parse_and_validate(br#"["cookie","code"]"#),
            Err(ValidationError::NotAnObject)
        ));
        assert!(matches!(
            parse_and_validate(b"\"cookie\""),
            Err(ValidationError::NotAnObject)
        ));
    }

    #[test]
    fn test_missing_or_empty_fields() {
        let cases = [
            (r#"{}"#, "cookie"),
            (r#"{"code":"x"}"#, "cookie"),
            (r#"{"cookie":"","code":"x"}"#, "cookie"),
            (r#"{"cookie":"c"}"#, "code"),
            (r#"{"cookie":"c","code":""}"#, "code"),
            (r#"{"cookie":"c","code":null}"#, "code"),
            (r#"{"cookie":"c","code":"0"}"#, "code"),
            (r#"{"cookie":"c","code":0}"#, "code"),
            (r#"{"cookie":false,"code":"x"}"#, "cookie"),
            (r#"{"cookie":{"sid":"1"},"code":"x"}"#, "cookie"),
        ];

        for (body, field) in cases {
            match parse_and_validate(body.as_bytes()) {
                Err(ValidationError::MissingField(name)) => assert_eq!(name, field),
                other => panic!("unexpected result for {}: {:?}", body, other),
            }
        }
    }

    #[test]
    fn test_scalar_fields_take_text_form() {
        let req = parse_and_validate(br#"{"cookie":"c","code":12345}"#).unwrap();
        assert_eq!(req.code, "12345");

        let req = parse_and_validate(br#"{"cookie":true,"code":2.5}"#).unwrap();
        assert_eq!(req.cookie, "1");
        assert_eq!(req.code, "2.5");
    }

    #[test]
    fn test_integral_floats_written_as_integers() {
        for (body, code) in [
            (r#"{"cookie":"c","code":1.0}"#, "1"),
            (r#"{"cookie":"c","code":1e2}"#, "100"),
            (r#"{"cookie":"c","code":-7.0}"#, "-7"),
        ] {
            assert_eq!(parse_and_validate(body.as_bytes()).unwrap().code, code);
        }
    }

    #[test]
    fn test_unicode_preserved() {
        let req = parse_and_validate("{\"cookie\":\"名=值\",\"code\":\"卡片\"}".as_bytes()).unwrap();
        assert_eq!(req.cookie, "名=值");
        assert_eq!(req.code, "卡片");
    }
}
