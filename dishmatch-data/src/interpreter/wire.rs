//! Interpreter request and response bodies.

use dishmatch_core::{InterpretError, QueryAttributes};
use serde::Serialize;
use serde_json::Value;

/// Request body sent to the interpreter.
#[derive(Debug, Serialize)]
pub(super) struct InterpretRequest<'a> {
    pub(super) query: &'a str,
}

/// Decode an interpreter reply into query attributes.
///
/// The reply must be a JSON object; anything else is a parse failure.
pub(super) fn decode_attributes(body: &Value) -> Result<QueryAttributes, InterpretError> {
    let Value::Object(map) = body else {
        return Err(InterpretError::Parse {
            message: format!("expected a JSON object, got {}", json_kind(body)),
        });
    };
    Ok(QueryAttributes::from_json_map(map))
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dishmatch_core::{AttributeName, DietaryQuery};
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn request_serialises_query_field() {
        let body = serde_json::to_value(InterpretRequest { query: "sweet" })
            .unwrap_or_else(|err| panic!("serialise request: {err}"));
        assert_eq!(body, json!({ "query": "sweet" }));
    }

    #[rstest]
    fn object_reply_becomes_attributes() {
        let reply = json!({
            "category": "milkshake",
            "price_tier": null,
            "dietary_restrictions": "lactose intolerant",
        });

        let attributes =
            decode_attributes(&reply).unwrap_or_else(|err| panic!("decode reply: {err}"));

        assert_eq!(attributes.len(), 2);
        assert_eq!(
            attributes.dietary(),
            Some(&DietaryQuery::Single("lactose intolerant".into()))
        );
        assert!(attributes.iter().any(|attribute| matches!(
            attribute,
            dishmatch_core::Attribute::Text { name: AttributeName::Category, value } if value == "milkshake"
        )));
    }

    #[rstest]
    #[case(json!([]), "an array")]
    #[case(json!("sweet"), "a string")]
    #[case(json!(null), "null")]
    fn non_object_reply_is_a_parse_error(#[case] reply: Value, #[case] kind: &str) {
        let err = decode_attributes(&reply).err();
        match err {
            Some(InterpretError::Parse { message }) => assert!(message.contains(kind)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }
}
