use serde_json::{Map, Value};

/// Raw answer from the webhook: status code plus undecoded body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookResponse {
    /// Upstream HTTP status, 0 when unknown.
    pub status: u16,
    pub body: String,
}

impl WebhookResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// An empty or non-JSON body decodes to an empty object. Valid JSON of
    /// any other shape (bare string, array, number) is returned as-is.
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or_else(|_| Value::Object(Map::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_range() {
        assert!(WebhookResponse::new(200, "").is_success());
        assert!(WebhookResponse::new(204, "").is_success());
        assert!(!WebhookResponse::new(199, "").is_success());
        assert!(!WebhookResponse::new(302, "").is_success());
        assert!(!WebhookResponse::new(500, "").is_success());
        assert!(!WebhookResponse::new(0, "").is_success());
    }

    #[test]
    fn decodes_objects() {
        let resp = WebhookResponse::new(200, r#"{"reply":"Received!"}"#);
        assert_eq!(resp.json(), json!({"reply": "Received!"}));
    }

    #[test]
    fn non_json_decodes_to_empty_object() {
        assert_eq!(WebhookResponse::new(200, "").json(), json!({}));
        assert_eq!(WebhookResponse::new(200, "Workflow was started").json(), json!({}));
        assert_eq!(WebhookResponse::new(502, "<html>bad gateway</html>").json(), json!({}));
    }

    #[test]
    fn other_json_shapes_are_kept() {
        assert_eq!(WebhookResponse::new(200, r#""plain reply""#).json(), json!("plain reply"));
        assert_eq!(WebhookResponse::new(200, "[1,2]").json(), json!([1, 2]));
        assert_eq!(WebhookResponse::new(200, "null").json(), Value::Null);
    }
}
