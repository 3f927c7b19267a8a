use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug)]
pub struct Health {
    pub status: &'static str,
}

/// Response envelope spoken by every endpoint: `status` is `"success"` for
/// 2xx, `"fail"` for client errors, `"error"` for server errors; `message`
/// and `data` are omitted when unset.
#[derive(Serialize, Debug)]
pub struct ResponseBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ResponseBody {
    pub fn success() -> Self {
        Self { status: "success", message: None, data: None }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self { status: "fail", message: Some(message.into()), data: None }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { status: "error", message: Some(message.into()), data: None }
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn data(mut self, data: serde_json::Value) -> Self {
        self.data = Some(data);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::ResponseBody;
    use serde_json::json;

    #[test]
    fn success_envelope_omits_unset_fields() {
        let body = serde_json::to_value(ResponseBody::success()).unwrap();
        assert_eq!(body, json!({"status": "success"}));
    }

    #[test]
    fn data_and_message_round_trip() {
        let body = ResponseBody::success()
            .message("Album added")
            .data(json!({"albumId": "album-abc"}));
        let v = serde_json::to_value(body).unwrap();
        assert_eq!(v["status"], "success");
        assert_eq!(v["message"], "Album added");
        assert_eq!(v["data"]["albumId"], "album-abc");
    }

    #[test]
    fn fail_envelope_carries_message() {
        let v = serde_json::to_value(ResponseBody::fail("not found")).unwrap();
        assert_eq!(v, json!({"status": "fail", "message": "not found"}));
    }
}
