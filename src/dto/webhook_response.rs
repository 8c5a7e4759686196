use crate::common::*;

#[doc = "Status line and body of the webhook's reply, kept verbatim."]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct WebhookResponse {
    pub status: u16,
    pub reason: String,
    pub body: String,
}

impl WebhookResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

impl std::fmt::Display for WebhookResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.status, self.reason, self.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_range() {
        assert!(WebhookResponse::new(200, "OK".into(), String::new()).is_success());
        assert!(WebhookResponse::new(204, "No Content".into(), String::new()).is_success());
        assert!(!WebhookResponse::new(413, "Payload Too Large".into(), String::new()).is_success());
        assert!(!WebhookResponse::new(301, "Moved Permanently".into(), String::new()).is_success());
    }

    #[test]
    fn test_display_matches_status_line_and_body() {
        let response = WebhookResponse::new(200, "OK".into(), "{\"id\":\"123\"}".into());
        assert_eq!(response.to_string(), "200 OK {\"id\":\"123\"}");
    }
}
