use crate::common::*;

use crate::errors::report_error::*;
use crate::model::notification::attachment::*;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct AttachmentDescriptor {
    pub id: usize,
    pub filename: String,
}

#[doc = r#"
    `payload_json` 파트에 들어가는 제어 객체.

    `attachments[i].id` 는 같은 요청의 `files[i]` 파트를 가리키므로
    반드시 전송되는 첨부파일 목록의 위치(0부터)와 같아야 한다.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
#[getset(get = "pub")]
pub struct NotificationPayload {
    pub content: String,
    pub attachments: Vec<AttachmentDescriptor>,
}

impl NotificationPayload {
    pub fn from_attachments(caption: &str, attachments: &[Attachment]) -> Self {
        let descriptors: Vec<AttachmentDescriptor> = attachments
            .iter()
            .enumerate()
            .map(|(id, attachment)| AttachmentDescriptor::new(id, attachment.filename().clone()))
            .collect();

        NotificationPayload::new(caption.to_string(), descriptors)
    }

    pub fn to_json(&self) -> Result<String, ReportError> {
        serde_json::to_string(self).map_err(|e| {
            ReportError::EncodingError(format!("failed to serialize payload_json: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_follow_attachment_positions() {
        let attachments: Vec<Attachment> = vec![
            Attachment::new("a.png".to_string(), "image/png".to_string(), vec![1]),
            Attachment::new("b.png".to_string(), "image/png".to_string(), vec![2]),
        ];

        let payload: NotificationPayload =
            NotificationPayload::from_attachments("📊 traffic", &attachments);
        let json: Value = serde_json::from_str(&payload.to_json().unwrap()).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "content": "📊 traffic",
                "attachments": [
                    { "id": 0, "filename": "a.png" },
                    { "id": 1, "filename": "b.png" }
                ]
            })
        );
    }

    #[test]
    fn test_caption_is_escaped() {
        let payload: NotificationPayload =
            NotificationPayload::new("line1\r\n--boundary \"quoted\"".to_string(), vec![]);
        let json: String = payload.to_json().unwrap();

        assert!(!json.contains('\r'));
        assert!(!json.contains('\n'));

        let parsed: NotificationPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, payload);
    }
}
