use crate::common::*;

use crate::dto::{notification_payload::*, webhook_response::*};
use crate::errors::report_error::*;
use crate::model::notification::attachment::*;
use crate::traits::repository_traits::webhook_repository::*;
use crate::traits::service_traits::notification_service::*;
use crate::utils_modules::multipart_encoder::*;

#[derive(Debug, Getters, new)]
#[getset(get = "pub")]
pub struct NotificationServiceImpl<R: WebhookRepository> {
    webhook_repository: R,
}

impl<R: WebhookRepository> NotificationServiceImpl<R> {
    #[doc = r#"
        `payload_json` 파트 1개 + 첨부파일마다 `files[i]` 파트 1개를 순서대로 만든다.
        `files[i]` 의 i 는 payload 의 `attachments[i].id` 와 같은 값이다.
    "#]
    fn build_form_parts<'a>(
        payload_json: &'a str,
        attachments: &'a [Attachment],
    ) -> Vec<FormPart<'a>> {
        let mut parts: Vec<FormPart<'a>> = Vec::with_capacity(attachments.len() + 1);
        parts.push(FormPart::text("payload_json", payload_json));

        for (idx, attachment) in attachments.iter().enumerate() {
            parts.push(FormPart::file(
                format!("files[{}]", idx),
                attachment.filename(),
                attachment.mime_type(),
                attachment.content(),
            ));
        }

        parts
    }
}

#[async_trait]
impl<R: WebhookRepository> NotificationService for NotificationServiceImpl<R> {
    #[doc = r#"
        첨부파일들을 순서대로 읽어들인다. 하나라도 실패하면 즉시 중단한다.

        # Arguments
        * `paths` - 첨부할 파일 경로 목록

        # Returns
        * `Result<Vec<Attachment>, ReportError>` - 파일이 없거나 읽을 수 없으면 `AttachmentReadError`
    "#]
    async fn load_attachments(&self, paths: &[PathBuf]) -> Result<Vec<Attachment>, ReportError> {
        let mut attachments: Vec<Attachment> = Vec::with_capacity(paths.len());

        for path in paths {
            let attachment: Attachment = Attachment::load(path).await.map_err(|e| {
                error!("[NotificationServiceImpl->load_attachments] {}", e);
                e
            })?;

            info!(
                "Attachment loaded: {} ({}, {} bytes)",
                attachment.filename(),
                attachment.mime_type(),
                attachment.content().len()
            );
            attachments.push(attachment);
        }

        Ok(attachments)
    }

    #[doc = r#"
        caption 과 첨부파일을 multipart/form-data 요청 하나로 만들어 웹훅으로 전송한다.

        # Arguments
        * `webhook_url` - 전송 대상 웹훅 URL
        * `caption` - 메시지 본문 (`payload_json.content`)
        * `attachments` - 전송할 첨부파일, 순서가 곧 `files[i]` 의 i

        # Returns
        * `Result<WebhookResponse, ReportError>` - 응답 상태/본문 그대로. 2xx 가 아니어도 오류가 아니다.
    "#]
    async fn send(
        &self,
        webhook_url: &str,
        caption: &str,
        attachments: &[Attachment],
    ) -> Result<WebhookResponse, ReportError> {
        let payload: NotificationPayload = NotificationPayload::from_attachments(caption, attachments);
        let payload_json: String = payload.to_json()?;

        let body: MultipartBody = {
            let parts: Vec<FormPart<'_>> = Self::build_form_parts(&payload_json, attachments);
            encode_multipart(&parts)?
        };

        let response: WebhookResponse = self
            .webhook_repository
            .post_multipart(webhook_url, body)
            .await
            .map_err(|e| {
                error!("[NotificationServiceImpl->send] {}", e);
                e
            })?;

        info!(
            "[NotificationServiceImpl->send] webhook answered {} {}",
            response.status(),
            response.reason()
        );

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    /* Records every call instead of touching the network. */
    struct RecordingRepository {
        response: WebhookResponse,
        calls: Mutex<Vec<(String, String, Vec<u8>)>>,
    }

    impl RecordingRepository {
        fn replying(status: u16, reason: &str, body: &str) -> Self {
            RecordingRepository {
                response: WebhookResponse::new(status, reason.to_string(), body.to_string()),
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl WebhookRepository for RecordingRepository {
        async fn post_multipart(
            &self,
            webhook_url: &str,
            body: MultipartBody,
        ) -> Result<WebhookResponse, ReportError> {
            let content_type: String = body.content_type();
            self.calls.lock().unwrap().push((
                webhook_url.to_string(),
                content_type,
                body.into_bytes(),
            ));
            Ok(self.response.clone())
        }
    }

    fn attachment(filename: &str, content: &[u8]) -> Attachment {
        Attachment::new(
            filename.to_string(),
            crate::utils_modules::io_utils::detect_mime_type(filename).to_string(),
            content.to_vec(),
        )
    }

    #[tokio::test]
    async fn test_body_carries_payload_and_every_attachment() {
        let service = NotificationServiceImpl::new(RecordingRepository::replying(200, "OK", "{}"));
        let attachments: Vec<Attachment> = vec![
            attachment("netother.png", b"\x89PNG\r\n\x1a\nbody"),
            attachment("raw.dat", b"\r\n--\r\n"),
        ];

        service
            .send("https://example.com/hook", "📊 caption", &attachments)
            .await
            .unwrap();

        let calls = service.webhook_repository().calls.lock().unwrap();
        assert_eq!(calls.len(), 1);

        let (url, content_type, body) = &calls[0];
        assert_eq!(url, "https://example.com/hook");

        let boundary: &str = content_type
            .strip_prefix("multipart/form-data; boundary=")
            .unwrap();
        let parts = parse_multipart(body, boundary);

        assert_eq!(parts.len(), 1 + attachments.len());
        assert!(parts[0].headers.contains("name=\"payload_json\""));

        let payload: NotificationPayload = serde_json::from_slice(&parts[0].content).unwrap();
        assert_eq!(payload.content(), "📊 caption");
        assert_eq!(payload.attachments().len(), attachments.len());

        for (idx, attachment) in attachments.iter().enumerate() {
            let descriptor: &AttachmentDescriptor = &payload.attachments()[idx];
            assert_eq!(*descriptor.id(), idx);
            assert_eq!(descriptor.filename(), attachment.filename());

            let part = &parts[idx + 1];
            assert!(part.headers.contains(&format!(
                "name=\"files[{}]\"; filename=\"{}\"",
                idx,
                attachment.filename()
            )));
            assert!(part
                .headers
                .contains(&format!("Content-Type: {}", attachment.mime_type())));
            assert_eq!(&part.content, attachment.content());
        }
    }

    #[tokio::test]
    async fn test_missing_attachment_aborts_before_network() {
        let dir = tempfile::tempdir().unwrap();
        let service = NotificationServiceImpl::new(RecordingRepository::replying(200, "OK", "{}"));

        let err: ReportError = service
            .send_files(
                "https://example.com/hook",
                "caption",
                &[dir.path().join("netother.png")],
            )
            .await
            .unwrap_err();

        assert!(matches!(err, ReportError::AttachmentReadError { .. }));
        assert!(service.webhook_repository().calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_send_files_returns_response_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("netother.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let service = NotificationServiceImpl::new(RecordingRepository::replying(
            200,
            "OK",
            "{\"id\":\"123\"}",
        ));

        let response: WebhookResponse = service
            .send_files("https://example.com/hook", "caption", &[path])
            .await
            .unwrap();

        assert_eq!(*response.status(), 200);
        assert_eq!(response.body(), "{\"id\":\"123\"}");
    }

    #[tokio::test]
    async fn test_rejection_is_surfaced_once() {
        let dir = tempfile::tempdir().unwrap();
        let path: PathBuf = dir.path().join("netother.png");
        std::fs::write(&path, b"\x89PNG").unwrap();

        let service = NotificationServiceImpl::new(RecordingRepository::replying(
            413,
            "Payload Too Large",
            "request entity too large",
        ));

        let response: WebhookResponse = service
            .send_files("https://example.com/hook", "caption", &[path])
            .await
            .unwrap();

        assert_eq!(*response.status(), 413);
        assert!(!response.is_success());
        assert_eq!(service.webhook_repository().calls.lock().unwrap().len(), 1);
    }
}
