use crate::common::*;

use crate::dto::webhook_response::*;
use crate::errors::report_error::*;
use crate::model::configs::webhook_config::*;
use crate::traits::repository_traits::webhook_repository::*;
use crate::utils_modules::multipart_encoder::*;

#[derive(Debug, Clone)]
pub struct WebhookRepositoryImpl {
    client: Client,
}

impl WebhookRepositoryImpl {
    #[doc = r#"
        웹훅 전송용 HTTP 클라이언트를 생성한다.

        # Arguments
        * `webhook_config` - `request_timeout_sec` 가 있으면 요청 전체에 대한 deadline 으로 사용

        # Returns
        * `Result<Self, anyhow::Error>` - TLS 백엔드 초기화 실패 시 오류
    "#]
    pub fn new(webhook_config: &WebhookConfig) -> Result<Self, anyhow::Error> {
        let mut builder = Client::builder();

        if let Some(timeout_sec) = webhook_config.request_timeout_sec() {
            builder = builder.timeout(Duration::from_secs(*timeout_sec));
        }

        let client: Client = builder
            .build()
            .context("[WebhookRepositoryImpl->new] Failed to build the HTTP client")?;

        Ok(WebhookRepositoryImpl { client })
    }
}

#[async_trait]
impl WebhookRepository for WebhookRepositoryImpl {
    #[doc = r#"
        멀티파트 본문을 웹훅으로 한 번 POST 하고 응답을 그대로 돌려준다. (재시도 없음)

        # Arguments
        * `webhook_url` - 토큰이 포함된 웹훅 URL
        * `body` - 인코딩된 본문. boundary 가 Content-Type 헤더의 파라미터가 된다

        # Returns
        * `Result<WebhookResponse, ReportError>` - 상태 코드와 무관하게 응답을 받으면 Ok

        # Errors
        연결/TLS 실패 또는 응답 본문 읽기 실패 시 `TransportError`
    "#]
    async fn post_multipart(
        &self,
        webhook_url: &str,
        body: MultipartBody,
    ) -> Result<WebhookResponse, ReportError> {
        let content_type: String = body.content_type();
        let bytes: Vec<u8> = body.into_bytes();

        info!(
            "[WebhookRepositoryImpl->post_multipart] sending {} bytes",
            bytes.len()
        );

        let response: reqwest::Response = self
            .client
            .post(webhook_url)
            .header(CONTENT_TYPE, content_type)
            .body(bytes)
            .send()
            .await
            .map_err(|e| ReportError::transport("POST to webhook failed", e))?;

        let status: reqwest::StatusCode = response.status();
        /* reqwest does not expose the wire reason phrase; this is the standard one for the code. */
        let reason: String = status.canonical_reason().unwrap_or("").to_string();

        let response_body: String = response
            .text()
            .await
            .map_err(|e| ReportError::transport("reading webhook response failed", e))?;

        Ok(WebhookResponse::new(status.as_u16(), reason, response_body))
    }
}
