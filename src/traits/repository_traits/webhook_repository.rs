use crate::common::*;

use crate::dto::webhook_response::*;
use crate::errors::report_error::*;
use crate::utils_modules::multipart_encoder::*;

#[async_trait]
pub trait WebhookRepository: Send + Sync {
    #[doc = "
        POST an already framed multipart body to the webhook and return its reply verbatim.
        # Arguments
        * `webhook_url` - Full webhook URL, including its token
        * `body` - Encoded body; its boundary becomes the Content-Type parameter
    "]
    async fn post_multipart(
        &self,
        webhook_url: &str,
        body: MultipartBody,
    ) -> Result<WebhookResponse, ReportError>;
}
