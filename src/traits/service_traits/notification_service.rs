use crate::common::*;

use crate::dto::webhook_response::*;
use crate::errors::report_error::*;
use crate::model::notification::attachment::*;

#[async_trait]
pub trait NotificationService: Send + Sync {
    async fn load_attachments(&self, paths: &[PathBuf]) -> Result<Vec<Attachment>, ReportError>;

    async fn send(
        &self,
        webhook_url: &str,
        caption: &str,
        attachments: &[Attachment],
    ) -> Result<WebhookResponse, ReportError>;

    #[doc = "Loads every file, then sends them as one message. Nothing is sent if any load fails."]
    async fn send_files(
        &self,
        webhook_url: &str,
        caption: &str,
        paths: &[PathBuf],
    ) -> Result<WebhookResponse, ReportError> {
        let attachments: Vec<Attachment> = self.load_attachments(paths).await?;
        self.send(webhook_url, caption, &attachments).await
    }
}
