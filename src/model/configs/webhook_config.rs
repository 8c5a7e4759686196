use crate::common::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct WebhookConfig {
    pub url: String,
    pub caption: String,
    #[serde(default)]
    pub request_timeout_sec: Option<u64>,
}

impl WebhookConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        /* The URL embeds the webhook token, so it is never echoed back. */
        let url: Url = Url::parse(&self.url)
            .map_err(|e| anyhow!("[WebhookConfig->validate] webhook url is not a valid URL: {}", e))?;

        match url.scheme() {
            "https" | "http" => Ok(()),
            scheme => Err(anyhow!(
                "[WebhookConfig->validate] unsupported webhook url scheme '{}'",
                scheme
            )),
        }
    }
}
