use crate::common::*;

use crate::model::configs::{chart_config::*, webhook_config::*};

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct TotalConfig {
    pub chart: ChartConfig,
    pub webhook: WebhookConfig,
}

impl TotalConfig {
    #[doc = "Reads the TOML file at `file_path` and validates every section."]
    pub fn load(file_path: &str) -> anyhow::Result<Self> {
        info!("TotalConfig::load() START! ({})", file_path);

        let config: TotalConfig = read_toml_from_file::<TotalConfig>(file_path)?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        self.chart.validate()?;
        self.webhook.validate()?;
        Ok(())
    }
}
