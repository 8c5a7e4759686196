use crate::common::*;

use crate::model::configs::series_config::*;

/* 100 years; far inside chrono's TimeDelta/DateTime range */
pub const MAX_LOOKBACK_HOURS: i64 = 24 * 365 * 100;

fn default_lookback_hours() -> i64 {
    24
}

fn default_renderer_path() -> String {
    String::from("rrdtool")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, CopyGetters)]
#[getset(get_copy = "pub")]
pub struct ChartDimensions {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct ChartConfig {
    #[serde(default = "default_renderer_path")]
    pub renderer_path: String,
    pub metrics_source_path: PathBuf,
    pub output_path: PathBuf,
    #[serde(default = "default_lookback_hours")]
    pub lookback_hours: i64,
    pub title: String,
    pub vertical_label: String,
    #[serde(default)]
    pub render_timeout_sec: Option<u64>,
    pub dimensions: ChartDimensions,
    pub series: Vec<SeriesConfig>,
}

impl ChartConfig {
    pub fn lookback(&self) -> chrono::Duration {
        chrono::Duration::hours(self.lookback_hours)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if self.lookback_hours <= 0 || self.lookback_hours > MAX_LOOKBACK_HOURS {
            return Err(anyhow!(
                "[ChartConfig->validate] lookback_hours must be between 1 and {}: {}",
                MAX_LOOKBACK_HOURS,
                self.lookback_hours
            ));
        }

        if self.dimensions.width == 0 || self.dimensions.height == 0 {
            return Err(anyhow!(
                "[ChartConfig->validate] chart dimensions must be non-zero: {}x{}",
                self.dimensions.width,
                self.dimensions.height
            ));
        }

        if self.output_path.file_name().is_none() {
            return Err(anyhow!(
                "[ChartConfig->validate] output_path {:?} has no file name",
                self.output_path
            ));
        }

        if self.series.is_empty() {
            return Err(anyhow!(
                "[ChartConfig->validate] at least one [[chart.series]] is required"
            ));
        }

        for (idx, series) in self.series.iter().enumerate() {
            series.validate()?;

            if self.series[..idx].iter().any(|prev| prev.name == series.name) {
                return Err(anyhow!(
                    "[ChartConfig->validate] duplicate series name '{}'",
                    series.name
                ));
            }
        }

        Ok(())
    }
}
