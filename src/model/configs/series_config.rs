use crate::common::*;

use crate::enums::consolidation_function::*;
use crate::model::chart::metric_series::*;

#[derive(Debug, Clone, Deserialize, Serialize, Getters)]
#[getset(get = "pub")]
pub struct SeriesConfig {
    pub name: String,
    pub field: String,
    #[serde(default)]
    pub consolidation: ConsolidationFunction,
    pub label: String,
    pub color: String,
    /* falls back to chart.metrics_source_path */
    #[serde(default)]
    pub source_path: Option<PathBuf>,
}

impl SeriesConfig {
    #[doc = "rrdtool variable names: 1-255 characters of [A-Za-z0-9_-]"]
    fn is_valid_vname(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= 255
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    }

    #[doc = "Color without the optional leading '#', upper-cased."]
    pub fn normalized_color(&self) -> String {
        self.color.trim_start_matches('#').to_uppercase()
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if !Self::is_valid_vname(&self.name) {
            return Err(anyhow!(
                "[SeriesConfig->validate] series name '{}' must be 1-255 characters of [A-Za-z0-9_-]",
                self.name
            ));
        }

        if self.field.is_empty() || self.field.contains(':') {
            return Err(anyhow!(
                "[SeriesConfig->validate] series '{}' has an invalid field '{}'",
                self.name,
                self.field
            ));
        }

        let color: String = self.normalized_color();
        if color.len() != 6 || !color.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(anyhow!(
                "[SeriesConfig->validate] series '{}' color '{}' must be RRGGBB",
                self.name,
                self.color
            ));
        }

        Ok(())
    }

    pub fn to_metric_series(&self, default_source: &Path) -> MetricSeries {
        let source_path: PathBuf = self
            .source_path
            .clone()
            .unwrap_or_else(|| default_source.to_path_buf());

        MetricSeries::new(
            self.name.clone(),
            source_path,
            self.field.clone(),
            self.consolidation,
            self.label.clone(),
            self.normalized_color(),
        )
    }
}
