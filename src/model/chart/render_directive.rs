use crate::common::*;

use crate::model::chart::{metric_series::*, time_window::*};
use crate::model::configs::chart_config::*;

#[doc = "Everything the renderer needs for one chart; no other defaults are applied."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RenderDirective {
    output_path: PathBuf,
    window: TimeWindow,
    dimensions: ChartDimensions,
    vertical_label: String,
    title: String,
    series: Vec<MetricSeries>,
}

impl RenderDirective {
    #[doc = "Builds the directive for `window` from the chart configuration, keeping series order."]
    pub fn from_config(chart_config: &ChartConfig, window: TimeWindow) -> Self {
        let series: Vec<MetricSeries> = chart_config
            .series()
            .iter()
            .map(|series_config| series_config.to_metric_series(chart_config.metrics_source_path()))
            .collect();

        RenderDirective {
            output_path: chart_config.output_path().clone(),
            window,
            dimensions: *chart_config.dimensions(),
            vertical_label: chart_config.vertical_label().to_string(),
            title: chart_config.title().to_string(),
            series,
        }
    }
}
