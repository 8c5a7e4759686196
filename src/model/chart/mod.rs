pub mod metric_series;
pub mod render_directive;
pub mod time_window;
