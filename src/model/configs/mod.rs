pub mod chart_config;
pub mod series_config;
pub mod total_config;
pub mod webhook_config;
