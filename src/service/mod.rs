pub mod chart_service_impl;
pub mod notification_service_impl;
