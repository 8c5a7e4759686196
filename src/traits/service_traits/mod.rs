pub mod chart_service;
pub mod notification_service;
