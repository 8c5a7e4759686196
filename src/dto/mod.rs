pub mod notification_payload;
pub mod webhook_response;
