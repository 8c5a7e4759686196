pub use chrono::{DateTime, TimeZone, Utc};
pub use flexi_logger::{
    Age, Cleanup, Criterion, DeferredNow, Duplicate, FileSpec, Logger, LoggerHandle, Naming,
    Record,
};
pub use once_cell::sync::Lazy as once_lazy;
pub use rand::{Rng, SeedableRng, rngs::StdRng};
pub use reqwest::{Client, Url, header::CONTENT_TYPE};
pub use thiserror::Error;
pub use tokio::process::Command;
