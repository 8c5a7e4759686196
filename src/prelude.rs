pub use std::{
    env,
    ffi::{OsStr, OsString},
    io::Write,
    path::{Path, PathBuf},
    process::{ExitCode, Stdio},
    sync::Arc,
    time::Duration,
};

pub use anyhow::{Context, anyhow};
pub use async_trait::async_trait;
pub use derive_new::new;
pub use dotenv::dotenv;
pub use getset::{CopyGetters, Getters};
pub use log::{error, info, warn};
pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
pub use serde_json::Value;
