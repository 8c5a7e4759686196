use crate::common::*;

use crate::errors::report_error::*;

use crate::utils_modules::io_utils::*;

#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct Attachment {
    filename: String,
    mime_type: String,
    content: Vec<u8>,
}

impl Attachment {
    #[doc = r#"
        Reads the file at `path` into memory. The filename is the path's last component
        and the MIME type is derived from its extension.

        # Errors
        `AttachmentReadError` when the file is missing, unreadable, or the path has no file name.
    "#]
    pub async fn load(path: &Path) -> Result<Self, ReportError> {
        let filename: String = path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .ok_or_else(|| ReportError::AttachmentReadError {
                path: path.to_path_buf(),
                source: std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "path has no file name",
                ),
            })?;

        let content: Vec<u8> =
            tokio::fs::read(path)
                .await
                .map_err(|source| ReportError::AttachmentReadError {
                    path: path.to_path_buf(),
                    source,
                })?;

        let mime_type: String = detect_mime_type(&filename).to_string();

        Ok(Attachment {
            filename,
            mime_type,
            content,
        })
    }
}
