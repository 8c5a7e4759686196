use crate::common::*;

#[doc = r#"
    리포트 1회 실행 중 발생하는 오류.
    모든 variant 는 해당 실행을 중단시키며 재시도하지 않는다.
"#]
#[derive(Debug, Error)]
pub enum ReportError {
    #[doc = "렌더러 실행 실패, 시간 초과, 또는 0 이 아닌 종료 코드"]
    #[error("[RenderFailed] renderer '{program}' {reason}: {diagnostics}")]
    RenderFailed {
        program: String,
        reason: String,
        diagnostics: String,
    },

    #[doc = "렌더링 결과 파일이 없거나 읽을 수 없음"]
    #[error("[AttachmentReadError] failed to read '{}': {source}", .path.display())]
    AttachmentReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[EncodingError] {0}")]
    EncodingError(String),

    #[doc = "연결, TLS, 응답 읽기 실패"]
    #[error("[TransportError] {context}: {source}")]
    TransportError {
        context: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ReportError {
    pub fn render_failed(program: &str, reason: impl Into<String>, diagnostics: impl Into<String>) -> Self {
        ReportError::RenderFailed {
            program: program.to_string(),
            reason: reason.into(),
            diagnostics: diagnostics.into(),
        }
    }

    pub fn transport(context: &str, source: reqwest::Error) -> Self {
        /* The webhook URL carries its token in the path, keep it out of logs. */
        ReportError::TransportError {
            context: context.to_string(),
            source: source.without_url(),
        }
    }
}
