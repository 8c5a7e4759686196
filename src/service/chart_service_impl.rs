use crate::common::*;

use crate::errors::report_error::*;
use crate::model::{chart::render_directive::*, configs::chart_config::*};
use crate::traits::service_traits::chart_service::*;

#[doc = "`<renderer_path> graph <args...>` (rrdtool) 실행으로 차트를 그린다."]
#[derive(Debug, Clone, Getters, new)]
#[getset(get = "pub")]
pub struct RrdChartServiceImpl {
    renderer_path: String,
    render_timeout: Option<Duration>,
}

impl RrdChartServiceImpl {
    pub fn from_config(chart_config: &ChartConfig) -> Self {
        RrdChartServiceImpl::new(
            chart_config.renderer_path().to_string(),
            (*chart_config.render_timeout_sec()).map(Duration::from_secs),
        )
    }

    #[doc = r#"
        rrdtool graph 인자 목록을 만든다 (graph 서브커맨드 제외).

        출력 경로, 시간 구간, 제목, 크기, 세로축 라벨 순서이고
        그 뒤에 시리즈 순서대로 DEF 토큰들, 다시 같은 순서로 LINE1 토큰들이 온다.
        시리즈 순서가 곧 그리는 순서이자 범례 순서다.
    "#]
    pub fn build_render_args(directive: &RenderDirective) -> Vec<OsString> {
        /* output path goes through as an OsStr so rrdtool writes exactly the file that gets attached */
        let mut args: Vec<OsString> = vec![directive.output_path().as_os_str().to_os_string()];

        args.extend(
            [
                "--start".to_string(),
                directive.window().start().to_string(),
                "--end".to_string(),
                directive.window().end().to_string(),
                "--title".to_string(),
                directive.title().to_string(),
                "--width".to_string(),
                directive.dimensions().width().to_string(),
                "--height".to_string(),
                directive.dimensions().height().to_string(),
                "--vertical-label".to_string(),
                directive.vertical_label().to_string(),
            ]
            .into_iter()
            .map(OsString::from),
        );

        args.extend(directive.series().iter().map(|series| series.def_token()));
        args.extend(
            directive
                .series()
                .iter()
                .map(|series| OsString::from(series.line_token())),
        );

        args
    }
}

#[async_trait]
impl ChartService for RrdChartServiceImpl {
    #[doc = r#"
        `<renderer_path> graph <args...>` 를 실행하고 종료될 때까지 기다린다.
        출력 경로의 상위 디렉토리가 없으면 먼저 생성한다.

        # Arguments
        * `directive` - 렌더링 지시 정보

        # Returns
        * `Result<(), ReportError>` - 실행 불가, 시간 초과, 0 이 아닌 종료 시 stdout/stderr 를 담은 `RenderFailed`
    "#]
    async fn render(&self, directive: &RenderDirective) -> Result<(), ReportError> {
        /* Create parent directory if it doesn't exist */
        if let Some(parent) = directive.output_path().parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await.map_err(|e| {
                    ReportError::render_failed(
                        &self.renderer_path,
                        format!("could not prepare output directory {:?}", parent),
                        e.to_string(),
                    )
                })?;
            }
        }

        let args: Vec<OsString> = Self::build_render_args(directive);

        info!(
            "[RrdChartServiceImpl->render] {} graph {}",
            self.renderer_path,
            args.iter()
                .map(|arg| arg.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let mut command: Command = Command::new(&self.renderer_path);
        command
            .arg("graph")
            .args(&args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let output_result: std::io::Result<std::process::Output> = match self.render_timeout {
            Some(limit) => match tokio::time::timeout(limit, command.output()).await {
                Ok(output_result) => output_result,
                Err(_) => {
                    return Err(ReportError::render_failed(
                        &self.renderer_path,
                        format!("timed out after {:?}", limit),
                        "",
                    ))
                }
            },
            None => command.output().await,
        };

        let output: std::process::Output = output_result.map_err(|e| {
            ReportError::render_failed(&self.renderer_path, "could not be started", e.to_string())
        })?;

        let stdout: String = String::from_utf8_lossy(&output.stdout).trim().to_string();
        let stderr: String = String::from_utf8_lossy(&output.stderr).trim().to_string();

        if !output.status.success() {
            let reason: String = match output.status.code() {
                Some(code) => format!("exited with status {}", code),
                None => "was terminated by a signal".to_string(),
            };

            return Err(ReportError::render_failed(
                &self.renderer_path,
                reason,
                format!("{}\n{}", stdout, stderr).trim().to_string(),
            ));
        }

        info!(
            "Chart rendered successfully: {:?} ({})",
            directive.output_path(),
            stdout
        );

        Ok(())
    }
}
