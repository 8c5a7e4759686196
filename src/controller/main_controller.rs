use crate::common::*;

use crate::dto::webhook_response::*;
use crate::model::{
    chart::{render_directive::*, time_window::*},
    configs::total_config::*,
};
use crate::traits::service_traits::{chart_service::*, notification_service::*};
use crate::utils_modules::time_utils::*;

#[derive(Debug, new)]
pub struct MainController<C: ChartService, N: NotificationService> {
    chart_service: C,
    notification_service: N,
    total_config: TotalConfig,
}

impl<C: ChartService, N: NotificationService> MainController<C, N> {
    #[doc = r#"
        리포트 작업을 한 번 수행한다.

        1. 현재 시각 기준으로 조회 구간(기본 24시간)을 계산
        2. 구간과 시리즈 설정으로 RenderDirective 를 만들고 rrdtool 로 그래프 이미지 생성
        3. 생성된 이미지를 첨부하여 웹훅으로 전송하고 응답을 그대로 출력

        어느 단계든 실패하면 즉시 중단하며 재시도하지 않는다.
        웹훅이 2xx 가 아닌 응답을 주면 응답을 출력한 뒤 실패로 처리한다.

        # Returns
        * `anyhow::Result<WebhookResponse>` - 2xx 응답일 때만 Ok
    "#]
    pub async fn main_task(&self) -> anyhow::Result<WebhookResponse> {
        self.run_at(Utc::now()).await
    }

    #[doc = "Pipeline for a fixed `now`; `main_task` passes the wall clock."]
    pub async fn run_at(&self, now: DateTime<Utc>) -> anyhow::Result<WebhookResponse> {
        let chart_config = self.total_config.chart();
        let webhook_config = self.total_config.webhook();

        /* 1. 조회 구간 계산 */
        let window: TimeWindow = compute_window(now, chart_config.lookback());
        info!(
            "Report window: {} ~ {} ({}s)",
            window.start(),
            window.end(),
            window.duration_secs()
        );

        /* 2. 그래프 생성 */
        let directive: RenderDirective = RenderDirective::from_config(chart_config, window);

        if let Err(e) = self.chart_service.render(&directive).await {
            error!("[MainController->run_at] {}", e);
            return Err(e.into());
        }

        /* 3. 웹훅 전송 */
        let response: WebhookResponse = self
            .notification_service
            .send_files(
                webhook_config.url(),
                webhook_config.caption(),
                &[directive.output_path().clone()],
            )
            .await?;

        println!("{}", response);

        if !response.is_success() {
            error!(
                "[MainController->run_at] webhook rejected the notification: {}",
                response
            );
            return Err(anyhow!(
                "[MainController->run_at] webhook rejected the notification: {}",
                response
            ));
        }

        info!("Traffic graph delivered: {}", response);

        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use crate::errors::report_error::*;
    use crate::model::notification::attachment::*;

    #[derive(Default)]
    struct Journal {
        events: Mutex<Vec<String>>,
    }

    impl Journal {
        fn push(&self, event: String) {
            self.events.lock().unwrap().push(event);
        }

        fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    struct StubChartService {
        journal: Arc<Journal>,
        fail: bool,
    }

    #[async_trait]
    impl ChartService for StubChartService {
        async fn render(&self, directive: &RenderDirective) -> Result<(), ReportError> {
            self.journal.push(format!(
                "render {} {}",
                directive.window().start(),
                directive.window().end()
            ));

            if self.fail {
                return Err(ReportError::render_failed("rrdtool", "exited with status 1", "ERROR: opening 'x.rrd'"));
            }
            Ok(())
        }
    }

    struct StubNotificationService {
        journal: Arc<Journal>,
        response: WebhookResponse,
        missing_file: bool,
    }

    #[async_trait]
    impl NotificationService for StubNotificationService {
        async fn load_attachments(&self, paths: &[PathBuf]) -> Result<Vec<Attachment>, ReportError> {
            self.journal.push(format!("load {}", paths.len()));

            if self.missing_file {
                return Err(ReportError::AttachmentReadError {
                    path: paths[0].clone(),
                    source: std::io::Error::from(std::io::ErrorKind::NotFound),
                });
            }

            Ok(paths
                .iter()
                .map(|_| Attachment::new("netother.png".into(), "image/png".into(), vec![0]))
                .collect())
        }

        async fn send(
            &self,
            _webhook_url: &str,
            caption: &str,
            attachments: &[Attachment],
        ) -> Result<WebhookResponse, ReportError> {
            self.journal
                .push(format!("send {} {}", caption, attachments.len()));
            Ok(self.response.clone())
        }
    }

    fn config() -> TotalConfig {
        toml::from_str(
            r#"
            [chart]
            metrics_source_path = "/var/log/rrd/if_octets.rrd"
            output_path = "/tmp/netother.png"
            title = "traffic"
            vertical_label = "Bytes/s"
            dimensions = { width = 800, height = 200 }

            [[chart.series]]
            name = "rx_bytes"
            field = "rx"
            label = "Inbound"
            color = "00FF00"

            [webhook]
            url = "https://example.com/hook"
            caption = "graph"
            "#,
        )
        .unwrap()
    }

    fn controller(
        render_fails: bool,
        missing_file: bool,
        response: WebhookResponse,
    ) -> (
        MainController<StubChartService, StubNotificationService>,
        Arc<Journal>,
    ) {
        let journal: Arc<Journal> = Arc::new(Journal::default());

        let controller = MainController::new(
            StubChartService {
                journal: Arc::clone(&journal),
                fail: render_fails,
            },
            StubNotificationService {
                journal: Arc::clone(&journal),
                response,
                missing_file,
            },
            config(),
        );

        (controller, journal)
    }

    fn ok_response() -> WebhookResponse {
        WebhookResponse::new(200, "OK".into(), "{\"id\":\"123\"}".into())
    }

    #[tokio::test]
    async fn test_pipeline_runs_in_order() {
        let (controller, journal) = controller(false, false, ok_response());
        let now: DateTime<Utc> = Utc.timestamp_opt(1_700_000_000, 0).unwrap();

        let response: WebhookResponse = controller.run_at(now).await.unwrap();

        assert_eq!(response, ok_response());
        assert_eq!(
            journal.events(),
            vec![
                "render 1699913600 1700000000".to_string(),
                "load 1".to_string(),
                "send graph 1".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_render_failure_stops_before_attachment_load() {
        let (controller, journal) = controller(true, false, ok_response());

        let err: anyhow::Error = controller.main_task().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::RenderFailed { .. })
        ));
        assert_eq!(journal.events().len(), 1);
        assert!(journal.events()[0].starts_with("render"));
    }

    #[tokio::test]
    async fn test_missing_attachment_stops_before_send() {
        let (controller, journal) = controller(false, true, ok_response());

        let err: anyhow::Error = controller.main_task().await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ReportError>(),
            Some(ReportError::AttachmentReadError { .. })
        ));
        assert!(!journal.events().iter().any(|event| event.starts_with("send")));
    }

    #[tokio::test]
    async fn test_non_success_status_is_a_failed_delivery() {
        let (controller, journal) = controller(
            false,
            false,
            WebhookResponse::new(413, "Payload Too Large".into(), "too large".into()),
        );

        let err: anyhow::Error = controller.main_task().await.unwrap_err();

        assert!(err.to_string().contains("413 Payload Too Large too large"));
        assert_eq!(
            journal
                .events()
                .iter()
                .filter(|event| event.starts_with("send"))
                .count(),
            1
        );
    }
}
