/*
Author      : Seunghwan Shin
Create date : 2025-10-00
Description : rrdtool 로 최근 24시간 인터페이스 트래픽 그래프를 그리고,
              그 이미지를 웹훅(Discord)으로 전송하는 1회성 리포트 프로그램.
              cron 등의 스케줄러가 실행하며 실패 시 non-zero 로 종료한다.

History     : 2025-10-00 Seunghwan Shin       # [v.1.0.0] first create
*/

mod common;
mod external_deps;
mod prelude;
use common::*;

mod errors;

mod enums;

mod dto;

mod repository;
use repository::webhook_repository_impl::*;

mod env_configuration;
use env_configuration::env_config::*;

mod traits;

mod model;
use model::configs::total_config::*;

mod utils_modules;
use utils_modules::logger_utils::*;

mod service;
use service::{chart_service_impl::*, notification_service_impl::*};

mod controller;
use controller::main_controller::*;

#[tokio::main]
async fn main() -> ExitCode {
    /* 전역로거 설정 및 초기 설정 */
    dotenv().ok();
    let _logger_handle: LoggerHandle = set_global_logger();

    info!("Traffic graph notifier start!");

    let total_config: TotalConfig = match TotalConfig::load(&SERVER_CONFIG_PATH) {
        Ok(total_config) => total_config,
        Err(e) => {
            error!("[main] Failed to load the server configuration. {:?}", e);
            return ExitCode::FAILURE;
        }
    };

    /* 의존 주입 */
    let webhook_repository: WebhookRepositoryImpl =
        match WebhookRepositoryImpl::new(total_config.webhook()) {
            Ok(webhook_repository) => webhook_repository,
            Err(e) => {
                error!("[main] An issue occurred while initializing webhook_repository. {:?}", e);
                return ExitCode::FAILURE;
            }
        };

    let chart_service: RrdChartServiceImpl = RrdChartServiceImpl::from_config(total_config.chart());
    let notification_service: NotificationServiceImpl<WebhookRepositoryImpl> =
        NotificationServiceImpl::new(webhook_repository);

    let main_controller: MainController<
        RrdChartServiceImpl,
        NotificationServiceImpl<WebhookRepositoryImpl>,
    > = MainController::new(chart_service, notification_service, total_config);

    match main_controller.main_task().await {
        Ok(_) => {
            info!("Traffic graph notifier finished.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::FAILURE
        }
    }
}
