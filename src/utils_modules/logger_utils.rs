use crate::common::*;

#[doc = "Function responsible for the log line format"]
fn custom_format(
    w: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "[{}] [{}] [{}:{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        record.level(),
        record.module_path().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        &record.args()
    )
}

#[doc = r#"
    전역 로거를 설정하는 함수.

    - 기본 레벨은 info (RUST_LOG 환경변수가 있으면 그 값을 따른다)
    - `logs/` 디렉토리에 일 단위로 회전하는 파일로 기록하고, 최근 10개만 보관
    - 스케줄러(cron) 출력에서도 보이도록 stderr 로도 복제한다

    반환되는 `LoggerHandle` 은 프로그램 종료 시점까지 살아있어야 한다.
"#]
pub fn set_global_logger() -> LoggerHandle {
    let log_directory: &str = "logs";

    Logger::try_with_env_or_str("info")
        .and_then(|logger| {
            logger
                .log_to_file(FileSpec::default().directory(log_directory))
                .rotate(
                    Criterion::Age(Age::Day),
                    Naming::Timestamps,
                    Cleanup::KeepLogFiles(10),
                )
                .duplicate_to_stderr(Duplicate::Info)
                .format_for_files(custom_format)
                .format_for_stderr(custom_format)
                .start()
        })
        .unwrap_or_else(|e| panic!("[set_global_logger] Logger initialization failed: {:?}", e))
}
