use crate::common::*;

use crate::model::chart::time_window::*;

#[doc = "duration 이전 시각을 반환해주는 함수"]
pub fn calc_time_window(dt: DateTime<Utc>, duration_secs: i64) -> DateTime<Utc> {
    dt - chrono::Duration::seconds(duration_secs)
}

#[doc = r#"
    `now` 를 끝으로 하는 `lookback` 길이의 조회 구간을 epoch 초 단위로 계산한다.

    끝 시각을 먼저 초 단위로 자른 뒤 시작 시각을 빼기 때문에
    `end - start` 는 항상 `lookback` 의 초 값과 정확히 같다.
    `lookback` 은 설정 검증 단계에서 양수임이 보장된다.
"#]
pub fn compute_window(now: DateTime<Utc>, lookback: chrono::Duration) -> TimeWindow {
    let end: DateTime<Utc> = Utc
        .timestamp_opt(now.timestamp(), 0)
        .single()
        .unwrap_or(now);
    let start: DateTime<Utc> = calc_time_window(end, lookback.num_seconds());

    TimeWindow::new(start.timestamp(), end.timestamp())
}
