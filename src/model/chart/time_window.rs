use crate::common::*;

#[doc = "실행마다 한 번 계산되는 절대 구간 `[start, end]` (epoch 초)"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, CopyGetters, new)]
#[getset(get_copy = "pub")]
pub struct TimeWindow {
    start: i64,
    end: i64,
}

impl TimeWindow {
    pub fn duration_secs(&self) -> i64 {
        self.end - self.start
    }
}
