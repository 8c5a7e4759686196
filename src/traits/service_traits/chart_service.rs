use crate::common::*;

use crate::errors::report_error::*;
use crate::model::chart::render_directive::*;

#[async_trait]
pub trait ChartService: Send + Sync {
    #[doc = r#"
        `directive` 가 기술하는 차트를 출력 경로에 렌더링한다.
        렌더러 프로세스가 종료된 뒤에만 반환한다.

        # Arguments
        * `directive` - 출력 경로, 시간 구간, 크기, 시리즈 목록

        # Returns
        * `Result<(), ReportError>` - 실행 실패 또는 0 이 아닌 종료 시 `RenderFailed`
    "#]
    async fn render(&self, directive: &RenderDirective) -> Result<(), ReportError>;
}
