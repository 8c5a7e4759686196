use crate::common::*;

use crate::enums::consolidation_function::*;

#[doc = r#"
    One line on the chart: an RRD data source read through a consolidation function,
    drawn with its own color and legend label.

    `name` is the rrdtool variable that links the `DEF` token to its `LINE1` token.
"#]
#[derive(Debug, Clone, PartialEq, Eq, Getters, new)]
#[getset(get = "pub")]
pub struct MetricSeries {
    name: String,
    source_path: PathBuf,
    field: String,
    consolidation: ConsolidationFunction,
    label: String,
    color: String,
}

impl MetricSeries {
    #[doc = r#"
        `DEF:<name>=<source>:<field>:<CF>` 토큰.

        소스 경로는 OS 문자열 그대로 이어 붙이므로 UTF-8 이 아닌 경로도 바뀌지 않는다.
        (콜론 escape 는 UTF-8 경로에만 적용)
    "#]
    pub fn def_token(&self) -> OsString {
        let mut token: OsString = OsString::from(format!("DEF:{}=", self.name));

        match self.source_path.to_str() {
            Some(path) => token.push(escape_colons(path)),
            None => token.push(self.source_path.as_os_str()),
        }

        token.push(format!(
            ":{}:{}",
            self.field,
            self.consolidation.as_rrd_str()
        ));

        token
    }

    #[doc = "`LINE1:<name>#<RRGGBB>:<label>`"]
    pub fn line_token(&self) -> String {
        format!(
            "LINE1:{}#{}:{}",
            self.name,
            self.color,
            escape_colons(&self.label)
        )
    }
}

/* rrdtool splits graph elements on ':' */
fn escape_colons(value: &str) -> String {
    value.replace(':', "\\:")
}
