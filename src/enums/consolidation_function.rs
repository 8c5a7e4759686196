use crate::common::*;

#[doc = "RRD consolidation function applied when reading a data source."]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ConsolidationFunction {
    #[default]
    Average,
    Min,
    Max,
    Last,
}

impl ConsolidationFunction {
    pub fn as_rrd_str(&self) -> &'static str {
        match self {
            ConsolidationFunction::Average => "AVERAGE",
            ConsolidationFunction::Min => "MIN",
            ConsolidationFunction::Max => "MAX",
            ConsolidationFunction::Last => "LAST",
        }
    }
}
