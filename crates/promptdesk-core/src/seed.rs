//! Example records shipped with a fresh session

use crate::records::{Parameter, PromptRecord, ToolRecord};

/// The example tool definition
pub fn seed_tools() -> Vec<ToolRecord> {
    vec![ToolRecord {
        id: 1,
        tool_name: "get_mention_count".to_string(),
        tool_type: "function".to_string(),
        tool_desc: "查询品牌/车系的提及量（声量），需至少提供品牌或车系参数".to_string(),
        industry_affiliation: "汽车行业".to_string(),
        application_scenario: "市场分析".to_string(),
        tool_parameters: vec![
            Parameter::new(
                "brand",
                "string",
                "品牌名称，多个用中文顿号分割（如 `长安、阿维塔`）",
            ),
            Parameter::new(
                "carSeries",
                "string",
                "车系名称，多个用中文顿号分割（如 `帕萨特、SU7`）",
            ),
            Parameter::new(
                "datetimeType",
                "string",
                "时间粒度，必填，可选值：`年、月、周、日`",
            ),
        ],
    }]
}

/// The example industry scenario prompts
pub fn seed_prompts() -> Vec<PromptRecord> {
    vec![
        PromptRecord {
            id: 1,
            industry: "汽车行业".to_string(),
            scenario: "质量把控".to_string(),
            bg_klg_prompt: "当前为汽车质量分析场景，需关注负面情感对应的具体部件（如发动机、变速箱）及故障关键词，使用四级标签精准定位问题。".to_string(),
        },
        PromptRecord {
            id: 2,
            industry: "汽车行业".to_string(),
            scenario: "市场分析".to_string(),
            bg_klg_prompt: "当前为汽车市场分析场景，需关注品牌声量、竞品对比、用户偏好等关键指标，结合时间维度进行趋势分析。".to_string(),
        },
    ]
}
