//! Taxonomy tables for the select inputs
//!
//! The catalog is fixed data loaded once at startup. Schema:
//! - `scenarios`: `industry → [scenario]`
//! - `templates`: `"industry|scenario" → background prompt template`
//!
//! Every table can be overridden from the `[catalog]` section of
//! `.promptdesk/config.toml`; omitted tables keep the built-in values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Separator between industry and scenario in template keys
pub const TEMPLATE_KEY_SEPARATOR: char = '|';

/// Build the template table key for an industry/scenario pair.
pub fn template_key(industry: &str, scenario: &str) -> String {
    format!("{industry}{TEMPLATE_KEY_SEPARATOR}{scenario}")
}

/// Selectable values for tool, parameter and prompt forms
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Catalog {
    #[serde(default = "default_tool_types")]
    pub tool_types: Vec<String>,

    #[serde(default = "default_parameter_types")]
    pub parameter_types: Vec<String>,

    /// Industries offered by the tool form's affiliation select
    #[serde(default = "default_tool_industries")]
    pub tool_industries: Vec<String>,

    /// Industries offered by the prompt form
    #[serde(default = "default_prompt_industries")]
    pub prompt_industries: Vec<String>,

    #[serde(default = "default_scenarios")]
    pub scenarios: BTreeMap<String, Vec<String>>,

    #[serde(default = "default_templates")]
    pub templates: BTreeMap<String, String>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            tool_types: default_tool_types(),
            parameter_types: default_parameter_types(),
            tool_industries: default_tool_industries(),
            prompt_industries: default_prompt_industries(),
            scenarios: default_scenarios(),
            templates: default_templates(),
        }
    }
}

impl Catalog {
    /// Scenarios listed for `industry`; empty for unknown industries.
    pub fn scenarios_for(&self, industry: &str) -> &[String] {
        self.scenarios
            .get(industry)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_scenario(&self, industry: &str, scenario: &str) -> bool {
        self.scenarios_for(industry).iter().any(|s| s == scenario)
    }

    /// Background prompt template for an industry/scenario pair
    pub fn template_for(&self, industry: &str, scenario: &str) -> Option<&str> {
        self.templates
            .get(&template_key(industry, scenario))
            .map(String::as_str)
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn default_tool_types() -> Vec<String> {
    strings(&["function", "query", "analysis", "processing", "utility"])
}

fn default_parameter_types() -> Vec<String> {
    strings(&[
        "string", "number", "boolean", "array", "object", "date", "enum",
    ])
}

fn default_tool_industries() -> Vec<String> {
    strings(&[
        "汽车行业",
        "金融行业",
        "电商行业",
        "教育行业",
        "医疗行业",
        "制造业",
        "房地产",
        "互联网",
    ])
}

fn default_prompt_industries() -> Vec<String> {
    let mut industries = default_tool_industries();
    industries.extend(strings(&["零售业", "物流行业", "能源行业", "农业"]));
    industries
}

fn default_scenarios() -> BTreeMap<String, Vec<String>> {
    let table: [(&str, &[&str]); 8] = [
        (
            "汽车行业",
            &[
                "质量把控",
                "市场分析",
                "用户反馈分析",
                "竞品分析",
                "销量预测",
                "客户满意度",
                "产品评价",
                "品牌声量",
            ],
        ),
        (
            "金融行业",
            &[
                "风险评估",
                "客户分析",
                "市场趋势",
                "投资建议",
                "信用评级",
                "合规检查",
            ],
        ),
        (
            "电商行业",
            &[
                "商品推荐",
                "用户行为分析",
                "价格策略",
                "库存管理",
                "客户服务",
                "营销效果",
            ],
        ),
        (
            "教育行业",
            &[
                "学习效果评估",
                "课程推荐",
                "学生行为分析",
                "教学质量",
                "知识图谱",
            ],
        ),
        (
            "医疗行业",
            &["诊断辅助", "药物分析", "患者管理", "医疗质量", "健康监测"],
        ),
        (
            "制造业",
            &["质量控制", "生产优化", "设备维护", "供应链管理", "成本分析"],
        ),
        (
            "房地产",
            &["市场分析", "价格预测", "客户需求", "投资评估", "区域分析"],
        ),
        (
            "互联网",
            &["用户增长", "产品优化", "内容推荐", "数据分析", "运营策略"],
        ),
    ];

    table
        .iter()
        .map(|(industry, scenarios)| (industry.to_string(), strings(scenarios)))
        .collect()
}

fn default_templates() -> BTreeMap<String, String> {
    [
        (
            "汽车行业",
            "质量把控",
            "当前为汽车质量分析场景，需关注负面情感对应的具体部件（如发动机、变速箱）及故障关键词，使用四级标签精准定位问题。",
        ),
        (
            "汽车行业",
            "市场分析",
            "当前为汽车市场分析场景，需关注品牌声量、竞品对比、用户偏好等关键指标，结合时间维度进行趋势分析。",
        ),
        (
            "金融行业",
            "风险评估",
            "当前为金融风险评估场景，需关注风险指标、历史数据、市场波动等因素，进行综合风险评级和预警。",
        ),
        (
            "电商行业",
            "用户行为分析",
            "当前为电商用户行为分析场景，需关注用户购买路径、偏好变化、转化率等关键指标，优化用户体验。",
        ),
    ]
    .iter()
    .map(|(industry, scenario, text)| (template_key(industry, scenario), text.to_string()))
    .collect()
}
