//! Required-field validation
//!
//! Validation is limited to "non-empty after trimming". Failures are collected
//! per field so forms can annotate every offending input at once.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A form field with a localized label and a "required" message.
pub trait FieldName: Copy + Ord + std::fmt::Debug {
    fn label(&self) -> &'static str;

    fn required_message(&self) -> &'static str;
}

/// Returns true when a value is empty after trimming whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Per-field validation messages, ordered by field declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, String>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: FieldName> FieldErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build errors for every blank value in `fields`.
    pub fn required<'a>(fields: impl IntoIterator<Item = (F, &'a str)>) -> Self {
        let mut errors = Self::new();
        for (field, value) in fields {
            if is_blank(value) {
                errors.insert(field, field.required_message());
            }
        }
        errors
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    /// Clear the error on one field, leaving the others untouched.
    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.errors.keys().copied()
    }

    pub fn labels(&self) -> Vec<&'static str> {
        self.fields().map(|f| f.label()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &str)> + '_ {
        self.errors.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Field enums
// ─────────────────────────────────────────────────────────────────────────────

/// Fields of the tool form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolField {
    ToolName,
    ToolType,
    IndustryAffiliation,
    ApplicationScenario,
    ToolDesc,
    Parameters,
}

impl ToolField {
    pub const ALL: [ToolField; 6] = [
        ToolField::ToolName,
        ToolField::ToolType,
        ToolField::IndustryAffiliation,
        ToolField::ApplicationScenario,
        ToolField::ToolDesc,
        ToolField::Parameters,
    ];

    /// The five scalar fields that must be non-blank.
    pub const REQUIRED: [ToolField; 5] = [
        ToolField::ToolName,
        ToolField::ToolType,
        ToolField::IndustryAffiliation,
        ToolField::ApplicationScenario,
        ToolField::ToolDesc,
    ];
}

impl FieldName for ToolField {
    fn label(&self) -> &'static str {
        match self {
            ToolField::ToolName => "工具名称",
            ToolField::ToolType => "工具类型",
            ToolField::IndustryAffiliation => "行业归属",
            ToolField::ApplicationScenario => "应用场景",
            ToolField::ToolDesc => "工具描述",
            ToolField::Parameters => "工具参数",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            ToolField::ToolName => "工具名称不能为空",
            ToolField::ToolType => "工具类型不能为空",
            ToolField::IndustryAffiliation => "行业归属不能为空",
            ToolField::ApplicationScenario => "应用场景不能为空",
            ToolField::ToolDesc => "工具描述不能为空",
            ToolField::Parameters => "",
        }
    }
}

/// Fields of the prompt form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PromptField {
    Industry,
    Scenario,
    BgKlgPrompt,
}

impl PromptField {
    pub const ALL: [PromptField; 3] = [
        PromptField::Industry,
        PromptField::Scenario,
        PromptField::BgKlgPrompt,
    ];
}

impl FieldName for PromptField {
    fn label(&self) -> &'static str {
        match self {
            PromptField::Industry => "行业",
            PromptField::Scenario => "场景",
            PromptField::BgKlgPrompt => "背景知识 Prompt",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            PromptField::Industry => "行业不能为空",
            PromptField::Scenario => "场景不能为空",
            PromptField::BgKlgPrompt => "背景知识 Prompt 不能为空",
        }
    }
}

/// Fields of a parameter entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ParamField {
    Name,
    Type,
    Description,
}

impl ParamField {
    pub const ALL: [ParamField; 3] = [ParamField::Name, ParamField::Type, ParamField::Description];

    pub fn next(self) -> Self {
        match self {
            ParamField::Name => ParamField::Type,
            ParamField::Type => ParamField::Description,
            ParamField::Description => ParamField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ParamField::Name => ParamField::Description,
            ParamField::Type => ParamField::Name,
            ParamField::Description => ParamField::Type,
        }
    }
}

impl FieldName for ParamField {
    fn label(&self) -> &'static str {
        match self {
            ParamField::Name => "参数名称",
            ParamField::Type => "参数类型",
            ParamField::Description => "参数描述",
        }
    }

    fn required_message(&self) -> &'static str {
        match self {
            ParamField::Name => "参数名称不能为空",
            ParamField::Type => "参数类型不能为空",
            ParamField::Description => "参数描述不能为空",
        }
    }
}
