//! Record and draft types for tools and industry scenario prompts
//!
//! A record is always a draft plus a store-assigned [`RecordId`]. Drafts are
//! what forms edit; records are what stores hold.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::validation::{FieldErrors, FieldName, ParamField, PromptField, ToolField};

/// Store-assigned record identifier, unique within one collection.
pub type RecordId = u64;

/// Which collection a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Tool,
    Prompt,
}

impl EntityKind {
    /// Localized label used in dialogs and headings
    pub fn label(&self) -> &'static str {
        match self {
            EntityKind::Tool => "工具",
            EntityKind::Prompt => "Prompt 配置",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Tool => write!(f, "tool"),
            EntityKind::Prompt => write!(f, "prompt"),
        }
    }
}

/// A single named, typed tool parameter.
///
/// Owned by its parent tool; has no identity of its own.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    pub description: String,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        param_type: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            description: description.into(),
        }
    }

    pub fn get(&self, field: ParamField) -> &str {
        match field {
            ParamField::Name => &self.name,
            ParamField::Type => &self.param_type,
            ParamField::Description => &self.description,
        }
    }

    pub fn get_mut(&mut self, field: ParamField) -> &mut String {
        match field {
            ParamField::Name => &mut self.name,
            ParamField::Type => &mut self.param_type,
            ParamField::Description => &mut self.description,
        }
    }

    /// All three fields must be non-blank.
    pub fn validate(&self) -> FieldErrors<ParamField> {
        FieldErrors::required(ParamField::ALL.iter().map(|f| (*f, self.get(*f))))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tools
// ─────────────────────────────────────────────────────────────────────────────

/// Editable fields of a tool definition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ToolDraft {
    pub tool_name: String,
    pub tool_type: String,
    pub tool_desc: String,
    pub industry_affiliation: String,
    pub application_scenario: String,
    #[serde(default)]
    pub tool_parameters: Vec<Parameter>,
}

impl ToolDraft {
    /// Scalar field value. Returns `""` for [`ToolField::Parameters`].
    pub fn get(&self, field: ToolField) -> &str {
        match field {
            ToolField::ToolName => &self.tool_name,
            ToolField::ToolType => &self.tool_type,
            ToolField::ToolDesc => &self.tool_desc,
            ToolField::IndustryAffiliation => &self.industry_affiliation,
            ToolField::ApplicationScenario => &self.application_scenario,
            ToolField::Parameters => "",
        }
    }

    /// Mutable scalar field, `None` for [`ToolField::Parameters`].
    pub fn get_mut(&mut self, field: ToolField) -> Option<&mut String> {
        match field {
            ToolField::ToolName => Some(&mut self.tool_name),
            ToolField::ToolType => Some(&mut self.tool_type),
            ToolField::ToolDesc => Some(&mut self.tool_desc),
            ToolField::IndustryAffiliation => Some(&mut self.industry_affiliation),
            ToolField::ApplicationScenario => Some(&mut self.application_scenario),
            ToolField::Parameters => None,
        }
    }

    /// Required-field check over the five scalar fields.
    pub fn validate(&self) -> FieldErrors<ToolField> {
        FieldErrors::required(ToolField::REQUIRED.iter().map(|f| (*f, self.get(*f))))
    }
}

/// A committed tool definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolRecord {
    pub id: RecordId,
    pub tool_name: String,
    pub tool_type: String,
    pub tool_desc: String,
    pub industry_affiliation: String,
    pub application_scenario: String,
    #[serde(default)]
    pub tool_parameters: Vec<Parameter>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Prompts
// ─────────────────────────────────────────────────────────────────────────────

/// Editable fields of an industry scenario prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PromptDraft {
    pub industry: String,
    pub scenario: String,
    pub bg_klg_prompt: String,
}

impl PromptDraft {
    pub fn get(&self, field: PromptField) -> &str {
        match field {
            PromptField::Industry => &self.industry,
            PromptField::Scenario => &self.scenario,
            PromptField::BgKlgPrompt => &self.bg_klg_prompt,
        }
    }

    pub fn get_mut(&mut self, field: PromptField) -> &mut String {
        match field {
            PromptField::Industry => &mut self.industry,
            PromptField::Scenario => &mut self.scenario,
            PromptField::BgKlgPrompt => &mut self.bg_klg_prompt,
        }
    }

    pub fn validate(&self) -> FieldErrors<PromptField> {
        FieldErrors::required(PromptField::ALL.iter().map(|f| (*f, self.get(*f))))
    }
}

/// A committed industry scenario prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptRecord {
    pub id: RecordId,
    pub industry: String,
    pub scenario: String,
    pub bg_klg_prompt: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Entity trait
// ─────────────────────────────────────────────────────────────────────────────

/// Glue between a record type and its draft, used by the generic store.
pub trait Entity: Clone + fmt::Debug {
    type Draft: Clone + fmt::Debug;
    type Field: FieldName;

    const KIND: EntityKind;

    fn id(&self) -> RecordId;

    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    fn to_draft(&self) -> Self::Draft;

    fn validate_draft(draft: &Self::Draft) -> FieldErrors<Self::Field>;

    /// Short human-readable name for dialogs and status lines
    fn display_name(&self) -> String;
}

impl Entity for ToolRecord {
    type Draft = ToolDraft;
    type Field = ToolField;

    const KIND: EntityKind = EntityKind::Tool;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: ToolDraft) -> Self {
        Self {
            id,
            tool_name: draft.tool_name,
            tool_type: draft.tool_type,
            tool_desc: draft.tool_desc,
            industry_affiliation: draft.industry_affiliation,
            application_scenario: draft.application_scenario,
            tool_parameters: draft.tool_parameters,
        }
    }

    fn to_draft(&self) -> ToolDraft {
        ToolDraft {
            tool_name: self.tool_name.clone(),
            tool_type: self.tool_type.clone(),
            tool_desc: self.tool_desc.clone(),
            industry_affiliation: self.industry_affiliation.clone(),
            application_scenario: self.application_scenario.clone(),
            tool_parameters: self.tool_parameters.clone(),
        }
    }

    fn validate_draft(draft: &ToolDraft) -> FieldErrors<ToolField> {
        draft.validate()
    }

    fn display_name(&self) -> String {
        self.tool_name.clone()
    }
}

impl Entity for PromptRecord {
    type Draft = PromptDraft;
    type Field = PromptField;

    const KIND: EntityKind = EntityKind::Prompt;

    fn id(&self) -> RecordId {
        self.id
    }

    fn from_draft(id: RecordId, draft: PromptDraft) -> Self {
        Self {
            id,
            industry: draft.industry,
            scenario: draft.scenario,
            bg_klg_prompt: draft.bg_klg_prompt,
        }
    }

    fn to_draft(&self) -> PromptDraft {
        PromptDraft {
            industry: self.industry.clone(),
            scenario: self.scenario.clone(),
            bg_klg_prompt: self.bg_klg_prompt.clone(),
        }
    }

    fn validate_draft(draft: &PromptDraft) -> FieldErrors<PromptField> {
        draft.validate()
    }

    fn display_name(&self) -> String {
        format!("{} - {}", self.industry, self.scenario)
    }
}
