//! Industry scenario prompt form
//!
//! Industry and scenario are catalog selectors. Changing the industry resets
//! the scenario; picking a listed scenario fills the background prompt from
//! the template table when the prompt is still empty. The last scenario
//! option switches to a free-text custom scenario.

use promptdesk_core::prelude::*;
use promptdesk_core::{is_blank, Entity, FieldErrors, PromptDraft, PromptField, PromptRecord};

use super::{cycle_option, FormFocus, FormMode, InputKind, TextEdit};
use crate::config::Catalog;

/// Label of the trailing "custom scenario" option
pub const CUSTOM_SCENARIO_LABEL: &str = "自定义场景...";

#[derive(Debug, Clone, PartialEq)]
pub struct PromptFormState {
    pub mode: FormMode,
    pub draft: PromptDraft,
    pub errors: FieldErrors<PromptField>,
    pub focus: FormFocus<PromptField>,
    /// Scenario is typed by hand instead of picked from the catalog
    pub custom_scenario: bool,
    pub dirty: bool,
}

impl PromptFormState {
    pub fn create() -> Self {
        Self::with_draft(FormMode::Create, PromptDraft::default(), false)
    }

    /// Form pre-populated from `record`.
    ///
    /// A scenario missing from the industry's catalog list opens in custom
    /// mode with the text kept.
    pub fn edit(record: &PromptRecord, catalog: &Catalog) -> Self {
        let custom = !is_blank(&record.scenario)
            && !catalog.has_scenario(&record.industry, &record.scenario);
        Self::with_draft(FormMode::Edit(record.id), record.to_draft(), custom)
    }

    fn with_draft(mode: FormMode, draft: PromptDraft, custom_scenario: bool) -> Self {
        Self {
            mode,
            draft,
            errors: FieldErrors::new(),
            focus: FormFocus::Field(PromptField::Industry),
            custom_scenario,
            dirty: false,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() {
            "编辑 Prompt 配置"
        } else {
            "添加新 Prompt 配置"
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.mode.is_edit() {
            "保存修改"
        } else {
            "创建配置"
        }
    }

    pub fn input_kind(&self) -> InputKind {
        match self.focus {
            FormFocus::Field(PromptField::Industry) => InputKind::Select,
            FormFocus::Field(PromptField::Scenario) if self.custom_scenario => {
                InputKind::SelectWithText
            }
            FormFocus::Field(PromptField::Scenario) => InputKind::Select,
            FormFocus::Field(PromptField::BgKlgPrompt) => InputKind::Text,
            FormFocus::Submit => InputKind::SubmitButton,
            FormFocus::Cancel => InputKind::CancelButton,
        }
    }

    /// The scenario selector stays disabled until an industry is chosen
    pub fn scenario_enabled(&self) -> bool {
        !is_blank(&self.draft.industry)
    }

    /// Scenario choices for the current industry, custom option last
    pub fn scenario_options(&self, catalog: &Catalog) -> Vec<String> {
        catalog
            .scenarios_for(&self.draft.industry)
            .iter()
            .cloned()
            .chain(std::iter::once(CUSTOM_SCENARIO_LABEL.to_string()))
            .collect()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(&PromptField::ALL);
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.prev(&PromptField::ALL);
    }

    /// Change the industry, resetting the scenario and leaving custom mode.
    pub fn set_industry(&mut self, industry: impl Into<String>) {
        self.draft.industry = industry.into();
        self.draft.scenario.clear();
        self.custom_scenario = false;
        self.errors.clear(PromptField::Industry);
        self.errors.clear(PromptField::Scenario);
        self.dirty = true;
    }

    /// Pick a listed scenario.
    ///
    /// Fills the background prompt from the template table only when the
    /// prompt is empty after trimming.
    pub fn select_scenario(&mut self, scenario: impl Into<String>, catalog: &Catalog) {
        self.draft.scenario = scenario.into();
        self.custom_scenario = false;
        self.errors.clear(PromptField::Scenario);
        self.dirty = true;

        if is_blank(&self.draft.bg_klg_prompt) {
            if let Some(template) = catalog.template_for(&self.draft.industry, &self.draft.scenario)
            {
                debug!(
                    "filled prompt template for {}|{}",
                    self.draft.industry, self.draft.scenario
                );
                self.draft.bg_klg_prompt = template.to_string();
                self.errors.clear(PromptField::BgKlgPrompt);
            }
        }
    }

    /// Switch to a hand-typed scenario, starting from an empty name.
    pub fn choose_custom(&mut self) {
        self.custom_scenario = true;
        self.draft.scenario.clear();
        self.errors.clear(PromptField::Scenario);
        self.dirty = true;
    }

    /// Replace the background prompt text
    pub fn set_prompt(&mut self, text: impl Into<String>) {
        self.draft.bg_klg_prompt = text.into();
        self.errors.clear(PromptField::BgKlgPrompt);
        self.dirty = true;
    }

    /// Step the focused selector
    pub fn cycle_option(&mut self, catalog: &Catalog, forward: bool) {
        match self.focus {
            FormFocus::Field(PromptField::Industry) => {
                if let Some(next) =
                    cycle_option(&catalog.prompt_industries, &self.draft.industry, forward)
                {
                    let next = next.to_string();
                    self.set_industry(next);
                }
            }
            FormFocus::Field(PromptField::Scenario) => {
                if !self.scenario_enabled() {
                    return;
                }
                let options = self.scenario_options(catalog);
                let current = if self.custom_scenario {
                    CUSTOM_SCENARIO_LABEL
                } else {
                    self.draft.scenario.as_str()
                };
                let Some(next) = cycle_option(&options, current, forward) else {
                    return;
                };
                if next == CUSTOM_SCENARIO_LABEL {
                    if !self.custom_scenario {
                        self.choose_custom();
                    }
                } else {
                    let next = next.to_string();
                    self.select_scenario(next, catalog);
                }
            }
            _ => {}
        }
    }

    /// Apply a text edit to the prompt text or the custom scenario name
    pub fn edit_text(&mut self, edit: TextEdit) {
        let field = match self.input_kind() {
            InputKind::Text => PromptField::BgKlgPrompt,
            InputKind::SelectWithText => PromptField::Scenario,
            _ => return,
        };
        edit.apply(self.draft.get_mut(field));
        self.errors.clear(field);
        self.dirty = true;
    }

    pub fn submit(&mut self) -> Option<PromptDraft> {
        let errors = self.draft.validate();
        let first = errors.fields().next();
        if let Some(first) = first {
            debug!("prompt form invalid: {:?}", errors.labels());
            self.focus = FormFocus::Field(first);
            self.errors = errors;
            return None;
        }
        self.errors = errors;
        Some(self.draft.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::default()
    }

    #[test]
    fn test_changing_industry_resets_scenario() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");
        form.select_scenario("质量把控", &catalog);

        form.set_industry("金融行业");

        assert_eq!(form.draft.industry, "金融行业");
        assert_eq!(form.draft.scenario, "");
        assert!(!form.custom_scenario);
    }

    #[test]
    fn test_reselecting_same_industry_resets_scenario() {
        let catalog = Catalog {
            prompt_industries: vec!["汽车行业".to_string()],
            ..Catalog::default()
        };
        let mut form = PromptFormState::create();
        form.focus = FormFocus::Field(PromptField::Industry);
        form.cycle_option(&catalog, true);
        form.select_scenario("质量把控", &catalog);

        form.cycle_option(&catalog, true);

        assert_eq!(form.draft.industry, "汽车行业");
        assert_eq!(form.draft.scenario, "");
        assert!(!form.custom_scenario);
    }

    #[test]
    fn test_template_fills_empty_prompt() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");

        form.select_scenario("质量把控", &catalog);

        assert_eq!(
            Some(form.draft.bg_klg_prompt.as_str()),
            catalog.template_for("汽车行业", "质量把控")
        );
    }

    #[test]
    fn test_template_does_not_overwrite_prompt() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");
        form.set_prompt("X");

        form.select_scenario("质量把控", &catalog);

        assert_eq!(form.draft.bg_klg_prompt, "X");
    }

    #[test]
    fn test_whitespace_prompt_counts_as_empty() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");
        form.set_prompt("   ");

        form.select_scenario("市场分析", &catalog);

        assert_ne!(form.draft.bg_klg_prompt, "   ");
    }

    #[test]
    fn test_scenario_without_template_leaves_prompt_empty() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");

        form.select_scenario("竞品分析", &catalog);

        assert!(form.draft.bg_klg_prompt.is_empty());
    }

    #[test]
    fn test_scenario_disabled_without_industry() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.focus = FormFocus::Field(PromptField::Scenario);

        form.cycle_option(&catalog, true);

        assert!(!form.scenario_enabled());
        assert!(form.draft.scenario.is_empty());
        assert!(!form.custom_scenario);
    }

    #[test]
    fn test_cycle_to_custom_then_type_name() {
        let catalog = catalog();
        let mut form = PromptFormState::create();
        form.set_industry("汽车行业");
        form.focus = FormFocus::Field(PromptField::Scenario);

        // backwards from nothing lands on the trailing custom option
        form.cycle_option(&catalog, false);
        assert!(form.custom_scenario);
        assert_eq!(form.input_kind(), InputKind::SelectWithText);

        for c in "电池回收".chars() {
            form.edit_text(TextEdit::Insert(c));
        }
        assert_eq!(form.draft.scenario, "电池回收");

        form.cycle_option(&catalog, true);
        assert!(!form.custom_scenario);
        assert_eq!(form.draft.scenario, catalog.scenarios_for("汽车行业")[0]);
    }

    #[test]
    fn test_edit_unknown_scenario_opens_custom() {
        let catalog = catalog();
        let record = PromptRecord {
            id: 9,
            industry: "汽车行业".to_string(),
            scenario: "电池回收".to_string(),
            bg_klg_prompt: "p".to_string(),
        };

        let form = PromptFormState::edit(&record, &catalog);
        assert!(form.custom_scenario);
        assert_eq!(form.draft.scenario, "电池回收");

        let seeded = promptdesk_core::seed_prompts().remove(0);
        assert!(!PromptFormState::edit(&seeded, &catalog).custom_scenario);
    }

    #[test]
    fn test_blank_submit_flags_all_fields() {
        let mut form = PromptFormState::create();
        assert!(form.submit().is_none());
        assert_eq!(form.errors.len(), 3);
        assert_eq!(form.errors.get(PromptField::Scenario), Some("场景不能为空"));
    }
}
