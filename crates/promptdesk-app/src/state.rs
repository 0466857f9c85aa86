//! Application state (Model in TEA pattern)

use chrono::{DateTime, Duration, Local};

use promptdesk_core::{
    seed_prompts, seed_tools, Entity, PromptRecord, RecordId, RecordStore, ToolRecord,
};

use crate::config::{Catalog, Settings};
use crate::confirm_dialog::ConfirmDialogState;
use crate::form::{preview_text, InputKind, PromptFormState, ToolFormState};

/// How long a status message stays in the footer
pub const STATUS_TTL_SECS: i64 = 5;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// The two entity subsystems selectable from the tab bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntityTab {
    #[default]
    Tools,
    Prompts,
}

impl EntityTab {
    pub const ALL: [EntityTab; 2] = [EntityTab::Tools, EntityTab::Prompts];

    pub fn title(&self) -> &'static str {
        match self {
            EntityTab::Tools => "工具配置 (Tools)",
            EntityTab::Prompts => "行业&场景 Prompt",
        }
    }

    pub fn index(&self) -> usize {
        match self {
            EntityTab::Tools => 0,
            EntityTab::Prompts => 1,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            EntityTab::Tools => EntityTab::Prompts,
            EntityTab::Prompts => EntityTab::Tools,
        }
    }
}

/// Which screen an entity subsystem shows
#[derive(Debug, Clone, PartialEq)]
pub enum EntityView<R, F> {
    Listing,
    Creating(F),
    Editing { record: R, form: F },
}

impl<R, F> EntityView<R, F> {
    pub fn is_listing(&self) -> bool {
        matches!(self, EntityView::Listing)
    }

    pub fn form(&self) -> Option<&F> {
        match self {
            EntityView::Listing => None,
            EntityView::Creating(form) | EntityView::Editing { form, .. } => Some(form),
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut F> {
        match self {
            EntityView::Listing => None,
            EntityView::Creating(form) | EntityView::Editing { form, .. } => Some(form),
        }
    }
}

/// One entity subsystem: its store, current view and list cursor
#[derive(Debug, Clone, PartialEq)]
pub struct EntityPane<R, F> {
    pub store: RecordStore<R>,
    pub view: EntityView<R, F>,
    /// Index of the highlighted card
    pub selected: usize,
}

impl<R: Entity, F> EntityPane<R, F> {
    pub fn new(store: RecordStore<R>) -> Self {
        Self {
            store,
            view: EntityView::Listing,
            selected: 0,
        }
    }

    pub fn selected_record(&self) -> Option<&R> {
        self.store.list().get(self.selected)
    }

    pub fn select_next(&mut self) {
        let len = self.store.len();
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.store.len().saturating_sub(1);
    }

    /// Move the cursor onto the record with `id`, if present
    pub fn select_id(&mut self, id: RecordId) {
        if let Some(index) = self.store.position(id) {
            self.selected = index;
        }
    }

    /// Keep the cursor inside the list after a removal
    pub fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.store.len().saturating_sub(1));
    }

    pub fn show_list(&mut self) {
        self.view = EntityView::Listing;
    }
}

/// Severity of a status line message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

/// Transient footer message
#[derive(Debug, Clone, PartialEq)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    pub at: DateTime<Local>,
}

impl StatusMessage {
    pub fn is_expired(&self, now: DateTime<Local>) -> bool {
        now - self.at >= Duration::seconds(STATUS_TTL_SECS)
    }
}

/// Current input context, derived from state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Card list of the active tab
    List,
    /// Tool or prompt form
    Form,
    /// Parameter slot open inside the tool form
    ParamSlot,
    /// Delete confirmation on top of everything
    ConfirmDialog,
}

pub type ToolPane = EntityPane<ToolRecord, ToolFormState>;
pub type PromptPane = EntityPane<PromptRecord, PromptFormState>;

/// Complete application state (the Model in TEA)
#[derive(Debug, Clone)]
pub struct AppState {
    pub active_tab: EntityTab,
    pub tools: ToolPane,
    pub prompts: PromptPane,
    pub confirm_dialog_state: Option<ConfirmDialogState>,
    pub settings: Settings,
    pub status: Option<StatusMessage>,
    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    /// Build state from settings, seeding example records when enabled
    pub fn new(settings: Settings) -> Self {
        let (tools, prompts) = if settings.behavior.seed_examples {
            (
                RecordStore::seeded(seed_tools()),
                RecordStore::seeded(seed_prompts()),
            )
        } else {
            (RecordStore::new(), RecordStore::new())
        };
        Self::with_stores(settings, tools, prompts)
    }

    pub fn with_stores(
        settings: Settings,
        tools: RecordStore<ToolRecord>,
        prompts: RecordStore<PromptRecord>,
    ) -> Self {
        Self {
            active_tab: EntityTab::default(),
            tools: EntityPane::new(tools),
            prompts: EntityPane::new(prompts),
            confirm_dialog_state: None,
            settings,
            status: None,
            phase: AppPhase::Running,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.settings.catalog
    }

    /// Input context for the key handler and footer hints
    pub fn ui_mode(&self) -> UiMode {
        if self.confirm_dialog_state.is_some() {
            return UiMode::ConfirmDialog;
        }
        match self.active_tab {
            EntityTab::Tools => match self.tools.view.form() {
                None => UiMode::List,
                Some(form) if form.params.is_editing() => UiMode::ParamSlot,
                Some(_) => UiMode::Form,
            },
            EntityTab::Prompts => {
                if self.prompts.view.is_listing() {
                    UiMode::List
                } else {
                    UiMode::Form
                }
            }
        }
    }

    /// Kind of the focused form input, `None` outside a form
    pub fn focused_input(&self) -> Option<InputKind> {
        match self.active_tab {
            EntityTab::Tools => self.tools.view.form().map(ToolFormState::input_kind),
            EntityTab::Prompts => self.prompts.view.form().map(PromptFormState::input_kind),
        }
    }

    /// True when the active list shows no records
    pub fn active_list_is_empty(&self) -> bool {
        match self.active_tab {
            EntityTab::Tools => self.tools.store.is_empty(),
            EntityTab::Prompts => self.prompts.store.is_empty(),
        }
    }

    /// Whether the selected prompt card is cut short in the list
    pub fn selected_prompt_truncated(&self) -> bool {
        self.prompts.selected_record().is_some_and(|p| {
            preview_text(&p.bg_klg_prompt, self.settings.ui.prompt_preview_chars).1
        })
    }

    pub fn set_status(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Info,
            at: Local::now(),
        });
    }

    pub fn set_error(&mut self, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            level: StatusLevel::Error,
            at: Local::now(),
        });
    }

    /// Drop the status message once it has been shown long enough
    pub fn expire_status(&mut self, now: DateTime<Local>) {
        if self.status.as_ref().is_some_and(|s| s.is_expired(now)) {
            self.status = None;
        }
    }

    pub fn request_quit(&mut self) {
        self.phase = AppPhase::Quitting;
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BehaviorSettings;

    #[test]
    fn test_default_state_is_seeded_tools_list() {
        let state = AppState::default();

        assert_eq!(state.active_tab, EntityTab::Tools);
        assert_eq!(state.tools.store.len(), 1);
        assert_eq!(state.prompts.store.len(), 2);
        assert_eq!(state.ui_mode(), UiMode::List);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_no_seed_starts_empty() {
        let settings = Settings {
            behavior: BehaviorSettings {
                seed_examples: false,
            },
            ..Settings::default()
        };
        let state = AppState::new(settings);

        assert!(state.tools.store.is_empty());
        assert!(state.active_list_is_empty());
    }

    #[test]
    fn test_ui_mode_follows_views() {
        let mut state = AppState::default();

        state.tools.view = EntityView::Creating(ToolFormState::create());
        assert_eq!(state.ui_mode(), UiMode::Form);

        if let Some(form) = state.tools.view.form_mut() {
            form.params.begin_add();
        }
        assert_eq!(state.ui_mode(), UiMode::ParamSlot);

        state.active_tab = EntityTab::Prompts;
        assert_eq!(state.ui_mode(), UiMode::List);

        let prompt = state.prompts.store.list()[0].clone();
        state.confirm_dialog_state = Some(ConfirmDialogState::delete_prompt(&prompt));
        assert_eq!(state.ui_mode(), UiMode::ConfirmDialog);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut state = AppState::default();
        state.prompts.select_next();
        state.prompts.select_next();
        assert_eq!(state.prompts.selected, 1);

        state.prompts.select_previous();
        state.prompts.select_previous();
        assert_eq!(state.prompts.selected, 0);

        state.prompts.select_last();
        state.prompts.store.remove(2);
        state.prompts.clamp_selection();
        assert_eq!(state.prompts.selected, 0);
    }

    #[test]
    fn test_status_expires() {
        let mut state = AppState::default();
        state.set_status("已创建工具 x");
        let shown_at = state.status.as_ref().unwrap().at;

        state.expire_status(shown_at + Duration::seconds(1));
        assert!(state.status.is_some());

        state.expire_status(shown_at + Duration::seconds(STATUS_TTL_SECS));
        assert!(state.status.is_none());
    }

    #[test]
    fn test_selected_prompt_truncation_uses_preview_setting() {
        let mut state = AppState::default();
        assert!(!state.selected_prompt_truncated());

        state.settings.ui.prompt_preview_chars = 10;
        assert!(state.selected_prompt_truncated());
    }

    #[test]
    fn test_tab_toggle() {
        assert_eq!(EntityTab::Tools.toggle(), EntityTab::Prompts);
        assert_eq!(EntityTab::Prompts.toggle().index(), 0);
    }
}
