//! Message types for the application (TEA pattern)

use crate::form::TextEdit;
use crate::input_key::InputKey;
use crate::state::EntityTab;

/// All possible messages/actions in the application
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Raw key press, mapped to a message by the key handler
    Key(InputKey),

    /// Poll timeout; expires the status line
    Tick,

    /// Quit immediately (q in a list, Ctrl+C, SIGINT/SIGTERM)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Shell
    // ─────────────────────────────────────────────────────────
    SwitchTab(EntityTab),
    NextTab,
    PreviousTab,

    // ─────────────────────────────────────────────────────────
    // List view
    // ─────────────────────────────────────────────────────────
    SelectNext,
    SelectPrevious,
    SelectFirst,
    SelectLast,
    /// Open a blank form for the active tab
    OpenCreateForm,
    /// Open the form pre-populated with the selected record
    OpenEditForm,
    /// Open the selected prompt when its card is truncated
    ViewFullPrompt,
    /// Ask for confirmation before deleting the selected record
    RequestDelete,

    // ─────────────────────────────────────────────────────────
    // Confirmation dialog
    // ─────────────────────────────────────────────────────────
    ConfirmDelete,
    CancelDelete,

    // ─────────────────────────────────────────────────────────
    // Form view
    // ─────────────────────────────────────────────────────────
    FocusNext,
    FocusPrevious,
    EditText(TextEdit),
    CycleOption { forward: bool },
    SubmitForm,
    CancelForm,

    // ─────────────────────────────────────────────────────────
    // Parameter sub-editor
    // ─────────────────────────────────────────────────────────
    AddParameter,
    EditParameter,
    RequestDeleteParameter,
    SelectNextParameter,
    SelectPreviousParameter,
    ParamFocusNext,
    ParamFocusPrevious,
    ParamEditText(TextEdit),
    CycleParamType { forward: bool },
    SaveParameter,
    CancelParameter,
}
