//! Custom widget components

mod card_list;
mod confirm_dialog;
mod form_field;
mod header;
pub mod modal_overlay;
mod param_editor;
mod prompt_form;
mod prompt_list;
mod status_bar;
pub mod text;
mod tool_form;
mod tool_list;

pub use confirm_dialog::ConfirmDialog;
pub use header::AppHeader;
pub use prompt_form::PromptForm;
pub use prompt_list::PromptList;
pub use status_bar::StatusBar;
pub use tool_form::ToolForm;
pub use tool_list::ToolList;
