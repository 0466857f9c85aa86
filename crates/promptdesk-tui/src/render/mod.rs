//! Main render/view function (View in TEA pattern)

use ratatui::{style::Style, widgets::Block, Frame};

use promptdesk_app::{AppState, EntityTab, EntityView};

use crate::layout;
use crate::theme::palette;
use crate::widgets;

#[cfg(test)]
mod tests;

/// Render the complete UI (View function in TEA)
///
/// Pure rendering: reads state, never mutates it.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );

    let areas = layout::create(area, state.settings.ui.show_key_hints);

    frame.render_widget(widgets::AppHeader::new(state.active_tab), areas.header);

    match state.active_tab {
        EntityTab::Tools => match &state.tools.view {
            EntityView::Listing => frame.render_widget(
                widgets::ToolList::new(state.tools.store.list(), state.tools.selected),
                areas.body,
            ),
            EntityView::Creating(form) | EntityView::Editing { form, .. } => {
                frame.render_widget(widgets::ToolForm::new(form, state.catalog()), areas.body)
            }
        },
        EntityTab::Prompts => match &state.prompts.view {
            EntityView::Listing => frame.render_widget(
                widgets::PromptList::new(
                    state.prompts.store.list(),
                    state.prompts.selected,
                    state.settings.ui.prompt_preview_chars,
                ),
                areas.body,
            ),
            EntityView::Creating(form) | EntityView::Editing { form, .. } => {
                frame.render_widget(widgets::PromptForm::new(form), areas.body)
            }
        },
    }

    frame.render_widget(widgets::StatusBar::new(state), areas.footer);

    // Modal goes last so it overlays everything
    if let Some(dialog) = &state.confirm_dialog_state {
        frame.render_widget(widgets::ConfirmDialog::new(dialog), area);
    }
}
