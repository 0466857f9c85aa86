//! Full-screen rendering tests

use promptdesk_app::{process_message, AppState, InputKey, Message};

use super::view;
use crate::test_utils::TestTerminal;

fn press(state: &mut AppState, key: InputKey) {
    process_message(state, Message::Key(key));
}

fn draw(state: &AppState) -> TestTerminal {
    let mut term = TestTerminal::with_size(100, 40);
    term.draw_with(|frame| view(frame, state));
    term
}

#[test]
fn test_startup_screen_shows_seeded_tool() {
    let state = AppState::default();
    let term = draw(&state);

    assert!(term.buffer_contains("PromptDesk"));
    assert!(term.buffer_contains("工具列表 (1)"));
    assert!(term.buffer_contains("get_mention_count"));
    assert!(term.buffer_contains("q 退出"));
}

#[test]
fn test_tab_switch_shows_prompt_list() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Tab);
    let term = draw(&state);

    assert!(term.buffer_contains("Prompt 列表 (2)"));
    assert!(term.buffer_contains("汽车行业 · 质量把控"));
    assert!(!term.buffer_contains("get_mention_count"));
}

#[test]
fn test_add_key_opens_tool_form() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('a'));
    let term = draw(&state);

    assert!(term.buffer_contains("添加新工具"));
    assert!(term.buffer_contains("[ 创建工具 ]"));
    assert!(!term.buffer_contains("工具列表"));
}

#[test]
fn test_typed_text_appears_in_form() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('a'));
    for c in "get_sales_trend".chars() {
        press(&mut state, InputKey::Char(c));
    }
    let term = draw(&state);

    assert!(term.buffer_contains("get_sales_trend▏"));
}

#[test]
fn test_delete_shows_confirmation_over_list() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('d'));
    let term = draw(&state);

    assert!(term.buffer_contains("确认删除工具"));
    assert!(term.buffer_contains("y 确认"));

    press(&mut state, InputKey::Char('y'));
    let term = draw(&state);
    assert!(term.buffer_contains("暂无工具配置"));
    assert!(term.buffer_contains("已删除工具 get_mention_count"));
}

#[test]
fn test_empty_prompt_list_after_deleting_all() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('2'));
    for _ in 0..2 {
        press(&mut state, InputKey::Char('d'));
        press(&mut state, InputKey::Enter);
    }
    let term = draw(&state);

    assert!(
        term.buffer_contains("暂无 Prompt 配置"),
        "screen:\n{}",
        term.content()
    );
}

#[test]
fn test_parameter_slot_renders_inside_form() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('e'));
    // tool name, type, industry, scenario, description, parameters
    for _ in 0..5 {
        press(&mut state, InputKey::Tab);
    }
    press(&mut state, InputKey::Char('a'));
    let term = draw(&state);

    assert!(term.buffer_contains("添加新参数"));
    assert!(term.buffer_contains("Enter 保存参数"));
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut state = AppState::default();
    press(&mut state, InputKey::Char('a'));
    let mut term = TestTerminal::with_size(12, 6);
    term.draw_with(|frame| view(frame, &state));

    press(&mut state, InputKey::Esc);
    press(&mut state, InputKey::Char('d'));
    term.draw_with(|frame| view(frame, &state));
}
