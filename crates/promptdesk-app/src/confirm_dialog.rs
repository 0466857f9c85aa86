//! Delete confirmation dialog state.
//!
//! Every delete goes through this dialog. The rendering widget lives in
//! promptdesk-tui's widgets/confirm_dialog.rs.

use promptdesk_core::{Parameter, PromptRecord, RecordId, ToolRecord};

/// What the dialog deletes when confirmed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PendingDelete {
    Tool(RecordId),
    Prompt(RecordId),
    /// Entry index in the open tool form's parameter list
    Parameter(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDialogState {
    pub title: String,
    pub message: String,
    pub confirm_label: &'static str,
    pub cancel_label: &'static str,
    pub target: PendingDelete,
}

impl ConfirmDialogState {
    fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        confirm_label: &'static str,
        target: PendingDelete,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            confirm_label,
            cancel_label: "取消",
            target,
        }
    }

    pub fn delete_tool(tool: &ToolRecord) -> Self {
        Self::new(
            "确认删除工具",
            format!("确定要删除工具 \"{}\" 吗？此操作无法撤销。", tool.tool_name),
            "确认删除",
            PendingDelete::Tool(tool.id),
        )
    }

    pub fn delete_prompt(prompt: &PromptRecord) -> Self {
        Self::new(
            "确认删除 Prompt 配置",
            format!(
                "确定要删除 \"{} - {}\" 的 Prompt 配置吗？此操作无法撤销。",
                prompt.industry, prompt.scenario
            ),
            "确认删除",
            PendingDelete::Prompt(prompt.id),
        )
    }

    pub fn delete_parameter(index: usize, param: &Parameter) -> Self {
        Self::new(
            "确认删除参数",
            format!("确定要删除参数 \"{}\" 吗？此操作无法撤销。", param.name),
            "删除",
            PendingDelete::Parameter(index),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delete_tool_names_record() {
        let tool = promptdesk_core::seed_tools().remove(0);
        let dialog = ConfirmDialogState::delete_tool(&tool);

        assert_eq!(dialog.title, "确认删除工具");
        assert!(dialog.message.contains("\"get_mention_count\""));
        assert_eq!(dialog.target, PendingDelete::Tool(1));
    }

    #[test]
    fn test_delete_prompt_names_industry_and_scenario() {
        let prompt = promptdesk_core::seed_prompts().remove(1);
        let dialog = ConfirmDialogState::delete_prompt(&prompt);

        assert!(dialog.message.contains("汽车行业 - 市场分析"));
        assert_eq!(dialog.target, PendingDelete::Prompt(2));
    }

    #[test]
    fn test_delete_parameter_targets_index() {
        let param = Parameter::new("brand", "string", "品牌");
        let dialog = ConfirmDialogState::delete_parameter(2, &param);

        assert_eq!(dialog.target, PendingDelete::Parameter(2));
        assert_eq!(dialog.confirm_label, "删除");
        assert_eq!(dialog.cancel_label, "取消");
    }
}
