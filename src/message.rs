use crate::event::StopEvent;

/// Termination status reported by cursor-agent.
///
/// Matching is exact; anything outside the four known values is carried
/// through verbatim so the notification still says what happened.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Completed,
    Error,
    Cancelled,
    Timeout,
    Other(String),
}

impl Status {
    pub fn parse(s: &str) -> Self {
        match s {
            "completed" => Status::Completed,
            "error" => Status::Error,
            "cancelled" => Status::Cancelled,
            "timeout" => Status::Timeout,
            other => Status::Other(other.to_string()),
        }
    }

    fn closing_line(&self) -> String {
        match self {
            Status::Completed => "✅ Agent 已成功完成任務".to_string(),
            Status::Error => "❌ Agent 因錯誤而終止".to_string(),
            Status::Cancelled => "⚠️ Agent 已被取消".to_string(),
            Status::Timeout => "⏱️ Agent 因逾時而終止".to_string(),
            Status::Other(s) => format!("ℹ️ Agent 終止狀態：{s}"),
        }
    }
}

/// Render the notification text for a termination event.
///
/// Pure function of the event: a fixed header, one line per field (missing
/// fields already defaulted by [`StopEvent`]), then a status-specific
/// closing line.
pub fn format_message(event: &StopEvent) -> String {
    let mut msg = String::from("🔔 Cursor Agent 終止通知\n\n");
    msg.push_str(&format!("狀態：{}\n", event.status()));
    msg.push_str(&format!("對話 ID：{}\n", event.conversation_id()));
    msg.push_str(&format!("模型：{}\n", event.model()));
    msg.push_str(&format!("循環次數：{}\n", event.loop_count()));
    msg.push_str(&format!("使用者：{}\n", event.user_email()));
    msg.push('\n');
    msg.push_str(&Status::parse(event.status()).closing_line());
    msg
}
