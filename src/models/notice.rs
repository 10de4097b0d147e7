use serde::{Deserialize, Serialize};

pub type NoticeId = u64;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum NoticeSeverity {
    Success,
    Info,
    Warning,
    Error,
}

impl NoticeSeverity {
    /// CSS modifier used by the notice stack
    pub fn css_class(&self) -> &'static str {
        match self {
            NoticeSeverity::Success => "notice--success",
            NoticeSeverity::Info => "notice--info",
            NoticeSeverity::Warning => "notice--warning",
            NoticeSeverity::Error => "notice--error",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeSeverity::Success => "✅",
            NoticeSeverity::Info => "ℹ️",
            NoticeSeverity::Warning => "⚠️",
            NoticeSeverity::Error => "❌",
        }
    }
}

/// A transient message shown in the notice stack. Immutable once enqueued.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Notice {
    pub id: NoticeId,
    pub severity: NoticeSeverity,
    pub message: String,
    pub timeout_ms: u32,
}
