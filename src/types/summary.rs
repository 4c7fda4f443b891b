use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Origin of a saved summary version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SummaryKind {
    AiGenerated,
    ManualEdit,
}

impl SummaryKind {
    pub fn label(&self) -> &'static str {
        match self {
            SummaryKind::AiGenerated => "AI Generated",
            SummaryKind::ManualEdit => "Manual Edit",
        }
    }
}

/// One entry in a summary's version history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryVersion {
    /// 1-based, assigned in creation order.
    pub id: u32,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub kind: SummaryKind,
}
