use serde::{Deserialize, Serialize};

/// One identity-mapping record: a mainframe user ID, the distributed
/// identity it maps to, and a display name for operator messaging.
///
/// Records are created by the record source and never mutated by the
/// generator. Field values are kept exactly as read; trimming happens at
/// render time only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(rename = "mainframeId")]
    pub mainframe_id: String,
    #[serde(rename = "distributedId")]
    pub distributed_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
}

impl Identity {
    pub fn new(
        mainframe_id: impl Into<String>,
        distributed_id: impl Into<String>,
        user_name: impl Into<String>,
    ) -> Self {
        Self {
            mainframe_id: mainframe_id.into(),
            distributed_id: distributed_id.into(),
            user_name: user_name.into(),
        }
    }
}
