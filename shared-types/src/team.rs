use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Entry of the read-only team catalog used by the assignee picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub avatar: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TeamResponse {
    pub members: Vec<TeamMember>,
}
