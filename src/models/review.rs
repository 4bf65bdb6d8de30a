use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: String,
    pub user_name: String,
    /// 1-5 stars.
    pub rating: u8,
    pub comment: String,
    /// Display string, e.g. "2 days ago" or "Just now".
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Review {
    pub fn new(
        id: impl Into<String>,
        user_name: impl Into<String>,
        rating: u8,
        comment: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            user_name: user_name.into(),
            rating,
            comment: comment.into(),
            date: date.into(),
            avatar_url: None,
        }
    }
}
