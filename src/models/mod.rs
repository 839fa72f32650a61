use serde::{Deserialize, Serialize};

/// One catalog entry describing an uploaded file.
///
/// `id` is the creation timestamp in milliseconds since epoch. Two uploads
/// within the same millisecond produce colliding ids; the catalog has no
/// uniqueness constraint, so both records are kept.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
}
