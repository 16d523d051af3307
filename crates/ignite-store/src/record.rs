//! The persisted record type.

use ignite_meta::PageMetadata;
use serde::{Deserialize, Serialize};

/// Front matter persisted for a page.
///
/// Serialized as a flat JSON object:
///
/// ```json
/// {"resourcePath":"docs/intro.mdx","date":"","title":"Intro","author":"","email":""}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrontMatterRecord {
    /// Path of the content file relative to the pages root.
    pub resource_path: String,
    /// Publication date.
    #[serde(default)]
    pub date: String,
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Author name.
    #[serde(default)]
    pub author: String,
    /// Author email.
    #[serde(default)]
    pub email: String,
}

impl From<&PageMetadata> for FrontMatterRecord {
    fn from(page: &PageMetadata) -> Self {
        Self {
            resource_path: page.resource_path.clone(),
            date: page.date.clone(),
            title: page.title.clone(),
            author: page.author.clone(),
            email: page.email.clone(),
        }
    }
}
