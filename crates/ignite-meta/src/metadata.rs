//! Page metadata records.

use serde::{Deserialize, Serialize};

/// Metadata gathered for a page before its layout is known.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExtractedMetadata {
    /// Path of the content file relative to the pages root.
    pub resource_path: String,
    /// Display title.
    pub title: String,
    /// Publication date (empty if unknown).
    pub date: String,
    /// Author name (empty if unknown).
    pub author: String,
    /// Author email (empty if unknown).
    pub email: String,
    /// Layout declared in front matter, if any.
    pub layout: Option<String>,
}

impl ExtractedMetadata {
    /// Complete the record with a resolved layout.
    #[must_use]
    pub fn with_layout(self, layout: impl Into<String>) -> PageMetadata {
        PageMetadata {
            resource_path: self.resource_path,
            title: self.title,
            date: self.date,
            author: self.author,
            email: self.email,
            layout: layout.into(),
        }
    }
}

/// Complete metadata for a page.
///
/// The layout is always a concrete identifier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Path of the content file relative to the pages root.
    pub resource_path: String,
    /// Display title.
    pub title: String,
    /// Publication date (empty if unknown).
    pub date: String,
    /// Author name (empty if unknown).
    pub author: String,
    /// Author email (empty if unknown).
    pub email: String,
    /// Layout template identifier.
    pub layout: String,
}

/// Outcome of extracting metadata from a content file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Extraction {
    /// A regular page.
    Page(ExtractedMetadata),
    /// A sidebar override file; it carries no page metadata.
    SidebarOverride,
}
