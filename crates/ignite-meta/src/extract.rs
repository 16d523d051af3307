//! Metadata extraction with version-control fallback.
//!
//! Front matter values always win. Missing `date`, `author` and `email` fall
//! back to the file's creation commit; missing `title` falls back to the first
//! level-1 heading, then to a title derived from the file name.

use std::path::Path;

use ignite_vcs::{FileHistory, HistoryLookup, file_history};
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::frontmatter::FrontMatter;
use crate::metadata::{ExtractedMetadata, Extraction};
use crate::resource::{is_sidebar_override, title_from_path};

/// Produces [`ExtractedMetadata`] for content files.
///
/// History is queried at most once per file, and only when front matter
/// leaves one of the history-backed fields unset.
pub struct MetadataExtractor<'a> {
    history: &'a dyn HistoryLookup,
}

impl<'a> MetadataExtractor<'a> {
    /// Create an extractor using `history` for fallback values.
    ///
    /// Paths handed to the history lookup are resource paths, so the lookup
    /// must be rooted at the pages directory.
    #[must_use]
    pub fn new(history: &'a dyn HistoryLookup) -> Self {
        Self { history }
    }

    /// Extract metadata for one content file.
    ///
    /// Sidebar override files short-circuit to [`Extraction::SidebarOverride`]
    /// without touching history.
    pub fn extract(
        &self,
        resource_path: &str,
        front_matter: &FrontMatter,
        body: &str,
    ) -> Extraction {
        if is_sidebar_override(resource_path) {
            return Extraction::SidebarOverride;
        }

        let date = front_matter.date();
        let author = front_matter.author();
        let email = front_matter.email();

        let history = if date.is_some() && author.is_some() && email.is_some() {
            FileHistory::default()
        } else {
            file_history(self.history, Path::new(resource_path))
        };

        let title = front_matter
            .title()
            .or_else(|| first_heading(body))
            .unwrap_or_else(|| title_from_path(resource_path));

        Extraction::Page(ExtractedMetadata {
            resource_path: resource_path.to_owned(),
            title,
            date: date.unwrap_or(history.date),
            author: author.unwrap_or(history.author),
            email: email.unwrap_or(history.email),
            layout: front_matter.layout(),
        })
    }
}

/// Text of the first level-1 heading in a Markdown body.
#[must_use]
pub fn first_heading(body: &str) -> Option<String> {
    let mut in_h1 = false;
    let mut text = String::new();

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                ..
            }) => in_h1 = true,
            Event::End(TagEnd::Heading(HeadingLevel::H1)) => {
                let title = text.trim();
                if !title.is_empty() {
                    return Some(title.to_owned());
                }
                in_h1 = false;
                text.clear();
            }
            Event::Text(t) | Event::Code(t) if in_h1 => text.push_str(&t),
            _ => {}
        }
    }

    None
}
