//! Page metadata extraction and layout resolution for ignite.
//!
//! This crate turns a content file into a complete [`PageMetadata`] record:
//!
//! 1. [`split_front_matter`] separates the YAML header from the body
//! 2. [`MetadataExtractor`] fills `title`, `date`, `author` and `email`,
//!    falling back to version-control history
//! 3. [`LayoutResolver`] picks the layout template
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//! use ignite_meta::{Extraction, LayoutResolver, MetadataExtractor, split_front_matter};
//! use ignite_vcs::NoHistory;
//!
//! let source = "---\ntitle: Welcome\n---\n\nHello.";
//! let (front_matter, body) = split_front_matter(source).unwrap();
//!
//! let extractor = MetadataExtractor::new(&NoHistory);
//! let Extraction::Page(page) = extractor.extract("index.mdx", &front_matter, body) else {
//!     unreachable!()
//! };
//!
//! let layouts: BTreeSet<String> = BTreeSet::new();
//! let page = LayoutResolver::new(&layouts).complete(page).unwrap();
//! assert_eq!(page.title, "Welcome");
//! assert_eq!(page.layout, "home-page");
//! ```

mod extract;
mod frontmatter;
mod layout;
mod metadata;
pub mod resource;

pub use extract::{MetadataExtractor, first_heading};
pub use frontmatter::{FrontMatter, FrontMatterError, split_front_matter};
pub use layout::{
    DEFAULT_LAYOUT, HOME_LAYOUT, LayoutCatalog, LayoutDecision, LayoutDir, LayoutResolver,
};
pub use metadata::{ExtractedMetadata, Extraction, PageMetadata};
