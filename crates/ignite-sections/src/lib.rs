//! Top-level section ordering for ignite.
//!
//! A section is the first path segment of a nested page (`docs/intro.mdx`
//! belongs to `docs`). Sections are not stored anywhere; they are computed
//! from the discovered page paths whenever needed.
//!
//! [`top_level_sections`] returns the sections in display order: the ones
//! named in the preferred order first, then the rest alphabetically.

mod order;
mod order_proptest;

pub use order::{
    DEFAULT_ORDER, compare_sections, locale_cmp, pages_in_section, section_of, top_level_sections,
};
