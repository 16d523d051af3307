//! Link formatting for generated navigation.

use ignite_meta::resource::strip_content_extension;

/// How resource paths become hrefs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkFormat {
    /// Prefix for every href, without a trailing slash (`""` or `/handbook`).
    pub base_path: String,
    /// Whether hrefs end in `.html`.
    pub html_urls: bool,
}

impl LinkFormat {
    /// Create a link format.
    #[must_use]
    pub fn new(base_path: impl Into<String>, html_urls: bool) -> Self {
        Self {
            base_path: base_path.into(),
            html_urls,
        }
    }

    /// Href for a resource path.
    #[must_use]
    pub fn href(&self, resource_path: &str) -> String {
        format_path(resource_path, &self.base_path, self.html_urls)
    }
}

/// Turn a resource path into an href.
///
/// | Resource path     | Default            | HTML URLs                |
/// |-------------------|--------------------|--------------------------|
/// | `docs/setup.mdx`  | `{base}/docs/setup`| `{base}/docs/setup.html` |
/// | `docs/index.mdx`  | `{base}/docs`      | `{base}/docs/index.html` |
/// | `index.mdx`       | `{base}/`          | `{base}/index.html`      |
#[must_use]
pub fn format_path(resource_path: &str, base_path: &str, html_urls: bool) -> String {
    let route = strip_content_extension(resource_path);
    if html_urls {
        return format!("{base_path}/{route}.html");
    }

    format!("{base_path}/{}", route_without_index(route))
}

/// Drop a trailing `index` segment (`docs/index` to `docs`, `index` to ``).
pub(crate) fn route_without_index(route: &str) -> &str {
    if route == "index" {
        ""
    } else {
        route.strip_suffix("/index").unwrap_or(route)
    }
}
