//! Site navigation derived from the page location.
//!
//! Root pages (`/index.html`) link to in-page anchors and into `pages/`;
//! nested pages (`/pages/*.html`) link back up to the root.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Where the current page sits relative to the site root.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BasePath {
    #[default]
    Root,
    Nested,
}

impl BasePath {
    /// Classify a `location.pathname`.
    pub fn from_pathname(pathname: &str) -> Self {
        if pathname.contains("/pages/") {
            Self::Nested
        } else {
            Self::Root
        }
    }

    /// Relative prefix for site assets and fragments.
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Root => "./",
            Self::Nested => "../",
        }
    }

    /// Href for the logo link.
    pub fn logo_href(self) -> &'static str {
        match self {
            Self::Root => "#hero",
            Self::Nested => "../index.html",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// `(label, root href, nested href)`
const NAV_TABLE: [(&str, &str, &str); 3] = [
    ("About me", "#about", "../index.html#about"),
    ("Experience & Education", "pages/experience.html", "experience.html"),
    ("Skills & Certifications", "pages/details.html", "details.html"),
];

/// The fixed navigation entries, resolved for `base`.
pub fn nav_items(base: BasePath) -> [NavItem; 3] {
    NAV_TABLE.map(|(label, root, nested)| NavItem {
        label,
        href: match base {
            BasePath::Root => root,
            BasePath::Nested => nested,
        },
    })
}

/// `<li><a href="...">label</a></li>` for each item.
pub fn render_list(items: &[NavItem]) -> String {
    items
        .iter()
        .map(|item| format!(r#"<li><a href="{}">{}</a></li>"#, escape_html(item.href), escape_html(item.label)))
        .collect()
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}
