//! Table of contents rendering

use crate::content::TocEntry;
use crate::helpers::html_escape;

/// Visual tier of a table-of-contents entry
///
/// Only two tiers exist: entries of the root list, and everything below
/// them. Descendants never advance past the nested tier, however deep the
/// tree goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TocLevel {
    Top,
    Nested,
}

impl TocLevel {
    fn as_str(self) -> &'static str {
        match self {
            TocLevel::Top => "two",
            TocLevel::Nested => "three",
        }
    }
}

/// Render a table of contents as a nested HTML list
pub fn render_toc(entries: &[TocEntry]) -> String {
    let mut html = String::from(r#"<ul class="toc-list">"#);
    for entry in entries {
        render_entry(entry, TocLevel::Top, &mut html);
    }
    html.push_str("</ul>");
    html
}

fn render_entry(entry: &TocEntry, level: TocLevel, out: &mut String) {
    out.push_str(r#"<li class="toc-item">"#);
    out.push_str(&format!(
        r#"<a href="{}" data-level="{}">"#,
        entry.url,
        level.as_str()
    ));
    if level == TocLevel::Nested {
        out.push_str(r#"<span class="toc-marker"></span>"#);
    }
    out.push_str(&format!(
        r#"<span class="toc-text">{}</span></a>"#,
        html_escape(&entry.title)
    ));

    if !entry.items.is_empty() {
        out.push_str("<ul>");
        for child in &entry.items {
            render_entry(child, TocLevel::Nested, out);
        }
        out.push_str("</ul>");
    }

    out.push_str("</li>");
}
