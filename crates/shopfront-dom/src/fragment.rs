//! HTML fragments with addressable nodes.

/// One piece of a fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Part {
    /// Markup that cannot be targeted on its own.
    Markup(String),
    /// Markup reachable through a selector, e.g. `.js-cart-item-container-p1`.
    Node { selector: String, html: String },
}

impl Part {
    pub fn html(&self) -> &str {
        match self {
            Part::Markup(html) => html,
            Part::Node { html, .. } => html,
        }
    }

    pub fn selector(&self) -> Option<&str> {
        match self {
            Part::Markup(_) => None,
            Part::Node { selector, .. } => Some(selector),
        }
    }
}

/// Rendered HTML for one container.
///
/// Nodes keep their selector so a surface can later remove or update them
/// without re-rendering the whole container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment {
    parts: Vec<Part>,
}

impl Fragment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fragment of a single markup part.
    pub fn markup(html: impl Into<String>) -> Self {
        let mut fragment = Self::new();
        fragment.push_markup(html);
        fragment
    }

    pub fn push_markup(&mut self, html: impl Into<String>) -> &mut Self {
        self.parts.push(Part::Markup(html.into()));
        self
    }

    pub fn push_node(&mut self, selector: impl Into<String>, html: impl Into<String>) -> &mut Self {
        self.parts.push(Part::Node {
            selector: selector.into(),
            html: html.into(),
        });
        self
    }

    pub fn into_parts(self) -> Vec<Part> {
        self.parts
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Selectors of all nodes, in order.
    pub fn node_selectors(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().filter_map(Part::selector)
    }

    pub fn to_html(&self) -> String {
        self.parts.iter().map(Part::html).collect()
    }
}

impl From<String> for Fragment {
    fn from(html: String) -> Self {
        Self::markup(html)
    }
}

impl From<&str> for Fragment {
    fn from(html: &str) -> Self {
        Self::markup(html)
    }
}

/// Escape text for use in HTML content and attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_to_html_joins_parts_in_order() {
        let mut fragment = Fragment::new();
        fragment
            .push_markup("<h2>Review</h2>")
            .push_node(".item-a", "<div>a</div>")
            .push_node(".item-b", "<div>b</div>");

        assert_eq!(fragment.to_html(), "<h2>Review</h2><div>a</div><div>b</div>");
        assert_eq!(
            fragment.node_selectors().collect::<Vec<_>>(),
            vec![".item-a", ".item-b"]
        );
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(
            html_escape(r#"<a href="x">Tom & Jerry's</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#39;s&lt;/a&gt;"
        );
    }
}
