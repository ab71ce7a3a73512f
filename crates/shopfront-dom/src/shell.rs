//! Document shell wrapping rendered page regions.

use crate::fragment::html_escape;

/// Head content for the shell.
#[derive(Debug, Clone, Default)]
pub struct HeadContent {
    /// Page title.
    pub title: Option<String>,
    /// Meta tags.
    pub meta: Vec<(String, String)>,
    /// Stylesheet hrefs.
    pub stylesheets: Vec<String>,
}

impl HeadContent {
    /// Create new head content with a title.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Add a meta tag.
    pub fn with_meta(mut self, name: &str, content: &str) -> Self {
        self.meta.push((name.to_string(), content.to_string()));
        self
    }

    /// Add a stylesheet link.
    pub fn with_stylesheet(mut self, href: &str) -> Self {
        self.stylesheets.push(href.to_string());
        self
    }

    /// Render head content to HTML.
    pub fn render(&self) -> String {
        let mut html = String::new();

        if let Some(title) = &self.title {
            html.push_str(&format!("<title>{}</title>\n", html_escape(title)));
        }

        for (name, content) in &self.meta {
            html.push_str(&format!(
                r#"<meta name="{}" content="{}">"#,
                html_escape(name),
                html_escape(content)
            ));
            html.push('\n');
        }

        for href in &self.stylesheets {
            html.push_str(&format!(
                r#"<link rel="stylesheet" href="{}">"#,
                html_escape(href)
            ));
            html.push('\n');
        }

        html
    }
}

/// Full-document template around a page body.
#[derive(Debug, Clone)]
pub struct Shell {
    pub head: HeadContent,
    /// Classes of the `<body>` element.
    pub body_class: Option<String>,
}

impl Shell {
    pub fn new(head: HeadContent) -> Self {
        Self {
            head,
            body_class: None,
        }
    }

    pub fn with_body_class(mut self, class: impl Into<String>) -> Self {
        self.body_class = Some(class.into());
        self
    }

    /// Render a complete document around `body`.
    pub fn render(&self, body: &str) -> String {
        let mut html = String::from("<!DOCTYPE html>\n<html>\n<head>\n");
        html.push_str("<meta charset=\"utf-8\">\n");
        html.push_str(&self.head.render());
        html.push_str("</head>\n");
        match &self.body_class {
            Some(class) => html.push_str(&format!("<body class=\"{}\">\n", html_escape(class))),
            None => html.push_str("<body>\n"),
        }
        html.push_str(body);
        html.push_str("\n</body>\n</html>\n");
        html
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_document() {
        let shell = Shell::new(
            HeadContent::new("Checkout")
                .with_meta("viewport", "width=device-width")
                .with_stylesheet("styles/pages/checkout/checkout.css"),
        );

        let html = shell.render("<main>hi</main>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Checkout</title>"));
        assert!(html.contains(r#"<link rel="stylesheet" href="styles/pages/checkout/checkout.css">"#));
        assert!(html.contains("<body>\n<main>hi</main>"));
        assert!(html.trim_end().ends_with("</html>"));
    }

    #[test]
    fn test_body_class() {
        let html = Shell::new(HeadContent::default())
            .with_body_class("checkout")
            .render("");
        assert!(html.contains(r#"<body class="checkout">"#));
    }
}
