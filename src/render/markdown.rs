//! Markdown to HTML for description, purpose and sample prose.

use pulldown_cmark::{html, Options, Parser};

/// Render a Markdown fragment to HTML.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paragraph_and_inline_code() {
        assert_eq!(
            to_html("Returns `Window` objects."),
            "<p>Returns <code>Window</code> objects.</p>\n"
        );
    }

    #[test]
    fn lists_and_emphasis() {
        let out = to_html("* **id** first\n* ~~old~~ second");
        assert!(out.contains("<li><strong>id</strong> first</li>"));
        assert!(out.contains("<del>old</del>"));
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_html(""), "");
    }
}
