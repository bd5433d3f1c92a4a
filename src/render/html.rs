//! HTML renderer: one page per package plus an index, sharing a navigation
//! list of every package.

use crate::catalog::Catalog;
use crate::model::*;
use crate::render::anchor::{broadcast_anchor, rest_anchor, rpc_anchor, PageFiles};
use crate::render::markdown;
use crate::render::{Page, Renderer};
use anyhow::Result;

pub struct HtmlRenderer {
    /// Link `prism.css` and `prism.js`; only set when they are installed.
    pub syntax_highlighting: bool,
}

/// Shared by every page of one render.
struct Site<'a> {
    catalog: &'a Catalog,
    files: PageFiles,
    syntax_highlighting: bool,
}

impl Renderer for HtmlRenderer {
    fn render(&self, catalog: &Catalog) -> Result<Vec<Page>> {
        let site = Site {
            catalog,
            files: PageFiles::new(catalog.package_names()),
            syntax_highlighting: self.syntax_highlighting,
        };
        let mut pages = vec![Page::new("index.html", render_index(&site))];
        for package in catalog.packages() {
            pages.push(Page::new(
                site.files.get(&package.name),
                render_package(&site, package),
            ));
        }
        Ok(pages)
    }

    fn needs_assets(&self) -> bool {
        true
    }
}

fn render_index(site: &Site) -> String {
    let catalog = site.catalog;
    let mut body = String::new();
    body.push_str("<h1>API Documentation</h1>\n");

    if catalog.is_empty() {
        body.push_str("<p>No documented packages.</p>\n");
    } else {
        body.push_str("<table class=\"packages\">\n");
        body.push_str("<tr><th>Package</th><th>Endpoints</th><th>Commands</th><th>Broadcasts</th></tr>\n");
        for package in catalog.package_names().iter().filter_map(|name| catalog.package(name)) {
            body.push_str(&format!(
                "<tr><td><a href=\"{}\">{}</a></td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                html_escape(site.files.get(&package.name)),
                html_escape(&package.name),
                package.rest_docs.len(),
                package.rpc_docs.len(),
                package.broadcast_docs.len(),
            ));
        }
        body.push_str("</table>\n");
    }

    layout(site, "API Documentation", None, &body)
}

fn render_package(site: &Site, package: &PackageDoc) -> String {
    let mut body = String::new();
    body.push_str(&format!("<h1>{}</h1>\n", html_escape(&package.name)));

    // Index
    body.push_str("<ul class=\"index\">\n");
    for doc in &package.rest_docs {
        body.push_str(&format!(
            "  <li><a href=\"#{}\">{} {}</a></li>\n",
            rest_anchor(doc),
            html_escape(&doc.method),
            html_escape(&doc.endpoint)
        ));
    }
    for doc in &package.rpc_docs {
        body.push_str(&format!(
            "  <li><a href=\"#{}\">{}</a></li>\n",
            rpc_anchor(doc),
            html_escape(&doc.command)
        ));
    }
    for doc in &package.broadcast_docs {
        body.push_str(&format!(
            "  <li><a href=\"#{}\">{}</a></li>\n",
            broadcast_anchor(doc),
            html_escape(&doc.name)
        ));
    }
    body.push_str("</ul>\n");

    if !package.rest_docs.is_empty() {
        body.push_str("<h2>REST Endpoints</h2>\n");
        for doc in &package.rest_docs {
            body.push_str(&render_rest(doc));
        }
    }

    if !package.rpc_docs.is_empty() {
        body.push_str("<h2>Commands</h2>\n");
        for doc in &package.rpc_docs {
            body.push_str(&render_rpc(doc));
        }
    }

    if !package.broadcast_docs.is_empty() {
        body.push_str("<h2>Broadcasts</h2>\n");
        for doc in &package.broadcast_docs {
            body.push_str(&render_broadcast(doc));
        }
    }

    layout(site, &package.name, Some(&package.name), &body)
}

fn render_rest(doc: &RestDoc) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<section class=\"endpoint\" id=\"{}\">\n",
        rest_anchor(doc)
    ));
    out.push_str(&format!(
        "<h3><span class=\"method method-{}\">{}</span> <code>{}</code></h3>\n",
        doc.method.to_lowercase(),
        html_escape(&doc.method),
        html_escape(&doc.endpoint)
    ));

    if !doc.purpose.is_empty() {
        out.push_str(&format!(
            "<div class=\"purpose\">{}</div>\n",
            markdown::to_html(&doc.purpose)
        ));
    }

    if !doc.description.is_empty() {
        out.push_str(&markdown::to_html(&doc.description));
    }

    if !doc.path_args.is_empty() {
        out.push_str("<h4>Path Arguments</h4>\n<table class=\"arguments\">\n");
        out.push_str("<tr><th>Name</th><th>Description</th></tr>\n");
        for arg in &doc.path_args {
            out.push_str(&format!(
                "<tr><td><code>{}</code></td><td>{}</td></tr>\n",
                html_escape(&arg.name),
                html_escape(&arg.description)
            ));
        }
        out.push_str("</table>\n");
    }

    out.push_str(&render_samples(&doc.samples));
    out.push_str("</section>\n");
    out
}

fn render_rpc(doc: &RpcDoc) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<section class=\"command\" id=\"{}\">\n",
        rpc_anchor(doc)
    ));
    out.push_str(&format!("<h3><code>{}</code></h3>\n", html_escape(&doc.command)));
    if !doc.description.is_empty() {
        out.push_str(&markdown::to_html(&doc.description));
    }
    out.push_str(&render_samples(&doc.samples));
    out.push_str("</section>\n");
    out
}

fn render_broadcast(doc: &BroadcastDoc) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "<section class=\"broadcast\" id=\"{}\">\n",
        broadcast_anchor(doc)
    ));
    out.push_str(&format!("<h3><code>{}</code></h3>\n", html_escape(&doc.name)));
    if !doc.description.is_empty() {
        out.push_str(&markdown::to_html(&doc.description));
    }
    out.push_str(&render_samples(&doc.samples));
    out.push_str("</section>\n");
    out
}

fn render_samples(samples: &[Sample]) -> String {
    let mut out = String::new();
    for sample in samples {
        let heading = match sample.kind {
            SampleKind::Body => "Sample Body",
            SampleKind::Response => "Sample Response",
        };
        out.push_str(&format!("<h4>{}</h4>\n", heading));
        if !sample.leading_text.is_empty() {
            out.push_str(&markdown::to_html(&sample.leading_text));
        }
        let class = if sample.language.is_empty() {
            String::new()
        } else {
            format!(" class=\"language-{}\"", html_escape(&sample.language))
        };
        out.push_str(&format!(
            "<pre><code{}>{}</code></pre>\n",
            class,
            html_escape(&sample.code)
        ));
    }
    out
}

/// Wrap page content with the document head and the package navigation.
fn layout(site: &Site, title: &str, current: Option<&str>, body: &str) -> String {
    let mut out = String::new();

    out.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    out.push_str("<meta charset=\"utf-8\">\n");
    out.push_str(&format!("<title>{}</title>\n", html_escape(title)));
    if site.syntax_highlighting {
        out.push_str("<link rel=\"stylesheet\" href=\"prism.css\">\n");
    }
    out.push_str("<link rel=\"stylesheet\" href=\"style.css\">\n");
    out.push_str("</head>\n<body>\n");

    out.push_str("<nav>\n<a class=\"home\" href=\"index.html\">Index</a>\n<ul>\n");
    for name in site.catalog.package_names() {
        let class = if current == Some(name.as_str()) {
            " class=\"current\""
        } else {
            ""
        };
        out.push_str(&format!(
            "  <li{}><a href=\"{}\">{}</a></li>\n",
            class,
            html_escape(site.files.get(name)),
            html_escape(name)
        ));
    }
    out.push_str("</ul>\n</nav>\n");

    out.push_str("<main>\n");
    out.push_str(body);
    out.push_str("</main>\n");
    if site.syntax_highlighting {
        out.push_str("<script src=\"prism.js\"></script>\n");
    }
    out.push_str("</body>\n</html>\n");
    out
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CatalogBuilder;

    fn render(comments: &[&str], syntax_highlighting: bool) -> Vec<Page> {
        let mut builder = CatalogBuilder::new();
        for comment in comments {
            builder.add_comment(comment);
        }
        HtmlRenderer { syntax_highlighting }
            .render(&builder.finish())
            .unwrap()
    }

    fn pages(comments: &[&str]) -> Vec<Page> {
        render(comments, false)
    }

    fn page<'a>(pages: &'a [Page], path: &str) -> &'a str {
        &pages
            .iter()
            .find(|p| p.path == path)
            .unwrap_or_else(|| panic!("no page {path}"))
            .contents
    }

    #[test]
    fn index_and_one_page_per_package() {
        let pages = pages(&[
            "@package Windows\n@endpoint /windows",
            "@package Tabs\n@command close_tab",
            "@package Windows\n@broadcast window_closed",
        ]);
        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["index.html", "Tabs.html", "Windows.html"]);

        let index = page(&pages, "index.html");
        assert!(index.contains("<a href=\"Tabs.html\">Tabs</a>"));
        assert!(index.contains("<a href=\"Windows.html\">Windows</a>"));
    }

    #[test]
    fn every_page_links_every_package() {
        let pages = pages(&["@package A\n@command a", "@package B\n@command b"]);
        for page in &pages {
            assert!(page.contents.contains("<a href=\"A.html\">A</a>"));
            assert!(page.contents.contains("<a href=\"B.html\">B</a>"));
        }
        assert!(page(&pages, "B.html").contains("<li class=\"current\"><a href=\"B.html\">B</a>"));
    }

    #[test]
    fn rest_section() {
        let pages = pages(&["@package Windows\n\
             @endpoint /windows/{id}\n\
             @method DELETE\n\
             @purpose Close a window\n\
             @pathArg id The window identifier\n\
             @description Closes the window **immediately**.\n\
             @sampleResponse\nOn success:\n```json\n{\"closed\": true}\n```"]);
        let html = page(&pages, "Windows.html");
        assert!(html.contains("<section class=\"endpoint\" id=\"windows_id_delete\">"));
        assert!(html.contains("<span class=\"method method-delete\">DELETE</span> <code>/windows/{id}</code>"));
        assert!(html.contains("<a href=\"#windows_id_delete\">DELETE /windows/{id}</a>"));
        assert!(html.contains("Close a window"));
        assert!(html.contains("<td><code>id</code></td><td>The window identifier</td>"));
        assert!(html.contains("<strong>immediately</strong>"));
        assert!(html.contains("<h4>Sample Response</h4>\n<p>On success:</p>"));
        assert!(html.contains(
            "<pre><code class=\"language-json\">{&quot;closed&quot;: true}</code></pre>"
        ));
    }

    #[test]
    fn rpc_and_broadcast_sections() {
        let pages = pages(&[
            "@package Windows\n@command set_zoom_factor\n@description Set zoom.",
            "@package Windows\n@broadcast window_closed",
        ]);
        let html = page(&pages, "Windows.html");
        assert!(html.contains("<h2>Commands</h2>"));
        assert!(html.contains("id=\"command_set_zoom_factor\""));
        assert!(html.contains("<p>Set zoom.</p>"));
        assert!(html.contains("<h2>Broadcasts</h2>"));
        assert!(html.contains("id=\"broadcast_window_closed\""));
        assert!(!html.contains("<h2>REST Endpoints</h2>"));
    }

    #[test]
    fn sample_code_is_escaped() {
        let pages = pages(&["@package P\n@command x\n@sampleBody\n```\n<a & b>\n```"]);
        let html = page(&pages, "P.html");
        assert!(html.contains("<pre><code>&lt;a &amp; b&gt;</code></pre>"));
    }

    #[test]
    fn empty_catalog_index() {
        let pages = pages(&[]);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contents.contains("No documented packages."));
    }

    #[test]
    fn colliding_package_names_get_distinct_pages() {
        let pages = pages(&["@package net/http\n@command get", "@package net_http\n@command put"]);
        let paths: Vec<_> = pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["index.html", "net_http.html", "net_http-2.html"]);

        assert!(page(&pages, "net_http.html").contains("id=\"command_get\""));
        assert!(page(&pages, "net_http-2.html").contains("id=\"command_put\""));
        let index = page(&pages, "index.html");
        assert!(index.contains("<a href=\"net_http.html\">net/http</a>"));
        assert!(index.contains("<a href=\"net_http-2.html\">net_http</a>"));
        assert!(page(&pages, "net_http-2.html")
            .contains("<li class=\"current\"><a href=\"net_http-2.html\">net_http</a>"));
    }

    #[test]
    fn prism_linked_only_when_installed() {
        let plain = pages(&["@package P\n@command x"]);
        for page in &plain {
            assert!(!page.contents.contains("prism"));
            assert!(page.contents.contains("href=\"style.css\""));
        }

        let highlighted = render(&["@package P\n@command x"], true);
        for page in &highlighted {
            assert!(page.contents.contains("<link rel=\"stylesheet\" href=\"prism.css\">"));
            assert!(page.contents.contains("<script src=\"prism.js\"></script>"));
        }
    }
}
