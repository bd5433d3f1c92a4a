//! `@tag` annotation matcher.
//!
//! A comment is split into tag occurrences. An occurrence is an `@` at the
//! start of the text or after whitespace, followed by a name
//! (`@package`, `@sampleBody`, ...). Its body runs up to the next
//! occurrence of any tag, so `user@example.com` or `"@type"` inside prose
//! or sample code never cut a field short.
//!
//! Argument grammars are applied to the body of each occurrence. A body
//! that does not fit its grammar is treated as if the tag were absent.

use crate::model::EndpointArgument;
use regex::Regex;
use std::sync::LazyLock;

// -- Regex patterns -----------------------------------------------------------

static RE_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s)@([A-Za-z]\w*)").unwrap());

/// `@package Windows`, `@endpoint /windows/{id}`
static RE_TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]+(\S+)").unwrap());

static RE_METHOD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]+(DELETE|GET|POST|PUT)\b").unwrap());

static RE_WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]+(\w+)").unwrap());

static RE_LINE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[ \t]+([^\n]+)").unwrap());

/// `@pathArg id The window identifier`
static RE_PATH_ARG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[ \t]+(\w+)(?:[ \t]+([^\n]*))?").unwrap());

/// HTTP method assumed when `@method` is absent or malformed.
pub const DEFAULT_METHOD: &str = "GET";

// -- Tag scanning -------------------------------------------------------------

/// One `@name` occurrence and the text it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    pub name: &'a str,
    pub body: &'a str,
}

/// All tag occurrences of a single comment, in source order.
#[derive(Debug)]
pub struct Annotations<'a> {
    tags: Vec<Tag<'a>>,
}

impl<'a> Annotations<'a> {
    pub fn parse(comment: &'a str) -> Self {
        // (name, offset of '@', offset after name)
        let spans: Vec<(&str, usize, usize)> = RE_TAG
            .captures_iter(comment)
            .filter_map(|caps| caps.get(1))
            .map(|name| (name.as_str(), name.start() - 1, name.end()))
            .collect();

        let tags = spans
            .iter()
            .enumerate()
            .map(|(i, &(name, _, body_start))| {
                let body_end = spans.get(i + 1).map_or(comment.len(), |next| next.1);
                Tag {
                    name,
                    body: &comment[body_start..body_end],
                }
            })
            .collect();

        Self { tags }
    }

    /// Every occurrence, in source order.
    pub fn tags(&self) -> impl Iterator<Item = &Tag<'a>> + '_ {
        self.tags.iter()
    }

    fn bodies<'s>(&'s self, name: &'s str) -> impl Iterator<Item = &'a str> + 's {
        self.tags
            .iter()
            .filter(move |tag| tag.name == name)
            .map(|tag| tag.body)
    }

    /// First occurrence of `name` whose body matches `re`; returns group 1.
    fn first_capture(&self, name: &str, re: &Regex) -> Option<&'a str> {
        self.bodies(name)
            .find_map(|body| re.captures(body).and_then(|caps| caps.get(1)))
            .map(|m| m.as_str())
    }

    /// First non-empty free-text body of `name`, trimmed.
    fn first_text(&self, name: &str) -> Option<&'a str> {
        self.bodies(name)
            .filter(|body| body.starts_with(char::is_whitespace))
            .map(str::trim)
            .find(|text| !text.is_empty())
    }

    // -- Fields ---------------------------------------------------------------

    pub fn package(&self) -> Option<&'a str> {
        self.first_capture("package", &RE_TOKEN)
    }

    pub fn endpoint(&self) -> Option<&'a str> {
        self.first_capture("endpoint", &RE_TOKEN)
    }

    /// The declared HTTP verb; `None` when untagged or not a known verb.
    pub fn method(&self) -> Option<&'a str> {
        self.first_capture("method", &RE_METHOD)
    }

    pub fn command(&self) -> Option<&'a str> {
        self.first_text("command")
    }

    pub fn broadcast(&self) -> Option<&'a str> {
        self.first_capture("broadcast", &RE_WORD)
    }

    pub fn description(&self) -> Option<&'a str> {
        self.first_text("description")
    }

    /// `@purpose` runs to the end of its line only.
    pub fn purpose(&self) -> Option<&'a str> {
        self.first_capture("purpose", &RE_LINE)
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Every well-formed `@pathArg`, in source order.
    pub fn path_args(&self) -> Vec<EndpointArgument> {
        self.bodies("pathArg")
            .filter_map(|body| RE_PATH_ARG.captures(body))
            .map(|caps| EndpointArgument {
                name: caps[1].to_string(),
                description: caps
                    .get(2)
                    .map(|m| m.as_str().trim().to_string())
                    .unwrap_or_default(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_bodies_at_next_tag() {
        let a = Annotations::parse("@package Windows\n@endpoint /windows\n");
        let tags: Vec<_> = a.tags().collect();
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].name, "package");
        assert_eq!(tags[0].body, " Windows\n");
        assert_eq!(tags[1].body, " /windows\n");
    }

    #[test]
    fn glued_at_sign_is_not_a_tag() {
        let a = Annotations::parse("@description Mail admin@example.com for access.\n@package P");
        assert_eq!(a.description(), Some("Mail admin@example.com for access."));
        assert_eq!(a.package(), Some("P"));
    }

    #[test]
    fn tag_names_match_whole_words() {
        let a = Annotations::parse("@packageName Foo");
        assert_eq!(a.package(), None);
    }

    #[test]
    fn token_fields() {
        let a = Annotations::parse("// @package Windows\n// @endpoint /windows/{id}/zoom");
        assert_eq!(a.package(), Some("Windows"));
        assert_eq!(a.endpoint(), Some("/windows/{id}/zoom"));
    }

    #[test]
    fn token_requires_argument_on_same_line() {
        let a = Annotations::parse("@package\nWindows");
        assert_eq!(a.package(), None);
    }

    #[test]
    fn method_known_verbs() {
        for verb in ["DELETE", "GET", "POST", "PUT"] {
            let text = format!("@method {}", verb);
            assert_eq!(Annotations::parse(&text).method(), Some(verb));
        }
    }

    #[test]
    fn method_unknown_verb_is_absent() {
        assert_eq!(Annotations::parse("@method PATCH").method(), None);
        assert_eq!(Annotations::parse("@method GETTER").method(), None);
        assert_eq!(Annotations::parse("@method get").method(), None);
    }

    #[test]
    fn method_first_well_formed_occurrence_wins() {
        let a = Annotations::parse("@method PATCH\n@method PUT\n@method POST");
        assert_eq!(a.method(), Some("PUT"));
    }

    #[test]
    fn command_is_free_text_trimmed() {
        let a = Annotations::parse("@command  set_zoom_factor  \n@description Set zoom.");
        assert_eq!(a.command(), Some("set_zoom_factor"));
    }

    #[test]
    fn empty_command_is_absent() {
        let a = Annotations::parse("@command   \n@description Set zoom.");
        assert_eq!(a.command(), None);
    }

    #[test]
    fn broadcast_is_one_word() {
        let a = Annotations::parse("@broadcast window_closed (fired on close)");
        assert_eq!(a.broadcast(), Some("window_closed"));
    }

    #[test]
    fn description_spans_lines() {
        let a = Annotations::parse("@description\n  Returns windows.\n  All of them.\n@purpose x");
        assert_eq!(a.description(), Some("Returns windows.\n  All of them."));
    }

    #[test]
    fn purpose_stops_at_line_end() {
        let a = Annotations::parse("@purpose List open windows\nmore prose");
        assert_eq!(a.purpose(), Some("List open windows"));
    }

    #[test]
    fn path_args_are_repeatable() {
        let a = Annotations::parse(
            "@pathArg id The window identifier\n@pathArg tab Tab index\n@pathArg !bad\n@pathArg bare",
        );
        assert_eq!(
            a.path_args(),
            vec![
                EndpointArgument {
                    name: "id".into(),
                    description: "The window identifier".into()
                },
                EndpointArgument {
                    name: "tab".into(),
                    description: "Tab index".into()
                },
                EndpointArgument {
                    name: "bare".into(),
                    description: String::new()
                },
            ]
        );
    }

    #[test]
    fn no_tags() {
        let a = Annotations::parse("just an ordinary comment");
        assert_eq!(a.tags().count(), 0);
        assert_eq!(a.package(), None);
    }
}
