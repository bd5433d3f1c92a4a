//! Source scanning: find input files and pull comment text out of them.
//!
//! Understands C-family comment syntax: `//` line comments and `/* */`
//! block comments. String, raw-string and character literals are skipped
//! so a `//` inside `"http://..."` is not mistaken for a comment.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

/// File extensions recognized as source files.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "go", "rs", "c", "h", "cc", "cpp", "hpp", "java", "js", "ts", "swift", "kt", "cs",
];

/// Expand file, directory and glob arguments into a list of real file paths.
/// Directories are scanned (non-recursively) for supported file types.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        let path = Path::new(pattern);
        if path.is_file() {
            files.push(path.to_path_buf());
            continue;
        }
        if path.is_dir() {
            let entries = fs::read_dir(path)
                .with_context(|| format!("failed to read directory: {}", path.display()))?;
            for entry in entries {
                let entry = entry
                    .with_context(|| format!("failed to read directory: {}", path.display()))?;
                let p = entry.path();
                if p.is_file() && is_supported(&p) {
                    files.push(p);
                }
            }
            continue;
        }
        let matches: Vec<_> = glob::glob(pattern)
            .with_context(|| format!("invalid glob pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matches.is_empty() {
            warn!("no files matched: {}", pattern);
        }
        files.extend(matches);
    }
    // Sort for deterministic output
    files.sort();
    files.dedup();
    Ok(files)
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext))
}

/// Run of `//` comments on consecutive lines.
#[derive(Default)]
struct LineGroup<'a> {
    lines: Vec<&'a str>,
    last_line: usize,
}

impl<'a> LineGroup<'a> {
    fn continues_at(&self, line: usize) -> bool {
        !self.lines.is_empty() && self.last_line + 1 == line
    }

    fn flush(&mut self, out: &mut Vec<String>) {
        if !self.lines.is_empty() {
            out.push(self.lines.join("\n"));
            self.lines.clear();
        }
    }
}

/// Extract comment text from source, in source order.
///
/// `//` comments that each sit alone on consecutive lines are joined into
/// one comment, one line per source line. Comments trailing code are kept
/// on their own. Markers are removed: `//` (and a doc-comment `/` or `!`)
/// plus one following space, `/*` and `*/`, and the ` * ` prefix of
/// Javadoc-style block comments.
pub fn comments(source: &str) -> Vec<String> {
    let b = source.as_bytes();
    let mut out = Vec::new();
    let mut group = LineGroup::default();
    let mut line = 0;
    // Whether anything but whitespace precedes `i` on the current line.
    let mut code_on_line = false;
    let mut i = 0;

    while i < b.len() {
        match b[i] {
            b'\n' => {
                line += 1;
                code_on_line = false;
                i += 1;
            }
            b' ' | b'\t' | b'\r' => i += 1,
            b'/' if b.get(i + 1) == Some(&b'/') => {
                let end = find_from(b, i, b"\n").unwrap_or(b.len());
                let text = strip_line_marker(&source[i + 2..end]);
                if code_on_line {
                    group.flush(&mut out);
                    out.push(text.to_string());
                } else {
                    if !group.continues_at(line) {
                        group.flush(&mut out);
                    }
                    group.lines.push(text);
                    group.last_line = line;
                }
                i = end;
            }
            b'/' if b.get(i + 1) == Some(&b'*') => {
                group.flush(&mut out);
                let (text, end) = match find_from(b, i + 2, b"*/") {
                    Some(close) => (&source[i + 2..close], close + 2),
                    // Unterminated block comment runs to end of file
                    None => (&source[i + 2..], b.len()),
                };
                out.push(strip_block_decoration(text));
                line += text.matches('\n').count();
                code_on_line = true;
                i = end;
            }
            b'"' => {
                i = skip_string(b, i);
                code_on_line = true;
            }
            b'`' => {
                let end = find_from(b, i + 1, b"`").map_or(b.len(), |close| close + 1);
                line += source[i..end].matches('\n').count();
                i = end;
                code_on_line = true;
            }
            b'\'' => {
                i = skip_char_literal(source, i);
                code_on_line = true;
            }
            _ => {
                i += 1;
                code_on_line = true;
            }
        }
    }

    group.flush(&mut out);
    out
}

/// Position of `needle` at or after `from`.
fn find_from(haystack: &[u8], from: usize, needle: &[u8]) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|pos| from + pos)
}

/// Index just past a `"..."` literal starting at `start`. An unterminated
/// literal ends at the line break.
fn skip_string(b: &[u8], start: usize) -> usize {
    let mut j = start + 1;
    while j < b.len() {
        match b[j] {
            b'\\' => j += 2,
            b'"' => return j + 1,
            b'\n' => return j,
            _ => j += 1,
        }
    }
    b.len()
}

/// Index just past a character literal (`'x'`, `'\n'`, `'\u{1F600}'`)
/// starting at `start`. Anything else (a Rust lifetime, an apostrophe) only
/// consumes the quote.
fn skip_char_literal(source: &str, start: usize) -> usize {
    let rest = &source[start + 1..];
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, '\\')) => {
            // Escapes are short; don't run across lines looking for the close.
            for (offset, c) in chars.take(10) {
                match c {
                    '\'' => return start + 1 + offset + 1,
                    '\n' => break,
                    _ => {}
                }
            }
            start + 1
        }
        Some((_, '\n')) | None => start + 1,
        Some((_, c)) => {
            let close = c.len_utf8();
            if rest[close..].starts_with('\'') {
                start + 1 + close + 1
            } else {
                start + 1
            }
        }
    }
}

/// Strip the remains of a `//` marker: doc-comment `/` or `!`, then one space.
fn strip_line_marker(text: &str) -> &str {
    let text = text
        .strip_prefix('/')
        .or_else(|| text.strip_prefix('!'))
        .unwrap_or(text);
    text.strip_prefix(' ').unwrap_or(text)
}

/// Remove Javadoc-style decoration from a block comment body: the extra
/// `*` (or `!`) after `/*`, and a leading ` * ` on every continuation line.
/// Continuation lines are only stripped when every non-blank one starts
/// with `*`, so an undecorated comment keeps its indentation and list items.
fn strip_block_decoration(text: &str) -> String {
    let mut lines = text.split('\n');
    let first = lines.next().unwrap_or_default();
    let first = match first.strip_prefix(|c: char| c == '*' || c == '!') {
        Some(rest) => rest.strip_prefix(' ').unwrap_or(rest),
        None => first,
    };

    let rest: Vec<&str> = lines.collect();
    let decorated = rest
        .iter()
        .filter(|line| !line.trim().is_empty())
        .all(|line| line.trim_start().starts_with('*'));

    let mut out = first.to_string();
    for line in rest {
        out.push('\n');
        match line.trim_start().strip_prefix('*') {
            Some(body) if decorated => out.push_str(body.strip_prefix(' ').unwrap_or(body)),
            _ => out.push_str(line),
        }
    }
    out
}
