//! Ansible inline markup.
//!
//! Ansible documentation strings embed formatting as function-like markers,
//! for example `C(state=present)` for code or `L(docs,https://...)` for links.
//! [`parse`] splits a string into [`Part`]s in a single left-to-right scan;
//! [`to_rst`] and [`to_md`] render those parts.
//!
//! A marker is only recognized at a word boundary and only when it is closed.
//! Anything else, including plain text, is passed through unchanged.

/// One piece of a parsed documentation string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part<'a> {
    Text(&'a str),
    /// `C(text)`
    Code(&'a str),
    /// `I(text)`
    Italic(&'a str),
    /// `B(text)`
    Bold(&'a str),
    /// `U(url)`
    Url(&'a str),
    /// `L(text,url)`
    Link { text: &'a str, url: &'a str },
    /// `M(fqcn)`
    Module(&'a str),
    /// `O(name)` or `O(name=value)`
    OptionName(&'a str),
    /// `V(value)`
    OptionValue(&'a str),
    /// `E(name)`
    EnvVariable(&'a str),
    /// `RV(name)`
    ReturnValue(&'a str),
    /// `P(fqcn#type)`, keeping only the plugin name
    Plugin(&'a str),
    /// `HORIZONTALLINE`
    HorizontalLine,
}

const HORIZONTAL_LINE: &str = "HORIZONTALLINE";

// Longer names first so `RV(` wins over a shorter prefix.
const MARKERS: [&str; 11] = ["RV", "C", "I", "B", "U", "L", "M", "O", "V", "E", "P"];

/// Split `text` into markup parts.
pub fn parse(text: &str) -> Vec<Part<'_>> {
    let mut parts = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(ch) = text[pos..].chars().next() {
        if at_word_boundary(text, pos) {
            if let Some((part, end)) = match_marker(text, pos) {
                if text_start < pos {
                    parts.push(Part::Text(&text[text_start..pos]));
                }
                parts.push(part);
                pos = end;
                text_start = end;
                continue;
            }
        }
        pos += ch.len_utf8();
    }

    if text_start < text.len() {
        parts.push(Part::Text(&text[text_start..]));
    }
    parts
}

/// Convert Ansible markup in `text` to reStructuredText.
pub fn to_rst(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for part in parse(text) {
        match part {
            Part::Text(s) => out.push_str(s),
            Part::Italic(s) => wrap(&mut out, "*", s),
            Part::Bold(s) => wrap(&mut out, "**", s),
            Part::Url(url) => out.push_str(&format!("`{} <{}>`__", url, url)),
            Part::Link { text, url } => out.push_str(&format!("`{} <{}>`__", text, url)),
            Part::HorizontalLine => out.push_str("\n\n------------\n\n"),
            other => {
                if let Some(s) = literal_text(&other) {
                    wrap(&mut out, "``", s);
                }
            }
        }
    }
    out
}

/// Convert Ansible markup in `text` to Markdown.
pub fn to_md(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for part in parse(text) {
        match part {
            Part::Text(s) => out.push_str(s),
            Part::Italic(s) => wrap(&mut out, "*", s),
            Part::Bold(s) => wrap(&mut out, "**", s),
            Part::Url(url) => out.push_str(&format!("[{}]({})", url, url)),
            Part::Link { text, url } => out.push_str(&format!("[{}]({})", text, url)),
            Part::HorizontalLine => out.push_str("\n\n---\n\n"),
            other => {
                if let Some(s) = literal_text(&other) {
                    md_code(&mut out, s);
                }
            }
        }
    }
    out
}

/// Text of the parts that render as inline literals.
fn literal_text<'a>(part: &Part<'a>) -> Option<&'a str> {
    match *part {
        Part::Code(s)
        | Part::Module(s)
        | Part::OptionName(s)
        | Part::OptionValue(s)
        | Part::EnvVariable(s)
        | Part::ReturnValue(s)
        | Part::Plugin(s) => Some(s),
        _ => None,
    }
}

fn wrap(out: &mut String, delimiter: &str, s: &str) {
    if s.is_empty() {
        return;
    }
    out.push_str(delimiter);
    out.push_str(s);
    out.push_str(delimiter);
}

/// A code span containing backticks needs a longer fence and padding.
fn md_code(out: &mut String, s: &str) {
    if s.contains('`') {
        out.push_str("`` ");
        out.push_str(s);
        out.push_str(" ``");
    } else {
        wrap(out, "`", s);
    }
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}

fn at_word_boundary(text: &str, pos: usize) -> bool {
    text[..pos].chars().next_back().map_or(true, |ch| !is_word_char(ch))
}

/// Try to match a closed marker starting at `pos`, returning the part and the
/// byte offset just past it.
fn match_marker(text: &str, pos: usize) -> Option<(Part<'_>, usize)> {
    let rest = &text[pos..];

    if let Some(after) = rest.strip_prefix(HORIZONTAL_LINE) {
        if after.chars().next().map_or(true, |ch| !is_word_char(ch)) {
            return Some((Part::HorizontalLine, pos + HORIZONTAL_LINE.len()));
        }
        return None;
    }

    let name = MARKERS
        .into_iter()
        .find(|name| rest.strip_prefix(*name).is_some_and(|r| r.starts_with('(')))?;
    let body_start = pos + name.len() + 1;
    let body_len = text[body_start..].find(')')?;
    let body = &text[body_start..body_start + body_len];
    let end = body_start + body_len + 1;

    let part = match name {
        "C" => Part::Code(body),
        "I" => Part::Italic(body),
        "B" => Part::Bold(body),
        "U" => Part::Url(body.trim()),
        "L" => {
            let (text, url) = body.split_once(',')?;
            Part::Link {
                text: text.trim(),
                url: url.trim(),
            }
        }
        "M" => Part::Module(body),
        "O" => Part::OptionName(body),
        "V" => Part::OptionValue(body),
        "E" => Part::EnvVariable(body),
        "RV" => Part::ReturnValue(body),
        "P" => Part::Plugin(body.split_once('#').map_or(body, |(plugin, _)| plugin)),
        _ => return None,
    };
    Some((part, end))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mixed_markup() {
        let parts = parse("Set C(state=present) to I(install), see L(docs,https://x.io).");
        assert_eq!(
            parts,
            vec![
                Part::Text("Set "),
                Part::Code("state=present"),
                Part::Text(" to "),
                Part::Italic("install"),
                Part::Text(", see "),
                Part::Link {
                    text: "docs",
                    url: "https://x.io"
                },
                Part::Text("."),
            ]
        );
    }

    #[test]
    fn test_parse_requires_word_boundary() {
        assert_eq!(parse("ABC(x)"), vec![Part::Text("ABC(x)")]);
        assert_eq!(parse("call_C(x)"), vec![Part::Text("call_C(x)")]);
        assert_eq!(parse("(C(x))"), vec![Part::Text("("), Part::Code("x"), Part::Text(")")]);
    }

    #[test]
    fn test_unclosed_markers_pass_through() {
        assert_eq!(to_rst("C(open and I(never"), "C(open and I(never");
        assert_eq!(to_md("L(no comma)"), "L(no comma)");
        assert_eq!(to_md("price (C) 2024"), "price (C) 2024");
    }

    #[test]
    fn test_return_value_before_single_letter() {
        assert_eq!(parse("RV(changed)"), vec![Part::ReturnValue("changed")]);
    }

    #[test]
    fn test_plugin_drops_type() {
        assert_eq!(to_md("P(ansible.builtin.file#lookup)"), "`ansible.builtin.file`");
    }

    #[test]
    fn test_to_rst_spans() {
        assert_eq!(to_rst("Use C(foo)."), "Use ``foo``.");
        assert_eq!(to_rst("B(bold) and I(it)"), "**bold** and *it*");
        assert_eq!(to_rst("U(https://a.b)"), "`https://a.b <https://a.b>`__");
        assert_eq!(to_rst("O(mode=0644) V(yes) E(HOME) M(a.b.c)"), "``mode=0644`` ``yes`` ``HOME`` ``a.b.c``");
        assert_eq!(to_rst("a HORIZONTALLINE b"), "a \n\n------------\n\n b");
    }

    #[test]
    fn test_to_md_spans() {
        assert_eq!(to_md("Use C(foo)."), "Use `foo`.");
        assert_eq!(to_md("B(bold) and I(it)"), "**bold** and *it*");
        assert_eq!(to_md("L(Ansible, https://docs.ansible.com)"), "[Ansible](https://docs.ansible.com)");
        assert_eq!(to_md("C(a`b)"), "`` a`b ``");
    }

    #[test]
    fn test_empty_code_renders_nothing() {
        assert_eq!(to_rst("x C() y"), "x  y");
    }

    #[test]
    fn test_non_ascii_text() {
        assert_eq!(to_md("Größe: C(ß) – fertig"), "Größe: `ß` – fertig");
    }

    #[test]
    fn test_idempotent_without_markers() {
        for s in ["", "plain text", "a (parenthesized) note", "tabs\tand\nnewlines", "**already** `code`"] {
            assert_eq!(to_rst(&to_rst(s)), to_rst(s));
            assert_eq!(to_md(&to_md(s)), to_md(s));
            assert_eq!(to_rst(s), s);
        }
    }
}
