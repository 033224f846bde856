/*
# SubRip Inline Markup

 SubRip cue text mixes two tag syntaxes:
 - `{\...}` override blocks. All of them are removed; `{\an1}`..`{\an9}` place the cue
   on a numeric-keypad grid (1 = bottom left, 9 = top right).
 - HTML-like emphasis: `<b>`, `<i>`, `<u>` become style spans, `<font ...>` and other
   alphabetic tags are dropped, anything else shaped like `<...` stays literal.

 Both are parsed leniently, one tag at a time: a malformed tag is kept as text and
 never disturbs well-formed neighbours.
*/

use super::types::{Anchor, Cue, CueText, LineType, StyleSpan, TextStyle};
use once_cell::sync::Lazy;
use regex::Regex;

static OVERRIDE_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"\{\\.*?\}").unwrap());
static ALIGNMENT_TAG_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\{\\an([1-9])\}$").unwrap());

const START_FRACTION: f32 = 0.08;
const MIDDLE_FRACTION: f32 = 0.5;
const END_FRACTION: f32 = 0.92;

/// Fractional line/position value used for an anchor chosen by `{\anN}`.
pub fn fractional_position_for_anchor(anchor: Anchor) -> f32 {
    match anchor {
        Anchor::Start => START_FRACTION,
        Anchor::Middle => MIDDLE_FRACTION,
        Anchor::End => END_FRACTION,
    }
}

/// Placement selected by an alignment directive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    pub line_anchor: Anchor,
    pub position_anchor: Anchor,
}

impl Alignment {
    /// Map a keypad digit 1..=9 to anchors.
    pub fn from_keypad(digit: u8) -> Option<Self> {
        let position_anchor = match digit {
            1 | 4 | 7 => Anchor::Start,
            2 | 5 | 8 => Anchor::Middle,
            3 | 6 | 9 => Anchor::End,
            _ => return None,
        };
        let line_anchor = match digit {
            1..=3 => Anchor::End,
            4..=6 => Anchor::Middle,
            _ => Anchor::Start,
        };
        Some(Self {
            line_anchor,
            position_anchor,
        })
    }

    fn from_tag(tag: &str) -> Option<Self> {
        let caps = ALIGNMENT_TAG_REGEX.captures(tag)?;
        let digit = caps[1].parse::<u8>().ok()?;
        Self::from_keypad(digit)
    }

    pub fn apply(&self, cue: &mut Cue) {
        cue.line_type = LineType::Fraction;
        cue.line = fractional_position_for_anchor(self.line_anchor);
        cue.line_anchor = self.line_anchor;
        cue.position = fractional_position_for_anchor(self.position_anchor);
        cue.position_anchor = self.position_anchor;
    }
}

/// Build a cue from the text lines of one SubRip block.
pub fn parse_subrip_cue(lines: &[&str]) -> Cue {
    let mut override_tags = Vec::new();
    let stripped: Vec<String> = lines
        .iter()
        .map(|line| strip_override_tags(line.trim(), &mut override_tags))
        .collect();
    let text = parse_html_markup(&stripped.join("\n"));
    let mut cue = Cue::new(text);
    if let Some(alignment) = override_tags.iter().find_map(|tag| Alignment::from_tag(tag)) {
        alignment.apply(&mut cue);
    }
    cue
}

/// Remove `{\...}` blocks from `line`, collecting them in order.
fn strip_override_tags(line: &str, tags: &mut Vec<String>) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in OVERRIDE_TAG_REGEX.find_iter(line) {
        out.push_str(&line[last..m.start()]);
        tags.push(m.as_str().to_string());
        last = m.end();
    }
    out.push_str(&line[last..]);
    out
}

/// Interpret `<b>`/`<i>`/`<u>` tags and character entities.
pub fn parse_html_markup(input: &str) -> CueText {
    let mut text = String::with_capacity(input.len());
    let mut spans = Vec::new();
    let mut open: Vec<(TextStyle, usize)> = Vec::new();
    let mut rest = input;

    while let Some(idx) = rest.find(|c: char| c == '<' || c == '&') {
        text.push_str(&rest[..idx]);
        rest = &rest[idx..];
        if rest.starts_with('&') {
            match decode_entity(rest) {
                Some((ch, consumed)) => {
                    text.push(ch);
                    rest = &rest[consumed..];
                }
                None => {
                    text.push('&');
                    rest = &rest[1..];
                }
            }
            continue;
        }
        let Some(tag) = read_tag(rest) else {
            text.push('<');
            rest = &rest[1..];
            continue;
        };
        rest = &rest[tag.len..];
        let Some(style) = style_for_tag(tag.name) else {
            // Recognized shape, unsupported tag: dropped
            continue;
        };
        if tag.closing {
            if let Some(i) = open.iter().rposition(|(s, _)| *s == style) {
                let (style, start) = open.remove(i);
                push_span(&mut spans, start, text.len(), style);
            }
        } else {
            open.push((style, text.len()));
        }
    }
    text.push_str(rest);

    for (style, start) in open {
        push_span(&mut spans, start, text.len(), style);
    }
    spans.sort_by_key(|s: &StyleSpan| s.start);
    CueText { text, spans }
}

fn push_span(spans: &mut Vec<StyleSpan>, start: usize, end: usize, style: TextStyle) {
    if end > start {
        spans.push(StyleSpan { start, end, style });
    }
}

fn style_for_tag(name: &str) -> Option<TextStyle> {
    match name.to_ascii_lowercase().as_str() {
        "b" => Some(TextStyle::Bold),
        "i" => Some(TextStyle::Italic),
        "u" => Some(TextStyle::Underline),
        _ => None,
    }
}

struct Tag<'a> {
    name: &'a str,
    closing: bool,
    len: usize,
}

/// Read `<name ...>` or `</name>` at the start of `s`.
fn read_tag(s: &str) -> Option<Tag<'_>> {
    let end = s.find('>')?;
    let inner = &s[1..end];
    let (closing, body) = match inner.strip_prefix('/') {
        Some(body) => (true, body),
        None => (false, inner),
    };
    let name_len = body
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(body.len());
    if name_len == 0 {
        return None;
    }
    let after = &body[name_len..];
    if !(after.is_empty() || after.starts_with(char::is_whitespace)) {
        return None;
    }
    Some(Tag {
        name: &body[..name_len],
        closing,
        len: end + 1,
    })
}

/// Decode `&name;` at the start of `s`, returning the char and bytes consumed.
pub(crate) fn decode_entity(s: &str) -> Option<(char, usize)> {
    let semi = s.find(';')?;
    let name = &s[1..semi];
    if name.is_empty() || name.len() > 8 || !name.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        _ => return None,
    };
    Some((ch, semi + 1))
}
