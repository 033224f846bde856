/*
# WebVTT Cue Parsing

 Cue settings lists (`line:0 align:start position:10%,line-left size:50% vertical:rl`)
 and cue text markup (`<b>`, `<i>`, `<u>`, `<c.class>`, `<v Speaker>`, `<lang en>`,
 `<ruby>`/`<rt>`, `<00:00:01.000>` timestamp tags and character entities).

 A setting that fails to parse is logged and skipped; the rest of the list still applies.
*/

use super::markup::decode_entity;
use super::types::{
    Anchor, Cue, CueText, LineType, StyleSpan, TextAlignment, TextStyle, VerticalType,
};
use log::warn;

/// Settings collected from a cue settings list before they are resolved into a `Cue`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueSettings {
    pub line: Option<(f32, LineType)>,
    pub line_anchor: Option<Anchor>,
    pub position: Option<f32>,
    pub position_anchor: Option<Anchor>,
    pub text_alignment: Option<TextAlignment>,
    pub size: Option<f32>,
    pub vertical: Option<VerticalType>,
}

impl CueSettings {
    /// Resolve into a cue carrying `text`.
    ///
    /// Without an `align` setting the placement keeps the start/start
    /// defaults; with one, the position and its anchor follow the alignment
    /// unless set explicitly.
    pub fn into_cue(self, text: CueText) -> Cue {
        let mut cue = Cue::new(text);
        if let Some(alignment) = self.text_alignment {
            cue.text_alignment = alignment;
            cue.position = derive_position(alignment);
            cue.position_anchor = derive_position_anchor(alignment);
        }
        if let Some((line, line_type)) = self.line {
            cue.line_type = line_type;
            cue.line = match line_type {
                // Out-of-range percentages fall back to the bottom edge
                LineType::Fraction if !(0.0..=1.0).contains(&line) => 1.0,
                _ => line,
            };
        }
        if let Some(anchor) = self.line_anchor {
            cue.line_anchor = anchor;
        }
        if let Some(position) = self.position {
            cue.position = position;
        }
        if let Some(anchor) = self.position_anchor {
            cue.position_anchor = anchor;
        }
        let max_size = max_size_for(cue.position_anchor, cue.position);
        cue.size = self.size.unwrap_or(Cue::DEFAULT_SIZE).min(max_size);
        cue.vertical = self.vertical;
        cue
    }
}

fn derive_position(alignment: TextAlignment) -> f32 {
    match alignment {
        TextAlignment::Start | TextAlignment::Left => 0.0,
        TextAlignment::Center => 0.5,
        TextAlignment::End | TextAlignment::Right => 1.0,
    }
}

fn derive_position_anchor(alignment: TextAlignment) -> Anchor {
    match alignment {
        TextAlignment::Start | TextAlignment::Left => Anchor::Start,
        TextAlignment::Center => Anchor::Middle,
        TextAlignment::End | TextAlignment::Right => Anchor::End,
    }
}

/// Widest box that fits in the viewport at `position` with `anchor`.
fn max_size_for(anchor: Anchor, position: f32) -> f32 {
    let size = match anchor {
        Anchor::Start => 1.0 - position,
        Anchor::End => position,
        Anchor::Middle if position <= 0.5 => position * 2.0,
        Anchor::Middle => (1.0 - position) * 2.0,
    };
    size.clamp(0.0, 1.0)
}

/// Parse a whitespace-separated `name:value` settings list.
pub fn parse_cue_settings(settings: &str) -> CueSettings {
    let mut parsed = CueSettings::default();
    for setting in settings.split_whitespace() {
        let Some((name, value)) = setting.split_once(':') else {
            warn!("Skipping malformed cue setting: {}", setting);
            continue;
        };
        if value.is_empty() {
            warn!("Skipping empty cue setting: {}", setting);
            continue;
        }
        let applied = match name {
            "line" => parse_line_setting(value, &mut parsed),
            "position" => parse_position_setting(value, &mut parsed),
            "align" => parse_text_alignment(value).map(|a| parsed.text_alignment = Some(a)),
            "size" => parse_unit_percentage(value).map(|s| parsed.size = Some(s)),
            "vertical" => parse_vertical(value).map(|v| parsed.vertical = Some(v)),
            _ => {
                warn!("Unknown cue setting: {}", setting);
                Some(())
            }
        };
        if applied.is_none() {
            warn!("Skipping bad cue setting: {}", setting);
        }
    }
    parsed
}

fn parse_line_setting(value: &str, settings: &mut CueSettings) -> Option<()> {
    let (line, anchor) = match value.split_once(',') {
        Some((line, anchor)) => (line, Some(parse_line_anchor(anchor)?)),
        None => (value, None),
    };
    let parsed = if line.ends_with('%') {
        (parse_percentage(line)?, LineType::Fraction)
    } else {
        (line.parse::<i32>().ok()? as f32, LineType::Number)
    };
    settings.line = Some(parsed);
    if anchor.is_some() {
        settings.line_anchor = anchor;
    }
    Some(())
}

fn parse_position_setting(value: &str, settings: &mut CueSettings) -> Option<()> {
    let (position, anchor) = match value.split_once(',') {
        Some((position, anchor)) => (position, Some(parse_position_anchor(anchor)?)),
        None => (value, None),
    };
    settings.position = Some(parse_unit_percentage(position)?);
    if anchor.is_some() {
        settings.position_anchor = anchor;
    }
    Some(())
}

fn parse_line_anchor(value: &str) -> Option<Anchor> {
    match value {
        "start" => Some(Anchor::Start),
        "center" | "middle" => Some(Anchor::Middle),
        "end" => Some(Anchor::End),
        _ => None,
    }
}

fn parse_position_anchor(value: &str) -> Option<Anchor> {
    match value {
        "line-left" | "start" => Some(Anchor::Start),
        "center" | "middle" => Some(Anchor::Middle),
        "line-right" | "end" => Some(Anchor::End),
        _ => None,
    }
}

fn parse_text_alignment(value: &str) -> Option<TextAlignment> {
    match value {
        "start" => Some(TextAlignment::Start),
        "left" => Some(TextAlignment::Left),
        "center" | "middle" => Some(TextAlignment::Center),
        "end" => Some(TextAlignment::End),
        "right" => Some(TextAlignment::Right),
        _ => None,
    }
}

fn parse_vertical(value: &str) -> Option<VerticalType> {
    match value {
        "rl" => Some(VerticalType::RightToLeft),
        "lr" => Some(VerticalType::LeftToRight),
        _ => None,
    }
}

/// `"37.5%"` → `0.375`
pub fn parse_percentage(value: &str) -> Option<f32> {
    let number = value.strip_suffix('%')?;
    let parsed = number.parse::<f32>().ok()?;
    if !parsed.is_finite() {
        return None;
    }
    Some(parsed / 100.0)
}

/// A percentage that must lie within `0%..=100%`
fn parse_unit_percentage(value: &str) -> Option<f32> {
    parse_percentage(value).filter(|fraction| (0.0..=1.0).contains(fraction))
}

const TAG_BOLD: &str = "b";
const TAG_ITALIC: &str = "i";
const TAG_UNDERLINE: &str = "u";
const TAG_CLASS: &str = "c";
const TAG_VOICE: &str = "v";
const TAG_LANG: &str = "lang";
const TAG_RUBY: &str = "ruby";
const TAG_RUBY_TEXT: &str = "rt";

fn is_supported_tag(name: &str) -> bool {
    matches!(
        name,
        TAG_BOLD | TAG_ITALIC | TAG_UNDERLINE | TAG_CLASS | TAG_VOICE | TAG_LANG | TAG_RUBY | TAG_RUBY_TEXT
    )
}

fn style_for(name: &str) -> Option<TextStyle> {
    match name {
        TAG_BOLD => Some(TextStyle::Bold),
        TAG_ITALIC => Some(TextStyle::Italic),
        TAG_UNDERLINE => Some(TextStyle::Underline),
        _ => None,
    }
}

/// Parse WebVTT cue text into plain text and style spans.
pub fn parse_cue_text(markup: &str) -> CueText {
    let mut text = String::with_capacity(markup.len());
    let mut spans = Vec::new();
    let mut open: Vec<(&str, usize)> = Vec::new();
    let mut rest = markup;

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
                    warn!("Unsupported character entity in cue text");
                    text.push('&');
                    rest = &rest[1..];
                }
            }
            continue;
        }
        // An unterminated tag swallows the rest of the text
        let tag_end = rest.find('>').map(|i| i + 1).unwrap_or(rest.len());
        let inner = rest[1..tag_end].trim_end_matches('>');
        rest = &rest[tag_end..];

        let (closing, body) = match inner.strip_prefix('/') {
            Some(body) => (true, body),
            None => (false, inner),
        };
        let name = tag_name(body);
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) || !is_supported_tag(name) {
            // Timestamp tags and unknown tags carry no text
            continue;
        }
        if closing {
            let Some(i) = open.iter().rposition(|(open_name, _)| *open_name == name) else {
                continue;
            };
            // Closing a tag also closes everything opened after it
            for (open_name, start) in open.drain(i..).rev() {
                if let Some(style) = style_for(open_name) {
                    push_span(&mut spans, start, text.len(), style);
                }
            }
        } else {
            open.push((name, text.len()));
        }
    }
    text.push_str(rest);

    for (name, start) in open {
        if let Some(style) = style_for(name) {
            push_span(&mut spans, start, text.len(), style);
        }
    }
    spans.sort_by_key(|s: &StyleSpan| s.start);
    CueText { text, spans }
}

/// Tag name up to the first class dot or whitespace annotation.
fn tag_name(body: &str) -> &str {
    let end = body
        .find(|c: char| c == '.' || c.is_whitespace())
        .unwrap_or(body.len());
    &body[..end]
}

fn push_span(spans: &mut Vec<StyleSpan>, start: usize, end: usize, style: TextStyle) {
    if end > start {
        spans.push(StyleSpan { start, end, style });
    }
}
