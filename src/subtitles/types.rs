use crate::bits::TextEncoding;
use serde::{Deserialize, Serialize};

/// Placement reference point for a line or horizontal position
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

/// How `Cue::line` is interpreted
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineType {
    /// Fraction of the viewport height
    Fraction,
    /// Line number; negative values count up from the bottom
    Number,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlignment {
    Start,
    Center,
    End,
    Left,
    Right,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalType {
    RightToLeft,
    LeftToRight,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
}

/// A style applied to `text[start..end]` (byte offsets)
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleSpan {
    pub start: usize,
    pub end: usize,
    pub style: TextStyle,
}

/// Plain cue text plus the style spans laid over it
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
pub struct CueText {
    pub text: String,
    pub spans: Vec<StyleSpan>,
}

impl CueText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Styles covering the byte at `offset`, in span order.
    pub fn styles_at(&self, offset: usize) -> Vec<TextStyle> {
        self.spans
            .iter()
            .filter(|s| s.start <= offset && offset < s.end)
            .map(|s| s.style)
            .collect()
    }
}

impl std::fmt::Display for CueText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// One displayable unit of subtitle text with its placement
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Cue {
    pub text: CueText,
    pub text_alignment: TextAlignment,
    pub line_type: LineType,
    pub line: f32,
    pub line_anchor: Anchor,
    pub position: f32,
    pub position_anchor: Anchor,
    pub size: f32,
    pub vertical: Option<VerticalType>,
}

impl Cue {
    /// Last line of the viewport, used when a cue carries no line setting
    pub const DEFAULT_LINE: f32 = -1.0;
    pub const DEFAULT_POSITION: f32 = 0.0;
    pub const DEFAULT_SIZE: f32 = 1.0;

    /// A cue with the default placement (start/start anchors on the last line).
    pub fn new(text: CueText) -> Self {
        Self {
            text,
            text_alignment: TextAlignment::Center,
            line_type: LineType::Number,
            line: Self::DEFAULT_LINE,
            line_anchor: Anchor::Start,
            position: Self::DEFAULT_POSITION,
            position_anchor: Anchor::Start,
            size: Self::DEFAULT_SIZE,
            vertical: None,
        }
    }

    pub fn plain_text(&self) -> &str {
        &self.text.text
    }
}

/// A timed activation event bundling the cues visible during it
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CuesWithTiming {
    pub cues: Vec<Cue>,
    /// Microseconds from the start of the parsed unit; `None` when the
    /// enclosing sample timestamp supplies it.
    pub start_time_us: Option<i64>,
    /// `None` when the event lasts until the next one.
    pub duration_us: Option<u64>,
}

impl CuesWithTiming {
    pub fn new(cues: Vec<Cue>, start_time_us: Option<i64>, duration_us: Option<u64>) -> Self {
        Self {
            cues,
            start_time_us,
            duration_us,
        }
    }

    /// End of the event, when both start and duration are known.
    pub fn end_time_us(&self) -> Option<i64> {
        match (self.start_time_us, self.duration_us) {
            (Some(start), Some(duration)) => Some(start.saturating_add_unsigned(duration)),
            _ => None,
        }
    }
}

/// Options for the SubRip decoder
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct SubripOptions {
    /// Used when the input carries no byte-order mark
    pub default_encoding: TextEncoding,
    /// Drop cues that end at or before time zero
    pub discard_pre_zero_cues: bool,
}

impl Default for SubripOptions {
    fn default() -> Self {
        Self {
            default_encoding: TextEncoding::Utf8,
            discard_pre_zero_cues: true,
        }
    }
}

/// A cue with its source window, as produced by a text decoder before merging
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TimedCue {
    pub cue: Cue,
    pub start_us: i64,
    pub end_us: i64,
}
