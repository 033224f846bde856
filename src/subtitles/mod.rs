mod lexer;
mod markup;
mod merge;
mod mp4_webvtt;
mod parser;
mod subrip;
mod timecode;
pub mod types;
mod utils;
pub mod webvtt;

pub use mp4_webvtt::Mp4WebvttParser;
pub use parser::{create_parser, parse_subtitle_sample_data, SubtitleFormat, SubtitleParser};
pub use subrip::SubripParser;
pub use types::{
    Anchor, Cue, CueText, CuesWithTiming, LineType, StyleSpan, SubripOptions, TextAlignment,
    TextStyle, VerticalType,
};

// Exports for testing
pub use lexer::{decode_text, lex_cue_blocks, split_lines, CueBlock};
pub use markup::{fractional_position_for_anchor, parse_html_markup, parse_subrip_cue, Alignment};
pub use timecode::{parse_timing_line, TimecodeRange};
pub use utils::format_timestamp;

#[cfg(test)]
mod markup_test;
