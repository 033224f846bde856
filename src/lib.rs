pub mod bits;
pub use bits::{ByteCursor, TextEncoding};

pub mod mp4;
pub use mp4::{BoxHeader, BoxType};

pub mod subtitles;
pub use subtitles::{
    create_parser, parse_subtitle_sample_data, Anchor, Cue, CueText, CuesWithTiming, LineType,
    Mp4WebvttParser, StyleSpan, SubripOptions, SubripParser, SubtitleFormat, SubtitleParser,
    TextAlignment, TextStyle, VerticalType,
};

pub mod errors;
pub use errors::{
    MediaParserError, MediaParserResult, Mp4Error, PreconditionError, TimecodeError,
    TruncatedInputError,
};

/// Decode a complete SubRip buffer with a throwaway parser.
pub fn parse_subrip(data: &[u8]) -> MediaParserResult<Vec<CuesWithTiming>> {
    SubripParser::new().parse_all(data)
}

/// Decode one WebVTT-in-MP4 sample with a throwaway parser.
pub fn parse_mp4_webvtt(data: &[u8]) -> MediaParserResult<Vec<CuesWithTiming>> {
    Mp4WebvttParser::new().parse_all(data)
}
