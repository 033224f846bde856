use super::mp4_webvtt::Mp4WebvttParser;
use super::subrip::SubripParser;
use super::types::CuesWithTiming;
use crate::errors::{MediaParserError, MediaParserResult};
use log::debug;

/// A decoder turning one byte range into ordered cue events.
///
/// Implementations may keep scratch buffers between calls, hence `&mut self`;
/// use one instance per thread.
pub trait SubtitleParser {
    /// Parse `data[offset..offset + length]`.
    fn parse(
        &mut self,
        data: &[u8],
        offset: usize,
        length: usize,
    ) -> MediaParserResult<Vec<CuesWithTiming>>;

    /// Parse the whole buffer.
    fn parse_all(&mut self, data: &[u8]) -> MediaParserResult<Vec<CuesWithTiming>> {
        self.parse(data, 0, data.len())
    }

    /// Drop any state kept from previous calls.
    fn reset(&mut self);

    fn format(&self) -> SubtitleFormat;
}

/// Subtitle formats with a decoder in this crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubtitleFormat {
    Subrip,
    Mp4Webvtt,
}

impl SubtitleFormat {
    /// Resolve a codec fourCC, MIME type or file extension.
    pub fn from_codec(codec_type: &str) -> Option<Self> {
        match codec_type.trim().to_ascii_lowercase().as_str() {
            "srt" | "subrip" | "application/x-subrip" => Some(SubtitleFormat::Subrip),
            "wvtt" | "application/x-mp4-vtt" => Some(SubtitleFormat::Mp4Webvtt),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubtitleFormat::Subrip => "SubRip",
            SubtitleFormat::Mp4Webvtt => "WebVTT in MP4",
        }
    }
}

/// Create a fresh decoder for `format`.
pub fn create_parser(format: SubtitleFormat) -> Box<dyn SubtitleParser> {
    match format {
        SubtitleFormat::Subrip => Box::new(SubripParser::new()),
        SubtitleFormat::Mp4Webvtt => Box::new(Mp4WebvttParser::new()),
    }
}

/// Parse subtitle sample data based on codec type
pub fn parse_subtitle_sample_data(
    data: &[u8],
    codec_type: &str,
) -> MediaParserResult<Vec<CuesWithTiming>> {
    let format = SubtitleFormat::from_codec(codec_type)
        .ok_or_else(|| MediaParserError::UnsupportedFormat(codec_type.to_string()))?;
    debug!("Decoding {} bytes as {}", data.len(), format.name());
    create_parser(format).parse_all(data)
}
