use super::lexer::{decode_text, lex_cue_blocks};
use super::markup::parse_subrip_cue;
use super::merge::merge_timed_cues;
use super::parser::{SubtitleFormat, SubtitleParser};
use super::types::{CuesWithTiming, SubripOptions, TimedCue};
use crate::bits::check_range;
use crate::errors::MediaParserResult;
use log::{debug, info};

/// Decoder for SubRip (`.srt`) text.
///
/// Malformed blocks are dropped one at a time; the only error is a bad
/// offset/length range.
#[derive(Debug, Default)]
pub struct SubripParser {
    options: SubripOptions,
    decoded: String,
}

impl SubripParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: SubripOptions) -> Self {
        Self {
            options,
            decoded: String::new(),
        }
    }

    pub fn options(&self) -> &SubripOptions {
        &self.options
    }
}

impl SubtitleParser for SubripParser {
    fn parse(
        &mut self,
        data: &[u8],
        offset: usize,
        length: usize,
    ) -> MediaParserResult<Vec<CuesWithTiming>> {
        let end = check_range(data.len(), offset, length)?;
        let encoding = decode_text(
            &data[offset..end],
            self.options.default_encoding,
            &mut self.decoded,
        );
        debug!("Decoded {} bytes of SubRip as {:?}", length, encoding);

        let timed: Vec<TimedCue> = lex_cue_blocks(&self.decoded)
            .into_iter()
            .map(|block| TimedCue {
                cue: parse_subrip_cue(&block.text_lines),
                start_us: block.timing.start_us,
                end_us: block.timing.end_us,
            })
            .collect();
        info!("Parsed {} SubRip cues", timed.len());

        Ok(merge_timed_cues(timed, self.options.discard_pre_zero_cues))
    }

    fn reset(&mut self) {
        self.decoded = String::new();
    }

    fn format(&self) -> SubtitleFormat {
        SubtitleFormat::Subrip
    }
}
