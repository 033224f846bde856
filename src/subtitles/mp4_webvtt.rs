use super::parser::{SubtitleFormat, SubtitleParser};
use super::types::{Cue, CuesWithTiming};
use crate::bits::ByteCursor;
use crate::errors::MediaParserResult;
use crate::mp4::r#box::{read_box, BoxType};
use crate::mp4::vttc::parse_vttc_box;
use log::debug;

/// Decoder for one WebVTT sample boxed in MP4 (`wvtt` tracks).
///
/// The sample's timing comes from the track, so the single event it returns
/// has no start or duration. Any structural problem in the boxes fails the
/// whole sample.
#[derive(Debug, Default)]
pub struct Mp4WebvttParser {
    cues: Vec<Cue>,
}

impl Mp4WebvttParser {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SubtitleParser for Mp4WebvttParser {
    fn parse(
        &mut self,
        data: &[u8],
        offset: usize,
        length: usize,
    ) -> MediaParserResult<Vec<CuesWithTiming>> {
        let mut cursor = ByteCursor::new(data, offset, length)?;
        self.cues.clear();
        while !cursor.is_empty() {
            let (header, mut payload) = read_box(&mut cursor, "top level")?;
            match header.box_type {
                BoxType::Vttc => self.cues.push(parse_vttc_box(&mut payload)?),
                // vtte, vtta and unknown peers carry no cue
                other => debug!("Skipping {} box ({} bytes)", other.name(), header.size),
            }
        }
        let cues = self.cues.drain(..).collect();
        Ok(vec![CuesWithTiming::new(cues, None, None)])
    }

    fn reset(&mut self) {
        self.cues = Vec::new();
    }

    fn format(&self) -> SubtitleFormat {
        SubtitleFormat::Mp4Webvtt
    }
}
