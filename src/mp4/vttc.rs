use super::r#box::{read_box, BoxType};
use crate::bits::{ByteCursor, TextEncoding};
use crate::errors::MediaParserResult;
use crate::subtitles::types::{Cue, CueText};
use crate::subtitles::webvtt::{parse_cue_settings, parse_cue_text};
use log::debug;

/// Parse the children of a `vttc` box into a cue.
///
/// `sttg` carries the settings list and `payl` the cue text; other children
/// are skipped. A box without `payl` yields an empty cue.
pub fn parse_vttc_box(payload: &mut ByteCursor) -> MediaParserResult<Cue> {
    let mut settings = None;
    let mut text = None;
    while !payload.is_empty() {
        let (header, child) = read_box(payload, "vtt cue")?;
        let len = child.bytes_remaining();
        match header.box_type {
            BoxType::Sttg => {
                let raw = child.slice_as_string(child.position(), len, TextEncoding::Utf8)?;
                settings = Some(parse_cue_settings(&raw));
            }
            BoxType::Payl => {
                let raw = child.slice_as_string(child.position(), len, TextEncoding::Utf8)?;
                text = Some(parse_cue_text(raw.trim()));
            }
            other => debug!("Ignoring {} box inside vttc", other.name()),
        }
    }
    let text = text.unwrap_or_else(|| CueText::plain(""));
    Ok(match settings {
        Some(settings) => settings.into_cue(text),
        None => Cue::new(text),
    })
}
