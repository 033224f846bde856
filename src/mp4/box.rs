use crate::bits::ByteCursor;
use crate::errors::{MediaParserResult, Mp4Error};
use log::debug;

pub const BOX_HEADER_SIZE: usize = 8;

/// Box types found in WebVTT samples, with a skip fallback for the rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxType {
    /// VTTCueBox, the cue container
    Vttc,
    /// VTTEmptyCueBox
    Vtte,
    /// VTTAdditionalTextBox (comments between cues)
    Vtta,
    /// CueSettingsBox
    Sttg,
    /// CuePayloadBox
    Payl,
    /// CueIDBox
    Iden,
    /// CueTimeBox
    Ctim,
    Unknown([u8; 4]),
}

impl BoxType {
    pub fn from_four_cc(four_cc: [u8; 4]) -> Self {
        match &four_cc {
            b"vttc" => BoxType::Vttc,
            b"vtte" => BoxType::Vtte,
            b"vtta" => BoxType::Vtta,
            b"sttg" => BoxType::Sttg,
            b"payl" => BoxType::Payl,
            b"iden" => BoxType::Iden,
            b"ctim" => BoxType::Ctim,
            _ => BoxType::Unknown(four_cc),
        }
    }

    pub fn four_cc(&self) -> [u8; 4] {
        match self {
            BoxType::Vttc => *b"vttc",
            BoxType::Vtte => *b"vtte",
            BoxType::Vtta => *b"vtta",
            BoxType::Sttg => *b"sttg",
            BoxType::Payl => *b"payl",
            BoxType::Iden => *b"iden",
            BoxType::Ctim => *b"ctim",
            BoxType::Unknown(code) => *code,
        }
    }

    pub fn name(&self) -> String {
        String::from_utf8_lossy(&self.four_cc()).into_owned()
    }
}

/// Box header information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxHeader {
    pub box_type: BoxType,
    pub size: u32,
}

impl BoxHeader {
    pub fn payload_size(&self) -> usize {
        (self.size as usize).saturating_sub(BOX_HEADER_SIZE)
    }
}

/// Read a box header from `cursor` and validate it against the bytes left in scope.
///
/// `scope` names the enclosing level for error messages.
pub fn read_box_header(cursor: &mut ByteCursor, scope: &'static str) -> MediaParserResult<BoxHeader> {
    let remaining = cursor.bytes_remaining();
    if remaining < BOX_HEADER_SIZE {
        return Err(Mp4Error::IncompleteHeader { scope, remaining }.into());
    }
    let size = cursor.read_u32_be()?;
    let box_type = BoxType::from_four_cc(cursor.read_four_cc()?);
    if (size as usize) < BOX_HEADER_SIZE {
        return Err(Mp4Error::InvalidBoxSize {
            box_type: box_type.name(),
            size,
        }
        .into());
    }
    let header = BoxHeader { box_type, size };
    if header.payload_size() > cursor.bytes_remaining() {
        return Err(Mp4Error::BoxOverrun {
            box_type: box_type.name(),
            size,
            remaining: cursor.bytes_remaining(),
        }
        .into());
    }
    debug!(
        "  {} box [size: {}, pos: {}]",
        box_type.name(),
        size,
        cursor.position() - BOX_HEADER_SIZE
    );
    Ok(header)
}

/// Read a header and split off a cursor over its payload.
pub fn read_box<'a>(
    cursor: &mut ByteCursor<'a>,
    scope: &'static str,
) -> MediaParserResult<(BoxHeader, ByteCursor<'a>)> {
    let header = read_box_header(cursor, scope)?;
    let payload = cursor.sub_cursor(header.payload_size())?;
    Ok((header, payload))
}

/// Write a box header to a vector
pub fn write_box_header(output: &mut Vec<u8>, name: &[u8; 4], size: u32) {
    output.extend_from_slice(&size.to_be_bytes());
    output.extend_from_slice(name);
}

/// Build a complete box around `payload`
pub fn make_box(name: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(payload.len() + BOX_HEADER_SIZE);
    write_box_header(&mut buf, name, (payload.len() + BOX_HEADER_SIZE) as u32);
    buf.extend_from_slice(payload);
    buf
}
