use serde::{Deserialize, Serialize};

/// Text encodings understood by the cue decoders
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextEncoding {
    #[default]
    Utf8,
    Latin1,
    Utf16Le,
    Utf16Be,
}

const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
const UTF16BE_BOM: [u8; 2] = [0xFE, 0xFF];
const UTF16LE_BOM: [u8; 2] = [0xFF, 0xFE];

impl TextEncoding {
    /// Detect a byte-order mark at the start of `data`.
    ///
    /// Returns the encoding it announces and the length of the mark.
    pub fn from_bom(data: &[u8]) -> Option<(TextEncoding, usize)> {
        if data.starts_with(&UTF8_BOM) {
            Some((TextEncoding::Utf8, UTF8_BOM.len()))
        } else if data.starts_with(&UTF16BE_BOM) {
            Some((TextEncoding::Utf16Be, UTF16BE_BOM.len()))
        } else if data.starts_with(&UTF16LE_BOM) {
            Some((TextEncoding::Utf16Le, UTF16LE_BOM.len()))
        } else {
            None
        }
    }

    /// Decode `data` lossily, appending to `out`.
    ///
    /// Invalid sequences become U+FFFD. A dangling odd byte at the end of
    /// UTF-16 input is dropped.
    pub fn decode_into(self, data: &[u8], out: &mut String) {
        match self {
            TextEncoding::Utf8 => out.push_str(&String::from_utf8_lossy(data)),
            TextEncoding::Latin1 => out.extend(data.iter().map(|&b| b as char)),
            TextEncoding::Utf16Le => decode_utf16(data, u16::from_le_bytes, out),
            TextEncoding::Utf16Be => decode_utf16(data, u16::from_be_bytes, out),
        }
    }

    pub fn decode(self, data: &[u8]) -> String {
        let mut out = String::with_capacity(data.len());
        self.decode_into(data, &mut out);
        out
    }
}

fn decode_utf16(data: &[u8], unit: fn([u8; 2]) -> u16, out: &mut String) {
    let units = data.chunks_exact(2).map(|pair| unit([pair[0], pair[1]]));
    out.extend(
        char::decode_utf16(units).map(|r| r.unwrap_or(char::REPLACEMENT_CHARACTER)),
    );
}

#[cfg(test)]
mod tests {
    use super::TextEncoding;

    #[test]
    fn test_detects_byte_order_marks() {
        assert_eq!(
            TextEncoding::from_bom(&[0xEF, 0xBB, 0xBF, b'a']),
            Some((TextEncoding::Utf8, 3))
        );
        assert_eq!(
            TextEncoding::from_bom(&[0xFE, 0xFF, 0x00, b'a']),
            Some((TextEncoding::Utf16Be, 2))
        );
        assert_eq!(
            TextEncoding::from_bom(&[0xFF, 0xFE, b'a', 0x00]),
            Some((TextEncoding::Utf16Le, 2))
        );
        assert_eq!(TextEncoding::from_bom(b"1\n"), None);
    }

    #[test]
    fn test_decodes_utf16_and_drops_odd_byte() {
        let le = [b'H', 0x00, b'i', 0x00, 0x21];
        assert_eq!(TextEncoding::Utf16Le.decode(&le), "Hi");
        let be = [0x00, b'H', 0x00, 0xE9];
        assert_eq!(TextEncoding::Utf16Be.decode(&be), "H\u{e9}");
    }

    #[test]
    fn test_decodes_latin1_and_lossy_utf8() {
        assert_eq!(TextEncoding::Latin1.decode(&[b'c', 0xE9]), "c\u{e9}");
        assert_eq!(TextEncoding::Utf8.decode(&[b'a', 0xFF]), "a\u{FFFD}");
    }
}
