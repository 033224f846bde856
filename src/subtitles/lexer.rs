use super::timecode::{is_timing_line, parse_timing_line, TimecodeRange};
use crate::bits::TextEncoding;
use crate::errors::TimecodeError;
use log::{debug, warn};

/// One candidate cue: optional sequence number, timing and text lines
#[derive(Debug, Clone, PartialEq)]
pub struct CueBlock<'a> {
    pub sequence: Option<u64>,
    pub timing: TimecodeRange,
    pub text_lines: Vec<&'a str>,
}

/// Decode `data` into `out`, honouring a byte-order mark over `hint`.
///
/// Returns the encoding that was used.
pub fn decode_text(data: &[u8], hint: TextEncoding, out: &mut String) -> TextEncoding {
    let (encoding, body) = match TextEncoding::from_bom(data) {
        Some((encoding, bom_len)) => (encoding, &data[bom_len..]),
        None => (hint, data),
    };
    out.clear();
    encoding.decode_into(body, out);
    // A UTF-8 BOM re-encoded inside UTF-16 input decodes to U+FEFF
    if out.starts_with('\u{feff}') {
        out.replace_range(..'\u{feff}'.len_utf8(), "");
    }
    encoding
}

/// Split on `\n`, `\r\n` or a lone `\r`.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                start = i + 1;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn parse_sequence_number(line: &str) -> Option<u64> {
    line.trim().parse::<u64>().ok()
}

/// Group lines into blocks separated by one or more blank lines.
pub fn split_blocks<'a>(lines: &[&'a str]) -> Vec<Vec<&'a str>> {
    lines
        .split(|line| is_blank(line))
        .filter(|block| !block.is_empty())
        .map(|block| block.to_vec())
        .collect()
}

/// Parse one block into its sequence number, timing and text.
///
/// The first line may be the timing line itself; otherwise it is taken as
/// the sequence number and the second line must be the timing line.
pub fn parse_block<'a>(block: &[&'a str]) -> Result<CueBlock<'a>, TimecodeError> {
    let first = block.first().copied().unwrap_or_default();
    let (sequence, timing_idx) = if is_timing_line(first) {
        (None, 0)
    } else {
        let sequence = parse_sequence_number(first);
        if sequence.is_none() {
            debug!("Ignoring invalid sequence number: {:?}", first);
        }
        (sequence, 1)
    };
    let timing_line = block.get(timing_idx).copied().unwrap_or_default();
    let timing = parse_timing_line(timing_line)?;
    Ok(CueBlock {
        sequence,
        timing,
        text_lines: block[timing_idx + 1..].to_vec(),
    })
}

/// Split a block that runs into the next cue without a blank line.
///
/// A sequence-number line directly followed by a timing line, anywhere past
/// the current timing line, starts a new block.
fn split_unseparated<'a>(block: Vec<&'a str>) -> Vec<Vec<&'a str>> {
    let mut out = Vec::new();
    let mut current = block;
    loop {
        let timing_idx = match current.iter().position(|line| is_timing_line(line)) {
            Some(idx) => idx,
            None => break,
        };
        let split_at = (timing_idx + 2..current.len()).find(|&i| {
            is_timing_line(current[i]) && parse_sequence_number(current[i - 1]).is_some()
        });
        match split_at {
            Some(i) => {
                let tail = current.split_off(i - 1);
                debug!("Splitting cue block missing a blank-line separator");
                out.push(current);
                current = tail;
            }
            None => break,
        }
    }
    out.push(current);
    out
}

/// Lex decoded text into cue blocks, dropping the ones without valid timing.
pub fn lex_cue_blocks(text: &str) -> Vec<CueBlock<'_>> {
    let lines = split_lines(text);
    let mut blocks = Vec::new();
    for block in split_blocks(&lines).into_iter().flat_map(split_unseparated) {
        match parse_block(&block) {
            Ok(cue_block) => blocks.push(cue_block),
            Err(err) => warn!("Skipping cue block: {}", err),
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_multiple_blank_lines_separate_once() {
        let lines = split_lines("1\nx\n\n\n  \n2\ny\n");
        assert_eq!(split_blocks(&lines), vec![vec!["1", "x"], vec!["2", "y"]]);
    }

    #[test]
    fn test_block_without_sequence_number() {
        let block = parse_block(&["00:00:01,000 --> 00:00:02,000", "Text"]).unwrap();
        assert_eq!(block.sequence, None);
        assert_eq!(block.timing.start_us, 1_000_000);
        assert_eq!(block.text_lines, vec!["Text"]);
    }

    #[test]
    fn test_block_with_non_numeric_id() {
        let block = parse_block(&["intro", "00:00:01,000 --> 00:00:02,000", "Text"]).unwrap();
        assert_eq!(block.sequence, None);
        assert_eq!(block.text_lines, vec!["Text"]);
    }

    #[test]
    fn test_block_missing_timecode_is_error() {
        assert!(parse_block(&["2", "This is the second subtitle."]).is_err());
        assert!(parse_block(&["2"]).is_err());
    }

    #[test]
    fn test_block_with_empty_text() {
        let block = parse_block(&["7", "00:00:01,000 --> 00:00:02,000"]).unwrap();
        assert_eq!(block.sequence, Some(7));
        assert!(block.text_lines.is_empty());
    }

    #[test]
    fn test_unseparated_blocks_are_split() {
        let text = "1\n00:00:01,000 --> 00:00:02,000\nFirst\n2\n00:00:03,000 --> 00:00:04,000\nSecond\n";
        let blocks = lex_cue_blocks(text);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].text_lines, vec!["First"]);
        assert_eq!(blocks[1].sequence, Some(2));
        assert_eq!(blocks[1].text_lines, vec!["Second"]);
    }

    #[test]
    fn test_number_line_in_text_is_kept() {
        let text = "1\n00:00:01,000 --> 00:00:02,000\nCount:\n3\n";
        let blocks = lex_cue_blocks(text);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].text_lines, vec!["Count:", "3"]);
    }

    #[test]
    fn test_decode_text_strips_bom() {
        let mut out = String::new();
        let enc = decode_text(b"\xEF\xBB\xBF1\n", TextEncoding::Latin1, &mut out);
        assert_eq!(enc, TextEncoding::Utf8);
        assert_eq!(out, "1\n");

        let enc = decode_text(&[0xFF, 0xFE, b'1', 0x00], TextEncoding::Utf8, &mut out);
        assert_eq!(enc, TextEncoding::Utf16Le);
        assert_eq!(out, "1");
    }
}
