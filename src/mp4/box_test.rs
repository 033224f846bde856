#[cfg(test)]
mod tests {
    use crate::bits::ByteCursor;
    use crate::errors::{MediaParserError, Mp4Error};
    use crate::mp4::r#box::*;
    use crate::mp4::vttc::parse_vttc_box;
    use crate::subtitles::types::{Anchor, TextAlignment};

    #[test]
    fn test_box_type_round_trip_and_unknown() {
        assert_eq!(BoxType::from_four_cc(*b"vttc"), BoxType::Vttc);
        assert_eq!(BoxType::from_four_cc(*b"payl"), BoxType::Payl);
        assert_eq!(
            BoxType::from_four_cc(*b"abcd"),
            BoxType::Unknown(*b"abcd")
        );
        assert_eq!(BoxType::Unknown(*b"abcd").name(), "abcd");
        assert_eq!(BoxType::Sttg.four_cc(), *b"sttg");
    }

    #[test]
    fn test_read_box_splits_payload() {
        let data = [make_box(b"payl", b"Hello"), make_box(b"iden", b"7")].concat();
        let mut cursor = ByteCursor::from_slice(&data);
        let (header, payload) = read_box(&mut cursor, "test").unwrap();
        assert_eq!(header.box_type, BoxType::Payl);
        assert_eq!(header.size, 13);
        assert_eq!(payload.remaining_slice(), b"Hello");
        let (header, _) = read_box(&mut cursor, "test").unwrap();
        assert_eq!(header.box_type, BoxType::Iden);
        assert!(cursor.is_empty());
    }

    #[test]
    fn test_payload_size_of_undersized_header() {
        let header = BoxHeader {
            box_type: BoxType::Vtte,
            size: 3,
        };
        assert_eq!(header.payload_size(), 0);
        let header = BoxHeader {
            box_type: BoxType::Payl,
            size: 13,
        };
        assert_eq!(header.payload_size(), 5);
    }

    #[test]
    fn test_header_errors() {
        let mut short = ByteCursor::from_slice(&[0, 0, 0, 8, b'v']);
        assert!(matches!(
            read_box_header(&mut short, "test"),
            Err(MediaParserError::MalformedContainer(Mp4Error::IncompleteHeader { remaining: 5, .. }))
        ));

        let mut tiny = ByteCursor::from_slice(&[0, 0, 0, 4, b'v', b't', b't', b'c']);
        assert!(matches!(
            read_box_header(&mut tiny, "test"),
            Err(MediaParserError::MalformedContainer(Mp4Error::InvalidBoxSize { size: 4, .. }))
        ));

        let mut overrun = ByteCursor::from_slice(&[0, 0, 0, 20, b'p', b'a', b'y', b'l', b'x']);
        assert!(matches!(
            read_box_header(&mut overrun, "test"),
            Err(MediaParserError::MalformedContainer(Mp4Error::BoxOverrun { size: 20, remaining: 1, .. }))
        ));
    }

    #[test]
    fn test_vttc_with_settings_and_payload() {
        let inner = [
            make_box(b"iden", b"cue-1"),
            make_box(b"sttg", b"align:start line:0"),
            make_box(b"payl", b"  <i>Hello</i> world\n"),
        ]
        .concat();
        let mut cursor = ByteCursor::from_slice(&inner);
        let cue = parse_vttc_box(&mut cursor).unwrap();
        assert_eq!(cue.plain_text(), "Hello world");
        assert_eq!(cue.text.spans.len(), 1);
        assert_eq!(cue.text_alignment, TextAlignment::Start);
        assert_eq!(cue.position_anchor, Anchor::Start);
        assert_eq!(cue.line, 0.0);
    }

    #[test]
    fn test_vttc_without_payload_is_empty_cue() {
        let inner = make_box(b"sttg", b"");
        let mut cursor = ByteCursor::from_slice(&inner);
        let cue = parse_vttc_box(&mut cursor).unwrap();
        assert_eq!(cue.plain_text(), "");
    }

    #[test]
    fn test_vttc_child_overrunning_parent() {
        // payl claims 32 bytes inside a 16 byte vttc payload
        let mut inner = Vec::new();
        write_box_header(&mut inner, b"payl", 32);
        inner.extend_from_slice(b"Hello!!!");
        let mut cursor = ByteCursor::from_slice(&inner);
        assert!(matches!(
            parse_vttc_box(&mut cursor),
            Err(MediaParserError::MalformedContainer(Mp4Error::BoxOverrun { .. }))
        ));
    }
}
