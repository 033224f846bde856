#[cfg(test)]
mod tests {
    use crate::subtitles::markup::*;
    use crate::subtitles::types::{Anchor, LineType, StyleSpan, TextStyle};

    #[test]
    fn test_alignment_grid() {
        let expected = [
            (1, Anchor::End, Anchor::Start),
            (2, Anchor::End, Anchor::Middle),
            (3, Anchor::End, Anchor::End),
            (4, Anchor::Middle, Anchor::Start),
            (5, Anchor::Middle, Anchor::Middle),
            (6, Anchor::Middle, Anchor::End),
            (7, Anchor::Start, Anchor::Start),
            (8, Anchor::Start, Anchor::Middle),
            (9, Anchor::Start, Anchor::End),
        ];
        for (digit, line_anchor, position_anchor) in expected {
            let line = format!("{{\\an{}}}Aligned", digit);
            let cue = parse_subrip_cue(&[line.as_str()]);
            assert_eq!(cue.plain_text(), "Aligned");
            assert_eq!(cue.line_type, LineType::Fraction);
            assert_eq!(cue.line_anchor, line_anchor, "an{}", digit);
            assert_eq!(cue.position_anchor, position_anchor, "an{}", digit);
            assert_eq!(cue.line, fractional_position_for_anchor(line_anchor));
            assert_eq!(cue.position, fractional_position_for_anchor(position_anchor));
        }
    }

    #[test]
    fn test_bottom_center_constants() {
        let cue = parse_subrip_cue(&["{\\an2}Bottom"]);
        assert_eq!(cue.line, 0.92);
        assert_eq!(cue.position, 0.5);
    }

    #[test]
    fn test_space_after_brace_is_literal() {
        let cue = parse_subrip_cue(&[
            "This { \\an2} is not a valid tag due to the space after the opening bracket.",
        ]);
        assert_eq!(
            cue.plain_text(),
            "This { \\an2} is not a valid tag due to the space after the opening bracket."
        );
        assert_eq!(cue.line_type, LineType::Number);
        assert_eq!(cue.line_anchor, Anchor::Start);
        assert_eq!(cue.position_anchor, Anchor::Start);
    }

    #[test]
    fn test_strips_all_override_tags_and_uses_first_alignment() {
        let cue = parse_subrip_cue(&[
            "This {\\bord-1}is the fifth {\\an9}subtitle{\\an1} with multiple{\\i1} valid tags.",
        ]);
        assert_eq!(
            cue.plain_text(),
            "This is the fifth subtitle with multiple valid tags."
        );
        assert_eq!(cue.line_anchor, Anchor::Start);
        assert_eq!(cue.position_anchor, Anchor::End);
    }

    #[test]
    fn test_alignment_on_second_line() {
        let cue = parse_subrip_cue(&["First line", "{\\an8}Second line"]);
        assert_eq!(cue.plain_text(), "First line\nSecond line");
        assert_eq!(cue.line_anchor, Anchor::Start);
        assert_eq!(cue.position_anchor, Anchor::Middle);
    }

    #[test]
    fn test_lines_are_trimmed_and_joined() {
        let cue = parse_subrip_cue(&["  padded  ", "\tline two"]);
        assert_eq!(cue.plain_text(), "padded\nline two");
    }

    #[test]
    fn test_emphasis_spans() {
        let text = parse_html_markup("<b>bold</b> and <i>it<U>alic</u></i>");
        assert_eq!(text.text, "bold and italic");
        assert_eq!(
            text.spans,
            vec![
                StyleSpan {
                    start: 0,
                    end: 4,
                    style: TextStyle::Bold
                },
                StyleSpan {
                    start: 9,
                    end: 15,
                    style: TextStyle::Italic
                },
                StyleSpan {
                    start: 11,
                    end: 15,
                    style: TextStyle::Underline
                },
            ]
        );
        assert_eq!(text.styles_at(12), vec![TextStyle::Italic, TextStyle::Underline]);
    }

    #[test]
    fn test_unmatched_closer_ignored_and_unclosed_runs_to_end() {
        let text = parse_html_markup("plain</b> then <i>open");
        assert_eq!(text.text, "plain then open");
        assert_eq!(
            text.spans,
            vec![StyleSpan {
                start: 11,
                end: 15,
                style: TextStyle::Italic
            }]
        );
    }

    #[test]
    fn test_font_tags_stripped_and_stray_brackets_kept() {
        let text = parse_html_markup("<font color=\"#ff0000\">red</font> 1 < 2 > 0 <3");
        assert_eq!(text.text, "red 1 < 2 > 0 <3");
        assert!(text.spans.is_empty());
    }

    #[test]
    fn test_entities() {
        let text = parse_html_markup("Tom &amp; Jerry &lt;3 &bogus; &");
        assert_eq!(text.text, "Tom & Jerry <3 &bogus; &");
    }
}
