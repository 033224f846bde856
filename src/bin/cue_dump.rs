use cueparser::subtitles::format_timestamp;
use cueparser::{
    CuesWithTiming, SubripOptions, SubripParser, SubtitleFormat, SubtitleParser, TextEncoding,
};
use std::env;
use std::fs;
use std::io;
use std::path::Path;

struct Args {
    path: String,
    format: Option<SubtitleFormat>,
    json: bool,
    encoding: TextEncoding,
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Some(args) => args,
        None => {
            println!("Usage: cue_dump <file> [--format srt|wvtt] [--json] [--latin1|--utf16le|--utf16be]");
            println!("Example: cue_dump tests/testdata/subrip/typical.srt");
            return;
        }
    };

    if let Err(e) = dump_cues(&args) {
        println!("\n❌ Decode failed: {}", e);
        std::process::exit(1);
    }
}

fn parse_args(mut raw: impl Iterator<Item = String>) -> Option<Args> {
    let mut path = None;
    let mut format = None;
    let mut json = false;
    let mut encoding = TextEncoding::Utf8;
    while let Some(arg) = raw.next() {
        match arg.as_str() {
            "--format" => format = Some(SubtitleFormat::from_codec(&raw.next()?)?),
            "--json" => json = true,
            "--latin1" => encoding = TextEncoding::Latin1,
            "--utf16le" => encoding = TextEncoding::Utf16Le,
            "--utf16be" => encoding = TextEncoding::Utf16Be,
            _ if arg.starts_with("--") => return None,
            _ => path = Some(arg),
        }
    }
    Some(Args {
        path: path?,
        format,
        json,
        encoding,
    })
}

fn dump_cues(args: &Args) -> io::Result<()> {
    let data = fs::read(&args.path)?;
    let format = args
        .format
        .or_else(|| format_from_extension(&args.path))
        .unwrap_or(SubtitleFormat::Subrip);

    let mut parser: Box<dyn SubtitleParser> = match format {
        SubtitleFormat::Subrip => Box::new(SubripParser::with_options(SubripOptions {
            default_encoding: args.encoding,
            ..SubripOptions::default()
        })),
        SubtitleFormat::Mp4Webvtt => cueparser::create_parser(format),
    };
    let events = parser.parse_all(&data)?;

    if args.json {
        let json = serde_json::to_string_pretty(&events)
            .map_err(io::Error::other)?;
        println!("{}", json);
        return Ok(());
    }

    println!("📄 File: {}", args.path);
    println!("🎞️  Format: {}", format.name());
    println!("📏 Size: {} bytes, {} events", data.len(), events.len());
    println!();
    for event in &events {
        print_event(event);
    }
    Ok(())
}

fn format_from_extension(path: &str) -> Option<SubtitleFormat> {
    let ext = Path::new(path).extension()?.to_str()?;
    SubtitleFormat::from_codec(ext)
}

fn print_event(event: &CuesWithTiming) {
    let start = event
        .start_time_us
        .map(format_timestamp)
        .unwrap_or_else(|| "--:--:--,---".to_string());
    let end = event
        .end_time_us()
        .map(format_timestamp)
        .unwrap_or_else(|| "open".to_string());
    if event.cues.is_empty() {
        println!("⏱️  {} --> {}  (clear)", start, end);
        return;
    }
    println!("⏱️  {} --> {}", start, end);
    for cue in &event.cues {
        for line in cue.plain_text().lines() {
            println!("    📝 {}", line);
        }
        println!(
            "    📐 line {:?} {} ({:?}), position {} ({:?})",
            cue.line_type, cue.line, cue.line_anchor, cue.position, cue.position_anchor
        );
    }
}
