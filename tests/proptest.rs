//! Property-based tests for the transcript pipeline.

use chrono::NaiveTime;
use kakaopack::config::{Markers, TranscriptConfig};
use kakaopack::parser::KakaoParser;
use kakaopack::parsing::{LineGrammar, RawLine, collapse_whitespace, convert_time, reassemble};
use proptest::prelude::*;

const DAY: &str = "--------------- 2023년 5월 1일 월요일 ---------------";

fn grammar() -> LineGrammar {
    LineGrammar::new(&Markers::default()).unwrap()
}

fn token(marker: &str, hour12: u32, minute: u32) -> String {
    format!("{} {}:{:02}", marker, hour12, minute)
}

/// Minutes since midnight, enumerated in clock order: 오전 12:00 .. 오후 11:59.
fn sweep() -> Vec<(String, u32)> {
    let mut out = Vec::with_capacity(24 * 60);
    for (marker, base) in [("오전", 0), ("오후", 12)] {
        for hour in [12, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11] {
            for minute in 0..60 {
                let hour24 = if hour == 12 { base } else { base + hour };
                out.push((token(marker, hour, minute), hour24 * 60 + minute));
            }
        }
    }
    out
}

/// Body text without action phrases, headers or leading brackets.
fn arb_body_line() -> impl Strategy<Value = String> {
    "[a-z가-힣0-9 ]{0,20}"
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z가-힣]{1,8}"
}

#[derive(Debug, Clone)]
enum Event {
    Message {
        author: String,
        pm: bool,
        hour: u32,
        minute: u32,
        lines: Vec<String>,
    },
    Left(String),
    Joined(String),
    Hidden,
}

fn arb_event() -> impl Strategy<Value = Event> {
    prop_oneof![
        4 => (arb_name(), any::<bool>(), 1u32..=12, 0u32..60, prop::collection::vec(arb_body_line(), 1..4))
            .prop_map(|(author, pm, hour, minute, lines)| Event::Message { author, pm, hour, minute, lines }),
        1 => arb_name().prop_map(Event::Left),
        1 => arb_name().prop_map(Event::Joined),
        1 => Just(Event::Hidden),
    ]
}

fn render(events: &[Event]) -> String {
    let mut out = vec![DAY.to_string()];
    for event in events {
        match event {
            Event::Message { author, pm, hour, minute, lines } => {
                let marker = if *pm { "오후" } else { "오전" };
                out.push(format!("[{}] [{}] {}", author, token(marker, *hour, *minute), lines[0]));
                out.extend(lines[1..].iter().map(|l| format!("x{}", l)));
            }
            Event::Left(name) => out.push(format!("{}님이 나갔습니다.", name)),
            Event::Joined(name) => out.push(format!("{}님이 들어왔습니다.", name)),
            Event::Hidden => out.push("채팅방 관리자가 메시지를 가렸습니다.".to_string()),
        }
    }
    out.join("\n")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    // ============================================
    // TIME CONVERSION
    // ============================================

    /// Every valid 12-hour token converts to the expected 24-hour time
    #[test]
    fn time_conversion_matches_arithmetic(pm in any::<bool>(), hour in 1u32..=12, minute in 0u32..60) {
        let marker = if pm { "오후" } else { "오전" };
        let time = convert_time(&token(marker, hour, minute), &Markers::default()).unwrap();
        let expected_hour = (hour % 12) + if pm { 12 } else { 0 };
        prop_assert_eq!(time, NaiveTime::from_hms_opt(expected_hour, minute, 0).unwrap());
    }

    /// Hours outside 1..=12 are rejected
    #[test]
    fn time_conversion_rejects_bad_hours(hour in 13u32..100, minute in 0u32..60) {
        prop_assert!(convert_time(&token("오전", hour, minute), &Markers::default()).is_err());
    }

    // ============================================
    // REASSEMBLY
    // ============================================

    /// Joining a unit's physical lines reproduces its text
    #[test]
    fn reassembly_is_lossless(first in arb_body_line(), rest in prop::collection::vec(arb_body_line(), 0..5)) {
        let mut lines = vec![RawLine::new(1, format!("[Alice] [오전 9:05] {}", first.trim()))];
        lines.extend(
            rest.iter()
                .enumerate()
                .map(|(i, l)| RawLine::new(i + 2, format!("x{}", l.trim()))),
        );

        let units = reassemble(&lines, &grammar());
        prop_assert_eq!(units.len(), 1);

        let joined: Vec<_> = lines.iter().map(|l| l.text.as_str()).collect();
        prop_assert_eq!(collapse_whitespace(&units[0].text), collapse_whitespace(&joined.join(" ")));
        prop_assert_eq!(units[0].span, lines.len());
    }

    // ============================================
    // WHOLE PIPELINE
    // ============================================

    /// One record per event, classified consistently
    #[test]
    fn classification_is_complete(events in prop::collection::vec(arb_event(), 0..20)) {
        let parser = KakaoParser::with_config(TranscriptConfig::new().with_header(false));
        let records = parser.parse_str(&render(&events)).unwrap();

        prop_assert_eq!(records.len(), events.len());
        for (record, event) in records.iter().zip(&events) {
            prop_assert!(record.is_talking_activity ^ record.action_msg.is_some());
            prop_assert_eq!(record.is_talking_activity, matches!(event, Event::Message { .. }));
            prop_assert_eq!(record.wrote_at.is_some(), record.is_talking_activity);
            prop_assert_eq!(record.talk_date.to_string(), "2023-05-01");
        }
    }

    /// Message bodies equal the collapsed concatenation of their lines
    #[test]
    fn message_bodies_are_preserved(events in prop::collection::vec(arb_event(), 1..10)) {
        let parser = KakaoParser::with_config(TranscriptConfig::new().with_header(false));
        let records = parser.parse_str(&render(&events)).unwrap();

        for (record, event) in records.iter().zip(&events) {
            if let Event::Message { author, lines, .. } = event {
                let mut parts = vec![lines[0].clone()];
                parts.extend(lines[1..].iter().map(|l| format!("x{}", l)));
                let body = collapse_whitespace(&parts.join(" "));

                prop_assert_eq!(&record.writer, author);
                prop_assert_eq!(record.msg.clone(), (!body.is_empty()).then_some(body));
            }
        }
    }

    /// Parsing never panics on arbitrary text
    #[test]
    fn parse_never_panics(text in "\\PC{0,200}") {
        let parser = KakaoParser::with_config(TranscriptConfig::new().with_header(false));
        let _ = parser.parse_str(&text);
    }
}

// ============================================
// Deterministic checks
// ============================================

#[test]
fn time_sweep_is_monotonic() {
    let markers = Markers::default();
    let minutes: Vec<u32> = sweep()
        .iter()
        .map(|(tok, expected)| {
            let time = convert_time(tok, &markers).unwrap();
            let got = time.format("%H").to_string().parse::<u32>().unwrap() * 60
                + time.format("%M").to_string().parse::<u32>().unwrap();
            assert_eq!(got, *expected, "token {}", tok);
            got
        })
        .collect();

    assert_eq!(minutes.len(), 24 * 60);
    assert!(minutes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn time_reference_table() {
    let markers = Markers::default();
    let table = [
        ("오전 12:00", "00:00"),
        ("오전 12:59", "00:59"),
        ("오전 1:00", "01:00"),
        ("오전 9:05", "09:05"),
        ("오전 11:59", "11:59"),
        ("오후 12:00", "12:00"),
        ("오후 1:05", "13:05"),
        ("오후 11:59", "23:59"),
    ];
    for (token, expected) in table {
        let time = convert_time(token, &markers).unwrap();
        assert_eq!(time.format("%H:%M").to_string(), expected, "token {}", token);
    }
}

#[test]
fn known_limitation_quoted_action_phrase_splits_message() {
    let lines = [
        RawLine::new(1, "[Alice] [오전 9:05] he said"),
        RawLine::new(2, "Bob님이 나갔습니다. lol"),
    ];
    let units = reassemble(&lines, &grammar());
    assert_eq!(units.len(), 2);
    assert_eq!(units[0].text, "[Alice] [오전 9:05] he said");
}
