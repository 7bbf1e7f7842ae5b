//! End-to-end tests for the scan-release naming conventions.
//!
//! Each case pairs a raw folder or file name with the full record we expect
//! back, plus the canonical rendering where it differs from the input.

use shelfsort_parser::config::ParserConfig;
use shelfsort_parser::output::{CanonicalFormat, NameFormat};
use shelfsort_parser::{normalize_video_name, parse, render, ParsedName, Parser};

/// A single naming-convention case.
struct Case {
    input: &'static str,
    author: Option<&'static str>,
    group: Option<&'static str>,
    name: Option<&'static str>,
    tags: &'static [&'static str],
}

const FOLDER_CASES: &[Case] = &[
    Case {
        input: "[Group (Author)] Title [English] (Digital)",
        author: Some("Author"),
        group: Some("Group"),
        name: Some("Title"),
        tags: &["English", "Digital"],
    },
    Case {
        input: "[Author] Title",
        author: Some("Author"),
        group: None,
        name: Some("Title"),
        tags: &[],
    },
    Case {
        input: "Plain Title",
        author: None,
        group: None,
        name: Some("Plain Title"),
        tags: &[],
    },
    Case {
        input: "[Circle (A, B)] Shared Work",
        author: Some("A,B"),
        group: Some("Circle"),
        name: Some("Shared Work"),
        tags: &[],
    },
    Case {
        input: "[Group_(Author)]_Under_Scored_Title",
        author: Some("Author"),
        group: Some("Group"),
        name: Some("Under Scored Title"),
        tags: &[],
    },
    Case {
        input: "[] Orphaned Title",
        author: Some(""),
        group: None,
        name: Some("Orphaned Title"),
        tags: &[],
    },
    Case {
        input: "[Author] Don't Stop! ~Again~ [Japanese] {scanned}",
        author: Some("Author"),
        group: None,
        name: Some("Don't Stop! ~Again~"),
        tags: &["Japanese", "scanned"],
    },
];

#[test]
fn folder_naming_conventions() {
    for case in FOLDER_CASES {
        let record = parse(case.input, false);
        assert_eq!(record.author.as_deref(), case.author, "author of {:?}", case.input);
        assert_eq!(record.group.as_deref(), case.group, "group of {:?}", case.input);
        assert_eq!(record.name.as_deref(), case.name, "name of {:?}", case.input);
        assert_eq!(record.tags, case.tags, "tags of {:?}", case.input);
    }
}

#[test]
fn bracket_free_names_parse_whole() {
    for input in ["Title", "A Longer Title", "  Padded Title  ", "Hyphen - Title"] {
        let record = parse(input, false);
        assert_eq!(record.name.as_deref(), Some(input.trim()), "input {:?}", input);
        assert_eq!(record.author, None);
    }
}

#[test]
fn canonical_render_round_trips() {
    for raw in [
        "[Group (Author)] Title",
        "[Author] Title",
        "[Group (Author)] Title [English]",
        "Title",
    ] {
        let record = parse(raw, false);
        assert_eq!(render(&record).unwrap(), raw, "round trip of {:?}", raw);
    }
}

#[test]
fn rendering_is_stable_under_reparse() {
    let record = parse("[Group_(Author)]_Noisy__Title  [ENGLISH] (v2)", false);
    let once = render(&record).unwrap();
    assert_eq!(once, "[Group (Author)] Noisy Title [ENGLISH]");
    let twice = render(&parse(&once, false)).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn non_language_tags_never_promoted() {
    let record = parse("[Author] Title [Digital] {v2}", false);
    assert_eq!(render(&record).unwrap(), "[Author] Title");

    // Exact membership only: a tag containing a language name alongside
    // other words stays unpromoted.
    let record = parse("[Author] Title [English Translated]", false);
    assert_eq!(render(&record).unwrap(), "[Author] Title");
}

#[test]
fn opaque_container_name_becomes_author() {
    let record = parse("***", true);
    assert_eq!(record.author.as_deref(), Some("***"));
    assert_eq!(record.name, None);
    // Still renderable through the author-only arm.
    assert_eq!(render(&record).unwrap(), "[***]");
}

#[test]
fn underscore_replacement_is_configurable() {
    let parser = Parser::new(ParserConfig::builder().replace_underscores(false).build());
    let record = parser.parse("Snake_Case_Title", false);
    assert_eq!(record.name.as_deref(), Some("Snake_Case_Title"));
}

#[test]
fn sanitizer_applies_to_final_string() {
    let record = ParsedName {
        author: Some("Au?thor".into()),
        group: None,
        name: Some("Ti:tle".into()),
        tags: Vec::new(),
    };
    let rendered = CanonicalFormat::new()
        .sanitizer(|s| s.chars().filter(|c| !matches!(c, '?' | ':')).collect())
        .format(&record)
        .unwrap();
    assert_eq!(rendered, "[Author] Title");
}

#[test]
fn video_names_normalize_and_stay_fixed() {
    let cases = [
        ("Show_Name_01_[1280-720][Group_raw][ABCD1234].mkv", "Show_Name_01.mkv"),
        ("[SubGroup] Show - 03 [720p] [A1B2C3].mkv", "Show_-_03.mkv"),
        ("Show - 03 (BD 1080p).mkv", "Show_-_03.mkv"),
        ("Some  Show__ep 01.avi", "Some_Show_ep_01.avi"),
        ("Show_-_01.mkv", "Show_-_01.mkv"),
    ];
    for (input, expected) in cases {
        let normalized = normalize_video_name(input);
        assert_eq!(normalized, expected, "input {:?}", input);
        assert_eq!(normalize_video_name(&normalized), normalized, "idempotence of {:?}", input);
    }
}
