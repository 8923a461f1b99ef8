use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

fn roundtrip(source: &str) {
    let beatmap = parse_osu_str(source, default_config()).beatmap.unwrap();
    let text = beatmap.to_osu_string();
    let OsuOutput {
        beatmap: reparsed,
        warnings,
    } = parse_osu_str(&text, default_config());
    assert_eq!(reparsed, Ok(beatmap));
    assert_eq!(warnings, vec![]);
}

#[test]
fn test_roundtrip_standard() {
    roundtrip(include_str!("files/standard.osu"));
}

#[test]
fn test_roundtrip_mania() {
    // broken lines are already dropped by the first decode
    roundtrip(include_str!("files/mania_crlf.osu"));
}

#[test]
fn test_unparse_is_stable() {
    let beatmap = parse_osu_str(include_str!("files/standard.osu"), default_config())
        .beatmap
        .unwrap();
    let lines = beatmap.unparse();
    let again = parse_osu(&lines, default_config()).beatmap.unwrap().unparse();
    assert_eq!(lines, again);
}

#[test]
fn test_unparse_scalars() {
    let beatmap = parse_osu_str(include_str!("files/standard.osu"), default_config())
        .beatmap
        .unwrap();
    let lines = beatmap.unparse();
    for expected in [
        "osu file format v14",
        "[General]",
        "StackLeniency: 0.7",
        "WidescreenStoryboard: 1",
        "Countdown: 0",
        "Bookmarks: 1500,12000,24500",
        "Tags:example test electronic",
        "BeatmapID:123456",
        "ApproachRate:8.5",
        "0,0,\"bg.jpg\",0,0",
        "1,500,\"intro.mp4\",0,0",
        "1500,333.333333333333,4,2,1,60,1,0",
        "Combo2 : 0,202,0",
        "100,100,2000,2,2,B|150:50|200:100,1,140,2|0,0:0|1:2,0:0:0:0:",
        "256,192,3000,12,0,6000,0:0:0:0:",
    ] {
        assert!(
            lines.iter().any(|line| line == expected),
            "missing line `{expected}`"
        );
    }
}

#[test]
fn test_unparse_section_order() {
    let headers: Vec<_> = BeatMap::default()
        .unparse()
        .into_iter()
        .filter(|line| line.starts_with('['))
        .collect();
    let expected: Vec<_> = Section::ALL.iter().map(|section| section.header()).collect();
    assert_eq!(headers, expected);
}
