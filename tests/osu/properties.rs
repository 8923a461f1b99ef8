use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

fn beatmap_with(general: &[&str], hit_objects: &[&str]) -> OsuOutput {
    let mut lines = vec!["osu file format v14", "[General]"];
    lines.extend_from_slice(general);
    lines.extend_from_slice(&["[Metadata]", "[Difficulty]", "[TimingPoints]", "[HitObjects]"]);
    lines.extend_from_slice(hit_objects);
    parse_osu(&lines, default_config())
}

#[test]
fn test_general_scalars() {
    let beatmap = beatmap_with(&["AudioLeadIn:1000", "Countdown:1"], &[])
        .beatmap
        .unwrap();
    assert_eq!(beatmap.general.audio_lead_in, 1000);
    assert_eq!(beatmap.general.countdown, CountdownType::Normal);
}

#[test]
fn test_deterministic() {
    let source = include_str!("files/mania_crlf.osu");
    assert_eq!(
        parse_osu_str(source, default_config()),
        parse_osu_str(source, default_config())
    );
}

#[test]
fn test_missing_colours_is_empty() {
    let output = beatmap_with(&[], &[]);
    assert_eq!(output.beatmap.unwrap().colours, vec![]);
    assert_eq!(output.warnings, vec![]);
}

#[test]
fn test_missing_difficulty_is_fatal() {
    let lines = [
        "osu file format v14",
        "[General]",
        "[Metadata]",
        "[TimingPoints]",
        "[HitObjects]",
    ];
    let error = parse_osu(&lines, default_config()).beatmap.unwrap_err();
    assert_eq!(error, ParseError::MissingSection(Section::Difficulty));
    assert!(error.to_string().contains("Difficulty"));
}

#[test]
fn test_missing_version_is_fatal() {
    let output = parse_osu(&["[General]", "Mode: 0"], default_config());
    assert_eq!(output.beatmap, Err(ParseError::MissingVersion));
}

#[test]
fn test_broken_mandatory_value_is_fatal() {
    let output = beatmap_with(&["Mode: 9"], &[]);
    assert_eq!(
        output.beatmap,
        Err(ParseError::InvalidValue {
            section: Section::General,
            key: "Mode".to_owned(),
            value: "9".to_owned(),
            line: 3,
            reason: ParseWarning::OutOfRange {
                field: "Mode".to_owned(),
                value: 9,
            },
        })
    );
}

#[test]
fn test_volume_clamping() {
    let lines = [
        "osu file format v14",
        "[General]",
        "[Metadata]",
        "[Difficulty]",
        "[TimingPoints]",
        "0,500,4,1,0,150,1,0",
        "100,500,4,1,0,-5,1,0",
        "[HitObjects]",
    ];
    let beatmap = parse_osu(&lines, default_config()).beatmap.unwrap();
    let volumes: Vec<_> = beatmap
        .timing_points
        .iter()
        .map(|point| point.volume.get())
        .collect();
    assert_eq!(volumes, vec![100, 0]);
}

#[test]
fn test_hit_object_dispatch() {
    let output = beatmap_with(
        &[],
        &[
            "256,192,1000,1,0,0:0:0:0:",
            "100,100,2000,2,0,P|150:50|200:100|250:150,2,300,0|2|0,0:0|0:0|0:0,0:0:0:0:",
        ],
    );
    let beatmap = output.beatmap.unwrap();
    assert_eq!(output.warnings, vec![]);
    assert_eq!(beatmap.hit_objects[0].kind, HitObjectKind::Circle);
    let HitObjectKind::Slider(slider) = &beatmap.hit_objects[1].kind else {
        panic!("expected a slider");
    };
    assert_eq!(slider.curve, CurveKind::PerfectCircle);
    // pipe tokens minus the curve tag
    assert_eq!(slider.control_points.len(), 3);
    assert_eq!(slider.edge_sounds.len(), slider.slides as usize + 1);
    assert_eq!(slider.edge_sets.len(), 3);
}

#[test]
fn test_too_many_slides_drops_the_line() {
    let line = format!("100,100,2000,2,0,L|200:100,{},100", MAX_SLIDES + 1);
    let output = beatmap_with(&[], &[line.as_str()]);
    assert_eq!(output.beatmap.unwrap().hit_objects, vec![]);
    assert_eq!(output.warnings.len(), 1);
    assert_eq!(output.warnings[0].line(), 7);
}

#[test]
fn test_warnings_are_sorted_by_line() {
    let lines = [
        "osu file format v14",
        "[HitObjects]",
        "broken",
        "[General]",
        "Unknown: 1",
        "[Metadata]",
        "Weird line",
        "[Difficulty]",
        "[TimingPoints]",
        "1,2",
    ];
    let output = parse_osu(&lines, default_config());
    assert!(output.beatmap.is_ok());
    let warning_lines: Vec<_> = output.warnings.iter().map(OsuWarning::line).collect();
    assert_eq!(warning_lines, vec![3, 5, 7, 10]);
    assert!(matches!(output.warnings[2], OsuWarning::Lex(_)));
}
