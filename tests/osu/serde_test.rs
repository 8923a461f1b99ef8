use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_beatmap_json_roundtrip() {
    let output = parse_osu_str(include_str!("files/standard.osu"), default_config());
    let beatmap = output.beatmap.unwrap();

    let json = serde_json::to_value(&beatmap).expect("failed to serialize beatmap");
    assert_eq!(json["metadata"]["title"], "Example Song");
    let restored: BeatMap = serde_json::from_value(json).expect("failed to deserialize beatmap");
    assert_eq!(restored, beatmap);
}

#[test]
fn test_warnings_json_roundtrip() {
    let output = parse_osu_str(include_str!("files/mania_crlf.osu"), default_config());
    assert!(!output.warnings.is_empty());

    let json = serde_json::to_value(&output.warnings).expect("failed to serialize warnings");
    let restored: Vec<OsuWarning> =
        serde_json::from_value(json).expect("failed to deserialize warnings");
    assert_eq!(restored, output.warnings);
}

#[test]
fn test_flags_serialize_as_names() {
    let json = serde_json::to_string(&(HitSoundType::WHISTLE | HitSoundType::CLAP)).unwrap();
    assert_eq!(json, "\"WHISTLE | CLAP\"");
}
