use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn test_standard() {
    let source = include_str!("files/standard.osu");
    let OsuOutput { beatmap, warnings } = parse_osu_str(source, default_config());
    let beatmap = beatmap.unwrap();
    assert_eq!(warnings, vec![]);

    assert_eq!(beatmap.format_version, 14);
    assert_eq!(beatmap.general.audio_filename, "audio.mp3");
    assert_eq!(beatmap.general.preview_time, 45200);
    assert_eq!(beatmap.general.countdown, CountdownType::None);
    assert_eq!(beatmap.general.sample_set, "Soft");
    assert_eq!(beatmap.general.mode, GameMode::Osu);
    assert!(beatmap.general.widescreen_storyboard);
    assert!(beatmap.general.story_fire_in_front);

    assert_eq!(beatmap.editor.bookmarks, vec![1500, 12000, 24500]);
    assert_eq!(beatmap.editor.beat_divisor, 4);
    assert_eq!(beatmap.editor.timeline_zoom, 1.8);

    assert_eq!(beatmap.metadata.title, "Example Song");
    assert_eq!(beatmap.metadata.title_unicode, "エグザンプル");
    assert_eq!(beatmap.metadata.source, "");
    assert_eq!(beatmap.metadata.tags, vec!["example", "test", "electronic"]);
    assert!(beatmap.metadata.has_tag("test"));
    assert_eq!(beatmap.metadata.beatmap_id, 123456);
    assert_eq!(beatmap.metadata.beatmap_set_id, 65432);

    assert_eq!(beatmap.difficulty.approach_rate, 8.5);
    assert_eq!(beatmap.difficulty.slider_multiplier, 1.6);

    assert_eq!(
        beatmap.events,
        vec![
            Event::Background {
                start_time: 0,
                filename: "bg.jpg".to_owned(),
                offset: PixelOffset::new(0, 0),
            },
            Event::Video {
                start_time: 500,
                filename: "intro.mp4".to_owned(),
                offset: PixelOffset::new(0, 0),
            },
            Event::Break {
                start_time: 12000,
                end_time: 15000,
            },
        ]
    );

    assert_eq!(beatmap.timing_points.len(), 3);
    let bpm = beatmap.timing_points[0].bpm().unwrap();
    assert!((bpm - 180.0).abs() < 1e-9);
    assert!(beatmap.timing_points[1].is_kiai());
    assert_eq!(beatmap.uninherited_timing_points().count(), 1);

    assert_eq!(beatmap.colours.len(), 3);
    assert_eq!(beatmap.combo_colours().count(), 2);
    assert_eq!(beatmap.colours[1].colour, Rgb::new(0, 202, 0));

    assert_eq!(beatmap.hit_objects.len(), 4);
    let kinds: Vec<_> = beatmap
        .hit_objects
        .iter()
        .map(|object| object.kind.shape_flag())
        .collect();
    assert_eq!(
        kinds,
        vec![
            HitObjectFlags::CIRCLE,
            HitObjectFlags::SLIDER,
            HitObjectFlags::CIRCLE,
            HitObjectFlags::SPINNER,
        ]
    );
    let HitObjectKind::Slider(slider) = &beatmap.hit_objects[1].kind else {
        panic!("expected a slider");
    };
    assert_eq!(slider.control_points.len(), 2);
    assert_eq!(slider.edge_sounds, vec![HitSoundType::WHISTLE, HitSoundType::empty()]);
    assert_eq!(
        slider.edge_sets[1],
        EdgeSet {
            normal_bank: SampleBank::Normal,
            addition_bank: SampleBank::Soft,
        }
    );
    assert_eq!(beatmap.hit_objects[3].explicit_end_time(), Some(6000));
    assert_eq!(beatmap.mania_key_count(), None);
    assert_eq!(beatmap.mania_columns().count(), 0);
}

#[test]
fn test_mania_with_broken_lines() {
    let source = include_str!("files/mania_crlf.osu");
    let OsuOutput { beatmap, warnings } = parse_osu_str(source, default_config());
    let beatmap = beatmap.unwrap();

    assert_eq!(beatmap.format_version, 12);
    assert_eq!(beatmap.general.audio_lead_in, 1000);
    assert_eq!(beatmap.general.countdown, CountdownType::Normal);
    assert_eq!(beatmap.general.mode, GameMode::Mania);
    assert_eq!(beatmap.editor, Editor::default());
    assert_eq!(beatmap.metadata.version, "4K Normal");
    assert_eq!(beatmap.difficulty.overall_difficulty, 8.0);
    // absent keys keep their defaults
    assert_eq!(beatmap.difficulty.approach_rate, 5.0);
    assert_eq!(beatmap.colours, vec![]);

    assert_eq!(beatmap.events.len(), 1);
    assert_eq!(beatmap.timing_points.len(), 2);
    assert_eq!(beatmap.timing_points[0].volume, Volume::MAX);
    assert_eq!(beatmap.timing_points[1].volume.get(), 0);

    assert_eq!(beatmap.hit_objects.len(), 3);
    assert_eq!(
        beatmap.hit_objects[1],
        HitObject {
            x: 192,
            y: 192,
            time: 1000,
            new_combo: false,
            combo_skip: 0,
            hit_sample: HitSample {
                volume: Volume::new(80),
                filename: "hold.wav".to_owned(),
                ..HitSample::default()
            },
            kind: HitObjectKind::ManiaHold { end_time: 1500 },
        }
    );
    assert_eq!(
        beatmap.hit_objects[2].hit_sample.sound_type,
        HitSoundType::WHISTLE
    );
    assert_eq!(beatmap.hit_objects[2].explicit_end_time(), Some(1800));
    assert_eq!(beatmap.mania_key_count(), Some(4));
    let columns: Vec<_> = beatmap
        .mania_columns()
        .map(|(object, column)| (object.time, column))
        .collect();
    assert_eq!(columns, vec![(500, 0), (1000, 1), (1200, 2)]);

    let lines: Vec<_> = warnings.iter().map(OsuWarning::line).collect();
    assert_eq!(lines, vec![9, 12, 27, 32, 38, 39]);
    assert_eq!(
        warnings[0],
        OsuWarning::Parse(ParseWarningWithLine::new(
            ParseWarning::UnknownKey {
                section: Section::General,
                key: "FancyKey".to_owned(),
            },
            9,
        ))
    );
    let contents: Vec<_> = warnings
        .iter()
        .filter_map(|warning| match warning {
            OsuWarning::Parse(warning) => Some(warning.content().clone()),
            _ => None,
        })
        .collect();
    assert_eq!(
        contents[1..],
        [
            ParseWarning::InvalidNumber {
                field: "BeatDivisor".to_owned(),
                value: "x".to_owned(),
            },
            ParseWarning::UnknownEventType("Sprite".to_owned()),
            ParseWarning::InvalidFieldCount {
                expected: "8".to_owned(),
                found: 3,
            },
            ParseWarning::InvalidNumber {
                field: "time".to_owned(),
                value: "abc".to_owned(),
            },
            ParseWarning::UnknownHitObjectType(0),
        ]
    );
}
