use osu_rs::osu::prelude::*;
use pretty_assertions::assert_eq;

const SOURCE: &str = "osu file format v14
[General]
Mode: 1
Mode: 3
[Metadata]
Title:First
Title:Second
[Difficulty]
[TimingPoints]
[HitObjects]
";

fn parse_with(prompter: impl Prompter) -> OsuOutput {
    parse_osu_str(SOURCE, default_config().prompter(prompter))
}

#[test]
fn test_always_use_newer() {
    let OsuOutput { beatmap, warnings } = parse_with(AlwaysUseNewer);
    let beatmap = beatmap.unwrap();
    assert_eq!(beatmap.general.mode, GameMode::Mania);
    assert_eq!(beatmap.metadata.title, "Second");
    assert_eq!(warnings, vec![]);
}

#[test]
fn test_always_use_older() {
    let OsuOutput { beatmap, warnings } = parse_with(AlwaysUseOlder);
    let beatmap = beatmap.unwrap();
    assert_eq!(beatmap.general.mode, GameMode::Taiko);
    assert_eq!(beatmap.metadata.title, "First");
    assert_eq!(warnings, vec![]);
}

#[test]
fn test_always_warn_and_use_older() {
    let OsuOutput { beatmap, warnings } = parse_with(AlwaysWarnAndUseOlder);
    assert_eq!(beatmap.unwrap().metadata.title, "First");
    assert_eq!(
        warnings,
        vec![
            OsuWarning::Lex(LexWarningWithLine::new(
                LexWarning::DuplicateKey {
                    key: "Mode".to_owned(),
                    older_line: 3,
                },
                4,
            )),
            OsuWarning::Lex(LexWarningWithLine::new(
                LexWarning::DuplicateKey {
                    key: "Title".to_owned(),
                    older_line: 6,
                },
                7,
            )),
        ]
    );
}

#[test]
fn test_always_warn_and_use_newer() {
    let OsuOutput { beatmap, warnings } = parse_with(AlwaysWarnAndUseNewer);
    assert_eq!(beatmap.unwrap().general.mode, GameMode::Mania);
    assert_eq!(warnings.len(), 2);
}

/// Keeps the first title but lets other keys be overwritten.
struct KeepTitle;

impl Prompter for KeepTitle {
    fn handle_duplication(&self, duplication: KeyDuplication<'_>) -> DuplicationWorkaround {
        if duplication.key == "Title" {
            assert_eq!((duplication.older, duplication.newer), ("First", "Second"));
            DuplicationWorkaround::UseOlder
        } else {
            DuplicationWorkaround::UseNewer
        }
    }
}

#[test]
fn test_custom_prompter() {
    let beatmap = parse_with(&KeepTitle).beatmap.unwrap();
    assert_eq!(beatmap.general.mode, GameMode::Mania);
    assert_eq!(beatmap.metadata.title, "First");
}

#[test]
fn test_duplicates_differing_in_case() {
    let lines = [
        "osu file format v14",
        "[General]",
        "Mode: 1",
        "mode: 3",
        "[Metadata]",
        "[Difficulty]",
        "[TimingPoints]",
        "[HitObjects]",
    ];

    let older = parse_osu(&lines, default_config().prompter(AlwaysUseOlder));
    assert_eq!(older.beatmap.unwrap().general.mode, GameMode::Taiko);
    assert_eq!(older.warnings, vec![]);

    let warned = parse_osu(&lines, default_config().prompter(AlwaysWarnAndUseNewer));
    assert_eq!(warned.beatmap.unwrap().general.mode, GameMode::Mania);
    assert_eq!(
        warned.warnings,
        vec![OsuWarning::Lex(LexWarningWithLine::new(
            LexWarning::DuplicateKey {
                key: "mode".to_owned(),
                older_line: 3,
            },
            4,
        ))]
    );
}
