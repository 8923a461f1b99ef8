//! `.osu` beatmap decoder
//!
//! Decodes a beatmap file, renders its warnings with `ariadne` and prints a summary.
//! Set `RUST_LOG=debug` to see what each section processor read.

use std::path::PathBuf;

use clap::Parser;
use osu_rs::osu::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "decode_osu")]
#[command(about = "Decodes a .osu beatmap and reports what was read", long_about = None)]
struct Config {
    /// Beatmap file path
    #[arg(value_name = "FILE")]
    path: PathBuf,

    /// Report keys written twice in a section
    #[arg(long)]
    warn_duplicates: bool,

    /// Read the effects of timing points as bit flags instead of the legacy codes
    #[arg(long)]
    bit_flag_effects: bool,

    /// Print the beatmap re-encoded in canonical form
    #[arg(long)]
    reencode: bool,
}

fn main() -> Result<(), String> {
    env_logger::init();
    let config = Config::parse();

    let source = std::fs::read_to_string(&config.path)
        .map_err(|e| format!("cannot read {}: {e}", config.path.display()))?;
    let name = config.path.display().to_string();

    let prompter: &dyn Prompter = if config.warn_duplicates {
        &AlwaysWarnAndUseNewer
    } else {
        &AlwaysUseNewer
    };
    let effects = if config.bit_flag_effects {
        EffectsEncoding::BitFlags
    } else {
        EffectsEncoding::Legacy
    };
    let parse_config = default_config().prompter(prompter).effects(effects);

    let OsuOutput { beatmap, warnings } = parse_osu_str(&source, parse_config);
    emit_osu_warnings(&name, &source, &warnings);

    let beatmap = match beatmap {
        Ok(beatmap) => beatmap,
        Err(error) => {
            let simple = SimpleSource::new(&name, &source);
            let _ = error
                .to_report(&simple)
                .eprint((name.clone(), ariadne::Source::from(source.as_str())));
            return Err(error.to_string());
        }
    };

    print_summary(&beatmap, warnings.len());

    if config.reencode {
        let unparse_config = UnparseConfig {
            effects,
            line_ending: LineEnding::Lf,
        };
        print!("{}", beatmap.to_osu_string_with(&unparse_config));
    }
    Ok(())
}

fn print_summary(beatmap: &BeatMap, warnings: usize) {
    let metadata = &beatmap.metadata;
    println!("format: v{}", beatmap.format_version);
    println!(
        "{} - {} [{}] by {}",
        metadata.artist, metadata.title, metadata.version, metadata.creator
    );
    println!("mode: {:?}", beatmap.general.mode);
    println!(
        "difficulty: HP {} CS {} OD {} AR {}",
        beatmap.difficulty.hp_drain_rate,
        beatmap.difficulty.circle_size,
        beatmap.difficulty.overall_difficulty,
        beatmap.difficulty.approach_rate,
    );
    if let Some(bpm) = beatmap
        .uninherited_timing_points()
        .next()
        .and_then(TimingPoint::bpm)
    {
        println!("bpm: {bpm:.2}");
    }

    let mut counts = [0usize; 4];
    for object in &beatmap.hit_objects {
        let index = match object.kind {
            HitObjectKind::Circle => 0,
            HitObjectKind::Slider(_) => 1,
            HitObjectKind::Spinner { .. } => 2,
            HitObjectKind::ManiaHold { .. } => 3,
        };
        counts[index] += 1;
    }
    println!(
        "objects: {} circles, {} sliders, {} spinners, {} holds",
        counts[0], counts[1], counts[2], counts[3]
    );
    println!(
        "events: {}, timing points: {}, colours: {}",
        beatmap.events.len(),
        beatmap.timing_points.len(),
        beatmap.colours.len()
    );
    println!("warnings: {warnings}");
}
