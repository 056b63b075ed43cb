use std::path::{Path, PathBuf};

use anyhow::Context;
use bluezone_edit::{BlueZoneOptions, FontInfoEditState, Zone};
use bluezone_engine::{scene::DisplayItem, ZoneFamily};
use clap::{Parser, Subcommand};
use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming};

use crate::script::{Replay, Script};

mod script;

#[derive(Parser)]
#[command(version, about = "Replays blue zone editing sessions against font info files.")]
pub struct Cli {
    #[arg(help = "Log to stderr only, don't write a log file.", long, default_value_t = false)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Replay a recorded session and write the resulting zones")]
    Replay {
        #[arg(help = "Font info file (TOML).")]
        info: PathBuf,

        #[arg(help = "Event script (TOML).")]
        script: PathBuf,

        #[arg(help = "Where to write the edited font info, defaults to printing only.", long, short)]
        output: Option<PathBuf>,

        #[arg(help = "Overwrite the input file.", long, default_value_t = false, conflicts_with = "output")]
        in_place: bool,

        #[arg(help = "Print the drawn overlay after the last event.", long, default_value_t = false)]
        display_list: bool,
    },

    #[command(about = "List the zones of a font info file")]
    Show { info: PathBuf },

    #[command(about = "Merge overlapping zones and sort both zone lists")]
    Normalize {
        info: PathBuf,

        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    #[command(about = "Print the editor options, optionally storing the defaults")]
    Options {
        #[arg(long, default_value_t = false)]
        store_defaults: bool,
    },
}

fn start_logger(to_file: bool) -> Option<LoggerHandle> {
    let logger = match Logger::try_with_env_or_str("info") {
        Ok(logger) => logger,
        Err(err) => {
            eprintln!("Failed to set up logging: {err}");
            return None;
        }
    };

    let log_dir = BlueZoneOptions::log_dir().filter(|dir| std::fs::create_dir_all(dir).is_ok());
    let logger = match log_dir {
        Some(log_dir) if to_file => logger
            .log_to_file(FileSpec::default().directory(&log_dir).basename("bluezone_replay").suffix("log").suppress_timestamp())
            .rotate(Criterion::Size(64 * 1024), Naming::Numbers, Cleanup::KeepLogFiles(3))
            .duplicate_to_stderr(flexi_logger::Duplicate::Warn),
        _ => logger.log_to_stderr(),
    };

    match logger.start() {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Failed to start logger: {err}");
            None
        }
    }
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    let _logger = start_logger(!args.no_log_file);

    match args.command {
        Commands::Replay {
            info,
            script,
            output,
            in_place,
            display_list,
        } => {
            let output = if in_place { Some(info.clone()) } else { output };
            replay(&info, &script, output.as_deref(), display_list)
        }
        Commands::Show { info } => show(&info),
        Commands::Normalize { info, output } => normalize(&info, output.as_deref()),
        Commands::Options { store_defaults } => {
            let options = if store_defaults {
                let options = BlueZoneOptions::default();
                options.store_persistent();
                options
            } else {
                BlueZoneOptions::load()
            };
            if let Some(path) = BlueZoneOptions::config_file() {
                println!("# {}", path.display());
            }
            print!("{}", toml::to_string_pretty(&options)?);
            Ok(())
        }
    }
}

fn load_document(info: &Path) -> anyhow::Result<FontInfoEditState> {
    FontInfoEditState::load(info).with_context(|| format!("can't load font info {}", info.display()))
}

fn replay(info: &Path, script: &Path, output: Option<&Path>, display_list: bool) -> anyhow::Result<()> {
    let script = Script::load(script)?;
    let mut replay = Replay::new(load_document(info)?, BlueZoneOptions::load());
    log::info!("replaying {} events on {}", script.events.len(), info.display());

    replay.start();
    replay.run(&script)?;

    if display_list {
        print_display_list(&replay);
    }
    replay.finish();

    let mut document = replay.document.lock();
    print_zone_lists(&document);
    if let Some(output) = output {
        document.save_as(output)?;
        log::info!("wrote {}", output.display());
    }
    Ok(())
}

fn show(info: &Path) -> anyhow::Result<()> {
    let mut replay = Replay::new(load_document(info)?, BlueZoneOptions::load());
    replay.start();
    for zone in replay.tool.zones() {
        println!("{}", describe_zone(zone));
    }
    Ok(())
}

fn normalize(info: &Path, output: Option<&Path>) -> anyhow::Result<()> {
    let mut replay = Replay::new(load_document(info)?, BlueZoneOptions::load());
    replay.start();
    replay.finish();

    let mut document = replay.document.lock();
    print_zone_lists(&document);
    if let Some(output) = output {
        document.save_as(output)?;
    } else if document.is_dirty() {
        log::warn!("zones changed, use --output to write them");
    }
    Ok(())
}

fn describe_zone(zone: &Zone) -> String {
    let marker = if zone.marks_top_edge() { "top" } else { "bottom" };
    format!("{zone} height {} index {} marker {marker}", zone.height(), zone.render_index())
}

fn print_zone_lists(document: &FontInfoEditState) {
    for family in ZoneFamily::ALL {
        println!("{} = {:?}", family.key(), document.zone_values(family));
    }
}

fn print_display_list(replay: &Replay) {
    for item in &replay.tool.scene().display_list().items {
        match item {
            DisplayItem::Rect { origin, size, stroke, opacity, .. } => {
                let stroke = stroke.map_or(String::new(), |s| format!(" stroke {}", s.width));
                println!("rect {origin} {}x{}{stroke} opacity {opacity:.2}", size.width, size.height);
            }
            DisplayItem::Polygon { points, .. } => {
                let points: Vec<String> = points.iter().map(ToString::to_string).collect();
                println!("polygon {}", points.join(" "));
            }
            DisplayItem::Text { position, text, .. } => println!("text {position} {text:?}"),
        }
    }
}
