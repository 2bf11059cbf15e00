mod report;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use daysplit_core::{
    compute_rates, save_cleaned_csv, save_rates_csv, BuildOptions, DatasetSource, DayStory,
    DayWindow, FileCensusRepository, FileDatasetRepository, IntervalFileRepository, Scenario,
    StoryConfig, StoryUseCase,
};
use log::{debug, info, LevelFilter};

#[derive(Parser)]
#[command(name = "daysplit")]
#[command(about = "Groups a working mom's day into activity blocks, with and without a kid", long_about = None)]
struct Cli {
    /// Slot dataset (CSV, or JSON records)
    #[arg(long, global = true)]
    data: Option<PathBuf>,
    /// Interval dataset (JSON tracks), used instead of --data
    #[arg(long, global = true)]
    intervals: Option<PathBuf>,
    /// Config file (default ~/.daysplit/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// How much of the day the grid covers
    #[arg(long, global = true, value_enum)]
    window: Option<WindowArg>,
    /// Debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Clone, Copy, ValueEnum)]
enum ScenarioArg {
    WithKid,
    WithoutKid,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::WithKid => Scenario::WithKid,
            ScenarioArg::WithoutKid => Scenario::WithoutKid,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum WindowArg {
    /// 4:00 through 3:45 the next morning
    Full,
    /// 4:00 through 0:00
    Midnight,
}

impl From<WindowArg> for DayWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Full => DayWindow::FullDay,
            WindowArg::Midnight => DayWindow::UntilMidnight,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Show the activity blocks of each scenario
    Groups {
        #[arg(long, value_enum)]
        scenario: Option<ScenarioArg>,
    },
    /// Hours per category and the with/without kid comparison
    Summary,
    /// Times where either scenario starts a new block
    Transitions,
    /// Print the whole day story as JSON
    Export {
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the cleaned slot grid as CSV
    Clean {
        #[arg(long)]
        out: PathBuf,
    },
    /// Employment rates of working mothers from census estimates
    Rates {
        path: PathBuf,
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn init_logging(verbose: bool) {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    let mut builder = env_logger::Builder::from_default_env();
    if verbose || std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).init();
}

fn load_config(cli: &Cli) -> Result<StoryConfig> {
    let mut config = StoryConfig::resolve(cli.config.as_deref())?;
    if let Some(path) = &cli.data {
        config.data_path = path.clone();
    }
    if let Some(path) = &cli.intervals {
        config.intervals_path = Some(path.clone());
    }
    if let Some(window) = cli.window {
        config.window = window.into();
    }
    debug!("Config: {:?}", config);
    Ok(config)
}

fn show_story(story: &DayStory, command: &Commands) -> Result<()> {
    match command {
        Commands::Groups { scenario } => {
            report::source_note(story);
            let scenarios: Vec<Scenario> = match scenario {
                Some(s) => vec![Scenario::from(*s)],
                None => Scenario::ALL.to_vec(),
            };
            for scenario in scenarios {
                let groups = match scenario {
                    Scenario::WithKid => &story.groups.with_kid,
                    Scenario::WithoutKid => &story.groups.without_kid,
                };
                report::show_groups(scenario.label(), groups);
            }
        }
        Commands::Summary => {
            report::source_note(story);
            report::show_summary(&story.with_kid);
            report::show_summary(&story.without_kid);
            report::show_comparisons(&story.comparisons);
        }
        Commands::Transitions => {
            report::source_note(story);
            report::show_transitions(&story.transitions);
        }
        Commands::Export { out } => {
            let json = serde_json::to_string_pretty(story)?;
            match out {
                Some(path) => {
                    fs::write(path, json)
                        .with_context(|| format!("Could not write {}", path.display()))?;
                    info!("Story written to {}", path.display());
                }
                None => println!("{}", json),
            }
        }
        Commands::Clean { .. } | Commands::Rates { .. } => {}
    }
    Ok(())
}

fn run_story<S: DatasetSource>(source: S, config: &StoryConfig, command: &Commands) -> Result<()> {
    let usecase = StoryUseCase::new(source, BuildOptions::from_config(config));

    if let Commands::Clean { out } = command {
        // No fallback: only real data gets cleaned.
        let rows = usecase.rows()?;
        save_cleaned_csv(&rows, &config.schema, out)?;
        println!("{} slots written to {}", rows.len(), out.display());
        return Ok(());
    }

    let story = usecase.load();
    show_story(&story, command)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let default_command = Commands::Summary;
    let command = cli.command.as_ref().unwrap_or(&default_command);

    if let Commands::Rates { path, out } = command {
        let records = FileCensusRepository::new(path.clone()).list()?;
        let rates = compute_rates(&records);
        report::show_rates(&rates);
        if let Some(out) = out {
            save_rates_csv(&rates, out)?;
            println!("Rates written to {}", out.display());
        }
        return Ok(());
    }

    let config = load_config(&cli)?;
    match &config.intervals_path {
        Some(path) => run_story(IntervalFileRepository::new(path.clone()), &config, command),
        None => run_story(
            FileDatasetRepository::new(config.data_path.clone(), config.schema.clone()),
            &config,
            command,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_window_flag_is_checked_by_clap() {
        let cli = Cli::try_parse_from(["daysplit", "--window", "full", "summary"]).unwrap();
        assert_eq!(cli.window.map(DayWindow::from), Some(DayWindow::FullDay));

        assert!(Cli::try_parse_from(["daysplit", "--window", "week", "summary"]).is_err());
    }

    #[test]
    fn test_window_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"window": "fullDay"}"#).unwrap();

        let config_arg = path.to_string_lossy().to_string();
        let cli = Cli::try_parse_from([
            "daysplit",
            "--config",
            config_arg.as_str(),
            "--window",
            "midnight",
            "groups",
        ])
        .unwrap();
        assert_eq!(load_config(&cli).unwrap().window, DayWindow::UntilMidnight);
    }
}
