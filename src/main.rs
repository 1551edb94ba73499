use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use clap::Parser;
use diary::app::App;
use diary::config::Config;
use diary::content::Diary;
use diary::cue::open_cue;
use diary::error::{AppError, AppResult};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Paged terminal diary: one page per screen, guided page turns.
#[derive(Debug, Parser)]
#[command(name = "diary", version, about)]
struct Args {
    /// Diary content file (TOML); the built-in diary is shown when omitted.
    #[arg(long, value_name = "FILE")]
    content: Option<PathBuf>,

    /// Config file; defaults to the platform config location.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Disable the page-turn sound.
    #[arg(long)]
    mute: bool,

    /// Write logs to this file.
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[tokio::main(flavor = "multi_thread")]
async fn main() {
    if let Err(err) = run(Args::parse()).await {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

async fn run(args: Args) -> AppResult<()> {
    let config = match &args.config {
        Some(path) => Config::load_from_path(path)?,
        None => Config::load()?,
    };
    if let Some(log_file) = args.log_file.as_deref().or(config.log.file.as_deref()) {
        init_tracing(&config.log.level, log_file)?;
    }

    let diary = match &args.content {
        Some(path) => Diary::load_from_path(path)?,
        None => Diary::built_in(),
    };
    info!(content = ?args.content, mute = args.mute, "Starting diary");

    let cue = open_cue(&config.cue, args.mute);
    let mut app = App::new(diary, config, cue)?;
    app.run().await
}

/// The terminal belongs to the UI, so logs only ever go to a file.
fn init_tracing(level: &str, path: &Path) -> AppResult<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| {
            AppError::io_with_context(source, format!("failed to open log file: {}", path.display()))
        })?;
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::builder()
            .parse(level)
            .unwrap_or_else(|_| EnvFilter::new("info"))
    });

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_filter(env_filter),
        )
        .init();
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use clap::Parser;

    use super::Args;

    #[test]
    fn parse_args_defaults_to_built_in_diary() {
        let args = Args::try_parse_from(["diary"]).expect("no args should parse");
        assert_eq!(args.content, None);
        assert_eq!(args.config, None);
        assert!(!args.mute);
        assert_eq!(args.log_file, None);
    }

    #[test]
    fn parse_args_accepts_all_flags() {
        let args = Args::try_parse_from([
            "diary",
            "--content",
            "journey.toml",
            "--config",
            "diary.toml",
            "--mute",
            "--log-file",
            "diary.log",
        ])
        .expect("flags should parse");
        assert_eq!(args.content, Some(PathBuf::from("journey.toml")));
        assert_eq!(args.config, Some(PathBuf::from("diary.toml")));
        assert!(args.mute);
        assert_eq!(args.log_file, Some(PathBuf::from("diary.log")));
    }

    #[test]
    fn parse_args_rejects_positional_and_unknown_flags() {
        assert!(Args::try_parse_from(["diary", "extra.pdf"]).is_err());
        assert!(Args::try_parse_from(["diary", "--zoom"]).is_err());
    }
}
