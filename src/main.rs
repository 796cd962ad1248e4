//! leveled-log command line front end.
//!
//! Logs one line built from the positional items, or with `--watch` logs every
//! stdin line while hot-reloading the config file.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

use leveled_log::config::{load_config, ConfigWatcher, LoggerConfig};
use leveled_log::observability::init_tracing;
use leveled_log::{BuildMode, LogLevel, Logger};

#[derive(Parser)]
#[command(name = "leveled-log")]
#[command(about = "Print leveled, formatted log lines to stdout", long_about = None)]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum severity emitted (overrides the config file)
    #[arg(short, long)]
    threshold: Option<LogLevel>,

    /// Run in release build mode: only errors are printed
    #[arg(long)]
    release: bool,

    /// Item separator (overrides the config file)
    #[arg(short, long)]
    separator: Option<String>,

    /// Read lines from stdin and log each one, reloading the config on change
    #[arg(long, requires = "config")]
    watch: bool,

    /// Print the effective configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Emit internal diagnostics on stderr
    #[arg(short, long)]
    verbose: bool,

    /// Severity of the line(s)
    #[arg(default_value = "info")]
    level: LogLevel,

    /// Items joined into the line
    items: Vec<String>,
}

impl Cli {
    fn apply_overrides(&self, config: &mut LoggerConfig) {
        if let Some(threshold) = self.threshold {
            config.level = threshold;
        }
        if self.release {
            config.build_mode = Some(BuildMode::Release);
        }
        if let Some(separator) = &self.separator {
            config.separator = separator.clone();
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    cli.apply_overrides(&mut config);

    if cli.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    let logger = Arc::new(Logger::from_config(&config));

    if !cli.watch {
        log_items(&logger, cli.level, &cli.items);
        return Ok(());
    }

    // `requires = "config"` guarantees the path.
    let Some(path) = cli.config.as_deref() else {
        return Ok(());
    };
    let (watcher, mut updates) = ConfigWatcher::new(path);
    let _watch_handle = watcher.run()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            Some(mut new_config) = updates.recv() => {
                cli.apply_overrides(&mut new_config);
                logger.apply_config(&new_config);
            }
            line = lines.next_line() => match line? {
                Some(line) => log_items(&logger, cli.level, &[line]),
                None => break,
            },
        }
    }

    tracing::debug!("stdin closed, exiting");
    Ok(())
}

fn log_items(logger: &Logger, level: LogLevel, items: &[String]) {
    let items: Vec<&dyn std::fmt::Display> =
        items.iter().map(|s| s as &dyn std::fmt::Display).collect();
    let site = leveled_log::call_site!();

    match level {
        LogLevel::Info => logger.info(&items, &site),
        LogLevel::Debug => logger.debug(&items, &site),
        LogLevel::Warning => logger.warning(&items, &site),
        LogLevel::Error => logger.error(&items, &site),
    }
}
