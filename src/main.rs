use clap::Parser;
use daylog::config::{LoggerConfig, load_config};
use daylog::logger::{self, LogLevel, Logger, init_logger};
use std::io::{self, BufRead};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "daylog")]
#[command(about = "Append messages to today's log file", long_about = None)]
struct Cli {
    /// JSON config file with `directory` and `level`
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for the day files (overrides the config)
    #[arg(long)]
    dir: Option<PathBuf>,

    /// Level for the messages: info or error (overrides the config)
    #[arg(short, long)]
    level: Option<LogLevel>,

    /// Messages to log; read one per line from stdin when omitted
    messages: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => LoggerConfig::default(),
    };
    if let Some(dir) = cli.dir {
        config.directory = dir;
    }
    if let Some(level) = cli.level {
        config.level = level;
    }

    let logger = init_logger(config)?;

    let result = if cli.messages.is_empty() {
        log_stdin(logger)
    } else {
        for message in &cli.messages {
            logger.log(message);
        }
        Ok(())
    };

    // Drain whatever was queued, even if stdin failed midway.
    logger::shutdown();
    Ok(result?)
}

fn log_stdin(logger: &dyn Logger) -> io::Result<()> {
    for line in io::stdin().lock().lines() {
        logger.log(&line?);
    }
    Ok(())
}
