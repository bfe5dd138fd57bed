use calcpad::core::config::{self, CliOverrides};
use calcpad::core::theme::{Theme, ThemeStore};
use calcpad::tui;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "calcpad", about = "Four-function terminal calculator")]
struct Args {
    /// Theme for this run (not persisted until toggled with Ctrl+T)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Start with the calculator switched on
    #[arg(long)]
    on: bool,

    /// Where to write the log file
    #[arg(long, default_value = "calcpad.log")]
    log_file: PathBuf,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    log_level: LevelFilter,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger; stdout belongs to the terminal UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(args.log_level, log_config, log_file);
    }

    log::info!("Calcpad starting up");

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            log::warn!("{}; falling back to defaults", e);
            config::CalcpadConfig::default()
        }
    };

    let store = ThemeStore::open();
    let cli = CliOverrides {
        theme: args.theme,
        start_powered_on: args.on,
    };
    let resolved = config::resolve(&file_config, store.load(), &cli);
    log::info!("Resolved config: {:?}", resolved);

    tui::run(resolved, store)
}
