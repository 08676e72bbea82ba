use clap::Parser;
use glassnotes::core::config::{self, CliOverrides, NotesConfig};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::{self, File};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "glassnotes", about = "Quick local notes in your terminal")]
struct Args {
    /// Directory holding the notes file (and the log)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Name of the storage entry holding the notes
    #[arg(short, long)]
    key: Option<String>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Loaded before the logger exists; the outcome is logged below.
    let loaded = config::load_config();
    let cli = CliOverrides {
        data_dir: args.data_dir,
        storage_key: args.key,
    };
    let default_config = NotesConfig::default();
    let file_config = loaded.as_ref().map_or(&default_config, |l| &l.config);
    let resolved = config::resolve(file_config, &cli);

    // Initialize file logger - writes to glassnotes.log in the data directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if fs::create_dir_all(&resolved.data_dir).is_ok()
        && let Ok(log_file) = File::create(resolved.data_dir.join("glassnotes.log"))
    {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    match &loaded {
        Ok(loaded) => loaded.log(),
        Err(e) => log::warn!("Ignoring config file: {}", e),
    }
    log::info!("Glass Notes starting up with data dir {}", resolved.data_dir.display());

    glassnotes::tui::run(resolved)
}
