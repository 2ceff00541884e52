use rolo::api::Session;
use rolo::config::RoloConfig;
use rolo::error::Result;
use rolo::logging;
use rolo::shell::Shell;
use rolo::store::fs::FileStore;
use std::io;
use std::path::PathBuf;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let root = cwd.join(".rolo");

    let config = RoloConfig::load(&root).unwrap_or_default();

    // A broken logger must not keep the notebook from opening.
    if let Err(e) = logging::init(&root.join("logs"), config.log_level()) {
        eprintln!("Notice: file logging is disabled: {}", e);
    }

    let data_file = config.data_file_path(&root);
    log::info!("session starting, data file {}", data_file.display());

    let store = FileStore::new(data_file);
    let (session, boot) = Session::open(store);

    let stdin = io::stdin();
    let mut shell = Shell::new(session, stdin.lock(), io::stdout());
    shell.report(&boot)?;
    shell.run()
}
