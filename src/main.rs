use std::io;

use anyhow::Result;
use log::warn;

use linedit::config::Config;
use linedit::document::Document;
use linedit::session::Session;

fn main() -> Result<()> {
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.log_level.as_str()),
    )
    .init();

    let mut document = Document::new();
    if let Some(path) = &config.startup_file {
        // A bad startup file is not fatal; the session starts empty.
        if let Err(err) = document.load_from(path) {
            warn!("could not load startup file: {err}");
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(document, stdin.lock(), stdout.lock());
    session.run()?;
    Ok(())
}
