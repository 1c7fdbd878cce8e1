use anyhow::{Result, anyhow, bail};
use camino::Utf8PathBuf;
use chrono::Utc;

use crate::cli::{self, Cli};
use crate::config;
use crate::prompt::{AssumeYes, Confirm, Terminal};
use crate::scaffold::{self, Outcome, Scaffold};

pub fn run(cli: Cli) -> Result<()> {
    let directory = match &cli.directory {
        Some(directory) if !cli.help => directory,
        _ => {
            println!("{}", cli::usage());
            return Ok(());
        }
    };

    // One date for the whole run, even if it crosses midnight.
    let mut scaffold = Scaffold::new(Utc::now().date_naive());
    if let Some(path) = &cli.config {
        let path = Utf8PathBuf::from_path_buf(path.clone())
            .map_err(|_| anyhow!("profile path must be valid UTF-8"))?;
        let profile = config::load_from_path(&path)?;
        tracing::info!("using site profile {} ({})", path, profile.title);
        scaffold = scaffold.with_profile(profile);
    }

    let target = scaffold::resolve_target(directory)?;
    let mut confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(Terminal::stdio())
    };

    match scaffold::initialize(&target, &scaffold, confirm.as_mut())? {
        Outcome::Initialized { directory } => {
            tracing::debug!("scaffold complete in {}", directory);
            Ok(())
        }
        Outcome::Aborted => bail!("Directory is not empty, aborting."),
    }
}
