pub mod entry;

use std::fs;
use std::io;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use camino::{Utf8Path, Utf8PathBuf};
use chrono::NaiveDate;

use crate::config::{DEFAULT_BLOG_IMPORT, SiteProfile};
use crate::prompt::Confirm;
use crate::templates;
use crate::util;

pub const NON_EMPTY_PROMPT: &str =
    "You are trying to initialize a blog in a non-empty directory, do you want to continue?";

const POSTS_DIR: &str = "posts";
const HELLO_WORLD: &str = "posts/hello_world.md";
const MAIN: &str = "main.tsx";
const DENO_JSONC: &str = "deno.jsonc";
const IMPORT_MAP: &str = "import_map.json";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Outcome {
    Initialized { directory: Utf8PathBuf },
    /// The operator declined to scaffold into a non-empty directory; nothing was written.
    Aborted,
}

/// The four starter files, rendered for one run.
#[derive(Clone, Debug)]
pub struct Scaffold {
    publish_date: NaiveDate,
    profile: Option<SiteProfile>,
}

impl Scaffold {
    pub fn new(publish_date: NaiveDate) -> Self {
        Self {
            publish_date,
            profile: None,
        }
    }

    pub fn with_profile(mut self, profile: SiteProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Relative path and contents of each file, in write order.
    pub fn files(&self) -> Result<Vec<(&'static str, String)>> {
        let date = self.publish_date.format("%Y-%m-%d").to_string();
        let hello = templates::render(HELLO_WORLD, &[("publish_date", date.as_str())])?;

        let main = match &self.profile {
            Some(profile) => entry::render(profile)?,
            None => templates::get_string(MAIN)?,
        };

        let import = self
            .profile
            .as_ref()
            .map_or(DEFAULT_BLOG_IMPORT, SiteProfile::blog_import);
        let import = serde_json::to_string(import)?;
        let import_map = templates::render(IMPORT_MAP, &[("blog_import", import.as_str())])?;

        Ok(vec![
            (HELLO_WORLD, hello),
            (MAIN, main),
            (DENO_JSONC, templates::get_string(DENO_JSONC)?),
            (IMPORT_MAP, import_map),
        ])
    }
}

/// Resolve `input` against the current directory without touching the filesystem.
pub fn resolve_target(input: &Path) -> Result<Utf8PathBuf> {
    let absolute = std::path::absolute(input)
        .with_context(|| format!("resolving {}", input.display()))?;
    Utf8PathBuf::from_path_buf(absolute).map_err(|path| {
        anyhow!(
            "target directory {} is not valid UTF-8; choose a directory whose path is UTF-8",
            path.display()
        )
    })
}

/// Populate `directory` with the blog skeleton, asking `confirm` first when it
/// already has entries. A missing directory counts as empty.
pub fn initialize(
    directory: &Utf8Path,
    scaffold: &Scaffold,
    confirm: &mut dyn Confirm,
) -> Result<Outcome> {
    println!("Initializing blog in {}...", directory);

    if has_entries(directory)? {
        tracing::debug!("{} is not empty, asking for confirmation", directory);
        if !confirm.confirm(NON_EMPTY_PROMPT)? {
            tracing::info!("scaffolding of {} declined", directory);
            return Ok(Outcome::Aborted);
        }
    }

    let files = scaffold.files()?;
    util::fs::ensure_dir(&directory.join(POSTS_DIR))?;
    for (relative, contents) in &files {
        let destination = directory.join(relative);
        templates::write_to(&destination, contents)?;
        tracing::info!("wrote {}", destination);
    }

    println!("Blog initialized, run `deno task dev` to get started.");
    Ok(Outcome::Initialized {
        directory: directory.to_owned(),
    })
}

fn has_entries(directory: &Utf8Path) -> Result<bool> {
    match fs::read_dir(directory) {
        Ok(mut entries) => Ok(entries.next().is_some()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("{} does not exist yet", directory);
            Ok(false)
        }
        Err(err) => Err(err).with_context(|| format!("listing {}", directory)),
    }
}
