use std::path::PathBuf;

use clap::{CommandFactory, Parser};

const EXAMPLES: &str = "\
To generate a blog in the './my_blog' subdirectory:
  blog-init ./my_blog

To generate a blog in the current directory:
  blog-init .

To render main.tsx from a site profile:
  blog-init --config blog.toml ./my_blog

Print this message:
  blog-init --help";

/// Top-level CLI definition. Help is handled by hand so `-h`, `--help` and a
/// missing directory all print the same text.
#[derive(Parser, Debug)]
#[command(
    name = "blog-init",
    version,
    about = "Initialize a new blog project. This will create all the necessary files for a new blog.",
    disable_help_flag = true,
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Directory to create the blog in, relative to the current directory unless absolute.
    /// The path must be valid UTF-8.
    pub directory: Option<PathBuf>,
    /// Continue without asking when the directory is not empty.
    #[arg(short = 'y', long = "yes")]
    pub yes: bool,
    /// Site profile (TOML) used to render main.tsx and import_map.json.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    pub verbose: u8,
    /// Print help.
    #[arg(short = 'h', long = "help")]
    pub help: bool,
}

/// Helper entry point so `main` can stay minimal.
pub fn parse() -> Cli {
    Cli::parse()
}

pub fn usage() -> String {
    Cli::command().render_help().to_string()
}
