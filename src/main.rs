mod cli;
mod config;
mod logging;
mod prompt;
mod runner;
mod scaffold;
mod templates;
mod util;

fn main() -> anyhow::Result<()> {
    let app = cli::parse();
    logging::init(app.verbose);
    runner::run(app)
}
