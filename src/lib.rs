use clap::Parser;
use std::path::PathBuf;

pub mod config;
pub mod error;
pub mod generator;
pub mod render;

pub use config::Config;
pub use error::{Error, Result};
pub use generator::{GenerationSummary, Generator};

#[derive(Debug, Parser)]
#[command(
    name = "atavic-pagegen",
    about = "Generate static HTML pages from a shared template and a JSON page list",
    version
)]
pub struct CommandArgs {
    #[arg(
        short,
        long,
        default_value = "./atavic-pages.json",
        env = "AP_CONFIG_PATH",
        help = "The path to the pages config file."
    )]
    pub config_path: String,

    #[arg(
        short,
        long,
        default_value = "./pages",
        env = "AP_OUTPUT_DIR",
        help = "The directory the generated pages are written into."
    )]
    pub output_dir: PathBuf,

    #[arg(
        long,
        help = "Also generate an index.html linking to every generated page."
    )]
    pub index: bool,
}

pub fn run(args: CommandArgs) -> Result<GenerationSummary> {
    let config = Config::try_from(args)?;
    Generator::new(config).generate_pages()
}
