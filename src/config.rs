use crate::error::{Error, Result};
use crate::CommandArgs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{instrument, Level};

// ###################################################### //
//                     Config Struct                      //
// ###################################################### //

/// The resolved run configuration: the shared template, the pages to
/// generate and where to put them.
#[derive(Debug)]
pub struct Config {
    pub template: String,
    pub pages: Vec<PageConfig>,
    pub output_dir: PathBuf,
    pub index: bool,
}

// ###################################################### //
//                  ConfigFile Struct                     //
// ###################################################### //

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFile {
    pub template: String,
    pub pages: Vec<PageConfig>,
}

impl ConfigFile {
    #[instrument(skip_all, ret(level = Level::TRACE), err(Display))]
    pub fn new(path: &str) -> Result<ConfigFile> {
        if !Path::new(path).is_file() {
            return Err(Error::InvalidFilePath(path.to_string()));
        }
        let file = fs::read_to_string(path)?;
        let config: ConfigFile = serde_json::from_str(&file)?;
        Ok(config)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    pub filename: String,
    pub title: String,
    pub element_id: String,
}

// ###################################################### //
//             TryFrom CommandArgs -> Config              //
// ###################################################### //

impl TryFrom<CommandArgs> for Config {
    type Error = Error;

    #[instrument(skip_all, ret(level = Level::TRACE))]
    fn try_from(args: CommandArgs) -> Result<Self> {
        let config_file = ConfigFile::new(&args.config_path)?;

        let config = Self {
            template: config_file.template,
            pages: config_file.pages,
            output_dir: args.output_dir,
            index: args.index,
        };

        Ok(config)
    }
}
