use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

pub use self::image::Image;
pub use self::page::Page;
pub use self::request::Request;
use crate::environment;
use crate::loader::Source;

pub mod image;
pub mod page;
pub mod request;

const CONFIG_TEMPLATE: &str = include_str!("../../config.toml");
const DEFAULT_SOURCE: &str = "data.json";

#[derive(Debug, Clone)]
pub struct Config {
    /// Location of the card document, a URL or a path
    ///
    /// Paths set in the config file are resolved like `output` and
    /// `template`, the default is relative to the working directory
    pub source: Source,
    /// Where the rendered page is written, stdout when unset
    pub output: Option<PathBuf>,
    /// HTML template holding the card container
    pub template: Option<PathBuf>,
    pub request: Request,
    pub image: Image,
    pub page: Page,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: default_source(),
            output: None,
            template: None,
            request: Request::default(),
            image: Image::default(),
            page: Page::default(),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        environment::config_dir()
    }

    pub fn path() -> PathBuf {
        Self::config_dir().join(environment::CONFIG_FILE_NAME)
    }

    /// Loads the config at `path`, or at the default location when `None`.
    ///
    /// A missing file at the default location yields the default config.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let content = match path {
            Some(path) => fs::read_to_string(path)
                .map_err(|e| Error::Read(e.to_string()))?,
            None => {
                let path = Self::path();

                if !path.exists() {
                    log::debug!(
                        "no config at {}, using defaults",
                        path.display()
                    );
                    return Ok(Config::default());
                }

                fs::read_to_string(&path)
                    .map_err(|e| Error::Read(e.to_string()))?
            }
        };

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, Error> {
        #[derive(Deserialize)]
        pub struct Configuration {
            #[serde(
                default = "default_source",
                deserialize_with = "crate::serde::deserialize_source_with_path_transformations"
            )]
            pub source: Source,
            #[serde(
                default,
                deserialize_with = "crate::serde::deserialize_path_buf_with_path_transformations_maybe"
            )]
            pub output: Option<PathBuf>,
            #[serde(
                default,
                deserialize_with = "crate::serde::deserialize_path_buf_with_path_transformations_maybe"
            )]
            pub template: Option<PathBuf>,
            #[serde(default)]
            pub request: Request,
            #[serde(default)]
            pub image: Image,
            #[serde(default)]
            pub page: Page,
        }

        let Configuration {
            source,
            output,
            template,
            request,
            image,
            page,
        } = toml::from_str(content).map_err(|e| Error::Parse(e.to_string()))?;

        Ok(Config {
            source,
            output,
            template,
            request,
            image,
            page,
        })
    }

    pub fn placeholder(&self) -> &Url {
        &self.image.placeholder
    }

    pub fn create_template_config() {
        // Checks if a config file is there
        let config_file = Self::path();
        if config_file.exists() {
            return;
        }

        let config_dir = Self::config_dir();
        if fs::create_dir_all(&config_dir).is_err() {
            return;
        }

        // Create template configuration file.
        let config_template_file = config_dir.join("config.template.toml");
        let _ = fs::write(config_template_file, CONFIG_TEMPLATE);
    }
}

fn default_source() -> Source {
    Source::Local(PathBuf::from(DEFAULT_SOURCE))
}

#[derive(Debug, Error, Clone)]
pub enum Error {
    #[error("config could not be read: {0}")]
    Read(String),
    #[error("{0}")]
    Parse(String),
}
