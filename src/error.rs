use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] data::config::Error),
    #[error(transparent)]
    Page(#[from] data::page::Error),
    #[error("failed to build http client")]
    Client(#[from] reqwest::Error),
    #[error("failed to read template {}", .0.display())]
    Template(PathBuf, #[source] io::Error),
    #[error("failed to write page to {}", .0.display())]
    Output(PathBuf, #[source] io::Error),
}
