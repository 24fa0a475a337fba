use std::path::{self, PathBuf};

use serde::{Deserialize, Deserializer};

use crate::Config;
use crate::loader::Source;

pub fn deserialize_path_buf_with_path_transformations_maybe<'de, D>(
    deserializer: D,
) -> Result<Option<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    let path_buf: Option<PathBuf> = Deserialize::deserialize(deserializer)?;

    Ok(path_buf.map(tilde_expansion).map(prefix_with_config_path))
}

/// Local sources get the same transformations as path fields, urls are kept
/// as they are.
pub fn deserialize_source_with_path_transformations<'de, D>(
    deserializer: D,
) -> Result<Source, D::Error>
where
    D: Deserializer<'de>,
{
    let source: String = Deserialize::deserialize(deserializer)?;

    Ok(match Source::parse(&source) {
        Source::Local(path) => {
            Source::Local(prefix_with_config_path(tilde_expansion(path)))
        }
        remote @ Source::Remote(_) => remote,
    })
}

fn prefix_with_config_path(path_buf: PathBuf) -> PathBuf {
    if path_buf.is_relative() {
        Config::config_dir().join(path_buf)
    } else {
        path_buf
    }
}

pub fn tilde_expansion(path_buf: PathBuf) -> PathBuf {
    let mut expanded_path_buf = PathBuf::new();

    let mut components = path_buf.components();

    if let Some(first_component) = components.next() {
        match first_component {
            path::Component::Normal(os_str) if os_str == "~" => {
                if let Some(home_dir) = dirs_next::home_dir() {
                    expanded_path_buf.push(home_dir);
                } else {
                    expanded_path_buf.push(first_component);
                }
            }
            _ => {
                expanded_path_buf.push(first_component);
            }
        }
    }

    components.for_each(|component| expanded_path_buf.push(component));

    expanded_path_buf
}
