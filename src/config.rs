use crate::{Check, Error, Path};
use serde::Deserialize;
use std::collections::BTreeMap;

/// The deserialized `config.yml`.
///
/// Only the `checks` key is recognized, any other top-level keys are ignored.
#[derive(Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct Config {
    /// Check name -> remote module reference. Kept sorted so that checks are
    /// always generated in the same order.
    pub checks: BTreeMap<String, String>,
}

impl Config {
    /// Reads and decodes the config at `path`
    pub fn load(path: &Path) -> Result<Self, Error> {
        let contents = std::fs::read_to_string(path).map_err(|source| Error::ReadConfig {
            path: path.to_owned(),
            source,
        })?;

        Self::from_yaml(path, &contents)
    }

    /// Decodes a config that has already been read, `path` is only used for
    /// error reporting
    pub fn from_yaml(path: &Path, contents: &str) -> Result<Self, Error> {
        serde_yaml::from_str(contents).map_err(|source| Error::ParseConfig {
            path: path.to_owned(),
            source,
        })
    }

    /// Iterates the configured checks in name order
    pub fn checks(&self) -> impl ExactSizeIterator<Item = Check<'_>> {
        self.checks
            .iter()
            .map(|(name, remote)| Check::new(name, remote))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
