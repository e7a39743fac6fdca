#![doc = include_str!("../README.md")]

pub use camino::{Utf8Path as Path, Utf8PathBuf as PathBuf};

mod check;
pub mod clean;
/// Loading of the check manifest
pub mod config;
mod error;
pub mod generate;
pub mod template;

pub use check::{clean_remote, Check};
pub use clean::clean_dir;
pub use config::Config;
pub use error::{Error, Stage};
pub use generate::{generate, run, Layout, Summary};
pub use template::CheckTemplate;
