use crate::PathBuf;

/// The step of a run an [`Error`] originated from
#[derive(strum::Display, Debug, Copy, Clone, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Stage {
    ConfigRead,
    ConfigParse,
    Clean,
    TemplateParse,
    FileCreate,
    Render,
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("failed to read config file '{path}'")]
    ReadConfig {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file '{path}'")]
    ParseConfig {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("failed to walk checks directory '{dir}'")]
    WalkDir {
        dir: PathBuf,
        #[source]
        source: walkdir::Error,
    },
    #[error("failed to remove stale file '{}'", .path.display())]
    RemoveFile {
        /// A std path, walkdir entries aren't guaranteed to be UTF-8
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse template '{name}'")]
    ParseTemplate {
        name: String,
        #[source]
        source: tera::Error,
    },
    #[error("failed to create check file \"{name}.go\" at '{path}'")]
    CreateFile {
        name: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to render check '{name}'")]
    Render {
        name: String,
        #[source]
        source: tera::Error,
    },
}

impl Error {
    #[inline]
    pub fn stage(&self) -> Stage {
        match self {
            Self::ReadConfig { .. } => Stage::ConfigRead,
            Self::ParseConfig { .. } => Stage::ConfigParse,
            Self::WalkDir { .. } | Self::RemoveFile { .. } => Stage::Clean,
            Self::ParseTemplate { .. } => Stage::TemplateParse,
            Self::CreateFile { .. } => Stage::FileCreate,
            Self::Render { .. } => Stage::Render,
        }
    }

    /// The check being generated when the error occurred, if any
    pub fn check_name(&self) -> Option<&str> {
        match self {
            Self::CreateFile { name, .. } | Self::Render { name, .. } => Some(name),
            _ => None,
        }
    }
}
