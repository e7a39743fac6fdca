//! The generation run: load the config, clear out the checks directory and
//! render one source file per check.

use crate::{clean_dir, CheckTemplate, Config, Error, Path, PathBuf};
use std::fs::File;

/// The config file checks are read from
pub const CONFIG_FILE: &str = "config.yml";
/// The directory checks are generated into
pub const CHECKS_DIR: &str = "pkg/checks/";
/// The hand-written entry point of the checks package, never removed
pub const RESERVED_FILE: &str = "main.go";

/// Where a run reads its config from and writes its output to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub config: PathBuf,
    pub checks_dir: PathBuf,
    /// Files with this name are left alone when cleaning [`Self::checks_dir`]
    pub reserved: String,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            config: CONFIG_FILE.into(),
            checks_dir: CHECKS_DIR.into(),
            reserved: RESERVED_FILE.to_owned(),
        }
    }
}

impl Layout {
    /// The default layout, relative to `root` rather than the working directory
    pub fn rooted(root: &Path) -> Self {
        let Self {
            config,
            checks_dir,
            reserved,
        } = Self::default();

        Self {
            config: root.join(config),
            checks_dir: root.join(checks_dir),
            reserved,
        }
    }
}

/// The outcome of a successful run
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    /// The number of stale files removed from the checks directory
    pub removed: usize,
    /// The generated files, in generation order
    pub generated: Vec<PathBuf>,
}

/// Executes a full run against `layout`.
///
/// The stages run strictly in order and the first error stops the run, so a
/// malformed config never touches the checks directory, but a failure part
/// way through generation leaves the checks that were already written.
pub fn run(layout: &Layout) -> Result<Summary, Error> {
    log::info!("loading checks from '{}'", layout.config);
    let config = Config::load(&layout.config)?;

    log::info!(
        "cleaning '{}', keeping '{}'",
        layout.checks_dir,
        layout.reserved
    );
    let removed = clean_dir(&layout.checks_dir, &layout.reserved)?;
    log::info!("removed {removed} stale file(s)");

    let template = CheckTemplate::embedded()?;

    log::info!("generating {} check(s)", config.len());
    let generated = generate(&config, &template, &layout.checks_dir)?;

    Ok(Summary { removed, generated })
}

/// Renders `template` for every check in `config` into `<dir>/<name>.go`.
///
/// Existing files are truncated. Returns the paths written, in order.
pub fn generate(
    config: &Config,
    template: &CheckTemplate,
    dir: &Path,
) -> Result<Vec<PathBuf>, Error> {
    let mut generated = Vec::with_capacity(config.len());

    for check in config.checks() {
        let path = dir.join(check.file_name());

        let out = File::create(&path).map_err(|source| Error::CreateFile {
            name: check.name.to_owned(),
            path: path.clone(),
            source,
        })?;

        template.render_to(&check, out)?;

        log::info!("generated '{path}' ({})", check.remote);
        generated.push(path);
    }

    Ok(generated)
}
