use serde::Serialize;

/// A single check, as handed to the template.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check<'a> {
    /// The key in the manifest, also the stem of the generated file
    pub name: &'a str,
    /// The remote exactly as written in the manifest
    pub remote: &'a str,
    /// See [`clean_remote`]
    pub clean_remote: &'a str,
}

impl<'a> Check<'a> {
    pub fn new(name: &'a str, remote: &'a str) -> Self {
        Self {
            name,
            remote,
            clean_remote: clean_remote(remote),
        }
    }

    /// The file name the check is generated into
    #[inline]
    pub fn file_name(&self) -> String {
        format!("{}.go", self.name)
    }
}

/// Strips everything up to and including the first `@` of a remote.
///
/// Remotes without an `@` are returned unchanged. Only the first `@` is
/// considered, so `a@b@c` yields `b@c`.
#[inline]
pub fn clean_remote(remote: &str) -> &str {
    remote.split_once('@').map_or(remote, |(_, rest)| rest)
}
