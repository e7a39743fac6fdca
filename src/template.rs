use crate::{Check, Error};
use std::io::Write;

/// Name the embedded template is registered under
pub const CHECK_TEMPLATE_NAME: &str = "check.go.tmpl";
/// Source of the template every check is rendered from
pub const CHECK_TEMPLATE: &str = include_str!("../resources/check.go.tmpl");

/// A parsed template, reused for every check in a run.
///
/// The template can reference `name`, `remote` and `clean_remote`, anything
/// else fails at render time.
pub struct CheckTemplate {
    tera: tera::Tera,
    name: String,
}

impl CheckTemplate {
    /// Parses the template compiled into the binary
    pub fn embedded() -> Result<Self, Error> {
        Self::parse(CHECK_TEMPLATE_NAME, CHECK_TEMPLATE)
    }

    /// Parses an arbitrary template source
    pub fn parse(name: &str, text: &str) -> Result<Self, Error> {
        let mut tera = tera::Tera::default();
        tera.add_raw_template(name, text)
            .map_err(|source| Error::ParseTemplate {
                name: name.to_owned(),
                source,
            })?;

        Ok(Self {
            tera,
            name: name.to_owned(),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renders the template for `check` into `out`
    pub fn render_to(&self, check: &Check<'_>, out: impl Write) -> Result<(), Error> {
        let ctx = context(check)?;
        self.tera
            .render_to(&self.name, &ctx, out)
            .map_err(|source| render_error(check, source))
    }

    /// Renders the template for `check` into a string
    pub fn render(&self, check: &Check<'_>) -> Result<String, Error> {
        let ctx = context(check)?;
        self.tera
            .render(&self.name, &ctx)
            .map_err(|source| render_error(check, source))
    }
}

fn context(check: &Check<'_>) -> Result<tera::Context, Error> {
    tera::Context::from_serialize(check).map_err(|source| render_error(check, source))
}

fn render_error(check: &Check<'_>, source: tera::Error) -> Error {
    Error::Render {
        name: check.name.to_owned(),
        source,
    }
}

impl std::fmt::Debug for CheckTemplate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckTemplate")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}
