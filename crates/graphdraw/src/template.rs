//! Seam between generators and whatever turns their data into bytes.
use crate::{calendar::GitDate, generator::CellClasses};

/// Error returned by a template renderer, passed through untouched as the
/// source of [`crate::GraphError::Template`].
pub type RenderError = Box<dyn std::error::Error + Send + Sync>;

pub const PREVIEW_TEMPLATE: &str = "preview.html";
pub const SCRIPT_TEMPLATE: &str = "generate-commits.sh";

/// Data handed to a named template.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateData<'a> {
    Preview {
        cells: &'a CellClasses,
        msg: &'a str,
        commit_density: u32,
    },
    Script {
        dates: &'a [GitDate],
        commit_density: u32,
    },
}

impl TemplateData<'_> {
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateData::Preview { .. } => PREVIEW_TEMPLATE,
            TemplateData::Script { .. } => SCRIPT_TEMPLATE,
        }
    }

    pub fn commit_density(&self) -> u32 {
        match self {
            TemplateData::Preview { commit_density, .. }
            | TemplateData::Script { commit_density, .. } => *commit_density,
        }
    }
}

pub trait TemplateRenderer {
    fn render(&self, name: &str, data: &TemplateData<'_>) -> Result<Vec<u8>, RenderError>;
}

#[cfg(feature = "templates")]
pub use builtin::BuiltinTemplates;

#[cfg(feature = "templates")]
mod builtin {
    use minijinja::{context, Environment};

    use super::{RenderError, TemplateData, TemplateRenderer, PREVIEW_TEMPLATE, SCRIPT_TEMPLATE};
    use crate::error::{GraphError, Result};

    /// Templates embedded in the crate, rendered with minijinja.
    ///
    /// `.html` templates are auto-escaped, so the message is safe to echo back.
    pub struct BuiltinTemplates {
        env: Environment<'static>,
    }

    impl BuiltinTemplates {
        pub fn new() -> Result<Self> {
            let mut env = Environment::new();
            env.set_keep_trailing_newline(true);
            env.add_template(PREVIEW_TEMPLATE, include_str!("../templates/preview.html"))
                .map_err(|e| GraphError::Template(Box::new(e)))?;
            env.add_template(SCRIPT_TEMPLATE, include_str!("../templates/generate-commits.sh"))
                .map_err(|e| GraphError::Template(Box::new(e)))?;
            Ok(Self { env })
        }
    }

    impl TemplateRenderer for BuiltinTemplates {
        fn render(&self, name: &str, data: &TemplateData<'_>) -> std::result::Result<Vec<u8>, RenderError> {
            let tmpl = self.env.get_template(name)?;
            let out = match data {
                TemplateData::Preview {
                    cells,
                    msg,
                    commit_density,
                } => tmpl.render(context! {
                    cells => cells,
                    msg => msg,
                    commit_density => commit_density,
                })?,
                TemplateData::Script {
                    dates,
                    commit_density,
                } => {
                    let dates = dates
                        .iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(" ");
                    tmpl.render(context! {
                        dates => dates,
                        commit_density => commit_density,
                    })?
                }
            };
            Ok(out.into_bytes())
        }
    }
}
