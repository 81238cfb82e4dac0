//! Template rendering for identity-mapping commands.
//!
//! The command template uses named placeholders plus one registered helper,
//! `escape`, which doubles single quotes so a value is safe inside a
//! single-quoted command literal. The helper is only applied where the
//! template asks for it; unescaped placeholders substitute as-is.

use handlebars::{Context, Handlebars, Helper, HelperResult, Output, RenderContext, no_escape};
use serde::Serialize;

use idf_model::Identity;

use crate::error::Result;
use crate::templates::CommandTemplates;

const COMMAND_TEMPLATE: &str = "command";

/// Double every single quote so the value can sit inside a single-quoted
/// command literal.
pub fn escape_single_quotes(value: &str) -> String {
    value.replace('\'', "''")
}

#[derive(Serialize)]
struct TemplateData<'a> {
    mainframe_id: &'a str,
    distributed_id: &'a str,
    registry: &'a str,
    user_name: &'a str,
}

/// Renders the per-identity command template.
pub struct Renderer<'a> {
    handlebars: Handlebars<'static>,
    registry: &'a str,
}

impl<'a> Renderer<'a> {
    /// Compile the command template and register the `escape` helper.
    pub fn new(templates: &CommandTemplates, registry: &'a str) -> Result<Self> {
        let mut handlebars = Handlebars::new();
        // Commands are plain text, never HTML.
        handlebars.register_escape_fn(no_escape);
        handlebars.register_helper("escape", Box::new(escape_helper));
        handlebars.register_template_string(COMMAND_TEMPLATE, templates.command)?;
        Ok(Self {
            handlebars,
            registry,
        })
    }

    /// Render the mapping command for one validated identity.
    ///
    /// Identity fields are trimmed before substitution; the registry is
    /// passed through as given.
    pub fn render(&self, identity: &Identity) -> Result<String> {
        let data = TemplateData {
            mainframe_id: identity.mainframe_id.trim(),
            distributed_id: identity.distributed_id.trim(),
            registry: self.registry,
            user_name: identity.user_name.trim(),
        };
        Ok(self.handlebars.render(COMMAND_TEMPLATE, &data)?)
    }
}

fn escape_helper(
    h: &Helper,
    _: &Handlebars,
    _: &Context,
    _: &mut RenderContext,
    out: &mut dyn Output,
) -> HelperResult {
    let value = h.param(0).and_then(|v| v.value().as_str()).unwrap_or("");
    out.write(&escape_single_quotes(value))?;
    Ok(())
}
