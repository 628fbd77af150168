//! Scaffold rendering.
//!
//! Templates are Jinja2 syntax, rendered with minijinja. The environment's
//! loader is the [`TemplateSource`], so a scaffold may `include` or `extend`
//! other templates in the same source. Rendering is a pure function of the
//! template text and the context.
//!
//! Scaffolds are written for Jinja2, so Python string methods such as
//! `.replace()`, `.title()` or `.split()` are resolved through minijinja's
//! pycompat callback.

use crate::error::Result;
use crate::templates::TemplateSource;
use minijinja::{Environment, Error, ErrorKind};
use minijinja_contrib::pycompat::unknown_method_callback;
use serde::Serialize;

pub struct TemplateRenderer {
    env: Environment<'static>,
}

impl TemplateRenderer {
    pub fn new<T>(source: &T) -> Self
    where
        T: TemplateSource + Clone + Send + Sync + 'static,
    {
        let source = source.clone();
        let mut env = Environment::new();
        env.set_unknown_method_callback(unknown_method_callback);
        env.set_loader(move |name| {
            if !source.contains(name) {
                return Ok(None);
            }
            source.load(name).map(Some).map_err(|e| {
                Error::new(
                    ErrorKind::InvalidOperation,
                    format!("could not read template {}", name),
                )
                .with_source(e)
            })
        });
        Self { env }
    }

    /// Renders the named template against `context`.
    pub fn render<C: Serialize>(&self, name: &str, context: &C) -> Result<String> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(context)?)
    }
}
