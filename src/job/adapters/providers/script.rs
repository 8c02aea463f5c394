//! Template-backed script synthesis.

use async_trait::async_trait;
use minijinja::{Environment, context};

use crate::job::domain::{LengthMode, Script};
use crate::job::ports::{ProviderError, ProviderResult, ScriptBuilder};

const HOOK_TEMPLATE: &str =
    "Stop scrolling – this {{ niche }} secret will change how you think about AI!";
const BODY_TEMPLATE: &str = "Today we follow a real example: \"{{ title }}\". I will show you, \
                             step by step, how AI does the heavy lifting while you just make \
                             decisions.";
const OUTRO_TEMPLATE: &str = "If you want more AI-powered content like this, follow for the next \
                              episode – it is already generating.";

/// Script builder rendering the fixed hook/body/outro templates.
///
/// A real deployment would swap this for an LLM-backed builder behind the
/// same port.
#[derive(Debug)]
pub struct TemplateScriptBuilder {
    env: Environment<'static>,
}

impl TemplateScriptBuilder {
    /// Builds the template environment.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Upstream`] when a template fails to parse.
    pub fn new() -> ProviderResult<Self> {
        let mut env = Environment::new();
        env.add_template("hook", HOOK_TEMPLATE)
            .map_err(template_error)?;
        env.add_template("body", BODY_TEMPLATE)
            .map_err(template_error)?;
        env.add_template("outro", OUTRO_TEMPLATE)
            .map_err(template_error)?;
        Ok(Self { env })
    }

    fn render(&self, name: &str, title: &str, niche: &str) -> ProviderResult<String> {
        self.env
            .get_template(name)
            .map_err(template_error)?
            .render(context! { title => title, niche => niche })
            .map_err(template_error)
    }
}

fn template_error(err: minijinja::Error) -> ProviderError {
    ProviderError::Upstream(format!("script template error: {err}"))
}

#[async_trait]
impl ScriptBuilder for TemplateScriptBuilder {
    async fn build(
        &self,
        title: &str,
        niche: &str,
        length_mode: LengthMode,
    ) -> ProviderResult<Script> {
        let hook = self.render("hook", title, niche)?;
        let body = self.render("body", title, niche)?;
        let outro = self.render("outro", title, niche)?;
        Ok(Script::from_paragraphs(length_mode, hook, body, outro))
    }
}
