use std::path::Path;

use anyhow::{Context, Result};
use profilecard::config::Config;
use profilecard::domain::services::effective_template;
use profilecard::{TemplateId, TemplateRegistry};

use crate::cli::ProfileArgs;

pub fn cmd_render(
    args: &ProfileArgs,
    template: Option<TemplateId>,
    output: Option<&Path>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let card = super::compose_profile(args, config, |state| {
        if let Some(template) = template {
            state.template_id = template;
        }
    })?;

    if let Some(requested) = template {
        let subscribed = args.subscribed || config.render.subscribed;
        if effective_template(requested, subscribed) != requested {
            tracing::warn!(
                requested = %requested,
                "template requires a subscription, rendering {}",
                TemplateId::default()
            );
        }
    }

    let registry = TemplateRegistry::builtin();
    let rendered = registry
        .render(&card)
        .context("no template registered for this profile")?;

    if json {
        if output.is_some() {
            super::write_output(output, rendered.html())?;
        }
        let mut event = serde_json::json!({
            "event": "complete",
            "command": "render",
            "template": rendered.template(),
            "sections": rendered.sections(),
            "actions": rendered.actions().iter().map(|a| a.as_str()).collect::<Vec<_>>(),
            "output": output.map(|p| p.display().to_string()),
        });
        if output.is_none() {
            event["html"] = serde_json::Value::String(rendered.into_html());
        }
        println!("{}", serde_json::to_string(&event)?);
        return Ok(());
    }

    super::write_output(output, rendered.html())
}
