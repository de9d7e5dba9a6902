use anyhow::Result;
use profilecard::domain::ports::TemplateRenderer;
use profilecard::domain::services::{access, TemplateAccess};
use profilecard::TemplateRegistry;

pub fn cmd_templates(subscribed: bool, json: bool) -> Result<()> {
    let registry = TemplateRegistry::builtin();

    if json {
        let templates: Vec<_> = registry
            .iter()
            .map(|renderer| {
                serde_json::json!({
                    "id": renderer.id(),
                    "name": renderer.name(),
                    "locked": access(renderer.id(), &subscribed) == TemplateAccess::Locked,
                    "limits": {
                        "works": renderer.limits().works,
                        "services": renderer.limits().services,
                        "reviews": renderer.limits().reviews,
                    },
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({
                "event": "complete",
                "command": "templates",
                "templates": templates,
            }))?
        );
        return Ok(());
    }

    for renderer in registry.iter() {
        println!("{}", describe(renderer, subscribed));
    }
    Ok(())
}

fn describe(renderer: &dyn TemplateRenderer, subscribed: bool) -> String {
    let limits = renderer.limits();
    let lock = match access(renderer.id(), &subscribed) {
        TemplateAccess::Unlocked => "",
        TemplateAccess::Locked => "  [subscription]",
    };
    format!(
        "{:<11} {:<10} works {:>2}, services {:>2}, reviews {:>2}{}",
        renderer.id(),
        renderer.name(),
        limits.works,
        limits.services,
        limits.reviews,
        lock
    )
}
