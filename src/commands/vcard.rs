use std::path::Path;

use anyhow::{Context, Result};
use profilecard::config::Config;
use profilecard::domain::ports::ContactActions;
use profilecard::infrastructure::VCardActions;

use crate::cli::ProfileArgs;

pub fn cmd_vcard(
    args: &ProfileArgs,
    output: Option<&Path>,
    config: &Config,
    json: bool,
) -> Result<()> {
    let card = super::compose_profile(args, config, |_| {})?;
    let mut actions = VCardActions::new();
    actions.save_contact(&card);
    let download = actions
        .take_downloads()
        .pop()
        .context("save contact produced no vcard")?;

    if json {
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({
                "event": "complete",
                "command": "vcard",
                "file_name": download.file_name,
                "vcard": download.content,
            }))?
        );
        return Ok(());
    }

    super::write_output(output, &download.content)
}
