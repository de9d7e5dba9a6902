use std::path::Path;

use anyhow::Result;
use profilecard::config::{Config, Verbosity};
use profilecard::domain::entities::MAX_WORK_IMAGES;
use profilecard::domain::services::effective_template;
use profilecard::{ProfileState, ProfileStore};

/// A correction applied when the profile is loaded or rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub field: &'static str,
    pub message: String,
}

pub fn cmd_check(profile: &Path, subscribed: bool, config: &Config, json: bool) -> Result<()> {
    let raw = super::load_profile(profile, config.render.default_template)?;
    let findings = diagnose(&raw, subscribed || config.render.subscribed);

    if json {
        let items: Vec<_> = findings
            .iter()
            .map(|f| serde_json::json!({ "field": f.field, "message": f.message }))
            .collect();
        println!(
            "{}",
            serde_json::to_string(&serde_json::json!({
                "event": "complete",
                "command": "check",
                "profile": profile.display().to_string(),
                "findings": items,
            }))?
        );
        return Ok(());
    }

    if findings.is_empty() {
        if config.output.verbosity != Verbosity::Quiet {
            println!("{}: ok", profile.display());
        }
        return Ok(());
    }
    println!("{}: {} correction(s)", profile.display(), findings.len());
    for finding in &findings {
        println!("  {:<14} {}", finding.field, finding.message);
    }
    Ok(())
}

/// Compare a loaded profile with its sanitized form
pub fn diagnose(raw: &ProfileState, subscribed: bool) -> Vec<Finding> {
    let mut findings = Vec::new();

    if !raw.section_order.is_valid() {
        findings.push(Finding {
            field: "sectionOrder",
            message: "not a full permutation of sections; default order is used".to_string(),
        });
    }

    for (slot, url) in [
        ("coverPhotoUrl", &raw.cover_photo_url),
        ("avatarUrl", &raw.avatar_url),
    ] {
        if url.as_ref().is_some_and(|u| u.is_transient()) {
            findings.push(Finding {
                field: slot,
                message: "local preview url was persisted; it is dropped".to_string(),
            });
        }
    }

    let stale_work = raw
        .work_images
        .iter()
        .filter(|img| img.url.is_transient())
        .count();
    if stale_work > 0 {
        findings.push(Finding {
            field: "workImages",
            message: format!("{stale_work} local preview url(s) are not rendered"),
        });
    }
    if raw.work_images.len() > MAX_WORK_IMAGES {
        findings.push(Finding {
            field: "workImages",
            message: format!(
                "{} images, only the first {MAX_WORK_IMAGES} are kept",
                raw.work_images.len()
            ),
        });
    }

    let sanitized = ProfileStore::from_saved(raw.clone());
    for (i, (before, after)) in raw
        .reviews
        .iter()
        .zip(&sanitized.state().reviews)
        .enumerate()
    {
        if before.rating != after.rating {
            findings.push(Finding {
                field: "reviews",
                message: format!(
                    "review {} rating {:?} clamped to {:?}",
                    i + 1,
                    before.rating,
                    after.rating
                ),
            });
        }
    }

    let effective = effective_template(raw.template_id, subscribed);
    if effective != raw.template_id {
        findings.push(Finding {
            field: "templateId",
            message: format!(
                "{} requires a subscription; rendered as {effective}",
                raw.template_id
            ),
        });
    }

    findings
}
