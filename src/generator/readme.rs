use super::providers::{match_data_providers, ProviderBinder};
use super::signature::render_invocation;
use super::templates::{DataProvidersTemplate, PreambleTemplate, ProxyConfigTemplate};
use crate::model::{ControllerMeta, DtoTypeMeta, TypeModel};
use askama::Template;
use std::path::Path;
use tracing::debug;

/// Render the quick-reference block: one invocation example per action.
///
/// The block opens with its heading and rule; each example line is preceded
/// by a blank line so the assembled document shows every invocation followed
/// by one. A controller with no actions yields just the heading.
///
/// # Errors
///
/// Returns an error if any action violates the metadata contract (see
/// [`render_invocation`]).
pub fn render_quick_reference(controller: &ControllerMeta) -> anyhow::Result<String> {
    let mut r = String::from("HOW TO USE?\n-------------------\n");
    for action in &controller.actions {
        let example = render_invocation(action, &controller.full_name)?;
        r.push('\n');
        r.push_str(&example.line);
        r.push('\n');
    }
    Ok(r)
}

/// Render the resilience-configuration example for `controller`.
///
/// Static with respect to the controller name only: retries, cache policy,
/// and circuit-breaker thresholds are documentation of the generated client's
/// configuration surface, not values computed from the action set.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_proxy_config(controller: &str) -> anyhow::Result<String> {
    let rendered = ProxyConfigTemplate {
        controller: controller.to_string(),
    }
    .render()?;
    Ok(rendered)
}

/// Render the remote data provider section, if any DTO type matches.
///
/// Probes each DTO type through `binder` and returns `None` when nothing
/// matches; the caller must then omit the section entirely, heading included.
/// Matched types keep their input order and each renders the same fixed
/// registration snippet with the default cache policy and expiry.
///
/// # Errors
///
/// Returns an error if template rendering fails.
pub fn render_data_providers(
    binder: &dyn ProviderBinder,
    dto_types: &[DtoTypeMeta],
) -> anyhow::Result<Option<String>> {
    let matched = match_data_providers(binder, dto_types);
    if matched.is_empty() {
        return Ok(None);
    }
    let rendered = DataProvidersTemplate {
        names: matched.iter().map(|d| d.full_name.clone()).collect(),
    }
    .render()?;
    Ok(Some(rendered))
}

/// Compose the final document from its pre-rendered sections.
///
/// Pure composition in fixed order - preamble, quick reference, proxy
/// configuration, then the data provider section if present - with a single
/// blank line between sections. Section order is part of the output contract;
/// all ordering-sensitive work (actions, parameters, DTO types) happens
/// upstream on already stably ordered sequences. Never fails, even for
/// all-empty inputs.
pub fn assemble(
    preamble: &str,
    quick_reference: &str,
    proxy_config: &str,
    data_providers: Option<&str>,
) -> String {
    let mut doc = String::with_capacity(
        preamble.len()
            + quick_reference.len()
            + proxy_config.len()
            + data_providers.map_or(0, str::len)
            + 8,
    );
    doc.push_str(preamble);
    doc.push('\n');
    doc.push('\n');
    doc.push_str(quick_reference);
    doc.push('\n');
    doc.push_str(proxy_config);
    doc.push('\n');
    if let Some(providers) = data_providers {
        doc.push('\n');
        doc.push_str(providers);
        doc.push('\n');
    }
    doc
}

/// Generate the complete proxy README for `model`.
///
/// Validates the model, renders every section, and assembles them. The result
/// is a pure function of the model and the binder's answers: generating twice
/// from the same inputs yields byte-identical text.
///
/// # Errors
///
/// Returns an error if the model violates the upstream metadata contract or
/// if template rendering fails.
pub fn generate_readme(model: &TypeModel, binder: &dyn ProviderBinder) -> anyhow::Result<String> {
    model.validate()?;
    debug!(
        controller = %model.controller.full_name,
        actions = model.controller.actions.len(),
        dto_types = model.dto_types.len(),
        "generating proxy readme"
    );
    let preamble = PreambleTemplate {
        controller: model.controller.full_name.clone(),
    }
    .render()?;
    let quick_reference = render_quick_reference(&model.controller)?;
    let proxy_config = render_proxy_config(&model.controller.full_name)?;
    let data_providers = render_data_providers(binder, &model.dto_types)?;
    Ok(assemble(
        &preamble,
        &quick_reference,
        &proxy_config,
        data_providers.as_deref(),
    ))
}

/// Generate the README and write it as `README.txt` under `dir`.
///
/// The single sequential output step of a generation run; everything before
/// it is pure.
///
/// # Errors
///
/// Returns an error if generation or file writing fails.
pub fn write_readme(
    dir: &Path,
    model: &TypeModel,
    binder: &dyn ProviderBinder,
) -> anyhow::Result<()> {
    let text = generate_readme(model, binder)?;
    let path = dir.join("README.txt");
    std::fs::write(&path, text)?;
    println!("✅ Generated README.txt → {path:?}");
    Ok(())
}
