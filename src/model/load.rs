use super::types::TypeModel;
use anyhow::Context;

/// Load a resolved API-surface model from a JSON or YAML metadata dump.
///
/// The dump is whatever the external metadata resolver produced (a schema, an
/// IDL export, a compile-time reflection dump); this crate only cares that it
/// deserializes into a [`TypeModel`]. Files ending in `.yaml`/`.yml` are
/// parsed as YAML, everything else as JSON.
///
/// The loaded model is re-normalized through [`TypeModel::new`] (DTO
/// deduplication) and validated before it is returned, so a successfully
/// loaded model is always safe to generate from.
///
/// # Errors
///
/// Returns an error if the file cannot be read, does not parse, or violates
/// the metadata contract (see [`TypeModel::validate`]).
pub fn load_model(file_path: &str) -> anyhow::Result<TypeModel> {
    let content = std::fs::read_to_string(file_path)
        .with_context(|| format!("failed to read model file `{file_path}`"))?;
    let model: TypeModel = if file_path.ends_with(".yaml") || file_path.ends_with(".yml") {
        serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse YAML model `{file_path}`"))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse JSON model `{file_path}`"))?
    };
    let model = TypeModel::new(model.controller, model.dto_types);
    model.validate()?;
    Ok(model)
}
