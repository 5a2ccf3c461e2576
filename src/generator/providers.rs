use crate::model::DtoTypeMeta;
use tracing::debug;

/// Deployment-specific probe for local-entity data providers.
///
/// The generator does not know what a "local entity" is; each deployment
/// implements this trait to answer whether a DTO type has a local counterpart
/// whose data should resolve remotely through a generated data provider.
///
/// The contract is a pass/fail probe expressed as text: return the provider
/// registration body for the type, or an empty string when no local
/// counterpart exists. The generator only filters on emptiness; it never
/// interprets the returned text.
pub trait ProviderBinder {
    /// Registration text for a local data provider of `dto`, empty when the
    /// deployment has none for this type.
    fn provider_registration(&self, dto: &DtoTypeMeta) -> String;
}

impl<F> ProviderBinder for F
where
    F: Fn(&DtoTypeMeta) -> String,
{
    fn provider_registration(&self, dto: &DtoTypeMeta) -> String {
        self(dto)
    }
}

/// Select the DTO types that have a local data provider in this deployment.
///
/// A stable filter: each type is probed once, types with an empty
/// registration are dropped, and the relative order of the survivors is the
/// input order. An empty result means the caller must omit the entire
/// data-provider section, heading included.
pub fn match_data_providers<'a>(
    binder: &dyn ProviderBinder,
    dto_types: &'a [DtoTypeMeta],
) -> Vec<&'a DtoTypeMeta> {
    let matched: Vec<&DtoTypeMeta> = dto_types
        .iter()
        .filter(|dto| !binder.provider_registration(dto).is_empty())
        .collect();
    debug!(
        candidates = dto_types.len(),
        matched = matched.len(),
        "matched local data providers"
    );
    matched
}
