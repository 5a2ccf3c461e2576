use anyhow::bail;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// One declared parameter of an action method.
///
/// The type name is used only for name-based rendering; no parameter values
/// are ever synthesized from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterMeta {
    /// Parameter name as declared on the action
    pub name: String,
    /// Declared type name
    #[serde(rename = "type")]
    pub type_name: String,
}

/// One exposed remote operation on the controller surface.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionMethodMeta {
    /// Method name as declared on the controller
    pub name: String,
    /// Payload type of the asynchronous result. `None` means the action
    /// produces no meaningful payload (a fire-and-forget call).
    #[serde(default)]
    pub return_type: Option<String>,
    /// Parameters in declaration order. Order is observable in rendered
    /// output and must match the underlying action surface.
    #[serde(default)]
    pub parameters: Vec<ParameterMeta>,
}

/// Identity of the controller whose proxy is being documented.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControllerMeta {
    /// Fully qualified controller type name
    pub full_name: String,
    /// Action methods in declaration order
    #[serde(default)]
    pub actions: Vec<ActionMethodMeta>,
}

/// A data-transfer type reachable from the API surface.
///
/// Whether a DTO has a local-entity counterpart is not recorded here; that is
/// a deployment concern answered by a
/// [`ProviderBinder`](crate::generator::ProviderBinder) probe at generation
/// time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DtoTypeMeta {
    /// Fully qualified DTO type name
    pub full_name: String,
}

/// Read-only facade over a fully resolved API surface.
///
/// Constructed once per generation run and never mutated; every generator
/// output is a pure function of this model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeModel {
    /// The controller and its action methods
    pub controller: ControllerMeta,
    /// DTO types reachable from the surface, deduplicated, in discovery order
    #[serde(default)]
    pub dto_types: Vec<DtoTypeMeta>,
}

impl TypeModel {
    /// Build a model, deduplicating `dto_types` by fully qualified name.
    ///
    /// The first occurrence of each name wins, so enumeration order stays the
    /// insertion order of discovery and generated output stays deterministic.
    pub fn new(controller: ControllerMeta, dto_types: Vec<DtoTypeMeta>) -> Self {
        let mut seen = HashSet::new();
        let dto_types = dto_types
            .into_iter()
            .filter(|d| seen.insert(d.full_name.clone()))
            .collect();
        Self {
            controller,
            dto_types,
        }
    }

    /// Check the upstream metadata contract.
    ///
    /// An empty controller name, an unnamed action, an unnamed parameter, or
    /// duplicate parameter names within one action all mean the metadata
    /// resolver handed us a corrupt surface. Generation must fail fast rather
    /// than emit documentation with holes that developers would copy-paste.
    ///
    /// # Errors
    ///
    /// Returns a descriptive error naming the offending action or parameter.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.controller.full_name.is_empty() {
            bail!("controller has an empty fully qualified name");
        }
        for (idx, action) in self.controller.actions.iter().enumerate() {
            if action.name.is_empty() {
                bail!(
                    "action method #{idx} on `{}` has an empty name",
                    self.controller.full_name
                );
            }
            let mut names = HashSet::new();
            for param in &action.parameters {
                if param.name.is_empty() {
                    bail!(
                        "action `{}` on `{}` has a parameter with an empty name",
                        action.name,
                        self.controller.full_name
                    );
                }
                if !names.insert(param.name.as_str()) {
                    bail!(
                        "action `{}` on `{}` declares parameter `{}` more than once",
                        action.name,
                        self.controller.full_name,
                        param.name
                    );
                }
            }
        }
        for dto in &self.dto_types {
            if dto.full_name.is_empty() {
                bail!("DTO type with an empty fully qualified name");
            }
        }
        Ok(())
    }
}
