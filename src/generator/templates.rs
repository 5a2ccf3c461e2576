use askama::Template;

/// Template data for the README preamble
///
/// Names the generated proxy package and links to the usage documentation.
#[derive(Template)]
#[template(path = "preamble.txt", escape = "none")]
pub(crate) struct PreambleTemplate {
    /// Fully qualified controller type name
    pub controller: String,
}

/// Template data for the proxy configuration example
///
/// A fixed resilience-configuration snippet, parameterized only by the
/// controller name. It does not vary per action and is rendered once per run.
#[derive(Template)]
#[template(path = "proxy_config.txt", escape = "none")]
pub(crate) struct ProxyConfigTemplate {
    /// Fully qualified controller type name
    pub controller: String,
}

/// Template data for the remote data provider section
///
/// Renders one registration snippet per matched DTO type, embedding the
/// default cache policy and cache expiry. These are configuration defaults,
/// identical for every matched type within one run.
#[derive(Template)]
#[template(path = "data_providers.txt", escape = "none")]
pub(crate) struct DataProvidersTemplate {
    /// Fully qualified names of the matched DTO types, in input order
    pub names: Vec<String>,
}
