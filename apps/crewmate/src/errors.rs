use thiserror::Error;

/// Errors raised around the catalog. The accessors themselves cannot fail;
/// only turning outside input into a catalog selection can.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown prompt variant: '{0}' (expected one of: main, simple, developer, policy_expert)")]
    UnknownVariant(String),
}
