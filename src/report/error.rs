use thiserror::Error;

/// A report type selector that names no supported family
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown report type: {0}")]
pub struct UnknownFamily(pub String);
