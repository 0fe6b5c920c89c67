//! Store connection configuration
//!
//! The four parameters a connector implementation needs to reach the
//! store. Loading them from a file or environment is the surrounding
//! service's job; this is only the value handed to whatever builds a
//! `StoreConnector`.

/// Connection parameters for a store connector.
///
/// Carried as a plain value so translation stays free of implicit shared
/// state: nothing in this crate reads it except connector constructors
/// supplied by the caller.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Store instance identifier.
    pub instance: String,

    /// Coordination-service endpoint (host:port list).
    pub endpoint: String,

    /// Principal to authenticate as.
    pub principal: String,

    /// Credential for the principal.
    pub credential: String,
}

impl StoreConfig {
    /// Assemble a config from its four parts.
    pub fn new(
        instance: impl Into<String>,
        endpoint: impl Into<String>,
        principal: impl Into<String>,
        credential: impl Into<String>,
    ) -> Self {
        StoreConfig {
            instance: instance.into(),
            endpoint: endpoint.into(),
            principal: principal.into(),
            credential: credential.into(),
        }
    }
}
