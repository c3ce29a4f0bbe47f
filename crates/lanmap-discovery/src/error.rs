use std::time::Duration;

/// Errors an oracle can signal while probing a device.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("probe timed out")]
    Timeout,

    #[error("transport error: {0}")]
    Transport(String),

    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Errors that abort a discovery pass.
///
/// Discovery is not transactional: whatever was recorded before the failure
/// remains in the network graph.
#[derive(Debug, thiserror::Error)]
pub enum DiscoveryError {
    #[error("probe failed at {device}")]
    Probe {
        device: String,
        #[source]
        source: OracleError,
    },

    #[error("probe deadline of {timeout:?} elapsed at {device}")]
    ProbeTimeout { device: String, timeout: Duration },
}
