//! Static network-options descriptor, built once per service instance.

use chaingate_core::client::ChainClient;
use chaingate_core::errors::ErrorCatalog;
use chaingate_core::types::{Allow, NetworkOptionsResponse, ProtocolError, Version};

/// Version of the exchange-API protocol this adapter speaks.
pub const PROTOCOL_VERSION: &str = "1.4.10";

/// Derive the capability descriptor from the client's self-reported
/// capabilities and the error catalog's final snapshot.
///
/// Seals the catalog: the descriptor is served verbatim for the process
/// lifetime, so the error list must not grow afterwards. No side effects
/// beyond that seal; called exactly once per service instance.
pub fn network_options(client: &dyn ChainClient, catalog: &ErrorCatalog) -> NetworkOptionsResponse {
    let errors = catalog
        .seal_and_list()
        .into_iter()
        .map(|def| ProtocolError {
            code: def.code,
            message: def.message,
            retriable: def.retriable,
            details: None,
        })
        .collect();

    NetworkOptionsResponse {
        version: Version {
            protocol_version: PROTOCOL_VERSION.into(),
            node_version: client.node_version(),
        },
        allow: Allow {
            operation_statuses: client.operation_statuses(),
            operation_types: client.supported_operations(),
            errors,
            historical_balance_lookup: true,
        },
    }
}
