//! Error catalog and failure translation.
//!
//! Every failure the adapter can return is drawn from a closed vocabulary of
//! [`ErrorDefinition`]s held in an [`ErrorCatalog`]. The catalog is populated
//! once during service construction (built-in kinds first, then whatever the
//! chain client registers), sealed, and read-only for the rest of the
//! process. Internal failures ([`GatewayError`]) are translated at the
//! dispatcher boundary into the catalog-backed [`ProtocolError`] shape; no
//! raw internal failure ever crosses that boundary.

use std::collections::BTreeMap;
use std::sync::RwLock;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::types::{Metadata, ProtocolError};

/// Result alias used throughout the adapter and the chain-client trait.
pub type GatewayResult<T> = Result<T, GatewayError>;

// ─── Stable error codes ───────────────────────────────────────────────────────

/// Codes of the built-in failure kinds. Chain-client specific kinds must
/// register codes outside this range (`>= codes::CLIENT_BASE`).
pub mod codes {
    pub const INTERNAL: i32 = 0;
    pub const OFFLINE: i32 = 1;
    pub const BAD_ARGUMENT: i32 = 2;
    pub const INVALID_TRANSACTION: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const NODE_REQUEST: i32 = 5;
    pub const INTERPRETING: i32 = 6;
    pub const CANCELED: i32 = 7;

    /// First code available to chain-client specific registrations.
    pub const CLIENT_BASE: i32 = 32;
}

// ─── Error definition ─────────────────────────────────────────────────────────

/// One entry of the sealed error vocabulary: a stable code, its message and
/// whether a caller may retry. Served verbatim inside the network options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorDefinition {
    pub code: i32,
    pub message: String,
    pub retriable: bool,
}

impl ErrorDefinition {
    pub fn new(code: i32, message: impl Into<String>, retriable: bool) -> Self {
        Self {
            code,
            message: message.into(),
            retriable,
        }
    }
}

// ─── Error catalog ────────────────────────────────────────────────────────────

struct CatalogInner {
    sealed: bool,
    defs: BTreeMap<i32, ErrorDefinition>,
}

/// Append-then-freeze registry of error definitions.
///
/// Lifecycle: unsealed at construction, populated during service startup,
/// sealed exactly once before the first network-options descriptor is built.
/// Registration after seal (or of a duplicate code) is dropped with a
/// diagnostic rather than failing — a late registration bug must not take a
/// running service down.
///
/// # Thread safety
/// Writers are only active during startup, but `list` is called per request
/// under concurrent load, so reads take a shared lock and return fresh
/// snapshots never aliased to internal storage.
pub struct ErrorCatalog {
    inner: RwLock<CatalogInner>,
}

impl ErrorCatalog {
    /// Create an empty, unsealed catalog.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(CatalogInner {
                sealed: false,
                defs: BTreeMap::new(),
            }),
        }
    }

    /// Register a definition. First registration of a code wins; duplicates
    /// and post-seal attempts are dropped with a warning.
    pub fn register(&self, def: ErrorDefinition) {
        let mut inner = self.inner.write().unwrap();
        if inner.sealed {
            tracing::warn!(code = def.code, "error registration after seal ignored");
            return;
        }
        if inner.defs.contains_key(&def.code) {
            tracing::warn!(code = def.code, "duplicate error registration ignored");
            return;
        }
        inner.defs.insert(def.code, def);
    }

    /// Transition to read-only. Idempotent.
    pub fn seal(&self) {
        self.inner.write().unwrap().sealed = true;
    }

    /// Whether the catalog has been sealed.
    pub fn is_sealed(&self) -> bool {
        self.inner.read().unwrap().sealed
    }

    /// Snapshot of all registered definitions, ordered by code. The returned
    /// collection is independently allocated; later registrations never
    /// mutate a previously returned snapshot.
    pub fn list(&self) -> Vec<ErrorDefinition> {
        let inner = self.inner.read().unwrap();
        inner.defs.values().cloned().collect()
    }

    /// Seal the catalog and return the final snapshot in one step.
    pub fn seal_and_list(&self) -> Vec<ErrorDefinition> {
        let mut inner = self.inner.write().unwrap();
        inner.sealed = true;
        inner.defs.values().cloned().collect()
    }

    /// Look up a single definition by code.
    pub fn lookup(&self, code: i32) -> Option<ErrorDefinition> {
        self.inner.read().unwrap().defs.get(&code).cloned()
    }

    /// Translate an internal failure into the protocol error shape.
    ///
    /// Every failure kind reachable from a dispatcher must have been
    /// registered before seal; hitting an unregistered code here is a wiring
    /// bug, reported loudly in debug builds and downgraded to a generic
    /// non-retriable shape in release.
    pub fn translate(&self, err: &GatewayError) -> ProtocolError {
        let code = err.code();
        match self.lookup(code) {
            Some(def) => ProtocolError {
                code,
                message: def.message,
                retriable: def.retriable,
                details: err.detail_map(),
            },
            None => {
                debug_assert!(false, "error code {code} translated before registration");
                tracing::error!(code, "translating unregistered error code");
                ProtocolError {
                    code,
                    message: "unregistered error code".into(),
                    retriable: false,
                    details: err.detail_map(),
                }
            }
        }
    }
}

impl Default for ErrorCatalog {
    fn default() -> Self {
        Self::new()
    }
}

/// Register the built-in failure kinds. Called exactly once per catalog,
/// before the chain client adds its own kinds and the catalog seals.
pub fn register_builtin(catalog: &ErrorCatalog) {
    catalog.register(ErrorDefinition::new(codes::INTERNAL, "internal error", false));
    catalog.register(ErrorDefinition::new(
        codes::OFFLINE,
        "endpoint unavailable in offline mode",
        false,
    ));
    catalog.register(ErrorDefinition::new(codes::BAD_ARGUMENT, "bad argument", false));
    catalog.register(ErrorDefinition::new(
        codes::INVALID_TRANSACTION,
        "invalid transaction",
        false,
    ));
    catalog.register(ErrorDefinition::new(codes::NOT_FOUND, "object not found", false));
    catalog.register(ErrorDefinition::new(
        codes::NODE_REQUEST,
        "node request failed",
        true,
    ));
    catalog.register(ErrorDefinition::new(
        codes::INTERPRETING,
        "unable to interpret node data",
        false,
    ));
    catalog.register(ErrorDefinition::new(codes::CANCELED, "request canceled", true));
}

// ─── Internal failure taxonomy ────────────────────────────────────────────────

/// Typed failures raised inside the adapter or by the chain client.
///
/// Each variant maps to one registered [`ErrorDefinition`] by code; the
/// variant payload is the per-occurrence detail and never changes the
/// catalog entry itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    #[error("internal error: {0}")]
    Internal(String),

    /// Operation requires connectivity this deployment does not have.
    #[error("endpoint unavailable in offline mode")]
    Offline,

    #[error("bad argument: {0}")]
    BadArgument(String),

    /// Hex/decoding failure of a caller-supplied transaction.
    #[error("invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("not found: {0}")]
    NotFound(String),

    /// Transient failure talking to the node — retriable.
    #[error("node request failed: {0}")]
    NodeRequest(String),

    /// The node answered with data the adapter cannot interpret.
    #[error("unable to interpret node data: {0}")]
    Interpreting(String),

    #[error("request canceled")]
    Canceled,

    /// A chain-client specific kind, registered at startup through
    /// [`crate::client::ChainClient::register_errors`].
    #[error("client error {code}: {detail}")]
    Client { code: i32, detail: String },
}

impl GatewayError {
    /// The stable catalog code this failure translates to.
    pub fn code(&self) -> i32 {
        match self {
            Self::Internal(_) => codes::INTERNAL,
            Self::Offline => codes::OFFLINE,
            Self::BadArgument(_) => codes::BAD_ARGUMENT,
            Self::InvalidTransaction(_) => codes::INVALID_TRANSACTION,
            Self::NotFound(_) => codes::NOT_FOUND,
            Self::NodeRequest(_) => codes::NODE_REQUEST,
            Self::Interpreting(_) => codes::INTERPRETING,
            Self::Canceled => codes::CANCELED,
            Self::Client { code, .. } => *code,
        }
    }

    /// Per-occurrence detail text, if any.
    fn detail(&self) -> Option<&str> {
        match self {
            Self::Offline | Self::Canceled => None,
            Self::Internal(d)
            | Self::BadArgument(d)
            | Self::InvalidTransaction(d)
            | Self::NotFound(d)
            | Self::NodeRequest(d)
            | Self::Interpreting(d)
            | Self::Client { detail: d, .. } => {
                if d.is_empty() {
                    None
                } else {
                    Some(d)
                }
            }
        }
    }

    fn detail_map(&self) -> Option<Metadata> {
        self.detail().map(|d| {
            let mut map = Metadata::new();
            map.insert("reason".into(), Value::String(d.to_string()));
            map
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn builtin_catalog() -> ErrorCatalog {
        let catalog = ErrorCatalog::new();
        register_builtin(&catalog);
        catalog
    }

    #[test]
    fn builtin_codes_are_unique() {
        let catalog = builtin_catalog();
        let defs = catalog.list();
        for pair in defs.windows(2) {
            assert!(pair[0].code < pair[1].code);
        }
    }

    #[test]
    fn duplicate_registration_keeps_first() {
        let catalog = ErrorCatalog::new();
        catalog.register(ErrorDefinition::new(42, "first", false));
        catalog.register(ErrorDefinition::new(42, "second", true));
        let defs = catalog.list();
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].message, "first");
        assert!(!defs[0].retriable);
    }

    #[test]
    fn seal_is_monotonic_and_drops_late_registrations() {
        let catalog = builtin_catalog();
        catalog.seal();
        catalog.seal();
        let before = catalog.list();
        catalog.register(ErrorDefinition::new(99, "too late", false));
        assert_eq!(catalog.list(), before);
        assert!(catalog.is_sealed());
    }

    #[test]
    fn list_snapshots_are_independent() {
        let catalog = builtin_catalog();
        let a = catalog.list();
        let b = catalog.list();
        assert_eq!(a, b);
        // A registration between snapshots must not touch the first one.
        let len_before = a.len();
        catalog.register(ErrorDefinition::new(codes::CLIENT_BASE, "client kind", true));
        assert_eq!(a.len(), len_before);
        assert_eq!(catalog.list().len(), len_before + 1);
    }

    #[test]
    fn list_is_safe_under_concurrent_registration() {
        let catalog = Arc::new(ErrorCatalog::new());
        let writer = {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                for code in 0..200 {
                    catalog.register(ErrorDefinition::new(code, format!("e{code}"), false));
                }
            })
        };
        let reader = {
            let catalog = Arc::clone(&catalog);
            std::thread::spawn(move || {
                for _ in 0..200 {
                    let snapshot = catalog.list();
                    // Never observe a torn entry.
                    for def in &snapshot {
                        assert_eq!(def.message, format!("e{}", def.code));
                    }
                }
            })
        };
        writer.join().unwrap();
        reader.join().unwrap();
    }

    #[test]
    fn translate_carries_definition_and_detail() {
        let catalog = builtin_catalog();
        catalog.seal();
        let err = catalog.translate(&GatewayError::InvalidTransaction("odd length".into()));
        assert_eq!(err.code, codes::INVALID_TRANSACTION);
        assert_eq!(err.message, "invalid transaction");
        assert!(!err.retriable);
        let details = err.details.unwrap();
        assert_eq!(details["reason"], "odd length");
    }

    #[test]
    fn translate_offline_has_no_details() {
        let catalog = builtin_catalog();
        catalog.seal();
        let err = catalog.translate(&GatewayError::Offline);
        assert_eq!(err.code, codes::OFFLINE);
        assert!(err.details.is_none());
        assert!(!err.retriable);
    }

    #[test]
    fn translate_does_not_mutate_catalog() {
        let catalog = builtin_catalog();
        catalog.seal();
        let before = catalog.list();
        let _ = catalog.translate(&GatewayError::NodeRequest("timeout".into()));
        let _ = catalog.translate(&GatewayError::BadArgument("missing field".into()));
        assert_eq!(catalog.list(), before);
    }

    #[test]
    fn node_request_is_retriable() {
        let catalog = builtin_catalog();
        catalog.seal();
        let err = catalog.translate(&GatewayError::NodeRequest("connection reset".into()));
        assert!(err.retriable);
    }

    #[test]
    fn client_kind_translates_through_registration() {
        let catalog = builtin_catalog();
        catalog.register(ErrorDefinition::new(
            codes::CLIENT_BASE,
            "sequence mismatch",
            false,
        ));
        catalog.seal();
        let err = catalog.translate(&GatewayError::Client {
            code: codes::CLIENT_BASE,
            detail: "expected 4, got 2".into(),
        });
        assert_eq!(err.message, "sequence mismatch");
        assert_eq!(err.details.unwrap()["reason"], "expected 4, got 2");
    }
}
