//! The `ChainClient` trait — the node-facing abstraction the adapter
//! dispatches to.
//!
//! The adapter never talks to a node directly; everything flows through an
//! implementation of this trait. Implementations wrap whatever RPC surface
//! the target chain exposes and report their capabilities (versions,
//! operation types/statuses, extra error kinds) so the adapter can build its
//! static network-options descriptor at startup.

use async_trait::async_trait;

use crate::errors::{ErrorCatalog, GatewayResult};
use crate::types::{
    AccountIdentifier, Amount, BlockIdentifier, ConstructionPayloadsRequest,
    ConstructionPayloadsResponse, ConstructionPreprocessRequest, ConstructionPreprocessResponse,
    Metadata, Operation, OperationStatus, Peer, PublicKey, Signature, SyncStatus, Transaction,
    TransactionIdentifier,
};

// ─── Client-side response shapes ──────────────────────────────────────────────

/// A block header as the chain client reports it.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockSummary {
    pub block: BlockIdentifier,
    pub parent_block: BlockIdentifier,
    /// Milliseconds since the Unix epoch.
    pub millisecond_timestamp: i64,
}

/// A block header together with its decoded transactions.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockTransactions {
    pub block: BlockSummary,
    pub transactions: Vec<Transaction>,
}

/// Operations and signer identities extracted from a raw transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedTransaction {
    pub operations: Vec<Operation>,
    pub signers: Vec<AccountIdentifier>,
}

/// The result of broadcasting a signed transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitReceipt {
    pub transaction: TransactionIdentifier,
    pub metadata: Option<Metadata>,
}

// ─── The trait ────────────────────────────────────────────────────────────────

/// Node access consumed by the adapter.
///
/// # Thread safety
/// Implementations must be `Send + Sync`; one instance is shared read-only
/// across all concurrent request handlers (`Arc<dyn ChainClient>`). Any
/// internal synchronization is the implementation's own business.
///
/// # Cancellation
/// Callers cancel by dropping the returned future; implementations must not
/// retry on their own and should honor drop promptly.
#[async_trait]
pub trait ChainClient: Send + Sync + 'static {
    /// Block header at `height`; `None` means the current head.
    async fn block_by_height(&self, height: Option<i64>) -> GatewayResult<BlockSummary>;

    /// Block header by canonical hash.
    async fn block_by_hash(&self, hash: &str) -> GatewayResult<BlockSummary>;

    /// Block header plus transactions at `height` (`None` = head).
    async fn block_transactions_by_height(
        &self,
        height: Option<i64>,
    ) -> GatewayResult<BlockTransactions>;

    /// Block header plus transactions by canonical hash.
    async fn block_transactions_by_hash(&self, hash: &str) -> GatewayResult<BlockTransactions>;

    /// Balances of `address`, optionally at a historical `height`.
    /// Address validation is the client's responsibility.
    async fn balances(&self, address: &str, height: Option<i64>) -> GatewayResult<Vec<Amount>>;

    /// A confirmed transaction by hash.
    async fn confirmed_tx(&self, hash: &str) -> GatewayResult<Transaction>;

    /// A pending (mempool) transaction by hash.
    async fn mempool_tx(&self, hash: &str) -> GatewayResult<Transaction>;

    /// Identifiers of all transactions currently in the mempool.
    async fn mempool(&self) -> GatewayResult<Vec<TransactionIdentifier>>;

    /// Currently connected peers.
    async fn peers(&self) -> GatewayResult<Vec<Peer>>;

    /// Node synchronization snapshot.
    async fn sync_status(&self) -> GatewayResult<SyncStatus>;

    /// Merge signatures into an unsigned transaction, returning the signed
    /// raw bytes.
    async fn signed_tx(
        &self,
        unsigned_tx: &[u8],
        signatures: &[Signature],
    ) -> GatewayResult<Vec<u8>>;

    /// Derive the account identifier controlled by a public key.
    fn account_from_pubkey(&self, public_key: &PublicKey) -> GatewayResult<AccountIdentifier>;

    /// Chain-specific construction metadata (sequence numbers, gas, ...)
    /// derived from preprocess options.
    async fn construction_metadata(&self, options: Option<&Metadata>) -> GatewayResult<Metadata>;

    /// Extract operations and signers from raw transaction bytes.
    async fn parse_tx(&self, signed: bool, raw_tx: &[u8]) -> GatewayResult<ParsedTransaction>;

    /// Build the unsigned transaction and signing payloads for a set of
    /// operations.
    async fn construction_payloads(
        &self,
        request: &ConstructionPayloadsRequest,
    ) -> GatewayResult<ConstructionPayloadsResponse>;

    /// Derive the options a metadata request will need from the intended
    /// operations.
    async fn preprocess(
        &self,
        request: &ConstructionPreprocessRequest,
    ) -> GatewayResult<ConstructionPreprocessResponse>;

    /// Broadcast a signed transaction.
    async fn submit(&self, signed_tx: &[u8]) -> GatewayResult<SubmitReceipt>;

    // ─── Static capabilities ──────────────────────────────────────────────────

    /// Version string of the connected node software.
    fn node_version(&self) -> String;

    /// Operation statuses this chain can report.
    fn operation_statuses(&self) -> Vec<OperationStatus>;

    /// Operation types this chain supports.
    fn supported_operations(&self) -> Vec<String>;

    /// Register chain-specific error kinds (codes `>= codes::CLIENT_BASE`).
    /// Called once at service construction, before the catalog seals.
    fn register_errors(&self, catalog: &ErrorCatalog) {
        let _ = catalog;
    }
}
