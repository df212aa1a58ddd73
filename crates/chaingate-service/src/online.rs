//! The online service — the primary dispatcher.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use chaingate_core::client::{BlockSummary, ChainClient};
use chaingate_core::errors::{register_builtin, ErrorCatalog, GatewayError, GatewayResult};
use chaingate_core::types::{
    AccountBalanceRequest, AccountBalanceResponse, AccountCoinsRequest, AccountCoinsResponse,
    Block, BlockIdentifier, BlockRequest, BlockResponse, BlockTransactionRequest,
    BlockTransactionResponse, MempoolResponse, MempoolTransactionRequest,
    MempoolTransactionResponse, MetadataRequest, NetworkIdentifier, NetworkListResponse,
    NetworkOptionsResponse, NetworkRequest, NetworkStatusResponse,
};

use crate::api::{ApiResult, DataApi};
use crate::options;

/// Bound on the one-time genesis lookup at construction. Independent of any
/// caller-supplied deadline; per-request operations carry no adapter-side
/// timeout at all.
pub const GENESIS_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

const GENESIS_HEIGHT: i64 = 1;

/// One configured adapter bound to a single logical network.
///
/// All fields are immutable after construction and requests share no mutable
/// state, so one instance serves any number of concurrent requests without
/// locks. The error catalog is sealed before the instance exists.
pub struct OnlineService {
    client: Arc<dyn ChainClient>,
    network: NetworkIdentifier,
    options: NetworkOptionsResponse,
    /// Genesis identity, `Some` for every connected instance; `None` only
    /// for the detached core an offline service wraps.
    genesis: Option<BlockIdentifier>,
    catalog: Arc<ErrorCatalog>,
}

impl OnlineService {
    /// Build a connected instance.
    ///
    /// Registers the built-in and client-specific error kinds, seals the
    /// catalog into the options descriptor, then establishes genesis
    /// identity by fetching block height 1 under [`GENESIS_FETCH_TIMEOUT`].
    /// A service cannot start without genesis identity — it is part of every
    /// status response's contract — so failure or timeout here fails
    /// construction outright.
    pub async fn connect(
        network: NetworkIdentifier,
        client: Arc<dyn ChainClient>,
        catalog: Arc<ErrorCatalog>,
    ) -> GatewayResult<Self> {
        let mut service = Self::detached(network, client, catalog);
        let block = tokio::time::timeout(
            GENESIS_FETCH_TIMEOUT,
            service.client.block_by_height(Some(GENESIS_HEIGHT)),
        )
        .await
        .map_err(|_| GatewayError::NodeRequest("genesis block fetch timed out".into()))??;

        tracing::info!(
            blockchain = %service.network.blockchain,
            network = %service.network.network,
            genesis_hash = %block.block.hash,
            "exchange API service connected"
        );
        service.genesis = Some(block.block);
        Ok(service)
    }

    /// Build the shared immutable core without touching the network.
    /// Genesis identity stays absent; only the offline wrapper uses this.
    pub(crate) fn detached(
        network: NetworkIdentifier,
        client: Arc<dyn ChainClient>,
        catalog: Arc<ErrorCatalog>,
    ) -> Self {
        register_builtin(&catalog);
        client.register_errors(&catalog);
        let options = options::network_options(client.as_ref(), &catalog);
        Self {
            client,
            network,
            options,
            genesis: None,
            catalog,
        }
    }

    pub fn network(&self) -> &NetworkIdentifier {
        &self.network
    }

    pub fn options(&self) -> &NetworkOptionsResponse {
        &self.options
    }

    /// Genesis block identity, absent only on a detached (offline) core.
    pub fn genesis(&self) -> Option<&BlockIdentifier> {
        self.genesis.as_ref()
    }

    pub fn catalog(&self) -> &ErrorCatalog {
        &self.catalog
    }

    pub(crate) fn client(&self) -> &dyn ChainClient {
        self.client.as_ref()
    }

    pub(crate) fn translated(&self, err: GatewayError) -> chaingate_core::ProtocolError {
        self.catalog.translate(&err)
    }

    /// Resolve the block a balance lookup targets: explicit hash, explicit
    /// height, or the current head when neither is given. Returns the
    /// resolved header plus the height to query balances at (`None` = head).
    async fn resolve_balance_block(
        &self,
        request: &AccountBalanceRequest,
    ) -> GatewayResult<(BlockSummary, Option<i64>)> {
        use chaingate_core::types::PartialBlockIdentifier;

        match request.block_identifier.as_ref() {
            Some(PartialBlockIdentifier { hash: Some(hash), .. }) => {
                let block = self.client.block_by_hash(hash).await?;
                let height = block.block.index;
                Ok((block, Some(height)))
            }
            Some(PartialBlockIdentifier { index: Some(index), .. }) => {
                let block = self.client.block_by_height(Some(*index)).await?;
                Ok((block, Some(*index)))
            }
            _ => {
                let block = self.client.block_by_height(None).await?;
                Ok((block, None))
            }
        }
    }
}

#[async_trait]
impl DataApi for OnlineService {
    /// Answered from immutable instance state; no chain-client call.
    async fn network_list(&self, _request: &MetadataRequest) -> ApiResult<NetworkListResponse> {
        Ok(NetworkListResponse {
            network_identifiers: vec![self.network.clone()],
        })
    }

    /// Answered from immutable instance state; no chain-client call.
    async fn network_options(
        &self,
        _request: &NetworkRequest,
    ) -> ApiResult<NetworkOptionsResponse> {
        Ok(self.options.clone())
    }

    /// Composes head block, peer list and sync status. The first failure
    /// short-circuits the whole operation; partial responses are never
    /// produced.
    async fn network_status(&self, _request: &NetworkRequest) -> ApiResult<NetworkStatusResponse> {
        let block = self
            .client
            .block_by_height(None)
            .await
            .map_err(|e| self.translated(e))?;
        let peers = self.client.peers().await.map_err(|e| self.translated(e))?;
        let sync_status = self
            .client
            .sync_status()
            .await
            .map_err(|e| self.translated(e))?;

        Ok(NetworkStatusResponse {
            current_block_identifier: block.block,
            current_block_timestamp: block.millisecond_timestamp,
            genesis_block_identifier: self.genesis.clone(),
            oldest_block_identifier: None,
            sync_status: Some(sync_status),
            peers,
        })
    }

    /// Resolves the target block, then queries balances at that height.
    /// Address format validation is delegated to the chain client.
    async fn account_balance(
        &self,
        request: &AccountBalanceRequest,
    ) -> ApiResult<AccountBalanceResponse> {
        let (block, height) = self
            .resolve_balance_block(request)
            .await
            .map_err(|e| self.translated(e))?;

        let balances = self
            .client
            .balances(&request.account_identifier.address, height)
            .await
            .map_err(|e| self.translated(e))?;

        Ok(AccountBalanceResponse {
            block_identifier: block.block,
            balances,
            metadata: None,
        })
    }

    /// Relevant only for UTXO-based chains; this chain family is
    /// account-based, so the operation is unsupported regardless of
    /// connectivity.
    async fn account_coins(
        &self,
        _request: &AccountCoinsRequest,
    ) -> ApiResult<AccountCoinsResponse> {
        Err(self.translated(GatewayError::Offline))
    }

    async fn block(&self, request: &BlockRequest) -> ApiResult<BlockResponse> {
        let partial = &request.block_identifier;
        let resolved = match (&partial.hash, partial.index) {
            (Some(hash), _) => self
                .client
                .block_transactions_by_hash(hash)
                .await
                .map_err(|e| self.translated(e))?,
            (None, Some(index)) => self
                .client
                .block_transactions_by_height(Some(index))
                .await
                .map_err(|e| self.translated(e))?,
            (None, None) => {
                return Err(self.translated(GatewayError::BadArgument(
                    "at least one of hash or index must be specified".into(),
                )))
            }
        };

        Ok(BlockResponse {
            block: Block {
                block_identifier: resolved.block.block,
                parent_block_identifier: resolved.block.parent_block,
                timestamp: resolved.block.millisecond_timestamp,
                transactions: resolved.transactions,
                metadata: None,
            },
            other_transactions: None,
        })
    }

    /// Fetches the transaction by hash without re-validating block
    /// membership — the target chain family has instant finality, so no
    /// fork reconciliation is needed.
    async fn block_transaction(
        &self,
        request: &BlockTransactionRequest,
    ) -> ApiResult<BlockTransactionResponse> {
        let transaction = self
            .client
            .confirmed_tx(&request.transaction_identifier.hash)
            .await
            .map_err(|e| self.translated(e))?;

        Ok(BlockTransactionResponse { transaction })
    }

    async fn mempool(&self, _request: &NetworkRequest) -> ApiResult<MempoolResponse> {
        let transaction_identifiers =
            self.client.mempool().await.map_err(|e| self.translated(e))?;

        Ok(MempoolResponse {
            transaction_identifiers,
        })
    }

    async fn mempool_transaction(
        &self,
        request: &MempoolTransactionRequest,
    ) -> ApiResult<MempoolTransactionResponse> {
        let transaction = self
            .client
            .mempool_tx(&request.transaction_identifier.hash)
            .await
            .map_err(|e| self.translated(e))?;

        Ok(MempoolTransactionResponse {
            transaction,
            metadata: None,
        })
    }
}
