//! The offline service — a connectivity-free variant of the dispatcher.
//!
//! Wraps a detached [`OnlineService`] core and reuses its network identity
//! and options descriptor unchanged. Every operation requiring live chain
//! connectivity is overridden with the uniform offline error; the rest
//! delegate to the wrapped instance. Each override and each delegation is
//! written out here so the override set is visible at the type level.

use std::sync::Arc;

use async_trait::async_trait;

use chaingate_core::client::ChainClient;
use chaingate_core::errors::{ErrorCatalog, GatewayError};
use chaingate_core::types::{
    AccountBalanceRequest, AccountBalanceResponse, AccountCoinsRequest, AccountCoinsResponse,
    BlockRequest, BlockResponse, BlockTransactionRequest, BlockTransactionResponse,
    ConstructionCombineRequest, ConstructionCombineResponse, ConstructionDeriveRequest,
    ConstructionDeriveResponse, ConstructionHashRequest, ConstructionMetadataRequest,
    ConstructionMetadataResponse, ConstructionParseRequest, ConstructionParseResponse,
    ConstructionPayloadsRequest, ConstructionPayloadsResponse, ConstructionPreprocessRequest,
    ConstructionPreprocessResponse, ConstructionSubmitRequest, MempoolResponse,
    MempoolTransactionRequest, MempoolTransactionResponse, MetadataRequest, NetworkIdentifier,
    NetworkListResponse, NetworkOptionsResponse, NetworkRequest, NetworkStatusResponse,
    TransactionIdentifierResponse,
};

use crate::api::{ApiResult, ConstructionApi, DataApi};
use crate::online::OnlineService;

/// Offline variant of the exchange API.
///
/// Supports the subset of the construction API that needs no connectivity
/// plus the static network queries; everything else uniformly fails with
/// the offline error and never reaches the chain client.
pub struct OfflineService {
    inner: OnlineService,
}

impl OfflineService {
    /// Build an offline instance. Performs no network I/O: the wrapped core
    /// is constructed detached, so genesis identity stays absent and
    /// construction cannot fail.
    pub fn new(
        network: NetworkIdentifier,
        client: Arc<dyn ChainClient>,
        catalog: Arc<ErrorCatalog>,
    ) -> Self {
        Self {
            inner: OnlineService::detached(network, client, catalog),
        }
    }

    pub fn network(&self) -> &NetworkIdentifier {
        self.inner.network()
    }

    pub fn options(&self) -> &NetworkOptionsResponse {
        self.inner.options()
    }

    fn unavailable<T>(&self) -> ApiResult<T> {
        Err(self.inner.catalog().translate(&GatewayError::Offline))
    }
}

#[async_trait]
impl DataApi for OfflineService {
    // Static queries delegate to the shared core.

    async fn network_list(&self, request: &MetadataRequest) -> ApiResult<NetworkListResponse> {
        self.inner.network_list(request).await
    }

    async fn network_options(&self, request: &NetworkRequest) -> ApiResult<NetworkOptionsResponse> {
        self.inner.network_options(request).await
    }

    // Everything below needs live chain access.

    async fn network_status(&self, _request: &NetworkRequest) -> ApiResult<NetworkStatusResponse> {
        self.unavailable()
    }

    async fn account_balance(
        &self,
        _request: &AccountBalanceRequest,
    ) -> ApiResult<AccountBalanceResponse> {
        self.unavailable()
    }

    async fn account_coins(
        &self,
        _request: &AccountCoinsRequest,
    ) -> ApiResult<AccountCoinsResponse> {
        self.unavailable()
    }

    async fn block(&self, _request: &BlockRequest) -> ApiResult<BlockResponse> {
        self.unavailable()
    }

    async fn block_transaction(
        &self,
        _request: &BlockTransactionRequest,
    ) -> ApiResult<BlockTransactionResponse> {
        self.unavailable()
    }

    async fn mempool(&self, _request: &NetworkRequest) -> ApiResult<MempoolResponse> {
        self.unavailable()
    }

    async fn mempool_transaction(
        &self,
        _request: &MempoolTransactionRequest,
    ) -> ApiResult<MempoolTransactionResponse> {
        self.unavailable()
    }
}

#[async_trait]
impl ConstructionApi for OfflineService {
    // Pure/local construction steps are safe to perform offline.

    async fn construction_combine(
        &self,
        request: &ConstructionCombineRequest,
    ) -> ApiResult<ConstructionCombineResponse> {
        self.inner.construction_combine(request).await
    }

    async fn construction_derive(
        &self,
        request: &ConstructionDeriveRequest,
    ) -> ApiResult<ConstructionDeriveResponse> {
        self.inner.construction_derive(request).await
    }

    async fn construction_hash(
        &self,
        request: &ConstructionHashRequest,
    ) -> ApiResult<TransactionIdentifierResponse> {
        self.inner.construction_hash(request).await
    }

    async fn construction_parse(
        &self,
        request: &ConstructionParseRequest,
    ) -> ApiResult<ConstructionParseResponse> {
        self.inner.construction_parse(request).await
    }

    async fn construction_payloads(
        &self,
        request: &ConstructionPayloadsRequest,
    ) -> ApiResult<ConstructionPayloadsResponse> {
        self.inner.construction_payloads(request).await
    }

    async fn construction_preprocess(
        &self,
        request: &ConstructionPreprocessRequest,
    ) -> ApiResult<ConstructionPreprocessResponse> {
        self.inner.construction_preprocess(request).await
    }

    // Metadata derivation and broadcast need a live node.

    async fn construction_metadata(
        &self,
        _request: &ConstructionMetadataRequest,
    ) -> ApiResult<ConstructionMetadataResponse> {
        self.unavailable()
    }

    async fn construction_submit(
        &self,
        _request: &ConstructionSubmitRequest,
    ) -> ApiResult<TransactionIdentifierResponse> {
        self.unavailable()
    }
}
