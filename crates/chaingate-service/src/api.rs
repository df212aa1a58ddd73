//! The exchange-API service contract.
//!
//! One polymorphic surface split along the protocol's own seam: the data API
//! (network/account/block/mempool queries) and the construction API
//! (transaction building and broadcast). Both service variants implement
//! both halves; [`ExchangeApi`] bundles them for the transport layer.

use async_trait::async_trait;

use chaingate_core::types::{
    AccountBalanceRequest, AccountBalanceResponse, AccountCoinsRequest, AccountCoinsResponse,
    BlockRequest, BlockResponse, BlockTransactionRequest, BlockTransactionResponse,
    ConstructionCombineRequest, ConstructionCombineResponse, ConstructionDeriveRequest,
    ConstructionDeriveResponse, ConstructionHashRequest, ConstructionMetadataRequest,
    ConstructionMetadataResponse, ConstructionParseRequest, ConstructionParseResponse,
    ConstructionPayloadsRequest, ConstructionPayloadsResponse, ConstructionPreprocessRequest,
    ConstructionPreprocessResponse, ConstructionSubmitRequest, MempoolResponse,
    MempoolTransactionRequest, MempoolTransactionResponse, MetadataRequest, NetworkListResponse,
    NetworkOptionsResponse, NetworkRequest, NetworkStatusResponse, ProtocolError,
    TransactionIdentifierResponse,
};

/// Every operation returns either its typed response or one translated
/// protocol error — never both, never partial.
pub type ApiResult<T> = Result<T, ProtocolError>;

/// Network, account, block and mempool queries.
#[async_trait]
pub trait DataApi: Send + Sync {
    async fn network_list(&self, request: &MetadataRequest) -> ApiResult<NetworkListResponse>;

    async fn network_options(&self, request: &NetworkRequest) -> ApiResult<NetworkOptionsResponse>;

    async fn network_status(&self, request: &NetworkRequest) -> ApiResult<NetworkStatusResponse>;

    async fn account_balance(
        &self,
        request: &AccountBalanceRequest,
    ) -> ApiResult<AccountBalanceResponse>;

    /// UTXO listing — only meaningful on UTXO-based chains.
    async fn account_coins(&self, request: &AccountCoinsRequest) -> ApiResult<AccountCoinsResponse>;

    async fn block(&self, request: &BlockRequest) -> ApiResult<BlockResponse>;

    async fn block_transaction(
        &self,
        request: &BlockTransactionRequest,
    ) -> ApiResult<BlockTransactionResponse>;

    async fn mempool(&self, request: &NetworkRequest) -> ApiResult<MempoolResponse>;

    async fn mempool_transaction(
        &self,
        request: &MempoolTransactionRequest,
    ) -> ApiResult<MempoolTransactionResponse>;
}

/// Transaction construction and broadcast.
#[async_trait]
pub trait ConstructionApi: Send + Sync {
    async fn construction_combine(
        &self,
        request: &ConstructionCombineRequest,
    ) -> ApiResult<ConstructionCombineResponse>;

    async fn construction_derive(
        &self,
        request: &ConstructionDeriveRequest,
    ) -> ApiResult<ConstructionDeriveResponse>;

    async fn construction_hash(
        &self,
        request: &ConstructionHashRequest,
    ) -> ApiResult<TransactionIdentifierResponse>;

    async fn construction_metadata(
        &self,
        request: &ConstructionMetadataRequest,
    ) -> ApiResult<ConstructionMetadataResponse>;

    async fn construction_parse(
        &self,
        request: &ConstructionParseRequest,
    ) -> ApiResult<ConstructionParseResponse>;

    async fn construction_payloads(
        &self,
        request: &ConstructionPayloadsRequest,
    ) -> ApiResult<ConstructionPayloadsResponse>;

    async fn construction_preprocess(
        &self,
        request: &ConstructionPreprocessRequest,
    ) -> ApiResult<ConstructionPreprocessResponse>;

    async fn construction_submit(
        &self,
        request: &ConstructionSubmitRequest,
    ) -> ApiResult<TransactionIdentifierResponse>;
}

/// The full service contract the transport layer dispatches against.
///
/// Blanket-implemented for anything covering both halves, so both service
/// variants can be stored as `Arc<dyn ExchangeApi>`.
pub trait ExchangeApi: DataApi + ConstructionApi {}

impl<T: DataApi + ConstructionApi + ?Sized> ExchangeApi for T {}
