//! Construction-API operations of the online service.

use async_trait::async_trait;

use chaingate_core::codec;
use chaingate_core::types::{
    ConstructionCombineRequest, ConstructionCombineResponse, ConstructionDeriveRequest,
    ConstructionDeriveResponse, ConstructionHashRequest, ConstructionMetadataRequest,
    ConstructionMetadataResponse, ConstructionParseRequest, ConstructionParseResponse,
    ConstructionPayloadsRequest, ConstructionPayloadsResponse, ConstructionPreprocessRequest,
    ConstructionPreprocessResponse, ConstructionSubmitRequest, TransactionIdentifier,
    TransactionIdentifierResponse,
};

use crate::api::{ApiResult, ConstructionApi};
use crate::online::OnlineService;

#[async_trait]
impl ConstructionApi for OnlineService {
    /// Merge signatures into a decoded unsigned transaction. Decode failures
    /// surface as translated invalid-transaction errors.
    async fn construction_combine(
        &self,
        request: &ConstructionCombineRequest,
    ) -> ApiResult<ConstructionCombineResponse> {
        let tx_bytes = codec::decode_hex(&request.unsigned_transaction)
            .map_err(|e| self.translated(e))?;

        let signed_tx = self
            .client()
            .signed_tx(&tx_bytes, &request.signatures)
            .await
            .map_err(|e| self.translated(e))?;

        Ok(ConstructionCombineResponse {
            signed_transaction: hex::encode(signed_tx),
        })
    }

    /// Map a public key to its account identifier. No metadata is carried
    /// in the response.
    async fn construction_derive(
        &self,
        request: &ConstructionDeriveRequest,
    ) -> ApiResult<ConstructionDeriveResponse> {
        let account_identifier = self
            .client()
            .account_from_pubkey(&request.public_key)
            .map_err(|e| self.translated(e))?;

        Ok(ConstructionDeriveResponse {
            account_identifier,
            metadata: None,
        })
    }

    /// Content hash over the raw decoded bytes, upper-case hex. The one
    /// operation performed entirely locally, without the chain client.
    async fn construction_hash(
        &self,
        request: &ConstructionHashRequest,
    ) -> ApiResult<TransactionIdentifierResponse> {
        let tx_bytes =
            codec::decode_hex(&request.signed_transaction).map_err(|e| self.translated(e))?;

        Ok(TransactionIdentifierResponse {
            transaction_identifier: TransactionIdentifier::new(codec::transaction_hash(&tx_bytes)),
            metadata: None,
        })
    }

    async fn construction_metadata(
        &self,
        request: &ConstructionMetadataRequest,
    ) -> ApiResult<ConstructionMetadataResponse> {
        let metadata = self
            .client()
            .construction_metadata(request.options.as_ref())
            .await
            .map_err(|e| self.translated(e))?;

        Ok(ConstructionMetadataResponse { metadata })
    }

    async fn construction_parse(
        &self,
        request: &ConstructionParseRequest,
    ) -> ApiResult<ConstructionParseResponse> {
        let tx_bytes = codec::decode_hex(&request.transaction).map_err(|e| self.translated(e))?;

        let parsed = self
            .client()
            .parse_tx(request.signed, &tx_bytes)
            .await
            .map_err(|e| self.translated(e))?;

        Ok(ConstructionParseResponse {
            operations: parsed.operations,
            account_identifier_signers: parsed.signers,
            metadata: None,
        })
    }

    async fn construction_payloads(
        &self,
        request: &ConstructionPayloadsRequest,
    ) -> ApiResult<ConstructionPayloadsResponse> {
        self.client()
            .construction_payloads(request)
            .await
            .map_err(|e| self.translated(e))
    }

    async fn construction_preprocess(
        &self,
        request: &ConstructionPreprocessRequest,
    ) -> ApiResult<ConstructionPreprocessResponse> {
        self.client()
            .preprocess(request)
            .await
            .map_err(|e| self.translated(e))
    }

    async fn construction_submit(
        &self,
        request: &ConstructionSubmitRequest,
    ) -> ApiResult<TransactionIdentifierResponse> {
        let tx_bytes =
            codec::decode_hex(&request.signed_transaction).map_err(|e| self.translated(e))?;

        let receipt = self
            .client()
            .submit(&tx_bytes)
            .await
            .map_err(|e| self.translated(e))?;

        Ok(TransactionIdentifierResponse {
            transaction_identifier: receipt.transaction,
            metadata: receipt.metadata,
        })
    }
}
