use crate::error::ClientError;
use sha2::{Digest, Sha256};
use stellar_xdr::curr::{
    Hash, Limits, Transaction, TransactionSignaturePayload,
    TransactionSignaturePayloadTaggedTransaction, WriteXdr,
};

pub fn sha256_hash(data: &[u8]) -> Hash {
    let hash_bytes: [u8; 32] = Sha256::digest(data).into();
    Hash(hash_bytes)
}

/// Fresh ed25519 seed taken from the thread-local CSPRNG.
pub fn generate_secret_key() -> [u8; 32] {
    rand::random()
}

/// Hash of the transaction signature payload. This is both what gets signed
/// and the identifier the network reports for the transaction.
pub fn transaction_hash(tx: &Transaction, network_id: &Hash) -> Result<Hash, ClientError> {
    let signature_payload = TransactionSignaturePayload {
        network_id: network_id.clone(),
        tagged_transaction: TransactionSignaturePayloadTaggedTransaction::Tx(tx.clone()),
    };

    let payload_xdr = signature_payload
        .to_xdr(Limits::none())
        .map_err(|e| ClientError::XdrEncodingFailed(e.to_string()))?;

    Ok(sha256_hash(&payload_xdr))
}
