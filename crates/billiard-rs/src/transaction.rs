use crate::{Env, Signer, error::ClientError, operation::Operations};
use stellar_xdr::curr::{
    Memo, Operation, Preconditions, SequenceNumber, Transaction, TransactionEnvelope,
    TransactionExt, TransactionV1Envelope, VecM,
};
use tracing::debug;

pub const DEFAULT_TRANSACTION_FEES: u32 = 100;

#[derive(Clone)]
pub struct TransactionBuilder {
    pub fee: u32,
    pub source: Signer,
    pub operations: Vec<Operation>,
    pub env: Env,
}

impl TransactionBuilder {
    pub fn new(source: &Signer, env: &Env) -> Self {
        Self {
            fee: DEFAULT_TRANSACTION_FEES,
            source: source.clone(),
            operations: Vec::new(),
            env: env.clone(),
        }
    }

    pub fn add_operation(mut self, operation: Operation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Builds the transaction at the source account's next sequence number.
    pub async fn build(self) -> Result<Transaction, ClientError> {
        let operations = self.operations.try_into().map_err(|e| {
            ClientError::XdrEncodingFailed(format!("Failed to convert operations: {}", e))
        })?;

        let account_id = self.source.account_id().to_string();
        let entry = self.env.get_account(&account_id).await?;
        let seq_num = entry.seq_num.0.checked_add(1).ok_or_else(|| {
            ClientError::TransactionBuildFailed("Sequence number overflow".to_string())
        })?;
        debug!(account = %account_id, seq_num, "loaded source account");

        Ok(Transaction {
            fee: self.fee,
            seq_num: SequenceNumber::from(seq_num),
            source_account: self.source.account_id().into(),
            cond: Preconditions::None,
            memo: Memo::None,
            operations,
            ext: TransactionExt::V0,
        })
    }

    /// Builds the transaction, simulates it and folds the simulation output
    /// (resource fee, Soroban data, authorization entries) back into it.
    pub async fn simulate_and_build(self, env: &Env) -> Result<Transaction, ClientError> {
        let source = self.source.clone();
        let tx = self.build().await?;
        let tx_envelope = sign_envelope(&tx, env, &source)?;
        let simulation = env.simulate_transaction(&tx_envelope).await?;

        if let Some(error) = simulation.error.as_ref() {
            return Err(ClientError::TransactionSimulationFailed(error.clone()));
        }

        let updated_fee = DEFAULT_TRANSACTION_FEES.max(
            u32::try_from(
                (tx.operations.len() as u64 * DEFAULT_TRANSACTION_FEES as u64)
                    + simulation.min_resource_fee,
            )
            .map_err(|_| ClientError::InvalidArgument("Transaction fee too high".to_string()))?,
        );
        debug!(
            fee = updated_fee,
            min_resource_fee = simulation.min_resource_fee,
            "simulated transaction"
        );

        let results = simulation.results().map_err(|e| {
            ClientError::TransactionSimulationFailed(format!(
                "Failed to decode simulation results: {}",
                e
            ))
        })?;

        let mut operations = tx.operations.to_vec();
        if let (Some(op), Some(result)) = (operations.first_mut(), results.first()) {
            if !result.auth.is_empty() {
                *op = Operations::with_auth(op.clone(), result.auth.clone())?;
            }
        }
        let operations: VecM<Operation, 100> = operations.try_into().map_err(|e| {
            ClientError::XdrEncodingFailed(format!("Failed to convert operations: {}", e))
        })?;

        let mut tx = Transaction {
            fee: updated_fee,
            seq_num: tx.seq_num,
            source_account: tx.source_account,
            cond: tx.cond,
            memo: tx.memo,
            operations,
            ext: tx.ext,
        };

        if let Ok(tx_data) = simulation.transaction_data() {
            tx.ext = TransactionExt::V1(tx_data);
        }

        Ok(tx)
    }
}

/// Signs `tx` with `signer` and wraps it in a V1 envelope.
pub fn sign_envelope(
    tx: &Transaction,
    env: &Env,
    signer: &Signer,
) -> Result<TransactionEnvelope, ClientError> {
    let signature = signer.sign_transaction(tx, &env.network_id())?;
    let signatures = vec![signature].try_into().map_err(|_| {
        ClientError::XdrEncodingFailed("Failed to convert signatures to XDR".to_string())
    })?;

    Ok(TransactionEnvelope::Tx(TransactionV1Envelope {
        tx: tx.clone(),
        signatures,
    }))
}
