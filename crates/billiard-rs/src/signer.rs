use crate::{crypto, error::ClientError};
use ed25519_dalek::{SigningKey, ed25519::signature::SignerMut};
use std::fmt;
use stellar_strkey::ed25519::PublicKey;
use stellar_xdr::curr::{
    AccountId, DecoratedSignature, Hash, PublicKey as XDRPublicKey, Signature, SignatureHint,
    Transaction,
};

/// An ed25519 key pair authorizing transactions for a single account.
#[derive(Clone)]
pub struct Signer {
    signing_key: SigningKey,
    public_key: PublicKey,
    account_id: AccountId,
}

impl Signer {
    pub fn new(signing_key: SigningKey) -> Self {
        let public_key = PublicKey(*signing_key.verifying_key().as_bytes());
        let account_id = AccountId(XDRPublicKey::PublicKeyTypeEd25519(public_key.0.into()));

        Self {
            signing_key,
            public_key,
            account_id,
        }
    }

    /// Creates a signer around a brand new key pair.
    ///
    /// Every call draws a new seed; keys are never cached or written anywhere,
    /// so the identity only lives as long as the returned value.
    pub fn generate() -> Self {
        Self::new(SigningKey::from_bytes(&crypto::generate_secret_key()))
    }

    pub fn public_key(&self) -> PublicKey {
        self.public_key.clone()
    }

    pub fn account_id(&self) -> AccountId {
        self.account_id.clone()
    }

    pub fn sign_transaction(
        &self,
        tx: &Transaction,
        network_id: &Hash,
    ) -> Result<DecoratedSignature, ClientError> {
        let tx_hash = crypto::transaction_hash(tx, network_id)?;

        let hint = SignatureHint(
            self.signing_key.verifying_key().to_bytes()[28..]
                .try_into()
                .map_err(|_| {
                    ClientError::SigningFailed("Failed to create signature hint".to_string())
                })?,
        );

        let signature = Signature(
            self.signing_key
                .clone()
                .sign(&tx_hash.0)
                .to_bytes()
                .to_vec()
                .try_into()
                .map_err(|_| {
                    ClientError::SigningFailed("Failed to convert signature to XDR".to_string())
                })?,
        );

        Ok(DecoratedSignature { hint, signature })
    }
}

impl fmt::Display for Signer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.public_key)
    }
}
