//! where: grind-tx signing; what: sign, encode and self-check one EIP-1559 tx; why: the output file must hold a broadcastable tx

use crate::recover::{recover_raw_tx, RecoveredTx, RecoveryError};
use alloy_consensus::{SignableTransaction, TxEip1559, TxEnvelope};
use alloy_eips::eip2718::Encodable2718;
use alloy_primitives::{Address, Signature, B256};
use alloy_signer::SignerSync;
use alloy_signer_local::PrivateKeySigner;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum TxError {
    #[error("signing failed: {0}")]
    Signing(#[from] alloy_signer::Error),
    #[error("self-check decode failed: {0}")]
    SelfCheck(#[from] RecoveryError),
    #[error("self-check sender mismatch: expected {expected}, recovered {recovered}")]
    SenderMismatch { expected: Address, recovered: Address },
    #[error("self-check chain id mismatch: expected {expected}, recovered {recovered}")]
    ChainIdMismatch { expected: u64, recovered: u64 },
    #[error("self-check nonce mismatch: expected {expected}, recovered {recovered}")]
    NonceMismatch { expected: u64, recovered: u64 },
    #[error("self-check calldata mismatch")]
    InputMismatch,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SignedRawTx {
    pub hash: B256,
    pub nonce: u64,
    /// EIP-2718 encoding: type byte followed by the signed RLP payload.
    pub raw: Vec<u8>,
}

impl SignedRawTx {
    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(&self.raw))
    }
}

pub fn sign_tx(signer: &PrivateKeySigner, tx: TxEip1559) -> Result<SignedRawTx, TxError> {
    let nonce = tx.nonce;
    let chain_id = tx.chain_id;
    let input = tx.input.clone();
    let sig_hash = tx.signature_hash();
    let signature: Signature = signer.sign_hash_sync(&sig_hash)?;
    let signed = tx.into_signed(signature);
    let hash = *signed.hash();
    let raw = TxEnvelope::from(signed).encoded_2718();

    let recovered = recover_raw_tx(&raw)?;
    check_recovered(&recovered, signer.address(), chain_id, nonce, &input)?;
    debug!(%hash, nonce, raw_len = raw.len(), "signed transaction");
    Ok(SignedRawTx { hash, nonce, raw })
}

/// Compares a decoded tx with what was signed.
pub fn check_recovered(
    recovered: &RecoveredTx,
    from: Address,
    chain_id: u64,
    nonce: u64,
    input: &[u8],
) -> Result<(), TxError> {
    if recovered.from != from {
        return Err(TxError::SenderMismatch {
            expected: from,
            recovered: recovered.from,
        });
    }
    if recovered.chain_id != chain_id {
        return Err(TxError::ChainIdMismatch {
            expected: chain_id,
            recovered: recovered.chain_id,
        });
    }
    if recovered.nonce != nonce {
        return Err(TxError::NonceMismatch {
            expected: nonce,
            recovered: recovered.nonce,
        });
    }
    if recovered.input.as_slice() != input {
        return Err(TxError::InputMismatch);
    }
    Ok(())
}
