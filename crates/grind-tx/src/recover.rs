//! where: grind-tx self-check; what: decode a raw EIP-2718 tx and recover its sender; why: never write a tx that does not decode

use alloy_consensus::transaction::SignerRecoverable;
use alloy_consensus::{Transaction, TxEnvelope, Typed2718};
use alloy_eips::eip2718::{Decodable2718, Eip2718Error};
use alloy_primitives::{Address, TxKind, U256};

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RecoveryError {
    #[error("unsupported transaction type")]
    UnsupportedType,
    #[error("transaction has no chain id")]
    ChainIdMissing,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("invalid rlp")]
    InvalidRlp,
    #[error("trailing bytes after transaction")]
    TrailingBytes,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecoveredTx {
    pub from: Address,
    pub to: Option<Address>,
    pub nonce: u64,
    pub value: U256,
    pub input: Vec<u8>,
    pub gas_limit: u64,
    pub gas_price: Option<u128>,
    pub max_fee_per_gas: Option<u128>,
    pub max_priority_fee_per_gas: Option<u128>,
    pub chain_id: u64,
    pub tx_type: u8,
}

// EIP-2718: a leading byte <= 0x7f is a tx type, legacy RLP starts at 0xc0
const MAX_TYPE_BYTE: u8 = 0x7f;
const SUPPORTED_TX_TYPES: [u8; 4] = [0x01, 0x02, 0x03, 0x04];

pub fn recover_raw_tx(bytes: &[u8]) -> Result<RecoveredTx, RecoveryError> {
    if let Some(&first) = bytes.first() {
        if should_reject_typed_prefix(first) {
            return Err(RecoveryError::UnsupportedType);
        }
    }
    let envelope = TxEnvelope::decode_2718_exact(bytes).map_err(map_eip2718_error)?;
    let chain_id = envelope.chain_id().ok_or(RecoveryError::ChainIdMissing)?;

    let sender = envelope
        .recover_signer()
        .map_err(|_| RecoveryError::InvalidSignature)?;

    let recovered = match envelope {
        TxEnvelope::Legacy(tx) => recovered_from_tx(tx.tx(), sender, chain_id, tx.ty()),
        TxEnvelope::Eip2930(tx) => recovered_from_tx(tx.tx(), sender, chain_id, tx.ty()),
        TxEnvelope::Eip1559(tx) => recovered_from_tx(tx.tx(), sender, chain_id, tx.ty()),
        TxEnvelope::Eip4844(tx) => recovered_from_tx(tx.tx(), sender, chain_id, tx.ty()),
        TxEnvelope::Eip7702(tx) => recovered_from_tx(tx.tx(), sender, chain_id, tx.ty()),
    };
    Ok(recovered)
}

fn should_reject_typed_prefix(first: u8) -> bool {
    first <= MAX_TYPE_BYTE && !SUPPORTED_TX_TYPES.contains(&first)
}

fn recovered_from_tx<T: Transaction>(
    tx: &T,
    from: Address,
    chain_id: u64,
    tx_type: u8,
) -> RecoveredTx {
    let to = match tx.kind() {
        TxKind::Call(addr) => Some(addr),
        TxKind::Create => None,
    };
    let is_dynamic_fee = tx.is_dynamic_fee();
    RecoveredTx {
        from,
        to,
        nonce: tx.nonce(),
        value: tx.value(),
        input: tx.input().to_vec(),
        gas_limit: tx.gas_limit(),
        gas_price: if is_dynamic_fee { None } else { tx.gas_price() },
        max_fee_per_gas: is_dynamic_fee.then(|| tx.max_fee_per_gas()),
        max_priority_fee_per_gas: if is_dynamic_fee {
            tx.max_priority_fee_per_gas()
        } else {
            None
        },
        chain_id,
        tx_type,
    }
}

fn map_eip2718_error(error: Eip2718Error) -> RecoveryError {
    match error {
        Eip2718Error::UnexpectedType(_) => RecoveryError::UnsupportedType,
        Eip2718Error::RlpError(alloy_rlp::Error::UnexpectedLength) => RecoveryError::TrailingBytes,
        _ => RecoveryError::InvalidRlp,
    }
}
