//! where: calldata-grind chain lookup; what: nonce, balance and chain id over JSON-RPC; why: the only network touch of a run

use alloy_primitives::{Address, U256};
use alloy_provider::{Provider, ProviderBuilder};
use anyhow::Context;
use url::Url;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AccountState {
    pub nonce: u64,
    pub balance: U256,
    pub chain_id: u64,
}

pub fn connect(rpc_url: &Url) -> impl Provider {
    ProviderBuilder::new().connect_http(rpc_url.clone())
}

pub async fn fetch_account_state<P: Provider>(
    provider: &P,
    address: Address,
) -> anyhow::Result<AccountState> {
    let nonce = provider
        .get_transaction_count(address)
        .await
        .context("eth_getTransactionCount")?;
    let balance = provider
        .get_balance(address)
        .await
        .context("eth_getBalance")?;
    let chain_id = provider.get_chain_id().await.context("eth_chainId")?;
    Ok(AccountState {
        nonce,
        balance,
        chain_id,
    })
}

/// A fixed nonce wins over the node's pending count.
pub fn select_nonce(fixed: Option<u64>, state: Option<&AccountState>) -> Option<u64> {
    fixed.or_else(|| state.map(|state| state.nonce))
}
