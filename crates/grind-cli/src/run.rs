//! where: calldata-grind pipeline; what: grind, load key, fetch nonce, sign, write; why: one sequential pass per invocation

use crate::config::RunPlan;
use crate::output::write_signed_txs;
use crate::rpc::{connect, fetch_account_state, select_nonce};
use anyhow::Context;
use grind_core::{grind, intrinsic_gas, GrindOutcome};
use grind_tx::units::format_ether;
use grind_tx::{build_eip1559, load_signer, sign_tx, SignedRawTx, TxParams};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Clone, Debug)]
pub struct RunReport {
    pub outcome: GrindOutcome,
    pub txs: Vec<SignedRawTx>,
    pub out: PathBuf,
}

pub async fn run(plan: &RunPlan) -> anyhow::Result<RunReport> {
    let budget = &plan.grind.budget;
    info!(
        zeros = budget.zeros,
        nonzeros = budget.nonzeros,
        weighted = budget.weighted_size(),
        cap = budget.size,
        rounds = plan.grind.rounds,
        trials = plan.grind.trials_per_round,
        codec = %plan.grind.codec,
        "grinding calldata"
    );
    let mut rng = match plan.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let outcome = grind(&plan.grind, &mut rng).context("grinding calldata")?;

    let signer = load_signer(&plan.key_file).context("loading private key")?;
    let from = signer.address();
    info!(%from, to = %plan.to, "sending from {from} to {}", plan.to);

    let state = match &plan.rpc_url {
        Some(rpc_url) => {
            let provider = connect(rpc_url);
            match fetch_account_state(&provider, from).await {
                Ok(state) => Some(state),
                Err(err) if plan.nonce.is_some() => {
                    warn!(
                        %rpc_url,
                        error = %format!("{err:#}"),
                        "account lookup failed; using fixed nonce"
                    );
                    None
                }
                Err(err) => {
                    return Err(err.context(format!("querying account state from {rpc_url}")))
                }
            }
        }
        None => None,
    };
    if let Some(state) = &state {
        info!(balance_eth = %format_ether(state.balance), "account balance");
        if state.chain_id != plan.chain_id {
            warn!(
                node_chain_id = state.chain_id,
                tx_chain_id = plan.chain_id,
                "node chain id differs from configured chain id"
            );
        }
    }
    let nonce = select_nonce(plan.nonce, state.as_ref())
        .context("no nonce source: set --nonce or --rpc-url")?;
    info!(nonce, "current nonce");

    let calldata = outcome.best.compressed.clone();
    let required_gas = intrinsic_gas(&calldata);
    if required_gas > plan.gas_limit {
        warn!(
            required_gas,
            gas_limit = plan.gas_limit,
            "gas limit below intrinsic gas of the calldata"
        );
    }

    let base = TxParams {
        chain_id: plan.chain_id,
        nonce,
        to: plan.to,
        value: plan.value,
        gas_limit: plan.gas_limit,
        max_fee_per_gas: plan.max_fee_per_gas,
        max_priority_fee_per_gas: plan.max_priority_fee_per_gas,
        input: calldata.into(),
    };
    let mut txs = Vec::new();
    for offset in 0..plan.tx_count {
        let params = base.nonce_offset(offset);
        let signed = sign_tx(&signer, build_eip1559(&params))
            .with_context(|| format!("signing tx with nonce {}", params.nonce))?;
        txs.push(signed);
    }
    info!(count = txs.len(), "prepared {} transactions", txs.len());

    write_signed_txs(&plan.out, &txs)?;
    if let Some(last) = txs.last() {
        info!(out = %plan.out.display(), tx_hash = %last.hash, "wrote signed transactions");
    }
    Ok(RunReport {
        outcome,
        txs,
        out: plan.out.clone(),
    })
}
