//! where: grind-tx entry; what: key loading, EIP-1559 build, signing and recovery; why: keep alloy out of the grind crate

pub mod build;
pub mod constants;
pub mod key;
pub mod recover;
pub mod sign;
pub mod units;

pub use build::{build_eip1559, TxParams};
pub use key::{load_signer, parse_signer, KeyError};
pub use recover::{recover_raw_tx, RecoveredTx, RecoveryError};
pub use sign::{check_recovered, sign_tx, SignedRawTx, TxError};
