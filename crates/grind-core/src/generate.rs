//! where: calldata shaping; what: random buffer with a fixed zero count; why: feed the grind loop

use crate::distribute::distribute_evenly;
use rand::Rng;

/// `zeros` zero bytes plus `nonzeros` random bytes in `1..=255`, with the
/// zeros spread evenly through the buffer.
pub fn generate_data<R: Rng + ?Sized>(zeros: usize, nonzeros: usize, rng: &mut R) -> Vec<u8> {
    let mut data = vec![0u8; zeros + nonzeros];
    for byte in data[zeros..].iter_mut() {
        *byte = rng.gen_range(1..=u8::MAX);
    }
    distribute_evenly(&data, 0)
}
