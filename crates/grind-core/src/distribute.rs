//! where: calldata shaping; what: spread one value evenly through a buffer; why: runs of the same byte compress well

/// Rearranges `arr` so that every occurrence of `value` lands on an evenly
/// spaced index, `floor(k * len / (count + 1))` for `k in 0..count`.
///
/// Every other element keeps its original relative order and fills the
/// remaining slots. The multiset of elements is unchanged.
pub fn distribute_evenly<T: Copy + PartialEq>(arr: &[T], value: T) -> Vec<T> {
    let len = arr.len();
    let value_count = arr.iter().filter(|item| **item == value).count();
    if value_count == 0 || value_count == len {
        return arr.to_vec();
    }

    let mut is_value_slot = vec![false; len];
    for position in value_positions(len, value_count) {
        is_value_slot[position] = true;
    }

    let mut others = arr.iter().copied().filter(|item| *item != value);
    let mut out = Vec::with_capacity(len);
    for slot in is_value_slot {
        if slot {
            out.push(value);
        } else if let Some(item) = others.next() {
            out.push(item);
        }
    }
    out
}

/// Index positions used for `value_count` occurrences in a buffer of `len`.
///
/// Positions are distinct while `value_count < len`.
pub fn value_positions(len: usize, value_count: usize) -> impl Iterator<Item = usize> {
    let len_u128 = len as u128;
    let slots = value_count as u128 + 1;
    (0..value_count).map(move |k| ((k as u128 * len_u128) / slots) as usize)
}
