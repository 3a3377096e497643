//! Splitting a key string into near-equal chunks for the printed layout.

use crate::StampError;

/// Split `s` into `n` contiguous chunks whose lengths differ by at most one.
///
/// When the length is not divisible by `n`, the first chunks take the extra
/// characters. Lengths count characters, not bytes.
pub fn similar_splits(s: &str, n: usize) -> Result<Vec<String>, StampError> {
    let chars: Vec<char> = s.chars().collect();
    if n == 0 || n > chars.len() {
        return Err(StampError::SplitSize {
            parts: n,
            len: chars.len(),
        });
    }

    let part_size = chars.len() / n;
    let mut excess = chars.len() % n;

    let mut chunks = Vec::with_capacity(n);
    let mut index = 0;
    for _ in 0..n {
        let delta = if excess > 0 { 1 } else { 0 };
        excess = excess.saturating_sub(1);
        let next_index = index + part_size + delta;
        chunks.push(chars[index..next_index].iter().collect::<String>());
        index = next_index;
    }

    if chunks.concat() != s {
        return Err(StampError::SplitMismatch);
    }
    Ok(chunks)
}
