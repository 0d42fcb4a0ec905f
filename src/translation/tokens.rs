/*!
 * Token estimation heuristics.
 */

/// Estimate the token count of a text.
///
/// Rough rule of thumb: one token per four characters of English text.
/// This is an order-of-magnitude signal for cost estimates and the UI,
/// never a billing-accurate figure.
pub fn estimate_token_count(text: &str) -> usize {
    text.len().div_ceil(4)
}
