//! Entropy estimation

/// Theoretical bits of entropy for the random portion: `length * log2(pool_size)`.
///
/// This is an upper bound for the random portion only. It does not account
/// for the reduced entropy introduced by mandatory per-class seeding, and
/// the decorative prefix/suffix contribute nothing.
///
/// Returns exactly `0.0` when `pool_size <= 1` or `length == 0`.
///
/// # Example
/// ```
/// use spgcore::bits_of_entropy;
///
/// assert_eq!(bits_of_entropy(64, 10), 60.0);
/// assert_eq!(bits_of_entropy(1, 16), 0.0);
/// ```
pub fn bits_of_entropy(pool_size: usize, length: usize) -> f64 {
    if pool_size <= 1 || length == 0 {
        return 0.0;
    }
    length as f64 * (pool_size as f64).log2()
}
