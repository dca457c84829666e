use std::ops::Range;

/// Given two slices, ranges into them and an equality predicate, calculates
/// the length of the common prefix of the two ranges.
/// Adapted from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_prefix_len<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    eq: &impl Fn(&T, &T) -> bool,
) -> usize {
    new_range
        .zip(old_range)
        .take_while(|&(n, o)| eq(&new[n], &old[o]))
        .count()
}
