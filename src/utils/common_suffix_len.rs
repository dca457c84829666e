use std::ops::Range;

/// Given two slices, ranges into them and an equality predicate, calculates
/// the length of the common suffix of the two ranges.
/// Adapted from <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/utils.rs>
pub fn common_suffix_len<T>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    eq: &impl Fn(&T, &T) -> bool,
) -> usize {
    new_range
        .rev()
        .zip(old_range.rev())
        .take_while(|&(n, o)| eq(&new[n], &old[o]))
        .count()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn exact(a: &u8, b: &u8) -> bool { a == b }

    #[test]
    fn test_common_suffix_len() {
        assert_eq!(
            common_suffix_len("".as_bytes(), 0..0, "".as_bytes(), 0..0, &exact),
            0
        );
        assert_eq!(
            common_suffix_len(
                "1234".as_bytes(),
                0..4,
                "X0001234".as_bytes(),
                0..8,
                &exact
            ),
            4
        );
        assert_eq!(
            common_suffix_len("1234".as_bytes(), 0..4, "Xxxx".as_bytes(), 0..4, &exact),
            0
        );
        assert_eq!(
            common_suffix_len("1234".as_bytes(), 2..4, "01234".as_bytes(), 2..5, &exact),
            2
        );
    }
}
