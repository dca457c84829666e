//! Myers' diff algorithm.
//!
//! * time: `O((N+M)D)`
//! * space `O(N+M)`
//!
//! See [the original article by Eugene W. Myers](http://www.xmailserver.org/diff2.pdf)
//! describing it. Adapted from
//! <https://github.com/mitsuhiko/similar/blob/7e15c44de11a1cd61e1149189929e189ef977fd8/src/algorithms/myers.rs>,
//! generalised over an injected equality predicate so that all granularities
//! and whitespace policies share this one alignment routine, and made
//! cooperatively cancellable: the divide loop polls the caller's
//! `Cancellation` once per edit-distance iteration and aborts with a
//! distinct error instead of returning a partial script.

use std::ops::{Index, IndexMut, Range};

use crate::{
    comparison::ComparisonError,
    diff::SpanPair,
    progress::Cancellation,
    utils::{common_prefix_len::common_prefix_len, common_suffix_len::common_suffix_len},
};

/// Diffs `old` against `new` under `eq` and returns the changed spans in
/// token-index space, ordered, with touching delete/insert runs already
/// merged into single two-sided spans.
pub(crate) fn myers_diff<T, F>(
    old: &[T],
    new: &[T],
    eq: &F,
    cancellation: &dyn Cancellation,
) -> Result<Vec<SpanPair>, ComparisonError>
where
    F: Fn(&T, &T) -> bool,
{
    let max_d = (old.len() + new.len()).div_ceil(2) + 1;
    let mut vb = V::new(max_d);
    let mut vf = V::new(max_d);
    let mut collector = SpanCollector::default();

    conquer(
        old,
        0..old.len(),
        new,
        0..new.len(),
        &mut vf,
        &mut vb,
        eq,
        cancellation,
        &mut collector,
    )?;

    Ok(collector.spans)
}

/// Accumulates changed spans in left-to-right order, merging spans that touch
/// on both sides. Matched regions are never recorded; they are the gaps
/// between spans.
#[derive(Debug, Default)]
struct SpanCollector {
    spans: Vec<SpanPair>,
}

impl SpanCollector {
    fn push(&mut self, before: Range<usize>, after: Range<usize>) {
        if before.is_empty() && after.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.before.end == before.start && last.after.end == after.start {
                last.before.end = before.end;
                last.after.end = after.end;
                return;
            }
        }
        self.spans.push(SpanPair { before, after });
    }
}

// A D-path is a path which starts at (0,0) that has exactly D non-diagonal
// edges. All D-paths consist of a (D - 1)-path followed by a non-diagonal edge
// and then a possibly empty sequence of diagonal edges called a snake.

/// `V` contains the endpoints of the furthest reaching `D-paths`. For each
/// recorded endpoint `(x,y)` in diagonal `k`, we only need to retain `x`
/// because `y` can be computed from `x - k`. In other words, `V` is an array of
/// integers where `V[k]` contains the row index of the endpoint of the furthest
/// reaching path in diagonal `k`.
///
/// We can't use a traditional Vec to represent `V` since we use `k` as an index
/// and it can take on negative values. So instead `V` is represented as a
/// light-weight wrapper around a Vec plus an `offset` which is the maximum
/// value `k` can take on in order to map negative `k`'s back to a value >= 0.
#[derive(Debug)]
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        // max_d should fit in isize for the algorithm to work correctly
        let offset = isize::try_from(max_d).unwrap_or(isize::MAX);
        Self {
            offset,
            v: vec![0; 2 * max_d],
        }
    }

    fn len(&self) -> usize { self.v.len() }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, index: isize) -> &Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        &self.v[idx.min(self.v.len().saturating_sub(1))]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, index: isize) -> &mut Self::Output {
        let idx = usize::try_from(index + self.offset).unwrap_or(usize::MAX);
        let len = self.v.len();
        &mut self.v[idx.min(len.saturating_sub(1))]
    }
}

fn split_at(range: Range<usize>, at: usize) -> (Range<usize>, Range<usize>) {
    (range.start..at, at..range.end)
}

/// A `Snake` is a sequence of diagonal edges in the edit graph.  Normally
/// a snake has a start end end point (and it is possible for a snake to have
/// a length of zero, meaning the start and end points are the same) however
/// we do not need the end point which is why it's not implemented here.
///
/// The divide part of a divide-and-conquer strategy. A D-path has D+1 snakes
/// some of which may be empty. The divide step requires finding the ceil(D/2) +
/// 1 or middle snake of an optimal D-path. The idea for doing so is to
/// simultaneously run the basic algorithm in both the forward and reverse
/// directions until furthest reaching forward and reverse paths starting at
/// opposing corners 'overlap'.
#[allow(clippy::too_many_arguments)]
fn find_middle_snake<T, F>(
    old: &[T],
    old_range: Range<usize>,
    new: &[T],
    new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    eq: &F,
    cancellation: &dyn Cancellation,
) -> Result<Option<(usize, usize)>, ComparisonError>
where
    F: Fn(&T, &T) -> bool,
{
    let n = old_range.len();
    let m = new_range.len();

    // By Lemma 1 in the paper, the optimal edit script length is odd or even as
    // `delta` is odd or even.
    let delta = isize::try_from(n).unwrap_or(isize::MAX) - isize::try_from(m).unwrap_or(isize::MAX);
    let odd = delta & 1 == 1;

    // The initial point at (0, -1)
    vf[1] = 0;
    // The initial point at (N, M+1)
    vb[1] = 0;

    let d_max = (n + m).div_ceil(2) + 1;
    assert!(vf.len() >= d_max);
    assert!(vb.len() >= d_max);

    let d_max_isize = isize::try_from(d_max).unwrap_or(isize::MAX);
    for d in 0..d_max_isize {
        if cancellation.is_cancelled() {
            return Err(ComparisonError::Cancelled);
        }

        // Forward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                vf[k + 1]
            } else {
                vf[k - 1] + 1
            };
            let y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            // The coordinate of the start of a snake
            let (x0, y0) = (x, y);
            //  While these sequences are identical, keep moving through the
            //  graph with no cost
            if x < old_range.len() && y < new_range.len() {
                let advance = common_prefix_len(
                    old,
                    old_range.start + x..old_range.end,
                    new,
                    new_range.start + y..new_range.end,
                    eq,
                );
                x += advance;
            }

            // This is the new best x value
            vf[k] = x;

            // Only check for connections from the forward search when N - M is
            // odd and when there is a reciprocal k line coming from the other
            // direction.
            if odd && (k - delta).abs() <= (d - 1) && vf[k] + vb[-(k - delta)] >= n {
                // Return the snake
                return Ok(Some((x0 + old_range.start, y0 + new_range.start)));
            }
        }

        // Backward path
        for k in (-d..=d).rev().step_by(2) {
            let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                vb[k + 1]
            } else {
                vb[k - 1] + 1
            };
            let mut y = usize::try_from(isize::try_from(x).unwrap_or(isize::MAX) - k).unwrap_or(0);

            // The coordinate of the start of a snake
            if x < n && y < m {
                let advance = common_suffix_len(
                    old,
                    old_range.start..old_range.start + n - x,
                    new,
                    new_range.start..new_range.start + m - y,
                    eq,
                );
                x += advance;
                y += advance;
            }

            // This is the new best x value
            vb[k] = x;

            if !odd && (k - delta).abs() <= d && vb[k] + vf[-(k - delta)] >= n {
                // Return the snake
                return Ok(Some((n - x + old_range.start, m - y + new_range.start)));
            }
        }
    }

    Ok(None)
}

#[allow(clippy::too_many_arguments)]
fn conquer<T, F>(
    old: &[T],
    mut old_range: Range<usize>,
    new: &[T],
    mut new_range: Range<usize>,
    vf: &mut V,
    vb: &mut V,
    eq: &F,
    cancellation: &dyn Cancellation,
    collector: &mut SpanCollector,
) -> Result<(), ComparisonError>
where
    F: Fn(&T, &T) -> bool,
{
    // Matched prefixes and suffixes are not recorded; only the changed middle
    // needs aligning.
    let prefix_len = common_prefix_len(old, old_range.clone(), new, new_range.clone(), eq);
    old_range.start += prefix_len;
    new_range.start += prefix_len;

    let suffix_len = common_suffix_len(old, old_range.clone(), new, new_range.clone(), eq);
    old_range.end -= suffix_len;
    new_range.end -= suffix_len;

    if old_range.is_empty() && new_range.is_empty() {
        // do nothing
    } else if new_range.is_empty() || old_range.is_empty() {
        collector.push(old_range, new_range);
    } else if let Some((x_start, y_start)) = find_middle_snake(
        old,
        old_range.clone(),
        new,
        new_range.clone(),
        vf,
        vb,
        eq,
        cancellation,
    )? {
        let (old_a, old_b) = split_at(old_range, x_start);
        let (new_a, new_b) = split_at(new_range, y_start);
        conquer(old, old_a, new, new_a, vf, vb, eq, cancellation, collector)?;
        conquer(old, old_b, new, new_b, vf, vb, eq, cancellation, collector)?;
    } else {
        collector.push(old_range, new_range);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::progress::{CancellationFlag, Never};

    fn exact(a: &char, b: &char) -> bool { a == b }

    fn diff(old: &str, new: &str) -> Vec<SpanPair> {
        let old: Vec<char> = old.chars().collect();
        let new: Vec<char> = new.chars().collect();
        myers_diff(&old, &new, &exact, &Never).unwrap()
    }

    #[test]
    fn test_empty_diff() {
        assert_eq!(diff("", ""), vec![]);
    }

    #[test]
    fn test_identical_content() {
        assert_eq!(diff("abc", "abc"), vec![]);
    }

    #[test]
    fn test_insert_only() {
        assert_eq!(diff("", "ab"), vec![SpanPair {
            before: 0..0,
            after: 0..2
        }]);
    }

    #[test]
    fn test_delete_only() {
        assert_eq!(diff("ab", ""), vec![SpanPair {
            before: 0..2,
            after: 0..0
        }]);
    }

    #[test]
    fn test_replacement_between_prefix_and_suffix() {
        assert_eq!(diff("abcd", "axd"), vec![SpanPair {
            before: 1..3,
            after: 1..2
        }]);
    }

    #[test]
    fn test_two_separate_changes() {
        assert_eq!(diff("abcd", "axcy"), vec![
            SpanPair {
                before: 1..2,
                after: 1..2
            },
            SpanPair {
                before: 3..4,
                after: 3..4
            }
        ]);
    }

    #[test]
    fn test_cancellation_aborts_with_an_error() {
        let flag = CancellationFlag::new();
        flag.cancel();

        let old: Vec<char> = "first version".chars().collect();
        let new: Vec<char> = "second version".chars().collect();
        assert_eq!(
            myers_diff(&old, &new, &exact, &flag),
            Err(ComparisonError::Cancelled)
        );
    }
}
