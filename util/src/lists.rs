//! Non-mutating surgery on token sequences.
//!
//! Every function here takes the input as a slice and returns freshly allocated vectors, so the
//! caller keeps the original sequence intact. Out of range positions are clipped to the bounds of
//! the sequence instead of being rejected.

#[cfg(test)]
#[path = "tests/test_lists.rs"]
mod test_lists;

/// Splits a sequence into the first `index` elements and the remainder.
///
/// An `index` past the end is clipped to `xs.len()`, so concatenating both parts always
/// reproduces `xs`.
pub fn split_at<T: Clone>(xs: &[T], index: usize) -> (Vec<T>, Vec<T>) {
    let (prefix, suffix) = xs.split_at(index.min(xs.len()));
    (prefix.to_vec(), suffix.to_vec())
}

/// Splits a sequence into three pieces at the positions `start` and `end`.
///
/// This splits at `end` first and then splits the head at `start`, so for `start <= end` the
/// middle piece holds `end - start` elements (less when clipped). A `start` past `end` yields an
/// empty middle piece.
///
/// ```
/// use parcor_util::lists::split_at_3;
///
/// let digits: Vec<char> = "0123456".chars().collect();
/// let (a, b, c) = split_at_3(&digits, 2, 4);
/// assert_eq!((a, b, c), (vec!['0', '1'], vec!['2', '3'], vec!['4', '5', '6']));
/// ```
pub fn split_at_3<T: Clone>(xs: &[T], start: usize, end: usize) -> (Vec<T>, Vec<T>, Vec<T>) {
    let (head, tail) = split_at(xs, end);
    let (prefix, middle) = split_at(&head, start);
    (prefix, middle, tail)
}

/// Replaces `count` elements starting at `start` with the elements of `insert`.
///
/// Returns the resulting sequence together with the removed elements. The removed range is
/// clipped to the sequence, and `insert` may have any length.
///
/// ```
/// use parcor_util::lists::splice;
///
/// let chars: Vec<&str> = vec!["a", "b", "c", "d", "e", "f"];
/// let (result, removed) = splice(&chars, 3, 1, [" ", "_"]);
/// assert_eq!(result.concat(), "abc _ef");
/// assert_eq!(removed.concat(), "d");
/// ```
pub fn splice<T: Clone>(
    xs: &[T],
    start: usize,
    count: usize,
    insert: impl IntoIterator<Item = T>,
) -> (Vec<T>, Vec<T>) {
    let start = start.min(xs.len());
    let end = start.saturating_add(count).min(xs.len());
    let mut result = xs.to_vec();
    let removed = result.splice(start..end, insert).collect();
    (result, removed)
}

/// Moves the inclusive window `xs[begin..=end]` to the destination position `dest`.
///
/// For `dest < begin` the window is reinserted starting at `dest`. For `dest > end` the window is
/// reinserted so that it ends at `dest` (clipped to the end of the sequence). A destination inside
/// the window leaves the sequence unchanged, as does an empty or inverted window.
///
/// ```
/// use parcor_util::lists::rearrange;
///
/// assert_eq!(rearrange(&[0, 1, 2, 3], 1, 2, 0), [1, 2, 0, 3]);
/// assert_eq!(rearrange(&[0, 1, 2, 3], 1, 2, 3), [0, 3, 1, 2]);
/// assert_eq!(rearrange(&[0, 1, 2, 3], 1, 2, 1), [0, 1, 2, 3]);
/// ```
pub fn rearrange<T: Clone>(xs: &[T], begin: usize, end: usize, dest: usize) -> Vec<T> {
    if begin > end || begin >= xs.len() {
        return xs.to_vec();
    }
    let end = end.min(xs.len() - 1);
    if (begin..=end).contains(&dest) {
        return xs.to_vec();
    }

    let (prefix, window, suffix) = split_at_3(xs, begin, end + 1);
    // `dest` is in the coordinates of `xs`, removing the window shifts everything after it
    let dest = if dest > end { dest - (end - begin) } else { dest };

    let mut remainder = prefix;
    remainder.extend(suffix);
    let (mut result, post) = split_at(&remainder, dest);
    result.extend(window);
    result.extend(post);
    result
}
