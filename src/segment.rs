//! Structural sequence operations: boundary splitting, single-index
//! splitting, and contiguous range extraction.
//!
//! These operations carry no comparator; they only rearrange or extract
//! elements by position. Like the sorts, each call reads the input once into
//! a private buffer and returns freshly owned sequences.

use crate::core::{SeqAccessor, SeqError};

/// Splits a sequence into contiguous segments at the given boundaries.
///
/// Each boundary index marks the last element included in its segment, and
/// boundaries are consumed in the (ascending) order given. Elements after
/// the last boundary form a final segment. With no boundaries, the whole
/// sequence is returned as a single segment.
///
/// Boundaries that are out of range, duplicated, or already passed never
/// match an element and are ignored.
///
/// # Examples
///
/// ```
/// use ordkit::segment::split_at_boundaries;
///
/// let parts = split_at_boundaries(&vec![1, 2, 3, 4, 5], &[1, 3]);
/// assert_eq!(parts, vec![vec![1, 2], vec![3, 4], vec![5]]);
/// ```
pub fn split_at_boundaries<A>(seq: &A, boundaries: &[usize]) -> Vec<Vec<A::Item>>
where
    A: SeqAccessor + ?Sized,
{
    let buf = seq.to_buffer();
    if boundaries.is_empty() {
        return vec![buf];
    }

    let mut segments = Vec::with_capacity(boundaries.len() + 1);
    let mut pending = boundaries.iter();
    let mut next_boundary = pending.next();
    let mut current = Vec::new();

    for (i, item) in buf.into_iter().enumerate() {
        current.push(item);
        if next_boundary == Some(&i) {
            segments.push(std::mem::take(&mut current));
            next_boundary = pending.next();
        }
    }
    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Splits a sequence around a single index: the left part holds indices
/// `[0, index)`, the right part `(index, len)`. The element at `index`
/// itself is dropped; splitting at `len` keeps everything on the left and
/// drops nothing.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfRange`] when `index > len`.
///
/// # Examples
///
/// ```
/// use ordkit::segment::split_around;
///
/// let (left, right) = split_around(&vec![10, 20, 30, 40], 1)?;
/// assert_eq!(left, vec![10]);
/// assert_eq!(right, vec![30, 40]);
/// # Ok::<(), ordkit::core::SeqError>(())
/// ```
pub fn split_around<A>(seq: &A, index: usize) -> Result<(Vec<A::Item>, Vec<A::Item>), SeqError>
where
    A: SeqAccessor + ?Sized,
{
    let mut buf = seq.to_buffer();
    if index > buf.len() {
        return Err(SeqError::IndexOutOfRange {
            start: index,
            end: index,
            len: buf.len(),
        });
    }

    let right = if index < buf.len() {
        let mut tail = buf.split_off(index);
        tail.remove(0);
        tail
    } else {
        Vec::new()
    };

    Ok((buf, right))
}

/// Extracts the contiguous inclusive range `[start, end]` of a sequence.
///
/// # Errors
///
/// Returns [`SeqError::IndexOutOfRange`] when `start` or `end` is past the
/// end of the sequence, or when `start > end`.
///
/// # Examples
///
/// ```
/// use ordkit::segment::range;
///
/// assert_eq!(range(&vec![10, 20, 30, 40], 1, 2)?, vec![20, 30]);
/// assert!(range(&vec![10, 20, 30], 2, 1).is_err());
/// # Ok::<(), ordkit::core::SeqError>(())
/// ```
pub fn range<A>(seq: &A, start: usize, end: usize) -> Result<Vec<A::Item>, SeqError>
where
    A: SeqAccessor + ?Sized,
{
    let len = seq.len();
    if start >= len || end >= len || start > end {
        return Err(SeqError::IndexOutOfRange { start, end, len });
    }

    Ok((start..=end).map(|i| seq.get(i).clone()).collect())
}
