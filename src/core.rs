//! Core traits and types for Ordkit.
//!
//! This module defines:
//! - [`SeqAccessor`]: The main trait users implement to run the algorithms over custom containers.
//! - [`SeqError`]: Bounds violations reported by the range-taking operations.
//! - [`comparing`]: Comparator construction from a key-extraction function.

use std::cmp::Ordering;
use std::collections::VecDeque;
use std::error::Error;
use std::fmt;

/// A trait for random-access reads over an ordered sequence of elements.
///
/// This trait allows the sorting, searching and segmentation operations to run
/// over any collection that can hand out elements by zero-based index (e.g.
/// `Vec<T>`, slices, `VecDeque<T>`, or custom columnar containers).
///
/// Every operation materializes the sequence into a private buffer via
/// [`to_buffer`](SeqAccessor::to_buffer) before doing any work, so the
/// caller's container is never mutated and no reference to it is retained
/// after the call returns.
///
/// # Examples
///
/// Implementing for a custom struct:
///
/// ```
/// use ordkit::core::SeqAccessor;
///
/// struct MyCollection {
///     data: Vec<i64>,
/// }
///
/// impl SeqAccessor for MyCollection {
///     type Item = i64;
///
///     fn get(&self, index: usize) -> &i64 {
///         &self.data[index]
///     }
///
///     fn len(&self) -> usize {
///         self.data.len()
///     }
/// }
/// ```
pub trait SeqAccessor {
    /// Element type of the sequence.
    type Item: Clone;

    /// Returns a reference to the element at the given index.
    fn get(&self, index: usize) -> &Self::Item;

    /// Returns the number of elements in the sequence.
    fn len(&self) -> usize;

    /// Returns `true` if the sequence is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copies the sequence into an owned, randomly-indexable buffer.
    ///
    /// Implementors with a cheaper bulk copy (e.g. contiguous storage) can
    /// override this; the default reads element by element.
    fn to_buffer(&self) -> Vec<Self::Item> {
        (0..self.len()).map(|i| self.get(i).clone()).collect()
    }
}

// Blanket implementation for slices of cloneable elements.
impl<T: Clone> SeqAccessor for [T] {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn to_buffer(&self) -> Vec<T> {
        self.to_vec()
    }
}

// Explicit Vec impl to improve ergonomics (avoiding .as_slice()).
impl<T: Clone> SeqAccessor for Vec<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn to_buffer(&self) -> Vec<T> {
        self.clone()
    }
}

// Implementation for VecDeque.
// Provides O(1) random access, so it is suitable for every operation here.
impl<T: Clone> SeqAccessor for VecDeque<T> {
    type Item = T;

    fn get(&self, index: usize) -> &T {
        &self[index]
    }

    fn len(&self) -> usize {
        self.len()
    }
}

// Implementation for treating a string as a sequence of bytes.
// Note: Positions returned by the search operations are BYTE indices.
// Warning: Sorting UTF-8 bytes arbitrarily might produce invalid UTF-8 if reassembled blindly.
// But for searching/indexing it is valid.
impl SeqAccessor for str {
    type Item = u8;

    fn get(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn to_buffer(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

impl SeqAccessor for String {
    type Item = u8;

    fn get(&self, index: usize) -> &u8 {
        &self.as_bytes()[index]
    }

    fn len(&self) -> usize {
        self.len()
    }

    fn to_buffer(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }
}

/// Errors reported by the range-taking operations.
///
/// Every precondition is checked before any work on the materialized buffer,
/// so a failing call has no observable side effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeqError {
    /// Range bounds fall outside the sequence, or the range is inverted.
    IndexOutOfRange {
        /// First index of the offending range.
        start: usize,
        /// Last index of the offending range.
        end: usize,
        /// Length of the sequence the range was applied to.
        len: usize,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeqError::IndexOutOfRange { start, end, len } => write!(
                f,
                "index range [{start}, {end}] out of bounds for sequence of length {len}"
            ),
        }
    }
}

impl Error for SeqError {}

/// Builds a three-way comparator from a key-extraction function.
///
/// Lets the sorts and the pattern search order or equate elements by an
/// arbitrary derived key instead of requiring the element type to be `Ord`
/// itself.
///
/// # Examples
///
/// ```
/// use ordkit::core::comparing;
/// use ordkit::sort::mergesort_by;
///
/// let words = vec!["pear", "fig", "banana"];
/// let by_len = comparing(|w: &&str| w.len());
///
/// assert_eq!(mergesort_by(&words, by_len), vec!["fig", "pear", "banana"]);
/// ```
pub fn comparing<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a, b| key(a).cmp(&key(b))
}
