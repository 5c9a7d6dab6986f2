//! Growable, indexable container with an explicit doubling capacity policy.
//!
//! Conventions
//! - `capacity()` reports the array's own logical capacity. It follows
//!   `grown_capacity` exactly and ignores any slack the allocator may hand out.
//! - Only the first `size()` slots are addressable; capacity past `size()`
//!   is reserved space, not elements.
//! - `erase` shifts the tail left by one (stable order), it never swaps with
//!   the last element.

use std::fmt;

use crate::error::FigureError;

/// Next logical capacity for an array holding `current` slots that needs room
/// for `required` elements, or `None` when no growth is needed.
///
/// Doubles the current capacity (0 grows to 1) unless `required` is larger.
#[inline]
pub fn grown_capacity(current: usize, required: usize) -> Option<usize> {
    if required <= current {
        return None;
    }
    let doubled = if current == 0 {
        1
    } else {
        current.saturating_mul(2)
    };
    Some(doubled.max(required))
}

/// Dynamic array with amortized O(1) append and checked O(1) indexing.
///
/// Invariants:
/// - `size() <= capacity()`.
/// - Clones own an independent buffer with the same logical capacity.
pub struct DynamicArray<T> {
    buf: Vec<T>,
    capacity: usize,
}

impl<T> DynamicArray<T> {
    /// Empty array with no backing storage.
    #[inline]
    pub fn new() -> Self {
        Self {
            buf: Vec::new(),
            capacity: 0,
        }
    }

    /// Empty array reporting a logical capacity of `capacity`.
    ///
    /// Storage is allocated on demand, so an oversized request costs nothing
    /// until elements are pushed.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::new(),
            capacity,
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Append at the end, growing per `grown_capacity` when full.
    pub fn push_back(&mut self, value: T) {
        self.ensure_capacity(self.buf.len() + 1);
        self.buf.push(value);
    }

    /// Remove the element at `index` and shift every later element left by one.
    ///
    /// O(size - index). On `OutOfRange` the array is left untouched.
    pub fn erase(&mut self, index: usize) -> Result<T, FigureError> {
        self.check(index)?;
        Ok(self.buf.remove(index))
    }

    pub fn get(&self, index: usize) -> Result<&T, FigureError> {
        self.check(index)?;
        Ok(&self.buf[index])
    }

    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, FigureError> {
        self.check(index)?;
        Ok(&mut self.buf[index])
    }

    /// Overwrite the element at `index`, returning the previous value.
    pub fn set(&mut self, index: usize, value: T) -> Result<T, FigureError> {
        let slot = self.get_mut(index)?;
        Ok(std::mem::replace(slot, value))
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf
    }

    #[inline]
    fn check(&self, index: usize) -> Result<(), FigureError> {
        if index >= self.buf.len() {
            return Err(FigureError::out_of_range(index, self.buf.len()));
        }
        Ok(())
    }

    fn ensure_capacity(&mut self, required: usize) {
        if let Some(next) = grown_capacity(self.capacity, required) {
            self.buf.reserve_exact(next - self.buf.len());
            self.capacity = next;
        }
    }
}

impl<T> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for DynamicArray<T> {
    fn clone(&self) -> Self {
        Self {
            buf: self.buf.clone(),
            capacity: self.capacity,
        }
    }
}

impl<T: PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.buf == other.buf
    }
}

impl<T: fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicArray")
            .field("size", &self.buf.len())
            .field("capacity", &self.capacity)
            .field("items", &self.buf)
            .finish()
    }
}

impl<T> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<T> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<'a, T> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.iter()
    }
}

impl<T> IntoIterator for DynamicArray<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.buf.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_capacity_then_doubling() {
        let mut arr: DynamicArray<usize> = DynamicArray::new();
        assert_eq!((arr.size(), arr.capacity()), (0, 0));
        let mut seen = Vec::new();
        for k in 0..9 {
            arr.push_back(k);
            seen.push(arr.capacity());
        }
        assert_eq!(seen, vec![1, 2, 4, 4, 8, 8, 8, 8, 16]);
        for k in 0..9 {
            assert_eq!(*arr.get(k).unwrap(), k);
        }
    }

    #[test]
    fn explicit_capacity_grows_from_its_start() {
        let mut arr = DynamicArray::with_capacity(3);
        assert_eq!(arr.capacity(), 3);
        assert!(arr.is_empty());
        arr.extend([1, 2, 3]);
        assert_eq!(arr.capacity(), 3);
        arr.push_back(4);
        assert_eq!(arr.capacity(), 6);
    }

    #[test]
    fn grown_capacity_policy() {
        assert_eq!(grown_capacity(0, 0), None);
        assert_eq!(grown_capacity(0, 1), Some(1));
        assert_eq!(grown_capacity(4, 5), Some(8));
        assert_eq!(grown_capacity(4, 11), Some(11));
        assert_eq!(grown_capacity(4, 4), None);
    }

    #[test]
    fn huge_capacity_request_is_not_allocated() {
        let mut arr = DynamicArray::with_capacity(usize::MAX / 2);
        assert_eq!(arr.capacity(), usize::MAX / 2);
        arr.push_back(7u64);
        arr.push_back(8);
        assert_eq!(arr.size(), 2);
        assert_eq!(arr.capacity(), usize::MAX / 2);
        let copy = arr.clone();
        assert_eq!(copy.capacity(), arr.capacity());
        assert_eq!(copy.as_slice(), &[7, 8]);
    }

    #[test]
    fn erase_shifts_tail_left() {
        let mut arr: DynamicArray<char> = "abcd".chars().collect();
        assert_eq!(arr.erase(1), Ok('b'));
        assert_eq!(arr.as_slice(), &['a', 'c', 'd']);
        assert_eq!(arr.erase(2), Ok('d'));
        assert_eq!(arr.as_slice(), &['a', 'c']);
    }

    #[test]
    fn erase_out_of_range_leaves_array_unchanged() {
        let mut arr: DynamicArray<i32> = [1, 2, 3].into_iter().collect();
        let cap = arr.capacity();
        assert_eq!(
            arr.erase(10),
            Err(FigureError::OutOfRange { index: 10, len: 3 })
        );
        assert_eq!(arr.erase(3), Err(FigureError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(arr.as_slice(), &[1, 2, 3]);
        assert_eq!(arr.capacity(), cap);
    }

    #[test]
    fn reserved_capacity_is_not_addressable() {
        let mut arr = DynamicArray::with_capacity(4);
        arr.push_back(7u8);
        assert!(arr.get(0).is_ok());
        assert!(matches!(arr.get(1), Err(FigureError::OutOfRange { index: 1, len: 1 })));
        assert!(arr.get_mut(3).is_err());
        assert!(arr.set(2, 0).is_err());
    }

    #[test]
    fn set_and_get_mut_write_in_place() {
        let mut arr: DynamicArray<i32> = (0..3).collect();
        assert_eq!(arr.set(1, 10), Ok(1));
        *arr.get_mut(2).unwrap() += 5;
        assert_eq!(arr.as_slice(), &[0, 10, 7]);
    }

    #[test]
    fn clone_is_independent() {
        let mut original: DynamicArray<String> =
            ["a", "b"].iter().map(|s| s.to_string()).collect();
        let mut copy = original.clone();
        assert_eq!(copy.capacity(), original.capacity());
        copy.push_back("c".into());
        copy.set(0, "z".into()).unwrap();
        assert_eq!(original.as_slice(), &["a".to_string(), "b".to_string()]);
        original.erase(1).unwrap();
        assert_eq!(copy.size(), 3);
        assert_eq!(copy.get(1).unwrap(), "b");
    }

    #[test]
    fn clone_assignment_replaces_contents() {
        let source: DynamicArray<i32> = (0..5).collect();
        let mut target: DynamicArray<i32> = (10..12).collect();
        target.clone_from(&source);
        assert_eq!(target, source);
        assert_eq!(target.capacity(), source.capacity());
    }

    proptest! {
        #[test]
        fn push_keeps_elements_and_bounds(items in proptest::collection::vec(any::<i64>(), 0..200)) {
            let mut arr = DynamicArray::new();
            for (k, v) in items.iter().enumerate() {
                arr.push_back(*v);
                prop_assert_eq!(arr.size(), k + 1);
                prop_assert!(arr.capacity() >= arr.size());
            }
            prop_assert_eq!(arr.as_slice(), items.as_slice());
            prop_assert!(arr.get(items.len()).is_err());
        }

        #[test]
        fn erase_preserves_relative_order(
            items in proptest::collection::vec(any::<u16>(), 1..64),
            pick in any::<prop::sample::Index>(),
        ) {
            let i = pick.index(items.len());
            let mut arr: DynamicArray<u16> = items.iter().copied().collect();
            let removed = arr.erase(i).unwrap();
            prop_assert_eq!(removed, items[i]);
            prop_assert_eq!(arr.size(), items.len() - 1);
            let mut expected = items.clone();
            expected.remove(i);
            prop_assert_eq!(arr.as_slice(), expected.as_slice());
        }
    }
}
