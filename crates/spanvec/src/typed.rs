//! Scalar-typed sugar over the byte-level API.
//!
//! These helpers infer `elem_size` from a [`Scalar`] type at the call site
//! and encode/decode at the boundary. They carry no contract of their own:
//! each is a thin wrapper over the corresponding byte operation, and each
//! panics when the vector's element size does not match `T::WIDTH` (a
//! width mismatch is a programmer error, same as an out-of-bounds index).

use crate::cmp::ScalarOrd;
use crate::error::VecError;
use crate::scalar::Scalar;
use crate::vec::SpanVec;

impl SpanVec {
    /// Create a vector of `len` zero-valued `T`s, capacity == `len`.
    pub fn of<T: Scalar>(len: usize) -> Result<Self, VecError> {
        Self::new(len, T::WIDTH)
    }

    /// Create an empty vector with room for `capacity` `T`s.
    pub fn with_capacity_of<T: Scalar>(capacity: usize) -> Result<Self, VecError> {
        Self::with_capacity(capacity, T::WIDTH)
    }

    /// Create a vector holding a copy of `values`, capacity == length.
    pub fn from_values<T: Scalar>(values: &[T]) -> Result<Self, VecError> {
        let mut vec = Self::with_capacity_of::<T>(values.len())?;
        for value in values {
            vec.push_value(*value)?;
        }
        Ok(vec)
    }

    /// Append an encoded `value`.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size != T::WIDTH`.
    pub fn push_value<T: Scalar>(&mut self, value: T) -> Result<(), VecError> {
        self.check_scalar_width::<T>();
        self.push(&value.to_bytes())
    }

    /// Remove and decode the last element; `None` when empty.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size != T::WIDTH`.
    pub fn pop_value<T: Scalar>(&mut self) -> Option<T> {
        self.check_scalar_width::<T>();
        self.pop().map(T::from_bytes)
    }

    /// Decode element `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` or `elem_size != T::WIDTH`.
    pub fn get_value<T: Scalar>(&self, index: usize) -> T {
        self.check_scalar_width::<T>();
        T::from_bytes(self.get(index))
    }

    /// Overwrite element `index` with an encoded `value`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len` or `elem_size != T::WIDTH`.
    pub fn set_value<T: Scalar>(&mut self, index: usize, value: T) {
        self.check_scalar_width::<T>();
        self.set(index, &value.to_bytes());
    }

    /// Insert an encoded `value` at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index > len` or `elem_size != T::WIDTH`.
    pub fn insert_value<T: Scalar>(&mut self, index: usize, value: T) -> Result<(), VecError> {
        self.check_scalar_width::<T>();
        self.insert(index, &value.to_bytes())
    }

    /// Index of the first element equal to `key` under `T`'s total order.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size != T::WIDTH`.
    pub fn find_value<T: Scalar>(&self, key: T) -> Option<usize> {
        self.check_scalar_width::<T>();
        self.find_by(&key.to_bytes(), &ScalarOrd::<T>::new())
    }

    /// True when some element equals `key` under `T`'s total order.
    ///
    /// # Panics
    ///
    /// Panics if `elem_size != T::WIDTH`.
    pub fn contains_value<T: Scalar>(&self, key: T) -> bool {
        self.find_value(key).is_some()
    }

    fn check_scalar_width<T: Scalar>(&self) {
        assert_eq!(
            self.elem_size(),
            T::WIDTH,
            "vector holds {}-byte elements, {} is {} bytes",
            self.elem_size(),
            std::any::type_name::<T>(),
            T::WIDTH
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn of_matches_scalar_width() {
        let vec = SpanVec::of::<i64>(3).unwrap();
        assert_eq!(vec.elem_size(), 8);
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.get_value::<i64>(0), 0);
    }

    #[test]
    fn push_pop_roundtrip() {
        let mut vec = SpanVec::with_capacity_of::<i32>(0).unwrap();
        vec.push_value(-7i32).unwrap();
        vec.push_value(9i32).unwrap();
        assert_eq!(vec.pop_value::<i32>(), Some(9));
        assert_eq!(vec.pop_value::<i32>(), Some(-7));
        assert_eq!(vec.pop_value::<i32>(), None);
    }

    #[test]
    fn from_values_preserves_order() {
        let vec = SpanVec::from_values(&[3u16, 1, 2]).unwrap();
        assert_eq!(vec.len(), 3);
        assert_eq!(vec.capacity(), 3);
        assert_eq!(vec.get_value::<u16>(0), 3);
        assert_eq!(vec.get_value::<u16>(2), 2);
    }

    #[test]
    fn set_and_insert_values() {
        let mut vec = SpanVec::from_values(&[1.0f64, 3.0]).unwrap();
        vec.insert_value(1, 2.0f64).unwrap();
        vec.set_value(0, -1.0f64);
        assert_eq!(vec.get_value::<f64>(0), -1.0);
        assert_eq!(vec.get_value::<f64>(1), 2.0);
        assert_eq!(vec.get_value::<f64>(2), 3.0);
    }

    #[test]
    fn find_and_contains_values() {
        let vec = SpanVec::from_values(&[10u32, 20, 30]).unwrap();
        assert_eq!(vec.find_value(20u32), Some(1));
        assert_eq!(vec.find_value(99u32), None);
        assert!(vec.contains_value(30u32));
        assert!(!vec.contains_value(99u32));
    }

    #[test]
    #[should_panic(expected = "byte")]
    fn width_mismatch_panics() {
        let vec = SpanVec::from_values(&[1u32]).unwrap();
        let _ = vec.get_value::<u64>(0);
    }
}
