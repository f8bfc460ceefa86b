use std::fmt;
use std::iter::FromIterator;
use std::ops::Index;
use std::slice::Iter;

use num_traits::{AsPrimitive, Num, One, Zero};

/// Numeric element kinds the kernel accepts.
///
/// Integer and floating element types share one set of reductions and
/// manipulation routines; anything floating-point specific widens through
/// [`Array1::to_f64`] first.
pub trait Element: Copy + PartialOrd + Num + AsPrimitive<f64> + fmt::Debug {}

impl<T> Element for T where T: Copy + PartialOrd + Num + AsPrimitive<f64> + fmt::Debug {}

/// An ordered, index-addressed sequence of numbers.
///
/// Kernel operations borrow an `Array1` and return a fresh one; there is no
/// in-place mutation API.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Array1<T> {
    data: Vec<T>,
}

impl<T> Array1<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<T>) -> Self {
        Self::new(data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.data.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn shape(&self) -> (usize,) {
        (self.len(),)
    }

    pub fn first(&self) -> Option<&T> {
        self.data.first()
    }

    pub fn last(&self) -> Option<&T> {
        self.data.last()
    }

    /// Apply `f` to every element, producing a new array.
    pub fn mapv<U, F>(&self, f: F) -> Array1<U>
    where
        F: FnMut(&T) -> U,
    {
        self.data.iter().map(f).collect()
    }

    /// Gather the elements at `indices`, in that order. Panics on an
    /// out-of-range index, like slice indexing.
    pub fn select(&self, indices: &[usize]) -> Array1<T>
    where
        T: Clone,
    {
        indices.iter().map(|&i| self.data[i].clone()).collect()
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.to_vec()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

impl<T: Clone> Array1<T> {
    /// `len` copies of `value`.
    pub fn from_elem(len: usize, value: T) -> Self {
        Self::new(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self
    where
        T: Zero,
    {
        Self::from_elem(len, T::zero())
    }

    pub fn ones(len: usize) -> Self
    where
        T: One,
    {
        Self::from_elem(len, T::one())
    }
}

impl<T: Element> Array1<T> {
    /// Widen every element to `f64`.
    pub fn to_f64(&self) -> Array1<f64> {
        self.mapv(|v| (*v).as_())
    }
}

impl<T> From<Vec<T>> for Array1<T> {
    fn from(value: Vec<T>) -> Self {
        Array1::from_vec(value)
    }
}

impl<T: Clone> From<&[T]> for Array1<T> {
    fn from(value: &[T]) -> Self {
        Array1::from_vec(value.to_vec())
    }
}

impl<T> From<Array1<T>> for Vec<T> {
    fn from(value: Array1<T>) -> Self {
        value.data
    }
}

impl<T> FromIterator<T> for Array1<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array1::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a Array1<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T> AsRef<[T]> for Array1<T> {
    fn as_ref(&self) -> &[T] {
        &self.data
    }
}

impl<T> Index<usize> for Array1<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<T: fmt::Display> fmt::Display for Array1<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
