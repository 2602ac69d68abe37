//! Immutable sample vectors with element-wise arithmetic.
//!
//! A declared node's values never change after declaration, so the backing
//! storage is a shared `Arc<[f64]>`: reading a node hands out a cheap clone,
//! and every arithmetic operation allocates a fresh vector.

use std::ops::{Add, Div, Mul, Neg, Sub};
use std::sync::Arc;

use serde::{Serialize, Serializer};

/// One node's values for a run, one entry per sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Samples(Arc<[f64]>);

impl Samples {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values.into())
    }

    /// `len` copies of `value`.
    pub fn constant(value: f64, len: usize) -> Self {
        Self(vec![value; len].into())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().copied()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.0.to_vec()
    }

    /// Arithmetic mean, `None` for an empty vector.
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            None
        } else {
            Some(self.0.iter().sum::<f64>() / self.0.len() as f64)
        }
    }

    /// Apply `f` to every element.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        self.iter().map(f).collect()
    }

    /// Combine two vectors element-wise. A length-1 operand broadcasts
    /// against the other.
    ///
    /// # Panics
    /// If neither operand has length 1 and their lengths differ. Use
    /// [`try_zip_with`](Self::try_zip_with) when lengths are not known to
    /// agree.
    pub fn zip_with(&self, other: &Samples, f: impl Fn(f64, f64) -> f64) -> Self {
        match self.try_zip_with(other, f) {
            Some(combined) => combined,
            None => panic!("sample length mismatch: {} vs {}", self.len(), other.len()),
        }
    }

    /// Fallible [`zip_with`](Self::zip_with): `None` when the lengths
    /// cannot be broadcast against each other.
    pub fn try_zip_with(&self, other: &Samples, f: impl Fn(f64, f64) -> f64) -> Option<Self> {
        match (self.len(), other.len()) {
            (a, b) if a == b => Some(self.iter().zip(other.iter()).map(|(x, y)| f(x, y)).collect()),
            (1, _) => {
                let x = self.0[0];
                Some(other.iter().map(|y| f(x, y)).collect())
            }
            (_, 1) => {
                let y = other.0[0];
                Some(self.iter().map(|x| f(x, y)).collect())
            }
            _ => None,
        }
    }

    /// Stretch to `len` entries. Only vectors that already have `len`
    /// entries or exactly one entry can be broadcast.
    pub fn broadcast(&self, len: usize) -> Option<Samples> {
        match self.len() {
            n if n == len => Some(self.clone()),
            1 => Some(Self::constant(self.0[0], len)),
            _ => None,
        }
    }
}

impl From<Vec<f64>> for Samples {
    fn from(values: Vec<f64>) -> Self {
        Self::new(values)
    }
}

impl From<&[f64]> for Samples {
    fn from(values: &[f64]) -> Self {
        Self(values.into())
    }
}

impl From<Vec<bool>> for Samples {
    fn from(values: Vec<bool>) -> Self {
        values.into_iter().map(|b| if b { 1.0 } else { 0.0 }).collect()
    }
}

impl From<Vec<i64>> for Samples {
    fn from(values: Vec<i64>) -> Self {
        values.into_iter().map(|v| v as f64).collect()
    }
}

impl From<f64> for Samples {
    fn from(value: f64) -> Self {
        Self::constant(value, 1)
    }
}

impl FromIterator<f64> for Samples {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for Samples {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_slice().serialize(serializer)
    }
}

macro_rules! elementwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<&Samples> for &Samples {
            type Output = Samples;
            fn $method(self, rhs: &Samples) -> Samples {
                self.zip_with(rhs, |a, b| a $op b)
            }
        }

        impl $trait<Samples> for Samples {
            type Output = Samples;
            fn $method(self, rhs: Samples) -> Samples {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&Samples> for Samples {
            type Output = Samples;
            fn $method(self, rhs: &Samples) -> Samples {
                (&self).$method(rhs)
            }
        }

        impl $trait<Samples> for &Samples {
            type Output = Samples;
            fn $method(self, rhs: Samples) -> Samples {
                self.$method(&rhs)
            }
        }

        impl $trait<f64> for &Samples {
            type Output = Samples;
            fn $method(self, rhs: f64) -> Samples {
                self.map(|a| a $op rhs)
            }
        }

        impl $trait<f64> for Samples {
            type Output = Samples;
            fn $method(self, rhs: f64) -> Samples {
                (&self).$method(rhs)
            }
        }

        impl $trait<&Samples> for f64 {
            type Output = Samples;
            fn $method(self, rhs: &Samples) -> Samples {
                rhs.map(|b| self $op b)
            }
        }

        impl $trait<Samples> for f64 {
            type Output = Samples;
            fn $method(self, rhs: Samples) -> Samples {
                self.$method(&rhs)
            }
        }
    };
}

elementwise!(Add, add, +);
elementwise!(Sub, sub, -);
elementwise!(Mul, mul, *);
elementwise!(Div, div, /);

impl Neg for &Samples {
    type Output = Samples;
    fn neg(self) -> Samples {
        self.map(|a| -a)
    }
}

impl Neg for Samples {
    type Output = Samples;
    fn neg(self) -> Samples {
        -&self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arithmetic_is_elementwise() {
        let a = Samples::new(vec![1.0, 2.0, 3.0]);
        let b = Samples::new(vec![10.0, 20.0, 30.0]);
        assert_eq!((&a + &b).as_slice(), &[11.0, 22.0, 33.0]);
        assert_eq!((&b - &a).as_slice(), &[9.0, 18.0, 27.0]);
        assert_eq!((&a * 2.0).as_slice(), &[2.0, 4.0, 6.0]);
        assert_eq!((6.0 / &a).as_slice(), &[6.0, 3.0, 2.0]);
        assert_eq!((-a).as_slice(), &[-1.0, -2.0, -3.0]);
    }

    #[test]
    fn length_one_operand_broadcasts() {
        let a = Samples::new(vec![1.0, 2.0]);
        let scalar = Samples::from(5.0);
        assert_eq!((&scalar + &a).as_slice(), &[6.0, 7.0]);
        assert_eq!((&a * &scalar).as_slice(), &[5.0, 10.0]);
    }

    #[test]
    #[should_panic(expected = "sample length mismatch")]
    fn mismatched_lengths_panic() {
        let _ = Samples::new(vec![1.0, 2.0]) + Samples::new(vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn try_zip_with_reports_mismatch_without_panicking() {
        let two = Samples::new(vec![1.0, 2.0]);
        let three = Samples::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(two.try_zip_with(&three, |a, b| a + b), None);
        let summed = two.try_zip_with(&Samples::from(1.0), |a, b| a + b).unwrap();
        assert_eq!(summed.as_slice(), &[2.0, 3.0]);
    }

    #[test]
    fn broadcast_only_from_one_or_same_length() {
        let one = Samples::from(2.0);
        assert_eq!(one.broadcast(3).unwrap().as_slice(), &[2.0, 2.0, 2.0]);
        let three = Samples::new(vec![1.0, 2.0, 3.0]);
        assert_eq!(three.broadcast(3), Some(three.clone()));
        assert_eq!(three.broadcast(4), None);
    }

    #[test]
    fn booleans_and_integers_coerce_to_floats() {
        assert_eq!(Samples::from(vec![true, false]).as_slice(), &[1.0, 0.0]);
        assert_eq!(Samples::from(vec![2_i64, -1]).as_slice(), &[2.0, -1.0]);
    }

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(Samples::new(Vec::new()).mean(), None);
        assert_eq!(Samples::new(vec![1.0, 3.0]).mean(), Some(2.0));
    }
}
