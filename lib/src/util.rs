extern crate num_traits;

use std::ops::{AddAssign, Deref};

use num_traits::Unsigned;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Counter<T>(T)
where
    T: Copy + Unsigned + AddAssign;

impl<T> Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    #[inline]
    pub fn new(counter: T) -> Self {
        Self(counter)
    }

    #[inline]
    pub fn get(&self) -> T {
        self.0
    }

    #[inline]
    pub fn increment(&mut self) {
        self.0 += T::one();
    }
}

impl<T> Deref for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AddAssign for Counter<T>
where
    T: Copy + Unsigned + AddAssign,
{
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}
