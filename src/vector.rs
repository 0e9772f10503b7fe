use std::fmt::{self, Debug, Display};
use std::ops::{
    Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index,
    IndexMut, Not,
};

use itertools::Itertools;
use num::traits::WrappingAdd;

use crate::elementwise::ElementwiseEq;
use crate::errors::{check_lane, IndexError};

/// Scalar types a [`Vector`] can hold.
pub trait Lane: Copy + Default + PartialEq + Debug + Display {
    /// Prefix used when formatting, e.g. `bool` in `bool3(..)`
    const TYPE_NAME: &'static str;
}

impl Lane for bool {
    const TYPE_NAME: &'static str = "bool";
}

impl Lane for u32 {
    const TYPE_NAME: &'static str = "uint";
}

/// A fixed-width vector of 2 to 4 lanes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Vector<T: Lane, const N: usize> {
    lanes: [T; N],
}

pub type BoolVector<const N: usize> = Vector<bool, N>;
pub type Bool2 = Vector<bool, 2>;
pub type Bool3 = Vector<bool, 3>;
pub type Bool4 = Vector<bool, 4>;

pub type UIntVector<const N: usize> = Vector<u32, N>;
pub type UInt2 = Vector<u32, 2>;
pub type UInt3 = Vector<u32, 3>;
pub type UInt4 = Vector<u32, 4>;

impl<T: Lane, const N: usize> Vector<T, N> {
    pub const LANES: usize = N;

    const VALID_WIDTH: () = assert!(N >= 2 && N <= 4, "vectors hold 2 to 4 lanes");

    pub const fn from_array(lanes: [T; N]) -> Self {
        let () = Self::VALID_WIDTH;
        Self { lanes }
    }

    /// Every lane set to `value`
    pub const fn splat(value: T) -> Self {
        Self::from_array([value; N])
    }

    pub fn from_fn<F: FnMut(usize) -> T>(f: F) -> Self {
        Self::from_array(std::array::from_fn(f))
    }

    pub fn x(&self) -> T {
        self.lanes[0]
    }

    pub fn y(&self) -> T {
        self.lanes[1]
    }

    pub fn as_array(&self) -> &[T; N] {
        &self.lanes
    }

    pub fn to_array(self) -> [T; N] {
        self.lanes
    }

    pub fn try_lane(&self, i: usize) -> Result<&T, IndexError> {
        check_lane(i, N)?;
        Ok(&self.lanes[i])
    }

    pub fn try_lane_mut(&mut self, i: usize) -> Result<&mut T, IndexError> {
        check_lane(i, N)?;
        Ok(&mut self.lanes[i])
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.lanes.iter()
    }

    pub fn map<U: Lane, F: FnMut(T) -> U>(self, f: F) -> Vector<U, N> {
        Vector::from_array(self.lanes.map(f))
    }

    pub fn zip_map<U: Lane, V: Lane, F: FnMut(T, U) -> V>(
        self,
        rhs: Vector<U, N>,
        mut f: F,
    ) -> Vector<V, N> {
        Vector::from_fn(|i| f(self.lanes[i], rhs.lanes[i]))
    }
}

impl<T: Lane> Vector<T, 2> {
    pub const fn new(x: T, y: T) -> Self {
        Self::from_array([x, y])
    }
}

impl<T: Lane> Vector<T, 3> {
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self::from_array([x, y, z])
    }

    pub fn z(&self) -> T {
        self.lanes[2]
    }
}

impl<T: Lane> Vector<T, 4> {
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self::from_array([x, y, z, w])
    }

    pub fn z(&self) -> T {
        self.lanes[2]
    }

    pub fn w(&self) -> T {
        self.lanes[3]
    }
}

impl<const N: usize> Vector<bool, N> {
    /// True if every lane is set
    pub fn all(self) -> bool {
        self.lanes.iter().all(|&lane| lane)
    }

    /// True if at least one lane is set
    pub fn any(self) -> bool {
        self.lanes.iter().any(|&lane| lane)
    }
}

impl<T: Lane, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::splat(T::default())
    }
}

impl<T: Lane, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(lanes: [T; N]) -> Self {
        Self::from_array(lanes)
    }
}

impl<T: Lane, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self {
        v.lanes
    }
}

impl<const N: usize> From<bool> for Vector<bool, N> {
    fn from(value: bool) -> Self {
        Self::splat(value)
    }
}

impl<T: Lane, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, i: usize) -> &Self::Output {
        #[cfg(feature = "bounds-checks")]
        check_lane(i, N).unwrap_or_else(|err| panic!("{err}"));
        &self.lanes[i]
    }
}

impl<T: Lane, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        #[cfg(feature = "bounds-checks")]
        check_lane(i, N).unwrap_or_else(|err| panic!("{err}"));
        &mut self.lanes[i]
    }
}

impl<'a, T: Lane, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}

impl<T: Lane, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}({})", T::TYPE_NAME, N, self.lanes.iter().join(", "))
    }
}

//
// Wrapping lane arithmetic, used to accumulate hashes
//

impl<T: Lane + WrappingAdd, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a.wrapping_add(&b))
    }
}

impl<T: Lane + WrappingAdd, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

//
// Componentwise logic on bool lanes
//

impl<const N: usize> Not for Vector<bool, N> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.map(|lane| !lane)
    }
}

impl<const N: usize> BitAnd for Vector<bool, N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a & b)
    }
}

impl<const N: usize> BitAnd<bool> for Vector<bool, N> {
    type Output = Self;

    fn bitand(self, rhs: bool) -> Self::Output {
        self & Self::splat(rhs)
    }
}

impl<const N: usize> BitAnd<Vector<bool, N>> for bool {
    type Output = Vector<bool, N>;

    fn bitand(self, rhs: Vector<bool, N>) -> Self::Output {
        Vector::splat(self) & rhs
    }
}

impl<const N: usize> BitAndAssign for Vector<bool, N> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<const N: usize> BitAndAssign<bool> for Vector<bool, N> {
    fn bitand_assign(&mut self, rhs: bool) {
        *self = *self & rhs;
    }
}

impl<const N: usize> BitOr for Vector<bool, N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a | b)
    }
}

impl<const N: usize> BitOr<bool> for Vector<bool, N> {
    type Output = Self;

    fn bitor(self, rhs: bool) -> Self::Output {
        self | Self::splat(rhs)
    }
}

impl<const N: usize> BitOr<Vector<bool, N>> for bool {
    type Output = Vector<bool, N>;

    fn bitor(self, rhs: Vector<bool, N>) -> Self::Output {
        Vector::splat(self) | rhs
    }
}

impl<const N: usize> BitOrAssign for Vector<bool, N> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<const N: usize> BitOrAssign<bool> for Vector<bool, N> {
    fn bitor_assign(&mut self, rhs: bool) {
        *self = *self | rhs;
    }
}

impl<const N: usize> BitXor for Vector<bool, N> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a ^ b)
    }
}

impl<const N: usize> BitXor<bool> for Vector<bool, N> {
    type Output = Self;

    fn bitxor(self, rhs: bool) -> Self::Output {
        self ^ Self::splat(rhs)
    }
}

impl<const N: usize> BitXor<Vector<bool, N>> for bool {
    type Output = Vector<bool, N>;

    fn bitxor(self, rhs: Vector<bool, N>) -> Self::Output {
        Vector::splat(self) ^ rhs
    }
}

impl<const N: usize> BitXorAssign for Vector<bool, N> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<const N: usize> BitXorAssign<bool> for Vector<bool, N> {
    fn bitxor_assign(&mut self, rhs: bool) {
        *self = *self ^ rhs;
    }
}

impl<const N: usize> ElementwiseEq for Vector<bool, N> {
    type Output = Self;

    fn eq_elementwise(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a == b)
    }

    fn ne_elementwise(self, rhs: Self) -> Self::Output {
        self.zip_map(rhs, |a, b| a != b)
    }
}

impl<const N: usize> ElementwiseEq<bool> for Vector<bool, N> {
    type Output = Self;

    fn eq_elementwise(self, rhs: bool) -> Self::Output {
        self.eq_elementwise(Self::splat(rhs))
    }

    fn ne_elementwise(self, rhs: bool) -> Self::Output {
        self.ne_elementwise(Self::splat(rhs))
    }
}

impl<const N: usize> ElementwiseEq<Vector<bool, N>> for bool {
    type Output = Vector<bool, N>;

    fn eq_elementwise(self, rhs: Vector<bool, N>) -> Self::Output {
        Vector::splat(self).eq_elementwise(rhs)
    }

    fn ne_elementwise(self, rhs: Vector<bool, N>) -> Self::Output {
        Vector::splat(self).ne_elementwise(rhs)
    }
}
