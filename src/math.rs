use num::traits::WrappingAdd;
use num::Zero;

use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::{Lane, UIntVector, Vector};

/// Lane-wise choice between two vectors.
///
/// Lane `i` of the result is `if_true[i]` when `predicate[i]` is set and
/// `if_false[i]` otherwise.
///
/// ```
/// use jnickg_boolmat::{math::select, Bool3, UInt3};
///
/// let picked = select(UInt3::new(1, 2, 3), UInt3::new(10, 20, 30), Bool3::new(true, false, true));
/// assert_eq!(picked, UInt3::new(10, 2, 30));
/// ```
pub fn select<T: Lane, const N: usize>(
    if_false: Vector<T, N>,
    if_true: Vector<T, N>,
    predicate: Vector<bool, N>,
) -> Vector<T, N> {
    Vector::from_fn(|i| {
        if predicate[i] {
            if_true[i]
        } else {
            if_false[i]
        }
    })
}

/// Horizontal sum of all lanes, wrapping on overflow.
pub fn csum<T: Lane + WrappingAdd + Zero, const N: usize>(v: Vector<T, N>) -> T {
    v.iter().fold(T::zero(), |acc, lane| acc.wrapping_add(lane))
}

pub fn transpose<const R: usize, const C: usize>(m: BoolMatrix<R, C>) -> BoolMatrix<C, R> {
    m.transpose()
}

pub fn hash<const R: usize, const C: usize>(m: BoolMatrix<R, C>) -> u32
where
    BoolMatrix<R, C>: HashTable<R, C>,
{
    m.hash32()
}

pub fn hash_wide<const R: usize, const C: usize>(m: BoolMatrix<R, C>) -> UIntVector<R>
where
    BoolMatrix<R, C>: HashTable<R, C>,
{
    m.hash_wide()
}
