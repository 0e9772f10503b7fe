use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::ops::{
    BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, IndexMut, Not,
};

use itertools::Itertools;

use crate::elementwise::ElementwiseEq;
use crate::errors::{check_column, IndexError};
use crate::math::{csum, select};
use crate::vector::{BoolVector, UIntVector};

/// Per-shape hash constants, one `[u32; R]` lane table per column.
///
/// `*_IF_FALSE` is picked for lanes that are `false`, `*_IF_TRUE` for lanes
/// that are `true`. Each shape carries its own literals; no constant appears
/// in more than one table.
pub trait HashTable<const R: usize, const C: usize> {
    const NARROW_IF_FALSE: [[u32; R]; C];
    const NARROW_IF_TRUE: [[u32; R]; C];
    const WIDE_IF_FALSE: [[u32; R]; C];
    const WIDE_IF_TRUE: [[u32; R]; C];
}

/// A matrix of booleans with `R` rows and `C` columns, stored column-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoolMatrix<const R: usize, const C: usize> {
    /// The columns of this matrix, each `R` lanes tall
    cols: [BoolVector<R>; C],
}

impl<const R: usize, const C: usize> BoolMatrix<R, C> {
    pub const ROWS: usize = R;
    pub const COLS: usize = C;

    const VALID_SHAPE: () = assert!(
        R >= 2 && R <= 4 && C >= 2 && C <= 4,
        "bool matrices have 2 to 4 rows and 2 to 4 columns"
    );

    /// Create a new matrix from its columns, left to right.
    pub const fn from_cols(cols: [BoolVector<R>; C]) -> Self {
        let () = Self::VALID_SHAPE;
        Self { cols }
    }

    /// Create a new matrix with every component set to `value`.
    pub const fn splat(value: bool) -> Self {
        Self::from_cols([BoolVector::<R>::splat(value); C])
    }

    /// Create a new matrix by calling `f(row, col)` for every component.
    pub fn from_fn<F: FnMut(usize, usize) -> bool>(mut f: F) -> Self {
        Self::from_cols(std::array::from_fn(|col| {
            BoolVector::<R>::from_fn(|row| f(row, col))
        }))
    }

    /// Create a new matrix from a nested array given in row-major order.
    ///
    /// ```
    /// use jnickg_boolmat::{Bool2, Bool2x3};
    ///
    /// let m = Bool2x3::from_rows([[true, false, true], [false, true, false]]);
    /// assert_eq!(m[1], Bool2::new(false, true));
    /// ```
    pub fn from_rows(rows: [[bool; C]; R]) -> Self {
        Self::from_fn(|row, col| rows[row][col])
    }

    /// The components as a nested array in row-major order.
    pub fn to_rows(&self) -> [[bool; C]; R] {
        std::array::from_fn(|row| std::array::from_fn(|col| self.cols[col][row]))
    }

    pub fn cols(&self) -> &[BoolVector<R>; C] {
        &self.cols
    }

    pub fn into_cols(self) -> [BoolVector<R>; C] {
        self.cols
    }

    pub fn try_col(&self, col: usize) -> Result<&BoolVector<R>, IndexError> {
        check_column(col, C)?;
        Ok(&self.cols[col])
    }

    pub fn try_col_mut(&mut self, col: usize) -> Result<&mut BoolVector<R>, IndexError> {
        check_column(col, C)?;
        Ok(&mut self.cols[col])
    }

    /// Iterate over the columns, left to right.
    pub fn iter(&self) -> ColumnIterator<'_, R, C> {
        self.into_iter()
    }

    /// Swap rows and columns: `m.transpose()[j][i] == m[i][j]`.
    ///
    /// ```
    /// use jnickg_boolmat::{Bool2x3, Bool3x2};
    ///
    /// let m = Bool2x3::from_values(true, false, true, false, true, false);
    /// assert_eq!(m.transpose(), Bool3x2::from_values(true, false, false, true, true, false));
    /// ```
    pub fn transpose(&self) -> BoolMatrix<C, R> {
        BoolMatrix::from_fn(|row, col| self.cols[row][col])
    }

    /// True if every component is set
    pub fn all(&self) -> bool {
        self.cols.iter().all(|col| col.all())
    }

    /// True if at least one component is set
    pub fn any(&self) -> bool {
        self.cols.iter().any(|col| col.any())
    }

    fn map_cols<F: FnMut(BoolVector<R>) -> BoolVector<R>>(self, f: F) -> Self {
        Self::from_cols(self.cols.map(f))
    }

    fn zip_cols<F: FnMut(BoolVector<R>, BoolVector<R>) -> BoolVector<R>>(
        self,
        rhs: Self,
        mut f: F,
    ) -> Self {
        Self::from_cols(std::array::from_fn(|col| f(self.cols[col], rhs.cols[col])))
    }
}

impl<const R: usize, const C: usize> BoolMatrix<R, C>
where
    Self: HashTable<R, C>,
{
    /// 32-bit hash of the matrix.
    ///
    /// Each column selects one constant per lane from the shape's narrow
    /// tables, the selections are summed column by column, and the lanes of
    /// that sum are added into a single value. All arithmetic wraps.
    pub fn hash32(&self) -> u32 {
        csum(self.select_and_sum(
            &<Self as HashTable<R, C>>::NARROW_IF_FALSE,
            &<Self as HashTable<R, C>>::NARROW_IF_TRUE,
        ))
    }

    /// Unreduced hash with one lane per row, meant to be combined with other
    /// wide hashes before a final [`csum`]. Uses tables independent of
    /// [`hash32`](Self::hash32).
    pub fn hash_wide(&self) -> UIntVector<R> {
        self.select_and_sum(
            &<Self as HashTable<R, C>>::WIDE_IF_FALSE,
            &<Self as HashTable<R, C>>::WIDE_IF_TRUE,
        )
    }

    fn select_and_sum(
        &self,
        if_false: &[[u32; R]; C],
        if_true: &[[u32; R]; C],
    ) -> UIntVector<R> {
        self.cols
            .iter()
            .zip(if_false.iter().zip(if_true.iter()))
            .fold(UIntVector::splat(0), |acc, (col, (f, t))| {
                acc + select(UIntVector::from_array(*f), UIntVector::from_array(*t), *col)
            })
    }
}

impl<const R: usize, const C: usize> Hash for BoolMatrix<R, C>
where
    Self: HashTable<R, C>,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.hash32());
    }
}

impl<const R: usize, const C: usize> Default for BoolMatrix<R, C> {
    fn default() -> Self {
        Self::splat(false)
    }
}

impl<const R: usize, const C: usize> From<bool> for BoolMatrix<R, C> {
    fn from(value: bool) -> Self {
        Self::splat(value)
    }
}

impl<const R: usize, const C: usize> From<[BoolVector<R>; C]> for BoolMatrix<R, C> {
    fn from(cols: [BoolVector<R>; C]) -> Self {
        Self::from_cols(cols)
    }
}

impl<const R: usize, const C: usize> From<[[bool; C]; R]> for BoolMatrix<R, C> {
    fn from(rows: [[bool; C]; R]) -> Self {
        Self::from_rows(rows)
    }
}

impl<const R: usize, const C: usize> From<BoolMatrix<R, C>> for [[bool; C]; R] {
    fn from(matrix: BoolMatrix<R, C>) -> Self {
        matrix.to_rows()
    }
}

pub struct ColumnIterator<'a, const R: usize, const C: usize> {
    matrix: &'a BoolMatrix<R, C>,
    col: usize,
}

impl<'a, const R: usize, const C: usize> Iterator for ColumnIterator<'a, R, C> {
    type Item = BoolVector<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.col < C {
            let result = self.matrix.cols[self.col];
            self.col += 1;
            Some(result)
        } else {
            None
        }
    }
}

pub struct ColumnIntoIterator<const R: usize, const C: usize> {
    matrix: BoolMatrix<R, C>,
    col: usize,
}

impl<const R: usize, const C: usize> Iterator for ColumnIntoIterator<R, C> {
    type Item = BoolVector<R>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.col < C {
            let result = self.matrix.cols[self.col];
            self.col += 1;
            Some(result)
        } else {
            None
        }
    }
}

impl<const R: usize, const C: usize> IntoIterator for BoolMatrix<R, C> {
    type Item = BoolVector<R>;
    type IntoIter = ColumnIntoIterator<R, C>;

    fn into_iter(self) -> Self::IntoIter {
        ColumnIntoIterator {
            matrix: self,
            col: 0,
        }
    }
}

impl<'a, const R: usize, const C: usize> IntoIterator for &'a BoolMatrix<R, C> {
    type Item = BoolVector<R>;
    type IntoIter = ColumnIterator<'a, R, C>;

    fn into_iter(self) -> Self::IntoIter {
        ColumnIterator {
            matrix: self,
            col: 0,
        }
    }
}

impl<const R: usize, const C: usize> Index<usize> for BoolMatrix<R, C> {
    type Output = BoolVector<R>;

    fn index(&self, col: usize) -> &Self::Output {
        #[cfg(feature = "bounds-checks")]
        check_column(col, C).unwrap_or_else(|err| panic!("{err}"));
        &self.cols[col]
    }
}

impl<const R: usize, const C: usize> IndexMut<usize> for BoolMatrix<R, C> {
    fn index_mut(&mut self, col: usize) -> &mut Self::Output {
        #[cfg(feature = "bounds-checks")]
        check_column(col, C).unwrap_or_else(|err| panic!("{err}"));
        &mut self.cols[col]
    }
}

impl<const R: usize, const C: usize> Display for BoolMatrix<R, C> {
    /// Row-major, e.g. `bool2x3(true, false, true,  false, true, false)`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows = (0..R)
            .map(|row| self.cols.iter().map(|col| col[row]).join(", "))
            .join(",  ");
        write!(f, "bool{R}x{C}({rows})")
    }
}

//
// Componentwise logic
//

impl<const R: usize, const C: usize> Not for BoolMatrix<R, C> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.map_cols(|col| !col)
    }
}

impl<const R: usize, const C: usize> BitAnd for BoolMatrix<R, C> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.zip_cols(rhs, |a, b| a & b)
    }
}

impl<const R: usize, const C: usize> BitAnd<bool> for BoolMatrix<R, C> {
    type Output = Self;

    fn bitand(self, rhs: bool) -> Self::Output {
        self.map_cols(|col| col & rhs)
    }
}

impl<const R: usize, const C: usize> BitAnd<BoolMatrix<R, C>> for bool {
    type Output = BoolMatrix<R, C>;

    fn bitand(self, rhs: BoolMatrix<R, C>) -> Self::Output {
        rhs.map_cols(|col| self & col)
    }
}

impl<const R: usize, const C: usize> BitAndAssign for BoolMatrix<R, C> {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = *self & rhs;
    }
}

impl<const R: usize, const C: usize> BitAndAssign<bool> for BoolMatrix<R, C> {
    fn bitand_assign(&mut self, rhs: bool) {
        *self = *self & rhs;
    }
}

impl<const R: usize, const C: usize> BitOr for BoolMatrix<R, C> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.zip_cols(rhs, |a, b| a | b)
    }
}

impl<const R: usize, const C: usize> BitOr<bool> for BoolMatrix<R, C> {
    type Output = Self;

    fn bitor(self, rhs: bool) -> Self::Output {
        self.map_cols(|col| col | rhs)
    }
}

impl<const R: usize, const C: usize> BitOr<BoolMatrix<R, C>> for bool {
    type Output = BoolMatrix<R, C>;

    fn bitor(self, rhs: BoolMatrix<R, C>) -> Self::Output {
        rhs.map_cols(|col| self | col)
    }
}

impl<const R: usize, const C: usize> BitOrAssign for BoolMatrix<R, C> {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = *self | rhs;
    }
}

impl<const R: usize, const C: usize> BitOrAssign<bool> for BoolMatrix<R, C> {
    fn bitor_assign(&mut self, rhs: bool) {
        *self = *self | rhs;
    }
}

impl<const R: usize, const C: usize> BitXor for BoolMatrix<R, C> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.zip_cols(rhs, |a, b| a ^ b)
    }
}

impl<const R: usize, const C: usize> BitXor<bool> for BoolMatrix<R, C> {
    type Output = Self;

    fn bitxor(self, rhs: bool) -> Self::Output {
        self.map_cols(|col| col ^ rhs)
    }
}

impl<const R: usize, const C: usize> BitXor<BoolMatrix<R, C>> for bool {
    type Output = BoolMatrix<R, C>;

    fn bitxor(self, rhs: BoolMatrix<R, C>) -> Self::Output {
        rhs.map_cols(|col| self ^ col)
    }
}

impl<const R: usize, const C: usize> BitXorAssign for BoolMatrix<R, C> {
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}

impl<const R: usize, const C: usize> BitXorAssign<bool> for BoolMatrix<R, C> {
    fn bitxor_assign(&mut self, rhs: bool) {
        *self = *self ^ rhs;
    }
}

impl<const R: usize, const C: usize> ElementwiseEq for BoolMatrix<R, C> {
    type Output = Self;

    fn eq_elementwise(self, rhs: Self) -> Self::Output {
        self.zip_cols(rhs, |a, b| a.eq_elementwise(b))
    }

    fn ne_elementwise(self, rhs: Self) -> Self::Output {
        self.zip_cols(rhs, |a, b| a.ne_elementwise(b))
    }
}

impl<const R: usize, const C: usize> ElementwiseEq<bool> for BoolMatrix<R, C> {
    type Output = Self;

    fn eq_elementwise(self, rhs: bool) -> Self::Output {
        self.map_cols(|col| col.eq_elementwise(rhs))
    }

    fn ne_elementwise(self, rhs: bool) -> Self::Output {
        self.map_cols(|col| col.ne_elementwise(rhs))
    }
}

impl<const R: usize, const C: usize> ElementwiseEq<BoolMatrix<R, C>> for bool {
    type Output = BoolMatrix<R, C>;

    fn eq_elementwise(self, rhs: BoolMatrix<R, C>) -> Self::Output {
        rhs.map_cols(|col| self.eq_elementwise(col))
    }

    fn ne_elementwise(self, rhs: BoolMatrix<R, C>) -> Self::Output {
        rhs.map_cols(|col| self.ne_elementwise(col))
    }
}
