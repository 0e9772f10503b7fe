use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool2;

/// A matrix of booleans with 2 rows and 3 columns.
///
/// Transposes to [`Bool3x2`](crate::Bool3x2).
pub type Bool2x3 = BoolMatrix<2, 3>;

impl Bool2x3 {
    /// Create a new matrix from its columns, left to right.
    pub const fn new(c0: Bool2, c1: Bool2, c2: Bool2) -> Self {
        Self::from_cols([c0, c1, c2])
    }

    /// Create a new matrix from 6 values given in row-major order:
    /// `m<row><col>` lands in column `col`, lane `row`.
    pub const fn from_values(
        m00: bool,
        m01: bool,
        m02: bool,
        m10: bool,
        m11: bool,
        m12: bool,
    ) -> Self {
        Self::new(
            Bool2::new(m00, m10),
            Bool2::new(m01, m11),
            Bool2::new(m02, m12),
        )
    }
}

impl HashTable<2, 3> for Bool2x3 {
    const NARROW_IF_FALSE: [[u32; 2]; 3] = [
        [0x20458B39, 0x7EC21E2B],
        [0x12D1F24B, 0x92E1F49B],
        [0x4BF674DF, 0x6227DFEF],
    ];
    const NARROW_IF_TRUE: [[u32; 2]; 3] = [
        [0x2DA4333D, 0xF8698259],
        [0x69B45AC5, 0x853DEDDD],
        [0x52EE054B, 0xAD52449B],
    ];
    const WIDE_IF_FALSE: [[u32; 2]; 3] = [
        [0x2C0E0775, 0x66169445],
        [0xAB85B0FF, 0x318BAC09],
        [0x1483A0D3, 0x1318D6ED],
    ];
    const WIDE_IF_TRUE: [[u32; 2]; 3] = [
        [0x2E504A73, 0x2A3879B3],
        [0x5EF0664F, 0x5A854E15],
        [0x1F4A6A45, 0x73BF6B9B],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bool3x2;

    fn sample() -> Bool2x3 {
        Bool2x3::from_values(true, false, true, false, true, false)
    }

    #[test]
    fn from_values_is_row_major() {
        let m = sample();
        assert_eq!(m[0], Bool2::new(true, false));
        assert_eq!(m[1], Bool2::new(false, true));
        assert_eq!(m[2], Bool2::new(true, false));
    }

    #[test]
    fn new_takes_columns_left_to_right() {
        let m = Bool2x3::new(
            Bool2::new(true, false),
            Bool2::new(false, true),
            Bool2::new(true, false),
        );
        assert_eq!(m, sample());
        assert_eq!(m, Bool2x3::from_rows([
            [true, false, true],
            [false, true, false],
        ]));
    }

    #[test]
    fn transposes_to_bool3x2() {
        let t: Bool3x2 = sample().transpose();
        assert_eq!(t, Bool3x2::from_values(true, false, false, true, true, false));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "bool2x3(true, false, true,  false, true, false)"
        );
    }

    #[test]
    fn broadcast_constructors() {
        let a = Bool2x3::from(true);
        let b = Bool2x3::from(false);
        assert_eq!(a & b, b);
        assert_eq!(a | b, a);
        assert_eq!(a ^ b, a);
        assert_eq!(!a, b);
        assert_eq!(Bool2x3::splat(true), a);
    }

    #[test]
    fn index_three_is_rejected() {
        assert!(sample().try_col(3).is_err());
    }
}
