use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool4;

/// A matrix of booleans with 4 rows and 3 columns.
///
/// Transposes to [`Bool3x4`](crate::Bool3x4).
pub type Bool4x3 = BoolMatrix<4, 3>;

impl Bool4x3 {
    /// Create a new matrix from its columns, left to right.
    pub const fn new(c0: Bool4, c1: Bool4, c2: Bool4) -> Self {
        Self::from_cols([c0, c1, c2])
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn from_values(
        m00: bool,
        m01: bool,
        m02: bool,
        m10: bool,
        m11: bool,
        m12: bool,
        m20: bool,
        m21: bool,
        m22: bool,
        m30: bool,
        m31: bool,
        m32: bool,
    ) -> Self {
        Self::new(
            Bool4::new(m00, m10, m20, m30),
            Bool4::new(m01, m11, m21, m31),
            Bool4::new(m02, m12, m22, m32),
        )
    }
}

impl HashTable<4, 3> for Bool4x3 {
    const NARROW_IF_FALSE: [[u32; 4]; 3] = [
        [0x477D97E1, 0xF26B2339, 0x9ED678B9, 0xED52406B],
        [0xF48E2ADD, 0x883506F9, 0x451B1531, 0x6EA93D2B],
        [0x5C5471F3, 0x456B9089, 0x8B13E3C7, 0x54681E1F],
    ];
    const NARROW_IF_TRUE: [[u32; 4]; 3] = [
        [0xF5EC5AE1, 0xA40109F7, 0x4D96B687, 0x11E95F5D],
        [0x52E20D31, 0xA7191BC5, 0x99251FE1, 0x6ACD18AF],
        [0x50CEAB2B, 0x1906F5D5, 0xDF061B07, 0x5F4BE9B7],
    ];
    const WIDE_IF_FALSE: [[u32; 4]; 3] = [
        [0xD155760F, 0x19CE7D17, 0x9486B805, 0x9F834CCB],
        [0xAF3E9FE7, 0xC0075D1F, 0x1841BD9B, 0x285726E1],
        [0x409837F1, 0xAE4FFDAD, 0x54808A23, 0x79C21A3B],
    ];
    const WIDE_IF_TRUE: [[u32; 4]; 3] = [
        [0xF944D2B5, 0x97DB3735, 0xCAF8D44D, 0x836E22CD],
        [0x72ABD249, 0x62CA7601, 0xF83451EB, 0x1BAEB131],
        [0xE6F57485, 0xB2BC3D0D, 0x8F377F8F, 0x747BCE1B],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bool3x4;

    fn sample() -> Bool4x3 {
        Bool4x3::from_values(true, false, true, true, true, true, false, false, false, true, false, true)
    }

    #[test]
    fn from_values_is_row_major() {
        let m = sample();
        assert_eq!(m[0], Bool4::new(true, true, false, true));
        assert_eq!(m[1], Bool4::new(false, true, false, false));
        assert_eq!(m[2], Bool4::new(true, true, false, true));
    }

    #[test]
    fn new_takes_columns_left_to_right() {
        let m = Bool4x3::new(
            Bool4::new(true, true, false, true),
            Bool4::new(false, true, false, false),
            Bool4::new(true, true, false, true),
        );
        assert_eq!(m, sample());
        assert_eq!(m, Bool4x3::from_rows([
            [true, false, true],
            [true, true, true],
            [false, false, false],
            [true, false, true],
        ]));
    }

    #[test]
    fn transposes_to_bool3x4() {
        let t: Bool3x4 = sample().transpose();
        assert_eq!(t, Bool3x4::from_values(true, true, false, true, false, true, false, false, true, true, false, true));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "bool4x3(true, false, true,  true, true, true,  false, false, false,  true, false, true)"
        );
    }
}
