use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool4;

/// A 4x4 matrix of booleans.
pub type Bool4x4 = BoolMatrix<4, 4>;

impl Bool4x4 {
    pub const fn new(c0: Bool4, c1: Bool4, c2: Bool4, c3: Bool4) -> Self {
        Self::from_cols([c0, c1, c2, c3])
    }

    /// Create a new matrix from 16 values given in row-major order:
    /// `m<row><col>` lands in column `col`, lane `row`.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_values(
        m00: bool,
        m01: bool,
        m02: bool,
        m03: bool,
        m10: bool,
        m11: bool,
        m12: bool,
        m13: bool,
        m20: bool,
        m21: bool,
        m22: bool,
        m23: bool,
        m30: bool,
        m31: bool,
        m32: bool,
        m33: bool,
    ) -> Self {
        Self::new(
            Bool4::new(m00, m10, m20, m30),
            Bool4::new(m01, m11, m21, m31),
            Bool4::new(m02, m12, m22, m32),
            Bool4::new(m03, m13, m23, m33),
        )
    }
}

impl HashTable<4, 4> for Bool4x4 {
    const NARROW_IF_FALSE: [[u32; 4]; 4] = [
        [0xBAFBEC49, 0xABD36B6B, 0x76FCCA7D, 0x2D021DBB],
        [0xD17119F9, 0xFEF988F9, 0xA1A8BE13, 0x4417474B],
        [0x58E1F9C7, 0xCA0A6C57, 0x1B23528B, 0x1194F915],
        [0x458BBE0F, 0xFCF17A9F, 0x10FCE939, 0x461BCEAB],
    ];
    const NARROW_IF_TRUE: [[u32; 4]; 4] = [
        [0x3D2726D7, 0x9B95BF9D, 0xF2F11B05, 0xB71FE2EB],
        [0x50F5E7C3, 0x31FB1A29, 0x669E58DF, 0x9F7B37B3],
        [0x74C01F25, 0x1F71BD23, 0x71A5906D, 0x8812922B],
        [0xEE10EE33, 0x3CD8A5D9, 0x6887BF9F, 0x5D43EA5B],
    ];
    const WIDE_IF_FALSE: [[u32; 4]; 4] = [
        [0x15D92CC3, 0xBD5B5D21, 0x3BE3C501, 0x3E0854E9],
        [0x94B0F495, 0x6F9C4D91, 0x8A66ED5B, 0xD80605C3],
        [0xDF15B589, 0x5A34DEE3, 0x1B676F43, 0x6C604E2B],
        [0xC4CD8295, 0xC52FC507, 0x7288A54D, 0x706A4287],
    ];
    const WIDE_IF_TRUE: [[u32; 4]; 4] = [
        [0x5F0D4901, 0x397E7829, 0xD1921129, 0xF7D918DF],
        [0x6F7E1F21, 0xC389BB3D, 0xE90CF07B, 0xEEAB9469],
        [0x6D22179B, 0x187BBF5D, 0x834B15BD, 0x32C567E3],
        [0xAF8ABD39, 0x282569B1, 0xA42008FB, 0xAEBA5003],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bool4x4 {
        Bool4x4::from_values(true, false, false, false, false, false, false, true, true, true, true, true, false, false, true, false)
    }

    #[test]
    fn from_values_is_row_major() {
        let m = sample();
        assert_eq!(m[0], Bool4::new(true, false, true, false));
        assert_eq!(m[1], Bool4::new(false, false, true, false));
        assert_eq!(m[2], Bool4::new(false, false, true, true));
        assert_eq!(m[3], Bool4::new(false, true, true, false));
    }

    #[test]
    fn new_takes_columns_left_to_right() {
        let m = Bool4x4::new(
            Bool4::new(true, false, true, false),
            Bool4::new(false, false, true, false),
            Bool4::new(false, false, true, true),
            Bool4::new(false, true, true, false),
        );
        assert_eq!(m, sample());
        assert_eq!(m, Bool4x4::from_rows([
            [true, false, false, false],
            [false, false, false, true],
            [true, true, true, true],
            [false, false, true, false],
        ]));
    }

    #[test]
    fn transpose_keeps_the_shape() {
        let t: Bool4x4 = sample().transpose();
        assert_eq!(t, Bool4x4::from_values(true, false, true, false, false, false, true, false, false, false, true, true, false, true, true, false));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "bool4x4(true, false, false, false,  false, false, false, true,  true, true, true, true,  false, false, true, false)"
        );
    }
}
