use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool3;

/// A 3x3 matrix of booleans.
pub type Bool3x3 = BoolMatrix<3, 3>;

impl Bool3x3 {
    /// Create a new matrix from its columns, left to right.
    pub const fn new(c0: Bool3, c1: Bool3, c2: Bool3) -> Self {
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
    ) -> Self {
        Self::new(
            Bool3::new(m00, m10, m20),
            Bool3::new(m01, m11, m21),
            Bool3::new(m02, m12, m22),
        )
    }
}

impl HashTable<3, 3> for Bool3x3 {
    const NARROW_IF_FALSE: [[u32; 3]; 3] = [
        [0xFA5FC2F7, 0xF83C8557, 0xBBABAAD1],
        [0x955DC1CF, 0x7192D9B7, 0xAF6B193D],
        [0x9F5969E7, 0x34907547, 0xEFA07635],
    ];
    const NARROW_IF_TRUE: [[u32; 3]; 3] = [
        [0x4BCD06BF, 0x4C4D7359, 0x2A2C7AAB],
        [0x22E0B4ED, 0x4C364EA5, 0x6DD18A73],
        [0xFE3A8FD3, 0x385FA15F, 0xC4D3A0CF],
    ];
    const WIDE_IF_FALSE: [[u32; 3]; 3] = [
        [0x5147B8F1, 0x322DD805, 0x29271F77],
        [0x358AFE1B, 0x32375067, 0x91548009],
        [0x3628AEAB, 0x67C05145, 0xB4276503],
    ];
    const WIDE_IF_TRUE: [[u32; 3]; 3] = [
        [0xE6D66BE5, 0x8091BD27, 0x90C5C013],
        [0xAAB30FF7, 0x51062557, 0xA76D4B49],
        [0x9EB0F803, 0xA2C51B41, 0x7333FCFB],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Bool3x3 {
        Bool3x3::from_values(false, true, false, false, true, true, false, true, true)
    }

    #[test]
    fn from_values_is_row_major() {
        let m = sample();
        assert_eq!(m[0], Bool3::new(false, false, false));
        assert_eq!(m[1], Bool3::new(true, true, true));
        assert_eq!(m[2], Bool3::new(false, true, true));
    }

    #[test]
    fn new_takes_columns_left_to_right() {
        let m = Bool3x3::new(
            Bool3::new(false, false, false),
            Bool3::new(true, true, true),
            Bool3::new(false, true, true),
        );
        assert_eq!(m, sample());
        assert_eq!(m, Bool3x3::from_rows([
            [false, true, false],
            [false, true, true],
            [false, true, true],
        ]));
    }

    #[test]
    fn transpose_keeps_the_shape() {
        let t: Bool3x3 = sample().transpose();
        assert_eq!(t, Bool3x3::from_values(false, false, false, true, true, true, false, true, true));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "bool3x3(false, true, false,  false, true, true,  false, true, true)"
        );
    }
}
