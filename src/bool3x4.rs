use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool3;

/// Three rows, four columns. Transposes to [`Bool4x3`](crate::Bool4x3).
pub type Bool3x4 = BoolMatrix<3, 4>;

impl Bool3x4 {
    pub const fn new(c0: Bool3, c1: Bool3, c2: Bool3, c3: Bool3) -> Self {
        Self::from_cols([c0, c1, c2, c3])
    }

    /// Create a new matrix from 12 values given in row-major order:
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
    ) -> Self {
        Self::new(
            Bool3::new(m00, m10, m20),
            Bool3::new(m01, m11, m21),
            Bool3::new(m02, m12, m22),
            Bool3::new(m03, m13, m23),
        )
    }
}

impl HashTable<3, 4> for Bool3x4 {
    const NARROW_IF_FALSE: [[u32; 3]; 4] = [
        [0x290FF48B, 0x3189BD01, 0x105FF97D],
        [0x5F57093F, 0xAC2D47D9, 0x13C8626D],
        [0x5A6EACE5, 0xDDCB99B1, 0x3E08CEAB],
        [0xF3EE98F5, 0x33B10F31, 0xDC4C32C9],
    ];
    const NARROW_IF_TRUE: [[u32; 3]; 4] = [
        [0x55695643, 0x66252255, 0x2F4A17C9],
        [0x77B0E3C7, 0x21F11E81, 0x582639A5],
        [0x4EEE9E83, 0xE56D907F, 0x3717948D],
        [0xF1C12F65, 0x59A9C433, 0xC25B9781],
    ];
    const WIDE_IF_FALSE: [[u32; 3]; 4] = [
        [0x5E6103BD, 0x9E7E0F11, 0xCE8D07EF],
        [0x94E41DCB, 0xFB029D0F, 0x91E60BB9],
        [0xB0F10F45, 0x1517C81B, 0xAA1B1AAD],
        [0x5207A8DD, 0xF14E5F2F, 0xFB24FD1D],
    ];
    const WIDE_IF_TRUE: [[u32; 3]; 4] = [
        [0xD10A1CE5, 0x136E95CD, 0x8E336B07],
        [0xEDD602D7, 0x42842875, 0xAED52F43],
        [0x21618E0D, 0x38BA6B1F, 0xCEA45A67],
        [0x53334E3B, 0xD40EE619, 0x9CE8252F],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bool4x3;

    fn sample() -> Bool3x4 {
        Bool3x4::from_values(true, false, false, false, false, false, false, true, false, false, false, false)
    }

    #[test]
    fn from_values_is_row_major() {
        let m = sample();
        assert_eq!(m[0], Bool3::new(true, false, false));
        assert_eq!(m[1], Bool3::new(false, false, false));
        assert_eq!(m[2], Bool3::new(false, false, false));
        assert_eq!(m[3], Bool3::new(false, true, false));
    }

    #[test]
    fn new_takes_columns_left_to_right() {
        let m = Bool3x4::new(
            Bool3::new(true, false, false),
            Bool3::new(false, false, false),
            Bool3::new(false, false, false),
            Bool3::new(false, true, false),
        );
        assert_eq!(m, sample());
        assert_eq!(m, Bool3x4::from_rows([
            [true, false, false, false],
            [false, false, false, true],
            [false, false, false, false],
        ]));
    }

    #[test]
    fn transposes_to_bool4x3() {
        let t: Bool4x3 = sample().transpose();
        assert_eq!(t, Bool4x3::from_values(true, false, false, false, false, false, false, false, false, false, true, false));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "bool3x4(true, false, false, false,  false, false, false, true,  false, false, false, false)"
        );
    }
}
