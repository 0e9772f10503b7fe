use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool3;

/// Three rows, two columns. Transposes to [`Bool2x3`](crate::Bool2x3).
pub type Bool3x2 = BoolMatrix<3, 2>;

impl Bool3x2 {
    pub const fn new(c0: Bool3, c1: Bool3) -> Self {
        Self::from_cols([c0, c1])
    }

    /// Create a new matrix from 6 values given in row-major order:
    /// `m<row><col>` lands in column `col`, lane `row`.
    pub const fn from_values(
        m00: bool,
        m01: bool,
        m10: bool,
        m11: bool,
        m20: bool,
        m21: bool,
    ) -> Self {
        Self::new(
            Bool3::new(m00, m10, m20),
            Bool3::new(m01, m11, m21),
        )
    }
}

impl HashTable<3, 2> for Bool3x2 {
    const NARROW_IF_FALSE: [[u32; 3]; 2] = [
        [0xB77D1293, 0x3071182D, 0x3B0B08D7],
        [0x6FBFF5DD, 0xB7BEB4AD, 0xFD1BC5C9],
    ];
    const NARROW_IF_TRUE: [[u32; 3]; 2] = [
        [0x34493CDF, 0xA521B619, 0x98BE2A63],
        [0xB01A53BD, 0x9B0B78E1, 0xCBD76E77],
    ];
    const WIDE_IF_FALSE: [[u32; 3]; 2] = [
        [0xE4A879FF, 0xF54B84A3, 0x1B4C35A9],
        [0xCCDE164F, 0x7D99A86B, 0xFF948313],
    ];
    const WIDE_IF_TRUE: [[u32; 3]; 2] = [
        [0xAF6A035D, 0xEB49FAA3, 0xB56BE1B9],
        [0x750C2A71, 0xDAB1B0D9, 0x9EA71239],
    ];
}
