use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool2;

/// A 2x2 matrix of booleans.
pub type Bool2x2 = BoolMatrix<2, 2>;

impl Bool2x2 {
    /// Create a new matrix from its columns, left to right.
    pub const fn new(c0: Bool2, c1: Bool2) -> Self {
        Self::from_cols([c0, c1])
    }

    /// Create a new matrix from 4 values given in row-major order:
    /// `m<row><col>` lands in column `col`, lane `row`.
    pub const fn from_values(m00: bool, m01: bool, m10: bool, m11: bool) -> Self {
        Self::new(
            Bool2::new(m00, m10),
            Bool2::new(m01, m11),
        )
    }
}

impl HashTable<2, 2> for Bool2x2 {
    const NARROW_IF_FALSE: [[u32; 2]; 2] = [
        [0x93E59413, 0x7C988719],
        [0x93F90DCF, 0x8BD8166B],
    ];
    const NARROW_IF_TRUE: [[u32; 2]; 2] = [
        [0xB63F89E3, 0x60CDD73D],
        [0x6C068D3D, 0x4271A73D],
    ];
    const WIDE_IF_FALSE: [[u32; 2]; 2] = [
        [0x9A73684B, 0xCA788253],
        [0xACA415D3, 0xCA7DE5F7],
    ];
    const WIDE_IF_TRUE: [[u32; 2]; 2] = [
        [0x315289E9, 0xB0A7110D],
        [0x4B128399, 0xF6F3F505],
    ];
}
