use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool4;

pub type Bool4x2 = BoolMatrix<4, 2>;

impl Bool4x2 {
    pub const fn new(c0: Bool4, c1: Bool4) -> Self {
        Self::from_cols([c0, c1])
    }

    #[allow(clippy::too_many_arguments)]
    pub const fn from_values(
        m00: bool,
        m01: bool,
        m10: bool,
        m11: bool,
        m20: bool,
        m21: bool,
        m30: bool,
        m31: bool,
    ) -> Self {
        Self::new(
            Bool4::new(m00, m10, m20, m30),
            Bool4::new(m01, m11, m21, m31),
        )
    }
}

impl HashTable<4, 2> for Bool4x2 {
    const NARROW_IF_FALSE: [[u32; 4]; 2] = [
        [0xF10514A9, 0xC2BD348F, 0x89A8EB9B, 0x97330E4D],
        [0x798420A1, 0xB5C97177, 0xDFED7D69, 0xB5276A61],
    ];
    const NARROW_IF_TRUE: [[u32; 4]; 2] = [
        [0x5EA08BB5, 0xC4884801, 0x7A7AEBA5, 0x2E2DCDE9],
        [0xA096FF9B, 0xDA2D86A1, 0x741194D5, 0x269B7DD7],
    ];
    const WIDE_IF_FALSE: [[u32; 4]; 2] = [
        [0x963E7A7F, 0x8ADC5E09, 0x15A85BE9, 0xBB8902FD],
        [0x836296F9, 0xCA4EF4EB, 0x9E806501, 0x24E9CE01],
    ];
    const WIDE_IF_TRUE: [[u32; 4]; 2] = [
        [0x6C73B41B, 0xAF834337, 0xA538DCBB, 0x5FE4424F],
        [0x876535CD, 0x45A19FDD, 0x7C045C97, 0xAE293AE3],
    ];
}
