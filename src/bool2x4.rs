use crate::bool_matrix::{BoolMatrix, HashTable};
use crate::vector::Bool2;

pub type Bool2x4 = BoolMatrix<2, 4>;

impl Bool2x4 {
    pub const fn new(c0: Bool2, c1: Bool2, c2: Bool2, c3: Bool2) -> Self {
        Self::from_cols([c0, c1, c2, c3])
    }

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
    ) -> Self {
        Self::new(
            Bool2::new(m00, m10),
            Bool2::new(m01, m11),
            Bool2::new(m02, m12),
            Bool2::new(m03, m13),
        )
    }
}

impl HashTable<2, 4> for Bool2x4 {
    const NARROW_IF_FALSE: [[u32; 2]; 4] = [
        [0xD8EFA0DD, 0x538679C7],
        [0x3B5CAAC7, 0x6F174EBF],
        [0xC642A4BD, 0xC1A25D15],
        [0x869FE4D3, 0xC0B42159],
    ];
    const NARROW_IF_TRUE: [[u32; 2]; 4] = [
        [0xDD2BEA0F, 0x9F7E9E71],
        [0xD1ECBFE7, 0x3F1F5A8B],
        [0x1A57327F, 0xAAA36FCD],
        [0xECCED3C1, 0xEEB6BD9B],
    ];
    const WIDE_IF_FALSE: [[u32; 2]; 4] = [
        [0x6FA12323, 0x1C351A4F],
        [0x7017C02D, 0x88FB6167],
        [0x1FC624E7, 0x4733DB33],
        [0x36DA76A7, 0xBB76609F],
    ];
    const WIDE_IF_TRUE: [[u32; 2]; 4] = [
        [0xD051C399, 0xC994BE95],
        [0xD00F2911, 0x1C6CD5E5],
        [0x3E4175D7, 0x4BF93227],
        [0xAD0E56A1, 0xFBF9EB95],
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bool4x2;

    fn sample() -> Bool2x4 {
        Bool2x4::from_values(false, false, false, true, true, true, true, false)
    }

    #[test]
    fn from_values_is_row_major() {
        let m = sample();
        assert_eq!(m[0], Bool2::new(false, true));
        assert_eq!(m[1], Bool2::new(false, true));
        assert_eq!(m[2], Bool2::new(false, true));
        assert_eq!(m[3], Bool2::new(true, false));
    }

    #[test]
    fn new_takes_columns_left_to_right() {
        let m = Bool2x4::new(
            Bool2::new(false, true),
            Bool2::new(false, true),
            Bool2::new(false, true),
            Bool2::new(true, false),
        );
        assert_eq!(m, sample());
        assert_eq!(m, Bool2x4::from_rows([
            [false, false, false, true],
            [true, true, true, false],
        ]));
    }

    #[test]
    fn transposes_to_bool4x2() {
        let t: Bool4x2 = sample().transpose();
        assert_eq!(t, Bool4x2::from_values(false, true, false, true, false, true, true, false));
        assert_eq!(t.transpose(), sample());
    }

    #[test]
    fn display() {
        assert_eq!(
            sample().to_string(),
            "bool2x4(false, false, false, true,  true, true, true, false)"
        );
    }
}
