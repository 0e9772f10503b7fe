use rand::distributions::{Distribution, Standard};
use rand::Rng;

use crate::bool_matrix::BoolMatrix;
use crate::vector::Vector;

// Each component is an independent fair coin flip.

impl<const N: usize> Distribution<Vector<bool, N>> for Standard {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> Vector<bool, N> {
        Vector::from_fn(|_| rng.gen())
    }
}

impl<const R: usize, const C: usize> Distribution<BoolMatrix<R, C>> for Standard {
    fn sample<G: Rng + ?Sized>(&self, rng: &mut G) -> BoolMatrix<R, C> {
        BoolMatrix::from_cols(std::array::from_fn(|_| rng.gen()))
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::{Bool3, Bool4x4};

    #[test]
    fn same_seed_gives_same_matrix() {
        let a: Bool4x4 = StdRng::seed_from_u64(42).gen();
        let b: Bool4x4 = StdRng::seed_from_u64(42).gen();
        assert_eq!(a, b);
    }

    #[test]
    fn samples_cover_both_values() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen_true = false;
        let mut seen_false = false;
        for _ in 0..32 {
            let v: Bool3 = rng.gen();
            seen_true |= v.any();
            seen_false |= !v.all();
        }
        assert!(seen_true && seen_false);
    }
}
