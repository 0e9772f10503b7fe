/// Vectorized comparison: compares each lane independently and returns the
/// per-lane results instead of collapsing them into a single `bool`.
///
/// `==` on the vector and matrix types is the usual value equality. Use this
/// trait when you want the componentwise answer.
///
/// ```
/// use jnickg_boolmat::{Bool2, ElementwiseEq};
///
/// let a = Bool2::new(true, false);
/// assert_eq!(a.eq_elementwise(Bool2::new(true, true)), Bool2::new(true, false));
/// assert_eq!(a.ne_elementwise(true), Bool2::new(false, true));
/// assert_eq!(false.eq_elementwise(a), Bool2::new(false, true));
/// ```
pub trait ElementwiseEq<Rhs = Self> {
    type Output;

    fn eq_elementwise(self, rhs: Rhs) -> Self::Output;
    fn ne_elementwise(self, rhs: Rhs) -> Self::Output;
}
