//! Fixed-size boolean matrices (2 to 4 rows and columns) used as
//! componentwise logical accumulators and comparison results.
//!
//! Matrices are stored column-major as [`BoolVector`] columns. Logic
//! operators (`!`, `&`, `|`, `^`) work component by component and accept a
//! plain `bool` on either side. `==` is value equality; the componentwise
//! comparison lives on [`ElementwiseEq`].
//!
//! ```
//! use jnickg_boolmat::{Bool2, Bool2x3, ElementwiseEq};
//!
//! let m = Bool2x3::from_values(true, false, true, false, true, false);
//! assert_eq!(m[0], Bool2::new(true, false));
//! assert_eq!(m.eq_elementwise(true), m);
//! assert_eq!(m.transpose().transpose(), m);
//! assert_eq!(m.hash32(), Bool2x3::from_rows(m.to_rows()).hash32());
//! ```

//
// Modules
//

pub mod bool2x2;
pub mod bool2x3;
pub mod bool2x4;
pub mod bool3x2;
pub mod bool3x3;
pub mod bool3x4;
pub mod bool4x2;
pub mod bool4x3;
pub mod bool4x4;
pub mod bool_matrix;
pub mod elementwise;
pub mod errors;
pub mod math;
pub mod random;
pub mod serialization;
pub mod vector;

//
// Re-exports
//

pub use bool2x2::Bool2x2;
pub use bool2x3::Bool2x3;
pub use bool2x4::Bool2x4;
pub use bool3x2::Bool3x2;
pub use bool3x3::Bool3x3;
pub use bool3x4::Bool3x4;
pub use bool4x2::Bool4x2;
pub use bool4x3::Bool4x3;
pub use bool4x4::Bool4x4;
pub use bool_matrix::{BoolMatrix, HashTable};
pub use elementwise::ElementwiseEq;
pub use errors::IndexError;
pub use vector::{Bool2, Bool3, Bool4, BoolVector, Lane, UInt2, UInt3, UInt4, UIntVector, Vector};
