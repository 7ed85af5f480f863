//! Container types and the traversal protocol
//!
//! Containers are generic over an [`Element`](crate::element::Element) and
//! expose the uniform cursor protocol from [`cursor`], so generic
//! algorithms depend only on [`Iterable`] rather than on concrete
//! container types.
//!
//! - [`Vector<T>`] - growable contiguous random-access sequence

pub mod cursor;
mod vector;

pub use cursor::{Cursor, IterMode, Iterable};
pub use vector::{Vector, VECTOR_DEFAULT_GROW, VECTOR_MAXN_LIMIT};
