//! Concrete digest algorithms
//!
//! Seedable byte-stream digests with a shared `(bytes, seed) -> word`
//! contract. The element hash dispatcher consumes these as opaque functions;
//! they are also usable standalone for checksumming and table addressing.

mod bkdr;
mod crc32;
mod fnv;

pub use bkdr::{bkdr, bkdr_str};
pub use crc32::crc32;
pub use fnv::{fnv32, fnv32_1a, fnv32_1a_str};
