//! Reversible byte transforms for kvpool.
//!
//! A [`Transform`] is an encode/decode pair over byte sequences. The store
//! layer composes transforms in an ordered chain between callers and a raw
//! storage backend, so concerns like compression or text-armoring stay out
//! of the backends themselves.
//!
//! Shipped transforms:
//!
//! - [`ZstdCompress`] -- zstd compression for values
//! - [`HexArmor`] -- lowercase-hex armoring for binary-hostile channels

pub mod armor;
pub mod compress;
pub mod error;
pub mod traits;

pub use armor::HexArmor;
pub use compress::ZstdCompress;
pub use error::{TransformError, TransformResult};
pub use traits::Transform;
