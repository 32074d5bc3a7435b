//! Reproducible SHA-1 driven pseudo-random byte stream.
//!
//! [`Sha1Prng`] replays a legacy hash-chain generator byte for byte: the
//! state is the digest of the seed material, each output block is the
//! digest of the state, and the state is ratcheted after every block with a
//! carry-propagating add. Identical seeds and identical request sequences
//! give identical output on every platform.
//!
//! This is a reproducible stream, not an entropy source. Seeding is always
//! explicit.
//!
//! ```
//! use sha1prng::Sha1Prng;
//!
//! let mut prng = Sha1Prng::from_seed(b"seed");
//! let mut buf = [0u8; 32];
//! prng.next_bytes(&mut buf)?;
//! let bit = prng.next(1)?;
//! assert!(bit <= 1);
//! # Ok::<(), sha1prng::PrngError>(())
//! ```

mod error;
mod prng;
#[cfg(feature = "rand-core")]
mod rng;
mod state;

pub use error::PrngError;
pub use prng::{HashPrng, Sha1Prng};
pub use state::DIGEST_LEN;
