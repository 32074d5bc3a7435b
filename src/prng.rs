use core::fmt;
use core::mem;

use log::{debug, trace};
use sha1::digest::{consts::U20, Digest, Output};
use sha1::Sha1;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::PrngError;
use crate::state::{move_zeroing, update_state, Block, Remainder, DIGEST_LEN};

/// Reproducible byte generator driven by a 20-byte digest.
///
/// Seeding hashes the previous state (if any) together with the seed into a
/// new chain state. Each output block is the digest of the current state,
/// after which the state is ratcheted forward by adding that block back into
/// it. Output bytes are wiped from internal buffers as soon as they are
/// handed out.
///
/// An instance starts unseeded unless constructed with a seed, and refuses
/// to produce output until [`HashPrng::reseed`] has been called.
pub struct HashPrng<D = Sha1> {
    hasher: D,
    state: Option<Block>,
    remainder: Remainder,
}

/// The SHA-1 instantiation, matching the legacy stream.
pub type Sha1Prng = HashPrng<Sha1>;

impl<D> HashPrng<D>
where
    D: Digest<OutputSize = U20>,
{
    /// Creates a generator, seeding it when `seed` is given.
    pub fn new(seed: Option<&[u8]>) -> Self {
        let mut prng = Self::unseeded();
        if let Some(seed) = seed {
            prng.reseed(seed);
        }
        prng
    }

    /// Creates a generator with no state. It must be seeded before use.
    pub fn unseeded() -> Self {
        Self {
            hasher: D::new(),
            state: None,
            remainder: Remainder::default(),
        }
    }

    pub fn from_seed(seed: &[u8]) -> Self {
        Self::new(Some(seed))
    }

    pub fn is_seeded(&self) -> bool {
        self.state.is_some()
    }

    /// Folds `seed` into the generator.
    ///
    /// The previous state, when present, is hashed in ahead of the seed and
    /// then wiped, so reseeding accumulates rather than replaces.
    pub fn reseed(&mut self, seed: &[u8]) {
        if let Some(state) = self.state.as_mut() {
            Digest::update(&mut self.hasher, &state[..]);
            state.zeroize();
        }
        Digest::update(&mut self.hasher, seed);

        let mut next = finalize(&mut self.hasher);
        self.state = Some(next);
        next.zeroize();

        debug!("reseeded generator with {} byte seed", seed.len());
    }

    /// Fills `out` with the next bytes of the stream.
    ///
    /// Leftover bytes of the previous block are handed out first, so the
    /// stream does not depend on how requests are split.
    pub fn next_bytes(&mut self, out: &mut [u8]) -> Result<(), PrngError> {
        let state = self.state.as_mut().ok_or(PrngError::NotInitialized)?;

        let mut generated = self.remainder.drain_into(out);
        let mut blocks = 0usize;

        while generated < out.len() {
            Digest::update(&mut self.hasher, &state[..]);
            let mut block = finalize(&mut self.hasher);
            update_state(state, &block);

            let take = (out.len() - generated).min(DIGEST_LEN);
            move_zeroing(&mut block[..take], &mut out[generated..generated + take]);
            generated += take;
            blocks += 1;

            if generated == out.len() {
                self.remainder.refill(&block, take);
            }
            block.zeroize();
        }

        trace!(
            "generated {} bytes, {} new blocks, {} bytes pending",
            out.len(),
            blocks,
            (DIGEST_LEN - self.remainder.consumed) % DIGEST_LEN
        );
        Ok(())
    }

    /// Draws `num_bits` bits (1 to 32) from the stream as an unsigned value.
    ///
    /// Whole bytes are consumed, big-endian, and the surplus low bits are
    /// shifted out.
    pub fn next(&mut self, num_bits: u32) -> Result<u32, PrngError> {
        if !(1..=32).contains(&num_bits) {
            return Err(PrngError::InvalidBitCount { bits: num_bits });
        }

        let num_bytes = num_bits.div_ceil(8);
        let mut buf = [0u8; 4];
        let bytes = &mut buf[..num_bytes as usize];
        self.next_bytes(bytes)?;

        let value = bytes
            .iter()
            .fold(0u32, |acc, &b| (acc << 8) | u32::from(b));
        buf.zeroize();

        Ok(value >> (num_bytes * 8 - num_bits))
    }
}

// Takes the accumulated digest, leaving a fresh hasher behind.
fn finalize<D>(hasher: &mut D) -> Block
where
    D: Digest<OutputSize = U20>,
{
    let mut digest = Output::<D>::default();
    mem::replace(hasher, D::new()).finalize_into(&mut digest);

    let mut block = [0u8; DIGEST_LEN];
    move_zeroing(&mut digest, &mut block);
    block
}

impl<D> Default for HashPrng<D>
where
    D: Digest<OutputSize = U20>,
{
    fn default() -> Self {
        Self::unseeded()
    }
}

impl<D> fmt::Debug for HashPrng<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashPrng")
            .field("seeded", &self.state.is_some())
            .field("consumed", &self.remainder.consumed)
            .finish_non_exhaustive()
    }
}

impl<D> Drop for HashPrng<D> {
    fn drop(&mut self) {
        if let Some(state) = self.state.as_mut() {
            state.zeroize();
        }
        self.remainder.zeroize();
    }
}

impl<D> ZeroizeOnDrop for HashPrng<D> {}
