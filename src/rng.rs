//! `rand_core` integration.
//!
//! Higher-level draws (booleans, ranges, floats) come from the `rand`
//! ecosystem layered on top of [`RngCore`] rather than from this crate.

use rand_core::RngCore;
use sha1::digest::{consts::U20, Digest};

use crate::prng::HashPrng;

impl<D> RngCore for HashPrng<D>
where
    D: Digest<OutputSize = U20>,
{
    /// Same as `next(32)`.
    ///
    /// # Panics
    /// If the generator has not been seeded.
    fn next_u32(&mut self) -> u32 {
        match self.next(32) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Two 32-bit draws combined the legacy way: the high word is shifted
    /// up and the low word is added sign-extended, so a low word with its
    /// top bit set borrows from the high word.
    ///
    /// # Panics
    /// If the generator has not been seeded.
    fn next_u64(&mut self) -> u64 {
        let high = i64::from(self.next_u32() as i32);
        let low = i64::from(self.next_u32() as i32);
        (high << 32).wrapping_add(low) as u64
    }

    /// # Panics
    /// If the generator has not been seeded.
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(err) = self.next_bytes(dest) {
            panic!("{err}");
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.next_bytes(dest).map_err(rand_core::Error::new)
    }
}
