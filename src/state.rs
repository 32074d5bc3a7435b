use zeroize::Zeroize;

/// Digest size of the hash driving the generator, and thus the size of both
/// the chain state and every output block.
pub const DIGEST_LEN: usize = 20;

pub(crate) type Block = [u8; DIGEST_LEN];

// Adds `digest` into `state` byte by byte, starting with a carry of one.
// Bytes are added as sign-extended i8 and the carry is an arithmetic shift,
// so it can be -1, 0 or 1. Output diverges from the legacy stream if this
// is done with unsigned bytes.
pub(crate) fn update_state(state: &mut Block, digest: &Block) {
    let mut carry: i32 = 1;
    let mut changed = false;

    for (byte, add) in state.iter_mut().zip(digest.iter()) {
        let sum = i32::from(*byte as i8) + i32::from(*add as i8) + carry;
        let updated = sum as u8;
        changed |= *byte != updated;
        *byte = updated;
        carry = sum >> 8;
    }

    // Never let the chain get stuck on a fixed point
    if !changed {
        state[0] = state[0].wrapping_add(1);
    }
}

/// Copies `src` into `dst` and wipes `src`.
pub(crate) fn move_zeroing(src: &mut [u8], dst: &mut [u8]) {
    dst.copy_from_slice(src);
    src.zeroize();
}

/// Output left over from the last generated block.
///
/// `consumed` counts the leading bytes of `bytes` already handed out; those
/// bytes are always zero.
#[derive(Default)]
pub(crate) struct Remainder {
    pub(crate) bytes: Block,
    pub(crate) consumed: usize,
}

impl Remainder {
    /// Hands out as much of the pending output as fits in `out`, returning
    /// how many bytes were written.
    pub(crate) fn drain_into(&mut self, out: &mut [u8]) -> usize {
        if self.consumed == 0 {
            return 0;
        }

        let start = self.consumed;
        let take = out.len().min(DIGEST_LEN - start);
        move_zeroing(&mut self.bytes[start..start + take], &mut out[..take]);
        self.consumed = (start + take) % DIGEST_LEN;
        take
    }

    /// Replaces the pending output with `block`, of which the first
    /// `consumed` bytes were already handed out and wiped.
    pub(crate) fn refill(&mut self, block: &Block, consumed: usize) {
        self.bytes.copy_from_slice(block);
        self.consumed = consumed % DIGEST_LEN;
    }
}

impl Zeroize for Remainder {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.consumed = 0;
    }
}
