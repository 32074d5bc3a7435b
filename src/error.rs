use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum PrngError {
    #[display("generator has not been seeded")]
    NotInitialized,
    #[display("cannot draw {bits} bits, expected 1 to 32")]
    InvalidBitCount { bits: u32 },
}
