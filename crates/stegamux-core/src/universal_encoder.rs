use enum_dispatch::enum_dispatch;

use crate::error::StegoError;
use crate::result::Result;

/// generic hiding algorithm, places one payload bit onto a byte sized carrier unit
#[enum_dispatch]
pub trait HideAlgorithm {
    fn encode(&self, carrier: u8, bit: bool) -> u8;
}

/// default 1 bit hiding strategy, overwrites the least significant bit
pub struct OneBitHide;
impl HideAlgorithm for OneBitHide {
    fn encode(&self, carrier: u8, bit: bool) -> u8 {
        (carrier & (u8::MAX - 1)) | u8::from(bit)
    }
}

/// encodes a bit as the popcount parity of the unit, toggling the least
/// significant bit when the parities disagree
pub struct ParityBitHide;
impl HideAlgorithm for ParityBitHide {
    fn encode(&self, carrier: u8, bit: bool) -> u8 {
        if (carrier.count_ones() % 2 == 1) == bit {
            carrier
        } else {
            carrier ^ 1
        }
    }
}

/// sets or clears one fixed bit plane of the unit
pub struct BitPlaneHide {
    plane: u8,
}

impl BitPlaneHide {
    /// `plane` must be within 0..=7, validated at the codec boundary
    pub fn new(plane: u8) -> Self {
        Self { plane }
    }
}

impl HideAlgorithm for BitPlaneHide {
    fn encode(&self, carrier: u8, bit: bool) -> u8 {
        let mask = 1 << self.plane;
        if bit {
            carrier | mask
        } else {
            carrier & !mask
        }
    }
}

#[enum_dispatch(HideAlgorithm)]
pub enum HideAlgorithms {
    OneBitHide,
    ParityBitHide,
    BitPlaneHide,
}

/// generic stegano encoder, embeds a framed bit sequence into a byte
/// addressed carrier buffer, one bit per unit
pub struct UniversalEncoder<'c> {
    carrier: &'c mut [u8],
    algorithm: HideAlgorithms,
}

impl<'c> UniversalEncoder<'c> {
    pub fn new(carrier: &'c mut [u8], algorithm: HideAlgorithms) -> Self {
        UniversalEncoder { carrier, algorithm }
    }

    pub fn capacity(&self) -> usize {
        self.carrier.len()
    }

    /// Places all bits in carrier order. A sequence longer than the capacity
    /// aborts before any unit is touched.
    pub fn embed(&mut self, bits: &[bool]) -> Result<()> {
        if bits.len() > self.carrier.len() {
            return Err(StegoError::CapacityError {
                needed: bits.len(),
                available: self.carrier.len(),
            });
        }

        for (unit, bit) in self.carrier.iter_mut().zip(bits) {
            *unit = self.algorithm.encode(*unit, *bit);
        }

        Ok(())
    }
}
