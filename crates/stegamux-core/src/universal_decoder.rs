use enum_dispatch::enum_dispatch;

/// generic unveil algorithm, reads one payload bit back out of a byte sized
/// carrier unit
#[enum_dispatch]
pub trait UnveilAlgorithm {
    fn decode(&self, carrier: u8) -> bool;
}

/// default 1 bit unveil strategy, reads the least significant bit
pub struct OneBitUnveil;
impl UnveilAlgorithm for OneBitUnveil {
    fn decode(&self, carrier: u8) -> bool {
        (carrier & 1) == 1
    }
}

/// reads a bit as the popcount parity of the unit
pub struct ParityBitUnveil;
impl UnveilAlgorithm for ParityBitUnveil {
    fn decode(&self, carrier: u8) -> bool {
        carrier.count_ones() % 2 == 1
    }
}

/// reads one fixed bit plane of the unit
pub struct BitPlaneUnveil {
    plane: u8,
}

impl BitPlaneUnveil {
    /// `plane` must be within 0..=7, validated at the codec boundary
    pub fn new(plane: u8) -> Self {
        Self { plane }
    }
}

impl UnveilAlgorithm for BitPlaneUnveil {
    fn decode(&self, carrier: u8) -> bool {
        (carrier >> self.plane) & 1 == 1
    }
}

#[enum_dispatch(UnveilAlgorithm)]
pub enum UnveilAlgorithms {
    OneBitUnveil,
    ParityBitUnveil,
    BitPlaneUnveil,
}

/// generic stegano decoder, lends the bit sequence stored in a byte
/// addressed carrier buffer to the framing layer
pub struct UniversalDecoder<'c> {
    carrier: &'c [u8],
    algorithm: UnveilAlgorithms,
}

impl<'c> UniversalDecoder<'c> {
    pub fn new(carrier: &'c [u8], algorithm: UnveilAlgorithms) -> Self {
        UniversalDecoder { carrier, algorithm }
    }

    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.carrier.iter().map(|unit| self.algorithm.decode(*unit))
    }
}
