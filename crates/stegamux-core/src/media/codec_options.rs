/// Tuning knobs for the parametrized methods. Methods that take no
/// parameters ignore these.
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// the bit plane targeted by the image BitPlane method, valid within 0..=7.
    ///
    /// Higher planes carry more visual weight, so embedding there is easier
    /// to spot but survives low-order noise.
    pub bit_plane: u8,

    /// the echo offset in samples used by the audio Echo method.
    ///
    /// One payload bit occupies `echo_delay + 2` samples, so this number
    /// directly limits the capacity.
    pub echo_delay: usize,
}

impl Default for CodecOptions {
    fn default() -> Self {
        Self {
            bit_plane: 1,
            echo_delay: 120,
        }
    }
}
