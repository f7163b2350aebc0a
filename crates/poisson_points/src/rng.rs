//! Random sources for the samplers.
//!
//! [`PointRng`] is the only capability the samplers need: a float in `[0, 1)`
//! and a bounded integer. [`DefaultPrng`] is a tiny multiplicative generator
//! whose output is fully reproducible from its seed, and [`RandRng`] lets any
//! [`rand::RngCore`] drive the samplers instead.
use rand::RngCore;

/// Seed used by [`DefaultPrng::new`] and [`DefaultPrng::default`].
pub const DEFAULT_SEED: u32 = 7_133_167;

const MULTIPLIER: u32 = 521_167;
const MANTISSA_MASK: u32 = 0x007f_ffff;
// Exponent bits of 2.0f32; OR-ing a mantissa in yields a float in [2, 4).
const EXPONENT_TWO: u32 = 0x4000_0000;

/// Random source consumed by the samplers.
pub trait PointRng {
    /// Returns the next value in `[0, 1)`.
    fn next_float(&mut self) -> f32;

    /// Returns the next value in `[0, bound)`, or 0 when `bound` is 0.
    fn next_int(&mut self, bound: u32) -> u32 {
        let scaled = (self.next_float() * bound as f32) as u32;
        scaled.min(bound.saturating_sub(1))
    }
}

/// Small seedable generator with a single 32-bit state word.
///
/// Each step multiplies the state by a fixed odd constant and reinterprets the
/// low 23 bits as the mantissa of a float in `[2, 4)`, which is remapped to
/// `[0, 1)`. Quality is adequate for visual sampling, not for statistics or
/// cryptography.
///
/// Seeds are forced odd. An even state keeps its trailing zero bits forever,
/// and a state with 23 or more of them (zero included) only ever yields `0.0`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DefaultPrng {
    state: u32,
}

impl Default for DefaultPrng {
    fn default() -> Self {
        Self {
            state: DEFAULT_SEED,
        }
    }
}

impl DefaultPrng {
    /// Creates a generator seeded with [`DEFAULT_SEED`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with the given seed, with its lowest bit set.
    pub fn with_seed(seed: u32) -> Self {
        Self { state: seed | 1 }
    }

    /// Resets the generator to the given seed, with its lowest bit set.
    pub fn seed(&mut self, seed: u32) {
        self.state = seed | 1;
    }

    /// Current internal state; feeding it to [`DefaultPrng::with_seed`] resumes the stream.
    pub fn state(&self) -> u32 {
        self.state
    }

    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(MULTIPLIER);
        self.state
    }
}

impl PointRng for DefaultPrng {
    #[inline]
    fn next_float(&mut self) -> f32 {
        let bits = (self.step() & MANTISSA_MASK) | EXPONENT_TWO;
        0.5 * (f32::from_bits(bits) - 2.0)
    }
}

/// Low bits of the state have short periods, so each `u32` is assembled from
/// the high halves of two steps. Still a low-quality source; prefer a `rand`
/// generator where statistical quality matters.
impl RngCore for DefaultPrng {
    fn next_u32(&mut self) -> u32 {
        let hi = self.step() & 0xffff_0000;
        let lo = self.step() >> 16;
        hi | lo
    }

    fn next_u64(&mut self) -> u64 {
        let hi = self.next_u32() as u64;
        let lo = self.next_u32() as u64;
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_u32().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Adapts any [`rand::RngCore`] into a [`PointRng`].
#[derive(Debug, Clone)]
pub struct RandRng<R>(pub R);

impl<R: RngCore> RandRng<R> {
    pub fn new(rng: R) -> Self {
        Self(rng)
    }

    pub fn into_inner(self) -> R {
        self.0
    }
}

impl<R: RngCore> PointRng for RandRng<R> {
    #[inline]
    fn next_float(&mut self) -> f32 {
        rand01(&mut self.0)
    }
}

/// Maps the top 24 bits of a `u32` draw onto `[0, 1)` without rounding up to 1.
#[inline]
pub(crate) fn rand01<R: RngCore + ?Sized>(rng: &mut R) -> f32 {
    const SCALE: f32 = 1.0 / (1u32 << 24) as f32;
    (rng.next_u32() >> 8) as f32 * SCALE
}
