/// Small deterministic generator (SplitMix64).
#[derive(Clone, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    /// Uniform in `[0, 1)` with 53 bits of precision.
    pub fn next_f64_01(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Normal sample with the given mean and standard deviation (Box-Muller).
    pub fn next_gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        // u1 in (0, 1] so ln() stays finite.
        let u1 = 1.0 - self.next_f64_01();
        let u2 = self.next_f64_01();
        let z = (-2.0 * u1.ln()).sqrt() * (std::f64::consts::TAU * u2).cos();
        mean + std_dev * z
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Fnv1a64(u64);

impl Fnv1a64 {
    pub const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub fn finish(self) -> u64 {
        self.0
    }
}

/// Noise seed for one named asset: stable across runs, distinct per file.
pub fn asset_seed(base: u64, name: &str) -> u64 {
    let mut h = Fnv1a64::new_default();
    h.write_u64(base);
    h.write_bytes(name.as_bytes());
    h.finish()
}

/// `value` truncated toward zero, like an integer cast of a float offset.
pub fn trunc_i32(value: f64) -> i32 {
    value.trunc() as i32
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
