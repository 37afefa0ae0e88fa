//! Rachford-Rice objective for an ideal two-phase split.

/// `f(r) = Σ zᵢ(Kᵢ - 1) / (1 + r(Kᵢ - 1))` for feed `z` and K-values `k`.
///
/// The root `r` in `[0, 1]` is the vapor fraction of the feed.
#[derive(Debug, Clone, Copy)]
pub struct RachfordRice<'a> {
    z: &'a [f64],
    k: &'a [f64],
}

impl<'a> RachfordRice<'a> {
    /// `z` and `k` are paired by position; extra entries of the longer slice
    /// are ignored.
    pub fn new(z: &'a [f64], k: &'a [f64]) -> Self {
        Self { z, k }
    }

    pub fn residual(&self, r: f64) -> f64 {
        self.pairs()
            .map(|(z, k)| z * (k - 1.0) / (1.0 + r * (k - 1.0)))
            .sum()
    }

    pub fn derivative(&self, r: f64) -> f64 {
        -self
            .pairs()
            .map(|(z, k)| {
                let d = 1.0 + r * (k - 1.0);
                z * (k - 1.0).powi(2) / (d * d)
            })
            .sum::<f64>()
    }

    /// Vapor mole fractions `yᵢ = Kᵢzᵢ / (1 + (Kᵢ - 1)r)`.
    pub fn vapor(&self, r: f64) -> Vec<f64> {
        self.pairs()
            .map(|(z, k)| k * z / (1.0 + (k - 1.0) * r))
            .collect()
    }

    /// Liquid mole fractions `xᵢ = zᵢ / (1 + (Kᵢ - 1)r)`.
    pub fn liquid(&self, r: f64) -> Vec<f64> {
        self.pairs()
            .map(|(z, k)| z / (1.0 + (k - 1.0) * r))
            .collect()
    }

    fn pairs(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.z.iter().copied().zip(self.k.iter().copied())
    }
}
