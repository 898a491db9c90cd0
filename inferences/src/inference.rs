/// Modèle linéaire figé : ordonnée à l'origine + table de coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel<const N: usize> {
    pub intercept: f64,
    pub coefficients: [f64; N],
}

impl<const N: usize> LinearModel<N> {
    pub const fn new(intercept: f64, coefficients: [f64; N]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    /// `intercept + Σ coefficients[i] * features[i]`, accumulé dans l'ordre des features.
    pub fn decision(&self, features: &[f64; N]) -> f64 {
        self.coefficients
            .iter()
            .zip(features.iter())
            .fold(self.intercept, |acc, (c, x)| acc + c * x)
    }

    pub fn feature_count(&self) -> usize {
        N
    }
}

pub fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
