//! Crocco n-τ combustion response `R(ω) = n (1 − e^{−iωτ})`.

use num_complex::Complex64;

/// Response at a single angular frequency.
pub fn crocco_response_at(omega: f64, n: f64, tau: f64) -> Complex64 {
    n * (Complex64::new(1.0, 0.0) - Complex64::new(0.0, -omega * tau).exp())
}

/// Response over a set of angular frequencies [rad/s].
pub fn crocco_response(omega: &[f64], n: f64, tau: f64) -> Vec<Complex64> {
    omega.iter().map(|&w| crocco_response_at(w, n, tau)).collect()
}

/// `|R(ω)|`, equal to `2 n |sin(ωτ/2)|`.
pub fn crocco_magnitude(omega: &[f64], n: f64, tau: f64) -> Vec<f64> {
    omega.iter().map(|&w| crocco_response_at(w, n, tau).norm()).collect()
}

/// Phase of `R(ω)` in radians.
pub fn crocco_phase(omega: &[f64], n: f64, tau: f64) -> Vec<f64> {
    omega.iter().map(|&w| crocco_response_at(w, n, tau).arg()).collect()
}
