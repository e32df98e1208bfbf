//! Distribution samplers built on the open-interval double draw
//!
//! Every sampler consumes a fixed, documented sequence of underlying draws,
//! so sampled streams are as reproducible as the raw word stream. The
//! open-interval guarantee of [`Mwc256::next_f64`] keeps every logarithm
//! here finite.

use std::f64::consts::PI;

use super::mwc256::Mwc256;

impl Mwc256 {
    /// Sample the standard exponential distribution on (0, inf)
    ///
    /// Inverse-CDF transform of one `next_f64` draw.
    pub fn exp_positive(&mut self) -> f64 {
        -self.next_f64().ln()
    }

    /// Sample the symmetric two-sided exponential (Laplace) distribution
    ///
    /// One `next_f64` draw for the magnitude, one `next_bool` draw for the
    /// sign, in that order.
    pub fn exp(&mut self) -> f64 {
        let magnitude = self.exp_positive();
        if self.next_bool() {
            magnitude
        } else {
            -magnitude
        }
    }

    /// Sample the standard normal distribution
    ///
    /// Box-Muller transform of two `next_f64` draws. Only the cosine branch
    /// is used; no spare variate is cached, so the generator state stays
    /// exactly its seven documented fields.
    pub fn normal(&mut self) -> f64 {
        let u1 = self.next_f64();
        let u2 = self.next_f64();
        (-2.0 * u1.ln()).sqrt() * (2.0 * PI * u2).cos()
    }

    /// Sample the half-normal distribution on [0, inf)
    pub fn normal_positive(&mut self) -> f64 {
        self.normal().abs()
    }

    /// Sample the symmetric triangular distribution on (-1, 1), peak at 0
    ///
    /// Inverse-CDF transform of one `next_f64` draw.
    pub fn triangle(&mut self) -> f64 {
        let u = self.next_f64();
        if u < 0.5 {
            (2.0 * u).sqrt() - 1.0
        } else {
            1.0 - (2.0 * (1.0 - u)).sqrt()
        }
    }

    /// Sample the decreasing triangular distribution on (0, 1)
    ///
    /// Density 2(1 - x); inverse-CDF transform of one `next_f64` draw.
    pub fn triangle_positive(&mut self) -> f64 {
        1.0 - (1.0 - self.next_f64()).sqrt()
    }
}
