//! Spatial envelopes applied to an evaluated wavepacket.

use std::fmt;
use std::sync::Arc;

type Profile = dyn Fn(f64) -> f64 + Send + Sync;

/// Amplitude multiplier as a function of position in metres.
///
/// Applied after normalization, so an envelope can push the peak above or
/// below one.
#[derive(Clone)]
pub struct Envelope {
    profile: Arc<Profile>,
}

impl Envelope {
    /// Wrap a position → factor function.
    pub fn new(profile: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        Self {
            profile: Arc::new(profile),
        }
    }

    /// `exp(-rate · |x|)`.
    pub fn exponential_decay(rate: f64) -> Self {
        Self::new(move |x: f64| (-rate * x.abs()).exp())
    }

    /// Factor at position `x`.
    pub fn factor(&self, x: f64) -> f64 {
        (self.profile)(x)
    }
}

impl PartialEq for Envelope {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.profile, &other.profile)
    }
}

impl fmt::Debug for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Envelope(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decay_is_one_at_origin() {
        let e = Envelope::exponential_decay(2.0);
        assert_eq!(e.factor(0.0), 1.0);
        assert!((e.factor(-0.5) - (-1.0f64).exp()).abs() < 1e-15);
    }
}
