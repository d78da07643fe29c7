use uom::si::{f64::Frequency, frequency::hertz};

const SECONDS_PER_MINUTE: f64 = 60.0;

/// Extension trait for expressing a [`Frequency`] as a pedalling cadence.
///
/// One crank revolution is one cycle, so revolutions per minute is the
/// frequency in hertz scaled by sixty.
pub trait Cadence {
    /// Returns the frequency in revolutions per minute.
    fn rpm(&self) -> f64;

    /// Creates a frequency from revolutions per minute.
    fn from_rpm(rpm: f64) -> Self;
}

impl Cadence for Frequency {
    fn rpm(&self) -> f64 {
        self.get::<hertz>() * SECONDS_PER_MINUTE
    }

    fn from_rpm(rpm: f64) -> Self {
        Frequency::new::<hertz>(rpm / SECONDS_PER_MINUTE)
    }
}
