//! Closed-form gearing relations.

use std::f64::consts::PI;

use uom::si::{
    f64::{Frequency, Length, Ratio, Velocity},
    ratio::ratio,
};

use super::{Divisor, FrontTeeth, GearMathError, WheelDiameter};

/// Distance covered by one wheel revolution.
#[must_use]
pub fn wheel_circumference(diameter: WheelDiameter) -> Length {
    *diameter * PI
}

/// Front chainring teeth divided by rear sprocket teeth.
///
/// # Errors
///
/// Returns [`GearMathError::DivisionByZero`] if `rear_teeth` is zero.
pub fn gear_ratio(front_teeth: FrontTeeth, rear_teeth: u32) -> Result<Ratio, GearMathError> {
    let rear_teeth = GearMathError::check_divisor(rear_teeth, Divisor::RearTeeth)?.into_inner();
    Ok(Ratio::new::<ratio>(
        f64::from(*front_teeth) / f64::from(rear_teeth),
    ))
}

/// Effective wheel diameter for a gear: wheel diameter times gear ratio.
#[must_use]
pub fn gear_inch(diameter: WheelDiameter, gear_ratio: Ratio) -> Length {
    *diameter * gear_ratio
}

/// Crank cadence needed to ride at `speed` in the given gear.
///
/// The wheel turns `speed / circumference` times per unit time, and the
/// cranks turn once for every `gear_ratio` wheel revolutions.
///
/// # Errors
///
/// Returns [`GearMathError::DivisionByZero`] if the gear ratio or the
/// circumference is zero, and [`GearMathError::NotANumber`] if either is `NaN`.
pub fn rpm_for_speed(
    gear_ratio: Ratio,
    speed: Velocity,
    circumference: Length,
) -> Result<Frequency, GearMathError> {
    let gear_ratio = GearMathError::check_divisor(gear_ratio, Divisor::GearRatio)?.into_inner();
    let circumference =
        GearMathError::check_divisor(circumference, Divisor::Circumference)?.into_inner();

    let wheel_revolutions: Frequency = speed / circumference;
    Ok(wheel_revolutions / gear_ratio)
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use uom::si::{
        length::{inch, meter},
        velocity::kilometer_per_hour,
    };

    use super::*;
    use crate::support::units::Cadence;

    fn front(teeth: u32) -> FrontTeeth {
        FrontTeeth::new(teeth).unwrap()
    }

    fn diameter_in(inches: f64) -> WheelDiameter {
        WheelDiameter::new::<inch>(inches).unwrap()
    }

    fn kmh(value: f64) -> Velocity {
        Velocity::new::<kilometer_per_hour>(value)
    }

    #[test]
    fn circumference_of_700c() {
        let circumference = wheel_circumference(diameter_in(29.0));
        assert_relative_eq!(
            circumference.get::<meter>(),
            29.0 * 0.0254 * PI,
            epsilon = 1e-12
        );
        assert_relative_eq!(circumference.get::<meter>(), 2.3141, epsilon = 1e-4);
    }

    #[test]
    fn ratio_is_front_over_rear() {
        for f in [1, 22, 34, 50, 53] {
            for r in 9..=60 {
                let expected = f64::from(f) / f64::from(r);
                assert_relative_eq!(
                    gear_ratio(front(f), r).unwrap().get::<ratio>(),
                    expected,
                    epsilon = 1e-9
                );
            }
        }
    }

    #[test]
    fn zero_rear_teeth() {
        assert_eq!(
            gear_ratio(front(50), 0),
            Err(GearMathError::DivisionByZero {
                divisor: Divisor::RearTeeth
            })
        );
    }

    #[test]
    fn gear_inch_round_trips_to_ratio() {
        let diameter = diameter_in(27.5);
        let ratio_value = gear_ratio(front(42), 17).unwrap();
        let inches = gear_inch(diameter, ratio_value);

        let recovered: Ratio = inches / *diameter;
        assert_relative_eq!(
            recovered.get::<ratio>(),
            ratio_value.get::<ratio>(),
            epsilon = 1e-12
        );
        assert_relative_eq!(inches.get::<inch>(), 27.5 * 42.0 / 17.0, epsilon = 1e-9);
    }

    #[test]
    fn rpm_for_50_15_on_700c() {
        let diameter = diameter_in(29.0);
        let ratio_value = gear_ratio(front(50), 15).unwrap();
        assert_relative_eq!(ratio_value.get::<ratio>(), 3.3333, epsilon = 1e-4);
        assert_relative_eq!(
            gear_inch(diameter, ratio_value).get::<inch>(),
            96.6667,
            epsilon = 1e-4
        );

        let cadence = rpm_for_speed(ratio_value, kmh(20.0), wheel_circumference(diameter)).unwrap();
        assert_relative_eq!(cadence.rpm(), 43.2134, epsilon = 1e-4);
    }

    #[test]
    fn rpm_increases_with_speed() {
        let circumference = wheel_circumference(diameter_in(26.0));
        let ratio_value = gear_ratio(front(38), 19).unwrap();

        let cadences: Vec<f64> = [0.0, 5.0, 10.0, 20.0, 30.0, 40.0]
            .into_iter()
            .map(|speed| {
                rpm_for_speed(ratio_value, kmh(speed), circumference)
                    .unwrap()
                    .rpm()
            })
            .collect();

        assert_relative_eq!(cadences[0], 0.0);
        assert!(cadences.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn rpm_decreases_with_ratio() {
        let circumference = wheel_circumference(diameter_in(26.0));

        // Rear teeth ascending means ratio descending, so cadence must rise.
        let cadences: Vec<f64> = (9..=60)
            .map(|rear| {
                let ratio_value = gear_ratio(front(44), rear).unwrap();
                rpm_for_speed(ratio_value, kmh(25.0), circumference)
                    .unwrap()
                    .rpm()
            })
            .collect();

        assert!(cadences.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn zero_divisors_are_rejected() {
        let circumference = wheel_circumference(diameter_in(29.0));
        let zero_ratio = Ratio::new::<ratio>(0.0);
        assert_eq!(
            rpm_for_speed(zero_ratio, kmh(20.0), circumference),
            Err(GearMathError::DivisionByZero {
                divisor: Divisor::GearRatio
            })
        );

        let ratio_value = Ratio::new::<ratio>(2.0);
        assert_eq!(
            rpm_for_speed(ratio_value, kmh(20.0), Length::new::<meter>(0.0)),
            Err(GearMathError::DivisionByZero {
                divisor: Divisor::Circumference
            })
        );

        assert_eq!(
            rpm_for_speed(Ratio::new::<ratio>(f64::NAN), kmh(20.0), circumference),
            Err(GearMathError::NotANumber {
                divisor: Divisor::GearRatio
            })
        );
    }
}
