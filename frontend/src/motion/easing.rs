use std::f64::consts::PI;
use std::str::FromStr;

use super::error::MotionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Curve {
    In,
    Out,
    InOut,
}

/// Named easing curves, spelled the way section configs write them
/// (`"power3.out"`, `"back.out(1.7)"`, `"sine.inOut"`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Easing {
    Linear,
    /// `power1` is quadratic, `power4` quintic.
    Power(u8, Curve),
    Sine(Curve),
    /// Overshoots past the end before settling.
    BackOut(f64),
    ElasticOut,
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Power(2, Curve::Out)
    }
}

impl Easing {
    pub const DEFAULT_OVERSHOOT: f64 = 1.70158;

    /// Map linear progress onto the curve. Input is clamped to `[0,1]`;
    /// `apply(0) == 0` and `apply(1) == 1` for every curve.
    pub fn apply(&self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        if t == 0.0 || t == 1.0 {
            return t;
        }
        match *self {
            Easing::Linear => t,
            Easing::Power(power, curve) => {
                let exp = i32::from(power) + 1;
                match curve {
                    Curve::In => t.powi(exp),
                    Curve::Out => 1.0 - (1.0 - t).powi(exp),
                    Curve::InOut => {
                        if t < 0.5 {
                            (2.0 * t).powi(exp) / 2.0
                        } else {
                            1.0 - (2.0 * (1.0 - t)).powi(exp) / 2.0
                        }
                    }
                }
            }
            Easing::Sine(curve) => match curve {
                Curve::In => 1.0 - (t * PI / 2.0).cos(),
                Curve::Out => (t * PI / 2.0).sin(),
                Curve::InOut => -((PI * t).cos() - 1.0) / 2.0,
            },
            Easing::BackOut(overshoot) => {
                let c3 = overshoot + 1.0;
                let u = t - 1.0;
                1.0 + c3 * u.powi(3) + overshoot * u.powi(2)
            }
            Easing::ElasticOut => {
                let c4 = (2.0 * PI) / 3.0;
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
        }
    }
}

impl FromStr for Easing {
    type Err = MotionError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let unknown = || MotionError::UnknownEasing(name.to_string());
        let trimmed = name.trim();

        let (base, param) = match trimmed.split_once('(') {
            Some((base, rest)) => {
                let value = rest
                    .strip_suffix(')')
                    .and_then(|v| v.trim().parse::<f64>().ok())
                    .ok_or_else(unknown)?;
                (base, Some(value))
            }
            None => (trimmed, None),
        };

        if base == "none" || base == "linear" {
            return Ok(Easing::Linear);
        }

        let (family, curve) = base.split_once('.').ok_or_else(unknown)?;
        let curve = match curve {
            "in" => Curve::In,
            "out" => Curve::Out,
            "inOut" => Curve::InOut,
            _ => return Err(unknown()),
        };

        match (family, curve) {
            ("back", Curve::Out) => Ok(Easing::BackOut(param.unwrap_or(Self::DEFAULT_OVERSHOOT))),
            ("elastic", Curve::Out) => Ok(Easing::ElasticOut),
            ("sine", curve) => Ok(Easing::Sine(curve)),
            (family, curve) => match family.strip_prefix("power").map(str::parse::<u8>) {
                Some(Ok(power @ 1..=4)) => Ok(Easing::Power(power, curve)),
                _ => Err(unknown()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 9] = [
        Easing::Linear,
        Easing::Power(1, Curve::In),
        Easing::Power(2, Curve::Out),
        Easing::Power(3, Curve::InOut),
        Easing::Power(4, Curve::Out),
        Easing::Sine(Curve::InOut),
        Easing::Sine(Curve::Out),
        Easing::BackOut(Easing::DEFAULT_OVERSHOOT),
        Easing::ElasticOut,
    ];

    #[test]
    fn endpoints_are_exact() {
        for easing in ALL {
            assert_eq!(easing.apply(0.0), 0.0, "{:?}", easing);
            assert_eq!(easing.apply(1.0), 1.0, "{:?}", easing);
            assert_eq!(easing.apply(1.5), 1.0, "{:?}", easing);
            assert_eq!(easing.apply(-0.5), 0.0, "{:?}", easing);
        }
    }

    #[test]
    fn out_curves_lead_linear() {
        assert!(Easing::Power(3, Curve::Out).apply(0.3) > 0.3);
        assert!(Easing::Power(3, Curve::In).apply(0.3) < 0.3);
        let mid = Easing::Sine(Curve::InOut).apply(0.5);
        assert!((mid - 0.5).abs() < 1e-12);
    }

    #[test]
    fn back_out_overshoots_mid_flight() {
        let peak = (1..100)
            .map(|i| Easing::BackOut(1.7).apply(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn parses_config_names() {
        assert_eq!("power3.out".parse::<Easing>(), Ok(Easing::Power(3, Curve::Out)));
        assert_eq!("sine.inOut".parse::<Easing>(), Ok(Easing::Sine(Curve::InOut)));
        assert_eq!("none".parse::<Easing>(), Ok(Easing::Linear));
        assert_eq!("back.out(1.2)".parse::<Easing>(), Ok(Easing::BackOut(1.2)));
        assert_eq!(
            "back.out".parse::<Easing>(),
            Ok(Easing::BackOut(Easing::DEFAULT_OVERSHOOT))
        );
        assert_eq!("elastic.out".parse::<Easing>(), Ok(Easing::ElasticOut));
    }

    #[test]
    fn rejects_unknown_names() {
        for name in ["power9.out", "bounce.out", "power2", "back.out(x)", "elastic.in"] {
            assert_eq!(
                name.parse::<Easing>(),
                Err(MotionError::UnknownEasing(name.to_string()))
            );
        }
    }
}
