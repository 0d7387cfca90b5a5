//! Imperial ↔ SI conversion for the eight numeric form fields.
//!
//! Pure and stateless; invoked only when the unit toggle flips, never as
//! part of the render pipeline. Requests to the service stay imperial.

/// Fixed conversion constants (the conversion contract).
pub const M_PER_IN: f64 = 0.0254;
pub const M_PER_FT: f64 = 0.3048;
pub const PA_PER_PSI: f64 = 6894.76;
pub const M3S_PER_CFM: f64 = 4.7194745e-4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSystem {
    Imperial,
    Si,
}

impl UnitSystem {
    pub fn toggled(self) -> Self {
        match self {
            Self::Imperial => Self::Si,
            Self::Si => Self::Imperial,
        }
    }
}

/// The eight numeric form fields, in whichever unit system is active:
/// tube section `a`/`b`/`t` (in | m), array `length` (ft | m), `flow`
/// (CFM | m³/s), `t_max` (°F | °C), `v_target` (ft/s | m/s), `dp_max`
/// (psi | Pa).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldValues {
    pub a: f64,
    pub b: f64,
    pub t: f64,
    pub length: f64,
    pub flow: f64,
    pub t_max: f64,
    pub v_target: f64,
    pub dp_max: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Convert the imperial field set to SI, rounding each field to the decimal
/// count its display uses. Round-tripping through `si_to_imperial`
/// reproduces inputs to 3–4 significant digits.
pub fn imperial_to_si(values: &FieldValues) -> FieldValues {
    FieldValues {
        a: round_to(values.a * M_PER_IN, 6),
        b: round_to(values.b * M_PER_IN, 6),
        t: round_to(values.t * M_PER_IN, 6),
        length: round_to(values.length * M_PER_FT, 4),
        flow: round_to(values.flow * M3S_PER_CFM, 6),
        t_max: round_to((values.t_max - 32.0) * 5.0 / 9.0, 2),
        v_target: round_to(values.v_target * M_PER_FT, 3),
        dp_max: round_to(values.dp_max * PA_PER_PSI, 1),
    }
}

/// Inverse of [`imperial_to_si`], with imperial display rounding.
pub fn si_to_imperial(values: &FieldValues) -> FieldValues {
    FieldValues {
        a: round_to(values.a / M_PER_IN, 4),
        b: round_to(values.b / M_PER_IN, 4),
        t: round_to(values.t / M_PER_IN, 4),
        length: round_to(values.length / M_PER_FT, 3),
        flow: round_to(values.flow / M3S_PER_CFM, 2),
        t_max: round_to(values.t_max * 9.0 / 5.0 + 32.0, 1),
        v_target: round_to(values.v_target / M_PER_FT, 2),
        dp_max: round_to(values.dp_max / PA_PER_PSI, 4),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service_defaults() -> FieldValues {
        FieldValues {
            a: 2.0,
            b: 2.0,
            t: 0.125,
            length: 3.0,
            flow: 100.0,
            t_max: 100.0,
            v_target: 200.0,
            dp_max: 1.0,
        }
    }

    #[test]
    fn test_fixed_constants() {
        assert_eq!(M_PER_IN, 0.0254);
        assert_eq!(M_PER_FT, 0.3048);
        assert_eq!(PA_PER_PSI, 6894.76);
    }

    #[test]
    fn test_known_conversions() {
        let si = imperial_to_si(&service_defaults());
        assert!((si.a - 0.0508).abs() < 1e-9, "2 in = {} m", si.a);
        assert!((si.length - 0.9144).abs() < 1e-9, "3 ft = {} m", si.length);
        assert!((si.t_max - 37.78).abs() < 1e-9, "100 °F = {} °C", si.t_max);
        assert!((si.dp_max - 6894.8).abs() < 1e-9, "1 psi = {} Pa", si.dp_max);
        assert!((si.flow - 0.047195).abs() < 1e-9, "100 CFM = {} m³/s", si.flow);
    }

    #[test]
    fn test_freezing_point() {
        let mut values = service_defaults();
        values.t_max = 32.0;
        assert_eq!(imperial_to_si(&values).t_max, 0.0);
    }

    #[test]
    fn test_round_trip_within_display_rounding() {
        let cases = [
            service_defaults(),
            FieldValues {
                a: 1.5,
                b: 0.75,
                t: 0.06,
                length: 12.5,
                flow: 850.0,
                t_max: -40.0,
                v_target: 65.3,
                dp_max: 0.25,
            },
        ];

        for original in cases {
            let back = si_to_imperial(&imperial_to_si(&original));
            let pairs = [
                ("a", original.a, back.a),
                ("b", original.b, back.b),
                ("t", original.t, back.t),
                ("length", original.length, back.length),
                ("flow", original.flow, back.flow),
                ("t_max", original.t_max, back.t_max),
                ("v_target", original.v_target, back.v_target),
                ("dp_max", original.dp_max, back.dp_max),
            ];
            for (name, before, after) in pairs {
                let scale = before.abs().max(1.0);
                assert!(
                    (before - after).abs() / scale < 5e-3,
                    "{name} drifted: {before} -> {after}"
                );
            }
        }
    }

    #[test]
    fn test_toggle_is_an_involution() {
        assert_eq!(UnitSystem::Imperial.toggled(), UnitSystem::Si);
        assert_eq!(UnitSystem::Imperial.toggled().toggled(), UnitSystem::Imperial);
    }
}
