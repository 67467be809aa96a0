//! Formatting follows the conventions of web number formatting so that the labels read the same as
//! in the browser version of the lab: exponents carry an explicit sign and large distances are
//! grouped by thousands.

use crate::scene::Scene;

/// Formats `value` in scientific notation with `digits` fraction digits, with a signed exponent.
///
/// ```
/// use gravitelab::readout::format_exponential;
///
/// assert_eq!(format_exponential(1.982e20, 2), "1.98e+20");
/// assert_eq!(format_exponential(0.005, 1), "5.0e-3");
/// ```
pub fn format_exponential(value: f64, digits: usize) -> String {
    if let Some(special) = non_finite(value) {
        return special.to_owned();
    }

    signed_exponent(format!("{value:.digits$e}"))
}

/// Formats `value` in scientific notation with as many digits as needed to parse it back exactly.
///
/// ```
/// use gravitelab::readout::format_exponential_exact;
///
/// assert_eq!(format_exponential_exact(5.972e24), "5.972e+24");
/// assert_eq!(format_exponential_exact(1.23456e24), "1.23456e+24");
/// ```
pub fn format_exponential_exact(value: f64) -> String {
    match non_finite(value) {
        Some(special) => special.to_owned(),
        None => signed_exponent(format!("{value:e}")),
    }
}

fn signed_exponent(formatted: String) -> String {
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => formatted,
    }
}

/// Formats `value` with exactly `digits` fraction digits.
///
/// ```
/// use gravitelab::readout::format_fixed;
///
/// assert_eq!(format_fixed(1018.2947, 2), "1018.29");
/// ```
pub fn format_fixed(value: f64, digits: usize) -> String {
    match non_finite(value) {
        Some(special) => special.to_owned(),
        None => format!("{value:.digits$}"),
    }
}

/// Formats `value` with thousands separators and at most three fraction digits.
///
/// ```
/// use gravitelab::readout::format_grouped;
///
/// assert_eq!(format_grouped(384_400_000.0), "384,400,000");
/// assert_eq!(format_grouped(-1234.5), "-1,234.5");
/// ```
pub fn format_grouped(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_owned();
    }

    let formatted = format!("{:.3}", value.abs());
    let (integer, fraction) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut grouped = String::with_capacity(formatted.len() + integer.len() / 3 + 1);
    if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        grouped.push('-');
    }
    for (i, digit) in integer.chars().enumerate() {
        if i != 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    if !fraction.is_empty() {
        grouped.push('.');
        grouped.push_str(fraction);
    }

    grouped
}

fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// Lines of text displayed next to the central body.
///
/// ```
/// use gravitelab::{prelude::*, readout::info_lines};
///
/// let scene = Scene::from(&SimulationParameters::default());
///
/// assert_eq!(
///     info_lines(&scene),
///     [
///         "Force: 1.98e+20 N",
///         "Velocity (avg): 1018.29 m/s",
///         "Distance: 384,400,000 m",
///     ]
/// );
/// ```
pub fn info_lines(scene: &Scene) -> [String; 3] {
    [
        format!("Force: {} N", format_exponential(scene.quantities.force, 2)),
        format!(
            "Velocity (avg): {} m/s",
            format_fixed(scene.quantities.average_velocity, 2)
        ),
        format!("Distance: {} m", format_grouped(scene.distance)),
    ]
}

/// Label displayed next to the orbiting body.
pub fn speed_line(speed: f64) -> String {
    format!("Speed: {} m/s", format_fixed(speed, 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exponential() {
        assert_eq!(format_exponential(1.982e20, 2), "1.98e+20");
        assert_eq!(format_exponential(0.0, 2), "0.00e+0");
        assert_eq!(format_exponential(-4.5e-7, 2), "-4.50e-7");
        assert_eq!(format_exponential(9.999, 2), "1.00e+1");
        assert_eq!(format_exponential(f64::INFINITY, 2), "Infinity");
        assert_eq!(format_exponential(f64::NAN, 2), "NaN");
    }

    #[test]
    fn exact_exponential_parses_back() {
        for value in [1.23456e24, 7.348e22, 0.1 + 0.2, -4.5e-7, 1.0] {
            let formatted = format_exponential_exact(value);
            assert_eq!(formatted.parse::<f64>(), Ok(value), "{formatted}");
        }
        assert_eq!(format_exponential_exact(1.0), "1e+0");
    }

    #[test]
    fn fixed() {
        assert_eq!(format_fixed(0.0, 2), "0.00");
        assert_eq!(format_fixed(12.345_678, 2), "12.35");
        assert_eq!(format_fixed(f64::NEG_INFINITY, 2), "-Infinity");
    }

    #[test]
    fn grouped() {
        assert_eq!(format_grouped(0.0), "0");
        assert_eq!(format_grouped(999.0), "999");
        assert_eq!(format_grouped(1000.0), "1,000");
        assert_eq!(format_grouped(1_234_567.891_2), "1,234,567.891");
        assert_eq!(format_grouped(0.5), "0.5");
        assert_eq!(format_grouped(-0.0001), "0");
        assert_eq!(format_grouped(5e9), "5,000,000,000");
        assert_eq!(format_grouped(f64::INFINITY), "∞");
    }

    #[test]
    fn speed_label() {
        assert_eq!(speed_line(4_465_021.123), "Speed: 4465021.12 m/s");
    }
}
