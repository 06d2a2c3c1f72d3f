//! Commanded speed sanitizing for the host controls.

/// Highest commandable speed in knots.
pub const MAX_SPEED: f32 = 30.0;

/// Clamp a speed to `0..=MAX_SPEED`. NaN becomes 0.
pub fn clamp_speed(speed: f32) -> f32 {
    if speed.is_nan() {
        0.0
    } else {
        speed.clamp(0.0, MAX_SPEED)
    }
}

/// Interpret the numeric speed field.
///
/// An empty field means 0. Anything that does not parse as a number is
/// rejected and the caller keeps its current speed.
pub fn parse_speed_input(input: &str) -> Option<f32> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f32>().ok().map(clamp_speed)
}

/// Format a speed for display ("25", "12.5").
pub fn format_speed(speed: f32) -> String {
    if speed.fract() == 0.0 {
        format!("{:.0}", speed)
    } else {
        format!("{:.1}", speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        assert_eq!(clamp_speed(-4.0), 0.0);
        assert_eq!(clamp_speed(12.5), 12.5);
        assert_eq!(clamp_speed(31.0), 30.0);
        assert_eq!(clamp_speed(f32::NAN), 0.0);
        assert_eq!(clamp_speed(f32::INFINITY), 30.0);
    }

    #[test]
    fn test_parse_input() {
        assert_eq!(parse_speed_input(""), Some(0.0));
        assert_eq!(parse_speed_input("  "), Some(0.0));
        assert_eq!(parse_speed_input("18"), Some(18.0));
        assert_eq!(parse_speed_input("45"), Some(30.0));
        assert_eq!(parse_speed_input("-2"), Some(0.0));
        assert_eq!(parse_speed_input("fast"), None);
    }

    #[test]
    fn test_format() {
        assert_eq!(format_speed(25.0), "25");
        assert_eq!(format_speed(12.5), "12.5");
    }
}
