//! Quantity and instruction assembly for a computed formula.

/// Total amount of color product mixed per formula, in ounces.
pub const TOTAL_COLOR_OZ: f64 = 2.0;

/// Unit used for every amount in a formula.
pub const UNIT: &str = "oz";

/// Parse a "color:developer" mixing ratio (e.g. "1:1.5") into the developer
/// multiplier. Returns `None` for malformed strings or a non-positive color
/// part.
#[must_use]
pub fn developer_multiplier(mixing_ratio: &str) -> Option<f64> {
    let (color_part, developer_part) = mixing_ratio.split_once(':')?;
    let color: f64 = color_part.trim().parse().ok()?;
    let developer: f64 = developer_part.trim().parse().ok()?;
    if color <= 0.0 || developer < 0.0 {
        return None;
    }
    Some(developer / color)
}

/// Processing time in minutes for a developer volume. Unrecognized volumes
/// fall back to 30 minutes.
#[must_use]
pub fn processing_time(developer_volume: i32) -> i32 {
    match developer_volume {
        10 => 25,
        20 => 30,
        30 => 35,
        40 => 45,
        _ => 30,
    }
}

/// Round an amount to 2 decimal places before it leaves the engine.
#[must_use]
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}

/// Application instructions, assembled as ordered sentence fragments.
///
/// Lifting formulas get the two-step root/ends application, plus a foil/heat
/// suggestion past 2 levels of lift. Deposit formulas get a single even
/// application.
#[must_use]
pub fn special_instructions(for_lifting: bool, level_difference: i32) -> String {
    let mut fragments: Vec<&str> = Vec::new();

    if for_lifting {
        fragments.push("Apply to mid-lengths and ends first, leaving 1 inch from the scalp.");
        fragments.push("After 15 minutes, apply to the roots and process for the remaining time.");
        if level_difference > 2 {
            fragments.push("Use foils or heat to enhance lifting.");
        }
    } else {
        fragments.push("Apply evenly from roots to ends.");
        fragments.push("For more vibrancy, leave on for full processing time.");
    }

    fragments.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("1:1", 1.0)]
    #[case("1:1.5", 1.5)]
    #[case("1:2", 2.0)]
    #[case("2:1", 0.5)]
    #[case(" 1 : 1.5 ", 1.5)]
    fn ratio_parsing(#[case] ratio: &str, #[case] expected: f64) {
        assert_eq!(developer_multiplier(ratio), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("1")]
    #[case("1:")]
    #[case(":2")]
    #[case("a:b")]
    #[case("0:1")]
    #[case("-1:2")]
    fn ratio_parsing_rejects_malformed(#[case] ratio: &str) {
        assert_eq!(developer_multiplier(ratio), None);
    }

    #[rstest]
    #[case(10, 25)]
    #[case(20, 30)]
    #[case(30, 35)]
    #[case(40, 45)]
    #[case(0, 30)]
    #[case(25, 30)]
    fn processing_time_table(#[case] volume: i32, #[case] expected: i32) {
        assert_eq!(processing_time(volume), expected);
    }

    #[test]
    fn rounding() {
        assert_eq!(round2(0.6000000000000001), 0.6);
        assert_eq!(round2(1.4), 1.4);
        assert_eq!(round2(2.0 / 3.0), 0.67);
        assert_eq!(round2(2.0), 2.0);
    }

    #[test]
    fn lifting_instructions_mention_roots_second() {
        let text = special_instructions(true, 2);
        assert!(text.starts_with("Apply to mid-lengths and ends first"));
        assert!(text.contains("After 15 minutes, apply to the roots"));
        assert!(!text.contains("foils"));
    }

    #[test]
    fn big_lift_suggests_foils() {
        let text = special_instructions(true, 3);
        assert!(text.ends_with("Use foils or heat to enhance lifting."));
    }

    #[test]
    fn deposit_instructions_are_single_pass() {
        let text = special_instructions(false, -1);
        assert_eq!(
            text,
            "Apply evenly from roots to ends. For more vibrancy, leave on for full processing time."
        );
    }
}
