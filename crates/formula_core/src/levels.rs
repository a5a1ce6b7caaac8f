//! Lookup tables over the 1-10 level scale.
//!
//! These are step tables taken from colorimetry charts, not formulas. The
//! breakpoints are load-bearing and must not be interpolated.

use common_formulator::ToneCategory;
use serde::Serialize;
use std::fmt;

/// The natural pigment exposed as hair is lightened past a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnderlyingPigment {
    #[serde(rename = "All pigments")]
    AllPigments,
    #[serde(rename = "Red-brown")]
    RedBrown,
    #[serde(rename = "Red")]
    Red,
    #[serde(rename = "Red-orange")]
    RedOrange,
    #[serde(rename = "Orange")]
    Orange,
    #[serde(rename = "Yellow-orange")]
    YellowOrange,
    #[serde(rename = "Yellow")]
    Yellow,
    #[serde(rename = "Pale yellow")]
    PaleYellow,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl UnderlyingPigment {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllPigments => "All pigments",
            Self::RedBrown => "Red-brown",
            Self::Red => "Red",
            Self::RedOrange => "Red-orange",
            Self::Orange => "Orange",
            Self::YellowOrange => "Yellow-orange",
            Self::Yellow => "Yellow",
            Self::PaleYellow => "Pale yellow",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for UnderlyingPigment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Underlying pigment at a starting level. Levels outside 1-10 resolve to
/// [`UnderlyingPigment::Unknown`], which is non-fatal and propagates into the
/// result.
#[must_use]
pub fn underlying_pigment(level: i32) -> UnderlyingPigment {
    match level {
        1 | 2 => UnderlyingPigment::AllPigments,
        3 | 4 => UnderlyingPigment::RedBrown,
        5 => UnderlyingPigment::Red,
        6 => UnderlyingPigment::RedOrange,
        7 => UnderlyingPigment::Orange,
        8 => UnderlyingPigment::YellowOrange,
        9 => UnderlyingPigment::Yellow,
        10 => UnderlyingPigment::PaleYellow,
        _ => UnderlyingPigment::Unknown,
    }
}

/// Percentage of ash tones needed to neutralize warmth for a given lift.
///
/// The values are midpoints of documented ranges (10-15%, 25-30%, 40-50%,
/// 60-75%). No lift means no ash.
#[must_use]
pub fn ash_percentage(level_difference: i32) -> i32 {
    if level_difference <= 0 {
        return 0;
    }
    match level_difference {
        1 => 15,
        2 => 30,
        3 => 50,
        4 => 65,
        _ => 75,
    }
}

/// Developer volume for a given lift, 10 (deposit only) through 40.
///
/// Starting levels of 4 and darker get an extra 10 volume at exactly 2 levels
/// of lift. The asymmetry is inherited from the source chart and is kept
/// as-is.
#[must_use]
pub fn developer_volume(level_difference: i32, starting_level: i32) -> i32 {
    if level_difference <= 0 {
        return 10;
    }
    let dark_hair_bump = if starting_level <= 4 { 10 } else { 0 };
    match level_difference {
        1 => 20,
        2 => 20 + dark_hair_bump,
        3 => 30,
        _ => 40,
    }
}

/// The tone family that neutralizes a given underlying pigment.
#[must_use]
pub fn corrective_tone(pigment: UnderlyingPigment) -> ToneCategory {
    match pigment {
        // Green neutralizes red.
        UnderlyingPigment::RedBrown | UnderlyingPigment::Red => ToneCategory::Green,
        // Blue neutralizes orange.
        UnderlyingPigment::RedOrange | UnderlyingPigment::Orange => ToneCategory::Blue,
        // Violet neutralizes yellow.
        UnderlyingPigment::YellowOrange
        | UnderlyingPigment::Yellow
        | UnderlyingPigment::PaleYellow => ToneCategory::Violet,
        _ => ToneCategory::Ash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, UnderlyingPigment::AllPigments)]
    #[case(2, UnderlyingPigment::AllPigments)]
    #[case(3, UnderlyingPigment::RedBrown)]
    #[case(4, UnderlyingPigment::RedBrown)]
    #[case(5, UnderlyingPigment::Red)]
    #[case(6, UnderlyingPigment::RedOrange)]
    #[case(7, UnderlyingPigment::Orange)]
    #[case(8, UnderlyingPigment::YellowOrange)]
    #[case(9, UnderlyingPigment::Yellow)]
    #[case(10, UnderlyingPigment::PaleYellow)]
    fn pigment_table(#[case] level: i32, #[case] expected: UnderlyingPigment) {
        assert_eq!(underlying_pigment(level), expected);
    }

    #[rstest]
    #[case(0)]
    #[case(11)]
    #[case(-3)]
    fn pigment_out_of_range_is_unknown(#[case] level: i32) {
        assert_eq!(underlying_pigment(level), UnderlyingPigment::Unknown);
    }

    #[test]
    fn pigment_labels() {
        assert_eq!(underlying_pigment(8).to_string(), "Yellow-orange");
        assert_eq!(underlying_pigment(1).to_string(), "All pigments");
        assert_eq!(underlying_pigment(0).to_string(), "Unknown");
    }

    #[rstest]
    #[case(-2, 0)]
    #[case(0, 0)]
    #[case(1, 15)]
    #[case(2, 30)]
    #[case(3, 50)]
    #[case(4, 65)]
    #[case(5, 75)]
    #[case(10, 75)]
    fn ash_table(#[case] difference: i32, #[case] expected: i32) {
        assert_eq!(ash_percentage(difference), expected);
    }

    #[test]
    fn ash_is_monotonic() {
        let mut previous = 0;
        for difference in 0..=10 {
            let current = ash_percentage(difference);
            assert!(current >= previous, "ash dropped at lift {difference}");
            previous = current;
        }
    }

    #[rstest]
    #[case(0, 7, 10)]
    #[case(-1, 3, 10)]
    #[case(1, 2, 20)]
    #[case(1, 9, 20)]
    #[case(2, 4, 30)]
    #[case(2, 5, 20)]
    #[case(3, 2, 30)]
    #[case(3, 7, 30)]
    #[case(4, 3, 40)]
    #[case(6, 1, 40)]
    fn developer_table(#[case] difference: i32, #[case] starting_level: i32, #[case] expected: i32) {
        assert_eq!(developer_volume(difference, starting_level), expected);
    }

    #[rstest]
    #[case(UnderlyingPigment::RedBrown, ToneCategory::Green)]
    #[case(UnderlyingPigment::Red, ToneCategory::Green)]
    #[case(UnderlyingPigment::RedOrange, ToneCategory::Blue)]
    #[case(UnderlyingPigment::Orange, ToneCategory::Blue)]
    #[case(UnderlyingPigment::YellowOrange, ToneCategory::Violet)]
    #[case(UnderlyingPigment::Yellow, ToneCategory::Violet)]
    #[case(UnderlyingPigment::PaleYellow, ToneCategory::Violet)]
    #[case(UnderlyingPigment::AllPigments, ToneCategory::Ash)]
    #[case(UnderlyingPigment::Unknown, ToneCategory::Ash)]
    fn corrective_tone_table(#[case] pigment: UnderlyingPigment, #[case] expected: ToneCategory) {
        assert_eq!(corrective_tone(pigment), expected);
    }
}
