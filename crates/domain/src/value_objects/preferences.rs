//! Playstyle preferences - engagement ranges and stealth affinity

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::error::DomainError;

/// Engagement distance a weapon is effective at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectiveRange {
    Close,
    Mid,
    Long,
    Placed,
}

impl EffectiveRange {
    pub const ALL: [EffectiveRange; 4] = [Self::Close, Self::Mid, Self::Long, Self::Placed];

    /// Catalog tag for this range.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Close => "Close range",
            Self::Mid => "Mid range",
            Self::Long => "Long range",
            Self::Placed => "Placed",
        }
    }

    /// Extract the recognised range tags from a comma-separated field,
    /// preserving their order and dropping duplicates and unknown tags.
    pub fn parse_list(field: &str) -> Vec<EffectiveRange> {
        let mut ranges = Vec::new();
        for range in field.split(',').filter_map(|tag| tag.parse::<EffectiveRange>().ok()) {
            if !ranges.contains(&range) {
                ranges.push(range);
            }
        }
        ranges
    }
}

impl std::fmt::Display for EffectiveRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl std::str::FromStr for EffectiveRange {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "close range" | "close" => Ok(Self::Close),
            "mid range" | "mid" => Ok(Self::Mid),
            "long range" | "long" => Ok(Self::Long),
            "placed" | "traps" => Ok(Self::Placed),
            _ => Err(DomainError::parse(format!("Unknown effective range: {}", s))),
        }
    }
}

/// Preferred ranges plus stealth/loud affinity.
///
/// At least one range and at least one affinity must be chosen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaystylePreferences {
    ranges: BTreeSet<EffectiveRange>,
    stealth: bool,
    loud: bool,
}

impl PlaystylePreferences {
    pub fn new(
        ranges: impl IntoIterator<Item = EffectiveRange>,
        stealth: bool,
        loud: bool,
    ) -> Result<Self, DomainError> {
        let ranges: BTreeSet<EffectiveRange> = ranges.into_iter().collect();
        if ranges.is_empty() {
            return Err(DomainError::validation(
                "at least one preferred range must be chosen",
            ));
        }
        if !stealth && !loud {
            return Err(DomainError::validation(
                "choose a stealthy or loud playstyle (or both)",
            ));
        }
        Ok(Self {
            ranges,
            stealth,
            loud,
        })
    }

    pub fn ranges(&self) -> impl Iterator<Item = EffectiveRange> + '_ {
        self.ranges.iter().copied()
    }

    pub fn prefers_range(&self, range: EffectiveRange) -> bool {
        self.ranges.contains(&range)
    }

    /// Whether any of the given ranges is preferred.
    pub fn prefers_any(&self, ranges: &[EffectiveRange]) -> bool {
        ranges.iter().any(|range| self.prefers_range(*range))
    }

    pub fn prefers_stealth(&self) -> bool {
        self.stealth
    }

    pub fn prefers_loud(&self) -> bool {
        self.loud
    }

    /// Silent weapons suit a stealthy build, noisy ones a loud build.
    pub fn matches_silence(&self, silent: bool) -> bool {
        (silent && self.stealth) || (!silent && self.loud)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_range_list_in_order() {
        let ranges = EffectiveRange::parse_list("Mid range, Close range,Sniper,Mid range");
        assert_eq!(ranges, vec![EffectiveRange::Mid, EffectiveRange::Close]);
        assert!(EffectiveRange::parse_list("").is_empty());
    }

    #[test]
    fn traps_alias_maps_to_placed() {
        assert_eq!("Traps".parse::<EffectiveRange>().unwrap(), EffectiveRange::Placed);
    }

    #[test]
    fn requires_range_and_affinity() {
        assert!(PlaystylePreferences::new(Vec::<EffectiveRange>::new(), true, false).is_err());
        assert!(PlaystylePreferences::new([EffectiveRange::Long], false, false).is_err());
    }

    #[test]
    fn silence_matching() {
        let stealthy = PlaystylePreferences::new([EffectiveRange::Close], true, false).unwrap();
        assert!(stealthy.matches_silence(true));
        assert!(!stealthy.matches_silence(false));

        let both = PlaystylePreferences::new([EffectiveRange::Close], true, true).unwrap();
        assert!(both.matches_silence(true));
        assert!(both.matches_silence(false));
    }

    #[test]
    fn prefers_any_checks_every_range() {
        let prefs =
            PlaystylePreferences::new([EffectiveRange::Long, EffectiveRange::Placed], false, true)
                .unwrap();
        assert!(prefs.prefers_any(&[EffectiveRange::Close, EffectiveRange::Long]));
        assert!(!prefs.prefers_any(&[EffectiveRange::Close]));
        assert!(!prefs.prefers_any(&[]));
    }
}
