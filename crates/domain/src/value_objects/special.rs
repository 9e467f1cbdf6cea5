//! SPECIAL - the seven primary character attributes
//!
//! Every attribute lives in `1..=10` and starts at 5. The sum across all seven
//! is bounded by [`SPECIAL_POINT_BUDGET`]; a build is fully allocated once the
//! whole budget is spent.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Total points available across all seven attributes.
pub const SPECIAL_POINT_BUDGET: i32 = 40;

/// Lowest value an attribute may take.
pub const SPECIAL_MIN: i32 = 1;

/// Highest value an attribute may take.
pub const SPECIAL_MAX: i32 = 10;

/// Starting value for every attribute.
pub const SPECIAL_DEFAULT: i32 = 5;

/// One of the seven primary attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpecialStat {
    Strength,
    Perception,
    Endurance,
    Charisma,
    Intelligence,
    Agility,
    Luck,
}

impl SpecialStat {
    /// All attributes in canonical S.P.E.C.I.A.L. order.
    pub const ALL: [SpecialStat; 7] = [
        Self::Strength,
        Self::Perception,
        Self::Endurance,
        Self::Charisma,
        Self::Intelligence,
        Self::Agility,
        Self::Luck,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Perception => "Perception",
            Self::Endurance => "Endurance",
            Self::Charisma => "Charisma",
            Self::Intelligence => "Intelligence",
            Self::Agility => "Agility",
            Self::Luck => "Luck",
        }
    }
}

impl std::fmt::Display for SpecialStat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl std::str::FromStr for SpecialStat {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strength" | "str" => Ok(Self::Strength),
            "perception" | "per" => Ok(Self::Perception),
            "endurance" | "end" => Ok(Self::Endurance),
            "charisma" | "cha" => Ok(Self::Charisma),
            "intelligence" | "int" => Ok(Self::Intelligence),
            "agility" | "agl" | "agi" => Ok(Self::Agility),
            "luck" | "lck" => Ok(Self::Luck),
            _ => Err(DomainError::parse(format!("Unknown SPECIAL attribute: {}", s))),
        }
    }
}

/// The resolved primary attributes of a build.
///
/// Valid by construction: every value is in range and the total never exceeds
/// the point budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Special {
    strength: i32,
    perception: i32,
    endurance: i32,
    charisma: i32,
    intelligence: i32,
    agility: i32,
    luck: i32,
}

impl Default for Special {
    fn default() -> Self {
        Self {
            strength: SPECIAL_DEFAULT,
            perception: SPECIAL_DEFAULT,
            endurance: SPECIAL_DEFAULT,
            charisma: SPECIAL_DEFAULT,
            intelligence: SPECIAL_DEFAULT,
            agility: SPECIAL_DEFAULT,
            luck: SPECIAL_DEFAULT,
        }
    }
}

impl Special {
    /// Create a SPECIAL block from values in S.P.E.C.I.A.L. order.
    pub fn new(values: [i32; 7]) -> Result<Self, DomainError> {
        for (stat, value) in SpecialStat::ALL.iter().zip(values) {
            if !(SPECIAL_MIN..=SPECIAL_MAX).contains(&value) {
                return Err(DomainError::validation(format!(
                    "{} must be between {} and {}, got {}",
                    stat, SPECIAL_MIN, SPECIAL_MAX, value
                )));
            }
        }

        let total: i32 = values.iter().sum();
        if total > SPECIAL_POINT_BUDGET {
            return Err(DomainError::constraint(format!(
                "SPECIAL total {} exceeds the point budget of {}",
                total, SPECIAL_POINT_BUDGET
            )));
        }

        let [strength, perception, endurance, charisma, intelligence, agility, luck] = values;
        Ok(Self {
            strength,
            perception,
            endurance,
            charisma,
            intelligence,
            agility,
            luck,
        })
    }

    /// Return a copy with one attribute replaced, re-checking every invariant.
    pub fn with(self, stat: SpecialStat, value: i32) -> Result<Self, DomainError> {
        let mut values = self.values();
        if let Some(index) = SpecialStat::ALL.iter().position(|s| *s == stat) {
            values[index] = value;
        }
        Self::new(values)
    }

    pub fn get(&self, stat: SpecialStat) -> i32 {
        match stat {
            SpecialStat::Strength => self.strength,
            SpecialStat::Perception => self.perception,
            SpecialStat::Endurance => self.endurance,
            SpecialStat::Charisma => self.charisma,
            SpecialStat::Intelligence => self.intelligence,
            SpecialStat::Agility => self.agility,
            SpecialStat::Luck => self.luck,
        }
    }

    pub fn strength(&self) -> i32 {
        self.strength
    }

    pub fn perception(&self) -> i32 {
        self.perception
    }

    pub fn agility(&self) -> i32 {
        self.agility
    }

    pub fn luck(&self) -> i32 {
        self.luck
    }

    /// Values in S.P.E.C.I.A.L. order.
    pub fn values(&self) -> [i32; 7] {
        SpecialStat::ALL.map(|stat| self.get(stat))
    }

    pub fn total(&self) -> i32 {
        self.values().iter().sum()
    }

    /// Points still available to allocate.
    pub fn remaining_points(&self) -> i32 {
        SPECIAL_POINT_BUDGET - self.total()
    }

    /// Whether the whole point budget has been spent.
    pub fn is_fully_allocated(&self) -> bool {
        self.remaining_points() == 0
    }
}
