//! Chosen character traits

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Placeholder shown for an empty trait slot.
pub const NO_TRAIT: &str = "No Trait";

/// The trait that raises critical chance.
pub const DAMAGE_BOOST_TRAIT: &str = "Built to Destroy";

/// Number of trait slots.
pub const MAX_TRAITS: usize = 2;

/// Zero, one or two distinct traits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitSelection {
    traits: Vec<String>,
}

impl TraitSelection {
    pub fn none() -> Self {
        Self::default()
    }

    /// Build a selection from slot values. Empty slots and the
    /// [`NO_TRAIT`] placeholder are skipped.
    pub fn new<I, S>(slots: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut traits: Vec<String> = Vec::new();
        for slot in slots {
            let name = slot.into().trim().to_string();
            if name.is_empty() || name == NO_TRAIT {
                continue;
            }
            if traits.contains(&name) {
                return Err(DomainError::constraint(format!(
                    "trait '{}' cannot be selected twice",
                    name
                )));
            }
            traits.push(name);
        }

        if traits.len() > MAX_TRAITS {
            return Err(DomainError::constraint(format!(
                "at most {} traits may be chosen, got {}",
                MAX_TRAITS,
                traits.len()
            )));
        }

        Ok(Self { traits })
    }

    pub fn traits(&self) -> &[String] {
        &self.traits
    }

    pub fn len(&self) -> usize {
        self.traits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.traits.is_empty()
    }

    /// Whether a trait is chosen. Expansion traits listed as
    /// `"[Expansion] Name"` match on the bare name.
    pub fn contains(&self, name: &str) -> bool {
        self.traits.iter().any(|t| bare_trait_name(t) == name)
    }

    pub fn has_damage_boost(&self) -> bool {
        self.contains(DAMAGE_BOOST_TRAIT)
    }
}

fn bare_trait_name(name: &str) -> &str {
    match (name.starts_with('['), name.find("] ")) {
        (true, Some(end)) => &name[end + 2..],
        _ => name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_placeholders() {
        let selection = TraitSelection::new([NO_TRAIT, "Small Frame"]).unwrap();
        assert_eq!(selection.traits().to_vec(), vec!["Small Frame".to_string()]);
    }

    #[test]
    fn rejects_duplicates() {
        let err = TraitSelection::new(["Kamikaze", "Kamikaze"]).unwrap_err();
        assert!(matches!(err, DomainError::Constraint(_)));
    }

    #[test]
    fn rejects_more_than_two() {
        assert!(TraitSelection::new(["Kamikaze", "Wild Wasteland", "Skilled"]).is_err());
    }

    #[test]
    fn detects_damage_boost_with_expansion_prefix() {
        assert!(TraitSelection::new(["Built to Destroy"])
            .unwrap()
            .has_damage_boost());
        assert!(TraitSelection::new(["[Old World Blues] Built to Destroy"])
            .unwrap()
            .has_damage_boost());
        assert!(!TraitSelection::none().has_damage_boost());
    }
}
