//! The six primary TANGENT attributes and their paired sub-stats.
//!
//! The set is fixed and enumerable; there is no dynamic attribute creation.
//! Skills refer to attributes by field id only, never by stored pointer, so
//! a lookup always sees the attribute's current value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// One of the six fixed primary character stats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    Strength,
    Intellect,
    Agility,
    Wisdom,
    Constitution,
    Charisma,
}

impl Attribute {
    /// All primary attributes, in declared display order.
    pub const ALL: [Attribute; 6] = [
        Attribute::Strength,
        Attribute::Intellect,
        Attribute::Agility,
        Attribute::Wisdom,
        Attribute::Constitution,
        Attribute::Charisma,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Intellect => "Intellect",
            Self::Agility => "Agility",
            Self::Wisdom => "Wisdom",
            Self::Constitution => "Constitution",
            Self::Charisma => "Charisma",
        }
    }

    /// The paired sub-stat display name.
    pub fn sub_stat_name(&self) -> &'static str {
        match self {
            Self::Strength => "Might",
            Self::Intellect => "Logic",
            Self::Agility => "Reflex",
            Self::Wisdom => "Will",
            Self::Constitution => "Fortitude",
            Self::Charisma => "Etiquette",
        }
    }

    /// Stable field id of the attribute value input (e.g. `attr-strength`).
    pub fn field_id(&self) -> &'static str {
        match self {
            Self::Strength => "attr-strength",
            Self::Intellect => "attr-intellect",
            Self::Agility => "attr-agility",
            Self::Wisdom => "attr-wisdom",
            Self::Constitution => "attr-constitution",
            Self::Charisma => "attr-charisma",
        }
    }

    /// Stable field id of the paired sub-stat input (e.g. `attr-might`).
    pub fn sub_stat_field_id(&self) -> &'static str {
        match self {
            Self::Strength => "attr-might",
            Self::Intellect => "attr-logic",
            Self::Agility => "attr-reflex",
            Self::Wisdom => "attr-will",
            Self::Constitution => "attr-fortitude",
            Self::Charisma => "attr-etiquette",
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Attribute {
    type Err = DomainError;

    /// Accepts the attribute field id (`attr-strength`) or the lowercase
    /// attribute name (`strength`), which is what selector inputs carry.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "attr-strength" | "strength" => Ok(Self::Strength),
            "attr-intellect" | "intellect" => Ok(Self::Intellect),
            "attr-agility" | "agility" => Ok(Self::Agility),
            "attr-wisdom" | "wisdom" => Ok(Self::Wisdom),
            "attr-constitution" | "constitution" => Ok(Self::Constitution),
            "attr-charisma" | "charisma" => Ok(Self::Charisma),
            _ => Err(DomainError::parse(format!("unknown attribute: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_declared_order() {
        let names: Vec<_> = Attribute::ALL.iter().map(|a| a.display_name()).collect();
        assert_eq!(
            names,
            ["Strength", "Intellect", "Agility", "Wisdom", "Constitution", "Charisma"]
        );
    }

    #[test]
    fn test_sub_stat_pairing() {
        assert_eq!(Attribute::Strength.sub_stat_name(), "Might");
        assert_eq!(Attribute::Charisma.sub_stat_name(), "Etiquette");
        assert_eq!(Attribute::Wisdom.sub_stat_field_id(), "attr-will");
    }

    #[test]
    fn test_from_str_accepts_field_id_and_name() {
        assert_eq!("attr-agility".parse::<Attribute>(), Ok(Attribute::Agility));
        assert_eq!("agility".parse::<Attribute>(), Ok(Attribute::Agility));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        assert!("attr-luck".parse::<Attribute>().is_err());
        assert!("".parse::<Attribute>().is_err());
    }
}
