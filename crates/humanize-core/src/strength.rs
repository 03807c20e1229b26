use std::fmt;

use serde::{Deserialize, Serialize};

/// How aggressively the rewrite prompt asks the model to alter the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumanizationStrength {
    Light,
    Medium,
    Strong,
}

impl HumanizationStrength {
    pub const ALL: &[HumanizationStrength] = &[
        HumanizationStrength::Light,
        HumanizationStrength::Medium,
        HumanizationStrength::Strong,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HumanizationStrength::Light => "light",
            HumanizationStrength::Medium => "medium",
            HumanizationStrength::Strong => "strong",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            HumanizationStrength::Light => "Light",
            HumanizationStrength::Medium => "Medium",
            HumanizationStrength::Strong => "Strong",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "light" => Some(HumanizationStrength::Light),
            "medium" => Some(HumanizationStrength::Medium),
            "strong" => Some(HumanizationStrength::Strong),
            _ => None,
        }
    }
}

impl Default for HumanizationStrength {
    fn default() -> Self {
        HumanizationStrength::Medium
    }
}

impl fmt::Display for HumanizationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strength_parse_str() {
        assert_eq!(
            HumanizationStrength::parse_str("light"),
            Some(HumanizationStrength::Light)
        );
        assert_eq!(
            HumanizationStrength::parse_str("medium"),
            Some(HumanizationStrength::Medium)
        );
        assert_eq!(
            HumanizationStrength::parse_str("strong"),
            Some(HumanizationStrength::Strong)
        );
        assert_eq!(HumanizationStrength::parse_str("extreme"), None);
        assert_eq!(HumanizationStrength::parse_str("Light"), None);
        assert_eq!(HumanizationStrength::parse_str(""), None);
    }

    #[test]
    fn strength_as_str_roundtrip() {
        for s in HumanizationStrength::ALL {
            assert_eq!(HumanizationStrength::parse_str(s.as_str()), Some(*s));
        }
    }

    #[test]
    fn strength_default_is_medium() {
        assert_eq!(
            HumanizationStrength::default(),
            HumanizationStrength::Medium
        );
    }

    #[test]
    fn strength_display() {
        for s in HumanizationStrength::ALL {
            assert_eq!(format!("{s}"), s.display_name());
        }
    }
}
