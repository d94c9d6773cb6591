use serde::{Deserialize, Serialize};

/// Tunable matching behavior.
///
/// Loaded from `config.toml` by the infrastructure layer; defaults apply
/// when no file is present.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MatchSettings {
    /// Keep candidates that share no skill with the subject.
    ///
    /// Off by default; the ranking then only contains candidates sharing
    /// at least one skill.
    #[serde(default)]
    pub include_zero_score: bool,

    /// Decimal places callers should render scores with.
    #[serde(default = "default_score_precision")]
    pub score_precision: u8,
}

fn default_score_precision() -> u8 {
    2
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            include_zero_score: false,
            score_precision: default_score_precision(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = MatchSettings::default();
        assert!(!settings.include_zero_score);
        assert_eq!(settings.score_precision, 2);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let settings: MatchSettings = toml::from_str("include_zero_score = true").unwrap();
        assert!(settings.include_zero_score);
        assert_eq!(settings.score_precision, 2);
    }
}
