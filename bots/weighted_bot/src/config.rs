use serde::{Deserialize, Serialize};

/// Tunables of the [`WeightedBot`](crate::WeightedBot).
///
/// Every field is optional when deserializing; missing ones take the default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeightedConfig {
    /// Weight of one own sequence at completion level 0..=4 that the move advances.
    pub offense_multipliers: [f64; 5],
    /// Weight of one opposing sequence at completion level 0..=4 that the move blocks.
    pub defense_multipliers: [f64; 5],
    /// Applied when a two-eyed jack or the Joker does not complete a sequence.
    pub two_eyed_non_completion_multiplier: f64,
    /// Applied to every two-eyed jack move.
    pub two_eyed_multiplier: f64,
    /// Applied to every Joker move.
    pub joker_multiplier: f64,
}

impl Default for WeightedConfig {
    fn default() -> Self {
        Self {
            offense_multipliers: [1.0, 1.1, 2.0, 4.0, 10.0],
            defense_multipliers: [0.1, 0.15, 0.5, 1.5, 5.0],
            two_eyed_non_completion_multiplier: 0.5,
            two_eyed_multiplier: 0.9,
            joker_multiplier: 0.8,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: WeightedConfig =
            serde_json::from_str(r#"{ "joker_multiplier": 0.5 }"#).unwrap();
        assert_eq!(
            config,
            WeightedConfig {
                joker_multiplier: 0.5,
                ..WeightedConfig::default()
            }
        );
        assert!(serde_json::from_str::<WeightedConfig>(r#"{ "jokr_multiplier": 0.5 }"#).is_err());
    }
}
