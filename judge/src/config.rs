use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, Context};
use centermost_bot::CentermostBot;
use rand::Rng;
use random_bot::RandomBot;
use sequence::TeamColor;
use serde::{Deserialize, Serialize};
use weighted_bot::{WeightedBot, WeightedConfig};

use crate::player::{AnyStrategy, Player, Team};

/// A computer strategy and its settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum StrategyConfig {
    Random {
        /// Drawn from the judge's RNG if missing.
        #[serde(default)]
        seed: Option<u64>,
    },
    Centermost,
    Weighted {
        #[serde(default)]
        config: WeightedConfig,
    },
}

impl StrategyConfig {
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> AnyStrategy {
        match self {
            StrategyConfig::Random { seed } => {
                AnyStrategy::Random(RandomBot::new(seed.unwrap_or_else(|| rng.gen())))
            }
            StrategyConfig::Centermost => AnyStrategy::Centermost(CentermostBot::new()),
            StrategyConfig::Weighted { config } => AnyStrategy::Weighted(WeightedBot::new(config.clone())),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub strategy: StrategyConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamConfig {
    pub color: TeamColor,
    pub players: Vec<PlayerConfig>,
}

/// Everything needed to set up the teams of a match.
///
/// ```json
/// {
///   "keep_playing": false,
///   "teams": [
///     { "color": "blue", "players": [{ "name": "ann", "strategy": { "type": "weighted" } }] },
///     { "color": "red", "players": [{ "name": "ben", "strategy": { "type": "random", "seed": 4 } }] }
///   ]
/// }
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    pub teams: Vec<TeamConfig>,
    #[serde(default)]
    pub keep_playing: bool,
}

impl MatchConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Could not read '{}'", path.display()))?;
        let config = serde_json::from_str(&contents)
            .with_context(|| format!("Could not parse '{}'", path.display()))?;
        Ok(config)
    }

    /// Groups the specs into teams in order of first appearance and names the
    /// players after their team and seat, e.g. `blue-1`.
    pub fn from_specs(specs: &[PlayerSpec]) -> anyhow::Result<Self> {
        if specs.is_empty() {
            bail!("No players given");
        }
        let mut teams: Vec<TeamConfig> = Vec::new();
        for spec in specs {
            let idx = match teams.iter().position(|team| team.color == spec.team) {
                Some(idx) => idx,
                None => {
                    teams.push(TeamConfig {
                        color: spec.team,
                        players: Vec::new(),
                    });
                    teams.len() - 1
                }
            };
            let team = &mut teams[idx];
            let name = format!(
                "{}-{}",
                format!("{:?}", spec.team).to_lowercase(),
                team.players.len() + 1
            );
            team.players.push(PlayerConfig {
                name,
                strategy: spec.strategy.clone(),
            });
        }
        Ok(Self {
            teams,
            keep_playing: false,
        })
    }

    pub fn build_teams<R: Rng + ?Sized>(&self, rng: &mut R) -> Vec<Team> {
        self.teams
            .iter()
            .map(|team| Team {
                color: team.color,
                players: team
                    .players
                    .iter()
                    .map(|player| Player::new(player.name.clone(), player.strategy.build(rng)))
                    .collect(),
            })
            .collect()
    }
}

/// A player given on the command line as `<team>:<strategy>`, e.g. `blue:weighted`.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerSpec {
    pub team: TeamColor,
    pub strategy: StrategyConfig,
}

impl FromStr for PlayerSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let Some((team, strategy)) = s.split_once(':') else {
            return Err(format!("Expected '<team>:<strategy>', got '{}'", s));
        };
        let team = team.parse::<TeamColor>()?;
        let strategy = match strategy.to_ascii_lowercase().as_str() {
            "random" => StrategyConfig::Random { seed: None },
            "centermost" => StrategyConfig::Centermost,
            "weighted" => StrategyConfig::Weighted {
                config: WeightedConfig::default(),
            },
            _ => return Err(format!("Unknown strategy '{}'", strategy)),
        };
        Ok(Self { team, strategy })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_player_specs() {
        assert_eq!(
            "Blue:weighted".parse::<PlayerSpec>(),
            Ok(PlayerSpec {
                team: TeamColor::Blue,
                strategy: StrategyConfig::Weighted {
                    config: WeightedConfig::default()
                },
            })
        );
        assert!("blue".parse::<PlayerSpec>().is_err());
        assert!("purple:random".parse::<PlayerSpec>().is_err());
        assert!("red:clever".parse::<PlayerSpec>().is_err());
    }

    #[test]
    fn specs_are_grouped_by_team() {
        let specs: Vec<PlayerSpec> = ["blue:random", "red:centermost", "blue:weighted"]
            .iter()
            .map(|s| s.parse().unwrap())
            .collect();
        let config = MatchConfig::from_specs(&specs).unwrap();
        assert_eq!(config.teams.len(), 2);
        assert_eq!(config.teams[0].color, TeamColor::Blue);
        let names: Vec<&str> = config.teams[0]
            .players
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, ["blue-1", "blue-2"]);
        assert_eq!(config.teams[1].players[0].name, "red-1");
    }

    #[test]
    fn parse_match_config() {
        let json = r#"{
            "teams": [
                { "color": "blue", "players": [{ "name": "ann", "strategy": { "type": "weighted", "config": { "joker_multiplier": 0.5 } } }] },
                { "color": "green", "players": [{ "name": "ben", "strategy": { "type": "centermost" } }] }
            ]
        }"#;
        let config: MatchConfig = serde_json::from_str(json).unwrap();
        assert!(!config.keep_playing);
        assert_eq!(
            config.teams[0].players[0].strategy,
            StrategyConfig::Weighted {
                config: WeightedConfig {
                    joker_multiplier: 0.5,
                    ..WeightedConfig::default()
                }
            }
        );
        assert_eq!(config.teams[1].players[0].strategy, StrategyConfig::Centermost);
    }
}
