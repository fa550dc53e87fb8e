use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::position::Position;
use crate::error::{Result, RosterError};

/// Identity of a player. Two players are the same player iff their ids match.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(transparent)]
pub struct PlayerId(pub u64);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Availability tier, declared best to worst so that `Ord` ranks healthier
/// players first.
#[derive(
    Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord,
)]
pub enum Health {
    #[default]
    #[serde(rename = "HEALTHY")]
    Healthy,
    #[serde(rename = "DTD")]
    DayToDay,
    #[serde(rename = "O")]
    Out,
    #[serde(rename = "SSPD")]
    Suspended,
}

impl Health {
    /// All levels, best first.
    pub const LEVELS: [Health; 4] =
        [Health::Healthy, Health::DayToDay, Health::Out, Health::Suspended];

    pub fn code(&self) -> &'static str {
        match self {
            Health::Healthy => "HEALTHY",
            Health::DayToDay => "DTD",
            Health::Out => "O",
            Health::Suspended => "SSPD",
        }
    }

    /// 0 for healthy, increasing as availability gets worse.
    pub fn rank(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for Health {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Health {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "HEALTHY" => Ok(Health::Healthy),
            "DTD" => Ok(Health::DayToDay),
            "O" => Ok(Health::Out),
            "SSPD" => Ok(Health::Suspended),
            _ => Err(RosterError::InvalidHealth(s.to_string())),
        }
    }
}

/// A rostered player as seen for the current scoring period.
///
/// `opponent` is present iff the player has a game scheduled in the period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub positions: Vec<Position>,
    #[serde(default)]
    pub health: Health,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opponent: Option<String>,
}

impl Player {
    pub fn new(
        id: PlayerId,
        name: impl Into<String>,
        positions: Vec<Position>,
        health: Health,
        opponent: Option<String>,
    ) -> Self {
        Self { id, name: name.into(), positions, health, opponent }
    }

    /// Build a player from raw position and health codes.
    pub fn from_codes(
        id: PlayerId,
        name: impl Into<String>,
        position_codes: &[impl AsRef<str>],
        health_code: &str,
        opponent: Option<String>,
    ) -> Result<Self> {
        let positions = position_codes
            .iter()
            .map(|code| code.as_ref().parse::<Position>())
            .collect::<Result<Vec<_>>>()?;
        let health = health_code.parse::<Health>()?;
        Ok(Self::new(id, name, positions, health, opponent))
    }

    pub fn is_playing(&self) -> bool {
        self.opponent.is_some()
    }

    /// True iff this player's health is the same as or better than `other`'s.
    pub fn compare_health(&self, other: &Player) -> bool {
        self.health <= other.health
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(health: Health, opponent: Option<&str>) -> Player {
        Player::new(PlayerId(1), "Test", vec![Position::PG], health, opponent.map(String::from))
    }

    #[test]
    fn test_is_playing_follows_opponent() {
        assert!(player(Health::Healthy, Some("LAL")).is_playing());
        assert!(!player(Health::Healthy, None).is_playing());
    }

    #[test]
    fn test_health_ordering_best_to_worst() {
        assert!(Health::Healthy < Health::DayToDay);
        assert!(Health::DayToDay < Health::Out);
        assert!(Health::Out < Health::Suspended);
        assert_eq!(Health::LEVELS.iter().map(Health::rank).collect::<Vec<_>>(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_compare_health() {
        let healthy = player(Health::Healthy, None);
        let dtd = player(Health::DayToDay, None);
        let out = player(Health::Out, None);

        assert!(healthy.compare_health(&dtd));
        assert!(healthy.compare_health(&healthy));
        assert!(dtd.compare_health(&out));
        assert!(!out.compare_health(&dtd));
        assert!(!dtd.compare_health(&healthy));
    }

    #[test]
    fn test_health_codes() {
        for level in Health::LEVELS {
            assert_eq!(level.code().parse::<Health>().unwrap(), level);
        }
        assert!(matches!("GTD".parse::<Health>(), Err(RosterError::InvalidHealth(_))));
        for code in ["healthy", "dtd", "OUT", "SUSPENDED", " O"] {
            let err = code.parse::<Health>().unwrap_err();
            assert!(matches!(err, RosterError::InvalidHealth(ref c) if c == code), "{}", code);
        }
    }

    #[test]
    fn test_from_codes() {
        let p = Player::from_codes(PlayerId(3), "Big", &["PF", "C"], "DTD", None).unwrap();
        assert_eq!(p.positions, vec![Position::PF, Position::C]);
        assert_eq!(p.health, Health::DayToDay);

        let err = Player::from_codes(PlayerId(3), "Big", &["PF", "X"], "DTD", None).unwrap_err();
        assert!(matches!(err, RosterError::InvalidPosition(ref code) if code == "X"));
    }

    #[test]
    fn test_health_serde_uses_short_codes() {
        let json = serde_json::to_string(&Health::DayToDay).unwrap();
        assert_eq!(json, "\"DTD\"");
        let parsed: Health = serde_json::from_str("\"SSPD\"").unwrap();
        assert_eq!(parsed, Health::Suspended);
    }
}
