use crate::models::{Health, Player};

/// Players at the single best health level present in `players`.
///
/// The result never mixes health levels; it is empty only for empty input.
pub fn get_healthiest_players<'a>(players: &[&'a Player]) -> Vec<&'a Player> {
    for level in Health::LEVELS {
        let at_level: Vec<&Player> =
            players.iter().copied().filter(|p| p.health == level).collect();
        if !at_level.is_empty() {
            return at_level;
        }
    }
    Vec::new()
}

/// `players` ordered best health first. Equal health keeps input order
/// (`sort_by_key` is a stable sort).
pub fn rank_by_health<'a>(players: &[&'a Player]) -> Vec<&'a Player> {
    let mut ranked = players.to_vec();
    ranked.sort_by_key(|p| p.health);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerId, Position};

    fn player(id: u64, health: Health) -> Player {
        Player::new(PlayerId(id), format!("P{}", id), vec![Position::SF], health, Some("X".into()))
    }

    fn ids(players: &[&Player]) -> Vec<u64> {
        players.iter().map(|p| p.id.0).collect()
    }

    #[test]
    fn test_healthiest_picks_best_present_level() {
        let a = player(1, Health::Out);
        let b = player(2, Health::DayToDay);
        let c = player(3, Health::Suspended);
        let d = player(4, Health::DayToDay);

        let healthiest = get_healthiest_players(&[&a, &b, &c, &d]);
        assert_eq!(ids(&healthiest), vec![2, 4]);
        assert!(healthiest.iter().all(|p| p.health == Health::DayToDay));
    }

    #[test]
    fn test_healthiest_of_empty_is_empty() {
        assert!(get_healthiest_players(&[]).is_empty());
    }

    #[test]
    fn test_rank_is_stable() {
        let players = [
            player(1, Health::Out),
            player(2, Health::Healthy),
            player(3, Health::DayToDay),
            player(4, Health::Healthy),
            player(5, Health::Out),
            player(6, Health::Healthy),
        ];
        let refs: Vec<&Player> = players.iter().collect();

        assert_eq!(ids(&rank_by_health(&refs)), vec![2, 4, 6, 3, 1, 5]);
    }
}
