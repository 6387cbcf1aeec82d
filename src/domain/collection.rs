use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::models::{PlayerId, PlayerStat};

/// Player statistics indexed by ID
///
/// Iteration follows ID order, which is also first-ingestion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerStatCollection {
    players: BTreeMap<PlayerId, PlayerStat>,
}

impl PlayerStatCollection {
    pub fn new() -> Self {
        Self {
            players: BTreeMap::new(),
        }
    }

    pub fn add(&mut self, player: PlayerStat) {
        self.players.insert(player.id, player);
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: PlayerId) -> Option<&PlayerStat> {
        self.players.get(&id)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut PlayerStat> {
        self.players.get_mut(&id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&PlayerStat> {
        self.players.values().find(|p| p.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &PlayerStat> {
        self.players.values()
    }

    pub fn max_id(&self) -> Option<PlayerId> {
        self.players.keys().next_back().copied()
    }

    pub fn into_vec(self) -> Vec<PlayerStat> {
        self.players.into_values().collect()
    }
}

impl FromIterator<PlayerStat> for PlayerStatCollection {
    fn from_iter<I: IntoIterator<Item = PlayerStat>>(iter: I) -> Self {
        let mut collection = Self::new();
        for player in iter {
            collection.add(player);
        }
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_id_order() {
        let collection: PlayerStatCollection = vec![
            PlayerStat::new(3, "C"),
            PlayerStat::new(1, "A"),
            PlayerStat::new(2, "B"),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = collection.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(collection.max_id(), Some(3));
    }

    #[test]
    fn test_round_trips_as_id_keyed_object() {
        let collection: PlayerStatCollection = vec![PlayerStat::new(7, "Zed")].into_iter().collect();

        let json = serde_json::to_value(&collection).unwrap();
        assert_eq!(json["7"]["name"], "Zed");

        let back: PlayerStatCollection = serde_json::from_value(json).unwrap();
        assert_eq!(back, collection);
    }
}
