//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! Type-safe seat identifier. The engine seats exactly two players,
//! `PlayerId(0)` and `PlayerId(1)`.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access, indexable
//! by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Number of seats at the table.
pub const SEAT_COUNT: usize = 2;

/// Seat identifier. Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// The first player to act in a new game.
    pub const FIRST: PlayerId = PlayerId(0);

    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this ID names one of the two seats.
    #[must_use]
    pub const fn is_seat(self) -> bool {
        self.index() < SEAT_COUNT
    }

    /// The other seat.
    ///
    /// Only meaningful for seats; `is_seat` guards callers holding
    /// untrusted IDs.
    #[must_use]
    pub const fn opponent(self) -> Self {
        Self(self.0 ^ 1)
    }

    /// Iterate over both seats in order.
    ///
    /// ```
    /// use mtg_engine::core::PlayerId;
    ///
    /// let seats: Vec<_> = PlayerId::both().collect();
    /// assert_eq!(seats, vec![PlayerId::new(0), PlayerId::new(1)]);
    /// ```
    pub fn both() -> impl Iterator<Item = PlayerId> {
        (0..SEAT_COUNT as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// Per-player data storage with O(1) access.
///
/// ```
/// use mtg_engine::core::{PlayerId, PlayerMap};
///
/// let mut life: PlayerMap<i64> = PlayerMap::with_value(2, 20);
/// life[PlayerId::new(1)] -= 3;
/// assert_eq!(life[PlayerId::new(0)], 20);
/// assert_eq!(life[PlayerId::new(1)], 17);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(PlayerId) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(player_count <= 255, "At most 255 players supported");

        let data = (0..player_count as u8)
            .map(|i| factory(PlayerId(i)))
            .collect();

        Self { data }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of entries.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Get a reference to a player's data, if the player has an entry.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> Option<&T> {
        self.data.get(player.index())
    }

    /// Get a mutable reference to a player's data, if the player has an entry.
    pub fn get_mut(&mut self, player: PlayerId) -> Option<&mut T> {
        self.data.get_mut(player.index())
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over the values in seat order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}

/// State for a single player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerState {
    /// Current life total. Goes non-positive when the player has lost.
    pub life: i64,
}

impl PlayerState {
    #[must_use]
    pub const fn new(life: i64) -> Self {
        Self { life }
    }

    /// Whether this player is still in the game.
    #[must_use]
    pub const fn is_alive(&self) -> bool {
        self.life > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p1 = PlayerId::new(1);

        assert_eq!(p0.index(), 0);
        assert_eq!(p1.index(), 1);
        assert_eq!(format!("{}", p1), "P1");
        assert!(p0.is_seat());
        assert!(!PlayerId::new(2).is_seat());
    }

    #[test]
    fn test_opponent() {
        for p in PlayerId::both() {
            assert_eq!(p.opponent().index(), 1 - p.index());
            assert_eq!(p.opponent().opponent(), p);
        }
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32 * 10);

        assert_eq!(map[PlayerId::new(0)], 0);
        assert_eq!(map[PlayerId::new(1)], 10);
        assert_eq!(map.player_count(), 2);
    }

    #[test]
    fn test_player_map_get_out_of_range() {
        let map: PlayerMap<i32> = PlayerMap::with_value(2, 7);
        assert_eq!(map.get(PlayerId::new(1)), Some(&7));
        assert_eq!(map.get(PlayerId::new(2)), None);
    }

    #[test]
    fn test_player_map_iter() {
        let map: PlayerMap<i32> = PlayerMap::new(2, |p| p.index() as i32);

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::new(0), &0), (PlayerId::new(1), &1)]);
    }

    #[test]
    fn test_player_state_alive() {
        assert!(PlayerState::new(1).is_alive());
        assert!(!PlayerState::new(0).is_alive());
        assert!(!PlayerState::new(-4).is_alive());
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::with_value(2, PlayerState::new(20));
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<PlayerState> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
    }

    #[test]
    #[should_panic(expected = "Must have at least 1 player")]
    fn test_player_map_zero_players() {
        let _: PlayerMap<i32> = PlayerMap::with_value(0, 0);
    }
}
