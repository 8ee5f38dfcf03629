//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! One of the four seats a board game can fill. Converting a raw integer
//! into a `Player` is fallible: out-of-range values produce a
//! [`PlayerConversionError`] instead of aborting.
//!
//! ## PlayerMap
//!
//! Per-player data storage backed by `Vec` for O(1) access.
//! Used by the search for per-player score vectors.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::error::PlayerConversionError;

/// Fewest players a game may be created with.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game may be created with.
pub const MAX_PLAYERS: usize = 4;

/// Player seat, 0-based. The first player is `Player0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Player {
    Player0,
    Player1,
    Player2,
    Player3,
}

impl Player {
    /// Every seat, in turn order.
    pub const ALL: [Player; MAX_PLAYERS] = [
        Player::Player0,
        Player::Player1,
        Player::Player2,
        Player::Player3,
    ];

    /// Get the raw player index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Iterate over the players of a game with `player_count` players.
    ///
    /// ```
    /// use npmm::core::Player;
    ///
    /// let players: Vec<_> = Player::all(3).collect();
    /// assert_eq!(players, vec![Player::Player0, Player::Player1, Player::Player2]);
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = Player> {
        Self::ALL.into_iter().take(player_count)
    }

    /// The player who moves after `self` when `player_count` players cycle.
    ///
    /// `player_count` must be in `1..=MAX_PLAYERS`.
    #[must_use]
    pub fn next(self, player_count: usize) -> Player {
        Self::ALL[(self.index() + 1) % player_count]
    }

    /// Whether this seat takes part in a game with `player_count` players.
    #[must_use]
    pub const fn participates(self, player_count: usize) -> bool {
        self.index() < player_count
    }
}

impl TryFrom<usize> for Player {
    type Error = PlayerConversionError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .get(value)
            .copied()
            .ok_or(PlayerConversionError { value })
    }
}

impl TryFrom<u8> for Player {
    type Error = PlayerConversionError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Player::try_from(value as usize)
    }
}

impl From<Player> for usize {
    fn from(player: Player) -> Self {
        player.index()
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.index())
    }
}

/// Per-player data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per player.
///
/// ## Example
///
/// ```
/// use npmm::core::{Player, PlayerMap};
///
/// let mut score: PlayerMap<f64> = PlayerMap::with_value(3, 0.0);
/// score[Player::Player1] = 1.0;
/// assert_eq!(score[Player::Player1], 1.0);
/// assert_eq!(score.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: Vec<T>,
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(player_count: usize, factory: impl Fn(Player) -> T) -> Self {
        assert!(player_count > 0, "Must have at least 1 player");
        assert!(
            player_count <= MAX_PLAYERS,
            "At most {MAX_PLAYERS} players supported"
        );

        Self {
            data: Player::all(player_count).map(factory).collect(),
        }
    }

    /// Create a new PlayerMap with all entries set to the same value.
    pub fn with_value(player_count: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self::new(player_count, |_| value.clone())
    }

    /// Get the number of players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    /// Iterate over (Player, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over the stored values in player order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate over mutable values in player order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        &self.data[player.index()]
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        &mut self.data[player.index()]
    }
}
