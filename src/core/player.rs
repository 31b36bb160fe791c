//! Seat identification and per-seat data storage.
//!
//! ## PlayerId
//!
//! Stable seat handle. Seats are fixed for the duration of a game, so every
//! piece of cross-seat bookkeeping (knowledge, eliminations, ledger entries)
//! is keyed by `PlayerId` rather than by a reference to the seat itself.
//!
//! ## Relative frame
//!
//! Actions and observations express other seats as a clockwise offset from
//! the acting or viewing seat (0 = self). `offset_from` and `from_offset`
//! convert between the two frames.
//!
//! ## PlayerMap
//!
//! Efficient per-seat storage backed by `Vec` for O(1) access.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// Seat identifier.
///
/// Seat indices are 0-based: the first seat is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all seats of a table with `player_count` players.
    ///
    /// ```
    /// use love_letter::core::PlayerId;
    ///
    /// let players: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(players.len(), 4);
    /// assert_eq!(players[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }

    /// The next seat clockwise.
    #[must_use]
    pub fn next(self, player_count: usize) -> Self {
        Self(((self.index() + 1) % player_count) as u8)
    }

    /// Clockwise distance from `origin` to this seat.
    ///
    /// ```
    /// use love_letter::core::PlayerId;
    ///
    /// assert_eq!(PlayerId::new(0).offset_from(PlayerId::new(2), 3), 1);
    /// assert_eq!(PlayerId::new(2).offset_from(PlayerId::new(2), 3), 0);
    /// ```
    #[must_use]
    pub fn offset_from(self, origin: PlayerId, player_count: usize) -> u8 {
        ((self.index() + player_count - origin.index() % player_count) % player_count) as u8
    }

    /// The seat `offset` places clockwise of `origin`.
    #[must_use]
    pub fn from_offset(origin: PlayerId, offset: u8, player_count: usize) -> Self {
        Self(((origin.index() + offset as usize) % player_count) as u8)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `Vec<T>` with one entry per seat.
///
/// ## Example
///
/// ```
/// use love_letter::core::{PlayerId, PlayerMap};
///
/// let mut plays: PlayerMap<u32> = PlayerMap::with_value(3, 0);
/// plays[PlayerId::new(1)] += 1;
/// assert_eq!(plays[PlayerId::new(1)], 1);
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

    /// Get the number of seats.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (PlayerId, &T) pairs in seat order.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.data
            .iter()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate over (PlayerId, &mut T) pairs in seat order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        self.data
            .iter_mut()
            .enumerate()
            .map(|(i, v)| (PlayerId(i as u8), v))
    }

    /// Iterate starting at `origin` and proceeding clockwise.
    pub fn iter_from(&self, origin: PlayerId) -> impl Iterator<Item = (PlayerId, &T)> {
        let n = self.data.len();
        (0..n).map(move |offset| {
            let player = PlayerId::from_offset(origin, offset as u8, n);
            (player, &self.data[player.index()])
        })
    }

    /// Mutable access to two distinct seats at once.
    ///
    /// Panics if `a == b`.
    pub fn pair_mut(&mut self, a: PlayerId, b: PlayerId) -> (&mut T, &mut T) {
        assert_ne!(a, b, "pair_mut requires two distinct seats");
        if a.index() < b.index() {
            let (left, right) = self.data.split_at_mut(b.index());
            (&mut left[a.index()], &mut right[0])
        } else {
            let (left, right) = self.data.split_at_mut(a.index());
            (&mut right[0], &mut left[b.index()])
        }
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}
