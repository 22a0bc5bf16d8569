//! Seat identification and per-seat data storage.
//!
//! ## Seat
//!
//! A duel always has exactly two positions: the local player and the
//! opponent. `Seat` identifies one of them.
//!
//! ## SeatMap
//!
//! Per-seat data storage backed by a fixed two-element array for O(1)
//! access. Supports iteration and indexing by `Seat`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two duel positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    /// The local player.
    Player,
    /// The remote or simulated opponent.
    Opponent,
}

impl Seat {
    /// Both seats, player first.
    pub const ALL: [Seat; 2] = [Seat::Player, Seat::Opponent];

    /// Get the other seat.
    ///
    /// ```
    /// use duel_engine::core::Seat;
    ///
    /// assert_eq!(Seat::Player.opposite(), Seat::Opponent);
    /// assert_eq!(Seat::Opponent.opposite(), Seat::Player);
    /// ```
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Seat::Player => Seat::Opponent,
            Seat::Opponent => Seat::Player,
        }
    }

    /// Get the raw seat index (0 for player, 1 for opponent).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Seat::Player => 0,
            Seat::Opponent => 1,
        }
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Player => write!(f, "player"),
            Seat::Opponent => write!(f, "opponent"),
        }
    }
}

/// Per-seat data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per seat.
/// Use `SeatMap::new()` to create with a factory function,
/// or `SeatMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{Seat, SeatMap};
///
/// let mut life: SeatMap<i32> = SeatMap::with_value(20);
///
/// assert_eq!(life[Seat::Player], 20);
///
/// life[Seat::Opponent] = 15;
/// assert_eq!(life[Seat::Opponent], 15);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatMap<T> {
    data: [T; 2],
}

impl<T> SeatMap<T> {
    /// Create a new SeatMap with values from a factory function.
    ///
    /// The factory receives the `Seat` for each entry.
    pub fn new(factory: impl Fn(Seat) -> T) -> Self {
        Self {
            data: [factory(Seat::Player), factory(Seat::Opponent)],
        }
    }

    /// Create a new SeatMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new SeatMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Create a SeatMap from two already-built values.
    ///
    /// Use when the two entries are constructed by moves a factory
    /// closure cannot express.
    #[must_use]
    pub fn from_parts(player: T, opponent: T) -> Self {
        Self {
            data: [player, opponent],
        }
    }

    /// Get a reference to a seat's data.
    #[must_use]
    pub fn get(&self, seat: Seat) -> &T {
        &self.data[seat.index()]
    }

    /// Get a mutable reference to a seat's data.
    pub fn get_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.data[seat.index()]
    }

    /// Iterate over (Seat, &T) pairs, player first.
    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        Seat::ALL.iter().map(move |&s| (s, self.get(s)))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;

    fn index(&self, seat: Seat) -> &Self::Output {
        self.get(seat)
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut Self::Output {
        self.get_mut(seat)
    }
}
