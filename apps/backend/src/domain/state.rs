use std::collections::BTreeSet;
use std::fmt;
use std::ops::{Index, IndexMut};

use rand_chacha::ChaCha8Rng;
use tracing::info;

use crate::domain::deck::Deck;
use crate::domain::rules::PLAYERS;
use crate::domain::{Card, Suit};
use crate::errors::domain::{DomainError, SeatingKind};

/// Caller identity as attached by the transport.
pub type PlayerId = u32;
/// Fixed seat at the table, 0..=3 in registration order.
pub type Seat = u8;

/// Overall game progression phases.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum Phase {
    /// Waiting for four players.
    Setup,
    /// Shuffle and deal five cards each.
    Deal,
    /// First bidding round: order the dealer up or pass.
    PickupCard,
    /// Second bidding round: name a trump suit or pass.
    PickSuit,
    /// Dealer must discard after picking up.
    Discard,
    /// Trick play.
    Play,
    /// Internal: resolve the four played cards.
    ScoreTrick,
    /// Internal: settle the hand.
    ScoreGame,
    /// Match decided.
    EndGame,
}

impl Phase {
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Setup => "setup",
            Phase::Deal => "deal",
            Phase::PickupCard => "pickup_card",
            Phase::PickSuit => "pick_suit",
            Phase::Discard => "discard",
            Phase::Play => "play",
            Phase::ScoreTrick => "score_trick",
            Phase::ScoreGame => "score_game",
            Phase::EndGame => "end_game",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Partnership; seats 0 and 2 are team 1, seats 1 and 3 team 2.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Team {
    One,
    Two,
}

impl Team {
    pub fn for_seat(seat: Seat) -> Self {
        if seat % 2 == 0 {
            Team::One
        } else {
            Team::Two
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(Team::One),
            2 => Some(Team::Two),
            _ => None,
        }
    }

    pub fn id(self) -> u8 {
        match self {
            Team::One => 1,
            Team::Two => 2,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Team::One => Team::Two,
            Team::Two => Team::One,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Per-team counter (game points or trick points).
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct TeamScores {
    one: u8,
    two: u8,
}

impl TeamScores {
    pub fn new(one: u8, two: u8) -> Self {
        Self { one, two }
    }

    pub fn total(&self) -> u8 {
        self.one + self.two
    }

    /// Team strictly ahead, if any.
    pub fn leader(&self) -> Option<Team> {
        match self.one.cmp(&self.two) {
            std::cmp::Ordering::Greater => Some(Team::One),
            std::cmp::Ordering::Less => Some(Team::Two),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Index<Team> for TeamScores {
    type Output = u8;

    fn index(&self, team: Team) -> &u8 {
        match team {
            Team::One => &self.one,
            Team::Two => &self.two,
        }
    }
}

impl IndexMut<Team> for TeamScores {
    fn index_mut(&mut self, team: Team) -> &mut u8 {
        match team {
            Team::One => &mut self.one,
            Team::Two => &mut self.two,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: PlayerId,
    pub seat: Seat,
    pub team: Team,
    pub hand: Vec<Card>,
}

impl Player {
    pub fn new(id: PlayerId, seat: Seat) -> Self {
        Self {
            id,
            seat,
            team: Team::for_seat(seat),
            hand: Vec::new(),
        }
    }

    pub fn has_card(&self, card: &Card) -> bool {
        self.hand.contains(card)
    }

    pub fn has_suit(&self, suit: Suit) -> bool {
        crate::domain::hand_has_suit(&self.hand, suit)
    }

    pub fn remove_card(&mut self, card: &Card) -> bool {
        match self.hand.iter().position(|c| c == card) {
            Some(pos) => {
                self.hand.remove(pos);
                true
            }
            None => false,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Player {}", self.id)
    }
}

/// A recorded failure to follow suit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reneg {
    /// Team of the player who reneged.
    pub team: Team,
    /// 1-based trick number within the hand.
    pub trick: u8,
    pub reason: String,
}

/// Seat / turn math helpers (4 fixed seats: 0..=3), clockwise is +1.
#[inline]
pub fn seat_offset(seat: Seat, delta: i8) -> Seat {
    let seat_i = seat as i16;
    let delta_i = delta as i16;
    ((seat_i + delta_i).rem_euclid(PLAYERS as i16)) as Seat
}

#[inline]
pub fn next_seat(seat: Seat) -> Seat {
    seat_offset(seat, 1)
}

/// The single mutable aggregate for one match.
#[derive(Debug, Clone)]
pub struct Game {
    pub phase: Phase,
    players: Vec<Player>,
    pub deck: Deck,
    pub trump_suit: Option<Suit>,
    pub calling_team: Option<Team>,
    /// Game points.
    pub score: TeamScores,
    /// Trick points for the hand in progress.
    pub hand_score: TeamScores,
    current_dealer: PlayerId,
    current_player: PlayerId,
    blocking_on_discard: BTreeSet<PlayerId>,
    renegs: Vec<Reneg>,
    /// Card turned up after the deal.
    pub turned_card: Option<Card>,
    /// Who led the trick in progress.
    pub leader: Option<PlayerId>,
    pub led_suit: Option<Suit>,
    rng: ChaCha8Rng,
}

impl Game {
    /// Seat the players in the given order; the first player deals first.
    pub fn new(player_ids: &[PlayerId], rng: ChaCha8Rng) -> Result<Self, DomainError> {
        if player_ids.len() != PLAYERS {
            return Err(DomainError::seating(
                SeatingKind::Other("PLAYER_COUNT".into()),
                format!("need exactly {PLAYERS} players, got {}", player_ids.len()),
            ));
        }
        let unique: BTreeSet<PlayerId> = player_ids.iter().copied().collect();
        if unique.len() != PLAYERS {
            return Err(DomainError::seating(
                SeatingKind::DuplicatePlayer,
                "player ids must be unique",
            ));
        }
        let players: Vec<Player> = player_ids
            .iter()
            .enumerate()
            .map(|(seat, &id)| Player::new(id, seat as Seat))
            .collect();
        let dealer = players[0].id;
        Ok(Self {
            phase: Phase::Setup,
            players,
            deck: Deck::new(),
            trump_suit: None,
            calling_team: None,
            score: TeamScores::default(),
            hand_score: TeamScores::default(),
            current_dealer: dealer,
            current_player: dealer,
            blocking_on_discard: BTreeSet::new(),
            renegs: Vec::new(),
            turned_card: None,
            leader: None,
            led_suit: None,
            rng,
        })
    }

    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            info!(from = %self.phase, to = %phase, "Phase transition");
        }
        self.phase = phase;
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn player_at(&self, seat: Seat) -> &Player {
        &self.players[seat as usize % PLAYERS]
    }

    pub fn team_of(&self, id: PlayerId) -> Option<Team> {
        self.player(id).map(|p| p.team)
    }

    /// Player one seat clockwise of `id`.
    pub fn next_player_id(&self, id: PlayerId) -> Option<PlayerId> {
        let seat = self.player(id)?.seat;
        Some(self.player_at(next_seat(seat)).id)
    }

    /// Seating order starting at `id`.
    pub fn order_from(&self, id: PlayerId) -> Vec<PlayerId> {
        let start = self.player(id).map(|p| p.seat).unwrap_or(0);
        (0..PLAYERS as i8)
            .map(|n| self.player_at(seat_offset(start, n)).id)
            .collect()
    }

    pub fn current_dealer(&self) -> PlayerId {
        self.current_dealer
    }

    pub fn set_dealer(&mut self, id: PlayerId) {
        self.current_dealer = id;
    }

    pub fn current_player(&self) -> PlayerId {
        self.current_player
    }

    pub fn set_current_player(&mut self, id: PlayerId) {
        self.current_player = id;
    }

    pub fn left_of_dealer(&self) -> PlayerId {
        self.next_player_id(self.current_dealer)
            .unwrap_or(self.current_dealer)
    }

    pub fn add_score(&mut self, team: Team, points: u8) {
        self.score[team] += points;
    }

    pub fn add_reneg(&mut self, reneg: Reneg) {
        self.renegs.push(reneg);
    }

    pub fn renegs(&self) -> &[Reneg] {
        &self.renegs
    }

    pub fn clear_renegs(&mut self) {
        self.renegs.clear();
    }

    pub fn add_blocking_discard(&mut self, id: PlayerId) {
        self.blocking_on_discard.insert(id);
    }

    pub fn remove_blocking_discard(&mut self, id: PlayerId) -> bool {
        self.blocking_on_discard.remove(&id)
    }

    pub fn is_blocked(&self) -> bool {
        !self.blocking_on_discard.is_empty()
    }

    pub fn is_blocking(&self, id: PlayerId) -> bool {
        self.blocking_on_discard.contains(&id)
    }

    /// 1-based number of the trick in progress.
    pub fn trick_number(&self) -> u8 {
        self.hand_score.total() + 1
    }

    /// Gather every card and shuffle a fresh deck.
    pub fn reset_deck(&mut self) {
        self.deck.collect().shuffle(&mut self.rng);
    }

    /// Clear per-hand state so nothing leaks into the next deal.
    pub fn clear_hand_state(&mut self) {
        self.trump_suit = None;
        self.calling_team = None;
        self.turned_card = None;
        self.leader = None;
        self.led_suit = None;
        self.blocking_on_discard.clear();
        self.renegs.clear();
    }
}
