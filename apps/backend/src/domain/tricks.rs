use tracing::{debug, info};

use crate::domain::board::Board;
use crate::domain::rules::TRICKS_PER_HAND;
use crate::domain::state::{Game, Phase, PlayerId, Reneg, Team};
use crate::domain::{trick_winner, Card};

/// Why a play could not be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayRejection {
    CardNotInHand,
    NoSlot,
}

/// Result of playing a card, describing what state changes occurred.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCardResult {
    /// This play led the trick.
    pub led: bool,
    /// Reneg recorded against the player, if they failed to follow suit.
    pub reneg: Option<Reneg>,
}

/// Move `card` from the player's hand onto their slot.
///
/// Following suit is not enforced here: a player who fails to follow while
/// holding the led suit gets a reneg recorded against their team, which the
/// other side may call later.
pub fn play_card(
    game: &mut Game,
    board: &mut Board,
    who: PlayerId,
    card: Card,
) -> Result<PlayCardResult, PlayRejection> {
    let trick = game.trick_number();
    let led_suit = game.led_suit;

    let player = game.player_mut(who).ok_or(PlayRejection::CardNotInHand)?;
    if !player.has_card(&card) {
        return Err(PlayRejection::CardNotInHand);
    }
    let slot = board.slot_mut(who).ok_or(PlayRejection::NoSlot)?;

    let reneg = match led_suit {
        Some(led) if card.suit != led && player.has_suit(led) => Some(Reneg {
            team: player.team,
            trick,
            reason: format!("{player} played the {card} on a {led} lead while holding {led}"),
        }),
        _ => None,
    };

    player.remove_card(&card);
    slot.push(card);

    let led = led_suit.is_none();
    if led {
        game.leader = Some(who);
        game.led_suit = Some(card.suit);
    }
    if let Some(r) = &reneg {
        debug!(player = who, trick, "Reneg recorded");
        game.add_reneg(r.clone());
    }
    Ok(PlayCardResult { led, reneg })
}

/// Cards of the trick in progress, in play order starting at the leader.
///
/// Every slot must hold exactly `trick_number` cards; otherwise the id of
/// the first player who has not played yet is returned.
pub fn current_trick(game: &Game, board: &Board) -> Result<Vec<(PlayerId, Card)>, PlayerId> {
    let leader = game.leader.unwrap_or_else(|| game.current_player());
    let expected = game.trick_number() as usize;
    game.order_from(leader)
        .into_iter()
        .map(|pid| match board.slot(pid) {
            Some(slot) if slot.len() == expected => slot.peek(true).map(|c| (pid, c)).ok_or(pid),
            _ => Err(pid),
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrickOutcome {
    pub winner: PlayerId,
    pub team: Team,
    pub card: Card,
    /// The trick point just awarded completed the hand.
    pub hand_over: bool,
}

/// Resolve the trick in progress and award the trick point.
///
/// On the fifth trick point the game moves to `ScoreGame`; otherwise the
/// winner leads the next trick.
pub fn score_trick(game: &mut Game, board: &Board) -> Result<TrickOutcome, PlayerId> {
    let plays = current_trick(game, board)?;
    let led = game.led_suit.unwrap_or(plays[0].1.suit);
    let Some((winner, card)) = trick_winner(&plays, led, game.trump_suit) else {
        return Err(game.current_player());
    };
    let team = game.team_of(winner).unwrap_or(Team::One);

    game.hand_score[team] += 1;
    game.led_suit = None;
    let hand_over = game.hand_score.total() >= TRICKS_PER_HAND;
    if hand_over {
        game.leader = None;
        game.set_phase(Phase::ScoreGame);
    } else {
        game.leader = Some(winner);
        game.set_current_player(winner);
        game.set_phase(Phase::Play);
    }
    info!(winner, team = %team, card = %card, hand_over, "Trick scored");
    Ok(TrickOutcome {
        winner,
        team,
        card,
        hand_over,
    })
}
