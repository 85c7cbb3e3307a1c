use crate::domain::scoring::{adjudicate_reneg, apply_hand_scoring, HandKind};
use crate::domain::state::{Phase, Reneg, Team, TeamScores};
use crate::domain::test_state_helpers::make_table;
use crate::domain::Suit;

fn scoring_state(calling: Team, one: u8, two: u8) -> crate::domain::Game {
    let (mut game, _) = make_table(Default::default(), Phase::ScoreGame);
    game.calling_team = Some(calling);
    game.trump_suit = Some(Suit::Hearts);
    game.hand_score = TeamScores::new(one, two);
    game
}

#[test]
fn march_by_calling_team_scores_two() {
    let mut game = scoring_state(Team::One, 5, 0);
    let outcome = apply_hand_scoring(&mut game).unwrap();
    assert_eq!(outcome.winner, Team::One);
    assert_eq!(outcome.points, 2);
    assert_eq!(outcome.kind, HandKind::March);
    assert_eq!(game.score[Team::One], 2);
}

#[test]
fn euchre_scores_two_regardless_of_margin() {
    let mut game = scoring_state(Team::One, 2, 3);
    let outcome = apply_hand_scoring(&mut game).unwrap();
    assert_eq!(outcome.winner, Team::Two);
    assert_eq!(outcome.points, 2);
    assert_eq!(outcome.kind, HandKind::Euchre);
}

#[test]
fn made_bid_scores_one() {
    let mut game = scoring_state(Team::Two, 1, 4);
    let outcome = apply_hand_scoring(&mut game).unwrap();
    assert_eq!(outcome.points, 1);
    assert_eq!(outcome.kind, HandKind::Made);
    assert_eq!(game.score, TeamScores::new(0, 1));
}

#[test]
fn hand_scoring_resets_trick_points_and_redeals() {
    let mut game = scoring_state(Team::One, 3, 2);
    let outcome = apply_hand_scoring(&mut game).unwrap();
    assert!(!outcome.game_over);
    assert_eq!(game.hand_score.total(), 0);
    assert_eq!(game.phase, Phase::Deal);
}

#[test]
fn reaching_ten_ends_the_game() {
    let mut game = scoring_state(Team::One, 2, 3);
    game.score = TeamScores::new(4, 8);
    let outcome = apply_hand_scoring(&mut game).unwrap();
    assert!(outcome.game_over);
    assert_eq!(game.score[Team::Two], 10);
    assert_eq!(game.phase, Phase::EndGame);
    assert_eq!(game.trump_suit, None);
    assert_eq!(game.calling_team, None);
}

#[test]
fn tied_trick_points_cannot_be_scored() {
    let mut game = scoring_state(Team::One, 0, 0);
    assert!(apply_hand_scoring(&mut game).is_none());
    assert_eq!(game.score.total(), 0);
}

#[test]
fn upheld_reneg_awards_the_hand_to_the_accusers() {
    let mut game = scoring_state(Team::One, 1, 1);
    game.set_phase(Phase::Play);
    game.add_reneg(Reneg {
        team: Team::Two,
        trick: 2,
        reason: "Player 2 played the 9 of Spades on a Hearts lead while holding Hearts".into(),
    });
    let verdict = adjudicate_reneg(&mut game, Team::One, 2);
    assert!(verdict.upheld);
    assert_eq!(verdict.winner, Team::One);
    assert!(verdict.reason.unwrap().contains("Hearts lead"));
    assert_eq!(game.hand_score, TeamScores::new(5, 0));
    assert_eq!(game.phase, Phase::ScoreGame);

    let outcome = apply_hand_scoring(&mut game).unwrap();
    assert_eq!(outcome.points, 2);
}

#[test]
fn rejected_reneg_awards_the_hand_to_the_accused() {
    let mut game = scoring_state(Team::Two, 2, 0);
    game.set_phase(Phase::Play);
    // Reneg on a different trick does not count.
    game.add_reneg(Reneg {
        team: Team::Two,
        trick: 1,
        reason: "off suit".into(),
    });
    let verdict = adjudicate_reneg(&mut game, Team::One, 2);
    assert!(!verdict.upheld);
    assert_eq!(verdict.winner, Team::Two);
    assert_eq!(game.hand_score, TeamScores::new(0, 5));
    assert!(game.hand_score.total() <= 5);
}

#[test]
fn own_teams_reneg_does_not_uphold_an_accusation() {
    let mut game = scoring_state(Team::One, 0, 0);
    game.add_reneg(Reneg {
        team: Team::One,
        trick: 1,
        reason: "off suit".into(),
    });
    let verdict = adjudicate_reneg(&mut game, Team::One, 1);
    assert!(!verdict.upheld);
    assert_eq!(verdict.winner, Team::Two);
}
