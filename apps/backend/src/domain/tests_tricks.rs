use crate::domain::cards_parsing::try_parse_cards;
use crate::domain::state::Phase;
use crate::domain::test_state_helpers::{make_table, IDS};
use crate::domain::tricks::{current_trick, play_card, score_trick, PlayRejection};
use crate::domain::{Card, Suit, Team};

fn cards(tokens: &[&str]) -> Vec<Card> {
    try_parse_cards(tokens).unwrap()
}

fn card(token: &str) -> Card {
    token.parse().unwrap()
}

#[test]
fn first_play_sets_leader_and_led_suit() {
    let (mut game, mut board) = make_table(
        [cards(&["AH"]), cards(&["9S"]), cards(&["KC"]), cards(&["TH"])],
        Phase::Play,
    );
    let result = play_card(&mut game, &mut board, IDS[1], card("9S")).unwrap();
    assert!(result.led);
    assert_eq!(game.leader, Some(IDS[1]));
    assert_eq!(game.led_suit, Some(Suit::Spades));
    assert!(game.player(IDS[1]).unwrap().hand.is_empty());
    assert_eq!(board.slot(IDS[1]).unwrap().peek(false), Some(card("9S")));
}

#[test]
fn playing_a_card_not_held_is_rejected_without_side_effects() {
    let (mut game, mut board) = make_table(
        [cards(&["AH"]), cards(&["9S"]), cards(&["KC"]), cards(&["TH"])],
        Phase::Play,
    );
    let err = play_card(&mut game, &mut board, IDS[0], card("9S")).unwrap_err();
    assert_eq!(err, PlayRejection::CardNotInHand);
    assert_eq!(board.card_count(), 0);
    assert_eq!(game.led_suit, None);
}

#[test]
fn failing_to_follow_while_holding_led_suit_records_reneg() {
    let (mut game, mut board) = make_table(
        [
            cards(&["AH"]),
            cards(&["9S", "TH"]),
            cards(&["KC"]),
            cards(&["QD"]),
        ],
        Phase::Play,
    );
    play_card(&mut game, &mut board, IDS[0], card("AH")).unwrap();
    let result = play_card(&mut game, &mut board, IDS[1], card("9S")).unwrap();
    let reneg = result.reneg.expect("reneg recorded");
    assert_eq!(reneg.team, Team::Two);
    assert_eq!(reneg.trick, 1);
    assert_eq!(game.renegs().len(), 1);

    // Void in the led suit is not a reneg.
    let result = play_card(&mut game, &mut board, IDS[2], card("KC")).unwrap();
    assert!(result.reneg.is_none());
    assert_eq!(game.renegs().len(), 1);
}

#[test]
fn current_trick_reports_first_missing_player() {
    let (mut game, mut board) = make_table(
        [cards(&["AH"]), cards(&["9H"]), cards(&["KH"]), cards(&["TH"])],
        Phase::Play,
    );
    play_card(&mut game, &mut board, IDS[0], card("AH")).unwrap();
    play_card(&mut game, &mut board, IDS[1], card("9H")).unwrap();
    assert_eq!(current_trick(&game, &board), Err(IDS[2]));
}

#[test]
fn trick_winner_leads_next_trick() {
    let (mut game, mut board) = make_table(
        [
            cards(&["AH", "9C"]),
            cards(&["TH", "TC"]),
            cards(&["9S", "JC"]),
            cards(&["KC", "QC"]),
        ],
        Phase::Play,
    );
    game.trump_suit = Some(Suit::Spades);
    for (id, c) in IDS.iter().zip(["AH", "TH", "9S", "KC"]) {
        play_card(&mut game, &mut board, *id, card(c)).unwrap();
    }
    game.set_current_player(IDS[0]);
    let outcome = score_trick(&mut game, &board).unwrap();
    assert_eq!(outcome.winner, IDS[2]);
    assert_eq!(outcome.card, card("9S"));
    assert_eq!(outcome.team, Team::One);
    assert!(!outcome.hand_over);
    assert_eq!(game.hand_score[Team::One], 1);
    assert_eq!(game.current_player(), IDS[2]);
    assert_eq!(game.leader, Some(IDS[2]));
    assert_eq!(game.led_suit, None);
    assert_eq!(game.phase, Phase::Play);
}

#[test]
fn fifth_trick_point_moves_to_hand_scoring() {
    let (mut game, mut board) = make_table(
        [cards(&["AH"]), cards(&["TH"]), cards(&["9H"]), cards(&["KH"])],
        Phase::Play,
    );
    game.hand_score[Team::One] = 3;
    game.hand_score[Team::Two] = 1;
    // Four earlier tricks already sit on every slot.
    for id in IDS {
        for _ in 0..4 {
            board
                .slot_mut(id)
                .unwrap()
                .push(card("9D"));
        }
    }
    for (id, c) in IDS.iter().zip(["AH", "TH", "9H", "KH"]) {
        play_card(&mut game, &mut board, *id, card(c)).unwrap();
    }
    let outcome = score_trick(&mut game, &board).unwrap();
    assert!(outcome.hand_over);
    assert_eq!(game.hand_score.total(), 5);
    assert_eq!(game.hand_score[Team::One], 4);
    assert_eq!(game.phase, Phase::ScoreGame);
}
