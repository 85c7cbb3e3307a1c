#![allow(dead_code)]

pub mod card_helpers;
pub mod match_setup;

pub use card_helpers::cards;
pub use match_setup::{msg, rig_hand, send, started_match, Match};
