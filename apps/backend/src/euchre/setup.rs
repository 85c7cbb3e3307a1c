use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use crate::domain::{Board, Game, PlayerId, Seat, Slot};
use crate::engine::Action;
use crate::errors::domain::{DomainError, SeatingKind};
use crate::euchre::actions::{build_action, START_GAME};
use crate::euchre::rules::{build_router, EuchreRouter};
use crate::euchre::MatchContext;
use crate::protocol::{InboundMessage, OutboundResult};
use crate::table::{Connection, Table};

/// One match: the seated connections, the board, and the game once four
/// players have joined.
pub struct EuchreSetup<C> {
    table: Table<C>,
    board: Board,
    game: Option<Game>,
    router: EuchreRouter,
    seed: Option<u64>,
}

impl<C: Connection> EuchreSetup<C> {
    /// `seed` makes every shuffle of the match reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Self {
            table: Table::new(),
            board: Board::new(),
            game: None,
            router: build_router(),
            seed,
        }
    }

    /// Seat a player. The fourth one creates the game; call [`start`] next.
    ///
    /// [`start`]: EuchreSetup::start
    pub fn add_player(&mut self, connection: C) -> Result<Seat, DomainError> {
        if self.game.is_some() {
            return Err(DomainError::seating(
                SeatingKind::TableFull,
                "the match is already under way",
            ));
        }
        let seat = self.table.seat(connection)?;
        if self.table.is_full() {
            self.create_game()?;
        }
        Ok(seat)
    }

    fn create_game(&mut self) -> Result<(), DomainError> {
        let rng = match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        };
        let game = Game::new(self.table.seating(), rng)?;
        let mut board = Board::new();
        for &id in self.table.seating() {
            board.add_slot(id, Slot::new(true));
        }
        info!(players = ?self.table.seating(), "Match created");
        self.board = board;
        self.game = Some(game);
        Ok(())
    }

    pub fn disconnect(&mut self, id: PlayerId) -> Option<C> {
        self.table.disconnect(id)
    }

    pub fn is_ready(&self) -> bool {
        self.game.is_some()
    }

    /// Kick off the match: announce the dealer and deal the first hand.
    pub fn start(&mut self) -> Result<OutboundResult, DomainError> {
        self.system_action(&Action::bare(START_GAME))
    }

    /// Turn a client message into an action and route it as that player.
    pub fn handle_message(
        &mut self,
        caller: PlayerId,
        message: &InboundMessage,
    ) -> Result<OutboundResult, DomainError> {
        let action = build_action(message, caller)?;
        self.dispatch(&action, true)
    }

    /// Route an action that did not come from a client.
    pub fn system_action(&mut self, action: &Action) -> Result<OutboundResult, DomainError> {
        self.dispatch(action, false)
    }

    fn dispatch(
        &mut self,
        action: &Action,
        player_action: bool,
    ) -> Result<OutboundResult, DomainError> {
        let game = self
            .game
            .as_mut()
            .ok_or_else(|| DomainError::not_ready("waiting for four players"))?;
        let mut ctx = MatchContext::new(&mut self.table, &mut self.board, game);
        let result = self.router.route(action, &mut ctx, player_action)?;
        debug!(
            action = action.name(),
            success = result.success,
            message = %result.message,
            "Action processed"
        );
        Ok(OutboundResult::from(&result))
    }

    pub fn game(&self) -> Option<&Game> {
        self.game.as_ref()
    }

    /// Direct access for hosts and tests that need to arrange state.
    pub fn game_mut(&mut self) -> Option<&mut Game> {
        self.game.as_mut()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn table(&self) -> &Table<C> {
        &self.table
    }

    pub fn table_mut(&mut self) -> &mut Table<C> {
        &mut self.table
    }
}
