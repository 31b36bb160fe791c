//! Table state, construction and the `RulesEngine` surface.

use std::sync::Arc;

use im::Vector;
use tracing::{debug, error};

use crate::actions::{ActionCatalog, ActionMask};
use crate::cards::{Card, Deck};
use crate::core::{
    ActionId, ActionRecord, GameConfig, GameError, GameResult, GameRng, GameRngState, PlayerId, PlayerMap,
};
use crate::nn::{EncodedState, FullEncoder, Observation, PerspectiveEncoder, SeatView, StateEncoder};
use crate::rules::{GameOutcome, RewardFn, RewardKind, RulesEngine, StepOutcome};
use crate::seats::Seat;

/// A Love Letter table.
///
/// The game is the only mutator of its seats, deck and ledgers. Every
/// transition goes through `step` or `advance`.
#[derive(Clone, Debug)]
pub struct LoveLetterGame {
    pub(super) config: GameConfig,
    pub(super) catalog: &'static ActionCatalog,
    pub(super) deck: Deck,
    pub(super) seats: PlayerMap<Seat>,
    pub(super) current: PlayerId,
    pub(super) starting: PlayerId,
    /// Every card that left a hand face up, in order.
    pub(super) discard_pile: Vector<Card>,
    pub(super) history: Vector<ActionRecord>,
    pub(super) game_over: bool,
    pub(super) winners: Vec<PlayerId>,
    pub(super) rng: GameRng,
    pub(super) reward: Arc<dyn RewardFn>,
}

/// Builder for creating a `LoveLetterGame`.
#[derive(Clone, Debug, Default)]
pub struct LoveLetterBuilder {
    config: GameConfig,
    reward: Option<Arc<dyn RewardFn>>,
}

impl LoveLetterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn player_count(mut self, count: usize) -> Self {
        self.config.player_count = count;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn player_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.player_names = names.into_iter().map(Into::into).collect();
        self
    }

    pub fn starting_seat(mut self, seat: PlayerId) -> Self {
        self.config.starting_seat = Some(seat);
        self
    }

    /// Deal from a fixed card order. The first card is burned.
    pub fn stacked_deck(mut self, cards: Vec<Card>) -> Self {
        self.config.stacked_deck = Some(cards);
        self
    }

    pub fn reward(mut self, kind: RewardKind) -> Self {
        self.config.reward = kind;
        self
    }

    /// Use a custom reward function instead of one of the built-in kinds.
    pub fn reward_fn(mut self, reward: impl RewardFn + 'static) -> Self {
        self.reward = Some(Arc::new(reward));
        self
    }

    /// Validate the configuration, seat the players and deal.
    pub fn build(self) -> GameResult<LoveLetterGame> {
        self.config.validate()?;

        let reward = self.reward.unwrap_or_else(|| self.config.reward.build());
        let config = self.config;
        let seats = PlayerMap::new(config.player_count, |p| Seat::new(p, config.player_name(p)));

        let mut game = LoveLetterGame {
            catalog: ActionCatalog::standard(),
            deck: Deck::new(),
            seats,
            current: PlayerId::new(0),
            starting: PlayerId::new(0),
            discard_pile: Vector::new(),
            history: Vector::new(),
            game_over: false,
            winners: Vec::new(),
            rng: GameRng::new(config.seed),
            reward,
            config,
        };
        game.deal()?;
        Ok(game)
    }
}

impl LoveLetterGame {
    /// Reset every seat, shuffle (or restack) and deal one card per seat,
    /// plus a second card to the starting seat.
    pub(super) fn deal(&mut self) -> GameResult<()> {
        let n = self.player_count();

        for (_, seat) in self.seats.iter_mut() {
            seat.reset();
        }
        self.discard_pile.clear();
        self.history.clear();
        self.game_over = false;
        self.winners.clear();

        self.starting = match self.config.starting_seat {
            Some(seat) => seat,
            None => self.rng.pick_seat(n),
        };
        self.current = self.starting;

        self.deck = match &self.config.stacked_deck {
            Some(cards) => Deck::stacked(cards.clone())?,
            None => {
                let mut deck = Deck::new();
                deck.shuffle(&mut self.rng);
                deck
            }
        };

        for player in PlayerId::all(n) {
            let seat = &mut self.seats[player];
            seat.draw(&mut self.deck)?;
            if player == self.starting {
                seat.draw(&mut self.deck)?;
            }
        }

        debug!(
            starting = %self.starting,
            deck = self.deck.remaining(),
            "dealt new round"
        );
        Ok(())
    }

    // === Accessors ===

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.seats.player_count()
    }

    #[must_use]
    pub fn catalog(&self) -> &'static ActionCatalog {
        self.catalog
    }

    #[must_use]
    pub fn seat(&self, player: PlayerId) -> &Seat {
        &self.seats[player]
    }

    pub fn seats(&self) -> impl Iterator<Item = (PlayerId, &Seat)> {
        self.seats.iter()
    }

    /// Seat that received the extra card on the deal.
    #[must_use]
    pub fn starting_player(&self) -> PlayerId {
        self.starting
    }

    pub fn active_players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.seats
            .iter()
            .filter(|(_, seat)| seat.is_active())
            .map(|(p, _)| p)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_players().count()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Seats still standing when the game ended. Empty while in progress.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    #[must_use]
    pub fn deck_remaining(&self) -> usize {
        self.deck.remaining()
    }

    #[must_use]
    pub fn discard_pile(&self) -> &Vector<Card> {
        &self.discard_pile
    }

    #[must_use]
    pub fn history(&self) -> &Vector<ActionRecord> {
        &self.history
    }

    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Independent RNG stream derived from the table's, for seeding agents.
    pub fn fork_rng(&mut self) -> GameRng {
        self.rng.fork()
    }

    // === Observations ===

    /// Structured snapshot of the whole table, tagged with `viewer`.
    #[must_use]
    pub fn observe(&self, viewer: PlayerId) -> Observation {
        let seats = self
            .seats
            .iter()
            .map(|(player, seat)| SeatView {
                player,
                name: seat.name().to_string(),
                status: seat.status(),
                hand: seat.hand().slots(),
                knowledge: seat.knowledge().iter().collect(),
                last_played: seat.last_played(),
            })
            .collect();

        Observation {
            viewer,
            player_count: self.player_count(),
            seats,
            deck_remaining: self.deck.remaining(),
            discard: self.discard_pile.clone(),
            history: self.history.clone(),
            game_over: self.game_over,
            winners: self.winners.clone(),
        }
    }

    /// Privileged vector with every hand visible.
    #[must_use]
    pub fn encode_full(&self) -> EncodedState {
        FullEncoder.encode(&self.observe(self.current))
    }

    fn log_fatal(err: GameError) -> GameError {
        if err.is_fatal() {
            error!(%err, "engine invariant broken, abandoning game");
        }
        err
    }
}

impl RulesEngine for LoveLetterGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn current_player(&self) -> PlayerId {
        self.current
    }

    fn current_is_active(&self) -> bool {
        self.seats[self.current].is_active()
    }

    fn legal_mask(&self) -> ActionMask {
        self.mask_for_current()
    }

    fn step(&mut self, action_id: usize) -> GameResult<StepOutcome> {
        self.play_turn(action_id).map_err(Self::log_fatal)
    }

    fn advance(&mut self) -> GameResult<StepOutcome> {
        if !self.game_over && self.current_is_active() {
            // Passing is the padding action, never legal for a seat that can play.
            return Err(GameError::IllegalAction {
                id: ActionId::EMPTY.index(),
            });
        }
        let snapshot = self.observe(self.current);
        self.rotate(snapshot, None).map_err(Self::log_fatal)
    }

    fn reset(&mut self) -> GameResult<EncodedState> {
        self.deal().map_err(Self::log_fatal)?;
        Ok(self.observe_current())
    }

    fn observe_current(&self) -> EncodedState {
        PerspectiveEncoder.encode(&self.observe(self.current))
    }

    fn snapshot(&self) -> Observation {
        self.observe(self.current)
    }

    fn is_terminal(&self) -> Option<GameOutcome> {
        self.game_over.then(|| GameOutcome {
            winners: self.winners.clone(),
        })
    }
}
