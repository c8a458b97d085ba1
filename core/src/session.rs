use alloc::string::ToString;
use alloc::vec::Vec;
use web_time::Instant;

use crate::*;

/// Where the session is in its setup lifecycle. Drives the shell's loading indicator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupPhase {
    Idle,
    Loading,
    Ready,
    Failed(TriviaError),
}

impl SetupPhase {
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }
}

impl Default for SetupPhase {
    fn default() -> Self {
        Self::Idle
    }
}

/// Proof that a setup was started; consumed by [`GameSession::finish_setup`].
#[derive(Debug)]
#[must_use = "a started setup has to be finished"]
pub struct SetupTicket {
    started_at: Instant,
}

/// Fetches a full board: category ids first, then each category in order.
///
/// Stops at the first failure. Nothing fetched before the failure is kept.
pub async fn load_board<A: TriviaApi>(client: &mut TriviaClient<A>) -> Result<Board> {
    let ids = client.fetch_category_ids().await?;

    let mut categories = Vec::with_capacity(ids.len());
    for id in ids {
        categories.push(client.fetch_category(id).await?);
    }

    Board::new(categories, client.config())
}

/// State of one game: the board being played and the setup lifecycle.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GameSession {
    board: Board,
    phase: SetupPhase,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> &SetupPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    /// Clears the board and enters [`SetupPhase::Loading`].
    ///
    /// Fails while another setup is in flight.
    pub fn begin_setup(&mut self) -> Result<SetupTicket> {
        if self.phase.is_loading() {
            log::warn!("ignoring restart, setup already in progress");
            return Err(TriviaError::SetupInProgress);
        }

        self.board.clear();
        self.phase = SetupPhase::Loading;
        log::debug!("game setup started");
        Ok(SetupTicket {
            started_at: Instant::now(),
        })
    }

    /// Installs the loaded board and renders it, or records the failure with an empty board.
    pub fn finish_setup(&mut self, ticket: SetupTicket, result: Result<Board>) -> Result<BoardView> {
        let elapsed = ticket.started_at.elapsed();

        match result {
            Ok(board) => {
                log::info!(
                    "board ready: {} categories x {} clues in {:?}",
                    board.num_categories(),
                    board.clues_per_category(),
                    elapsed
                );
                self.board = board;
                self.phase = SetupPhase::Ready;
                Ok(render(&self.board))
            }
            Err(err) => {
                if err.is_data_shape() {
                    log::warn!("trivia service sent too little data after {:?}: {}", elapsed, err);
                } else {
                    log::error!("game setup failed after {:?}: {}", elapsed, err);
                }
                self.board.clear();
                self.phase = SetupPhase::Failed(err.clone());
                Err(err)
            }
        }
    }

    /// Runs a whole setup against `client` and returns the freshly rendered board.
    pub async fn start_or_restart<A: TriviaApi>(
        &mut self,
        client: &mut TriviaClient<A>,
    ) -> Result<BoardView> {
        let ticket = self.begin_setup()?;
        let result = load_board(client).await;
        self.finish_setup(ticket, result)
    }

    /// Advances the clue at `coord` and returns the one cell that changed, if any.
    ///
    /// Coordinates that do not resolve, including on an empty board while loading, are ignored.
    pub fn activate(&mut self, coord: CellCoord) -> Option<CellUpdate> {
        let clue = match self.board.clue_mut(coord) {
            Ok(clue) => clue,
            Err(err) => {
                log::debug!("ignoring activation at {:?}: {}", coord, err);
                return None;
            }
        };

        let text = clue.activate()?.to_string();
        log::trace!("{:?} -> {:?}", coord, clue.reveal_state);
        Some(CellUpdate { coord, text })
    }

    pub fn reveal_state_at(&self, coord: CellCoord) -> Option<RevealState> {
        self.board.clue(coord).ok().map(|clue| clue.reveal_state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use alloc::format;
    use futures::executor::block_on;

    fn math_session() -> (GameSession, BoardView) {
        let config = BoardConfig::new_unchecked(1, 1, 1);
        let board = Board::new(
            alloc::vec![Category::new("Math", alloc::vec![Clue::new("2+2", "4")])],
            &config,
        )
        .unwrap();
        let mut session = GameSession::new();
        let ticket = session.begin_setup().unwrap();
        let view = session.finish_setup(ticket, Ok(board)).unwrap();
        (session, view)
    }

    #[test]
    fn math_clue_reveals_question_then_answer_then_ignores() {
        let (mut session, mut view) = math_session();
        let origin = CellCoord::new(0, 0);
        assert_eq!(view.text_at(origin), Some(PLACEHOLDER));

        let update = session.activate(origin).unwrap();
        assert!(view.apply(&update));
        assert_eq!(view.text_at(origin), Some("2+2"));
        assert_eq!(
            session.reveal_state_at(origin),
            Some(RevealState::QuestionShown)
        );

        let update = session.activate(origin).unwrap();
        assert!(view.apply(&update));
        assert_eq!(view.text_at(origin), Some("4"));
        assert_eq!(
            session.reveal_state_at(origin),
            Some(RevealState::AnswerShown)
        );

        assert_eq!(session.activate(origin), None);
        assert_eq!(view.text_at(origin), Some("4"));
        assert_eq!(
            session.reveal_state_at(origin),
            Some(RevealState::AnswerShown)
        );
    }

    #[test]
    fn activation_outside_board_is_a_no_op() {
        let (mut session, _) = math_session();
        let before = session.clone();

        assert_eq!(session.activate(CellCoord::new(0, 1)), None);
        assert_eq!(session.activate(CellCoord::new(3, 0)), None);
        assert_eq!(session, before);
    }

    #[test]
    fn activation_only_touches_addressed_clue() {
        let api = FakeApi::with_pool(1..=6, 5);
        let mut client = TriviaClient::new(api, BoardConfig::default(), 11);
        let mut session = GameSession::new();
        block_on(session.start_or_restart(&mut client)).unwrap();

        let target = CellCoord::new(2, 3);
        session.activate(target).unwrap();

        for category in 0..6 {
            for clue in 0..5 {
                let coord = CellCoord::new(category, clue);
                let expected = if coord == target {
                    RevealState::QuestionShown
                } else {
                    RevealState::Hidden
                };
                assert_eq!(session.reveal_state_at(coord), Some(expected));
            }
        }
    }

    #[test]
    fn setup_fetches_sequentially_in_selection_order() {
        let api = FakeApi::with_pool(1..=7, 5);
        let mut client = TriviaClient::new(api, BoardConfig::default(), 12);
        let mut session = GameSession::new();

        let view = block_on(session.start_or_restart(&mut client)).unwrap();

        let requests = client.api().requests();
        assert_eq!(requests.len(), 1 + NUM_CATEGORIES);
        assert_eq!(requests[0], Request::Summaries(CATEGORY_POOL_SIZE));
        let fetched: Vec<CategoryId> = requests[1..]
            .iter()
            .map(|request| match request {
                Request::Category(id) => *id,
                other => panic!("unexpected request {:?}", other),
            })
            .collect();
        let titles: Vec<_> = fetched
            .iter()
            .map(|id| format!("Category {}", id))
            .collect();

        assert_eq!(view.headers(), titles.as_slice());
        assert_eq!(view.dim(), (NUM_CLUES_PER_CAT, NUM_CATEGORIES));
        assert_eq!(session.phase(), &SetupPhase::Ready);
        assert_eq!(session.board().num_categories(), NUM_CATEGORIES);
        assert_eq!(session.board().clues_per_category(), NUM_CLUES_PER_CAT);
    }

    #[test]
    fn failed_category_fetch_aborts_and_leaves_empty_board() {
        let api = FakeApi {
            fail_category: Some(3),
            ..FakeApi::with_pool(1..=6, 5)
        };
        let mut client = TriviaClient::new(api, BoardConfig::default(), 13);
        let mut session = GameSession::new();

        let err = block_on(session.start_or_restart(&mut client)).unwrap_err();

        assert!(matches!(err, TriviaError::Network(_)));
        assert_eq!(
            client.api().requests().last(),
            Some(&Request::Category(3))
        );
        assert!(session.board().is_empty());
        assert_eq!(session.phase(), &SetupPhase::Failed(err));
    }

    #[test]
    fn short_category_on_restart_rolls_back_to_empty_board() {
        let mut api = FakeApi::with_pool(1..=6, 5);
        let mut client = TriviaClient::new(api, BoardConfig::default(), 14);
        let mut session = GameSession::new();
        block_on(session.start_or_restart(&mut client)).unwrap();
        assert!(!session.board().is_empty());

        api = FakeApi::with_pool(1..=6, 5);
        api.categories.insert(4, payload("Short", 3));
        let mut client = TriviaClient::new(api, BoardConfig::default(), 15);
        let err = block_on(session.start_or_restart(&mut client)).unwrap_err();

        assert_eq!(
            err,
            TriviaError::DataShape {
                what: "clues",
                needed: 5,
                available: 3
            }
        );
        assert!(session.board().is_empty());
        assert_eq!(session.activate(CellCoord::new(0, 0)), None);
    }

    #[test]
    fn overlapping_setup_is_rejected() {
        let mut session = GameSession::new();
        assert_eq!(session.phase(), &SetupPhase::Idle);

        let ticket = session.begin_setup().unwrap();
        assert!(session.is_loading());
        assert_eq!(
            session.begin_setup().unwrap_err(),
            TriviaError::SetupInProgress
        );
        assert_eq!(session.activate(CellCoord::new(0, 0)), None);

        let err = session
            .finish_setup(ticket, Err(TriviaError::Network("timeout".into())))
            .unwrap_err();
        assert!(!session.is_loading());
        assert_eq!(session.phase(), &SetupPhase::Failed(err));
        assert!(session.begin_setup().is_ok());
    }

    #[test]
    fn restart_clears_previous_board_before_loading() {
        let (mut session, _) = math_session();
        session.activate(CellCoord::new(0, 0)).unwrap();

        let _ticket = session.begin_setup().unwrap();

        assert!(session.board().is_empty());
        assert_eq!(session.phase(), &SetupPhase::Loading);
    }
}
