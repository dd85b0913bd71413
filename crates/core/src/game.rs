//! Session controller: the deterministic simulation loop and its
//! lifecycle state machine.
//!
//! All mutation flows through `Game` methods; rendering reads
//! `Game::state()` as an immutable snapshot. The external driver supplies
//! a monotonically increasing timestamp to `tick`, which gates one
//! simulation step per `speed_ms` and decrements countdowns at 1-second
//! granularity. `advance` is the headless equivalent used by tests,
//! replay, and fuzzing: it consumes countdown seconds and simulation
//! steps as discrete units with no wall clock.

use crate::board::{Board, Pellet, Pellets, Snake};
use crate::config::GameConfig;
use crate::rng::Lcg;
use crate::score::{WORD_LEN, score_guess};
use crate::types::*;
use crate::words::WordList;

const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const START_HEADING: Direction = Direction::Right;
const COUNTDOWN_TICK_MS: f64 = 1000.0;

/// Everything a render sink needs, read-only.
pub struct SessionState {
    pub board: Board,
    pub snake: Snake,
    pub pellets: Pellets,
    pub target: String,
    pub pending: Vec<char>,
    pub guesses: Vec<GuessRecord>,
    pub crash_count: u32,
    pub max_snake_len: usize,
    pub phase: Phase,
}

pub struct Game {
    seed: u32,
    config: GameConfig,
    words: WordList,
    rng: Lcg,
    state: SessionState,
    queued_dir: Option<Direction>,
    /// Wall-clock deadline for the next countdown decrement. Replaced
    /// whenever a countdown starts, which invalidates any stale schedule.
    countdown_deadline_ms: Option<f64>,
    last_step_ms: Option<f64>,
    step_count: u64,
    log: Vec<LogEvent>,
}

impl Game {
    pub fn new(seed: u32, words: WordList, config: GameConfig) -> Self {
        let board = Board::new(config.cols, config.rows);
        let mut game = Self {
            seed,
            rng: Lcg::new(seed),
            state: SessionState {
                board,
                snake: Snake::spawn(board.center(), START_HEADING),
                pellets: Pellets::with_key(),
                target: String::new(),
                pending: Vec::new(),
                guesses: Vec::new(),
                crash_count: 0,
                max_snake_len: 1,
                phase: Phase::Running,
            },
            config,
            words,
            queued_dir: None,
            countdown_deadline_ms: None,
            last_step_ms: None,
            step_count: 0,
            log: Vec::new(),
        };
        game.new_game();
        game
    }

    /// Discard the current session and start a fresh one: new target, a
    /// length-1 snake at the grid center, empty buffer and history, the
    /// initial pellet batch, and the starting countdown.
    pub fn new_game(&mut self) {
        self.state.target = self
            .words
            .pick_target(&mut self.rng, self.config.target_sampling)
            .to_string();
        self.state.snake = Snake::spawn(self.state.board.center(), START_HEADING);
        self.state.pellets.clear();
        self.state.pending.clear();
        self.state.guesses.clear();
        self.state.crash_count = 0;
        self.state.max_snake_len = 1;
        self.queued_dir = None;
        self.last_step_ms = None;
        self.log.clear();

        self.spawn_letters(self.config.initial_pellets);
        self.ensure_next_letter();
        self.start_countdown(CountdownReason::Starting);
    }

    /// Queue a directional intent for the next simulation step.
    ///
    /// Returns false when the intent is rejected: terminal phase, or the
    /// move would send the head into the second segment (instant 180°
    /// self-collision when length > 1).
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if self.state.phase.is_terminal() {
            return false;
        }
        if let Some(second) = self.state.snake.second_segment()
            && self.state.snake.head().stepped(dir) == second
        {
            return false;
        }
        self.queued_dir = Some(dir);
        true
    }

    /// Real-time driver. `now_ms` must be monotonically increasing.
    pub fn tick(&mut self, now_ms: f64) {
        match self.state.phase {
            Phase::Countdown { .. } => {
                let deadline = *self
                    .countdown_deadline_ms
                    .get_or_insert(now_ms + COUNTDOWN_TICK_MS);
                if now_ms >= deadline {
                    self.countdown_decrement();
                    self.countdown_deadline_ms = match self.state.phase {
                        Phase::Countdown { .. } => Some(now_ms + COUNTDOWN_TICK_MS),
                        _ => None,
                    };
                    if matches!(self.state.phase, Phase::Running) {
                        self.last_step_ms = Some(now_ms);
                    }
                }
            }
            Phase::Running => {
                let last = *self.last_step_ms.get_or_insert(now_ms);
                if now_ms - last >= self.config.speed_ms {
                    self.step();
                    self.last_step_ms = Some(now_ms);
                }
            }
            Phase::Paused | Phase::Won | Phase::LostExhausted | Phase::LostMaxCrashes => {}
        }
    }

    /// One simulation step. No-op outside `Running`.
    pub fn step(&mut self) {
        if self.state.phase != Phase::Running {
            return;
        }

        if let Some(dir) = self.queued_dir.take() {
            self.state.snake.heading = dir;
        }
        let next_head = self.state.snake.head().stepped(self.state.snake.heading);

        if !self.state.board.in_bounds(next_head) {
            self.crash(CrashCause::Wall);
            return;
        }
        if self.state.snake.contains(next_head) {
            self.crash(CrashCause::SelfHit);
            return;
        }

        let hit = self
            .state
            .pellets
            .iter()
            .find(|(_, p)| p.pos == next_head)
            .map(|(id, _)| id);

        if let Some(id) = hit {
            let pellet = self.state.pellets.remove(id).expect("pellet id just looked up");
            self.state.snake.advance(next_head, true);
            self.state.pending.push(pellet.letter);
            self.log.push(LogEvent::LetterCollected { letter: pellet.letter });

            self.spawn_letters(1);
            self.ensure_next_letter();

            if self.state.pending.len() == WORD_LEN {
                self.commit_guess();
            }
        } else {
            self.state.snake.advance(next_head, false);
        }

        self.state.max_snake_len = self.state.max_snake_len.max(self.state.snake.len());
        self.step_count += 1;
    }

    /// Headless batch driver: each unit is either one countdown second or
    /// one simulation step.
    pub fn advance(&mut self, max_units: u32) -> AdvanceResult {
        let mut units = 0;
        while units < max_units {
            match self.state.phase {
                Phase::Countdown { .. } => self.countdown_decrement(),
                Phase::Running => self.step(),
                Phase::Paused => {
                    return AdvanceResult {
                        simulated_units: units,
                        stop_reason: AdvanceStopReason::PausedAtBoundary,
                    };
                }
                phase => {
                    let outcome = phase.outcome().expect("non-terminal phases handled above");
                    return AdvanceResult {
                        simulated_units: units,
                        stop_reason: AdvanceStopReason::Finished(outcome),
                    };
                }
            }
            units += 1;
        }
        if let Some(outcome) = self.state.phase.outcome() {
            return AdvanceResult {
                simulated_units: units,
                stop_reason: AdvanceStopReason::Finished(outcome),
            };
        }
        AdvanceResult { simulated_units: units, stop_reason: AdvanceStopReason::BudgetExhausted }
    }

    pub fn pause(&mut self) -> Result<(), GameError> {
        if self.state.phase != Phase::Running {
            return Err(GameError::NotRunning);
        }
        self.state.phase = Phase::Paused;
        Ok(())
    }

    pub fn resume(&mut self) -> Result<(), GameError> {
        if self.state.phase != Phase::Paused {
            return Err(GameError::NotPaused);
        }
        self.state.phase = Phase::Running;
        // Re-arm the step gate so a long pause does not burst steps.
        self.last_step_ms = None;
        Ok(())
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn current_step(&self) -> u64 {
        self.step_count
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Canonical hash of the observable session state.
    pub fn snapshot_hash(&self) -> u64 {
        use std::hash::Hasher;
        use xxhash_rust::xxh3::Xxh3;

        let mut hasher = Xxh3::new();
        hasher.write_u32(self.seed);
        hasher.write_u64(self.step_count);

        for pos in self.state.snake.segments() {
            hasher.write_i32(pos.x);
            hasher.write_i32(pos.y);
        }
        hasher.write_u8(self.state.snake.heading as u8);

        // Pellet iteration order depends on insertion history; hash a
        // position-sorted view instead.
        let mut pellets: Vec<&Pellet> = self.state.pellets.values().collect();
        pellets.sort_by_key(|p| (p.pos.y, p.pos.x));
        for pellet in pellets {
            hasher.write_i32(pellet.pos.x);
            hasher.write_i32(pellet.pos.y);
            hasher.write_u32(pellet.letter as u32);
        }

        for ch in &self.state.pending {
            hasher.write_u32(*ch as u32);
        }
        for guess in &self.state.guesses {
            hasher.write(guess.word.as_bytes());
            for score in &guess.result {
                hasher.write_u8(*score as u8);
            }
        }
        hasher.write_u32(self.state.crash_count);
        hasher.write_u64(self.state.max_snake_len as u64);
        hasher.write_u8(phase_tag(self.state.phase));

        hasher.finish()
    }

    fn start_countdown(&mut self, reason: CountdownReason) {
        let seconds = self.config.countdown_seconds;
        if seconds == 0 {
            self.state.phase = Phase::Running;
            self.countdown_deadline_ms = None;
            return;
        }
        self.state.phase = Phase::Countdown { reason, seconds_left: seconds };
        self.countdown_deadline_ms = None;
        self.log.push(LogEvent::CountdownStarted { reason });
    }

    fn countdown_decrement(&mut self) {
        let Phase::Countdown { reason, seconds_left } = self.state.phase else {
            return;
        };
        if seconds_left <= 1 {
            self.state.phase = Phase::Running;
            self.countdown_deadline_ms = None;
        } else {
            self.state.phase = Phase::Countdown { reason, seconds_left: seconds_left - 1 };
        }
    }

    fn crash(&mut self, cause: CrashCause) {
        self.state.crash_count += 1;
        self.log.push(LogEvent::Crashed { cause, crash_count: self.state.crash_count });

        if self.state.crash_count >= self.config.max_crashes {
            self.finish(SessionOutcome::LostMaxCrashes);
            return;
        }

        // Pellets, buffer, and history survive a crash; only the snake
        // resets. A pellet sitting on the respawn cell is relocated so no
        // pellet ever shares a cell with the snake.
        self.state.snake = Snake::spawn(self.state.board.center(), START_HEADING);
        self.queued_dir = None;
        self.relocate_pellet_at(self.state.board.center());
        self.start_countdown(CountdownReason::Resuming);
    }

    fn relocate_pellet_at(&mut self, pos: Pos) {
        let blocking = self
            .state
            .pellets
            .iter()
            .find(|(_, p)| p.pos == pos)
            .map(|(id, _)| id);
        if let Some(id) = blocking {
            let free = self
                .state
                .board
                .random_free_cell(&mut self.rng, &self.state.snake, &self.state.pellets);
            if let Some(pellet) = self.state.pellets.get_mut(id) {
                pellet.pos = free;
            }
        }
    }

    fn commit_guess(&mut self) {
        let word: String = self.state.pending.iter().collect();
        let result = score_guess(&word, &self.state.target);
        let record = GuessRecord { word: word.clone(), result };
        let won = record.is_win();

        self.state.guesses.push(record);
        self.state.pending.clear();
        self.log.push(LogEvent::GuessCommitted { word, result });

        if won {
            self.finish(SessionOutcome::Won);
        } else if self.state.guesses.len() >= self.config.max_guesses {
            self.finish(SessionOutcome::LostExhausted);
        } else {
            // Buffer is empty again, so the needed letter is target[0].
            self.ensure_next_letter();
        }
    }

    fn finish(&mut self, outcome: SessionOutcome) {
        self.state.phase = match outcome {
            SessionOutcome::Won => Phase::Won,
            SessionOutcome::LostExhausted => Phase::LostExhausted,
            SessionOutcome::LostMaxCrashes => Phase::LostMaxCrashes,
        };
        self.countdown_deadline_ms = None;
        self.queued_dir = None;
        self.log.push(LogEvent::SessionEnded { outcome });
    }

    /// Add `n` pellets. With probability `needed_letter_bias` the letter
    /// is drawn from target letters not yet in the pending buffer,
    /// otherwise uniformly from the alphabet.
    fn spawn_letters(&mut self, n: usize) {
        for _ in 0..n {
            let pos = self
                .state
                .board
                .random_free_cell(&mut self.rng, &self.state.snake, &self.state.pellets);
            let needed: Vec<char> = self
                .state
                .target
                .chars()
                .filter(|ch| !self.state.pending.contains(ch))
                .collect();
            let letter = if !needed.is_empty() && self.rng.chance(self.config.needed_letter_bias)
            {
                needed[self.rng.index(needed.len())]
            } else {
                ALPHABET[self.rng.index(ALPHABET.len())] as char
            };
            self.state.pellets.insert(Pellet { pos, letter });
        }
    }

    /// Keep the puzzle completable: if no pellet on the board bears the
    /// next positionally-correct letter of the target, force-spawn it.
    fn ensure_next_letter(&mut self) {
        if self.state.pending.len() >= WORD_LEN {
            return;
        }
        let Some(need) = self.state.target.chars().nth(self.state.pending.len()) else {
            return;
        };
        if self.state.pellets.values().any(|p| p.letter == need) {
            return;
        }
        let pos = self
            .state
            .board
            .random_free_cell(&mut self.rng, &self.state.snake, &self.state.pellets);
        self.state.pellets.insert(Pellet { pos, letter: need });
    }
}

fn phase_tag(phase: Phase) -> u8 {
    match phase {
        Phase::Countdown { seconds_left, .. } => 0x10 | seconds_left,
        Phase::Running => 1,
        Phase::Paused => 2,
        Phase::Won => 3,
        Phase::LostExhausted => 4,
        Phase::LostMaxCrashes => 5,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::words::WordList;

    fn fixed_words(target: &str) -> WordList {
        // A list big enough to avoid the fallback, with `target` first and
        // FirstHalf sampling pinned to a half that only contains it.
        let mut raw = vec![target.to_string()];
        for filler in ["BEACH", "CHAIR", "CLOUD", "DANCE", "DREAM", "EARTH", "FLAME", "FROST",
            "GHOST", "GRAPE", "HOUSE"]
        {
            raw.push(filler.to_string());
        }
        WordList::from_words(raw)
    }

    fn pinned_game(target: &str, config: GameConfig) -> Game {
        let mut config = config;
        config.target_sampling = crate::config::TargetSampling::FirstHalf;
        let words = fixed_words(target);
        // Search a seed whose first draw lands on the requested target.
        for seed in 0..5000u32 {
            let game = Game::new(seed, words.clone(), config.clone());
            if game.state().target == target {
                return game;
            }
        }
        panic!("no seed pinned target {target}");
    }

    fn run_countdown(game: &mut Game) {
        while matches!(game.state().phase, Phase::Countdown { .. }) {
            game.advance(1);
        }
        assert_eq!(game.state().phase, Phase::Running);
    }

    /// Clear the board and lay the given letters in a row directly in the
    /// snake's path, so each step consumes exactly one of them.
    fn lay_letters_ahead(game: &mut Game, letters: &[char]) {
        game.state.pellets.clear();
        let head = game.state.snake.head();
        for (i, letter) in letters.iter().enumerate() {
            let pos = Pos { x: head.x + 1 + i as i32, y: head.y };
            assert!(game.state.board.in_bounds(pos), "letter row must fit on the grid");
            game.state.pellets.insert(Pellet { pos, letter: *letter });
        }
    }

    #[test]
    fn new_game_spawns_initial_batch_and_guarantee() {
        let game = Game::new(11, WordList::embedded(), GameConfig::default());
        let state = game.state();

        assert!(matches!(
            state.phase,
            Phase::Countdown { reason: CountdownReason::Starting, seconds_left: 3 }
        ));
        assert!(state.pellets.len() >= game.config().initial_pellets);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), state.board.center());

        let first = state.target.chars().next().unwrap();
        assert!(state.pellets.values().any(|p| p.letter == first));
    }

    #[test]
    fn pellets_never_overlap_snake_or_each_other() {
        let game = Game::new(23, WordList::embedded(), GameConfig::default());
        let state = game.state();

        let mut cells: Vec<Pos> = state.pellets.values().map(|p| p.pos).collect();
        cells.sort();
        let before = cells.len();
        cells.dedup();
        assert_eq!(cells.len(), before, "pellets must not stack");
        assert!(cells.iter().all(|pos| !state.snake.contains(*pos)));
    }

    #[test]
    fn reversal_into_second_segment_is_rejected() {
        let mut game = pinned_game("APPLE", GameConfig::default());
        run_countdown(&mut game);
        lay_letters_ahead(&mut game, &['A']);

        game.step(); // eat the A, length 2, heading Right
        assert_eq!(game.state().snake.len(), 2);
        assert!(!game.set_direction(Direction::Left), "180° turn must be rejected");
        assert!(game.set_direction(Direction::Up));
    }

    #[test]
    fn reversal_is_allowed_at_length_one() {
        let mut game = Game::new(3, WordList::embedded(), GameConfig::default());
        run_countdown(&mut game);
        assert_eq!(game.state().snake.len(), 1);
        assert!(game.set_direction(Direction::Left));
    }

    #[test]
    fn queued_direction_applies_once_per_step() {
        let mut game = Game::new(17, WordList::embedded(), GameConfig::default());
        run_countdown(&mut game);
        game.state.pellets.clear();

        game.set_direction(Direction::Down);
        let head = game.state().snake.head();
        game.step();
        assert_eq!(game.state().snake.head(), Pos { x: head.x, y: head.y + 1 });

        // No new input: the snake keeps its heading.
        let head = game.state().snake.head();
        game.step();
        assert_eq!(game.state().snake.head(), Pos { x: head.x, y: head.y + 1 });
    }

    #[test]
    fn consumption_grows_and_collects_the_letter() {
        let mut game = pinned_game("APPLE", GameConfig::default());
        run_countdown(&mut game);
        lay_letters_ahead(&mut game, &['A']);

        game.step();
        assert_eq!(game.state().snake.len(), 2);
        assert_eq!(game.state().pending, vec!['A']);
        assert_eq!(game.state().max_snake_len, 2);
        // One replacement spawned, plus possibly the forced P.
        assert!(!game.state().pellets.is_empty());
        assert!(game.log().iter().any(|e| matches!(e, LogEvent::LetterCollected { letter: 'A' })));
    }

    #[test]
    fn needed_letter_guarantee_holds_after_consumption() {
        let mut game = pinned_game("APPLE", GameConfig::default());
        run_countdown(&mut game);
        lay_letters_ahead(&mut game, &['A']);

        game.step();
        // Buffer is "A"; the next positionally-correct letter is P.
        assert!(game.state().pellets.values().any(|p| p.letter == 'P'));
    }

    #[test]
    fn full_buffer_commits_and_wins_on_exact_guess() {
        let mut game = pinned_game("APPLE", GameConfig::default());
        run_countdown(&mut game);
        lay_letters_ahead(&mut game, &['A', 'P', 'P', 'L', 'E']);

        for _ in 0..5 {
            game.step();
        }

        assert_eq!(game.state().phase, Phase::Won);
        assert_eq!(game.state().guesses.len(), 1);
        let record = &game.state().guesses[0];
        assert_eq!(record.word, "APPLE");
        assert!(record.is_win());
        assert!(game.state().pending.is_empty());

        // Terminal phase freezes the simulation.
        let hash = game.snapshot_hash();
        game.step();
        game.tick(1_000_000.0);
        assert_eq!(game.snapshot_hash(), hash);
    }

    #[test]
    fn wrong_guess_keeps_running_until_exhaustion() {
        let mut config = GameConfig::default();
        config.max_guesses = 2;
        let mut game = pinned_game("APPLE", config);
        run_countdown(&mut game);

        lay_letters_ahead(&mut game, &['X', 'Y', 'Z', 'Q', 'W']);
        for _ in 0..5 {
            game.step();
        }
        assert_eq!(game.state().guesses[0].result, [LetterScore::Absent; 5]);
        assert_eq!(game.state().phase, Phase::Running, "guesses remain, keep playing");

        // The head has reached the right edge; re-center for a second row.
        game.state.snake = Snake::spawn(game.state.board.center(), START_HEADING);
        lay_letters_ahead(&mut game, &['X', 'Y', 'Z', 'Q', 'W']);
        for _ in 0..5 {
            game.step();
        }
        assert_eq!(game.state().phase, Phase::LostExhausted);
    }

    #[test]
    fn crash_resets_snake_but_preserves_progress() {
        let mut game = pinned_game("APPLE", GameConfig::default());
        run_countdown(&mut game);
        lay_letters_ahead(&mut game, &['A']);
        game.step();
        let pending_before = game.state().pending.clone();
        // Empty the board so the drive to the wall collects nothing.
        game.state.pellets.clear();

        // Drive into the right wall.
        let result = game.advance(64);
        assert!(matches!(result.stop_reason, AdvanceStopReason::BudgetExhausted));
        assert!(game.state().crash_count >= 1);
        assert_eq!(game.state().pending, pending_before, "buffer survives a crash");
        assert!(game.log().iter().any(|e| matches!(
            e,
            LogEvent::Crashed { cause: CrashCause::Wall, .. }
        )));
    }

    #[test]
    fn crash_cap_latches_lost_max_crashes() {
        let mut config = GameConfig::small();
        config.max_crashes = 3;
        config.initial_pellets = 0;
        // No input ever: the snake repeatedly runs into the right wall.
        let mut game = Game::new(29, WordList::embedded(), config);

        let result = game.advance(10_000);
        assert!(matches!(
            result.stop_reason,
            AdvanceStopReason::Finished(SessionOutcome::LostMaxCrashes)
        ));
        assert_eq!(game.state().crash_count, 3);
        assert_eq!(game.state().phase, Phase::LostMaxCrashes);

        let hash = game.snapshot_hash();
        game.advance(100);
        game.step();
        assert_eq!(game.snapshot_hash(), hash, "terminal state must be frozen");
    }

    #[test]
    fn crash_relocates_pellet_sitting_on_the_respawn_cell() {
        let mut game = Game::new(31, WordList::embedded(), GameConfig::default());
        run_countdown(&mut game);

        // Steer straight up into the wall to force a crash, leaving a
        // pellet parked on the respawn cell.
        game.set_direction(Direction::Up);
        game.step();
        let center = game.state.board.center();
        game.state.pellets.clear();
        game.state.pellets.insert(Pellet { pos: center, letter: 'K' });
        loop {
            game.step();
            if game.state().crash_count > 0 {
                break;
            }
        }

        assert_eq!(game.state().snake.head(), center);
        assert!(
            game.state().pellets.values().all(|p| p.pos != center),
            "pellet must be moved off the respawn cell"
        );
        assert!(game.state().pellets.values().any(|p| p.letter == 'K'), "pellet is moved, not lost");
    }

    #[test]
    fn pause_only_toggles_from_running() {
        let mut game = Game::new(5, WordList::embedded(), GameConfig::default());
        assert_eq!(game.pause(), Err(GameError::NotRunning), "no pause during countdown");

        run_countdown(&mut game);
        assert!(game.pause().is_ok());
        assert_eq!(game.state().phase, Phase::Paused);
        assert_eq!(game.pause(), Err(GameError::NotRunning));

        // Paused freezes stepping.
        let hash = game.snapshot_hash();
        game.step();
        assert_eq!(game.snapshot_hash(), hash);

        assert!(game.resume().is_ok());
        assert_eq!(game.state().phase, Phase::Running);
        assert_eq!(game.resume(), Err(GameError::NotPaused));
    }

    #[test]
    fn tick_gates_steps_by_speed_interval() {
        let mut config = GameConfig::default();
        config.countdown_seconds = 0;
        let mut game = Game::new(41, WordList::embedded(), config);
        game.state.pellets.clear();
        assert_eq!(game.state().phase, Phase::Running);

        game.tick(0.0); // arms the gate
        let head = game.state().snake.head();
        game.tick(100.0); // below speed_ms, no step
        assert_eq!(game.state().snake.head(), head);
        game.tick(150.0); // crosses the interval
        assert_ne!(game.state().snake.head(), head);
    }

    #[test]
    fn tick_drives_countdown_to_running() {
        let mut game = Game::new(43, WordList::embedded(), GameConfig::default());
        assert!(matches!(game.state().phase, Phase::Countdown { seconds_left: 3, .. }));

        game.tick(0.0); // arms the 1s deadline
        game.tick(1000.0);
        assert!(matches!(game.state().phase, Phase::Countdown { seconds_left: 2, .. }));
        game.tick(2000.0);
        game.tick(3000.0);
        assert_eq!(game.state().phase, Phase::Running);
    }

    #[test]
    fn new_game_cancels_an_in_flight_countdown_schedule() {
        let mut game = Game::new(47, WordList::embedded(), GameConfig::default());
        game.tick(0.0);
        game.tick(1000.0);
        assert!(matches!(game.state().phase, Phase::Countdown { seconds_left: 2, .. }));

        game.new_game();
        assert!(matches!(
            game.state().phase,
            Phase::Countdown { reason: CountdownReason::Starting, seconds_left: 3 }
        ));
        // The stale 2s deadline must not fire: the next tick only arms a
        // fresh schedule.
        game.tick(1500.0);
        assert!(matches!(game.state().phase, Phase::Countdown { seconds_left: 3, .. }));
    }

    #[test]
    fn max_snake_length_is_monotonic_across_crashes() {
        let mut game = pinned_game("APPLE", GameConfig::default());
        run_countdown(&mut game);
        lay_letters_ahead(&mut game, &['A', 'P']);
        game.step();
        game.step();
        assert_eq!(game.state().max_snake_len, 3);

        game.state.pellets.clear();
        game.advance(64); // run into the wall at least once
        assert!(game.state().crash_count >= 1);
        assert_eq!(game.state().snake.len(), 1);
        assert_eq!(game.state().max_snake_len, 3, "statistic survives the reset");
    }
}
