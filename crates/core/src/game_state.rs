//! Game state module - owns one complete game
//!
//! [`GameState`] ties together the board, the falling piece, the preview piece,
//! the generator, the score and the drop timer. Every mutation goes through its
//! methods, and callers serialize ticks and commands through [`GameState::handle`]
//! so a tick can never interleave with a keypress.
//!
//! Invalid moves are not errors: they leave the state untouched and return `false`.

use serde::Serialize;

use crate::board::Board;
use crate::rng::{spawn_column, NextPiece, PieceGenerator, Randomizer};
use crate::shape::Shape;
use crate::snapshot::{overlay_piece, ActiveSnapshot, GameSnapshot, RenderGrid, EMPTY_GRID};
use crate::timer::DropTimer;
use crate::types::{
    Color, GameAction, PieceKind, RunState, DROP_INTERVAL_MS, LINE_CLEAR_SCORE,
};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
    pub x: i8,
    pub y: i8,
}

impl Tetromino {
    /// Place a generated piece at its spawn position (centered, row 0)
    pub fn spawn(next: NextPiece) -> Self {
        Self {
            kind: next.kind,
            shape: next.shape,
            color: next.color,
            x: spawn_column(next.shape.width()),
            y: 0,
        }
    }

    pub fn fits(&self, board: &Board) -> bool {
        board.fits(&self.shape, self.x, self.y)
    }

    /// Absolute board coordinates of every filled cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(dx, dy)| (self.x + dx, self.y + dy))
    }
}

/// Engine tuning. The defaults match the classic one-row-per-second game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Automatic descent period.
    pub drop_interval_ms: u32,
    /// Delay between a hard drop and its lock; 0 locks immediately.
    pub hard_drop_grace_ms: u32,
    pub seed: u64,
    pub randomizer: Randomizer,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            drop_interval_ms: DROP_INTERVAL_MS,
            hard_drop_grace_ms: 0,
            seed: 1,
            randomizer: Randomizer::default(),
        }
    }
}

/// Outcome of one lock (consumed by observers such as the event log).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// Score after the lock.
    pub score: u32,
}

/// Serialized input to the game: the timer and the player share one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Tick { elapsed_ms: u32 },
    Action(GameAction),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: EngineConfig,
    board: Board,
    active: Option<Tetromino>,
    next: Option<NextPiece>,
    generator: PieceGenerator,
    score: u32,
    lines: u32,
    run_state: RunState,
    drop_timer: DropTimer,
    /// Remaining grace after a hard drop; the piece locks when it runs out.
    pending_lock_ms: Option<u32>,
    last_lock: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given RNG seed and default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(EngineConfig {
            seed,
            ..EngineConfig::default()
        })
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Create a game over a prepared board (scripted setups and tests).
    pub fn with_board(config: EngineConfig, board: Board) -> Self {
        Self {
            config,
            board,
            active: None,
            next: None,
            generator: PieceGenerator::new(config.seed, config.randomizer),
            score: 0,
            lines: 0,
            run_state: RunState::Running,
            drop_timer: DropTimer::new(config.drop_interval_ms),
            pending_lock_ms: None,
            last_lock: None,
        }
    }

    /// Spawn the first piece pair and arm the drop timer.
    ///
    /// Does nothing if a piece is already in play or the game is not running.
    pub fn start(&mut self) {
        if self.active.is_some() || !self.run_state.is_running() {
            return;
        }
        self.drop_timer.start();
        self.spawn_pair();
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Tetromino> {
        self.active
    }

    pub fn next_piece(&self) -> Option<NextPiece> {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Total rows cleared this game.
    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn run_state(&self) -> RunState {
        self.run_state
    }

    pub fn paused(&self) -> bool {
        self.run_state == RunState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.run_state == RunState::GameOver
    }

    /// Whether a hard-dropped piece is waiting out its grace period.
    pub fn is_lock_pending(&self) -> bool {
        self.pending_lock_ms.is_some()
    }

    pub fn drop_timer(&self) -> &DropTimer {
        &self.drop_timer
    }

    pub fn seed(&self) -> u64 {
        self.generator.seed()
    }

    /// Take and clear the last lock event.
    pub fn take_last_lock(&mut self) -> Option<LockEvent> {
        self.last_lock.take()
    }

    fn spawn_pair(&mut self) {
        let first = self.generator.next_piece();
        self.next = Some(self.generator.next_piece());
        self.enter_piece(first);
    }

    /// Put `piece` into play and end the game if its spawn cells are taken.
    fn enter_piece(&mut self, piece: NextPiece) -> bool {
        let active = Tetromino::spawn(piece);
        self.active = Some(active);
        self.pending_lock_ms = None;

        if active.fits(&self.board) {
            return true;
        }
        self.run_state = RunState::GameOver;
        self.drop_timer.cancel();
        false
    }

    /// Replace the falling piece with a fresh spawn of `kind`.
    ///
    /// Goes through the same spawn check as a regular promotion, so a blocked
    /// spawn ends the game. Returns false if the game is not running or the spawn collided.
    pub fn spawn_kind(&mut self, kind: PieceKind) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        if self.next.is_none() {
            self.next = Some(self.generator.next_piece());
        }
        self.drop_timer.start();
        self.enter_piece(NextPiece::new(kind))
    }

    fn try_place(&mut self, shape: Shape, dx: i8, dy: i8) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let (x, y) = (active.x + dx, active.y + dy);
        if !self.board.fits(&shape, x, y) {
            return false;
        }
        self.active = Some(Tetromino {
            shape,
            x,
            y,
            ..active
        });
        true
    }

    fn shift(&mut self, dx: i8, dy: i8) -> bool {
        match self.active {
            Some(active) => self.try_place(active.shape, dx, dy),
            None => false,
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.run_state.is_running() && self.shift(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.run_state.is_running() && self.shift(1, 0)
    }

    /// Move down one row, or lock the piece where it stands if it cannot fall.
    pub fn move_down(&mut self) -> bool {
        if !self.run_state.is_running() || self.active.is_none() {
            return false;
        }
        if !self.shift(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Rotate clockwise in place; discarded if the rotated shape collides.
    pub fn rotate(&mut self) -> bool {
        if !self.run_state.is_running() {
            return false;
        }
        match self.active {
            Some(active) => self.try_place(active.shape.rotated(), 0, 0),
            None => false,
        }
    }

    /// Drop to the lowest valid row, then lock (after the configured grace period).
    ///
    /// A second hard drop during the grace period locks immediately.
    pub fn hard_drop(&mut self) -> bool {
        if !self.run_state.is_running() || self.active.is_none() {
            return false;
        }
        while self.shift(0, 1) {}

        if self.config.hard_drop_grace_ms == 0 || self.pending_lock_ms.is_some() {
            self.lock_piece();
        } else {
            self.pending_lock_ms = Some(self.config.hard_drop_grace_ms);
        }
        true
    }

    /// Lock the active piece onto the board, clear rows, score, and promote the next piece.
    pub fn lock_piece(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        self.pending_lock_ms = None;

        self.board
            .commit(&active.shape, active.x, active.y, active.color);
        let cleared = self.board.clear_completed_rows() as u32;

        let score_delta = LINE_CLEAR_SCORE * cleared;
        self.score += score_delta;
        self.lines += cleared;
        self.last_lock = Some(LockEvent {
            kind: active.kind,
            lines_cleared: cleared,
            score_delta,
            score: self.score,
        });

        let promoted = match self.next.take() {
            Some(next) => next,
            None => self.generator.next_piece(),
        };
        self.next = Some(self.generator.next_piece());
        self.enter_piece(promoted);
    }

    /// Toggle between Running and Paused. Pausing cancels the drop timer,
    /// resuming re-arms it with a fresh period. No effect after game over.
    pub fn toggle_pause(&mut self) -> bool {
        match self.run_state {
            RunState::Running => {
                self.run_state = RunState::Paused;
                self.drop_timer.cancel();
                true
            }
            RunState::Paused => {
                self.run_state = RunState::Running;
                self.drop_timer.start();
                true
            }
            RunState::GameOver => false,
        }
    }

    /// Start over: empty board, zero score, fresh pieces, Running.
    ///
    /// The generator keeps its stream, so the new game gets a new sequence.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.last_lock = None;
        self.pending_lock_ms = None;
        self.active = None;
        self.next = None;
        self.run_state = RunState::Running;
        self.drop_timer.cancel();
        self.start();
    }

    /// Advance simulated time.
    ///
    /// While Running, a pending hard-drop lock resolves first (the piece settles to the
    /// lowest valid row before locking); otherwise each completed
    /// drop period moves the piece down one row. Returns true if anything moved or locked.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.run_state.is_running() {
            return false;
        }

        if let Some(remaining) = self.pending_lock_ms {
            if elapsed_ms >= remaining {
                // A slide during the grace may have left the piece over a gap.
                while self.shift(0, 1) {}
                self.lock_piece();
                return true;
            }
            self.pending_lock_ms = Some(remaining - elapsed_ms);
            return false;
        }

        let periods = self.drop_timer.advance(elapsed_ms);
        let mut changed = false;
        for _ in 0..periods {
            if !self.run_state.is_running() || self.pending_lock_ms.is_some() {
                break;
            }
            changed |= self.move_down();
        }
        changed
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::MoveDown => self.move_down(),
            GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Reset => {
                self.reset();
                true
            }
        }
    }

    /// Single dispatch point for timer ticks and player commands.
    pub fn handle(&mut self, event: GameEvent) -> bool {
        match event {
            GameEvent::Tick { elapsed_ms } => self.tick(elapsed_ms),
            GameEvent::Action(action) => self.apply_action(action),
        }
    }

    /// Row the active piece would land on after a hard drop
    pub fn ghost_y(&self) -> Option<i8> {
        let active = self.active?;
        let mut y = active.y;
        while self.board.fits(&active.shape, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Compose the settled board with the falling piece into `out`.
    pub fn render_into(&self, out: &mut RenderGrid) {
        self.board.write_grid(out);
        if let Some(active) = self.active {
            overlay_piece(out, &active.shape, active.x, active.y, active.color);
        }
    }

    /// Settled board overlaid with the falling piece, for a presentation layer to draw.
    pub fn render_board(&self) -> RenderGrid {
        let mut grid = EMPTY_GRID;
        self.render_into(&mut grid);
        grid
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active.map(ActiveSnapshot::from);
        out.ghost_y = self.ghost_y();
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.run_state = self.run_state;
        out.lock_pending = self.pending_lock_ms.is_some();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
