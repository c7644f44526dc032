//! RNG module - random piece generation
//!
//! Two randomizers are supported:
//!
//! - [`Randomizer::Uniform`]: every draw picks one of the 7 kinds with equal
//!   probability, independent of previous draws. This is the default.
//! - [`Randomizer::SevenBag`]: draws from a shuffled bag holding one of each
//!   kind, refilling when empty, so droughts are bounded.
//!
//! Both are driven by a seeded [`StdRng`], so a seed fully determines the
//! piece sequence.

use arrayvec::ArrayVec;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::shape::Shape;
use crate::types::{Color, PieceKind, BOARD_WIDTH};

/// Piece selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Randomizer {
    #[default]
    Uniform,
    SevenBag,
}

impl Randomizer {
    /// Parse from a config value (`uniform`, `bag7`).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" | "random" => Some(Randomizer::Uniform),
            "bag7" | "7bag" | "bag" => Some(Randomizer::SevenBag),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Randomizer::Uniform => "uniform",
            Randomizer::SevenBag => "bag7",
        }
    }
}

/// A generated piece waiting to enter the board: shape and color, no position yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NextPiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub color: Color,
}

impl NextPiece {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            kind,
            shape: Shape::of(kind),
            color: kind.color(),
        }
    }
}

/// Column at which a shape of `shape_width` spawns, centered on the board.
pub fn spawn_column(shape_width: u8) -> i8 {
    (BOARD_WIDTH / 2) as i8 - (shape_width / 2) as i8
}

/// Seeded piece generator
#[derive(Debug, Clone)]
pub struct PieceGenerator {
    rng: StdRng,
    randomizer: Randomizer,
    /// Remaining pieces of the current bag (SevenBag only), drawn from the back.
    bag: ArrayVec<PieceKind, 7>,
    seed: u64,
}

impl PieceGenerator {
    pub fn new(seed: u64, randomizer: Randomizer) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            randomizer,
            bag: ArrayVec::new(),
            seed,
        }
    }

    /// Draw the next piece kind.
    pub fn next_kind(&mut self) -> PieceKind {
        match self.randomizer {
            Randomizer::Uniform => PieceKind::ALL[self.rng.random_range(0..PieceKind::ALL.len())],
            Randomizer::SevenBag => {
                if self.bag.is_empty() {
                    self.refill_bag();
                }
                match self.bag.pop() {
                    Some(kind) => kind,
                    None => unreachable!("bag was refilled"),
                }
            }
        }
    }

    /// Draw the next piece with its shape and color.
    pub fn next_piece(&mut self) -> NextPiece {
        NextPiece::new(self.next_kind())
    }

    fn refill_bag(&mut self) {
        self.bag.clear();
        self.bag.extend(PieceKind::ALL);
        self.bag.shuffle(&mut self.rng);
    }

    /// Seed this generator was created with (restarts reuse it for a fresh sequence)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new(1, Randomizer::default())
    }
}
