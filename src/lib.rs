//! # race-duel
//!
//! A turn-based two-driver racing duel played in the terminal.
//!
//! ## Design Principles
//!
//! 1. **Rules Behind a Trait**: both rule variants implement `TurnRules`.
//!    The match controller never interprets moves or defenses itself.
//!
//! 2. **Choices Behind a Trait**: every decision goes through a `Pilot`.
//!    Humans, the automated opponent and scripted test pilots are
//!    interchangeable on either side.
//!
//! 3. **Deterministic When Seeded**: all randomness flows from one seeded
//!    `RaceRng`, forked per pilot.
//!
//! ## Rule Variants
//!
//! - **Immediate counter**: the active driver attacks every turn; the
//!   defender may answer with a defense that mitigates that one attack.
//!
//! - **Declared defense**: the active driver either attacks or declares a
//!   defense, which then mitigates the opponent's following attacks.
//!
//! ## Modules
//!
//! - `core`: sides, drivers, match state, configuration, RNG, errors
//! - `catalog`: moves, defenses and the driver roster
//! - `rules`: `TurnRules` and the two rule variants
//! - `pilot`: human, automated and scripted decision makers
//! - `game`: the match controller and its events
//! - `console`: prompts, menus and commentary
//! - `toys`: the gear display and the Caesar codec

pub mod core;
pub mod catalog;
pub mod rules;
pub mod pilot;
pub mod game;
pub mod console;
pub mod toys;

// Re-export commonly used types
pub use crate::core::{
    Side, SideMap,
    RaceRng,
    MatchConfig, RuleSet, DefensePersistence,
    Driver, MatchState,
    InputError, RaceError,
};

pub use crate::catalog::{Action, ActionRef, Defense, DriverKind, Move, Performable};

pub use crate::rules::{
    rules_for, TurnRules, DeclaredDefense, ImmediateCounter,
    DefenseOutcome, MatchResult, MatchStatus, TurnOutcome, TurnReport,
};

pub use crate::pilot::{ActionPolicy, AutoPilot, BestDefense, HumanPilot, Pilot, Scripted, UniformRandom};

pub use crate::game::{Commentator, MatchBuilder, MatchController, MatchEvent, NullCommentator, Step};

pub use crate::console::{choose_driver, ConsoleCommentator, Prompter};

pub use crate::toys::{CaesarCodec, CodecError, Gear, GearAnimator, GearError};
