//! Gear display: digits 0-8 as block art, and the shift animation.

use std::io::{BufRead, Write};
use std::str::FromStr;
use std::thread;
use std::time::Duration;

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use thiserror::Error;
use tracing::{debug, trace};

use crate::console::Prompter;
use crate::core::RaceError;

/// How long each gear stays on screen during a shift.
pub const DEFAULT_SHIFT_DELAY: Duration = Duration::from_secs(2);

pub const MAX_GEAR: u8 = 8;

const PATTERNS: [[&str; 5]; 9] = [
    ["####", "#  #", "#  #", "#  #", "####"],
    ["   #", "   #", "   #", "   #", "   #"],
    ["####", "   #", "####", "#   ", "####"],
    ["####", "   #", "####", "   #", "####"],
    ["#  #", "#  #", "####", "   #", "   #"],
    ["####", "#   ", "####", "   #", "####"],
    ["####", "#   ", "####", "#  #", "####"],
    ["####", "   #", "   #", "   #", "   #"],
    ["####", "#  #", "####", "#  #", "####"],
];

/// A rejected gear answer.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GearError {
    #[error("Invalid input. Please enter a number between 0 and 8.")]
    NotADigit(String),

    #[error("Invalid range. Please enter a number between 0 and 8.")]
    OutOfRange(u32),
}

/// A gear in `0..=8`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Gear(u8);

impl Gear {
    pub fn new(n: u32) -> Result<Self, GearError> {
        if n > u32::from(MAX_GEAR) {
            return Err(GearError::OutOfRange(n));
        }
        Ok(Gear(n as u8))
    }

    pub fn number(self) -> u8 {
        self.0
    }

    pub fn pattern(self) -> [&'static str; 5] {
        PATTERNS[self.0 as usize]
    }
}

impl FromStr for Gear {
    type Err = GearError;

    /// Digits only: no sign, no whitespace inside.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(GearError::NotADigit(s.to_string()));
        }
        let n = s.parse::<u32>().map_err(|_| GearError::OutOfRange(u32::MAX))?;
        Gear::new(n)
    }
}

/// The five rows of `n`'s block art.
pub fn gear_pattern(n: u32) -> Result<[&'static str; 5], GearError> {
    Gear::new(n).map(Gear::pattern)
}

/// Draws gears to a terminal, clearing between frames.
#[derive(Debug)]
pub struct GearAnimator<W> {
    out: W,
    delay: Duration,
}

impl<W: Write> GearAnimator<W> {
    pub fn new(out: W, delay: Duration) -> Self {
        Self { out, delay }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    pub fn show(&mut self, gear: Gear) -> std::io::Result<()> {
        for row in gear.pattern() {
            writeln!(self.out, "{row}")?;
        }
        self.out.flush()
    }

    pub fn clear(&mut self) -> std::io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    /// Show `from`, wait, clear, show `to`, wait, clear.
    pub fn animate_shift(&mut self, from: Gear, to: Gear) -> std::io::Result<()> {
        debug!(from = from.number(), to = to.number(), "gear shift");
        for gear in [from, to] {
            self.show(gear)?;
            thread::sleep(self.delay);
            self.clear()?;
        }
        Ok(())
    }
}

fn ask_gear<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, prompt: &str) -> Result<Gear, RaceError> {
    loop {
        let line = prompter.read_line(prompt)?;
        match line.parse::<Gear>() {
            Ok(gear) => return Ok(gear),
            Err(err) => {
                trace!(answer = %line, %err, "rejected gear");
                prompter.say(&err.to_string())?;
            }
        }
    }
}

/// Interactive shift simulator. Loops until the answer to "continue?" is
/// exactly "no" (any other answer keeps going).
pub fn run_gear_session<R, W, A>(
    prompter: &mut Prompter<R, W>,
    animator: &mut GearAnimator<A>,
) -> Result<(), RaceError>
where
    R: BufRead,
    W: Write,
    A: Write,
{
    loop {
        prompter.say("=== Gear Shift Simulator ===")?;
        let from = ask_gear(prompter, "Enter current gear (0 to 8): ")?;
        let to = ask_gear(prompter, "Enter next gear (0 to 8): ")?;

        animator.clear()?;
        animator.animate_shift(from, to)?;

        let answer = prompter.read_line("Do you want to continue? (yes/no): ")?;
        if answer.eq_ignore_ascii_case("no") {
            prompter.say("Exiting program.")?;
            return Ok(());
        }
        animator.clear()?;
    }
}
