//! Terminal entry point.

use std::io::{self, BufRead, Read};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use race_duel::toys::{run_gear_session, GearAnimator, DEFAULT_SHIFT_DELAY};
use race_duel::{
    choose_driver, CaesarCodec, ConsoleCommentator, DefensePersistence, DriverKind, HumanPilot,
    MatchBuilder, MatchConfig, Prompter, RuleSet,
};
use tracing::info;

/// Turn-based racing duel
#[derive(Parser)]
#[command(name = "race-duel")]
#[command(about = "A two-driver racing duel in the terminal", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play a race against the automated opponent
    Race(RaceArgs),

    /// Gear shift display simulator
    Gears {
        /// Milliseconds each gear stays on screen
        #[arg(long, default_value_t = DEFAULT_SHIFT_DELAY.as_millis() as u64)]
        delay_ms: u64,
    },

    /// Caesar-encrypted list codec
    #[command(subcommand)]
    Cipher(CipherCommand),
}

#[derive(Parser)]
struct RaceArgs {
    /// Rule variant: immediate or declared
    #[arg(long)]
    rules: Option<RuleSet>,

    /// Declared defenses: sticky or single-use
    #[arg(long)]
    defense_persistence: Option<DefensePersistence>,

    #[arg(long)]
    tire_health: Option<u32>,

    #[arg(long)]
    fuel: Option<u32>,

    /// Seed for the automated opponent
    #[arg(long)]
    seed: Option<u64>,

    /// Driver menu number (1 or 2); asked interactively when omitted
    #[arg(long)]
    driver: Option<u32>,

    /// Let the automated pilot drive the player side too
    #[arg(long)]
    auto: bool,
}

impl RaceArgs {
    fn config(&self) -> MatchConfig {
        let mut config = MatchConfig::from_env();
        if let Some(rules) = self.rules {
            config = config.with_rules(rules);
        }
        if let Some(persistence) = self.defense_persistence {
            config = config.with_defense_persistence(persistence);
        }
        if let Some(health) = self.tire_health {
            config = config.with_tire_health(health);
        }
        if let Some(fuel) = self.fuel {
            config = config.with_fuel(fuel);
        }
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config
    }

    fn execute(self) -> Result<()> {
        let config = self.config();
        info!(?config, "race config");

        let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
        let kind = match self.driver {
            Some(n) => DriverKind::from_menu_choice(n)
                .with_context(|| format!("no driver number {n}; choose 1 or 2"))?,
            None => choose_driver(&mut prompter)?,
        };

        let mut builder = MatchBuilder::new()
            .config(config.clone())
            .player(kind)
            .commentator(Box::new(ConsoleCommentator::new(io::stdout(), config.rules)));
        if !self.auto {
            builder = builder.player_pilot(Box::new(HumanPilot::new(prompter)));
        }

        builder.build().run()?;
        Ok(())
    }
}

#[derive(Subcommand)]
enum CipherCommand {
    /// Encode one item per stdin line
    Encode {
        #[arg(long, default_value_t = race_duel::toys::DEFAULT_SHIFT, allow_negative_numbers = true)]
        shift: i32,
    },

    /// Decode stdin, printing one item per line
    Decode {
        #[arg(long, default_value_t = race_duel::toys::DEFAULT_SHIFT, allow_negative_numbers = true)]
        shift: i32,
    },
}

impl CipherCommand {
    fn execute(self) -> Result<()> {
        match self {
            CipherCommand::Encode { shift } => {
                let items = io::stdin()
                    .lock()
                    .lines()
                    .collect::<io::Result<Vec<String>>>()
                    .context("reading items from stdin")?;
                println!("{}", CaesarCodec::new(shift).encode(&items));
            }
            CipherCommand::Decode { shift } => {
                let mut encoded = String::new();
                io::stdin()
                    .read_to_string(&mut encoded)
                    .context("reading encoded text from stdin")?;
                let encoded = encoded.trim_end_matches(['\r', '\n']);
                for item in CaesarCodec::new(shift).decode(encoded)? {
                    println!("{item}");
                }
            }
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Race(args) => args.execute(),
        Command::Gears { delay_ms } => {
            let mut prompter = Prompter::new(io::stdin().lock(), io::stdout());
            let mut animator = GearAnimator::new(io::stdout(), Duration::from_millis(delay_ms));
            run_gear_session(&mut prompter, &mut animator)?;
            Ok(())
        }
        Command::Cipher(cmd) => cmd.execute(),
    }
}
