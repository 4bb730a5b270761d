// src/puzzle/module.rs

use chrono::{DateTime, Duration, Utc};
use log::debug;
use crate::config::LegendreConfig;
use crate::core::error::{LegendreError, Result};
use crate::core::static_random::StaticRandom;
use crate::integer_math::prime_table::PrimeTable;
use crate::puzzle::answer::Answer;
use crate::puzzle::command::parse_command;
use crate::puzzle::sink::{LogSink, ModuleLogger};
use crate::reduction::engine::ReductionEngine;
use crate::reduction::trace::TraceEntry;

const BLANK_DISPLAY: &str = "---";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressOutcome {
    /// No answer is being accepted right now.
    Ignored,
    Solved,
    /// Wrong answer; a new round is scheduled.
    Strike,
}

/// The values shown to the player and the press that solves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub top: i64,
    pub modulus: i64,
    pub expected: Answer,
}

/// Headless puzzle: generates rounds, checks presses and schedules a fresh
/// round after a strike. Time is always supplied by the caller.
pub struct LegendreModule<'a, S: LogSink> {
    logger: ModuleLogger<S>,
    engine: ReductionEngine<'a>,
    rng: StaticRandom,
    min_prime_index: usize,
    strike_delay: Duration,
    round: Option<Round>,
    accepting: bool,
    solved: bool,
    pending_retry: Option<DateTime<Utc>>,
    top_display: String,
    bottom_display: String,
}

impl<'a, S: LogSink> LegendreModule<'a, S> {
    pub fn new(id: u32, primes: &'a PrimeTable, config: &LegendreConfig, sink: S) -> Self {
        Self::with_rng(id, primes, config, StaticRandom::from_option(config.puzzle.seed), sink)
    }

    pub fn with_rng(id: u32, primes: &'a PrimeTable, config: &LegendreConfig, rng: StaticRandom, sink: S) -> Self {
        LegendreModule {
            logger: ModuleLogger::new(id, sink),
            engine: ReductionEngine::with_limit(primes, config.engine.max_generations),
            rng,
            min_prime_index: config.puzzle.min_prime_index,
            strike_delay: Duration::milliseconds(config.puzzle.strike_delay_ms),
            round: None,
            accepting: false,
            solved: false,
            pending_retry: None,
            top_display: BLANK_DISPLAY.to_string(),
            bottom_display: BLANK_DISPLAY.to_string(),
        }
    }

    pub fn id(&self) -> u32 {
        self.logger.id()
    }

    pub fn round(&self) -> Option<Round> {
        self.round
    }

    pub fn is_accepting(&self) -> bool {
        self.accepting
    }

    pub fn is_solved(&self) -> bool {
        self.solved
    }

    pub fn pending_retry(&self) -> Option<DateTime<Utc>> {
        self.pending_retry
    }

    /// Top and bottom display texts.
    pub fn displays(&self) -> (&str, &str) {
        (&self.top_display, &self.bottom_display)
    }

    pub fn logger(&self) -> &ModuleLogger<S> {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut ModuleLogger<S> {
        &mut self.logger
    }

    pub fn activate(&mut self) -> Result<()> {
        self.generate_values()
    }

    fn generate_values(&mut self) -> Result<()> {
        let primes = self.engine.primes();
        // index 0 is 2, which is never a valid modulus
        let min_index = self.min_prime_index.max(1);
        if min_index >= primes.len() {
            return Err(LegendreError::EmptyPrimeRange { min_index, bound: primes.bound() });
        }

        let index = self.rng.next_range(min_index, primes.len());
        let modulus = primes
            .get(index)
            .ok_or(LegendreError::EmptyPrimeRange { min_index, bound: primes.bound() })?;
        let top = self.rng.next_range(1, modulus);
        debug!("Module #{} drew prime index {}", self.logger.id(), index);

        let evaluation = self.engine.reduce(top, modulus)?;
        let expected = Answer::from_residue(evaluation.is_residue);

        self.top_display = format!("{:>3}", top);
        self.bottom_display = format!("{:>3}", modulus);

        self.logger.log(&format!("Generated values {}, {}", top, modulus));
        self.logger.log("One possible solution:");
        for entry in evaluation.trace.entries() {
            match entry {
                TraceEntry::Start(_) => self.logger.log(&format!("  {}", entry)),
                _ => self.logger.log(&entry.to_string()),
            }
        }
        self.logger.log(&format!("{}.  Expected press: \"{}\"", evaluation.verdict(), expected.label()));

        self.round = Some(Round { top, modulus, expected });
        self.accepting = true;
        Ok(())
    }

    pub fn press(&mut self, answer: Answer, now: DateTime<Utc>) -> PressOutcome {
        self.logger.log(&format!("Pressed button \"{}\"", answer.label()));

        let expected = match self.round {
            Some(round) if self.accepting => round.expected,
            _ => return PressOutcome::Ignored,
        };

        self.accepting = false;
        if answer == expected {
            self.solved = true;
            self.logger.log("You pressed the correct button!  Module disarmed.");
            PressOutcome::Solved
        } else {
            self.logger.log("Strike!  You pressed the wrong button.  Generating new numbers...");
            self.top_display = BLANK_DISPLAY.to_string();
            self.bottom_display = BLANK_DISPLAY.to_string();
            self.pending_retry = Some(now + self.strike_delay);
            PressOutcome::Strike
        }
    }

    pub fn handle_command(&mut self, command: &str, now: DateTime<Utc>) -> Result<PressOutcome> {
        let answer = parse_command(command).ok_or_else(|| LegendreError::UnknownCommand(command.to_string()))?;
        Ok(self.press(answer, now))
    }

    /// Starts the scheduled round once its time has come. Returns true if it did.
    pub fn tick(&mut self, now: DateTime<Utc>) -> Result<bool> {
        match self.pending_retry {
            Some(due) if now >= due => {
                self.pending_retry = None;
                self.generate_values()?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}
