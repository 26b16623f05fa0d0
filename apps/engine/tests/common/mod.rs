#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use loveletter::{Action, Agent, AiError, Card, Deck, GameState, PlayerView};
use once_cell::sync::OnceCell;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::{fmt, EnvFilter};

static LOGGING: OnceCell<()> = OnceCell::new();

// Logging is auto-installed for every test binary that declares `mod common`.
#[ctor::ctor]
fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

pub fn names(n: usize) -> Vec<String> {
    ["Ann", "Bo", "Cy", "Di"][..n]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Table dealt from a deck that starts with `prefix` (burned card, the deal,
/// then draws).
pub fn stacked(n: usize, prefix: &[Card]) -> GameState {
    let deck = Deck::stacked(prefix).expect("valid stacked deck");
    GameState::from_deck(names(n), deck, ChaCha8Rng::seed_from_u64(0)).expect("valid table")
}

/// Everything a [`Scripted`] agent was told.
#[derive(Debug, Default)]
pub struct Transcript {
    pub rounds_started: usize,
    pub seen: Vec<Action>,
    pub last_view: Option<PlayerView>,
}

/// Agent that replays a fixed list of actions and records its notifications.
pub struct Scripted {
    plays: VecDeque<Action>,
    transcript: Arc<Mutex<Transcript>>,
}

impl Scripted {
    pub fn new(plays: impl IntoIterator<Item = Action>) -> (Self, Arc<Mutex<Transcript>>) {
        let transcript = Arc::new(Mutex::new(Transcript::default()));
        let agent = Self {
            plays: plays.into_iter().collect(),
            transcript: Arc::clone(&transcript),
        };
        (agent, transcript)
    }
}

impl Agent for Scripted {
    fn name(&self) -> &str {
        "Scripted"
    }

    fn new_round(&mut self, view: &PlayerView) {
        let mut t = self.transcript.lock().unwrap();
        t.rounds_started += 1;
        t.last_view = Some(view.clone());
    }

    fn see(&mut self, action: &Action, view: &PlayerView) {
        let mut t = self.transcript.lock().unwrap();
        t.seen.push(*action);
        t.last_view = Some(view.clone());
    }

    fn play_card(&mut self, _drawn: Card) -> Result<Action, AiError> {
        self.plays
            .pop_front()
            .ok_or_else(|| AiError::Internal("script exhausted".into()))
    }
}
