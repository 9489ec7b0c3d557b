//! The animated throw sequence.

use std::cell::{Cell, RefCell};

use serde::Serialize;
use tracing::debug;

use chinchiro_core::{DieRoller, Hand, Triplet, classify};

use crate::config::CupConfig;

/// A finished throw: the settled dice and their hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Round {
    /// The dice the cup settled on.
    pub triplet: Triplet,
    /// The classification of those dice.
    pub hand: Hand,
}

/// A dice cup that runs at most one throw at a time.
///
/// Each cup owns its RNG and its "currently rolling" flag, so separate cups
/// never interfere. Throws are driven on a single thread; the flag is a
/// re-entrancy check, not a lock.
#[derive(Debug)]
pub struct DiceCup {
    config: CupConfig,
    roller: RefCell<DieRoller>,
    rolling: Cell<bool>,
}

impl DiceCup {
    /// Create a cup from its startup configuration.
    pub fn new(config: CupConfig) -> Self {
        let roller = match config.seed {
            Some(seed) => DieRoller::from_seed(seed),
            None => DieRoller::from_os_rng(),
        };
        Self {
            config,
            roller: RefCell::new(roller),
            rolling: Cell::new(false),
        }
    }

    /// The configuration this cup was built with.
    pub fn config(&self) -> &CupConfig {
        &self.config
    }

    /// True while a throw is in progress.
    pub fn is_rolling(&self) -> bool {
        self.rolling.get()
    }

    /// Shake the cup, settle, and classify the final dice.
    ///
    /// Every intermediate frame is passed to `on_frame` for display; the
    /// last frame is the result and is returned instead. Returns `None`
    /// without touching the dice if a throw is already in progress.
    pub async fn start_roll<F>(&self, mut on_frame: F) -> Option<Round>
    where
        F: FnMut(&Triplet),
    {
        let Some(_guard) = RollingGuard::acquire(&self.rolling) else {
            debug!("cup is already rolling, request ignored");
            return None;
        };

        let frames = self.config.frame_count();
        debug!(frames, "cup shaking");

        let mut triplet = self.next_frame().await;
        for _ in 1..frames {
            on_frame(&triplet);
            triplet = self.next_frame().await;
        }

        let hand = classify(&triplet);
        debug!(%triplet, hand = %hand.name, outcome = %hand.outcome, "dice settled");
        Some(Round { triplet, hand })
    }

    async fn next_frame(&self) -> Triplet {
        if !self.config.frame_interval.is_zero() {
            tokio::time::sleep(self.config.frame_interval).await;
        }
        self.roller.borrow_mut().roll_triplet()
    }
}

impl Default for DiceCup {
    fn default() -> Self {
        Self::new(CupConfig::default())
    }
}

/// Holds the rolling flag; clears it when the throw ends or is dropped.
struct RollingGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> RollingGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self { flag })
        }
    }
}

impl Drop for RollingGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
