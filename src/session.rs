use std::time::Instant;

use crate::diff::{diff_cells, DiffCell};
use crate::feedback::FeedbackTier;
use crate::metrics::Metrics;
use crate::sentences::SentencePool;

/// Lifecycle of one typing run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// No run armed. A sentence may already be on display; typing is not
    /// accepted until `start` is called.
    Idle,
    /// Sentence committed, typed text cleared, timer not yet started.
    Ready,
    /// Timer active; keystrokes advance the run.
    Running,
    /// Timer stopped, either by a completion match or an explicit finish.
    /// The typed text stays editable for review; edits re-derive the diff
    /// and metrics but no longer advance the timer.
    Finished,
}

/// The session controller: owns the target sentence, the typed text, the
/// timer state, and the derived metrics.
///
/// Rendering reads projections (`diff`, `metrics`, `feedback`) and never
/// mutates the sentence or the typed text.
#[derive(Debug)]
pub struct Session {
    pool: SentencePool,
    sentence: Option<String>,
    typed: String,
    phase: Phase,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    metrics: Metrics,
}

impl Session {
    pub fn new(pool: SentencePool) -> Self {
        Self {
            pool,
            sentence: None,
            typed: String::new(),
            phase: Phase::Idle,
            started_at: None,
            finished_at: None,
            metrics: Metrics::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn sentence(&self) -> &str {
        self.sentence.as_deref().unwrap_or("")
    }

    pub fn typed(&self) -> &str {
        &self.typed
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn diff(&self) -> Vec<DiffCell> {
        diff_cells(self.sentence(), &self.typed)
    }

    pub fn feedback(&self) -> FeedbackTier {
        FeedbackTier::rate(self.metrics.accuracy, self.metrics.wpm)
    }

    /// Whether keystrokes reach the typed text. Everything but `Idle`: a
    /// finished run still reflects edits, it just keeps the timer stopped.
    pub fn accepts_input(&self) -> bool {
        matches!(self.phase, Phase::Ready | Phase::Running | Phase::Finished)
    }

    /// Arms a run: ensures a sentence exists, clears the typed text, and
    /// moves to `Ready`. The timer starts on the first keystroke, not here.
    pub fn start(&mut self) {
        if self.sentence.is_none() {
            self.sentence = Some(self.pool.random_sentence());
        }
        self.typed.clear();
        self.started_at = None;
        self.finished_at = None;
        self.metrics = Metrics::default();
        self.phase = Phase::Ready;
    }

    /// Appends one typed character. The first keystroke while `Ready`
    /// records the epoch; later keystrokes never reset it. A running run
    /// finishes automatically on an exact match against the sentence;
    /// keystrokes after that still land (as overflow) with the timer frozen.
    pub fn type_char(&mut self, c: char) {
        if !self.accepts_input() {
            return;
        }

        if self.phase == Phase::Ready {
            self.started_at = Some(Instant::now());
            self.phase = Phase::Running;
        }

        self.typed.push(c);
        self.refresh_metrics();

        if self.phase == Phase::Running && self.typed == self.sentence() {
            self.finish();
        }
    }

    /// Removes the last typed character, if any.
    pub fn backspace(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.typed.pop();
        self.refresh_metrics();
    }

    /// Stops the timer and performs one final metrics pass. Calling this
    /// when already finished only recomputes.
    pub fn finish(&mut self) {
        if self.phase == Phase::Running {
            self.finished_at = Some(Instant::now());
            self.phase = Phase::Finished;
        }
        self.refresh_metrics();
    }

    /// Clears the typed text and zeroes the metrics, keeping the current
    /// sentence (one is chosen only if none exists). Another `start` is
    /// required before typing is accepted again.
    pub fn reset(&mut self) {
        if self.sentence.is_none() {
            self.sentence = Some(self.pool.random_sentence());
        }
        self.clear_run();
    }

    /// Like `reset`, but force-draws a new random sentence from the pool.
    pub fn new_sentence(&mut self) {
        self.sentence = Some(self.pool.random_sentence());
        self.clear_run();
    }

    /// Periodic refresh while the timer is active; elapsed time (and with
    /// it WPM) only advances in `Running`.
    pub fn on_tick(&mut self) {
        if self.phase == Phase::Running {
            self.refresh_metrics();
        }
    }

    pub fn elapsed_secs(&self) -> f64 {
        match (self.started_at, self.finished_at) {
            (Some(start), Some(end)) => end.duration_since(start).as_secs_f64(),
            (Some(start), None) if self.phase == Phase::Running => {
                start.elapsed().as_secs_f64()
            }
            _ => 0.0,
        }
    }

    fn clear_run(&mut self) {
        self.typed.clear();
        self.started_at = None;
        self.finished_at = None;
        self.metrics = Metrics::default();
        self.phase = Phase::Idle;
    }

    fn refresh_metrics(&mut self) {
        self.metrics = Metrics::compute(self.sentence(), &self.typed, self.elapsed_secs());
    }
}
