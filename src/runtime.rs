use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::time::Duration;

use crossterm::event::{self, Event as CtEvent, KeyEvent};

/// What the app loop reacts to: a keystroke, a terminal resize, or the
/// periodic tick that refreshes elapsed time while a run is active.
#[derive(Clone, Debug)]
pub enum TrainerEvent {
    Key(KeyEvent),
    Resize,
    Tick,
}

/// Single source of `TrainerEvent`s. Terminal input is forwarded from a
/// reader thread; quiet stretches surface as ticks, so the tick cadence is
/// simply how long `next` is willing to wait for input.
pub struct EventPump {
    rx: Receiver<TrainerEvent>,
    tick_every: Duration,
}

impl EventPump {
    /// Pump fed by crossterm's blocking reader. Key and resize events pass
    /// through; everything else (mouse, focus) is dropped here so the app
    /// loop never sees it.
    pub fn terminal(tick_every: Duration) -> Self {
        let (tx, rx) = mpsc::channel();

        std::thread::spawn(move || loop {
            match event::read() {
                Ok(CtEvent::Key(key)) => {
                    if tx.send(TrainerEvent::Key(key)).is_err() {
                        break;
                    }
                }
                Ok(CtEvent::Resize(_, _)) => {
                    if tx.send(TrainerEvent::Resize).is_err() {
                        break;
                    }
                }
                Ok(_) => {}
                Err(_) => break,
            }
        });

        Self { rx, tick_every }
    }

    /// Pump with no reader thread; the returned sender injects events.
    /// Used by headless tests to script sessions without a TTY.
    pub fn detached(tick_every: Duration) -> (Self, Sender<TrainerEvent>) {
        let (tx, rx) = mpsc::channel();
        (Self { rx, tick_every }, tx)
    }

    /// Blocks for the next event, at most one tick interval. A timeout (or
    /// a hung-up sender) becomes a `Tick`, which keeps the loop breathing
    /// at the tick rate whenever the keyboard is quiet.
    pub fn next(&self) -> TrainerEvent {
        match self.rx.recv_timeout(self.tick_every) {
            Ok(ev) => ev,
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => {
                TrainerEvent::Tick
            }
        }
    }
}
