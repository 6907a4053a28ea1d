use crate::verify::VerificationResult;
use std::path::PathBuf;

/// Observations emitted while a run is in flight. Purely informational.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Emitted after every input path; `index` is 1-based.
    Processed { index: usize, total: usize },
    Hashed { path: PathBuf, crc: u32 },
    Skipped { path: PathBuf },
    Unreadable { path: PathBuf, error: String },
    Checked(VerificationResult),
}

pub trait Reporter {
    fn report(&mut self, event: Event);
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _event: Event) {}
}

/// Keeps every event, in order.
#[derive(Clone, Debug, Default)]
pub struct Recorder {
    pub events: Vec<Event>,
}

impl Reporter for Recorder {
    fn report(&mut self, event: Event) {
        self.events.push(event);
    }
}

impl<F: FnMut(Event)> Reporter for F {
    fn report(&mut self, event: Event) {
        self(event)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Progress {
    done: usize,
    total: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        Self { done: 0, total }
    }

    /// Count one more processed item and return its `Processed` event.
    pub fn tick(&mut self) -> Event {
        self.done += 1;
        Event::Processed { index: self.done, total: self.total }
    }
}

pub fn percent(done: usize, total: usize) -> f64 {
    if total > 0 {
        (done as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}
