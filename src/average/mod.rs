//! Time-windowed streaming averages
//!
//! [`WindowAverager`] owns the window trigger and flush protocol shared by
//! both record shapes. Each shape supplies an [`Accumulator`] holding its
//! running sums. A window opens on the first record and closes when a record
//! arrives more than `window_secs` after the record that opened it; the
//! closing record then opens the next window.

pub mod gps;
pub mod sensor;

pub use gps::*;
pub use sensor::*;

/// Running sums for one window of records
pub trait Accumulator: Default {
    type Record: Clone;
    type Average;

    /// Time axis value used for window boundaries
    fn elapsed_seconds(record: &Self::Record) -> f32;

    /// Add a record into the running sums
    fn add(&mut self, record: &Self::Record);

    /// Number of records accumulated so far
    fn count(&self) -> usize;

    /// Average of the accumulated records, or `None` when empty.
    ///
    /// `latest` is the most recent record seen by the averager: the record
    /// that closed the window, or the last record at end of input.
    fn average(&self, latest: &Self::Record) -> Option<Self::Average>;
}

/// Average of one closed window along with its member count
#[derive(Debug, Clone, PartialEq)]
pub struct WindowAverage<A> {
    pub average: A,
    pub count: usize,
}

/// Output produced by [`WindowAverager::observe`]
#[derive(Debug, Clone, PartialEq)]
pub enum WindowOutput<R, A> {
    /// Averaging disabled; the record passes through untouched
    Raw(R),
    /// A window closed and produced this average
    Average(WindowAverage<A>),
}

/// Groups consecutive records into time windows and averages each window
pub struct WindowAverager<A: Accumulator> {
    window_secs: f32,
    window_start: Option<f32>,
    acc: A,
    latest: Option<A::Record>,
}

impl<A: Accumulator> WindowAverager<A> {
    /// Create an averager; `window_secs <= 0` disables averaging
    pub fn new(window_secs: f32) -> Self {
        Self {
            window_secs,
            window_start: None,
            acc: A::default(),
            latest: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.window_secs > 0.0
    }

    pub fn window_secs(&self) -> f32 {
        self.window_secs
    }

    /// Start time of the open window, `None` before the first record
    pub fn window_start(&self) -> Option<f32> {
        self.window_start
    }

    /// Records in the open window
    pub fn pending(&self) -> usize {
        self.acc.count()
    }

    /// Feed one record. Returns at most one line worth of output.
    pub fn observe(&mut self, record: A::Record) -> Option<WindowOutput<A::Record, A::Average>> {
        if !self.is_enabled() {
            return Some(WindowOutput::Raw(record));
        }

        let elapsed = A::elapsed_seconds(&record);
        let opens_window = match self.window_start {
            None => true,
            Some(start) => elapsed - start > self.window_secs,
        };

        let flushed = if opens_window {
            let average = self.flush(&record);
            self.window_start = Some(elapsed);
            average
        } else {
            None
        };

        self.acc.add(&record);
        self.latest = Some(record);
        flushed.map(WindowOutput::Average)
    }

    /// Flush the final partial window at end of input
    pub fn finish(&mut self) -> Option<WindowAverage<A::Average>> {
        let latest = self.latest.take()?;
        self.window_start = None;
        self.flush(&latest)
    }

    fn flush(&mut self, latest: &A::Record) -> Option<WindowAverage<A::Average>> {
        let acc = std::mem::take(&mut self.acc);
        let average = acc.average(latest)?;
        Some(WindowAverage {
            average,
            count: acc.count(),
        })
    }
}
