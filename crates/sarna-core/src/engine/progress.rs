/// Events emitted while a selection workflow runs.
#[derive(Debug, Clone)]
pub enum Progress {
    PhaseStart { name: &'static str },
    PhaseFinish,

    ScanStart { total_windows: u64 },
    WindowScanned,
    ScanFinish,

    Message(String),
}

pub type ProgressCallback<'a> = Box<dyn Fn(Progress) + Send + Sync + 'a>;

/// Forwards [`Progress`] events to an optional callback.
///
/// The callback must be `Sync`: with the `parallel` feature the window scan reports from
/// worker threads.
#[derive(Default)]
pub struct ProgressReporter<'a> {
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> ProgressReporter<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: ProgressCallback<'a>) -> Self {
        Self {
            callback: Some(callback),
        }
    }

    #[inline]
    pub fn report(&self, event: Progress) {
        if let Some(cb) = &self.callback {
            cb(event);
        }
    }

    /// Runs `f` between a `PhaseStart` and a `PhaseFinish` event.
    ///
    /// `PhaseFinish` is only reported when `f` succeeds.
    pub fn phase<T, E>(
        &self,
        name: &'static str,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E> {
        self.report(Progress::PhaseStart { name });
        let value = f()?;
        self.report(Progress::PhaseFinish);
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn recording_reporter() -> (ProgressReporter<'static>, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = events.clone();
        let reporter = ProgressReporter::with_callback(Box::new(move |event| {
            sink.lock().unwrap().push(format!("{:?}", event));
        }));
        (reporter, events)
    }

    #[test]
    fn reporter_without_callback_ignores_events() {
        let reporter = ProgressReporter::new();
        reporter.report(Progress::WindowScanned);
    }

    #[test]
    fn reporter_forwards_events_in_order() {
        let (reporter, events) = recording_reporter();
        reporter.report(Progress::ScanStart { total_windows: 2 });
        reporter.report(Progress::WindowScanned);
        reporter.report(Progress::ScanFinish);

        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec![
                "ScanStart { total_windows: 2 }",
                "WindowScanned",
                "ScanFinish"
            ]
        );
    }

    #[test]
    fn phase_brackets_successful_work() {
        let (reporter, events) = recording_reporter();
        let value: Result<u32, ()> = reporter.phase("Work", || Ok(7));

        assert_eq!(value, Ok(7));
        let events = events.lock().unwrap();
        assert_eq!(
            *events,
            vec!["PhaseStart { name: \"Work\" }", "PhaseFinish"]
        );
    }

    #[test]
    fn phase_skips_finish_event_on_error() {
        let (reporter, events) = recording_reporter();
        let value: Result<(), &str> = reporter.phase("Work", || Err("boom"));

        assert_eq!(value, Err("boom"));
        assert_eq!(events.lock().unwrap().len(), 1);
    }
}
