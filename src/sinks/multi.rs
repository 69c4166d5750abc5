//! Fan-out sink delivering each line to several child sinks

use crate::core::{OutputSink, Result};
use std::panic::{catch_unwind, AssertUnwindSafe};

/// Owns an ordered list of sinks and writes every line to each of them.
///
/// **Per-sink isolation**: a child that returns an error or panics is reported
/// on stderr and the remaining children still receive the line.
pub struct MultiSink {
    sinks: Vec<Box<dyn OutputSink>>,
}

impl MultiSink {
    pub fn new(sinks: Vec<Box<dyn OutputSink>>) -> Self {
        Self { sinks }
    }

    /// Append another child; children receive lines in the order they were added
    ///
    /// # Example
    ///
    /// ```
    /// use layered_logger::prelude::*;
    ///
    /// let sink = MultiSink::default()
    ///     .with_sink(ConsoleSink::new())
    ///     .with_sink(NetworkSink::new("syslog://localhost:514"));
    /// assert_eq!(sink.len(), 2);
    /// ```
    #[must_use]
    pub fn with_sink<S: OutputSink + 'static>(mut self, sink: S) -> Self {
        self.sinks.push(Box::new(sink));
        self
    }

    pub fn len(&self) -> usize {
        self.sinks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sinks.is_empty()
    }
}

impl Default for MultiSink {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

fn panic_message(panic_info: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic_info.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = panic_info.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

impl OutputSink for MultiSink {
    fn output(&mut self, text: &str) -> Result<()> {
        for (idx, sink) in self.sinks.iter_mut().enumerate() {
            match catch_unwind(AssertUnwindSafe(|| sink.output(text))) {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!("[LOGGER ERROR] Sink #{} ({}) failed: {}", idx, sink.name(), e);
                }
                Err(panic_info) => {
                    eprintln!(
                        "[LOGGER CRITICAL] Sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        idx,
                        sink.name(),
                        panic_message(&*panic_info)
                    );
                }
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let mut first_error = None;
        for sink in self.sinks.iter_mut() {
            if let Err(e) = sink.flush() {
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "multi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    type Journal = Arc<Mutex<Vec<(String, String)>>>;

    struct Tap {
        label: String,
        journal: Journal,
    }

    impl OutputSink for Tap {
        fn output(&mut self, text: &str) -> Result<()> {
            self.journal.lock().push((self.label.clone(), text.to_string()));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            &self.label
        }
    }

    struct Failing;

    impl OutputSink for Failing {
        fn output(&mut self, _text: &str) -> Result<()> {
            Err(LoggerError::Io(std::io::Error::other("refused")))
        }

        fn flush(&mut self) -> Result<()> {
            Err(LoggerError::Io(std::io::Error::other("refused")))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct Panicking;

    impl OutputSink for Panicking {
        fn output(&mut self, _text: &str) -> Result<()> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn tap(label: &str, journal: &Journal) -> Tap {
        Tap {
            label: label.to_string(),
            journal: Arc::clone(journal),
        }
    }

    #[test]
    fn test_registration_order() {
        let journal = Journal::default();
        let mut sink = MultiSink::default()
            .with_sink(tap("a", &journal))
            .with_sink(tap("b", &journal))
            .with_sink(tap("c", &journal));

        sink.output("hello").expect("output");

        let labels: Vec<String> = journal.lock().iter().map(|(l, _)| l.clone()).collect();
        assert_eq!(labels, vec!["a", "b", "c"]);
        assert!(journal.lock().iter().all(|(_, t)| t == "hello"));
        assert_eq!(sink.len(), 3);
    }

    #[test]
    fn test_empty_multi_accepts_output() {
        let mut sink = MultiSink::default();
        assert!(sink.is_empty());
        assert!(sink.output("nobody listens").is_ok());
        assert!(sink.flush().is_ok());
    }

    #[test]
    fn test_failing_child_does_not_stop_delivery() {
        let journal = Journal::default();
        let sinks: Vec<Box<dyn OutputSink>> = vec![
            Box::new(Failing) as Box<dyn OutputSink>,
            Box::new(tap("after", &journal)),
        ];
        let mut sink = MultiSink::new(sinks);

        assert!(sink.output("still delivered").is_ok());
        assert_eq!(
            *journal.lock(),
            vec![("after".to_string(), "still delivered".to_string())]
        );
    }

    #[test]
    fn test_panicking_child_is_isolated() {
        let journal = Journal::default();
        let sinks: Vec<Box<dyn OutputSink>> = vec![
            Box::new(tap("before", &journal)) as Box<dyn OutputSink>,
            Box::new(Panicking),
            Box::new(tap("after", &journal)),
        ];
        let mut sink = MultiSink::new(sinks);

        assert!(sink.output("x").is_ok());
        assert_eq!(journal.lock().len(), 2);
    }

    #[test]
    fn test_flush_attempts_all_and_reports_error() {
        let mut sink = MultiSink::default().with_sink(Failing).with_sink(Failing);
        assert!(sink.flush().is_err());
    }
}
