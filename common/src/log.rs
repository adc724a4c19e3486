//! Status macros.
//!
//! Each macro emits a `tracing` event on its own target so the terminal
//! formatter can pick the right prefix without inspecting the message.

pub const SUCCESS_TARGET: &str = "rentr::success";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::tracing::warn!($($arg)*)
    };
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Metadata, Subscriber};

    use super::SUCCESS_TARGET;

    /// Records the target of every event it sees.
    #[derive(Clone, Default)]
    struct Targets(Arc<Mutex<Vec<String>>>);

    impl Subscriber for Targets {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn new_span(&self, _span: &Attributes<'_>) -> Id {
            Id::from_u64(1)
        }

        fn record(&self, _span: &Id, _values: &Record<'_>) {}

        fn record_follows_from(&self, _span: &Id, _follows: &Id) {}

        fn event(&self, event: &Event<'_>) {
            self.0.lock().unwrap().push(event.metadata().target().to_string());
        }

        fn enter(&self, _span: &Id) {}

        fn exit(&self, _span: &Id) {}
    }

    #[test]
    fn test_success_uses_success_target() {
        let targets = Targets::default();

        tracing::subscriber::with_default(targets.clone(), || {
            crate::success!("3 vehicles registered");
            crate::info!("plain info");
        });

        let seen = targets.0.lock().unwrap();
        assert_eq!(seen.len(), 2);
        assert_eq!(seen[0], SUCCESS_TARGET);
        assert_ne!(seen[1], SUCCESS_TARGET);
    }
}
