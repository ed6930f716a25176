//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date** used as "today" by the
//! current-month helpers, and the default for whether Catholic Easter counts
//! as a holiday when a helper is called without an explicit flag.  It is a
//! process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! The core calendar and reshaping functions never read these settings; they
//! take every input as a parameter.

use std::sync::{Mutex, OnceLock};

#[derive(Debug, Default)]
struct State {
    evaluation_date: Option<i32>,
    include_catholic_easter: bool,
}

/// Process-wide settings used by the common-lib convenience helpers.
pub struct Settings {
    state: Mutex<State>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            state: Mutex::new(State::default()),
        })
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut State) -> R) -> R {
        // A panic while holding the lock cannot leave `State` half-written.
        let mut guard = match self.state.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        f(&mut guard)
    }

    /// Return the evaluation date serial number (1 = January 1, 1900).
    ///
    /// Returns `None` if no evaluation date has been set.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        self.with_state(|s| s.evaluation_date)
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        self.with_state(|s| s.evaluation_date = Some(serial));
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        self.with_state(|s| s.evaluation_date = None);
    }

    /// Default for including Catholic Easter among holidays (initially `false`).
    pub fn include_catholic_easter(&self) -> bool {
        self.with_state(|s| s.include_catholic_easter)
    }

    /// Change the default for including Catholic Easter among holidays.
    pub fn set_include_catholic_easter(&self, include: bool) {
        self.with_state(|s| s.include_catholic_easter = include);
    }
}

/// RAII guard that sets the evaluation date and restores the previous value
/// on drop.
///
/// ```
/// use cl_core::settings::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(38_718);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(38_718));
/// }
/// ```
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_date_restores_previous() {
        let settings = Settings::instance();
        {
            let _outer = ScopedEvaluationDate::new(40_000);
            {
                let _inner = ScopedEvaluationDate::new(41_000);
                assert_eq!(settings.evaluation_date_serial(), Some(41_000));
            }
            assert_eq!(settings.evaluation_date_serial(), Some(40_000));
        }
    }

    #[test]
    fn catholic_easter_default_is_off() {
        // Only this test touches the flag.
        let settings = Settings::instance();
        assert!(!settings.include_catholic_easter());
        settings.set_include_catholic_easter(true);
        assert!(settings.include_catholic_easter());
        settings.set_include_catholic_easter(false);
    }
}
