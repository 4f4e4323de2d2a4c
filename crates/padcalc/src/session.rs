//! Calculator session: owns the accumulator state and notifies observers
//!
//! The accumulator itself is pure. Anything that reacts to a change (window
//! title, result logging) subscribes here as a [`StateObserver`].

use tracing::{debug, info, warn};

use crate::core::{CalcState, KeypadAction};

/// Title used when no calculator is attached
pub const DEFAULT_TITLE: &str = "Calculator";

/// Receives every state transition of a [`Calculator`]
pub trait StateObserver {
    /// Called once when the observer is attached, with the current state
    fn on_attach(&mut self, _current: &CalcState) {}

    /// Called after each keypad action
    fn on_change(&mut self, previous: &CalcState, current: &CalcState);
}

impl<F> StateObserver for F
where
    F: FnMut(&CalcState, &CalcState),
{
    fn on_change(&mut self, previous: &CalcState, current: &CalcState) {
        self(previous, current);
    }
}

/// A running calculator: one state plus its observers
pub struct Calculator {
    state: CalcState,
    observers: Vec<Box<dyn StateObserver>>,
}

impl std::fmt::Debug for Calculator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Calculator")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator in its mount-time state with no observers
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: CalcState::new(),
            observers: Vec::new(),
        }
    }

    /// Builder form of [`Calculator::add_observer`]
    #[must_use]
    pub fn with_observer(mut self, observer: impl StateObserver + 'static) -> Self {
        self.add_observer(observer);
        self
    }

    /// Subscribes an observer to state changes
    pub fn add_observer(&mut self, observer: impl StateObserver + 'static) {
        let mut observer = Box::new(observer);
        observer.on_attach(&self.state);
        self.observers.push(observer);
    }

    /// Number of attached observers
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Current state
    #[must_use]
    pub fn state(&self) -> &CalcState {
        &self.state
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Applies one keypad action and notifies observers
    pub fn press(&mut self, action: KeypadAction) -> &CalcState {
        let next = if action == KeypadAction::Equals {
            let (next, outcome) = self.state.evaluate_detailed();
            if let Err(e) = outcome {
                warn!(expression = %self.state.display(), error = %e, "evaluation failed");
            }
            next
        } else {
            self.state.apply(action)
        };

        debug!(
            key = %action.to_char(),
            before = %self.state.display(),
            after = %next.display(),
            "key press"
        );

        let previous = std::mem::replace(&mut self.state, next);
        for observer in &mut self.observers {
            observer.on_change(&previous, &self.state);
        }
        &self.state
    }

    /// Applies a sequence of actions
    pub fn press_all(&mut self, actions: impl IntoIterator<Item = KeypadAction>) -> &CalcState {
        for action in actions {
            self.press(action);
        }
        &self.state
    }
}

/// Keeps a window title in sync with the display.
///
/// The sink is called with `"Calc: <display>"` whenever the display changes,
/// and with [`DEFAULT_TITLE`] when the observer is dropped.
pub struct TitleObserver<F: FnMut(&str)> {
    title: String,
    sink: F,
}

impl<F: FnMut(&str)> std::fmt::Debug for TitleObserver<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TitleObserver")
            .field("title", &self.title)
            .finish_non_exhaustive()
    }
}

impl<F: FnMut(&str)> TitleObserver<F> {
    /// Creates an observer writing titles into `sink`
    pub fn new(sink: F) -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            sink,
        }
    }

    /// Title for a given display text
    #[must_use]
    pub fn title_for(display: &str) -> String {
        format!("Calc: {display}")
    }

    /// Last title written to the sink
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    fn set(&mut self, title: String) {
        (self.sink)(&title);
        self.title = title;
    }
}

impl<F: FnMut(&str)> StateObserver for TitleObserver<F> {
    fn on_attach(&mut self, current: &CalcState) {
        self.set(Self::title_for(current.display()));
    }

    fn on_change(&mut self, previous: &CalcState, current: &CalcState) {
        if previous.display() != current.display() {
            self.set(Self::title_for(current.display()));
        }
    }
}

impl<F: FnMut(&str)> Drop for TitleObserver<F> {
    fn drop(&mut self) {
        (self.sink)(DEFAULT_TITLE);
    }
}

/// Logs each new non-empty result through `tracing`
#[derive(Debug, Default)]
pub struct ResultLogger {
    logged: usize,
}

impl ResultLogger {
    /// Creates a result logger
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of results logged so far
    #[must_use]
    pub fn logged(&self) -> usize {
        self.logged
    }
}

impl StateObserver for ResultLogger {
    fn on_change(&mut self, previous: &CalcState, current: &CalcState) {
        if current.last_result() != previous.last_result() && !current.last_result().is_empty() {
            self.logged += 1;
            info!(result = %current.last_result(), "last calculation");
        }
    }
}
