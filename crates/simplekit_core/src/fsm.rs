//! State Machine Runtime
//!
//! Table-driven state machines for widget interaction states.
//! Supports:
//! - Flat state machines over closed state and event enums
//! - Wildcard transitions that fire from any state
//! - Guards (conditional transitions)
//! - Entry/exit actions
//! - Transition actions
//!
//! Transitions are matched in declaration order; the first one whose source,
//! event and guard all match wins.

use std::fmt::Debug;
use std::hash::Hash;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

/// A guard function that determines if a transition should occur
pub type Guard = Box<dyn Fn() -> bool + Send>;

/// An action function executed during transitions
pub type Action = Box<dyn FnMut() + Send>;

/// A transition in the state machine
pub struct Transition<S, E> {
    /// Source state, or `None` to match every state
    pub from_state: Option<S>,
    pub event: E,
    pub to_state: S,
    pub guard: Option<Guard>,
    pub actions: SmallVec<[Action; 2]>,
}

impl<S, E> Transition<S, E>
where
    S: Copy + Eq,
    E: Copy + Eq,
{
    /// Create a simple transition without guard or actions
    pub fn new(from: S, event: E, to: S) -> Self {
        Self {
            from_state: Some(from),
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Create a transition that fires from whichever state is current
    pub fn from_any(event: E, to: S) -> Self {
        Self {
            from_state: None,
            event,
            to_state: to,
            guard: None,
            actions: SmallVec::new(),
        }
    }

    /// Add a guard condition
    pub fn with_guard<F: Fn() -> bool + Send + 'static>(mut self, guard: F) -> Self {
        self.guard = Some(Box::new(guard));
        self
    }

    /// Add an action to execute during transition
    pub fn with_action<F: FnMut() + Send + 'static>(mut self, action: F) -> Self {
        self.actions.push(Box::new(action));
        self
    }

    fn matches(&self, current: S, event: E) -> bool {
        self.from_state.map_or(true, |from| from == current)
            && self.event == event
            && self.guard.as_ref().map_or(true, |guard| guard())
    }
}

/// Builder for creating state machines
pub struct StateMachineBuilder<S, E> {
    initial_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
}

impl<S, E> StateMachineBuilder<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
{
    pub fn new(initial_state: S) -> Self {
        Self {
            initial_state,
            transitions: Vec::new(),
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
        }
    }

    /// Add a transition
    pub fn transition(mut self, transition: Transition<S, E>) -> Self {
        self.transitions.push(transition);
        self
    }

    /// Add a simple transition (from, event, to)
    pub fn on(mut self, from: S, event: E, to: S) -> Self {
        self.transitions.push(Transition::new(from, event, to));
        self
    }

    /// Add a transition that fires from any state (event, to)
    pub fn on_any(mut self, event: E, to: S) -> Self {
        self.transitions.push(Transition::from_any(event, to));
        self
    }

    /// Add an entry action for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(mut self, state: S, action: F) -> Self {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Add an exit action for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(mut self, state: S, action: F) -> Self {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(action));
        self
    }

    /// Build the state machine
    pub fn build(self) -> StateMachine<S, E> {
        StateMachine {
            current_state: self.initial_state,
            transitions: self.transitions,
            entry_callbacks: self.entry_callbacks,
            exit_callbacks: self.exit_callbacks,
            history: Vec::new(),
        }
    }
}

/// Number of transitions kept in the history
pub const HISTORY_LIMIT: usize = 64;

/// A state machine instance
pub struct StateMachine<S, E> {
    current_state: S,
    transitions: Vec<Transition<S, E>>,
    entry_callbacks: FxHashMap<S, Vec<Action>>,
    exit_callbacks: FxHashMap<S, Vec<Action>>,
    /// Most recent transitions, oldest first (for debugging)
    history: Vec<(S, E, S)>,
}

impl<S, E> StateMachine<S, E>
where
    S: Copy + Eq + Hash + Debug,
    E: Copy + Eq + Debug,
{
    /// Create a new state machine with an initial state and transitions
    pub fn new(initial_state: S, transitions: Vec<Transition<S, E>>) -> Self {
        Self {
            current_state: initial_state,
            transitions,
            entry_callbacks: FxHashMap::default(),
            exit_callbacks: FxHashMap::default(),
            history: Vec::new(),
        }
    }

    /// Create a builder for a state machine
    pub fn builder(initial_state: S) -> StateMachineBuilder<S, E> {
        StateMachineBuilder::new(initial_state)
    }

    /// Get the current state
    pub fn current_state(&self) -> S {
        self.current_state
    }

    /// Check if we're in a specific state
    pub fn is_in(&self, state: S) -> bool {
        self.current_state == state
    }

    /// Get transition history
    pub fn history(&self) -> &[(S, E, S)] {
        &self.history
    }

    /// Clear transition history
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    /// Check if an event can trigger a transition from current state
    pub fn can_send(&self, event: E) -> bool {
        let current = self.current_state;
        self.transitions.iter().any(|t| t.matches(current, event))
    }

    /// Send an event to the state machine, potentially triggering a transition.
    ///
    /// Returns the state after the event; an unmatched event leaves it unchanged.
    pub fn send(&mut self, event: E) -> S {
        let current = self.current_state;

        let Some(idx) = self
            .transitions
            .iter()
            .position(|t| t.matches(current, event))
        else {
            tracing::trace!(?current, ?event, "no transition");
            return current;
        };

        let to_state = self.transitions[idx].to_state;

        if let Some(callbacks) = self.exit_callbacks.get_mut(&current) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        for action in self.transitions[idx].actions.iter_mut() {
            action();
        }

        self.current_state = to_state;
        if self.history.len() == HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push((current, event, to_state));

        if let Some(callbacks) = self.entry_callbacks.get_mut(&to_state) {
            for callback in callbacks.iter_mut() {
                callback();
            }
        }

        to_state
    }

    /// Register an entry callback for a state
    pub fn on_enter<F: FnMut() + Send + 'static>(&mut self, state: S, callback: F) {
        self.entry_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }

    /// Register an exit callback for a state
    pub fn on_exit<F: FnMut() + Send + 'static>(&mut self, state: S, callback: F) {
        self.exit_callbacks
            .entry(state)
            .or_default()
            .push(Box::new(callback));
    }
}
