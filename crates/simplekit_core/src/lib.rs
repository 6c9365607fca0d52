//! SimpleKit Core Runtime
//!
//! This crate provides the primitives shared by every SimpleKit widget:
//!
//! - **Pointer Events**: the event kinds delivered by the host dispatch loop
//! - **State Machines**: table-driven transitions over closed state/event enums
//! - **Focus Arbitration**: single-owner pointer focus shared between widgets
//!
//! # Example
//!
//! ```rust
//! use simplekit_core::fsm::StateMachine;
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
//! enum Light {
//!     Off,
//!     On,
//! }
//!
//! #[derive(Clone, Copy, Debug, PartialEq, Eq)]
//! enum Switch {
//!     Flip,
//! }
//!
//! let mut fsm = StateMachine::builder(Light::Off)
//!     .on(Light::Off, Switch::Flip, Light::On)
//!     .on(Light::On, Switch::Flip, Light::Off)
//!     .build();
//!
//! assert_eq!(fsm.send(Switch::Flip), Light::On);
//! assert_eq!(fsm.send(Switch::Flip), Light::Off);
//! ```

pub mod events;
pub mod focus;
pub mod fsm;

pub use events::{ActionEvent, ActionKind, ActionListener, PointerEvent, PointerEventKind};
pub use focus::{FocusArbiter, PointerFocus, SharedFocus, WidgetId};
pub use fsm::{StateMachine, StateMachineBuilder, Transition};
