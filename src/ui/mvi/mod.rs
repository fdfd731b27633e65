//! Model-View-Intent primitives shared by the browser sections.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──── key press / response ────┘
//! ```
//!
//! Reducers never perform I/O. The `App` dispatches an intent, inspects the
//! resulting state and issues queries as a follow-up step.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
