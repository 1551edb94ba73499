mod controller;
mod scroll;
mod state;

pub use controller::{NavOutcome, NavTimings, NavigationController, RejectReason};
pub use scroll::{ScrollSurface, ScrollView};
pub use state::{Direction, NavigationState, TransitionMarker};
