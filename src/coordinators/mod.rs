// Coordinators layer - Workflow orchestration
//
// Coordinators compose provider operations for specific API endpoints.
// They determine the sequence of operations without containing business logic themselves.

pub mod auth_coordinator;

pub use auth_coordinator::{AuthCoordinator, LoginOutcome};
