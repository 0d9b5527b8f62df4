//! Derived-value computation engine
//!
//! Pure transformations from the editable proposal fields to every computed
//! number the render targets display. No I/O, no shared state: each edit is a
//! whole-record replacement.

pub mod edit;
pub mod ledger;
pub mod withdrawal;

pub use edit::{apply_edit, CosmeticGoalEdit, ProposalEdit, StructuralGoalEdit, WithdrawalInput};
pub use withdrawal::{project, WithdrawalProjection};
