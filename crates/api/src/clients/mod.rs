//! Best-effort third-party side channels.
//!
//! Email notification and spreadsheet append are independently fallible:
//! each is attempted once, and a failure is logged by the caller and
//! swallowed — it never fails or rolls back the primary persistence path.

pub mod email;
pub mod sheets;

pub use email::EmailClient;
pub use sheets::SheetsClient;

/// What a best-effort call did. `Skipped` means the channel is not
/// configured for this deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SideChannelOutcome {
    Delivered,
    Skipped,
}
