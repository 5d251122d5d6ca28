//! Flow orchestration for the transfer relay.
//!
//! Wires the signer, quoting stack, and ledger client into the three
//! submission flows, each a single-shot sequential pipeline.

pub mod error;
pub mod flows;
pub mod outcome;
pub mod submission;

pub use error::RelayError;
pub use flows::Relay;
pub use outcome::{SwapOutcome, TransferOutcome};
pub use submission::{Submission, SubmissionState};
