//! Submission lifecycle state machine.
//!
//! `Built -> Signed -> Submitted -> Confirmed | Failed`, with no transition
//! out of `Submitted`, `Confirmed`, or `Failed` back toward re-submission.
//! The terminal states are absorbing: once a transaction is broadcast, the
//! only legal moves are confirmation or failure, never a second broadcast.

use crate::RelayError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
	Built,
	Signed,
	Submitted,
	Confirmed,
	Failed,
}

impl SubmissionState {
	fn name(&self) -> &'static str {
		match self {
			SubmissionState::Built => "Built",
			SubmissionState::Signed => "Signed",
			SubmissionState::Submitted => "Submitted",
			SubmissionState::Confirmed => "Confirmed",
			SubmissionState::Failed => "Failed",
		}
	}
}

/// Tracks one intent through its single submission.
#[derive(Debug)]
pub struct Submission {
	state: SubmissionState,
}

impl Default for Submission {
	fn default() -> Self {
		Self::new()
	}
}

impl Submission {
	pub fn new() -> Self {
		Self {
			state: SubmissionState::Built,
		}
	}

	pub fn state(&self) -> SubmissionState {
		self.state
	}

	fn advance(&mut self, from: SubmissionState, to: SubmissionState) -> Result<(), RelayError> {
		if self.state != from {
			return Err(RelayError::InvalidTransition {
				from: self.state.name(),
				to: to.name(),
			});
		}
		self.state = to;
		Ok(())
	}

	/// Built -> Signed: the operator signature is attached.
	pub fn mark_signed(&mut self) -> Result<(), RelayError> {
		self.advance(SubmissionState::Built, SubmissionState::Signed)
	}

	/// Signed -> Submitted: the call has been broadcast.
	pub fn mark_submitted(&mut self) -> Result<(), RelayError> {
		self.advance(SubmissionState::Signed, SubmissionState::Submitted)
	}

	/// Submitted -> Confirmed: the required confirmations were observed.
	pub fn mark_confirmed(&mut self) -> Result<(), RelayError> {
		self.advance(SubmissionState::Submitted, SubmissionState::Confirmed)
	}

	/// Any pre-terminal state -> Failed.
	pub fn mark_failed(&mut self) -> Result<(), RelayError> {
		match self.state {
			SubmissionState::Built | SubmissionState::Signed | SubmissionState::Submitted => {
				self.state = SubmissionState::Failed;
				Ok(())
			}
			SubmissionState::Confirmed | SubmissionState::Failed => {
				Err(RelayError::InvalidTransition {
					from: self.state.name(),
					to: "Failed",
				})
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn forward_path_is_permitted() {
		let mut submission = Submission::new();
		assert_eq!(submission.state(), SubmissionState::Built);

		submission.mark_signed().unwrap();
		submission.mark_submitted().unwrap();
		submission.mark_confirmed().unwrap();
		assert_eq!(submission.state(), SubmissionState::Confirmed);
	}

	#[test]
	fn cannot_submit_before_signing() {
		let mut submission = Submission::new();
		assert!(submission.mark_submitted().is_err());
		assert!(submission.mark_confirmed().is_err());
		assert_eq!(submission.state(), SubmissionState::Built);
	}

	#[test]
	fn cannot_submit_twice() {
		let mut submission = Submission::new();
		submission.mark_signed().unwrap();
		submission.mark_submitted().unwrap();

		let err = submission.mark_submitted().unwrap_err();
		assert!(matches!(
			err,
			RelayError::InvalidTransition {
				from: "Submitted",
				to: "Submitted"
			}
		));
	}

	#[test]
	fn cannot_sign_twice() {
		let mut submission = Submission::new();
		submission.mark_signed().unwrap();
		assert!(submission.mark_signed().is_err());
	}

	#[test]
	fn confirmed_is_absorbing() {
		let mut submission = Submission::new();
		submission.mark_signed().unwrap();
		submission.mark_submitted().unwrap();
		submission.mark_confirmed().unwrap();

		assert!(submission.mark_signed().is_err());
		assert!(submission.mark_submitted().is_err());
		assert!(submission.mark_failed().is_err());
		assert_eq!(submission.state(), SubmissionState::Confirmed);
	}

	#[test]
	fn failed_is_absorbing() {
		let mut submission = Submission::new();
		submission.mark_signed().unwrap();
		submission.mark_failed().unwrap();

		assert!(submission.mark_submitted().is_err());
		assert!(submission.mark_failed().is_err());
		assert_eq!(submission.state(), SubmissionState::Failed);
	}

	#[test]
	fn failure_is_reachable_from_every_pre_terminal_state() {
		let mut built = Submission::new();
		built.mark_failed().unwrap();

		let mut signed = Submission::new();
		signed.mark_signed().unwrap();
		signed.mark_failed().unwrap();

		let mut submitted = Submission::new();
		submitted.mark_signed().unwrap();
		submitted.mark_submitted().unwrap();
		submitted.mark_failed().unwrap();
	}
}
