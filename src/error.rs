use crate::validate::FieldErrors;
use crate::wizard::WizardStep;
use thiserror::Error;

/// Errors raised by the wizard controller when an operation is not
/// permitted in the current state.
#[derive(Error, Debug, Clone)]
pub enum WizardError {
    #[error("step '{step}' cannot advance: {} invalid field(s)", .errors.len())]
    StepBlocked {
        step: WizardStep,
        errors: FieldErrors,
    },

    #[error("configuration is not ready for submission: {summary}")]
    ValidationFailed {
        errors: FieldErrors,
        summary: String,
    },

    #[error("submission is only available from the review step (currently on '{0}')")]
    NotOnReviewStep(WizardStep),

    #[error("a submission is already in flight")]
    SubmissionInFlight,

    #[error("the wizard has already submitted and is closed")]
    AlreadySubmitted,

    #[error(transparent)]
    Submission(#[from] SubmissionError),
}

/// Errors surfaced by the submission coordinator.
#[derive(Error, Debug, Clone)]
pub enum SubmissionError {
    /// The trial plan's hard execution cap was reached. No remote call is
    /// made and the usage counter is untouched; upgrading the plan
    /// unblocks submission.
    #[error("trial execution limit reached: upgrade your plan to start more flows")]
    TrialLimitReached,

    /// The remote service rejected or failed the start call. The message
    /// is carried verbatim; wizard state is preserved for retry.
    #[error("flow start failed: {message}")]
    Remote { message: String },

    #[error("usage storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors from the durable usage store or its record encoding.
#[derive(Error, Debug, Clone)]
pub enum StorageError {
    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("usage record encoding error: {0}")]
    Codec(String),
}

/// Errors raised by the remote flow-start collaborator. The coordinator
/// translates these into [`SubmissionError::Remote`]; they never escape
/// the crate unhandled.
#[derive(Error, Debug, Clone)]
pub enum LaunchError {
    #[error("flow service error: {message}")]
    Service { message: String },

    #[error("flow service timed out")]
    Timeout,
}

/// Errors from the read-only template/industry lookup collaborator.
/// Industry lookups degrade to a built-in fallback list instead of
/// blocking setup.
#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("template service unavailable: {0}")]
    Unavailable(String),

    #[error("unknown template '{0}'")]
    UnknownTemplate(String),
}
