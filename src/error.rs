use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DetectorError {
    #[error("detector value was not produced by a constructor")]
    #[diagnostic(
        code(carousel::invalid_state),
        help("construct the detector with new, with_compare, or the builder before calling methods on it")
    )]
    InvalidState,

    #[error("invalid argument: {message}")]
    #[diagnostic(
        code(carousel::invalid_argument),
        help("supply every required field before calling build")
    )]
    InvalidArgument { message: String },
}
