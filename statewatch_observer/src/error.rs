use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum SubjectError {
    #[error("Observer is not registered on this subject.")]
    ObserverNotRegistered,
}
