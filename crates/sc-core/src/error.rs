use thiserror::Error;

pub type ScResult<T> = Result<T, ScError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ScError {
    #[error("score out of range: {value} (expected 0..={})", crate::score::Score::MAX_VALUE)]
    ScoreOutOfRange { value: u8 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },
}
