use crate::error::WrappedError;

pub type WrappedResult<T> = Result<T, WrappedError>;
