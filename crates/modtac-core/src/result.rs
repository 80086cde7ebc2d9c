use crate::error::ModtacError;

pub type ModtacResult<T> = Result<T, ModtacError>;
