use async_trait::async_trait;
use crate::ModtacResult;

/// Receives values pushed by a component, e.g. per-frame telemetry.
pub trait Observer<T> {
    fn notify(&mut self, value: &T);
}

impl<T, F> Observer<T> for F
where
    F: FnMut(&T),
{
    fn notify(&mut self, value: &T) {
        self(value)
    }
}

/// An asynchronous provider of a list of values.
#[async_trait]
pub trait Source<T>: Send + Sync {
    async fn list(&self) -> ModtacResult<Vec<T>>;
}
