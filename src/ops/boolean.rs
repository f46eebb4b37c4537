//! Predicate quantifiers: all / any.

use super::ChunkOp;

/// True iff every element satisfies the predicate. Empty input is true.
pub struct All<P> {
    pred: P,
}

impl<P> All<P> {
    pub fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, P> ChunkOp<T> for All<P>
where
    T: Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Partial = bool;
    type Output = bool;

    fn compute(&self, chunk: &[T]) -> bool {
        chunk.iter().all(|item| (self.pred)(item))
    }

    fn merge(&self, partials: Vec<bool>) -> bool {
        partials.into_iter().all(|chunk_holds| chunk_holds)
    }
}

/// True iff some element satisfies the predicate. Empty input is false.
pub struct Any<P> {
    pred: P,
}

impl<P> Any<P> {
    pub fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, P> ChunkOp<T> for Any<P>
where
    T: Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Partial = bool;
    type Output = bool;

    fn compute(&self, chunk: &[T]) -> bool {
        chunk.iter().any(|item| (self.pred)(item))
    }

    fn merge(&self, partials: Vec<bool>) -> bool {
        partials.into_iter().any(|chunk_holds| chunk_holds)
    }
}
