//! Order-preserving collection operations: filter and map.

use std::marker::PhantomData;

use super::ChunkOp;

/// Keep the elements satisfying a predicate, in original order.
pub struct Filter<P> {
    pred: P,
}

impl<P> Filter<P> {
    pub fn new(pred: P) -> Self {
        Self { pred }
    }
}

impl<T, P> ChunkOp<T> for Filter<P>
where
    T: Clone + Send + Sync + 'static,
    P: Fn(&T) -> bool + Send + Sync + 'static,
{
    type Partial = Vec<T>;
    type Output = Vec<T>;

    fn compute(&self, chunk: &[T]) -> Vec<T> {
        chunk
            .iter()
            .filter(|item| (self.pred)(item))
            .cloned()
            .collect()
    }

    fn merge(&self, partials: Vec<Vec<T>>) -> Vec<T> {
        partials.into_iter().flatten().collect()
    }
}

/// Transform every element, preserving order.
pub struct Map<F, R> {
    transform: F,
    _output: PhantomData<fn() -> R>,
}

impl<F, R> Map<F, R> {
    pub fn new(transform: F) -> Self {
        Self {
            transform,
            _output: PhantomData,
        }
    }
}

impl<T, R, F> ChunkOp<T> for Map<F, R>
where
    T: Send + Sync + 'static,
    R: Send + 'static,
    F: Fn(&T) -> R + Send + Sync + 'static,
{
    type Partial = Vec<R>;
    type Output = Vec<R>;

    fn compute(&self, chunk: &[T]) -> Vec<R> {
        chunk.iter().map(|item| (self.transform)(item)).collect()
    }

    fn merge(&self, partials: Vec<Vec<R>>) -> Vec<R> {
        partials.into_iter().flatten().collect()
    }
}
