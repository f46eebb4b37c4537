//! First-minimum and first-maximum by a caller-supplied comparator.

use std::cmp::Ordering;

use super::ChunkOp;

/// First minimum of a sequence; ties keep the earliest occurrence.
///
/// The merge folds per-chunk minimums left to right with the same strict
/// comparison, so the overall winner is the first minimum of the whole
/// sequence. An empty sequence produces `None`; the executor turns that into
/// an explicit error before any work is dispatched.
pub struct Minimum<C> {
    cmp: C,
}

impl<C> Minimum<C> {
    pub fn new(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<T, C> ChunkOp<T> for Minimum<C>
where
    T: Clone + Send + Sync + 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    type Partial = T;
    type Output = Option<T>;

    fn compute(&self, chunk: &[T]) -> T {
        // The partitioner never produces an empty chunk.
        let mut best = &chunk[0];
        for candidate in &chunk[1..] {
            if (self.cmp)(candidate, best) == Ordering::Less {
                best = candidate;
            }
        }
        best.clone()
    }

    fn merge(&self, partials: Vec<T>) -> Option<T> {
        let mut best: Option<T> = None;
        for candidate in partials {
            best = match best {
                None => Some(candidate),
                Some(current) => {
                    if (self.cmp)(&candidate, &current) == Ordering::Less {
                        Some(candidate)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        best
    }
}

/// First maximum; `Minimum` with the comparison direction reversed.
pub struct Maximum<C> {
    cmp: C,
}

impl<C> Maximum<C> {
    pub fn new(cmp: C) -> Self {
        Self { cmp }
    }
}

impl<T, C> ChunkOp<T> for Maximum<C>
where
    T: Clone + Send + Sync + 'static,
    C: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
{
    type Partial = T;
    type Output = Option<T>;

    fn compute(&self, chunk: &[T]) -> T {
        let mut best = &chunk[0];
        for candidate in &chunk[1..] {
            if (self.cmp)(candidate, best) == Ordering::Greater {
                best = candidate;
            }
        }
        best.clone()
    }

    fn merge(&self, partials: Vec<T>) -> Option<T> {
        let mut best: Option<T> = None;
        for candidate in partials {
            best = match best {
                None => Some(candidate),
                Some(current) => {
                    if (self.cmp)(&candidate, &current) == Ordering::Greater {
                        Some(candidate)
                    } else {
                        Some(current)
                    }
                }
            };
        }
        best
    }
}
