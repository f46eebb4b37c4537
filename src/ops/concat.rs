//! String concatenation of element representations.

use std::fmt::Display;

use super::ChunkOp;

/// Concatenate the `Display` form of every element, in order.
pub struct Concat;

impl<T> ChunkOp<T> for Concat
where
    T: Display + Send + Sync + 'static,
{
    type Partial = String;
    type Output = String;

    fn compute(&self, chunk: &[T]) -> String {
        let mut rendered = String::new();
        for item in chunk {
            rendered.push_str(&item.to_string());
        }
        rendered
    }

    fn merge(&self, partials: Vec<String>) -> String {
        partials.concat()
    }
}
