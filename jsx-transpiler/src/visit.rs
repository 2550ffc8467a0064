//! The result of a lowering handler.

/// What should happen to the node a handler was invoked on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<T> {
	/// Leave the node where it is (possibly mutated in place).
	Keep,
	/// Put `T` in the node's place.
	Replace(T),
	/// Drop the node from its parent sequence.
	Remove,
}
