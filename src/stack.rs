//! in src/stack.rs
//!
//! Growable LIFO container shared by the converter and the evaluator

/// A last-in-first-out stack with an explicit growth schedule.
///
/// The backing storage is a slot vector whose length *is* the capacity.
/// Slots at or past `len()` are logically absent whatever they hold.
///
/// Capacity goes 0 -> 1 on the first push, then `max(len * 2, 4)` every time
/// a push finds the storage full.
#[derive(Debug, Clone)]
pub struct Stack<T> {
	/// backing storage, `slots.len()` is the capacity
	slots: Vec<Option<T>>,
	/// logical length
	size: usize,
}

impl<T> Default for Stack<T> {
	fn default() -> Self {
		Self::new()
	}
}

impl<T> Stack<T> {
	/// Creates an empty stack with no backing storage.
	pub fn new() -> Self {
		Self { slots: Vec::new(), size: 0 }
	}

	/// number of elements currently on the stack
	pub fn len(&self) -> usize {
		self.size
	}

	pub fn is_empty(&self) -> bool {
		self.size == 0
	}

	/// length of the backing storage
	pub fn capacity(&self) -> usize {
		self.slots.len()
	}

	fn ensure_capacity(&mut self) {
		if self.slots.is_empty() {
			self.grow_to(1);
		}

		if self.size == self.slots.len() {
			self.grow_to((self.size * 2).max(4));
		}
	}

	fn grow_to(
		&mut self,
		capacity: usize,
	) {
		self.slots.resize_with(capacity, || None);
	}

	/// Pushes `value` on top of the stack.
	pub fn push(
		&mut self,
		value: T,
	) {
		self.ensure_capacity();

		self.slots[self.size] = Some(value);
		self.size += 1;
	}

	/// Returns the top element without removing it, `None` when empty.
	pub fn peek(&self) -> Option<&T> {
		let top = self.size.checked_sub(1)?;
		self.slots[top].as_ref()
	}

	/// Removes and returns the top element, `None` when empty.
	pub fn pop(&mut self) -> Option<T> {
		let top = self.size.checked_sub(1)?;
		self.size = top;
		self.slots[top].take()
	}

	/// Drops every element. Capacity is kept.
	pub fn clear(&mut self) {
		for slot in &mut self.slots[..self.size] {
			*slot = None;
		}
		self.size = 0;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_stack_is_empty() {
		let stack = Stack::<i32>::new();
		assert_eq!(stack.len(), 0);
		assert_eq!(stack.capacity(), 0);
		assert!(stack.is_empty());
	}

	#[test]
	fn len_tracks_pushes() {
		let mut stack = Stack::new();
		stack.push(0);
		assert_eq!(stack.len(), 1);
		stack.push(0);
		assert_eq!(stack.len(), 2);
	}

	#[test]
	fn capacity_follows_growth_schedule() {
		let mut stack = Stack::new();
		let mut seen = vec![stack.capacity()];

		for i in 0..17 {
			stack.push(i);
			if seen.last() != Some(&stack.capacity()) {
				seen.push(stack.capacity());
			}
			assert!(stack.len() <= stack.capacity());
		}

		assert_eq!(seen, vec![0, 1, 4, 8, 16, 32]);
	}

	#[test]
	fn peek_does_not_remove() {
		let mut stack = Stack::new();
		assert_eq!(stack.peek(), None);

		stack.push(1);
		assert_eq!(stack.peek(), Some(&1));
		assert_eq!(stack.len(), 1);
	}

	#[test]
	fn pop_removes_top() {
		let mut stack = Stack::new();
		assert_eq!(stack.pop(), None);

		stack.push(1);
		assert_eq!(stack.pop(), Some(1));
		assert_eq!(stack.len(), 0);
		assert_eq!(stack.pop(), None);
	}

	#[test]
	fn pops_in_reverse_push_order() {
		let mut stack = Stack::new();
		let values: Vec<u32> = (0..100).collect();

		for &v in &values {
			stack.push(v);
		}

		let popped: Vec<u32> = std::iter::from_fn(|| stack.pop()).collect();
		let reversed: Vec<u32> = values.into_iter().rev().collect();
		assert_eq!(popped, reversed);
	}

	#[test]
	fn zero_is_not_absence() {
		let mut stack = Stack::<f64>::new();
		assert_eq!(stack.peek(), None);

		stack.push(0.0);
		assert_eq!(stack.peek(), Some(&0.0));
		assert_eq!(stack.pop(), Some(0.0));
		assert_eq!(stack.pop(), None);
	}

	#[test]
	fn popped_slots_are_absent_after_regrowth() {
		let mut stack = Stack::new();
		stack.push("a");
		stack.push("b");
		stack.pop();
		stack.pop();

		assert_eq!(stack.peek(), None);
		stack.push("c");
		assert_eq!(stack.pop(), Some("c"));
		assert_eq!(stack.pop(), None);
	}

	#[test]
	fn clear_keeps_capacity() {
		let mut stack = Stack::new();
		for i in 0..5 {
			stack.push(i);
		}
		let capacity = stack.capacity();

		stack.clear();
		assert!(stack.is_empty());
		assert_eq!(stack.peek(), None);
		assert_eq!(stack.capacity(), capacity);
	}
}
