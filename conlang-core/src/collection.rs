//! Convenience layer over `Vec` and `HashSet`.
//!
//! Both containers get the same small toolbox: predicate filtering that keeps
//! the container shape, List/Set conversion, uniform random draw, shuffling
//! and copy-on-sort. Every random operation takes the random source as an
//! argument so callers can seed it.

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::Display;
use std::hash::{BuildHasherDefault, DefaultHasher, Hash};

use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom, SliceRandom};

/// Ordered sequence, duplicates allowed.
pub type List<T> = Vec<T>;

/// Deduplicating unordered set.
///
/// The hasher has fixed keys: the same values inserted in the same order
/// always iterate in the same order, so seeded draws repeat.
pub type Set<T> = HashSet<T, BuildHasherDefault<DefaultHasher>>;

/// Shared helpers for [`List`] and [`Set`].
pub trait Collection<T>
where
	T: Eq + Hash + Clone,
{
	/// Keeps the values satisfying `predicate`, in a container of the same kind.
	fn select<F>(&self, predicate: F) -> Self
	where
		F: FnMut(&T) -> bool,
		Self: Sized;

	/// Returns the number of values.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Copies the values into a list.
	fn to_list(&self) -> List<T>;

	/// Copies the values into a set, dropping duplicates.
	fn to_set(&self) -> Set<T>;

	/// Draws one value uniformly. Returns `None` when empty.
	fn pick<R>(&self, rng: &mut R) -> Option<&T>
	where
		R: Rng + ?Sized;

	/// Draws one value uniformly, or `T::default()` when empty.
	fn pick_or_default<R>(&self, rng: &mut R) -> T
	where
		R: Rng + ?Sized,
		T: Default,
	{
		self.pick(rng).cloned().unwrap_or_default()
	}

	/// Returns a random permutation of the values as a list.
	fn to_shuffled_list<R>(&self, rng: &mut R) -> List<T>
	where
		R: Rng + ?Sized,
	{
		let mut list = self.to_list();
		list.shuffle(rng);
		list
	}

	/// Returns a sorted copy of the values as a list.
	///
	/// The sort is stable: values comparing `Equal` keep their relative order.
	fn to_sorted_list<F>(&self, compare: F) -> List<T>
	where
		F: FnMut(&T, &T) -> Ordering,
	{
		let mut list = self.to_list();
		list.sort_by(compare);
		list
	}

	/// Concatenates the displayed values, without separator.
	fn joined(&self) -> String
	where
		T: Display,
	{
		self.to_list().iter().map(ToString::to_string).collect()
	}
}

impl<T> Collection<T> for List<T>
where
	T: Eq + Hash + Clone,
{
	fn select<F>(&self, mut predicate: F) -> Self
	where
		F: FnMut(&T) -> bool,
	{
		self.iter().filter(|value| predicate(*value)).cloned().collect()
	}

	fn len(&self) -> usize {
		Vec::len(self)
	}

	fn to_list(&self) -> List<T> {
		self.clone()
	}

	fn to_set(&self) -> Set<T> {
		self.iter().cloned().collect()
	}

	fn pick<R>(&self, rng: &mut R) -> Option<&T>
	where
		R: Rng + ?Sized,
	{
		self.choose(rng)
	}
}

impl<T> Collection<T> for Set<T>
where
	T: Eq + Hash + Clone,
{
	fn select<F>(&self, mut predicate: F) -> Self
	where
		F: FnMut(&T) -> bool,
	{
		self.iter().filter(|value| predicate(*value)).cloned().collect()
	}

	fn len(&self) -> usize {
		HashSet::len(self)
	}

	fn to_list(&self) -> List<T> {
		self.iter().cloned().collect()
	}

	fn to_set(&self) -> Set<T> {
		self.clone()
	}

	/// Linear in the size of the set.
	fn pick<R>(&self, rng: &mut R) -> Option<&T>
	where
		R: Rng + ?Sized,
	{
		self.iter().choose(rng)
	}
}
