// ---------------------------------------------------------------------------
// GameStore — immutable record collection + shared ranking helpers
// ---------------------------------------------------------------------------
//
// The store is built once from already-validated Loader output and is
// read-only for the rest of its life. Reloading a source file produces a
// brand-new store; the old one is dropped as a whole, never patched.
//
// All four query operations (search, filter, recommend, leaderboard) are
// pure functions over `&GameStore`, so parallel readers need no locks once
// construction has handed off.
// ---------------------------------------------------------------------------

use crate::types::GameRecord;

/// Results default to a top-5 cut unless the caller asks otherwise.
pub const DEFAULT_LIMIT: usize = 5;

// ---------------------------------------------------------------------------
// GameStore
// ---------------------------------------------------------------------------

/// The immutable in-memory collection of game records queried by all four
/// operations. Record order is load order; stable sorts preserve it on ties.
#[derive(Debug, Clone, Default)]
pub struct GameStore {
	records: Vec<GameRecord>,
}

impl GameStore {
	/// Build a store from validated Loader output. No re-validation happens
	/// here; the Loader has already dropped rows lacking title or platform.
	pub fn new(records: Vec<GameRecord>) -> Self {
		Self { records }
	}

	pub fn records(&self) -> &[GameRecord] {
		&self.records
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

/// Normalize a string for comparison: trim, then lowercase.
pub(crate) fn normalize(s: &str) -> String {
	s.trim().to_lowercase()
}

/// Rank candidates descending by `key` and keep the first `limit`.
///
/// The sort is stable, so records with equal keys keep their original
/// relative store order. `f64::total_cmp` gives a total order even for the
/// non-finite values a hostile caller could feed over the wire.
pub(crate) fn top_by<F>(candidates: Vec<&GameRecord>, key: F, limit: usize) -> Vec<GameRecord>
where
	F: Fn(&GameRecord) -> f64,
{
	let mut ranked = candidates;
	ranked.sort_by(|a, b| key(b).total_cmp(&key(a)));
	ranked.into_iter().take(limit).cloned().collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
