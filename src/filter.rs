// ---------------------------------------------------------------------------
// Filter — conjunctive exact/range filtering
// ---------------------------------------------------------------------------
//
// All supplied criteria are ANDed; omitted criteria impose no constraint.
// String criteria are exact case-insensitive matches, numeric criteria are
// inclusive bounds. Records with no release year never satisfy a year
// bound — null is excluded, never coerced to zero.
// ---------------------------------------------------------------------------

use crate::store::{normalize, top_by, GameStore};
use crate::types::{FilterCriteria, GameRecord};

/// True when `record` satisfies every criterion set on `criteria`.
pub fn matches(criteria: &FilterCriteria, record: &GameRecord) -> bool {
	if let Some(platform) = &criteria.platform {
		if normalize(&record.platform) != normalize(platform) {
			return false;
		}
	}

	if let Some(genre) = &criteria.genre {
		if normalize(&record.genre) != normalize(genre) {
			return false;
		}
	}

	if let Some(publisher) = &criteria.publisher {
		if normalize(&record.publisher) != normalize(publisher) {
			return false;
		}
	}

	if criteria.year_min.is_some() || criteria.year_max.is_some() {
		let Some(year) = record.year_of_release else {
			return false;
		};
		if let Some(min) = criteria.year_min {
			if year < min {
				return false;
			}
		}
		if let Some(max) = criteria.year_max {
			if year > max {
				return false;
			}
		}
	}

	if let Some(min_sales) = criteria.min_global_sales {
		if record.global_sales < min_sales {
			return false;
		}
	}

	true
}

/// Filter the store and return matches ordered by global sales descending,
/// ties in store order. `limit` is an optional cap; the top-5 cut applied by
/// CLI/GUI presenters is their policy, not a core invariant, so `None`
/// returns every match. With no criteria set this returns the whole store in
/// global-sales order.
///
/// Malformed numeric criteria never reach this function: the DSL parser and
/// the bridge's param deserialization reject them first.
pub fn filter(store: &GameStore, criteria: &FilterCriteria, limit: Option<usize>) -> Vec<GameRecord> {
	let matched: Vec<&GameRecord> = store
		.records()
		.iter()
		.filter(|r| matches(criteria, r))
		.collect();

	top_by(matched, |r| r.global_sales, limit.unwrap_or(usize::MAX))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
