// ---------------------------------------------------------------------------
// Search — case-insensitive title substring search
// ---------------------------------------------------------------------------
//
// Substring, not token, matching: "mario" matches "Super Mario Bros.".
// Matches are ranked by global sales, descending, ties in store order.
// ---------------------------------------------------------------------------

use crate::store::{normalize, top_by, GameStore};
use crate::types::{GameRecord, Region};

/// Search titles for `keyword` and return the top `limit` matches by global
/// sales.
///
/// The keyword is trimmed and lowercased before matching; an empty keyword
/// yields an empty result, and so does a keyword that matches nothing.
/// Neither is an error.
pub fn search(store: &GameStore, keyword: &str, limit: usize) -> Vec<GameRecord> {
	let needle = normalize(keyword);
	if needle.is_empty() {
		return Vec::new();
	}

	let matches: Vec<&GameRecord> = store
		.records()
		.iter()
		.filter(|r| normalize(&r.title).contains(&needle))
		.collect();

	top_by(matches, |r| Region::Global.sales_of(r), limit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
