// ---------------------------------------------------------------------------
// Recommender — pairwise content similarity against an anchor record
// ---------------------------------------------------------------------------
//
// A deliberately simple, explainable heuristic, not a learned model. The
// weights are fixed so genre dominates, platform is secondary, and
// commercial-scale proximity is a minor tiebreak signal.
// ---------------------------------------------------------------------------

use crate::error::CatalogError;
use crate::store::{normalize, GameStore};
use crate::types::GameRecord;

/// Points for a case-insensitive genre match.
const GENRE_POINTS: u32 = 2;
/// Points for a case-insensitive platform match.
const PLATFORM_POINTS: u32 = 1;
/// Points when global sales are within `SALES_WINDOW` of the anchor's.
const SALES_PROXIMITY_POINTS: u32 = 1;
/// Absolute global-sales distance (same unit as stored sales) that still
/// counts as "commercially similar".
const SALES_WINDOW: f64 = 1.0;

// ---------------------------------------------------------------------------
// Anchor resolution
// ---------------------------------------------------------------------------

/// Resolve a user-supplied title to the anchor record: the first record in
/// store order whose lowercased title contains the trimmed, lowercased
/// input. Fails with `NotFound` when nothing matches — the one condition
/// that leaves the recommender with nothing to score against.
pub fn resolve_anchor<'a>(
	store: &'a GameStore,
	chosen_title: &str,
) -> Result<&'a GameRecord, CatalogError> {
	let needle = normalize(chosen_title);
	store
		.records()
		.iter()
		.find(|r| normalize(&r.title).contains(&needle))
		.ok_or_else(|| CatalogError::NotFound(chosen_title.trim().to_string()))
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Integer similarity score between a candidate and the anchor.
pub fn similarity_score(anchor: &GameRecord, candidate: &GameRecord) -> u32 {
	let mut score = 0;

	if normalize(&candidate.genre) == normalize(&anchor.genre) {
		score += GENRE_POINTS;
	}
	if normalize(&candidate.platform) == normalize(&anchor.platform) {
		score += PLATFORM_POINTS;
	}
	if (candidate.global_sales - anchor.global_sales).abs() <= SALES_WINDOW {
		score += SALES_PROXIMITY_POINTS;
	}

	score
}

/// Recommend up to `limit` records similar to the one `chosen_title`
/// resolves to.
///
/// Every record whose title case-insensitively equals the anchor's is
/// excluded — not just the anchor itself, so duplicate titles never
/// recommend themselves. Zero-score records are dropped; the rest are
/// ordered by score descending with ties in store order. Scores are an
/// implementation detail and not part of the returned shape.
pub fn recommend(
	store: &GameStore,
	chosen_title: &str,
	limit: usize,
) -> Result<Vec<GameRecord>, CatalogError> {
	let anchor = resolve_anchor(store, chosen_title)?;
	let anchor_title = normalize(&anchor.title);

	let mut scored: Vec<(&GameRecord, u32)> = Vec::new();
	for record in store.records() {
		if normalize(&record.title) == anchor_title {
			continue;
		}
		let score = similarity_score(anchor, record);
		if score > 0 {
			scored.push((record, score));
		}
	}

	// Stable sort: equal scores keep store order
	scored.sort_by(|a, b| b.1.cmp(&a.1));

	Ok(scored
		.into_iter()
		.take(limit)
		.map(|(record, _)| record.clone())
		.collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
