// ---------------------------------------------------------------------------
// Leaderboard — per-region top-N ranking over the whole store
// ---------------------------------------------------------------------------
//
// Each of the five regions is ranked independently, so a record may appear
// in several regional top-lists at once.
// ---------------------------------------------------------------------------

use std::collections::BTreeMap;

use crate::store::{top_by, GameStore};
use crate::types::{GameRecord, Region};

/// Top `limit` records for a single region, descending by that region's
/// sales figure, ties in store order.
pub fn region_top(store: &GameStore, region: Region, limit: usize) -> Vec<GameRecord> {
	let candidates: Vec<&GameRecord> = store.records().iter().collect();
	top_by(candidates, |r| region.sales_of(r), limit)
}

/// Top `limit` records for every region.
///
/// `Region`'s `Ord` follows the canonical region order, so iterating the
/// map (and its JSON serialization) lists North America first and Global
/// last. An empty store yields five empty lists, not an error.
pub fn leaderboard(store: &GameStore, limit: usize) -> BTreeMap<Region, Vec<GameRecord>> {
	Region::ALL
		.iter()
		.map(|&region| (region, region_top(store, region, limit)))
		.collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
	use super::*;

	fn game(title: &str, sales: [f64; 5]) -> GameRecord {
		GameRecord {
			title: title.to_string(),
			platform: "NES".to_string(),
			year_of_release: None,
			genre: String::new(),
			publisher: String::new(),
			na_sales: sales[0],
			eu_sales: sales[1],
			jp_sales: sales[2],
			other_sales: sales[3],
			global_sales: sales[4],
		}
	}

	fn sample_store() -> GameStore {
		GameStore::new(vec![
			game("Super Mario Bros.", [29.08, 3.58, 6.81, 0.77, 40.24]),
			game("Super Mario Bros. 2", [5.39, 1.18, 0.7, 0.19, 7.46]),
			game("Pong", [0.4, 0.2, 0.1, 0.3, 1.0]),
		])
	}

	fn titles(records: &[GameRecord]) -> Vec<&str> {
		records.iter().map(|r| r.title.as_str()).collect()
	}

	#[test]
	fn global_board_ordered_by_global_sales() {
		let store = sample_store();
		let boards = leaderboard(&store, 5);
		assert_eq!(
			titles(&boards[&Region::Global]),
			vec!["Super Mario Bros.", "Super Mario Bros. 2", "Pong"]
		);
	}

	#[test]
	fn every_region_has_a_board() {
		let store = sample_store();
		let boards = leaderboard(&store, 5);
		assert_eq!(boards.len(), 5);
		for region in Region::ALL {
			assert_eq!(boards[&region].len(), 3);
		}
	}

	#[test]
	fn regions_rank_independently() {
		let store = GameStore::new(vec![
			game("NA Hit", [10.0, 0.1, 0.1, 0.1, 10.3]),
			game("JP Hit", [0.1, 0.1, 10.0, 0.1, 10.3]),
		]);
		let boards = leaderboard(&store, 5);
		assert_eq!(titles(&boards[&Region::NorthAmerica]), vec!["NA Hit", "JP Hit"]);
		assert_eq!(titles(&boards[&Region::Japan]), vec!["JP Hit", "NA Hit"]);
	}

	#[test]
	fn record_may_appear_in_multiple_boards() {
		let store = sample_store();
		let boards = leaderboard(&store, 1);
		for region in Region::ALL {
			assert_eq!(titles(&boards[&region]), vec!["Super Mario Bros."]);
		}
	}

	#[test]
	fn limit_for_one_region_does_not_change_another() {
		let store = sample_store();
		let full = region_top(&store, Region::Europe, 5);
		// Truncating Japan's board leaves Europe's ordering untouched
		let _japan_one = region_top(&store, Region::Japan, 1);
		assert_eq!(full, region_top(&store, Region::Europe, 5));
	}

	#[test]
	fn empty_store_yields_five_empty_boards() {
		let boards = leaderboard(&GameStore::default(), 5);
		assert_eq!(boards.len(), 5);
		assert!(boards.values().all(|b| b.is_empty()));
	}

	#[test]
	fn ties_keep_store_order() {
		let store = GameStore::new(vec![
			game("First", [1.0, 0.0, 0.0, 0.0, 1.0]),
			game("Second", [1.0, 0.0, 0.0, 0.0, 1.0]),
		]);
		let board = region_top(&store, Region::NorthAmerica, 5);
		assert_eq!(titles(&board), vec!["First", "Second"]);
	}

	#[test]
	fn serializes_keyed_by_label_in_region_order() {
		let store = sample_store();
		let boards = leaderboard(&store, 1);
		// Serialize straight to text: the map writes its keys in Region
		// order, which is the canonical presentation order.
		let json = serde_json::to_string(&boards).unwrap();
		let positions: Vec<usize> = ["North America", "Europe", "Japan", "Other", "Global"]
			.iter()
			.map(|label| json.find(&format!("\"{label}\"")).unwrap())
			.collect();
		assert!(positions.windows(2).all(|w| w[0] < w[1]));
	}

	#[test]
	fn repeated_calls_are_idempotent() {
		let store = sample_store();
		assert_eq!(leaderboard(&store, 5), leaderboard(&store, 5));
	}
}
