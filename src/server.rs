// ---------------------------------------------------------------------------
// CatalogServer — JSON-RPC dispatcher
// ---------------------------------------------------------------------------
//
// Routes incoming JSON-RPC 2.0 requests (NDJSON over stdin) to the query
// core: a main `run()` loop, a `dispatch()` match, a `with_store` helper,
// and free-standing handler functions for each method.
//
// The bridge holds the only store reference and replaces it wholesale on
// `catalog/load`; query handlers see it read-only. Records arrive already
// validated — the Loader stays on the presenter side of this boundary, and
// no file parsing, prompting, or output formatting happens here.
// ---------------------------------------------------------------------------

use std::io::{self, BufRead};

use serde::Deserialize;

use crate::error::CatalogError;
use crate::filter::filter;
use crate::leaderboard::leaderboard;
use crate::protocol::*;
use crate::query_dsl::parse_criteria;
use crate::recommend::recommend;
use crate::search::search;
use crate::store::{GameStore, DEFAULT_LIMIT};
use crate::transport::NdjsonTransport;
use crate::types::{FilterCriteria, GameRecord};

// ---------------------------------------------------------------------------
// Server
// ---------------------------------------------------------------------------

/// JSON-RPC server that dispatches requests to a [`GameStore`].
pub struct CatalogServer {
	transport: NdjsonTransport,
	store: Option<GameStore>,
}

impl CatalogServer {
	/// Create a new server with the given transport. The store appears when
	/// the first `catalog/load` arrives.
	pub fn new(transport: NdjsonTransport) -> Self {
		Self {
			transport,
			store: None,
		}
	}

	/// Main loop: read JSON-RPC messages from stdin, dispatch to handlers.
	pub fn run(&mut self) -> Result<(), CatalogError> {
		let stdin = io::stdin();
		let reader = stdin.lock();

		for line_result in reader.lines() {
			let line = line_result?;
			if line.trim().is_empty() {
				continue;
			}

			let request: JsonRpcRequest = match serde_json::from_str(&line) {
				Ok(r) => r,
				Err(e) => {
					tracing::error!("Failed to parse request: {}", e);
					continue;
				}
			};

			self.dispatch(request);
		}

		Ok(())
	}

	// ── Dispatch ──────────────────────────────────────────────────────────

	fn dispatch(&mut self, req: JsonRpcRequest) {
		let id = req.id;
		let result = match req.method.as_str() {
			// -- Lifecycle -----------------------------------------------
			"catalog/load" => self.handle_load(req.params),
			"catalog/size" => {
				self.with_store(|s| Ok(serde_json::json!({ "count": s.len() })))
			}

			// -- Queries -------------------------------------------------
			"catalog/search" => self.with_store(|s| handle_search(s, req.params)),
			"catalog/filter" => self.with_store(|s| handle_filter(s, req.params)),
			"catalog/filterQuery" => {
				self.with_store(|s| handle_filter_query(s, req.params))
			}
			"catalog/recommend" => self.with_store(|s| handle_recommend(s, req.params)),
			"catalog/leaderboard" => {
				self.with_store(|s| handle_leaderboard(s, req.params))
			}

			// -- Criteria DSL --------------------------------------------
			"query/parseCriteria" => handle_parse_criteria(req.params),

			// -- Unknown -------------------------------------------------
			_ => {
				self.transport.write_error(
					id,
					METHOD_NOT_FOUND,
					format!("Unknown method: {}", req.method),
					None,
				);
				return;
			}
		};

		match result {
			Ok(value) => self.transport.write_response(id, value),
			Err(e) => self.transport.write_error(
				id,
				CATALOG_ERROR,
				e.to_string(),
				Some(e.to_json_rpc_error()),
			),
		}
	}

	// ── Store accessor ────────────────────────────────────────────────────

	fn with_store<F>(&self, f: F) -> Result<serde_json::Value, CatalogError>
	where
		F: FnOnce(&GameStore) -> Result<serde_json::Value, CatalogError>,
	{
		match &self.store {
			Some(s) => f(s),
			None => Err(CatalogError::NotInitialized),
		}
	}

	// ── Load ──────────────────────────────────────────────────────────────

	fn handle_load(&mut self, params: serde_json::Value) -> Result<serde_json::Value, CatalogError> {
		let p: LoadParams = parse_params(params)?;
		let count = p.records.len();

		// A reload discards the previous store as a whole; it is never
		// patched in place.
		self.store = Some(GameStore::new(p.records));

		tracing::info!("Catalog loaded: {} records", count);
		Ok(serde_json::json!({ "count": count }))
	}
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

fn handle_search(
	store: &GameStore,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: SearchParams = parse_params(params)?;
	let results = search(store, &p.keyword, p.max_results.unwrap_or(DEFAULT_LIMIT));
	Ok(serde_json::json!({ "results": results }))
}

fn handle_filter(
	store: &GameStore,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: FilterParams = parse_params(params)?;
	let results = filter(store, &p.criteria, p.max_results);
	Ok(serde_json::json!({ "results": results }))
}

fn handle_filter_query(
	store: &GameStore,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: FilterQueryParams = parse_params(params)?;
	let criteria = parse_criteria(&p.query)?;
	let results = filter(store, &criteria, p.max_results);
	Ok(serde_json::json!({ "results": results }))
}

fn handle_recommend(
	store: &GameStore,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: RecommendParams = parse_params(params)?;
	let results = recommend(store, &p.title, p.max_results.unwrap_or(DEFAULT_LIMIT))?;
	Ok(serde_json::json!({ "results": results }))
}

fn handle_leaderboard(
	store: &GameStore,
	params: serde_json::Value,
) -> Result<serde_json::Value, CatalogError> {
	let p: LeaderboardParams = parse_params(params)?;
	let boards = leaderboard(store, p.max_results.unwrap_or(DEFAULT_LIMIT));
	Ok(serde_json::json!({ "regions": boards }))
}

fn handle_parse_criteria(params: serde_json::Value) -> Result<serde_json::Value, CatalogError> {
	let p: FilterQueryParams = parse_params(params)?;
	let criteria = parse_criteria(&p.query)?;
	Ok(serde_json::json!({ "criteria": criteria }))
}

// ---------------------------------------------------------------------------
// Param types
// ---------------------------------------------------------------------------

fn parse_params<T: serde::de::DeserializeOwned>(
	params: serde_json::Value,
) -> Result<T, CatalogError> {
	serde_json::from_value(params)
		.map_err(|e| CatalogError::Serialization(format!("Invalid params: {}", e)))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoadParams {
	records: Vec<GameRecord>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct SearchParams {
	keyword: String,
	max_results: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterParams {
	#[serde(default)]
	criteria: FilterCriteria,
	max_results: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct FilterQueryParams {
	query: String,
	max_results: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecommendParams {
	title: String,
	max_results: Option<usize>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LeaderboardParams {
	max_results: Option<usize>,
}
