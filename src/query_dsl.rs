// ---------------------------------------------------------------------------
// Criteria DSL — parse a human-friendly filter string into FilterCriteria
// ---------------------------------------------------------------------------
//
// Supports:
//   platform:VALUE       — exact platform (case-insensitive)
//   genre:VALUE          — exact genre
//   publisher:VALUE      — exact publisher
//   year>=N / year<=N    — inclusive release-year bounds
//   sales>=X             — minimum global sales
//   "quoted values"      — multi-word values, e.g. publisher:"Electronic Arts"
//
// Unparseable numbers and unrecognized tokens fail with `InvalidInput`, so
// malformed criteria are rejected before the filter core ever runs; the
// presenter re-prompts.
// ---------------------------------------------------------------------------

use crate::error::CatalogError;
use crate::types::FilterCriteria;

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Split input on whitespace while letting double quotes group a multi-word
/// value into one token. Quotes are stripped; an unterminated quote consumes
/// the rest of the string.
fn tokenize(input: &str) -> Vec<String> {
	let mut tokens = Vec::new();
	let mut current = String::new();
	let mut in_quotes = false;

	for ch in input.chars() {
		match ch {
			'"' => in_quotes = !in_quotes,
			c if c.is_whitespace() && !in_quotes => {
				if !current.is_empty() {
					tokens.push(std::mem::take(&mut current));
				}
			}
			c => current.push(c),
		}
	}
	if !current.is_empty() {
		tokens.push(current);
	}

	tokens
}

// ---------------------------------------------------------------------------
// Parser
// ---------------------------------------------------------------------------

/// Parse a criteria string into a [`FilterCriteria`].
///
/// Empty input parses to the empty criteria (filter passes everything).
/// Keys with empty values (`platform:`) are ignored, matching the behavior
/// of omitting the key. Anything else that is not recognized syntax is an
/// `InvalidInput` error rather than silently dropped: a typo in a criterion
/// must not widen the result set.
pub fn parse_criteria(input: &str) -> Result<FilterCriteria, CatalogError> {
	let mut criteria = FilterCriteria::default();

	for token in tokenize(input) {
		if let Some(value) = token.strip_prefix("platform:") {
			if !value.is_empty() {
				criteria.platform = Some(value.to_string());
			}
		} else if let Some(value) = token.strip_prefix("genre:") {
			if !value.is_empty() {
				criteria.genre = Some(value.to_string());
			}
		} else if let Some(value) = token.strip_prefix("publisher:") {
			if !value.is_empty() {
				criteria.publisher = Some(value.to_string());
			}
		} else if let Some(value) = token.strip_prefix("year>=") {
			criteria.year_min = Some(parse_year(value)?);
		} else if let Some(value) = token.strip_prefix("year<=") {
			criteria.year_max = Some(parse_year(value)?);
		} else if let Some(value) = token.strip_prefix("sales>=") {
			criteria.min_global_sales = Some(parse_sales(value)?);
		} else {
			return Err(CatalogError::InvalidInput(format!(
				"unrecognized criterion: {token}"
			)));
		}
	}

	Ok(criteria)
}

fn parse_year(value: &str) -> Result<i32, CatalogError> {
	value
		.parse()
		.map_err(|_| CatalogError::InvalidInput(format!("invalid year: {value}")))
}

fn parse_sales(value: &str) -> Result<f64, CatalogError> {
	let parsed: f64 = value
		.parse()
		.map_err(|_| CatalogError::InvalidInput(format!("invalid sales threshold: {value}")))?;
	if !parsed.is_finite() {
		return Err(CatalogError::InvalidInput(format!(
			"invalid sales threshold: {value}"
		)));
	}
	Ok(parsed)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
