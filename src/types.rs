use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// GameRecord
// ---------------------------------------------------------------------------

/// A single validated game-sales record.
///
/// Records enter the store through the Loader (or over `catalog/load`),
/// which guarantees non-empty `title`/`platform` and non-negative sales
/// figures defaulting to 0.0. The core never re-validates; once inside a
/// [`crate::store::GameStore`] a record is immutable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
	pub title: String,
	pub platform: String,
	/// The only nullable field: `None` when the source value was absent or
	/// unparseable. Range tests must exclude `None`, never treat it as zero.
	#[serde(rename = "yearOfRelease", default)]
	pub year_of_release: Option<i32>,
	#[serde(default)]
	pub genre: String,
	#[serde(default)]
	pub publisher: String,
	#[serde(rename = "naSales", default)]
	pub na_sales: f64,
	#[serde(rename = "euSales", default)]
	pub eu_sales: f64,
	#[serde(rename = "jpSales", default)]
	pub jp_sales: f64,
	#[serde(rename = "otherSales", default)]
	pub other_sales: f64,
	#[serde(rename = "globalSales", default)]
	pub global_sales: f64,
}

// ---------------------------------------------------------------------------
// Region
// ---------------------------------------------------------------------------

/// One of the five sales dimensions a record can be ranked by.
///
/// Declaration order is the canonical region order; `Ord` follows it, so a
/// `BTreeMap<Region, _>` iterates North America first and Global last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
	#[serde(rename = "North America")]
	NorthAmerica,
	Europe,
	Japan,
	Other,
	Global,
}

impl Region {
	/// All five regions in canonical order.
	pub const ALL: [Region; 5] = [
		Region::NorthAmerica,
		Region::Europe,
		Region::Japan,
		Region::Other,
		Region::Global,
	];

	/// Human-readable label, identical to the serialized form.
	pub fn label(&self) -> &'static str {
		match self {
			Region::NorthAmerica => "North America",
			Region::Europe => "Europe",
			Region::Japan => "Japan",
			Region::Other => "Other",
			Region::Global => "Global",
		}
	}

	/// The sales figure this region ranks by.
	pub fn sales_of(&self, record: &GameRecord) -> f64 {
		match self {
			Region::NorthAmerica => record.na_sales,
			Region::Europe => record.eu_sales,
			Region::Japan => record.jp_sales,
			Region::Other => record.other_sales,
			Region::Global => record.global_sales,
		}
	}
}

// ---------------------------------------------------------------------------
// FilterCriteria
// ---------------------------------------------------------------------------

/// Conjunctive filter configuration: every supplied criterion must hold,
/// omitted criteria impose no constraint.
///
/// String criteria are exact case-insensitive matches. Numeric criteria are
/// inclusive bounds; a record with no release year never satisfies a year
/// bound. Presenters construct this from user input (see
/// [`crate::query_dsl::parse_criteria`]) so malformed numerics are rejected
/// before the filter runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterCriteria {
	#[serde(default)]
	pub platform: Option<String>,
	#[serde(default)]
	pub genre: Option<String>,
	#[serde(default)]
	pub publisher: Option<String>,
	#[serde(rename = "yearMin", default)]
	pub year_min: Option<i32>,
	#[serde(rename = "yearMax", default)]
	pub year_max: Option<i32>,
	#[serde(rename = "minGlobalSales", default)]
	pub min_global_sales: Option<f64>,
}

impl FilterCriteria {
	/// True when no criterion is set, i.e. the filter passes everything.
	pub fn is_empty(&self) -> bool {
		self.platform.is_none()
			&& self.genre.is_none()
			&& self.publisher.is_none()
			&& self.year_min.is_none()
			&& self.year_max.is_none()
			&& self.min_global_sales.is_none()
	}
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
