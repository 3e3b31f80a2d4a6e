//! Application-wide constants.
//!
//! Centralizes column names, labels and serving defaults so the builders,
//! the layout and the server agree on them.

// ============================================================================
// Dataset Columns
// ============================================================================

/// Region column (also the choropleth location code)
pub const COL_REGION: &str = "region";

/// Year column
pub const COL_YEAR: &str = "year";

/// Measure plotted by both charts
pub const COL_AVERAGE_PRICE: &str = "AveragePrice";

// ============================================================================
// Controls & Layout
// ============================================================================

/// Synthetic region entry meaning "no region filter"
pub const ALL_REGIONS: &str = "All Regions";

/// Page heading
pub const DASHBOARD_HEADING: &str = "Avocado Prices";

/// Element id of the region dropdown
pub const REGION_DROPDOWN_ID: &str = "region-dropdown";

/// Element id of the year dropdown
pub const YEAR_DROPDOWN_ID: &str = "year-dropdown";

/// Element id of the bar chart area
pub const BAR_CHART_ID: &str = "bar-chart";

/// Element id of the choropleth map area
pub const CHOROPLETH_MAP_ID: &str = "choropleth-map";

/// CSS width of each dropdown
pub const DROPDOWN_WIDTH: &str = "50%";

// ============================================================================
// Choropleth
// ============================================================================

/// Plotly location mode: regions are two-letter US state codes
pub const LOCATION_MODE: &str = "USA-states";

/// Geographic scope drawn by the map
pub const GEO_SCOPE: &str = "usa";

// ============================================================================
// Serving
// ============================================================================

/// Default dataset file, relative to the working directory
pub const DEFAULT_DATA_PATH: &str = "avocado.csv";

/// Default bind host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port
pub const DEFAULT_PORT: u16 = 8050;

/// Maximum concurrently tracked dashboard sessions
pub const DEFAULT_MAX_SESSIONS: usize = 256;

/// Recomputes slower than this are logged as warnings (milliseconds)
pub const DEFAULT_SLOW_RECOMPUTE_MS: f64 = 50.0;

/// How long the accept loop waits before re-checking the shutdown flag
pub const SERVER_POLL_MS: u64 = 100;

/// How long `start` waits for the listener to come up
pub const SERVER_STARTUP_TIMEOUT_SECS: u64 = 5;

/// Plotly.js bundle loaded by the dashboard page
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Directory name under the platform config dir
pub const APP_DIR_NAME: &str = "avocado-board";

/// Settings file name inside [`APP_DIR_NAME`]
pub const SETTINGS_FILE_NAME: &str = "settings.json";
