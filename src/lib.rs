//! # weekly-track
//!
//! Tracks the weekly GTA Online bonuses post on Reddit and the vehicles it
//! features.
//!
//! ## Architecture
//!
//! Two sequential passes, each ending in a JSON file:
//!
//! ```text
//! Fetcher → Extractor → weekly-update.json
//! weekly-update.json → Resolver (+ Chrome) → vehicle_data.json
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Fetch the newest post and extract it
//! weekly-track fetch
//!
//! # Look up the week's vehicles in the catalog
//! weekly-track resolve
//!
//! # Browse the result
//! weekly-track tui
//! ```

/// Application context and error handling.
///
/// The [`AppContext`](app::AppContext) struct wires together the config,
/// post fetcher, extractor and store.
pub mod app;

/// Command-line interface using clap.
///
/// - `fetch` / `extract <file>` - produce the weekly update
/// - `resolve` - look up vehicles and write vehicle data
/// - `run` - fetch then resolve
/// - `debug` - save the raw post body
/// - `show` / `tui` - view the stored data
pub mod cli;

/// TOML configuration, loaded from `~/.config/weekly-track/config.toml`.
pub mod config;

/// Core domain models.
///
/// - [`RedditPost`](domain::RedditPost): search result post
/// - [`WeeklyUpdate`](domain::WeeklyUpdate): extracted weekly content
/// - [`VehicleRecord`](domain::VehicleRecord): catalog data for one vehicle
pub mod domain;

/// Markdown field and section extraction.
pub mod extractor;

/// Reddit search client.
///
/// - [`PostSource`](fetcher::PostSource): Async trait for post fetching
/// - [`RedditFetcher`](fetcher::RedditFetcher): reqwest-based implementation
pub mod fetcher;

/// Vehicle name to catalog data resolution.
pub mod resolver;

/// Headless Chrome access to the vehicle catalog.
///
/// - [`CatalogPage`](scraper::CatalogPage): Async trait for page probing
/// - [`ChromeCatalog`](scraper::ChromeCatalog): chromiumoxide implementation
/// - [`ScraperConfig`](scraper::ScraperConfig): Selectors, timeouts and pacing
pub mod scraper;

/// JSON file persistence.
pub mod store;

/// Terminal dashboard.
///
/// Three panes built with ratatui: sections, entries, details.
/// Keybindings: j/k navigate, n/p page, Tab cycles panes,
/// o opens the catalog page, R re-fetches, q quits.
pub mod tui;
