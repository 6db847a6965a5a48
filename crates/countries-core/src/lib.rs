//! Countries Core - data and view state for the world countries directory
//!
//! This crate holds everything the directory does that is not drawing to a
//! terminal:
//!
//! - **Model**: `Country` and `Language`, deserialized from the public dataset
//! - **Loader**: the single outbound request for the full country collection
//! - **Filter**: substring search over name, capital and language names
//! - **Flags**: broken flag tracking and the bundled placeholder
//! - **State**: `DirectoryState`, the reducer that owns view state, query,
//!   pagination and broken flags
//! - **Config**: endpoint, page size and probe settings
//!
//! # State machine
//!
//! ```text
//! Loading --(fetch ok)--> Loaded   [terminal]
//! Loading --(fetch fail)--> Error  [terminal]
//! ```

pub mod config;
pub mod error;
pub mod filter;
pub mod flags;
pub mod loader;
pub mod model;
pub mod state;

pub use config::DirectoryConfig;
pub use error::{ConfigError, LoadError, Result};
pub use filter::{filter_countries, SearchQuery};
pub use flags::{BrokenFlagSet, FlagSource, PLACEHOLDER_FLAG, PLACEHOLDER_FLAG_SVG};
pub use loader::CountryClient;
pub use model::{format_population, Country, Language};
pub use state::{Action, DirectoryState, ViewState};
