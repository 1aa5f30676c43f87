//! farescout
//!
//! Terminal flight-deal browser: search a static ticket catalog, browse
//! the filtered and sorted results as cards, and keep the good ones in an
//! in-memory saved-deals list.
//!
//! Pure core (model, store, search, state) under an impure shell (view,
//! source, logging); the shell owns all I/O.

pub mod config;
pub mod logging;
pub mod model;
pub mod search;
pub mod source;
pub mod state;
pub mod store;
pub mod view;
