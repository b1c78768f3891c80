//! # lex-tiles
//!
//! The review pipeline's human-facing half:
//! - [`model`] — the tile JSON the crowdsourcing front end consumes
//! - [`payload`] — the `wbeditentity` new-lexeme document carried by the
//!   accept button
//! - [`builder`] — draws queue lemmas and turns them into tiles
//! - [`server`] — the JSONP endpoint serving the game
//!
//! Building the edit payload is in scope; submitting it belongs to the
//! review platform.

pub mod builder;
pub mod error;
pub mod model;
pub mod payload;
pub mod server;

pub use builder::TileBuilder;
pub use error::TileError;
pub use model::{GameDescriptor, Tile};
pub use server::TileServer;
