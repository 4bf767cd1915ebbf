//! Root-relative asset path prefixes for a web game client.
//!
//! The host page carries three attributes on its `<html>` element
//! (`data-data-path`, `data-tileset-path`, `data-ws`). They are read once,
//! checked to start with `/`, and expanded into the ten prefixes the client
//! uses to find fonts, GUI images, music, sounds, sprites and its websocket.
//!
//! ```
//! use std::collections::HashMap;
//! use client_paths::PathSet;
//!
//! let host: HashMap<String, String> = [
//!     ("data-data-path", "/static/data"),
//!     ("data-tileset-path", "/static/tiles"),
//!     ("data-ws", "/ws"),
//! ]
//! .into_iter()
//! .map(|(k, v)| (k.to_string(), v.to_string()))
//! .collect();
//!
//! let paths = PathSet::resolve(&host)?;
//! assert_eq!(paths.weather(), "/static/data/sprites/weather");
//! # Ok::<(), client_paths::PathError>(())
//! ```

pub mod error;
pub mod model;
pub mod registry;
pub mod source;

pub use error::{InvalidReason, PathError};
pub use model::name::LogicalName;
pub use model::path_set::{PathSet, resolve_path};
pub use registry::Paths;
pub use source::{ConfigSource, HostDocument};
