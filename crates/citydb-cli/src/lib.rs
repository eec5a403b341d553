//! citydb-cli
//! ==========
//!
//! Command-line interface for the `citydb-core` world cities store.
//!
//! This crate primarily provides a binary (`citydb-cli`). The library
//! target only carries this overview page. See the README for full usage
//! examples.
//!
//! Basic usage:
//!
//! ```text
//! citydb-cli --help
//! citydb-cli stats
//! citydb-cli query --search london --sort population:desc
//! citydb-cli page --page 3 --per-page 25 --json
//! ```
//!
//! For programmatic access to the store and query engine, use the
//! [`citydb-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
