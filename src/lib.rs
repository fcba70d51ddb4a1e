//! # nested-roots
//!
//! `nested-roots` finds every independently rooted Subversion working copy
//! beneath a directory, the way repositories with embedded sub-checkouts need.
//! It powers the `nested-roots` CLI tool.
//!
//! ## Core Features
//!
//! - **Breadth-first discovery**: shallow boundaries are reported first and
//!   nothing beneath a boundary is ever visited.
//! - **Error-tolerant resolution**: "not versioned" answers trigger descent,
//!   real backend failures are reported as nodes carrying the error.
//! - **Cooperative cancellation**: a cancelled scan returns an explicit
//!   outcome instead of a truncated list.
//! - **Pluggable collaborators**: describer, membership predicate, child
//!   enumerator and administrative test are all traits.
//!
//! ## Example
//!
//! ```rust,no_run
//! use nested_roots::core::{scan, ScanOutcome};
//! use nested_roots::svn::SvnCliDescriber;
//!
//! match scan(".", SvnCliDescriber::default()) {
//!     ScanOutcome::Completed(nodes) => {
//!         for node in nodes {
//!             println!("{}: {}", node.directory.display(), node.url);
//!         }
//!     }
//!     ScanOutcome::Cancelled => eprintln!("cancelled"),
//! }
//! ```

pub mod commands;
pub mod core;
pub mod svn;
pub mod utils;
