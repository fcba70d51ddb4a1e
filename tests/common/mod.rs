//! Common test utilities and helpers
#![allow(dead_code, unused_imports)]

pub mod fixtures;
pub mod svn;

pub use self::fixtures::{FakeDescriber, TreeBuilder};
pub use self::svn::{checkout, create_repository, is_svn_available};
