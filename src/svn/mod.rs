//! Subversion collaborators for the nested working copy scanner

pub mod admin;
pub mod describer;
pub mod error_code;

pub use admin::{is_admin_directory, SvnAdminDirectories};
pub use describer::{classify, is_unversioned_or_not_found, SvnCliDescriber};
pub use error_code::{parse_error_codes, SvnErrorCode};
