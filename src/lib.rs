#![doc = include_str!("../README.md")]

pub mod cli;
pub mod error;
pub mod package;
pub mod util;

pub use error::Error;
pub use package::{entries, lookup, lookup_slug, Icon, PackageMeta, PackageSlug};
