pub mod icon;
pub mod meta;
pub mod slug;


pub use icon::Icon;
pub use meta::{entries, lookup, lookup_slug, PackageMeta};
pub use slug::PackageSlug;
