use log::trace;
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::package::{Icon, PackageSlug};
use crate::Error;

/// What a rider sees for a package when choosing a ride.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PackageMeta {
    /// Display name, e.g. `"Bike"`.
    pub name: &'static str,
    pub icon: Icon,
    /// Capacity / price blurb shown beneath the name.
    pub description: &'static str,
}

const BIKE: PackageMeta = PackageMeta {
    name: "Bike",
    icon: Icon::Car,
    description: "Affordable solo rides",
};

const AUTO: PackageMeta = PackageMeta {
    name: "Auto",
    icon: Icon::Truck,
    description: "Affordable rides for 2-3 people",
};

const SEDAN: PackageMeta = PackageMeta {
    name: "Sedan",
    icon: Icon::Bus,
    description: "Comfortable rides for up to 4 people",
};

const SUV: PackageMeta = PackageMeta {
    name: "SUV",
    icon: Icon::Crown,
    description: "Spacious rides for up to 6 people",
};

impl PackageSlug {
    /// Display metadata for this package.
    ///
    /// Keep this match free of a wildcard arm: a package without
    /// metadata must fail to compile.
    #[inline]
    pub const fn meta(self) -> &'static PackageMeta {
        match self {
            PackageSlug::Bike => &BIKE,
            PackageSlug::Auto => &AUTO,
            PackageSlug::Sedan => &SEDAN,
            PackageSlug::Suv => &SUV,
        }
    }
}

/// Looks up the display metadata of a package.
#[inline]
pub fn lookup(slug: PackageSlug) -> &'static PackageMeta {
    trace!("Looking up package metadata for {slug}");
    slug.meta()
}

/// Parses `slug` and looks up its metadata.
///
/// ```rust
/// use ride_packages::{lookup_slug, Error};
///
/// assert_eq!(lookup_slug("bike").unwrap().description, "Affordable solo rides");
/// assert_eq!(lookup_slug(""), Err(Error::MissingSlug));
/// ```
#[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", err))]
pub fn lookup_slug(slug: &str) -> Result<&'static PackageMeta, Error> {
    PackageSlug::parse(slug).map(lookup)
}

/// Every package and its metadata, in the order fares are quoted.
pub fn entries() -> impl Iterator<Item = (PackageSlug, &'static PackageMeta)> {
    PackageSlug::iter().map(|slug| (slug, slug.meta()))
}
