use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::Error;

/// The ride tiers a rider can book, distinguished by capacity, comfort and price.
///
/// Serialises, displays and parses as the lowercase slug shared by the
/// trip, driver and gateway services (`bike`, `auto`, `sedan`, `suv`).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum PackageSlug {
    /// Two-wheeler, single passenger.
    Bike = 0,

    /// Auto-rickshaw, two to three passengers.
    Auto = 1,

    /// Standard car, up to four passengers.
    Sedan = 2,

    /// Large car, up to six passengers.
    Suv = 3,
}

impl PackageSlug {
    /// Every package, in the order fares are quoted.
    pub const ALL: [PackageSlug; PackageSlug::COUNT] = [
        PackageSlug::Bike,
        PackageSlug::Auto,
        PackageSlug::Sedan,
        PackageSlug::Suv,
    ];

    /// Parses a slug received from outside the process.
    ///
    /// Surrounding whitespace is ignored; the slug itself is case sensitive.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", err))]
    pub fn parse(input: &str) -> Result<Self, Error> {
        let slug = input.trim();
        if slug.is_empty() {
            debug!("Rejected empty package slug");
            return Err(Error::MissingSlug);
        }

        PackageSlug::from_str(slug).map_err(|err| {
            debug!("Rejected package slug {slug:?}: {err}");
            Error::UnknownSlug(slug.to_string())
        })
    }

    #[inline]
    pub fn as_slug(&self) -> &'static str {
        self.into()
    }
}
