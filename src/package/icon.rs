use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Symbolic glyph shown next to a package.
///
/// The identifier is the lowercase variant name (`car`, `truck`, ...).
/// Mapping it onto an actual image or icon component is left to whichever
/// presentation layer renders the package.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Car,
    Truck,
    Bus,
    Crown,
}
