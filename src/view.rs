//! Fixed camera viewpoints for exported figures.
//!
//! Matrices use the host's 18-value view layout: a 3×3 rotation, the camera
//! position relative to the origin of rotation, the origin of rotation, and
//! the front/back slab distances plus the orthoscopic flag.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Host view matrix.
pub type ViewMatrix = [f64; 18];

const SIDE_VIEW: ViewMatrix = [
    0.888_682_842,
    0.371_483_058,
    -0.268_776_417,
    -0.303_239_465,
    0.915_848_851,
    0.263_189_942,
    0.343_927_294,
    -0.152_389_228,
    0.926_546_395,
    0.000_021_487,
    0.000_063_539,
    -474.919_036_865,
    76.153_892_517,
    223.045_745_850,
    287.983_581_543,
    -19_575.746_093_750,
    20_525.484_375_000,
    -20.0,
];

const TOP_VIEW: ViewMatrix = [
    0.795_617_044,
    0.577_678_502,
    0.182_431_772,
    -0.285_880_089,
    0.092_522_122,
    0.953_790_188,
    0.534_102_142,
    -0.811_003_804,
    0.238_758_013,
    0.000_021_487,
    0.000_063_539,
    -474.919_036_865,
    76.153_892_517,
    223.045_745_850,
    287.983_581_543,
    -21_575.746_093_750,
    22_525.484_375_000,
    -20.0,
];

/// A named viewpoint of the HA trimer.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum View {
    /// Side-on view along the stalk.
    Side,
    /// Top-down view onto the receptor-binding head.
    Top,
}

impl View {
    /// Views exported for every sequence, in export order.
    pub const ALL: [Self; 2] = [Self::Side, Self::Top];

    /// Token used in output file names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Side => "side",
            Self::Top => "top",
        }
    }

    /// Camera matrix for this view.
    #[must_use]
    pub const fn matrix(self) -> &'static ViewMatrix {
        match self {
            Self::Side => &SIDE_VIEW,
            Self::Top => &TOP_VIEW,
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
