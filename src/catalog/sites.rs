//! Antigenic site tables.
//!
//! H1N1 uses the Sa/Sb/Ca1/Ca2/Cb nomenclature on the HA1 chains of the
//! 4LXV assembly; H3N2 uses sites A–E on the HA1 chains of its trimer.

use super::AntigenicSite;
use crate::selection::ResidueSpec::{Range as R, Single as S};

const H1_HA1: &str = "A+C+E";
const H3_HA1: &str = "A+A-2+A-3";

pub(super) const H1N1_SITES: &[AntigenicSite] = &[
    AntigenicSite {
        name: "site_Sa",
        color: "lightpink",
        chain_group: H1_HA1,
        residues: &[R(124, 125), R(153, 157), R(159, 164)],
    },
    AntigenicSite {
        name: "site_Sb",
        color: "lightblue",
        chain_group: H1_HA1,
        residues: &[R(184, 194)],
    },
    AntigenicSite {
        name: "site_Ca1",
        color: "paleyellow",
        chain_group: H1_HA1,
        residues: &[R(166, 170), R(203, 205), R(235, 237)],
    },
    AntigenicSite {
        name: "site_Ca2",
        color: "palecyan",
        chain_group: H1_HA1,
        residues: &[R(137, 142), R(221, 222)],
    },
    AntigenicSite {
        name: "site_Cb",
        color: "lightorange",
        chain_group: H1_HA1,
        residues: &[R(70, 75)],
    },
];

pub(super) const H3N2_SITES: &[AntigenicSite] = &[
    AntigenicSite {
        name: "site_A",
        color: "lightpink",
        chain_group: H3_HA1,
        residues: &[R(122, 127), S(129), R(131, 138), R(142, 146)],
    },
    AntigenicSite {
        name: "site_B",
        color: "lightblue",
        chain_group: H3_HA1,
        residues: &[
            R(155, 160),
            S(164),
            R(188, 190),
            R(193, 194),
            R(196, 197),
        ],
    },
    AntigenicSite {
        name: "site_C",
        color: "paleyellow",
        chain_group: H3_HA1,
        residues: &[S(50), S(53), S(54), S(275)],
    },
    AntigenicSite {
        name: "site_D",
        color: "palecyan",
        chain_group: H3_HA1,
        residues: &[R(201, 207), S(213), R(217, 220), S(230), S(244)],
    },
    AntigenicSite {
        name: "site_E",
        color: "lightorange",
        chain_group: H3_HA1,
        residues: &[R(62, 63), S(75), R(79, 83)],
    },
];
