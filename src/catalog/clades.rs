//! Clade and subclade defining-residue tables.
//!
//! Subclades are nested under the clade they refine; a subclade is only
//! reachable through its parent.

use super::{ChainResidues, CladeDef, SubcladeDef};
use crate::selection::ResidueSpec::Single as S;

const H1_HA1: &str = "A+C+E";
const H1_HA2: &str = "B+D+F";
const H3_HA1: &str = "A+A-2+A-3";
const H3_HA2: &str = "B+B-2+B-3";

const H3_HA2_DEFINING: ChainResidues = ChainResidues {
    chain_group: H3_HA2,
    residues: &[S(160), S(77), S(155), S(200), S(193)],
};

pub(super) const H1N1_CLADES: &[CladeDef] = &[
    CladeDef {
        name: "5a.2",
        chains: &[
            ChainResidues {
                chain_group: H1_HA1,
                residues: &[
                    S(74),
                    S(97),
                    S(129),
                    S(162),
                    S(163),
                    S(164),
                    S(185),
                    S(216),
                    S(256),
                    S(295),
                ],
            },
            ChainResidues {
                chain_group: H1_HA2,
                residues: &[S(124)],
            },
        ],
        subclades: &[SubcladeDef {
            name: "Subclade_C",
            chains: &[ChainResidues {
                chain_group: H1_HA1,
                residues: &[S(156), S(161)],
            }],
        }],
    },
    CladeDef {
        name: "5a.2a",
        chains: &[ChainResidues {
            chain_group: H1_HA1,
            residues: &[
                S(54),
                S(129),
                S(156),
                S(161),
                S(185),
                S(186),
                S(189),
                S(308),
            ],
        }],
        subclades: &[
            SubcladeDef {
                name: "Subclade_C.1",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[S(54), S(186), S(189), S(308)],
                }],
            },
            SubcladeDef {
                name: "Subclade_C.1.8",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[S(54), S(186), S(189), S(308), S(120), S(47)],
                }],
            },
            SubcladeDef {
                name: "Subclade_C.1.9",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[S(54), S(186), S(189), S(308), S(120), S(169)],
                }],
            },
        ],
    },
    CladeDef {
        name: "5a.2a.1",
        chains: &[ChainResidues {
            chain_group: H1_HA1,
            residues: &[
                S(54),
                S(129),
                S(137),
                S(142),
                S(156),
                S(161),
                S(185),
                S(186),
                S(189),
                S(308),
            ],
        }],
        subclades: &[
            SubcladeDef {
                name: "Subclade_C.1.1",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[S(137), S(142)],
                }],
            },
            SubcladeDef {
                name: "Subclade_D",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[S(54), S(186), S(189), S(308), S(216)],
                }],
            },
            SubcladeDef {
                name: "Subclade_D.1",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[S(54), S(186), S(189), S(308), S(45), S(216)],
                }],
            },
            SubcladeDef {
                name: "Subclade_D.2",
                chains: &[ChainResidues {
                    chain_group: H1_HA1,
                    residues: &[
                        S(54),
                        S(186),
                        S(189),
                        S(308),
                        S(113),
                        S(216),
                    ],
                }],
            },
            SubcladeDef {
                name: "Subclade_D.3",
                chains: &[
                    ChainResidues {
                        chain_group: H1_HA1,
                        residues: &[S(54), S(186), S(189), S(308), S(120)],
                    },
                    ChainResidues {
                        chain_group: H1_HA2,
                        residues: &[S(45)],
                    },
                ],
            },
        ],
    },
];

// No H3N2 subclades are catalogued yet.
pub(super) const H3N2_CLADES: &[CladeDef] = &[
    CladeDef {
        name: "2a.1",
        chains: &[
            ChainResidues {
                chain_group: H3_HA1,
                residues: &[
                    S(45),
                    S(48),
                    S(3),
                    S(144),
                    S(159),
                    S(160),
                    S(121),
                    S(171),
                    S(62),
                    S(142),
                    S(311),
                    S(131),
                    S(83),
                    S(94),
                    S(164),
                    S(186),
                    S(190),
                    S(193),
                    S(195),
                    S(156),
                    S(53),
                    S(104),
                    S(276),
                ],
            },
            H3_HA2_DEFINING,
        ],
        subclades: &[],
    },
    CladeDef {
        name: "2a.1b",
        chains: &[
            ChainResidues {
                chain_group: H3_HA1,
                residues: &[
                    S(45),
                    S(48),
                    S(3),
                    S(144),
                    S(159),
                    S(160),
                    S(121),
                    S(171),
                    S(62),
                    S(142),
                    S(311),
                    S(131),
                    S(83),
                    S(94),
                    S(164),
                    S(186),
                    S(190),
                    S(193),
                    S(195),
                    S(156),
                    S(53),
                    S(104),
                    S(276),
                    S(140),
                    S(299),
                ],
            },
            H3_HA2_DEFINING,
        ],
        subclades: &[],
    },
    CladeDef {
        name: "2b",
        chains: &[
            ChainResidues {
                chain_group: H3_HA1,
                residues: &[
                    S(45),
                    S(48),
                    S(3),
                    S(144),
                    S(159),
                    S(160),
                    S(121),
                    S(171),
                    S(62),
                    S(142),
                    S(311),
                    S(131),
                    S(83),
                    S(94),
                    S(164),
                    S(186),
                    S(190),
                    S(193),
                    S(195),
                    S(50),
                    S(79),
                    S(140),
                ],
            },
            H3_HA2_DEFINING,
        ],
        subclades: &[],
    },
];
