//! Static annotation catalog: strain → clade → subclade → chain group →
//! residues, plus per-strain antigenic sites.
//!
//! All tables are `'static` and immutable. Lookups are explicit per level so
//! that a subclade can only be reached through the clade that owns it.

mod clades;
mod sites;

use std::borrow::Cow;

use crate::{selection::ResidueSpec, strain::StrainType};

/// Prefix carried by every subclade key (`Subclade_C.1.9`).
pub const SUBCLADE_PREFIX: &str = "Subclade_";

/// Residues listed for one chain-group alias.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainResidues {
    /// Chain alias, e.g. `A+C+E` (chains sharing identical numbering).
    pub chain_group: &'static str,
    /// Residue numbers/ranges; never empty.
    pub residues: &'static [ResidueSpec],
}

/// A strain-specific antigenic site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AntigenicSite {
    /// Selection name, e.g. `site_Sa`.
    pub name: &'static str,
    /// Host color name.
    pub color: &'static str,
    /// Chain alias the site is scoped to.
    pub chain_group: &'static str,
    /// Residues making up the site.
    pub residues: &'static [ResidueSpec],
}

/// Subclade-defining residues.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubcladeDef {
    /// Catalog key (`Subclade_` prefixed).
    pub name: &'static str,
    /// Residues per chain group.
    pub chains: &'static [ChainResidues],
}

/// Clade-defining residues and the subclades refining the clade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CladeDef {
    /// Clade name, e.g. `5a.2a.1`.
    pub name: &'static str,
    /// Residues per chain group.
    pub chains: &'static [ChainResidues],
    /// Subclades owned by this clade.
    pub subclades: &'static [SubcladeDef],
}

impl CladeDef {
    /// Look up a subclade strictly under this clade. Accepts either the
    /// bare (`C.1.9`) or prefixed (`Subclade_C.1.9`) name.
    #[must_use]
    pub fn subclade(&self, name: &str) -> Option<&'static SubcladeDef> {
        let key = subclade_key(name);
        self.subclades.iter().find(|sub| sub.name == key)
    }
}

/// Catalog subtree for one strain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrainCatalog {
    /// Strain this subtree describes.
    pub strain: StrainType,
    /// Antigenic sites, in application order.
    pub sites: &'static [AntigenicSite],
    /// Clades, each owning its subclades.
    pub clades: &'static [CladeDef],
}

impl StrainCatalog {
    /// Look up a clade by exact name.
    #[must_use]
    pub fn clade(&self, name: &str) -> Option<&'static CladeDef> {
        self.clades.iter().find(|clade| clade.name == name)
    }

    /// Find the clade that owns a subclade, if any clade does.
    #[must_use]
    pub fn subclade_parent(&self, name: &str) -> Option<&'static CladeDef> {
        self.clades
            .iter()
            .find(|clade| clade.subclade(name).is_some())
    }
}

/// The full annotation catalog.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    strains: &'static [StrainCatalog],
}

const BUILTIN: &[StrainCatalog] = &[
    StrainCatalog {
        strain: StrainType::H1N1,
        sites: sites::H1N1_SITES,
        clades: clades::H1N1_CLADES,
    },
    StrainCatalog {
        strain: StrainType::H3N2,
        sites: sites::H3N2_SITES,
        clades: clades::H3N2_CLADES,
    },
];

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The built-in hemagglutinin catalog.
    #[must_use]
    pub const fn builtin() -> Self {
        Self { strains: BUILTIN }
    }

    /// A catalog over caller-supplied tables.
    #[must_use]
    pub const fn from_static(strains: &'static [StrainCatalog]) -> Self {
        Self { strains }
    }

    /// Subtree for `strain`, if catalogued.
    #[must_use]
    pub fn strain(&self, strain: StrainType) -> Option<&'static StrainCatalog> {
        self.strains.iter().find(|entry| entry.strain == strain)
    }

    /// Every catalogued strain subtree.
    #[must_use]
    pub const fn strains(&self) -> &'static [StrainCatalog] {
        self.strains
    }
}

/// Normalize a subclade name to its catalog key (`D` → `Subclade_D`).
#[must_use]
pub fn subclade_key(name: &str) -> Cow<'_, str> {
    let name = name.trim();
    if name.starts_with(SUBCLADE_PREFIX) {
        Cow::Borrowed(name)
    } else {
        Cow::Owned(format!("{SUBCLADE_PREFIX}{name}"))
    }
}

/// Strip the catalog prefix (`Subclade_D.1` → `D.1`).
#[must_use]
pub fn bare_subclade(name: &str) -> &str {
    let name = name.trim();
    name.strip_prefix(SUBCLADE_PREFIX).unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_subclade_strips_prefix() {
        assert_eq!(bare_subclade("Subclade_D.1"), "D.1");
        assert_eq!(bare_subclade("C.1.9"), "C.1.9");
    }

    #[test]
    fn every_strain_is_catalogued() {
        let catalog = Catalog::builtin();
        for strain in StrainType::ALL {
            let entry = catalog.strain(strain).unwrap();
            assert_eq!(entry.sites.len(), 5);
            assert!(!entry.clades.is_empty());
        }
    }

    #[test]
    fn no_empty_residue_lists() {
        for entry in Catalog::builtin().strains() {
            for site in entry.sites {
                assert!(!site.residues.is_empty(), "{}", site.name);
            }
            for clade in entry.clades {
                for chains in clade.chains {
                    assert!(!chains.residues.is_empty(), "{}", clade.name);
                }
                for sub in clade.subclades {
                    assert!(sub.name.starts_with(SUBCLADE_PREFIX));
                    for chains in sub.chains {
                        assert!(!chains.residues.is_empty(), "{}", sub.name);
                    }
                }
            }
        }
    }

    #[test]
    fn subclade_lookup_is_clade_scoped() {
        let h1 = Catalog::builtin().strain(StrainType::H1N1).unwrap();
        let clade = h1.clade("5a.2").unwrap();
        assert!(clade.subclade("Subclade_D").is_none());
        assert!(clade.subclade("C").is_some());

        let parent = h1.subclade_parent("D").unwrap();
        assert_eq!(parent.name, "5a.2a.1");
    }

    #[test]
    fn subclade_key_adds_prefix_once() {
        assert_eq!(subclade_key("C.1.9"), "Subclade_C.1.9");
        assert_eq!(subclade_key("Subclade_C.1.9"), "Subclade_C.1.9");
    }

    #[test]
    fn clade_lookup_is_exact() {
        let h1 = Catalog::builtin().strain(StrainType::H1N1).unwrap();
        assert!(h1.clade("5a.2a").is_some());
        assert!(h1.clade("5a2a").is_none());
        let h3 = Catalog::builtin().strain(StrainType::H3N2).unwrap();
        assert!(h3.clade("5a.2a").is_none());
        assert!(h3.clade("2a.1b").is_some());
    }
}
