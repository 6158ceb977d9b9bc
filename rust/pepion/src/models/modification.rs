use std::collections::HashMap;

use serde::{
    Deserialize,
    Serialize,
};

/// Where a modification sits on the peptide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModLocation {
    NTerm,
    CTerm,
    /// 1-indexed residue position.
    Residue(usize),
}

impl ModLocation {
    /// Resolves a textual site marker the way host callers supply them:
    /// the N-terminal spellings map to [`ModLocation::NTerm`], any other
    /// non-numeric marker maps to [`ModLocation::CTerm`].
    pub fn from_marker(marker: &str) -> Self {
        if let Ok(site) = marker.parse::<usize>() {
            return Self::Residue(site);
        }
        if marker.eq_ignore_ascii_case("nterm") || marker.eq_ignore_ascii_case("n-term") {
            Self::NTerm
        } else {
            Self::CTerm
        }
    }

    /// Index of this site in a mass ladder of `seq_len + 2` entries.
    pub fn ladder_index(self, seq_len: usize) -> usize {
        match self {
            Self::NTerm => 0,
            Self::CTerm => seq_len + 1,
            Self::Residue(site) => site,
        }
    }
}

/// A single modification: its mass delta, its site, and a display name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModSite {
    pub mass: f64,
    pub site: ModLocation,
    pub name: String,
}

impl ModSite {
    pub fn new(mass: f64, site: ModLocation, name: impl Into<String>) -> Self {
        Self {
            mass,
            site,
            name: name.into(),
        }
    }
}

/// Collapses a modification list into a sparse ladder-index -> delta map.
///
/// Multiple modifications on the same site are summed.
pub(crate) fn site_deltas(mods: &[ModSite], seq_len: usize) -> HashMap<usize, f64> {
    let mut deltas = HashMap::with_capacity(mods.len());
    for modification in mods {
        *deltas
            .entry(modification.site.ladder_index(seq_len))
            .or_insert(0.0) += modification.mass;
    }
    deltas
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markers_resolve_to_terminal_sites() {
        assert_eq!(ModLocation::from_marker("nterm"), ModLocation::NTerm);
        assert_eq!(ModLocation::from_marker("N-term"), ModLocation::NTerm);
        assert_eq!(ModLocation::from_marker("NTERM"), ModLocation::NTerm);
        assert_eq!(ModLocation::from_marker("cterm"), ModLocation::CTerm);
        assert_eq!(ModLocation::from_marker("anything"), ModLocation::CTerm);
        assert_eq!(ModLocation::from_marker("3"), ModLocation::Residue(3));
    }

    #[test]
    fn ladder_indices() {
        assert_eq!(ModLocation::NTerm.ladder_index(5), 0);
        assert_eq!(ModLocation::CTerm.ladder_index(5), 6);
        assert_eq!(ModLocation::Residue(2).ladder_index(5), 2);
    }

    #[test]
    fn duplicate_sites_accumulate() {
        let mods = [
            ModSite::new(1.5, ModLocation::Residue(2), "first"),
            ModSite::new(2.5, ModLocation::Residue(2), "second"),
        ];
        let deltas = site_deltas(&mods, 4);
        assert_eq!(deltas[&2], 4.0);
    }
}
