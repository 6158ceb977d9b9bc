//! High-level peptide view tying mass calculation and ion generation
//! together.

use serde::{
    Deserialize,
    Serialize,
};

use crate::constants::WATER_MASS;
use crate::errors::Result;
use crate::generate::generate_ions;
use crate::mass::{
    calculate_peptide_mass,
    PeptideMass,
};
use crate::models::{
    Ion,
    IonSeriesConfig,
    MassMode,
    ModSite,
};

/// A peptide with its charge state and modifications.
///
/// Fragment ions are computed lazily and cached; mutating the sequence,
/// charge, or modifications drops the cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Peptide {
    sequence: String,
    charge: usize,
    mods: Vec<ModSite>,
    mass_mode: MassMode,
    radical: bool,
    #[serde(skip)]
    fragments: Option<Vec<Ion>>,
}

impl Peptide {
    pub fn new(sequence: impl Into<String>, charge: usize, mods: Vec<ModSite>) -> Self {
        Self {
            sequence: sequence.into(),
            charge,
            mods,
            mass_mode: MassMode::Monoisotopic,
            radical: false,
            fragments: None,
        }
    }

    pub fn with_mass_mode(mut self, mass_mode: MassMode) -> Self {
        self.mass_mode = mass_mode;
        self
    }

    pub fn with_radical(mut self, radical: bool) -> Self {
        self.radical = radical;
        self
    }

    pub fn sequence(&self) -> &str {
        &self.sequence
    }

    pub fn charge(&self) -> usize {
        self.charge
    }

    pub fn mods(&self) -> &[ModSite] {
        &self.mods
    }

    pub fn mass_mode(&self) -> MassMode {
        self.mass_mode
    }

    pub fn is_radical(&self) -> bool {
        self.radical
    }

    pub fn set_sequence(&mut self, sequence: impl Into<String>) {
        self.fragments = None;
        self.sequence = sequence.into();
    }

    pub fn set_charge(&mut self, charge: usize) {
        self.fragments = None;
        self.charge = charge;
    }

    pub fn set_mods(&mut self, mods: Vec<ModSite>) {
        self.fragments = None;
        self.mods = mods;
    }

    /// The modified mass ladder, split into termini and residues.
    pub fn peptide_mass(&self) -> Result<PeptideMass> {
        calculate_peptide_mass(&self.sequence, &self.mods, self.mass_mode)
    }

    /// Total neutral mass, modifications and backbone water included.
    pub fn mass(&self) -> Result<f64> {
        Ok(self.peptide_mass()?.total())
    }

    /// Cumulative N-terminal ("b-family") and C-terminal ("y-family")
    /// backbone cleavage masses, one entry per residue.
    ///
    /// The y-family ladder is seeded with the C-terminal modification mass
    /// when present, otherwise with one water.
    pub fn ion_masses(&self) -> Result<(Vec<f64>, Vec<f64>)> {
        let pep_mass = self.peptide_mass()?;

        let mut b_base = pep_mass.nterm;
        let mut y_base = if pep_mass.cterm == 0.0 {
            WATER_MASS
        } else {
            pep_mass.cterm
        };

        let mut b_ions = Vec::with_capacity(pep_mass.residues.len());
        let mut y_ions = Vec::with_capacity(pep_mass.residues.len());
        for (forward, backward) in pep_mass
            .residues
            .iter()
            .zip(pep_mass.residues.iter().rev())
        {
            b_base += forward;
            b_ions.push(b_base);
            y_base += backward;
            y_ions.push(y_base);
        }

        Ok((b_ions, y_ions))
    }

    /// Fragments the peptide with the standard ion configuration, caching
    /// the result.
    pub fn fragment(&mut self) -> Result<&[Ion]> {
        if self.fragments.is_none() {
            let ions = self.fragment_with(&IonSeriesConfig::standard())?;
            self.fragments = Some(ions);
        }
        Ok(self.fragments.as_deref().unwrap_or_default())
    }

    /// Fragments the peptide with a caller-supplied ion configuration.
    /// Does not consult or update the cache.
    pub fn fragment_with(&self, config: &IonSeriesConfig) -> Result<Vec<Ion>> {
        let pep_mass = self.peptide_mass()?;
        let (b_masses, y_masses) = self.ion_masses()?;
        generate_ions(
            config,
            pep_mass.total(),
            &pep_mass.residues,
            &b_masses,
            &y_masses,
            self.charge,
            self.radical,
            &self.sequence,
        )
    }
}
