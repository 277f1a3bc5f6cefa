//! Journal short names.
//!
//! Notes are named after the journal, so long names are swapped for a short code when
//! one is known. Keys are full journal names with spaces and periods stripped, exactly as
//! produced by [`strip_journal_name`](format::strip_journal_name).

use super::*;

lazy_static! {
  /// Abbreviations known without any configuration.
  static ref BUILTIN_ABBREVIATIONS: BTreeMap<&'static str, &'static str> = BTreeMap::from([
    ("JournalofMagnetismandMagneticMaterials", "JMMM"),
    ("JournalofAppliedPhysics", "JAP"),
    ("ApplPhysLett", "APL"),
    ("PhysRevLett", "PRL"),
    ("PhysRevApplied", "PRA"),
    ("SciRep", "SR"),
    ("PhysRevB", "PRB"),
    ("ACSApplMaterInterfaces", "ACSami"),
    ("JPhysD:ApplPhys", "JPDap"),
    ("NatureNanotech", "NatNano"),
    ("NatCommun", "NatCom"),
    ("JPhysC:SolidStatePhys", "JPCssp"),
    ("jnanoscinanotechnol", "JNN"),
    ("NatNanotechnol", "NatNano"),
    ("NatureMater", "NatMat"),
    ("PhysStatusSolidiB", "PSSB"),
  ]);
}

/// Read-only mapping from stripped journal names to short codes.
///
/// # Examples
///
/// ```
/// use papernote::journal::JournalTable;
///
/// let journals = JournalTable::default();
/// assert_eq!(journals.shorten("Phys. Rev. B"), "PRB");
/// assert_eq!(journals.shorten("Some Journal"), "SomeJournal");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalTable {
  /// Stripped full name to short code
  entries: BTreeMap<String, String>,
}

impl Default for JournalTable {
  fn default() -> Self {
    Self {
      entries: BUILTIN_ABBREVIATIONS
        .iter()
        .map(|(name, code)| ((*name).to_string(), (*code).to_string()))
        .collect(),
    }
  }
}

impl JournalTable {
  /// A table with no entries at all.
  pub fn empty() -> Self { Self { entries: BTreeMap::new() } }

  /// Adds or overrides entries. Keys are stripped the same way lookups are, so
  /// `"Phys. Rev. X"` and `"PhysRevX"` are the same entry.
  pub fn with_entries(mut self, entries: impl IntoIterator<Item = (String, String)>) -> Self {
    for (name, code) in entries {
      self.entries.insert(format::strip_journal_name(&name), code);
    }
    self
  }

  /// Looks up the short code for a journal name.
  pub fn get(&self, journal: &str) -> Option<&str> {
    self.entries.get(&format::strip_journal_name(journal)).map(String::as_str)
  }

  /// The short code for `journal` if one is known, otherwise the stripped name.
  pub fn shorten(&self, journal: &str) -> String {
    let stripped = format::strip_journal_name(journal);
    match self.entries.get(&stripped) {
      Some(code) => {
        debug!("Shortened journal {} to {}", stripped, code);
        code.clone()
      },
      None => stripped,
    }
  }

  /// Number of known abbreviations.
  pub fn len(&self) -> usize { self.entries.len() }

  /// Whether the table has no entries.
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }
}
