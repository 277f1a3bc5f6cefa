//! String cleanup applied to raw metadata before it lands in a [`Record`].
//!
//! Registry abstracts arrive wrapped in JATS markup. [`clean_abstract`] strips a fixed
//! vocabulary of tags by plain substitution; it is not a markup parser, and tags outside
//! that vocabulary are left exactly as they were.

use super::*;

/// Section title the registry embeds at the start of many abstracts.
const ABSTRACT_TITLE: &str = "<jats:title>Abstract</jats:title>";

/// Wrapper tags removed without touching their content.
const WRAPPER_TAGS: [&str; 4] = ["p", "inline-formula", "alternatives", "tex-math"];

/// Superscript wrappers, removed before MathML islands are dropped.
const SUPERSCRIPT_TAGS: [&str; 1] = ["msup"];

/// Marker the abstract is split on to drop embedded MathML.
const MATH_MARKER: &str = "mml:math";

/// Removes the JATS markup the registry wraps abstracts in.
///
/// The substitutions run in a fixed order:
/// 1. the embedded `Abstract` title is removed
/// 2. `<jats:p>`, `<jats:inline-formula>`, `<jats:alternatives>` and `<jats:tex-math>` open and
///    close tags are removed
/// 3. `<jats:msup>` tags are removed, the text is split on `mml:math` keeping only the segments
///    outside of math, the leftover `< >` is deleted and `$$` collapses to `$`
///
/// # Examples
///
/// ```
/// use papernote::format::clean_abstract;
///
/// assert_eq!(clean_abstract("<jats:p>Text</jats:p>"), "Text");
/// assert_eq!(clean_abstract("<jats:tex-math>$$x^2$$</jats:tex-math>"), "$x^2$");
/// ```
pub fn clean_abstract(abstract_text: &str) -> String {
  let mut text = abstract_text.replace(ABSTRACT_TITLE, "");

  for tag in WRAPPER_TAGS {
    text = strip_tag(&text, tag);
  }

  for tag in SUPERSCRIPT_TAGS {
    text = strip_tag(&text, tag);
    text = text.split(MATH_MARKER).step_by(2).collect::<Vec<_>>().join(" ");
    text = text.replace("< >", "").replace("$$", "$");
  }

  trace!("Cleaned abstract: {}", text);
  text
}

/// Removes `<jats:{tag}>` and `</jats:{tag}>` wherever they occur.
fn strip_tag(text: &str, tag: &str) -> String {
  text.replace(&format!("<jats:{tag}>"), "").replace(&format!("</jats:{tag}>"), "")
}

/// Normalizes one component of an author name: spaces become hyphens, periods are dropped.
///
/// ```
/// use papernote::format::normalize_name_part;
///
/// assert_eq!(normalize_name_part("Jean P."), "Jean-P");
/// ```
pub fn normalize_name_part(name: &str) -> String { name.replace(' ', "-").replace('.', "") }

/// Strips spaces and periods from a journal name, giving the key used by the journal table.
///
/// ```
/// use papernote::format::strip_journal_name;
///
/// assert_eq!(strip_journal_name("Phys. Rev. B"), "PhysRevB");
/// ```
pub fn strip_journal_name(name: &str) -> String { name.replace(' ', "").replace('.', "") }
