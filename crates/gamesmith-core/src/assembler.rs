//! Template assembly: splice a logic block into a structure template.
//!
//! The structure template carries two sentinel markers. Everything strictly
//! between them is replaced by the logic text; the rest of the template is
//! preserved byte-for-byte. A malformed template (missing, duplicated or
//! out-of-order markers) is a fatal contract violation — no partial output.

use crate::domain::{Artifact, AssembleError};

/// Start of the logic region. The marker itself is preserved in the output.
pub const LOGIC_BEGIN_MARKER: &str = "/* == LOGIC BEGIN == */";

/// Start of the trailer region.
pub const LOGIC_END_MARKER: &str = "/* == LOGIC END == */";

/// Splice `logic` into `structure` between the two logic markers.
///
/// Well-formed input contains each marker exactly once, begin before end.
pub fn assemble(structure: &str, logic: &str) -> Result<Artifact, AssembleError> {
    let begin = find_unique(structure, LOGIC_BEGIN_MARKER)?;
    let end = find_unique(structure, LOGIC_END_MARKER)?;

    let logic_start = begin + LOGIC_BEGIN_MARKER.len();
    if logic_start > end {
        return Err(AssembleError::MarkersOutOfOrder {
            begin: LOGIC_BEGIN_MARKER,
            end: LOGIC_END_MARKER,
        });
    }

    let mut out = String::with_capacity(structure.len() + logic.len());
    out.push_str(&structure[..logic_start]);
    out.push_str(logic);
    out.push_str(&structure[end..]);
    Ok(Artifact::new(out))
}

fn find_unique(text: &str, marker: &'static str) -> Result<usize, AssembleError> {
    let first = text
        .find(marker)
        .ok_or(AssembleError::MissingMarker { marker })?;
    if text[first + marker.len()..].contains(marker) {
        return Err(AssembleError::AmbiguousMarker { marker });
    }
    Ok(first)
}
