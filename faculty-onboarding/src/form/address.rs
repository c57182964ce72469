//! "Same as first address" mirroring
//!
//! The correspondence address is derived from the primary address while the
//! flag is set. [`sync_correspondence`] is re-run after every change to the
//! record, so the mirror only ever flows primary → correspondence.

use super::path::FieldPath;
use super::types::{PersonalInfo, Record};
use super::value::PERSONAL;

pub const CORRESPONDENCE_FIELDS: [&str; 3] = [
    "correspondenceAddressLine1",
    "correspondenceAddressLine2",
    "correspondenceAddressLine3",
];

/// Re-derive the correspondence lines from the primary lines
///
/// Returns true when any line changed.
pub fn sync_correspondence(personal: &mut PersonalInfo) -> bool {
    let [l1, l2, l3] = personal.first_address().map(str::to_string);
    let changed = personal.correspondence_address() != [l1.as_str(), l2.as_str(), l3.as_str()];
    personal.correspondence_address_line1 = l1;
    personal.correspondence_address_line2 = l2;
    personal.correspondence_address_line3 = l3;
    changed
}

/// Blank all three correspondence lines
pub fn clear_correspondence(personal: &mut PersonalInfo) {
    personal.correspondence_address_line1.clear();
    personal.correspondence_address_line2.clear();
    personal.correspondence_address_line3.clear();
}

/// Apply the flag's effect after it is toggled
pub fn apply_same_address(record: &mut Record, same_address: bool) {
    if same_address {
        sync_correspondence(&mut record.personal);
    } else {
        clear_correspondence(&mut record.personal);
    }
}

/// Whether `path` is one of the mirrored correspondence lines
pub fn is_correspondence_path(path: &FieldPath) -> bool {
    let base = FieldPath::simple(PERSONAL);
    CORRESPONDENCE_FIELDS
        .iter()
        .any(|name| base.field(name) == *path)
}
