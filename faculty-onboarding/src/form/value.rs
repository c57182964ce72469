//! Reading and writing record fields by path
//!
//! This is the binding the presentation layer uses: given a [`FieldPath`]
//! it can fetch the current value for display and write back user input
//! without knowing the record's concrete layout.

use anyhow::{Result, bail};

use super::path::{FieldPath, Segment};
use super::types::{Child, DependentsInfo, EducationEntry, FinancialInfo, PersonalInfo, Record};

/// A field value as exchanged with the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Free text, select label or ISO date
    Text(String),
    /// Checkbox
    Flag(bool),
    /// Multi-select checkbox group
    Choices(Vec<String>),
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Text(_) => "text",
            Self::Flag(_) => "flag",
            Self::Choices(_) => "choices",
        }
    }
}

enum Slot<'a> {
    Text(&'a String),
    Flag(&'a bool),
    Choices(&'a Vec<String>),
}

enum SlotMut<'a> {
    Text(&'a mut String),
    Flag(&'a mut bool),
    Choices(&'a mut Vec<String>),
}

impl Slot<'_> {
    fn to_value(&self) -> FieldValue {
        match self {
            Slot::Text(s) => FieldValue::Text((*s).clone()),
            Slot::Flag(b) => FieldValue::Flag(**b),
            Slot::Choices(v) => FieldValue::Choices((*v).clone()),
        }
    }
}

impl SlotMut<'_> {
    fn assign(self, path: &FieldPath, value: FieldValue) -> Result<()> {
        match (self, value) {
            (SlotMut::Text(slot), FieldValue::Text(v)) => *slot = v,
            (SlotMut::Flag(slot), FieldValue::Flag(v)) => *slot = v,
            (SlotMut::Choices(slot), FieldValue::Choices(v)) => *slot = v,
            (slot, value) => {
                let expected = match slot {
                    SlotMut::Text(_) => "text",
                    SlotMut::Flag(_) => "flag",
                    SlotMut::Choices(_) => "choices",
                };
                bail!(
                    "Field '{}' expects a {} value, got {}",
                    path,
                    expected,
                    value.kind_name()
                );
            }
        }
        Ok(())
    }
}

/// Map wire names to struct fields once, for both read and write access
macro_rules! field_slots {
    ($ty:ty { $($name:literal => $field:ident : $kind:ident),+ $(,)? }) => {
        impl $ty {
            /// Wire names of every addressable scalar field, in form order
            pub const FIELD_NAMES: &'static [&'static str] = &[$($name),+];

            fn slot(&self, name: &str) -> Option<Slot<'_>> {
                match name {
                    $($name => Some(Slot::$kind(&self.$field)),)+
                    _ => None,
                }
            }

            fn slot_mut(&mut self, name: &str) -> Option<SlotMut<'_>> {
                match name {
                    $($name => Some(SlotMut::$kind(&mut self.$field)),)+
                    _ => None,
                }
            }
        }
    };
}

field_slots!(PersonalInfo {
    "qualification" => qualification: Text,
    "title" => title: Text,
    "prefix" => prefix: Text,
    "firstName" => first_name: Text,
    "lastName" => last_name: Text,
    "emailId" => email_id: Text,
    "contactNo" => contact_no: Text,
    "alternateContactNo" => alternate_contact_no: Text,
    "emergencyContactNo" => emergency_contact_no: Text,
    "aadhar" => aadhar: Text,
    "pan" => pan: Text,
    "dob" => dob: Text,
    "gender" => gender: Text,
    "nationality" => nationality: Text,
    "firstAddressLine1" => first_address_line1: Text,
    "firstAddressLine2" => first_address_line2: Text,
    "firstAddressLine3" => first_address_line3: Text,
    "correspondenceAddressLine1" => correspondence_address_line1: Text,
    "correspondenceAddressLine2" => correspondence_address_line2: Text,
    "correspondenceAddressLine3" => correspondence_address_line3: Text,
    "religion" => religion: Text,
    "caste" => caste: Text,
    "category" => category: Text,
    "motherTongue" => mother_tongue: Text,
    "speciallyChallenged" => specially_challenged: Flag,
    "speciallyChallengedRemarks" => specially_challenged_remarks: Text,
    "languagesToSpeak" => languages_to_speak: Choices,
    "languagesToRead" => languages_to_read: Choices,
    "languagesToWrite" => languages_to_write: Choices,
});

field_slots!(FinancialInfo {
    "bankName" => bank_name: Text,
    "accountNo" => account_no: Text,
    "accountName" => account_name: Text,
    "typeOfAccount" => type_of_account: Text,
    "branch" => branch: Text,
    "ifscCode" => ifsc_code: Text,
    "pfNumber" => pf_number: Text,
    "uanNumber" => uan_number: Text,
    "pensionNumber" => pension_number: Text,
});

field_slots!(EducationEntry {
    "class" => class: Text,
    "usn" => usn: Text,
    "institution" => institution: Text,
    "specialization" => specialization: Text,
    "mediumOfInstruction" => medium_of_instruction: Text,
    "directCorr" => direct_corr: Text,
    "passClass" => pass_class: Text,
});

field_slots!(DependentsInfo {
    "motherName" => mother_name: Text,
    "fatherName" => father_name: Text,
    "spouseName" => spouse_name: Text,
});

field_slots!(Child {
    "name" => name: Text,
    "gender" => gender: Text,
    "dob" => dob: Text,
});

pub const PERSONAL: &str = "personalSchema";
pub const FINANCIAL: &str = "financialSchema";
pub const EDUCATION: &str = "educationSchema";
pub const DEPENDENTS: &str = "dependentsSchema";
pub const CHILDREN: &str = "children";

impl Record {
    /// Read the scalar field at `path`
    pub fn field(&self, path: &FieldPath) -> Result<FieldValue> {
        let slot = self.slot(path)?;
        Ok(slot.to_value())
    }

    /// Write `value` into the scalar field at `path`
    pub fn set_field(&mut self, path: &FieldPath, value: FieldValue) -> Result<()> {
        let slot = self.slot_mut(path)?;
        slot.assign(path, value)
    }

    /// Whether `path` names a scalar field or one of the list sections
    ///
    /// List sections resolve even when empty, since a step may declare the
    /// whole collection as a single path.
    pub fn resolves(&self, path: &FieldPath) -> bool {
        if Self::is_list_path(path) {
            return true;
        }
        match path.segments() {
            [Segment::Field(section), Segment::Index(_), Segment::Field(name)]
                if section == EDUCATION =>
            {
                EducationEntry::FIELD_NAMES.contains(&name.as_str())
            }
            [
                Segment::Field(section),
                Segment::Field(list),
                Segment::Index(_),
                Segment::Field(name),
            ] if section == DEPENDENTS && list == CHILDREN => Child::FIELD_NAMES.contains(&name.as_str()),
            _ => self.slot(path).is_ok(),
        }
    }

    /// Path of the education list
    pub fn education_path() -> FieldPath {
        FieldPath::simple(EDUCATION)
    }

    /// Path of the children list
    pub fn children_path() -> FieldPath {
        FieldPath::simple(DEPENDENTS).field(CHILDREN)
    }

    fn is_list_path(path: &FieldPath) -> bool {
        *path == Self::education_path() || *path == Self::children_path()
    }

    fn slot(&self, path: &FieldPath) -> Result<Slot<'_>> {
        let found = match path.segments() {
            [Segment::Field(section), Segment::Field(name)] => match section.as_str() {
                PERSONAL => self.personal.slot(name),
                FINANCIAL => self.financial.slot(name),
                DEPENDENTS => self.dependents.slot(name),
                _ => None,
            },
            [Segment::Field(section), Segment::Index(i), Segment::Field(name)]
                if section == EDUCATION =>
            {
                self.education.get(*i).and_then(|e| e.slot(name))
            }
            [
                Segment::Field(section),
                Segment::Field(list),
                Segment::Index(i),
                Segment::Field(name),
            ] if section == DEPENDENTS && list == CHILDREN => {
                self.dependents.children.get(*i).and_then(|c| c.slot(name))
            }
            _ => None,
        };
        found.ok_or_else(|| anyhow::anyhow!("Unknown field path '{}'", path))
    }

    fn slot_mut(&mut self, path: &FieldPath) -> Result<SlotMut<'_>> {
        let found = match path.segments() {
            [Segment::Field(section), Segment::Field(name)] => match section.as_str() {
                PERSONAL => self.personal.slot_mut(name),
                FINANCIAL => self.financial.slot_mut(name),
                DEPENDENTS => self.dependents.slot_mut(name),
                _ => None,
            },
            [Segment::Field(section), Segment::Index(i), Segment::Field(name)]
                if section == EDUCATION =>
            {
                self.education.get_mut(*i).and_then(|e| e.slot_mut(name))
            }
            [
                Segment::Field(section),
                Segment::Field(list),
                Segment::Index(i),
                Segment::Field(name),
            ] if section == DEPENDENTS && list == CHILDREN => {
                self.dependents.children.get_mut(*i).and_then(|c| c.slot_mut(name))
            }
            _ => None,
        };
        found.ok_or_else(|| anyhow::anyhow!("Unknown field path '{}'", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn test_set_and_read_scalar_field() {
        let mut record = Record::default();
        record
            .set_field(&path("personalSchema.lastName"), FieldValue::text("Rao"))
            .unwrap();
        assert_eq!(record.personal.last_name, "Rao");
        assert_eq!(
            record.field(&path("personalSchema.lastName")).unwrap(),
            FieldValue::text("Rao")
        );
    }

    #[test]
    fn test_list_element_fields() {
        let mut record = Record::default();
        record.education.append_default();
        record.dependents.children.append_default();

        record
            .set_field(&path("educationSchema.0.usn"), FieldValue::text("1RV20CS001"))
            .unwrap();
        record
            .set_field(&path("dependentsSchema.children[0].name"), FieldValue::text("Meera"))
            .unwrap();

        assert_eq!(record.education.get(0).unwrap().usn, "1RV20CS001");
        assert_eq!(record.dependents.children.get(0).unwrap().name, "Meera");
        assert_eq!(
            record.field(&path("educationSchema[0].passClass")).unwrap(),
            FieldValue::text("First")
        );
    }

    #[test]
    fn test_out_of_range_index_is_unknown() {
        let mut record = Record::default();
        assert!(record.field(&path("educationSchema.0.usn")).is_err());
        assert!(
            record
                .set_field(&path("dependentsSchema.children[0].name"), FieldValue::text("x"))
                .is_err()
        );
    }

    #[test]
    fn test_kind_mismatch_is_rejected() {
        let mut record = Record::default();
        let err = record
            .set_field(&path("personalSchema.speciallyChallenged"), FieldValue::text("yes"))
            .unwrap_err();
        assert!(err.to_string().contains("expects a flag value"));

        record
            .set_field(
                &path("personalSchema.languagesToRead"),
                FieldValue::Choices(vec!["Tamil".into()]),
            )
            .unwrap();
        assert_eq!(record.personal.languages_to_read, vec!["Tamil".to_string()]);
    }

    #[test]
    fn test_resolves() {
        let record = Record::default();
        assert!(record.resolves(&path("personalSchema.pan")));
        assert!(record.resolves(&path("educationSchema")));
        assert!(record.resolves(&path("dependentsSchema.children")));
        assert!(record.resolves(&path("educationSchema.4.class")));
        assert!(!record.resolves(&path("personalSchema.speciallyChanged")));
        assert!(!record.resolves(&path("financialSchema")));
    }
}
