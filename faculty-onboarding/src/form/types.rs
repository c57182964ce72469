//! Record types collected by the onboarding wizard
//!
//! Values are kept exactly as entered: select fields hold the chosen label
//! (or an empty string before a choice is made) and dates hold the raw
//! `YYYY-MM-DD` text. The schema layer decides whether they are acceptable.
//! Serialized names match the field-path segments used by the step registry.

use serde::{Deserialize, Serialize};

use super::list::KeyedList;
use super::options::{ChildGender, PassClass, StudyMode};

/// The complete document gathered across all wizard steps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "personalSchema", default)]
    pub personal: PersonalInfo,
    #[serde(rename = "financialSchema", default)]
    pub financial: FinancialInfo,
    #[serde(rename = "educationSchema", default)]
    pub education: KeyedList<EducationEntry>,
    #[serde(rename = "dependentsSchema", default)]
    pub dependents: DependentsInfo,
}

/// Personal details, addresses and languages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub qualification: String,
    pub title: String,
    pub prefix: String,
    pub first_name: String,
    pub last_name: String,
    pub email_id: String,
    pub contact_no: String,
    pub alternate_contact_no: String,
    pub emergency_contact_no: String,
    pub aadhar: String,
    pub pan: String,
    pub dob: String,
    pub gender: String,
    pub nationality: String,

    pub first_address_line1: String,
    pub first_address_line2: String,
    pub first_address_line3: String,
    pub correspondence_address_line1: String,
    pub correspondence_address_line2: String,
    pub correspondence_address_line3: String,

    pub religion: String,
    pub caste: String,
    pub category: String,
    pub mother_tongue: String,
    pub specially_challenged: bool,
    pub specially_challenged_remarks: String,
    pub languages_to_speak: Vec<String>,
    pub languages_to_read: Vec<String>,
    pub languages_to_write: Vec<String>,
}

impl PersonalInfo {
    /// The three primary address lines, in order
    pub fn first_address(&self) -> [&str; 3] {
        [
            &self.first_address_line1,
            &self.first_address_line2,
            &self.first_address_line3,
        ]
    }

    /// The three correspondence address lines, in order
    pub fn correspondence_address(&self) -> [&str; 3] {
        [
            &self.correspondence_address_line1,
            &self.correspondence_address_line2,
            &self.correspondence_address_line3,
        ]
    }
}

/// Salary account and provident fund details
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialInfo {
    pub bank_name: String,
    pub account_no: String,
    pub account_name: String,
    pub type_of_account: String,
    pub branch: String,
    pub ifsc_code: String,
    pub pf_number: String,
    pub uan_number: String,
    pub pension_number: String,
}

/// One education programme
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub class: String,
    pub usn: String,
    pub institution: String,
    pub specialization: String,
    pub medium_of_instruction: String,
    pub direct_corr: String,
    pub pass_class: String,
}

impl Default for EducationEntry {
    fn default() -> Self {
        Self {
            class: String::new(),
            usn: String::new(),
            institution: String::new(),
            specialization: String::new(),
            medium_of_instruction: String::new(),
            direct_corr: StudyMode::Direct.to_string(),
            pass_class: PassClass::First.to_string(),
        }
    }
}

/// Parents, spouse and children
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DependentsInfo {
    pub mother_name: String,
    pub father_name: String,
    pub spouse_name: String,
    pub children: KeyedList<Child>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Child {
    pub name: String,
    pub gender: String,
    pub dob: String,
}

impl Default for Child {
    fn default() -> Self {
        Self {
            name: String::new(),
            gender: ChildGender::Male.to_string(),
            dob: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_education_defaults() {
        let entry = EducationEntry::default();
        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            json!({
                "class": "",
                "usn": "",
                "institution": "",
                "specialization": "",
                "mediumOfInstruction": "",
                "directCorr": "Direct",
                "passClass": "First"
            })
        );
    }

    #[test]
    fn test_child_defaults() {
        let child = Child::default();
        assert_eq!(child.gender, "Male");
        assert!(child.name.is_empty());
        assert!(child.dob.is_empty());
    }

    #[test]
    fn test_record_wire_names() {
        let mut record = Record::default();
        record.personal.first_name = "Asha".into();
        record.dependents.children.append_default();

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["personalSchema"]["firstName"], "Asha");
        assert_eq!(value["educationSchema"], json!([]));
        assert_eq!(value["dependentsSchema"]["children"][0]["gender"], "Male");
    }

    #[test]
    fn test_partial_record_deserializes_with_defaults() {
        let record: Record = serde_json::from_value(json!({
            "personalSchema": { "lastName": "Rao" }
        }))
        .unwrap();
        assert_eq!(record.personal.last_name, "Rao");
        assert!(record.financial.bank_name.is_empty());
        assert!(record.education.is_empty());
    }
}
