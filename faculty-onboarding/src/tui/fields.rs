//! Field descriptors for each step
//!
//! A field is described by its path, a label and a kind (with the option
//! set for selects and checkbox groups). The view renders these generically
//! and reads/writes values through the path; it never touches the record's
//! struct layout directly.

use crate::form::options::{
    AccountType, Caste, Category, ChildGender, Gender, Language, MotherTongue, PassClass, Prefix,
    Religion, StudyMode,
};
use crate::form::{FieldPath, Record};
use crate::wizard::{Msg, State};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    /// `YYYY-MM-DD`
    Date,
    Select(&'static [&'static str]),
    Checkbox,
    MultiChoice(&'static [&'static str]),
}

impl FieldKind {
    /// Kinds edited by typing
    pub fn is_textual(&self) -> bool {
        matches!(self, FieldKind::Text | FieldKind::Email | FieldKind::Tel | FieldKind::Date)
    }

    pub fn max_length(&self) -> Option<usize> {
        match self {
            FieldKind::Tel => Some(10),
            FieldKind::Date => Some(10),
            _ => None,
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            FieldKind::Date => Some("YYYY-MM-DD"),
            FieldKind::Email => Some("name@example.com"),
            FieldKind::Tel => Some("10 digits"),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub path: FieldPath,
    pub label: String,
    pub kind: FieldKind,
    pub disabled: bool,
}

impl FieldSpec {
    fn new(path: FieldPath, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            path,
            label: label.into(),
            kind,
            disabled: false,
        }
    }

    fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

/// One focusable row in the step body
#[derive(Debug, Clone, PartialEq)]
pub enum FormItem {
    Field(FieldSpec),
    /// "Same as first address" checkbox
    SameAddress,
    /// Button that sends a message
    Action { label: String, msg: Msg },
    /// Non-focusable section heading
    Heading(String),
}

impl FormItem {
    pub fn is_focusable(&self) -> bool {
        !matches!(self, FormItem::Heading(_))
    }

    pub fn path(&self) -> Option<&FieldPath> {
        match self {
            FormItem::Field(spec) => Some(&spec.path),
            _ => None,
        }
    }

    /// List and index of the entry this row belongs to
    pub fn entry(&self) -> Option<(FieldPath, usize)> {
        match self {
            FormItem::Field(spec) => [Record::education_path(), Record::children_path()]
                .into_iter()
                .find_map(|list| spec.path.index_under(&list).map(|index| (list, index))),
            FormItem::Action { msg: Msg::RemoveEducation(index), .. } => {
                Some((Record::education_path(), *index))
            }
            FormItem::Action { msg: Msg::RemoveChild(index), .. } => {
                Some((Record::children_path(), *index))
            }
            _ => None,
        }
    }
}

fn personal(name: &str) -> FieldPath {
    FieldPath::simple("personalSchema").field(name)
}

fn financial(name: &str) -> FieldPath {
    FieldPath::simple("financialSchema").field(name)
}

fn dependents(name: &str) -> FieldPath {
    FieldPath::simple("dependentsSchema").field(name)
}

fn field(path: FieldPath, label: &str, kind: FieldKind) -> FormItem {
    FormItem::Field(FieldSpec::new(path, label, kind))
}

/// Rows to render for the current step
pub fn items_for_step(state: &State) -> Vec<FormItem> {
    use FieldKind::*;

    match state.current_step {
        0 => vec![
            field(personal("qualification"), "Qualification", Text),
            field(personal("title"), "Title", Text),
            field(personal("prefix"), "Prefix", Select(Prefix::OPTIONS)),
            field(personal("firstName"), "First Name", Text),
            field(personal("lastName"), "Last Name", Text),
            field(personal("emailId"), "Email ID", Email),
            field(personal("contactNo"), "Contact Number", Tel),
            field(personal("alternateContactNo"), "Alternate Contact Number", Tel),
            field(personal("emergencyContactNo"), "Emergency Contact Number", Tel),
            field(personal("aadhar"), "Aadhar Number", Text),
            field(personal("pan"), "PAN Number", Text),
            field(personal("dob"), "Date of Birth", Date),
            field(personal("gender"), "Gender", Select(Gender::OPTIONS)),
            field(personal("nationality"), "Nationality", Text),
        ],
        1 => {
            let locked = state.correspondence_locked();
            let mut items = vec![
                field(personal("firstAddressLine1"), "First Address Line 1", Text),
                field(personal("firstAddressLine2"), "First Address Line 2", Text),
                field(personal("firstAddressLine3"), "First Address Line 3", Text),
                FormItem::SameAddress,
            ];
            for (i, label) in [
                "Correspondence Address Line 1",
                "Correspondence Address Line 2",
                "Correspondence Address Line 3",
            ]
            .into_iter()
            .enumerate()
            {
                let path = personal(&format!("correspondenceAddressLine{}", i + 1));
                items.push(FormItem::Field(FieldSpec::new(path, label, Text).disabled(locked)));
            }
            items
        }
        2 => vec![
            field(personal("religion"), "Religion", Select(Religion::OPTIONS)),
            field(personal("caste"), "Caste", Select(Caste::OPTIONS)),
            field(personal("category"), "Category", Select(Category::OPTIONS)),
            field(personal("motherTongue"), "Mother Tongue", Select(MotherTongue::OPTIONS)),
            field(personal("speciallyChallenged"), "Specially Challenged", Checkbox),
            field(personal("speciallyChallengedRemarks"), "Specially Challenged Remarks", Text),
            field(personal("languagesToSpeak"), "Languages to Speak", MultiChoice(Language::OPTIONS)),
            field(personal("languagesToRead"), "Languages to Read", MultiChoice(Language::OPTIONS)),
            field(personal("languagesToWrite"), "Languages to Write", MultiChoice(Language::OPTIONS)),
        ],
        3 => vec![
            field(financial("bankName"), "Bank Name", Text),
            field(financial("accountNo"), "Account Number", Text),
            field(financial("accountName"), "Account Name", Text),
            field(financial("typeOfAccount"), "Type of Account", Select(AccountType::OPTIONS)),
            field(financial("branch"), "Branch", Text),
            field(financial("ifscCode"), "IFSC Code", Text),
            field(financial("pfNumber"), "PF Number", Text),
            field(financial("uanNumber"), "UAN Number", Text),
            field(financial("pensionNumber"), "Pension Number", Text),
        ],
        4 => education_items(state),
        5 => dependents_items(state),
        _ => Vec::new(),
    }
}

fn education_items(state: &State) -> Vec<FormItem> {
    use FieldKind::*;

    let mut items = Vec::new();
    let list = Record::education_path();
    for index in 0..state.record.education.len() {
        let base = list.index(index);
        items.push(FormItem::Heading(format!("Education #{}", index + 1)));
        items.push(field(base.field("class"), "Program (Class)", Text));
        items.push(field(base.field("usn"), "USN", Text));
        items.push(field(base.field("institution"), "Institution", Text));
        items.push(field(base.field("specialization"), "Specialization", Text));
        items.push(field(base.field("mediumOfInstruction"), "Medium of Instruction", Text));
        items.push(field(base.field("directCorr"), "Direct/Correspondence", Select(StudyMode::OPTIONS)));
        items.push(field(base.field("passClass"), "Pass Class", Select(PassClass::OPTIONS)));
        items.push(FormItem::Action {
            label: "Remove".to_string(),
            msg: Msg::RemoveEducation(index),
        });
    }
    items.push(FormItem::Action {
        label: "+ Add Education".to_string(),
        msg: Msg::AddEducation,
    });
    items
}

fn dependents_items(state: &State) -> Vec<FormItem> {
    use FieldKind::*;

    let mut items = vec![
        field(dependents("motherName"), "Mother Name", Text),
        field(dependents("fatherName"), "Father Name", Text),
        field(dependents("spouseName"), "Spouse Name", Text),
    ];
    let list = Record::children_path();
    for index in 0..state.record.dependents.children.len() {
        let base = list.index(index);
        items.push(FormItem::Heading(format!("Child #{}", index + 1)));
        items.push(field(base.field("name"), "Name", Text));
        items.push(field(base.field("gender"), "Gender", Select(ChildGender::OPTIONS)));
        items.push(field(base.field("dob"), "Date of Birth", Date));
        items.push(FormItem::Action {
            label: "Remove".to_string(),
            msg: Msg::RemoveChild(index),
        });
    }
    items.push(FormItem::Action {
        label: "+ Add Child".to_string(),
        msg: Msg::AddChild,
    });
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::STEPS;

    fn state_at(step: usize) -> State {
        State {
            current_step: step,
            ..State::default()
        }
    }

    #[test]
    fn test_rendered_fields_belong_to_their_step() {
        for (index, step) in STEPS.iter().enumerate() {
            let mut state = state_at(index);
            state.record.education.append_default();
            state.record.dependents.children.append_default();
            for item in items_for_step(&state) {
                if let Some(path) = item.path() {
                    assert!(step.owns(path), "{} renders {} it does not own", step.id, path);
                    assert!(state.record.field(path).is_ok(), "{} does not resolve", path);
                }
            }
        }
    }

    #[test]
    fn test_declared_scalar_fields_are_rendered() {
        for (index, step) in STEPS.iter().enumerate() {
            let state = state_at(index);
            let rendered: Vec<FieldPath> = items_for_step(&state)
                .iter()
                .filter_map(|i| i.path().cloned())
                .collect();
            for path in step.field_paths() {
                if state.record.field(&path).is_ok() {
                    assert!(rendered.contains(&path), "{} is never rendered", path);
                }
            }
        }
    }

    #[test]
    fn test_correspondence_disabled_when_mirrored() {
        let mut state = state_at(1);
        state.same_address = true;
        let disabled: Vec<bool> = items_for_step(&state)
            .into_iter()
            .filter_map(|i| match i {
                FormItem::Field(spec) => Some(spec.disabled),
                _ => None,
            })
            .collect();
        assert_eq!(disabled, vec![false, false, false, true, true, true]);
    }

    #[test]
    fn test_list_rows_follow_entries() {
        let mut state = state_at(4);
        assert_eq!(items_for_step(&state).len(), 1);
        state.record.education.append_default();
        state.record.education.append_default();
        let items = items_for_step(&state);
        assert!(items.contains(&FormItem::Action {
            label: "Remove".into(),
            msg: Msg::RemoveEducation(1)
        }));
        assert_eq!(items.last().unwrap(), &FormItem::Action {
            label: "+ Add Education".into(),
            msg: Msg::AddEducation
        });
    }

    #[test]
    fn test_entry_rows_know_their_entry() {
        let mut state = state_at(5);
        state.record.dependents.children.append_default();
        let entries: Vec<_> = items_for_step(&state).iter().map(FormItem::entry).collect();
        let child = Some((Record::children_path(), 0));
        assert_eq!(
            entries,
            vec![None, None, None, None, child.clone(), child.clone(), child.clone(), child, None]
        );
    }

    #[test]
    fn test_complete_step_has_no_rows() {
        assert!(items_for_step(&state_at(6)).is_empty());
    }
}
