//! Step registry
//!
//! An ordered list of step descriptors. Each step names the field paths it
//! owns; pressing Next validates exactly those paths. A list section is
//! declared as a single path and covers every entry in it.

use crate::form::{FieldPath, Scope};

/// One wizard step and the fields it owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub fields: &'static [&'static str],
}

impl StepDescriptor {
    pub fn field_paths(&self) -> Vec<FieldPath> {
        self.fields.iter().map(|f| FieldPath::simple(f)).collect()
    }

    /// Validation scope for Next on this step
    pub fn scope(&self) -> Scope {
        Scope::Paths(self.field_paths())
    }

    pub fn owns(&self, path: &FieldPath) -> bool {
        self.field_paths().iter().any(|p| p.covers(path))
    }
}

pub const STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: "Step 1",
        name: "Personal Information",
        fields: &[
            "personalSchema.qualification",
            "personalSchema.title",
            "personalSchema.prefix",
            "personalSchema.firstName",
            "personalSchema.lastName",
            "personalSchema.emailId",
            "personalSchema.contactNo",
            "personalSchema.alternateContactNo",
            "personalSchema.emergencyContactNo",
            "personalSchema.aadhar",
            "personalSchema.pan",
            "personalSchema.dob",
            "personalSchema.gender",
            "personalSchema.nationality",
        ],
    },
    StepDescriptor {
        id: "Step 2",
        name: "Address",
        fields: &[
            "personalSchema.firstAddressLine1",
            "personalSchema.firstAddressLine2",
            "personalSchema.firstAddressLine3",
            "personalSchema.correspondenceAddressLine1",
            "personalSchema.correspondenceAddressLine2",
            "personalSchema.correspondenceAddressLine3",
        ],
    },
    StepDescriptor {
        id: "Step 3",
        name: "Other Details",
        fields: &[
            "personalSchema.religion",
            "personalSchema.caste",
            "personalSchema.category",
            "personalSchema.motherTongue",
            "personalSchema.speciallyChallenged",
            "personalSchema.speciallyChallengedRemarks",
            "personalSchema.languagesToSpeak",
            "personalSchema.languagesToRead",
            "personalSchema.languagesToWrite",
        ],
    },
    StepDescriptor {
        id: "Step 4",
        name: "Account Details",
        fields: &[
            "financialSchema.bankName",
            "financialSchema.accountNo",
            "financialSchema.accountName",
            "financialSchema.typeOfAccount",
            "financialSchema.branch",
            "financialSchema.ifscCode",
            "financialSchema.pfNumber",
            "financialSchema.uanNumber",
            "financialSchema.pensionNumber",
        ],
    },
    StepDescriptor {
        id: "Step 5",
        name: "Education Details",
        fields: &["educationSchema"],
    },
    StepDescriptor {
        id: "Step 6",
        name: "Dependents",
        fields: &[
            "dependentsSchema.motherName",
            "dependentsSchema.fatherName",
            "dependentsSchema.spouseName",
            "dependentsSchema.children",
        ],
    },
    StepDescriptor {
        id: "Step 7",
        name: "Complete",
        fields: &[],
    },
];

/// Last content step; leaving it submits the record
pub const SUBMIT_STEP: usize = STEPS.len() - 2;

/// Terminal, read-only step
pub const COMPLETE_STEP: usize = STEPS.len() - 1;

/// Descriptor at `index`, clamped to the terminal step
pub fn step(index: usize) -> &'static StepDescriptor {
    &STEPS[index.min(COMPLETE_STEP)]
}
