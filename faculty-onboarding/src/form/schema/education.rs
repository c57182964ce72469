//! Rules for education entries
//!
//! Each entry is validated on its own; the section is valid when every
//! entry is. An empty list is valid.

use crate::form::list::KeyedList;
use crate::form::options::{PassClass, StudyMode};
use crate::form::path::FieldPath;
use crate::form::types::{EducationEntry, Record};

use super::ValidationContext;
use super::rules;

const TEXT_MAX: usize = 100;

pub fn validate(entries: &KeyedList<EducationEntry>, ctx: &mut ValidationContext) {
    let list = Record::education_path();
    if !ctx.touches(&list) {
        return;
    }
    for (index, entry) in entries.iter().enumerate() {
        validate_entry(entry, &list.index(index), ctx);
    }
}

fn validate_entry(e: &EducationEntry, base: &FieldPath, ctx: &mut ValidationContext) {
    let at = |name: &str| base.field(name);

    ctx.check(at("class"), || rules::text(&e.class, TEXT_MAX, "Program"));
    ctx.check(at("usn"), || rules::text(&e.usn, TEXT_MAX, "USN"));
    ctx.check(at("institution"), || rules::text(&e.institution, TEXT_MAX, "Institution"));
    ctx.check(at("specialization"), || rules::text(&e.specialization, TEXT_MAX, "Specialization"));
    ctx.check(at("mediumOfInstruction"), || {
        rules::text(&e.medium_of_instruction, TEXT_MAX, "Medium of instruction")
    });
    ctx.check(at("directCorr"), || {
        rules::one_of(&e.direct_corr, StudyMode::OPTIONS, "Direct/Correspondence")
    });
    ctx.check(at("passClass"), || rules::one_of(&e.pass_class, PassClass::OPTIONS, "Pass class"));
}
