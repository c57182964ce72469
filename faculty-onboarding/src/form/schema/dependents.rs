//! Rules for the dependents sub-document

use crate::form::options::ChildGender;
use crate::form::path::FieldPath;
use crate::form::types::{Child, DependentsInfo, Record};
use crate::form::value::DEPENDENTS;

use super::ValidationContext;
use super::rules;

const NAME_MAX: usize = 100;

pub fn validate(d: &DependentsInfo, ctx: &mut ValidationContext) {
    let base = FieldPath::simple(DEPENDENTS);

    ctx.check(base.field("motherName"), || rules::text(&d.mother_name, NAME_MAX, "Mother name"));
    ctx.check(base.field("fatherName"), || rules::text(&d.father_name, NAME_MAX, "Father name"));
    ctx.check(base.field("spouseName"), || {
        rules::max_length(&d.spouse_name, NAME_MAX, "Spouse name")
    });

    let list = Record::children_path();
    if !ctx.touches(&list) {
        return;
    }
    for (index, child) in d.children.iter().enumerate() {
        validate_child(child, &list.index(index), ctx);
    }
}

fn validate_child(c: &Child, base: &FieldPath, ctx: &mut ValidationContext) {
    ctx.check(base.field("name"), || rules::text(&c.name, NAME_MAX, "Child name"));
    ctx.check(base.field("gender"), || rules::one_of(&c.gender, ChildGender::OPTIONS, "Gender"));
    ctx.check(base.field("dob"), || rules::past_date(&c.dob, "Date of birth"));
}
