//! Rules for the personal sub-document

use crate::form::options::{Caste, Category, Gender, Language, MotherTongue, Prefix, Religion};
use crate::form::path::FieldPath;
use crate::form::types::PersonalInfo;
use crate::form::value::PERSONAL;

use super::ValidationContext;
use super::rules::{self, optional};

const NAME_MAX: usize = 100;
const LINE_MAX: usize = 100;
const REMARKS_MAX: usize = 250;

pub fn validate(p: &PersonalInfo, ctx: &mut ValidationContext) {
    let base = FieldPath::simple(PERSONAL);
    let at = |name: &str| base.field(name);

    // Identity
    ctx.check(at("qualification"), || rules::text(&p.qualification, NAME_MAX, "Qualification"));
    ctx.check(at("title"), || rules::text(&p.title, NAME_MAX, "Title"));
    ctx.check(at("prefix"), || rules::one_of(&p.prefix, Prefix::OPTIONS, "Prefix"));
    ctx.check(at("firstName"), || rules::text(&p.first_name, NAME_MAX, "First name"));
    ctx.check(at("lastName"), || rules::text(&p.last_name, NAME_MAX, "Last name"));
    ctx.check(at("emailId"), || rules::email(&p.email_id, "Email ID"));
    ctx.check(at("contactNo"), || rules::phone(&p.contact_no, "Contact number"));
    ctx.check(at("alternateContactNo"), || {
        optional(&p.alternate_contact_no, |v| rules::phone(v, "Alternate contact number"))
    });
    ctx.check(at("emergencyContactNo"), || {
        rules::phone(&p.emergency_contact_no, "Emergency contact number")
    });
    ctx.check(at("aadhar"), || rules::digits(&p.aadhar, 12, "Aadhar number"));
    ctx.check(at("pan"), || rules::pan(&p.pan, "PAN number"));
    ctx.check(at("dob"), || rules::past_date(&p.dob, "Date of birth"));
    ctx.check(at("gender"), || rules::one_of(&p.gender, Gender::OPTIONS, "Gender"));
    ctx.check(at("nationality"), || rules::text(&p.nationality, NAME_MAX, "Nationality"));

    // Addresses; line 2 is optional on both
    ctx.check(at("firstAddressLine1"), || {
        rules::text(&p.first_address_line1, LINE_MAX, "First address line 1")
    });
    ctx.check(at("firstAddressLine2"), || {
        rules::max_length(&p.first_address_line2, LINE_MAX, "First address line 2")
    });
    ctx.check(at("firstAddressLine3"), || {
        rules::text(&p.first_address_line3, LINE_MAX, "First address line 3")
    });
    ctx.check(at("correspondenceAddressLine1"), || {
        rules::text(&p.correspondence_address_line1, LINE_MAX, "Correspondence address line 1")
    });
    ctx.check(at("correspondenceAddressLine2"), || {
        rules::max_length(&p.correspondence_address_line2, LINE_MAX, "Correspondence address line 2")
    });
    ctx.check(at("correspondenceAddressLine3"), || {
        rules::text(&p.correspondence_address_line3, LINE_MAX, "Correspondence address line 3")
    });

    // Other details
    ctx.check(at("religion"), || rules::one_of(&p.religion, Religion::OPTIONS, "Religion"));
    ctx.check(at("caste"), || rules::one_of(&p.caste, Caste::OPTIONS, "Caste"));
    ctx.check(at("category"), || rules::one_of(&p.category, Category::OPTIONS, "Category"));
    ctx.check(at("motherTongue"), || {
        rules::one_of(&p.mother_tongue, MotherTongue::OPTIONS, "Mother tongue")
    });
    // Remarks stay optional whether or not the flag is set; the flag itself
    // has no invalid value.
    ctx.check(at("speciallyChallengedRemarks"), || {
        rules::max_length(&p.specially_challenged_remarks, REMARKS_MAX, "Remarks")
    });
    ctx.check(at("languagesToSpeak"), || {
        rules::choices(&p.languages_to_speak, Language::OPTIONS, "languages to speak")
    });
    ctx.check(at("languagesToRead"), || {
        rules::choices(&p.languages_to_read, Language::OPTIONS, "languages to read")
    });
    ctx.check(at("languagesToWrite"), || {
        rules::choices(&p.languages_to_write, Language::OPTIONS, "languages to write")
    });
}
