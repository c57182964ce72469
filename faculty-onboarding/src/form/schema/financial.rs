//! Rules for the financial sub-document

use crate::form::options::AccountType;
use crate::form::path::FieldPath;
use crate::form::types::FinancialInfo;
use crate::form::value::FINANCIAL;

use super::ValidationContext;
use super::rules::{self, optional};

const NAME_MAX: usize = 100;
const REFERENCE_MAX: usize = 30;

pub fn validate(f: &FinancialInfo, ctx: &mut ValidationContext) {
    let base = FieldPath::simple(FINANCIAL);
    let at = |name: &str| base.field(name);

    ctx.check(at("bankName"), || rules::text(&f.bank_name, NAME_MAX, "Bank name"));
    ctx.check(at("accountNo"), || rules::digit_range(&f.account_no, 9, 18, "Account number"));
    ctx.check(at("accountName"), || rules::text(&f.account_name, NAME_MAX, "Account name"));
    ctx.check(at("typeOfAccount"), || {
        rules::one_of(&f.type_of_account, AccountType::OPTIONS, "Type of account")
    });
    ctx.check(at("branch"), || rules::text(&f.branch, NAME_MAX, "Branch"));
    ctx.check(at("ifscCode"), || rules::ifsc(&f.ifsc_code, "IFSC code"));
    ctx.check(at("pfNumber"), || rules::max_length(&f.pf_number, REFERENCE_MAX, "PF number"));
    ctx.check(at("uanNumber"), || {
        optional(&f.uan_number, |v| rules::digits(v, 12, "UAN number"))
    });
    ctx.check(at("pensionNumber"), || {
        rules::max_length(&f.pension_number, REFERENCE_MAX, "Pension number")
    });
}

#[cfg(test)]
mod tests {
    use crate::form::path::FieldPath;
    use crate::form::schema::fixtures::valid_record;
    use crate::form::schema::{Scope, validate};

    #[test]
    fn test_account_type_membership() {
        let mut record = valid_record();
        record.financial.type_of_account = "Fixed".into();
        let errors = validate(&record, &Scope::All);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(&FieldPath::simple("financialSchema.typeOfAccount")));
    }

    #[test]
    fn test_optional_numbers() {
        let mut record = valid_record();
        record.financial.pf_number = "KA/BNG/0012345".into();
        record.financial.pension_number.clear();
        assert!(validate(&record, &Scope::All).is_empty());

        record.financial.uan_number = "1001".into();
        let errors = validate(&record, &Scope::All);
        assert!(errors.contains(&FieldPath::simple("financialSchema.uanNumber")));
    }

    #[test]
    fn test_reference_numbers_are_length_limited() {
        let mut record = valid_record();
        record.financial.pension_number = "9".repeat(31);
        let errors = validate(&record, &Scope::All);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(&FieldPath::simple("financialSchema.pensionNumber")));
    }

    #[test]
    fn test_ifsc_shape() {
        let mut record = valid_record();
        record.financial.ifsc_code = "SBIN001234".into();
        let errors = validate(&record, &Scope::All);
        assert!(errors.contains(&FieldPath::simple("financialSchema.ifscCode")));
    }
}
