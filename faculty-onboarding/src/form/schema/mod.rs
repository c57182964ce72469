//! Scoped validation of a [`Record`]
//!
//! Validation always runs against a [`Scope`]. A rule is only evaluated
//! when its field path is covered by the scope, so validating one step
//! never reports (or even computes) errors for fields on other steps.
//! Errors come back as data in document order; they are not `Err`s.

pub mod dependents;
pub mod education;
pub mod financial;
pub mod personal;
pub mod rules;

use serde::Serialize;

use super::path::FieldPath;
use super::types::Record;

/// Which fields a validation pass looks at
#[derive(Debug, Clone, PartialEq)]
pub enum Scope {
    /// The whole record
    All,
    /// Only fields at or under these paths
    Paths(Vec<FieldPath>),
}

impl Scope {
    pub fn paths<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<FieldPath>,
    {
        Self::Paths(paths.into_iter().map(Into::into).collect())
    }

    pub fn single(path: FieldPath) -> Self {
        Self::Paths(vec![path])
    }

    pub fn covers(&self, path: &FieldPath) -> bool {
        match self {
            Scope::All => true,
            Scope::Paths(declared) => declared.iter().any(|d| d.covers(path)),
        }
    }
}

/// A failed rule attached to the field it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub path: FieldPath,
    pub message: String,
}

/// Field errors in document order, at most one per path
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    entries: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Message for exactly this path
    pub fn get(&self, path: &FieldPath) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| &e.path == path)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, path: &FieldPath) -> bool {
        self.get(path).is_some()
    }

    /// First error in document order
    pub fn first(&self) -> Option<&FieldError> {
        self.entries.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.entries.iter()
    }

    /// Record an error, replacing any earlier message for the same path
    pub fn insert(&mut self, path: FieldPath, message: impl Into<String>) {
        let message = message.into();
        if let Some(existing) = self.entries.iter_mut().find(|e| e.path == path) {
            existing.message = message;
        } else {
            self.entries.push(FieldError { path, message });
        }
    }

    /// Replace every error inside `scope` with the result of a new pass
    /// over that scope, keeping errors outside it untouched
    pub fn replace_scope(&mut self, scope: &Scope, fresh: ValidationErrors) {
        match scope {
            Scope::All => *self = fresh,
            Scope::Paths(_) => {
                self.entries.retain(|e| !scope.covers(&e.path));
                for error in fresh.entries {
                    self.insert(error.path, error.message);
                }
            }
        }
    }

    /// Drop errors belonging to the removed list entry and shift errors of
    /// later entries down by one, so they stay with the same entries
    pub fn remove_list_entry(&mut self, list: &FieldPath, index: usize) {
        self.entries.retain(|e| e.path.index_under(list) != Some(index));
        for error in &mut self.entries {
            if let Some(i) = error.path.index_under(list) {
                if i > index {
                    error.path = error.path.with_index_under(list, i - 1);
                }
            }
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Collects errors for one validation pass over a scope
pub struct ValidationContext<'s> {
    scope: &'s Scope,
    errors: ValidationErrors,
}

impl<'s> ValidationContext<'s> {
    pub fn new(scope: &'s Scope) -> Self {
        Self {
            scope,
            errors: ValidationErrors::new(),
        }
    }

    /// Whether anything at or under `path` is in scope
    ///
    /// Used to skip whole list sections when no element can be covered.
    pub fn touches(&self, path: &FieldPath) -> bool {
        match self.scope {
            Scope::All => true,
            Scope::Paths(declared) => declared.iter().any(|d| d.covers(path) || path.covers(d)),
        }
    }

    /// Evaluate `rule` for `path` if the path is in scope
    pub fn check(&mut self, path: FieldPath, rule: impl FnOnce() -> rules::RuleResult) {
        if !self.scope.covers(&path) {
            return;
        }
        if let Err(message) = rule() {
            self.errors.insert(path, message);
        }
    }

    pub fn finish(self) -> ValidationErrors {
        self.errors
    }
}

/// Validate `record` over `scope`
pub fn validate(record: &Record, scope: &Scope) -> ValidationErrors {
    let mut ctx = ValidationContext::new(scope);
    personal::validate(&record.personal, &mut ctx);
    financial::validate(&record.financial, &mut ctx);
    education::validate(&record.education, &mut ctx);
    dependents::validate(&record.dependents, &mut ctx);
    ctx.finish()
}


#[cfg(test)]
mod tests {
    use super::fixtures::valid_record;
    use super::*;

    fn path(s: &str) -> FieldPath {
        FieldPath::parse(s).unwrap()
    }

    #[test]
    fn test_valid_record_passes_everything() {
        let errors = validate(&valid_record(), &Scope::All);
        assert!(errors.is_empty(), "unexpected errors: {:?}", errors);
    }

    #[test]
    fn test_empty_record_fails_in_document_order() {
        let errors = validate(&Record::default(), &Scope::All);
        assert!(!errors.is_empty());
        assert_eq!(errors.first().unwrap().path, path("personalSchema.qualification"));
    }

    #[test]
    fn test_scope_limits_evaluation() {
        let scope = Scope::paths([path("financialSchema.bankName")]);
        let errors = validate(&Record::default(), &scope);
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(&path("financialSchema.bankName")));
    }

    #[test]
    fn test_list_scope_covers_every_element() {
        let mut record = valid_record();
        record.education.append_default();
        let errors = validate(&record, &Scope::paths([path("educationSchema")]));
        assert!(errors.contains(&path("educationSchema[1].class")));
        assert!(errors.iter().all(|e| e.path.index_under(&Record::education_path()) == Some(1)));
    }

    #[test]
    fn test_replace_scope_keeps_outside_errors() {
        let mut errors = ValidationErrors::new();
        errors.insert(path("personalSchema.pan"), "bad pan");
        errors.insert(path("financialSchema.branch"), "missing");

        let scope = Scope::paths([path("financialSchema.branch")]);
        errors.replace_scope(&scope, ValidationErrors::new());

        assert!(errors.contains(&path("personalSchema.pan")));
        assert!(!errors.contains(&path("financialSchema.branch")));
    }

    #[test]
    fn test_remove_list_entry_reindexes() {
        let list = Record::children_path();
        let mut errors = ValidationErrors::new();
        errors.insert(path("dependentsSchema.children[0].name"), "a");
        errors.insert(path("dependentsSchema.children[1].name"), "b");
        errors.insert(path("dependentsSchema.children[2].dob"), "c");

        errors.remove_list_entry(&list, 1);

        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(&path("dependentsSchema.children[0].name")), Some("a"));
        assert_eq!(errors.get(&path("dependentsSchema.children[1].dob")), Some("c"));
    }

    #[test]
    fn test_errors_serialize_with_string_paths() {
        let mut errors = ValidationErrors::new();
        errors.insert(path("educationSchema.0.usn"), "USN is required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json[0]["path"], "educationSchema[0].usn");
    }
}
