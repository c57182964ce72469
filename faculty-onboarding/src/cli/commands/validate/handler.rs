//! Validate a record file outside the wizard

use anyhow::{Context, Result};
use colored::*;
use std::fs;
use std::path::Path;

use super::ValidateCommands;
use crate::form::{Record, Scope, ValidationErrors, validate};
use crate::wizard::{STEPS, SUBMIT_STEP, StepDescriptor};

/// Returns whether the record passed
pub fn handle_validate_command(args: &ValidateCommands) -> Result<bool> {
    let step = args.step.as_deref().map(resolve_step).transpose()?;
    let errors = validate_file(&args.file, step)?;

    if args.json {
        let json = serde_json::to_string_pretty(&errors).context("Failed to format errors as JSON")?;
        println!("{}", json);
        return Ok(errors.is_empty());
    }

    let scope_label = match step {
        Some(step) => format!("step '{}'", step.name),
        None => "whole record".to_string(),
    };

    if errors.is_empty() {
        println!(
            "{} {} ({})",
            "✓".bright_green().bold(),
            args.file.display().to_string().cyan(),
            scope_label
        );
        return Ok(true);
    }

    println!(
        "{} {} ({}): {} error(s)",
        "✗".bright_red().bold(),
        args.file.display().to_string().cyan(),
        scope_label,
        errors.len()
    );
    for error in errors.iter() {
        println!("  {} {}", error.path.to_string().yellow(), error.message.red());
    }
    Ok(false)
}

/// Read a record from `path` and validate it, whole or for one step
pub fn validate_file(path: &Path, step: Option<&StepDescriptor>) -> Result<ValidationErrors> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read record file: {}", path.display()))?;
    let record: Record = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse record JSON: {}", path.display()))?;

    let scope = step.map(StepDescriptor::scope).unwrap_or(Scope::All);
    log::debug!("Validating {} over {:?}", path.display(), scope);
    Ok(validate(&record, &scope))
}

/// Find a content step by 1-based number, id or name
pub fn resolve_step(raw: &str) -> Result<&'static StepDescriptor> {
    let content_steps = &STEPS[..=SUBMIT_STEP];
    let raw = raw.trim();

    if let Ok(number) = raw.parse::<usize>() {
        if (1..=content_steps.len()).contains(&number) {
            return Ok(&content_steps[number - 1]);
        }
        anyhow::bail!("Step number must be between 1 and {}, got {}", content_steps.len(), number);
    }

    content_steps
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(raw) || s.id.eq_ignore_ascii_case(raw))
        .ok_or_else(|| {
            let names: Vec<&str> = content_steps.iter().map(|s| s.name).collect();
            anyhow::anyhow!("Unknown step '{}'. Expected one of: {}", raw, names.join(", "))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FieldPath;
    use crate::form::schema::fixtures::valid_record;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_record(record: &Record) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", serde_json::to_string(record).unwrap()).unwrap();
        file
    }

    #[test]
    fn test_valid_file_has_no_errors() {
        let file = write_record(&valid_record());
        assert!(validate_file(file.path(), None).unwrap().is_empty());
    }

    #[test]
    fn test_step_scope_limits_errors() {
        let mut record = valid_record();
        record.personal.pan = "bad".into();
        record.financial.ifsc_code.clear();
        let file = write_record(&record);

        let account = resolve_step("Account Details").unwrap();
        let errors = validate_file(file.path(), Some(account)).unwrap();
        assert_eq!(errors.len(), 1);
        assert!(errors.contains(&FieldPath::parse("financialSchema.ifscCode").unwrap()));

        let all = validate_file(file.path(), None).unwrap();
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        let err = validate_file(file.path(), None).unwrap_err();
        assert!(err.to_string().contains("Failed to parse record JSON"));
    }

    #[test]
    fn test_resolve_step() {
        assert_eq!(resolve_step("1").unwrap().name, "Personal Information");
        assert_eq!(resolve_step("dependents").unwrap().name, "Dependents");
        assert_eq!(resolve_step("Step 3").unwrap().name, "Other Details");
        assert!(resolve_step("0").is_err());
        assert!(resolve_step("7").is_err());
        assert!(resolve_step("Complete").is_err());
    }
}
