use colored::*;

use crate::wizard::{STEPS, SUBMIT_STEP};

/// Print the step registry
pub fn handle_steps_command() {
    for (index, step) in STEPS.iter().enumerate() {
        let marker = if index == SUBMIT_STEP { " (submits)".dimmed().to_string() } else { String::new() };
        println!("{} {}{}", format!("{}.", index + 1).bright_blue().bold(), step.name.bold(), marker);
        for field in step.fields {
            println!("     {}", field.cyan());
        }
    }
}
