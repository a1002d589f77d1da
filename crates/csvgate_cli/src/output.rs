use anyhow::Result;
use colored::*;
use csvgate_core::ValidationResult;

pub fn print_validation_result(result: &ValidationResult, format: &str) -> Result<()> {
    match format {
        "json" => print_json_result(result),
        _ => {
            print_text_result(result);
            Ok(())
        }
    }
}

fn print_text_result(result: &ValidationResult) {
    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION REPORT".bold());
    println!("{}", "═".repeat(60));

    if result.passed() {
        println!(
            "\n{} {}",
            "✓".green().bold(),
            "Validation PASSED: data is clean".green().bold()
        );
    } else {
        println!(
            "\n{} {}",
            "✗".red().bold(),
            "Validation FAILED".red().bold()
        );
    }

    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for (i, error) in result.errors.iter().enumerate() {
            println!("  {}. {}", i + 1, error.to_string().red());
        }
    }

    println!("\n{}", "Summary:".bold());
    println!("  Status:       {}", result.status);
    println!("  Total errors: {}", result.errors.len());
    println!("{}", "═".repeat(60));
}

fn print_json_result(result: &ValidationResult) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&result.to_json())?);
    Ok(())
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
