//! Create a new project from the bundled Next.js template

use std::env;
use std::io::{self, Write};

use anyhow::{Context, Result};
use colored::Colorize;

use basta::inject::{self, Outcome, PlaceholderMap};
use basta::paths;
use basta::scaffold;
use basta::template::Template;

/// Used when the prompt is left empty or stdin is not a terminal.
const DEFAULT_NAME: &str = "create-basta-app";

const APP_NAME_TOKEN: &str = "__APP_NAME__";

pub fn execute(name: Option<String>) -> Result<()> {
    let name = match name {
        Some(name) => name,
        None => prompt_name()?,
    };

    println!("🎨 Creating a new Basta app: {}\n", name.green());

    let template = Template::resolve("nextjs", &paths::templates_dir())?;
    let cwd = env::current_dir().context("Failed to resolve current directory")?;
    let project_dir = scaffold::materialize(&template, &cwd, &name)?;
    println!("✓ Copied the '{}' template", template.id());

    let mut placeholders = PlaceholderMap::new();
    placeholders.insert(APP_NAME_TOKEN, name.as_str());

    let report = inject::apply(&project_dir, template.substitution_targets(), &placeholders);
    for file in &report.files {
        match &file.outcome {
            Outcome::Applied => {
                println!("✓ Patched {}", file.path.display());
            }
            Outcome::SkippedMissing => {
                println!(
                    "{} Skipped {} (not present in this template)",
                    "⚠".yellow(),
                    file.path.display()
                );
            }
            Outcome::Failed(err) => {
                println!(
                    "{} Failed to patch {}: {}",
                    "✗".red(),
                    file.path.display(),
                    err
                );
            }
        }
    }

    if !report.success() {
        anyhow::bail!(
            "{} file(s) could not be patched; review the project at {}",
            report.failed_count(),
            project_dir.display()
        );
    }

    println!();
    println!(
        "{} Created {} at {}",
        "Success!".green().bold(),
        name,
        project_dir.display()
    );
    println!();
    println!("Next steps:");
    println!("  cd {name}");
    println!("  npm install");
    println!("  npm run dev");

    Ok(())
}

/// Ask for a project name on the terminal; outside a TTY fall back to the
/// default so piped invocations don't hang on stdin.
fn prompt_name() -> Result<String> {
    if !atty::is(atty::Stream::Stdin) {
        return Ok(DEFAULT_NAME.to_string());
    }

    print!("Project name [{DEFAULT_NAME}]: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let trimmed = input.trim();
    Ok(if trimmed.is_empty() {
        DEFAULT_NAME.to_string()
    } else {
        trimmed.to_string()
    })
}
