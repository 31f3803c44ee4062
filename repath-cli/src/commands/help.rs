//! Usage text for the option tokens.

use super::CommandContext;
use crate::error::CliError;
use repath::options::OptionCategory;
use repath::OptionId;
use std::io::Write;

fn description(id: OptionId) -> &'static str {
    match id {
        OptionId::Help => "Show this help",
        OptionId::List => "Print the cleaned list, entries that do not exist in [brackets] (default)",
        OptionId::Append => "Add an entry at the end (alias: Add)",
        OptionId::Prefix => "Add an entry at the front",
        OptionId::Remove => "Remove an entry",
        OptionId::Clean => "Write back the cleaned list",
        OptionId::User => "Edit the user variable (default)",
        OptionId::Process => "Edit the variable of this process",
        OptionId::Machine => "Edit the machine-wide variable",
        OptionId::Verbose => "Trace every decision",
        OptionId::IgnoreCase => "Do not fix entries to their on-disk case (alias: DoNotFixCase)",
        OptionId::KeepDuplicates => "Keep repeated entries",
        OptionId::KeepOrphans => "Keep entries that do not exist",
        OptionId::WhatIf => "Show the new value without writing it",
        OptionId::Confirm => "Ask before writing",
    }
}

/// Renders the usage text with the configured prefix and separator.
pub fn usage(prefix: char, separator: char) -> String {
    let mut text = format!(
        "Usage: repath [FLAGS] [{prefix}Operation] [{prefix}Target] [{prefix}Option]...\n"
    );

    for (title, category) in [
        ("Operations (choose one)", OptionCategory::Operation),
        ("Targets (choose one)", OptionCategory::Target),
        ("Options", OptionCategory::Flag),
    ] {
        text.push('\n');
        text.push_str(title);
        text.push_str(":\n");
        for id in OptionId::ALL.into_iter().filter(|id| id.category() == category) {
            let name = if id.requires_payload() {
                format!("{prefix}{id}{separator}<path>")
            } else {
                format!("{prefix}{id}")
            };
            text.push_str(&format!("  {name:<24}{}\n", description(id)));
        }
    }

    text
}

/// Execute the help command.
pub fn execute(ctx: &CommandContext<'_>) -> Result<(), CliError> {
    let prefix = ctx
        .config
        .option_prefix_chars()
        .first()
        .copied()
        .unwrap_or('/');
    let text = usage(prefix, ctx.config.option_separator_char());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(text.as_bytes())?;
    Ok(())
}
