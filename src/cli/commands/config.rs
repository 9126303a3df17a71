use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![CommandEntry::new(
        "config",
        "Show or change preferences",
        "config show | config set <key> <value>",
        cmd_config,
    )]
}

fn cmd_config(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    match args.first().copied() {
        Some("show") | None => context.show_config(),
        Some("set") if args.len() == 3 => context.set_config_value(args[1], args[2]),
        _ => Err(CommandError::InvalidArguments(
            "usage: config show | config set <key> <value>".into(),
        )),
    }
}
