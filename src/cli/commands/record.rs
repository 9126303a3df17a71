use daytally_domain::Record;

use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "spend",
            "Record money spent today or on a given date",
            "spend <amount> <comment> [dd.mm.yyyy]",
            cmd_spend,
        ),
        CommandEntry::new(
            "eat",
            "Record calories consumed today or on a given date",
            "eat <amount> <comment> [dd.mm.yyyy]",
            cmd_eat,
        ),
    ]
}

fn parse_record(
    context: &ShellContext,
    args: &[&str],
    usage: &str,
) -> Result<Record, CommandError> {
    if args.len() < 2 || args.len() > 3 {
        return Err(CommandError::InvalidArguments(format!("usage: {usage}")));
    }
    let amount: f64 = args[0]
        .parse()
        .map_err(|_| CommandError::InvalidArguments("amount must be numeric".into()))?;
    let comment = args[1];
    match args.get(2) {
        Some(date) => Ok(Record::from_date_str(amount, comment, date)?),
        None => Ok(Record::new(amount, comment, context.reference)),
    }
}

fn cmd_spend(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let record = parse_record(context, args, "spend <amount> <comment> [dd.mm.yyyy]")?;
    tracing::debug!(amount = record.amount, date = %record.date, "cash record added");
    context.cash.add_record(record);
    io::print_success("Spending recorded.");
    Ok(())
}

fn cmd_eat(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let record = parse_record(context, args, "eat <amount> <comment> [dd.mm.yyyy]")?;
    tracing::debug!(amount = record.amount, date = %record.date, "calorie record added");
    context.calories.add_record(record);
    io::print_success("Calories recorded.");
    Ok(())
}
