use crate::cli::core::{CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("today", "Show today's totals", "today", cmd_today),
        CommandEntry::new("week", "Show totals for the last 7 days", "week", cmd_week),
        CommandEntry::new(
            "balance",
            "Show the cash remaining for today",
            "balance [rub|usd|eur]",
            cmd_balance,
        ),
        CommandEntry::new(
            "calories",
            "Show the calories remaining for today",
            "calories",
            cmd_calories,
        ),
    ]
}

fn cmd_today(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!(
        "Spent today: {:.2} руб",
        context.cash.book().today_total()
    ));
    io::print_info(format!(
        "Eaten today: {} kcal",
        context.calories.book().today_total()
    ));
    Ok(())
}

fn cmd_week(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(format!(
        "Spent over the last 7 days: {:.2} руб",
        context.cash.book().week_total()
    ));
    io::print_info(format!(
        "Eaten over the last 7 days: {} kcal",
        context.calories.book().week_total()
    ));
    Ok(())
}

fn cmd_balance(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let currency = args
        .first()
        .copied()
        .unwrap_or(context.config.currency.as_str());
    let message = context.cash.cash_remained(currency)?;
    io::print_info(message);
    Ok(())
}

fn cmd_calories(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info(context.calories.calories_remained());
    Ok(())
}
