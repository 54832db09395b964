use chrono::Local;
use drinkpass_core::{CruiseSummary, DaySummary, ValueStatus};
use drinkpass_domain::{parse_length, parse_price};
use serde::Serialize;

use crate::cli::core::{usage_error, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section;
use crate::cli::registry::CommandEntry;
use crate::cli::ui::{meter_caption, render_meter, value_banner, METER_WIDTH};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new("length", "Set the cruise length in days", "length <days>", cmd_length),
        CommandEntry::new(
            "package",
            "Set the drink package price per day",
            "package <price>",
            cmd_package,
        ),
        CommandEntry::new("price", "Set your typical drink price", "price <price>", cmd_price),
        CommandEntry::new("day", "Show or change the current day", "day [n|next|prev]", cmd_day)
            .with_completions(&["next", "prev"]),
        CommandEntry::new(
            "drink",
            "Log a drink on the current day",
            "drink [price]",
            cmd_drink,
        ),
        CommandEntry::new("reset", "Clear every drink on the current day", "reset", cmd_reset),
        CommandEntry::new(
            "status",
            "Show today's stats, meter and verdict",
            "status",
            cmd_status,
        ),
        CommandEntry::new("log", "List the drinks logged today", "log", cmd_log),
        CommandEntry::new(
            "summary",
            "Day-by-day value for the whole cruise",
            "summary [json]",
            cmd_summary,
        )
        .with_completions(&["json"]),
    ]
}

fn cmd_length(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| usage_error("length <days>"))?;
    let length = context.tracker.set_cruise_length(parse_length(raw) as f64);
    io::print_success(format!(
        "Cruise length set to {} day{}.",
        length,
        if length == 1 { "" } else { "s" }
    ));
    Ok(())
}

fn cmd_package(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| usage_error("package <price>"))?;
    let price = context.tracker.set_package_price(parse_price(raw));
    if price > 0.0 {
        io::print_success(format!("Package price set to {} per day.", context.money(price)));
    } else {
        io::print_warning("Package price cleared. Set it to start tracking value.");
    }
    Ok(())
}

fn cmd_price(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args.first().ok_or_else(|| usage_error("price <price>"))?;
    let price = context.tracker.set_drink_price(parse_price(raw));
    if price > 0.0 {
        io::print_success(format!("Typical drink price set to {}.", context.money(price)));
    } else {
        io::print_warning("Drink price cleared. Set it before logging drinks.");
    }
    Ok(())
}

fn cmd_day(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let tracker = &mut context.tracker;
    let day = match args.first().map(|arg| arg.to_ascii_lowercase()) {
        None => tracker.current_day(),
        Some(arg) if arg == "next" => tracker.next_day(),
        Some(arg) if arg == "prev" || arg == "previous" => tracker.previous_day(),
        Some(arg) => {
            let requested: usize = arg.parse().map_err(|_| usage_error("day [n|next|prev]"))?;
            tracker.set_current_day(requested)
        }
    };
    io::print_info(format!("Day {} of {}", day, tracker.length_days()));
    Ok(())
}

fn cmd_drink(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let already_worth_it = context.tracker.today().got_value_worth;
    match args.first() {
        Some(raw) => context.tracker.log_drink_at(parse_price(raw))?,
        None => context.tracker.log_drink()?,
    };
    let today = context.tracker.today();
    io::print_success(format!(
        "Drink logged on Day {}. Total today: {}",
        today.day,
        context.money(today.total_spend)
    ));
    if today.got_value_worth && !already_worth_it {
        io::print_success("That one paid off the package for today!");
    }
    Ok(())
}

fn cmd_reset(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let day = context.tracker.current_day();
    if context.tracker.reset_current_day()? {
        io::print_success(format!("Day {} reset.", day));
    } else {
        io::print_info("Reset cancelled.");
    }
    Ok(())
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let today = context.tracker.today();
    let theme = context.config.theme;
    section(format!("Day {} of {}", today.day, context.tracker.length_days()));
    io::print_info(format!("Drinks logged: {}", today.drinks));
    io::print_info(format!("Value consumed: {}", context.money(today.total_spend)));
    if let Some(break_even) = today.break_even {
        io::print_info(format!("Break even at ~{} drinks/day", break_even));
    } else if !context.tracker.config().has_drink_price() {
        io::print_hint("Set your typical drink price to see the break-even point.");
    }
    io::print_info(render_meter(today.fill_percent, METER_WIDTH, theme));
    io::print_info(meter_caption(
        today.fill_percent,
        context.tracker.config().has_package_price(),
    ));

    let banner = value_banner(&today.status, today.day, theme, |amount| context.money(amount));
    match today.status {
        ValueStatus::Reached => io::print_success(banner),
        ValueStatus::Pending { .. } => io::print_warning(banner),
        ValueStatus::NeedsPackagePrice => io::print_hint(banner),
    }
    Ok(())
}

fn cmd_log(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let drinks = context.tracker.drinks_today();
    section(format!("Drinks log (Day {})", context.tracker.current_day()));
    if drinks.is_empty() {
        io::print_hint("No drinks logged yet. Use `drink` whenever you order one.");
        return Ok(());
    }
    for (index, drink) in drinks.iter().enumerate() {
        io::print_info(format!(
            "  #{:<3} {:>10}  {}",
            index + 1,
            context.money(drink.price()),
            drink.logged_at().with_timezone(&Local).format("%H:%M")
        ));
    }
    Ok(())
}

#[derive(Serialize)]
struct DayReport {
    day: usize,
    drinks: usize,
    total_spend: f64,
    fill_percent: u8,
    got_value_worth: bool,
}

impl From<&DaySummary> for DayReport {
    fn from(summary: &DaySummary) -> Self {
        Self {
            day: summary.day,
            drinks: summary.drinks,
            total_spend: summary.total_spend,
            fill_percent: summary.fill_percent,
            got_value_worth: summary.got_value_worth,
        }
    }
}

#[derive(Serialize)]
struct CruiseReport {
    days: Vec<DayReport>,
    total_spend: f64,
    package_total: f64,
    net_value: f64,
    days_worth_it: usize,
}

impl From<&CruiseSummary> for CruiseReport {
    fn from(summary: &CruiseSummary) -> Self {
        Self {
            days: summary.days.iter().map(DayReport::from).collect(),
            total_spend: summary.total_spend,
            package_total: summary.package_total,
            net_value: summary.net_value(),
            days_worth_it: summary.days_worth_it,
        }
    }
}

fn cmd_summary(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let summary = context.tracker.cruise_summary();
    match args.first().map(|arg| arg.to_ascii_lowercase()) {
        Some(format) if format == "json" => {
            let json = serde_json::to_string_pretty(&CruiseReport::from(&summary))?;
            println!("{}", json);
            return Ok(());
        }
        Some(_) => return Err(usage_error("summary [json]")),
        None => {}
    }

    section("Cruise summary");
    for day in &summary.days {
        let marker = if day.got_value_worth { "yes" } else { "no" };
        io::print_info(format!(
            "  Day {:<3} {:>3} drinks {:>10}  worth it: {}",
            day.day,
            day.drinks,
            context.money(day.total_spend),
            marker
        ));
    }
    io::print_info(format!("Total consumed: {}", context.money(summary.total_spend)));
    io::print_info(format!("Package cost  : {}", context.money(summary.package_total)));
    io::print_info(format!(
        "Days worth it : {} of {}",
        summary.days_worth_it,
        summary.days.len()
    ));
    let net = summary.net_value();
    let line = format!("Net value     : {}", context.money(net));
    if net >= 0.0 {
        io::print_success(line);
    } else {
        io::print_warning(line);
    }
    Ok(())
}
