use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::vacation::{is_valid_daily_norm, vacation_days};
use crate::errors::AppResult;
use crate::ui::labels::Label;
use crate::ui::messages::{header, warning};
use crate::utils::formatting::caption_line;
use crate::utils::time::{format_signed_seconds, parse_signed_clock};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct VacationReport {
    pub planned: String,
    pub planned_seconds: i64,
    pub daily_norm: String,
    pub daily_norm_invalid: bool,
    pub days: f64,
}

/// Handle the `vacation` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Vacation { planned, norm } = &cli.command {
        let planned_seconds = parse_signed_clock(planned)?;
        let daily_norm = norm.clone().unwrap_or_else(|| cfg.daily_norm.clone());
        let daily_norm_invalid = !is_valid_daily_norm(&daily_norm);
        let days = if daily_norm_invalid {
            0.0
        } else {
            vacation_days(planned_seconds, &daily_norm)
        };

        let report = VacationReport {
            planned: format_signed_seconds(planned_seconds),
            planned_seconds,
            daily_norm,
            daily_norm_invalid,
            days,
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let lang = cfg.language;
        header(Label::VacationDays.text(lang));
        if report.daily_norm_invalid {
            warning(format!(
                "{}: '{}'",
                Label::InvalidNorm.text(lang),
                report.daily_norm
            ));
        }
        println!("{}", caption_line(Label::PlannedTime.text(lang), &report.planned, 20));
        println!("{}", caption_line(Label::DailyNorm.text(lang), &report.daily_norm, 20));
        println!(
            "{}",
            caption_line(Label::DayCount.text(lang), &format!("{:.2}", report.days), 20)
        );
    }
    Ok(())
}
