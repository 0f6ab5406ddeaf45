use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::expression::Operator;
use crate::core::sheet::{SheetSummary, TimeSheet};
use crate::errors::AppResult;
use crate::models::row::{Row, RowId, RowStatus};
use crate::ui::labels::{Label, Language};
use crate::ui::messages::{header, warning};
use crate::utils::colors::{invalid, paint_signed, style_for_status};
use crate::utils::formatting::{caption_line, describe_status};
use crate::utils::table::{Column, Table};
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static ROW_TERM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<inactive>~)?(?P<op>[+-])?(?P<value>[^x*@]*)(?:[x*](?P<mult>[^@]*))?(?:@(?P<label>.*))?$")
        .expect("row term pattern is valid")
});

/// One row argument split into its parts.
#[derive(Debug, Default, PartialEq)]
pub struct RowTerm {
    pub active: bool,
    pub operator: Operator,
    pub value: String,
    pub multiplier: Option<String>,
    pub label: Option<String>,
}

/// Split `[~][+|-]VALUE[xMULT][@LABEL]`. Every part is optional, so any
/// text yields a term; masking decides later whether it is usable.
pub fn parse_row_term(term: &str) -> RowTerm {
    let Some(caps) = ROW_TERM.captures(term.trim()) else {
        return RowTerm {
            active: true,
            value: term.to_string(),
            ..RowTerm::default()
        };
    };

    RowTerm {
        active: caps.name("inactive").is_none(),
        operator: caps
            .name("op")
            .map(|m| Operator::normalize(m.as_str()))
            .unwrap_or_default(),
        value: caps
            .name("value")
            .map(|m| m.as_str().to_string())
            .unwrap_or_default(),
        multiplier: caps.name("mult").map(|m| m.as_str().to_string()),
        label: caps.name("label").map(|m| m.as_str().to_string()),
    }
}

fn apply_term(sheet: &mut TimeSheet, id: RowId, term: &RowTerm) {
    sheet.set_operator(id, term.operator);
    sheet.set_value(id, &term.value);
    if let Some(m) = &term.multiplier {
        sheet.set_multiplier(id, m);
    }
    if let Some(l) = &term.label {
        sheet.set_description(id, l);
    }
    sheet.set_active(id, term.active);
}

/// Build a sheet from row arguments, reusing the initial empty row.
pub fn sheet_from_terms(cfg: &Config, norm: Option<&str>, terms: &[String]) -> TimeSheet {
    let mut sheet = TimeSheet::from_config(cfg);
    if let Some(n) = norm {
        sheet.set_daily_norm(n);
    }

    for (i, raw) in terms.iter().enumerate() {
        let id = if i == 0 {
            sheet.rows()[0].id
        } else {
            sheet.add_row()
        };
        apply_term(&mut sheet, id, &parse_row_term(raw));
    }
    sheet
}

#[derive(Serialize)]
struct RowReport<'a> {
    #[serde(flatten)]
    row: &'a Row,
    status: RowStatus,
}

#[derive(Serialize)]
struct SumReport<'a> {
    rows: Vec<RowReport<'a>>,
    summary: &'a SheetSummary,
}

/// Handle the `sum` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Sum { norm, rows } = &cli.command {
        let sheet = sheet_from_terms(cfg, norm.as_deref(), rows);
        let summary = sheet.recalculate();

        if cli.json {
            let report = SumReport {
                rows: sheet
                    .rows()
                    .iter()
                    .map(|row| RowReport {
                        row,
                        status: row.status(),
                    })
                    .collect(),
                summary: &summary,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let lang = cfg.language;
        header(Label::TimeSum.text(lang));
        print_rows(sheet.rows(), lang);
        print_summary(&summary, sheet.quick_norm_target(), lang);
    }
    Ok(())
}

fn print_rows(rows: &[Row], lang: Language) {
    let mut table = Table::new(vec![
        Column::new(Label::Row.text(lang)),
        Column::new(Label::Operator.text(lang)),
        Column::new(Label::Value.text(lang)),
        Column::new(Label::Multiplier.text(lang)),
        Column::new(Label::Status.text(lang)),
        Column::new(Label::Description.text(lang)),
    ]);

    for (i, row) in rows.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            row.operator.symbol().to_string(),
            row.value.clone(),
            row.multiplier.clone(),
            describe_status(row.status(), lang).to_string(),
            row.description.clone(),
        ]);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();
    if let Some(head) = lines.next() {
        println!("{}", head);
    }
    for (line, row) in lines.zip(rows) {
        println!("{}", style_for_status(row.status()).paint(line));
    }
    println!();
}

fn print_summary(summary: &SheetSummary, quick_norm: &str, lang: Language) {
    const WIDTH: usize = 20;

    let norm = if summary.daily_norm_invalid {
        warning(Label::InvalidNorm.text(lang));
        format!("{} ({})", summary.daily_norm, invalid(Label::InvalidNorm.text(lang)))
    } else {
        summary.daily_norm.clone()
    };

    println!("{}", caption_line(Label::DailyNorm.text(lang), &norm, WIDTH));
    println!("{}", caption_line(Label::QuickNorm.text(lang), quick_norm, WIDTH));
    println!(
        "{}",
        caption_line(
            Label::ClockFormat.text(lang),
            &paint_signed(&summary.clock, summary.total_seconds),
            WIDTH
        )
    );
    println!(
        "{}",
        caption_line(Label::DecimalFormat.text(lang), &summary.hours_text, WIDTH)
    );
    println!(
        "{}",
        caption_line(Label::DayCount.text(lang), &summary.days_text, WIDTH)
    );
}
