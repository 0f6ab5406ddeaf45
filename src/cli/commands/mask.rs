use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::labels::Label;
use crate::utils::formatting::caption_line;
use crate::utils::mask::{ClockInputState, classify_clock, digits_to_clock, mask_to_clock};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct MaskReport<'a> {
    input: &'a str,
    masked: String,
    state: ClockInputState,
    clock: Option<String>,
}

/// Handle the `mask` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Mask { value } = &cli.command {
        let state = classify_clock(value);
        let report = MaskReport {
            input: value,
            masked: mask_to_clock(value),
            clock: match state {
                ClockInputState::Complete => Some(digits_to_clock(value)?),
                _ => None,
            },
            state,
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        let lang = cfg.language;
        println!("{}", caption_line(Label::Masked.text(lang), &report.masked, 12));
        println!(
            "{}",
            caption_line(Label::State.text(lang), report.state.as_str(), 12)
        );
    }
    Ok(())
}
