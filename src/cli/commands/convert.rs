use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::converter::{Conversions, ConverterField, TimeConverter};
use crate::errors::{AppError, AppResult};
use crate::ui::labels::{Label, Language};
use crate::ui::messages::{header, warning};
use crate::utils::formatting::caption_line;

fn field_label(field: ConverterField) -> Label {
    match field {
        ConverterField::Seconds => Label::Seconds,
        ConverterField::Minutes => Label::Minutes,
        ConverterField::Hours => Label::DecimalHours,
        ConverterField::Clock => Label::ClockField,
    }
}

/// Handle the `convert` subcommand
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Convert { from, value } = &cli.command {
        let lang = cfg.language;
        let from = ConverterField::from(*from);
        let mut converter = TimeConverter::new();
        converter.input(from, value);

        let Some(fields) = converter.fields.as_ref() else {
            return Err(AppError::InvalidArgument(format!(
                "{} ({}): '{}'",
                Label::InvalidField.text(lang),
                field_label(from).text(lang),
                value
            )));
        };

        if cli.json {
            println!("{}", serde_json::to_string_pretty(&converter)?);
            return Ok(());
        }

        header(Label::Converter.text(lang));
        if converter.invalid == Some(from) {
            warning(format!(
                "{}: '{}' → '{}'",
                Label::InvalidField.text(lang),
                value,
                converter.edited_text
            ));
        }
        print_fields(fields, lang);
    }
    Ok(())
}

fn print_fields(fields: &Conversions, lang: Language) {
    for field in ConverterField::ALL {
        println!(
            "{}",
            caption_line(field_label(field).text(lang), fields.get(field), 28)
        );
    }
}
