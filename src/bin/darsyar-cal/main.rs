mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::Parser;
use darsyar_calendar::{Month, MonthView, Weekday, to_latin_digits, to_persian_digits};
use tracing::info;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let date = match &cli.date {
        Some(text) => parse_date(text)?,
        None => darsyar_calendar::today(),
    };
    info!(%date, "rendering month");

    let view = MonthView::at(date);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", render(&view, !cli.latin)?);
    }
    Ok(())
}

/// Parse a `YYYY-MM-DD` Gregorian date written with ASCII or Persian digits.
fn parse_date(text: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(&to_latin_digits(text), "%Y-%m-%d")
        .with_context(|| format!("invalid date `{text}`, expected YYYY-MM-DD"))
}

/// Lay the month out as a Saturday-first grid, today in brackets and Fridays starred.
fn render(view: &MonthView, persian: bool) -> Result<String> {
    let digits = |text: String| if persian { to_persian_digits(text) } else { text };
    let month = Month::new(view.month)?;

    let mut out = String::new();
    let title = if persian {
        format!("{} {}", month.persian_name(), to_persian_digits(view.year))
    } else {
        format!("{} {}", month.english_name(), view.year)
    };
    out.push_str(&title);
    out.push('\n');

    for weekday in Weekday::ALL {
        let label: String = if persian {
            weekday.persian_name().chars().take(1).collect()
        } else {
            format!("{weekday:?}").chars().take(2).collect()
        };
        out.push_str(&format!("{label:>4}"));
    }
    out.push('\n');

    for week in view.weeks() {
        for cell in week {
            let text = match cell {
                Some(day) if day.is_today => format!("[{:>2}]", day.day_of_month),
                Some(day) if day.weekday().is_holiday() => format!("{:>3}*", day.day_of_month),
                Some(day) => format!("{:>3} ", day.day_of_month),
                None => "    ".to_owned(),
            };
            out.push_str(&digits(text));
        }
        out.push('\n');
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nowruz_1403() -> MonthView {
        MonthView::at(NaiveDate::from_ymd_opt(2024, 3, 20).unwrap())
    }

    #[test]
    fn test_parse_date_accepts_persian_digits() {
        assert_eq!(
            parse_date("۲۰۲۴-۰۳-۲۰").unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
        );
        assert_eq!(
            parse_date("2024-05-04").unwrap(),
            NaiveDate::from_ymd_opt(2024, 5, 4).unwrap()
        );
    }

    #[test]
    fn test_parse_date_rejects_invalid_dates() {
        let err = parse_date("2024-13-01").unwrap_err();
        assert!(err.to_string().contains("2024-13-01"), "{err}");
        assert!(parse_date("1403/01/01").is_err());
    }

    #[test]
    fn test_render_latin_grid() {
        let out = render(&nowruz_1403(), false).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "Farvardin 1403");
        assert_eq!(lines[1], "  Sa  Su  Mo  Tu  We  Th  Fr");
        // 1403/01/01 was a Wednesday: four blank cells, then today, then the first Friday
        assert_eq!(lines[2], "                [ 1]  2   3*");
        assert_eq!(lines.len(), 2 + 5);
        assert_eq!(lines[6], " 25  26  27  28  29  30  31*");
    }

    #[test]
    fn test_render_persian_grid_has_no_ascii_digits() {
        let out = render(&nowruz_1403(), true).unwrap();
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], "فروردین ۱۴۰۳");
        for row in &lines[2..] {
            assert!(!row.chars().any(|c| c.is_ascii_digit()), "row {row:?}");
        }
        assert!(lines[2].contains("[ ۱]"));
    }
}
