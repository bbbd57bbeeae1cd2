//! Rendering of log records.
//!
//! A [`LogRecord`] is rendered to one line in the configured [`LogFormat`].

use std::fmt::{self, Write as _};
use std::str::FromStr;

use chrono::{DateTime, Local, SecondsFormat, Utc};
use console::Style;
use thiserror::Error;

use crate::log::Severity;

/// Output layout of a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// `2026/10/16 12:00:00 [WARN] db: slow query`
    #[default]
    Plain,
    /// `{"level":"warn","unit":"db","message":"slow query","time":"..."}`
    Json,
    /// Human-friendly console layout, coloured when ANSI is enabled
    Console,
}

impl LogFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogFormat::Plain => "plain",
            LogFormat::Json => "json",
            LogFormat::Console => "console",
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a [`LogFormat`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown log format '{0}': expected plain, json or console")]
pub struct ParseFormatError(pub String);

impl FromStr for LogFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(LogFormat::Plain),
            "json" => Ok(LogFormat::Json),
            "console" | "pretty" | "human" => Ok(LogFormat::Console),
            _ => Err(ParseFormatError(s.to_string())),
        }
    }
}

/// One log write, as seen by the formatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    pub severity: Severity,
    pub unit: String,
    pub message: String,
    pub time: DateTime<Utc>,
}

impl LogRecord {
    /// Render without the trailing newline.
    ///
    /// `time` is left out entirely when `timestamps` is false.
    pub fn render(&self, format: LogFormat, timestamps: bool, ansi: bool) -> String {
        match format {
            LogFormat::Plain => self.render_plain(timestamps),
            LogFormat::Json => self.render_json(timestamps),
            LogFormat::Console => self.render_console(timestamps, ansi),
        }
    }

    fn render_plain(&self, timestamps: bool) -> String {
        let mut line = String::new();
        if timestamps {
            let local = self.time.with_timezone(&Local);
            let _ = write!(line, "{} ", local.format("%Y/%m/%d %H:%M:%S"));
        }
        let _ = write!(line, "[{}] {}: {}", self.severity, self.unit, self.message);
        line
    }

    fn render_json(&self, timestamps: bool) -> String {
        let mut object = serde_json::Map::new();
        object.insert("level".into(), self.severity.as_lower_str().into());
        object.insert("unit".into(), self.unit.clone().into());
        object.insert("message".into(), self.message.clone().into());
        if timestamps {
            let time = self.time.to_rfc3339_opts(SecondsFormat::Millis, true);
            object.insert("time".into(), time.into());
        }
        serde_json::Value::Object(object).to_string()
    }

    fn render_console(&self, timestamps: bool, ansi: bool) -> String {
        let mut line = String::new();
        if timestamps {
            let local = self.time.with_timezone(&Local);
            let stamp = local.format("%H:%M:%S%.3f").to_string();
            let _ = write!(line, "{} ", styled(Style::new().dim(), &stamp, ansi));
        }
        let label = format!("{:<5}", self.severity);
        let _ = write!(
            line,
            "{} {} > {}",
            styled(severity_style(self.severity), &label, ansi),
            styled(Style::new().bold(), &self.unit, ansi),
            self.message
        );
        line
    }
}

fn severity_style(severity: Severity) -> Style {
    match severity {
        Severity::Trace => Style::new().magenta(),
        Severity::Debug => Style::new().blue(),
        Severity::Info => Style::new().green(),
        Severity::Warn => Style::new().yellow(),
        Severity::Error => Style::new().red(),
        Severity::Fatal | Severity::Panic => Style::new().red().bold(),
    }
}

fn styled(style: Style, text: &str, ansi: bool) -> String {
    if ansi {
        style.force_styling(true).apply_to(text).to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn record(severity: Severity, unit: &str, message: &str) -> LogRecord {
        LogRecord {
            severity,
            unit: unit.to_string(),
            message: message.to_string(),
            time: Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 45).unwrap(),
        }
    }

    #[test]
    fn test_plain_without_timestamp() {
        let line = record(Severity::Warn, "db", "slow query").render(LogFormat::Plain, false, false);
        assert_eq!(line, "[WARN] db: slow query");
    }

    #[test]
    fn test_plain_keeps_empty_unit() {
        let line = record(Severity::Info, "", "hello").render(LogFormat::Plain, false, false);
        assert_eq!(line, "[INFO] : hello");
    }

    #[test]
    fn test_plain_timestamp_prefix() {
        let rec = record(Severity::Error, "db", "boom");
        let line = rec.render(LogFormat::Plain, true, false);
        let expected_stamp = rec
            .time
            .with_timezone(&Local)
            .format("%Y/%m/%d %H:%M:%S")
            .to_string();
        assert_eq!(line, format!("{} [ERROR] db: boom", expected_stamp));
    }

    #[test]
    fn test_json_key_order_and_values() {
        let line = record(Severity::Fatal, "db", "say \"hi\"").render(LogFormat::Json, true, false);
        assert_eq!(
            line,
            r#"{"level":"fatal","unit":"db","message":"say \"hi\"","time":"2026-10-16T12:30:45.000Z"}"#
        );
    }

    #[test]
    fn test_json_without_timestamp_has_no_time_key() {
        let line = record(Severity::Debug, "api", "x").render(LogFormat::Json, false, false);
        let value: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["level"], "debug");
        assert!(value.get("time").is_none());
    }

    #[test]
    fn test_console_plain_text_layout() {
        let line = record(Severity::Info, "db", "ready").render(LogFormat::Console, false, false);
        assert_eq!(line, "INFO  db > ready");
    }

    #[test]
    fn test_console_ansi_colours_label() {
        let line = record(Severity::Error, "db", "boom").render(LogFormat::Console, false, true);
        assert!(line.contains("\u{1b}["), "expected escape codes in {line:?}");
        assert!(line.contains("ERROR"));
        assert!(line.ends_with("> boom"));
    }

    #[test]
    fn test_format_parse() {
        assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert_eq!("pretty".parse::<LogFormat>(), Ok(LogFormat::Console));
        assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Plain));
        assert!("xml".parse::<LogFormat>().is_err());
        assert_eq!(LogFormat::default(), LogFormat::Plain);
    }
}
