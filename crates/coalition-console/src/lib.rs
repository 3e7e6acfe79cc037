//! Colorful console output for coalition queries.
//!
//! Provides a custom `tracing` layer that formats engine and server events
//! with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Query start/end, dataset switches, position updates
//! - **DEBUG**: Parallel scoring and request details

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_DIRECTIVE: &str = "coalition=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(CoalitionConsoleLayer)
            .try_init();
    });
}

fn print_banner() {
    let banner = r#"
  ____            _ _ _   _
 / ___|___   __ _| (_) |_(_) ___  _ __
| |   / _ \ / _` | | | __| |/ _ \| '_ \
| |__| (_) | (_| | | | |_| | (_) | | | |
 \____\___/ \__,_|_|_|\__|_|\___/|_| |_|
"#;

    let version_line = format!("           v{} - Coalition Explorer\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats coalition events with colors.
pub struct CoalitionConsoleLayer;

impl<S: Subscriber> Layer<S> for CoalitionConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();

        if !metadata.target().starts_with("coalition") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    dataset: Option<String>,
    party: Option<String>,
    addr: Option<String>,
    enumeration: Option<String>,
    error: Option<String>,
    min_parties: Option<u64>,
    max_parties: Option<u64>,
    rules: Option<u64>,
    search_space: Option<u64>,
    candidates: Option<u64>,
    admissible: Option<u64>,
    returned: Option<u64>,
    pruned: Option<u64>,
    duration_ms: Option<u64>,
    parties: Option<u64>,
    total_seats: Option<u64>,
    datasets: Option<u64>,
    subsets: Option<u64>,
    economic: Option<f64>,
    social: Option<f64>,
    majority_only: Option<bool>,
}

impl EventVisitor {
    fn set_str(&mut self, name: &str, value: String) {
        match name {
            "event" => self.event = Some(value),
            "message" => self.message = Some(value),
            "dataset" => self.dataset = Some(value),
            "party" => self.party = Some(value),
            "addr" => self.addr = Some(value),
            "enumeration" => self.enumeration = Some(value),
            "error" => self.error = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field.name(), s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "min_parties" => self.min_parties = Some(value),
            "max_parties" => self.max_parties = Some(value),
            "rules" => self.rules = Some(value),
            "search_space" => self.search_space = Some(value),
            "candidates" => self.candidates = Some(value),
            "admissible" => self.admissible = Some(value),
            "returned" => self.returned = Some(value),
            "pruned" => self.pruned = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "parties" => self.parties = Some(value),
            "total_seats" => self.total_seats = Some(value),
            "datasets" => self.datasets = Some(value),
            "subsets" => self.subsets = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_f64(&mut self, field: &Field, value: f64) {
        match field.name() {
            "economic" => self.economic = Some(value),
            "social" => self.social = Some(value),
            _ => {}
        }
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "majority_only" {
            self.majority_only = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field.name(), value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "server_start" => format_server_start(v),
        "catalog_loaded" => format_catalog_loaded(v),
        "dataset_loaded" => format_dataset_loaded(v),
        "position_updated" => format_position_updated(v),
        "query_start" => format_query_start(v),
        "query_end" => format_query_end(v),
        "parallel_scoring" => format_parallel_scoring(v),
        _ if level <= Level::WARN => format_warning(v, level),
        _ => String::new(),
    }
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
        .bright_black()
        .to_string()
}

fn count(n: Option<u64>) -> String {
    n.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn format_server_start(v: &EventVisitor) -> String {
    format!(
        "{} {} Listening on {}",
        timestamp(),
        "▶".bright_green().bold(),
        v.addr.as_deref().unwrap_or("?").bright_white().bold()
    )
}

fn format_catalog_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Catalog │ {} datasets │ active {}",
        timestamp(),
        "●".bright_cyan(),
        count(v.datasets).bright_yellow(),
        v.dataset.as_deref().unwrap_or("?").white().bold()
    )
}

fn format_dataset_loaded(v: &EventVisitor) -> String {
    format!(
        "{} {} Dataset {} │ {} parties │ {} seats",
        timestamp(),
        "●".bright_cyan(),
        v.dataset.as_deref().unwrap_or("?").white().bold(),
        count(v.parties).bright_yellow(),
        count(v.total_seats).bright_yellow()
    )
}

fn format_position_updated(v: &EventVisitor) -> String {
    format!(
        "{} {} Position {} → ({}, {})",
        timestamp(),
        "✎".bright_blue(),
        v.party.as_deref().unwrap_or("?").white().bold(),
        format!("{:+.2}", v.economic.unwrap_or(0.0)).bright_magenta(),
        format!("{:+.2}", v.social.unwrap_or(0.0)).bright_magenta()
    )
}

fn format_query_start(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Query {} │ {}..={} parties │ {} rules",
        timestamp(),
        "▶".bright_green().bold(),
        v.dataset.as_deref().unwrap_or("?").white().bold(),
        count(v.min_parties).bright_yellow(),
        count(v.max_parties).bright_yellow(),
        count(v.rules).bright_yellow()
    );
    if let Some(search_space) = v.search_space {
        output.push_str(&format!(
            " │ {} subsets",
            count(Some(search_space)).bright_yellow()
        ));
    }
    if v.majority_only == Some(true) {
        output.push_str(&format!(" │ {}", "majority only".bright_cyan()));
    }
    if let Some(enumeration) = &v.enumeration {
        output.push_str(&format!(" │ {}", enumeration.bright_black()));
    }
    output
}

fn format_query_end(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} Query done │ {} candidates │ {} admissible │ {} returned │ {}",
        timestamp(),
        "■".bright_cyan().bold(),
        count(v.candidates).bright_yellow(),
        count(v.admissible).bright_yellow(),
        count(v.returned).bright_green().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow()
    );
    if let Some(pruned) = v.pruned.filter(|&p| p > 0) {
        output.push_str(&format!(
            " │ {} pruned",
            pruned.to_formatted_string(&Locale::en).bright_magenta()
        ));
    }
    output
}

fn format_parallel_scoring(v: &EventVisitor) -> String {
    format!(
        "    {} scoring {} subsets in parallel",
        "->".bright_blue(),
        count(v.subsets).white()
    )
}

fn format_warning(v: &EventVisitor, level: Level) -> String {
    let tag = if level == Level::ERROR {
        "ERROR".bright_red().bold().to_string()
    } else {
        "WARN".yellow().bold().to_string()
    };
    let text = v
        .message
        .as_deref()
        .or(v.error.as_deref())
        .unwrap_or("");
    match &v.error {
        Some(error) if v.message.is_some() => {
            format!("{} {} {}: {}", timestamp(), tag, text, error.bright_red())
        }
        _ => format!("{} {} {}", timestamp(), tag, text),
    }
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_formatting() {
        assert_eq!(format_duration_ms(12), "12ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }

    #[test]
    fn test_query_end_formats_counts() {
        let v = EventVisitor {
            event: Some("query_end".to_string()),
            candidates: Some(32_767),
            admissible: Some(1_200),
            returned: Some(50),
            pruned: Some(0),
            duration_ms: Some(4),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("32,767"));
        assert!(out.contains("1,200"));
        assert!(out.contains("4ms"));
        assert!(!out.contains("pruned"));
    }

    #[test]
    fn test_query_start_flags() {
        let v = EventVisitor {
            event: Some("query_start".to_string()),
            dataset: Some("demo-spring".to_string()),
            min_parties: Some(2),
            max_parties: Some(4),
            search_space: Some(4_823),
            majority_only: Some(true),
            ..Default::default()
        };
        let out = format_event(&v, Level::INFO);
        assert!(out.contains("demo-spring"));
        assert!(out.contains("4,823"));
        assert!(out.contains("majority only"));
    }

    #[test]
    fn test_unknown_info_event_is_silent() {
        let v = EventVisitor {
            event: Some("something_else".to_string()),
            ..Default::default()
        };
        assert!(format_event(&v, Level::INFO).is_empty());
        assert!(format_event(&EventVisitor::default(), Level::DEBUG).is_empty());
    }

    #[test]
    fn test_warning_includes_error() {
        let v = EventVisitor {
            message: Some("failed to save positions".to_string()),
            error: Some("permission denied".to_string()),
            ..Default::default()
        };
        let out = format_event(&v, Level::WARN);
        assert!(out.contains("WARN"));
        assert!(out.contains("permission denied"));
    }
}
