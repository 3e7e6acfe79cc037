//! Dataset catalog loading.
//!
//! A catalog directory holds one poll per file:
//!
//! - `.toml`, `.json`, `.yaml`/`.yml`: `{ name?, parties: [{ name, seats,
//!   economic?, social? }] }`. The file stem is used when `name` is absent.
//! - `.txt`: a seat listing with one `NAME: seats` line per party, as
//!   published on poll pages. Other lines are ignored.
//!
//! Parties without coordinates take their entry in the default position
//! table, else the centre of both axes.

use std::path::Path;

use coalition_core::{Dataset, Party, Position};
use serde::Deserialize;

use crate::ConfigError;

/// Default positions for Dutch parties: (name, economic, social).
const DEFAULT_POSITIONS: &[(&str, f64, f64)] = &[
    ("PVV", 0.3, -0.8),
    ("VVD", 0.7, 0.3),
    ("CDA", 0.2, -0.4),
    ("D66", -0.1, 0.8),
    ("GL", -0.7, 0.9),
    ("PvdA", -0.6, 0.6),
    ("SP", -0.8, -0.1),
    ("PvdD", -0.5, 0.7),
    ("CU", -0.1, -0.6),
    ("SGP", 0.1, -0.9),
    ("DENK", -0.4, -0.3),
    ("FvD", 0.5, -0.7),
    ("JA21", 0.6, -0.2),
    ("Volt", -0.2, 0.9),
    ("BBB", 0.4, -0.2),
    ("NSC", 0.3, 0.1),
    ("BVNL", 0.8, -0.5),
    ("Lijst Pim Fortuyn", 0.4, -0.4),
    ("OSF", -0.3, 0.4),
];

/// Built-in polls: (dataset name, [(party, seats)]).
const BUILTIN_POLLS: &[(&str, &[(&str, u32)])] = &[
    (
        "demo-spring",
        &[
            ("PVV", 37),
            ("VVD", 27),
            ("GL", 13),
            ("PvdA", 12),
            ("NSC", 10),
            ("CDA", 9),
            ("D66", 9),
            ("BBB", 7),
            ("SP", 5),
            ("PvdD", 4),
            ("FvD", 3),
            ("SGP", 3),
            ("CU", 3),
            ("DENK", 3),
            ("Volt", 3),
            ("JA21", 2),
            ("BVNL", 0),
        ],
    ),
    (
        "demo-autumn",
        &[
            ("PVV", 31),
            ("VVD", 25),
            ("CDA", 20),
            ("GL", 14),
            ("PvdA", 13),
            ("D66", 12),
            ("NSC", 6),
            ("SP", 5),
            ("BBB", 4),
            ("PvdD", 4),
            ("FvD", 3),
            ("SGP", 3),
            ("CU", 3),
            ("DENK", 3),
            ("Volt", 2),
            ("JA21", 2),
            ("BVNL", 0),
        ],
    ),
];

/// Looks up the default position of a party by name.
///
/// # Examples
///
/// ```
/// use coalition_config::catalog::default_position;
///
/// let vvd = default_position("VVD").unwrap();
/// assert_eq!(vvd.economic, 0.7);
/// assert!(default_position("Unknown").is_none());
/// ```
pub fn default_position(name: &str) -> Option<Position> {
    DEFAULT_POSITIONS
        .iter()
        .find(|(party, _, _)| *party == name)
        .map(|&(_, economic, social)| Position::new(economic, social))
}

/// The built-in demo polls, used when no dataset directory is configured.
pub fn builtin_catalog() -> Vec<Dataset> {
    BUILTIN_POLLS
        .iter()
        .filter_map(|(name, seats)| {
            let parties = seats
                .iter()
                .map(|&(party, seats)| with_default_position(party, seats))
                .collect();
            Dataset::new(*name, parties).ok()
        })
        .collect()
}

/// Loads every dataset file in `dir`, ordered by file name.
///
/// Files with other extensions are skipped.
///
/// # Errors
///
/// Fails on unreadable or malformed files, and when the directory holds no
/// dataset at all.
pub fn load_catalog(dir: impl AsRef<Path>) -> Result<Vec<Dataset>, ConfigError> {
    let dir = dir.as_ref();
    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.is_file())
        .collect();
    paths.sort();

    let mut datasets = Vec::new();
    for path in paths {
        if let Some(dataset) = load_dataset_file(&path)? {
            datasets.push(dataset);
        }
    }

    if datasets.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "no dataset files in {}",
            dir.display()
        )));
    }
    Ok(datasets)
}

/// Loads a single dataset file. Returns `None` for unsupported extensions.
pub fn load_dataset_file(path: &Path) -> Result<Option<Dataset>, ConfigError> {
    let Some(extension) = path.extension().and_then(|e| e.to_str()) else {
        return Ok(None);
    };
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("dataset")
        .to_string();

    let dataset = match extension {
        "toml" => {
            let file: DatasetFile = toml::from_str(&std::fs::read_to_string(path)?)?;
            file.into_dataset(stem)?
        }
        "json" => {
            let file: DatasetFile = serde_json::from_str(&std::fs::read_to_string(path)?)?;
            file.into_dataset(stem)?
        }
        "yaml" | "yml" => {
            let file: DatasetFile = serde_yaml::from_str(&std::fs::read_to_string(path)?)?;
            file.into_dataset(stem)?
        }
        "txt" => parse_seat_listing(stem, &std::fs::read_to_string(path)?)?,
        _ => return Ok(None),
    };
    Ok(Some(dataset))
}

/// Parses a `NAME: seats` listing.
///
/// Names are runs of ASCII letters, digits and dashes. Zero-width spaces,
/// `&#8203;` and `&nbsp;` entities are stripped from the whole line first. Parties are ordered by seats
/// descending.
///
/// # Examples
///
/// ```
/// use coalition_config::catalog::parse_seat_listing;
///
/// let poll = parse_seat_listing("peiling", "PVV: 37\nVVD:24\nnot a party line\nVolt: 3").unwrap();
/// assert_eq!(poll.len(), 3);
/// assert_eq!(poll.total_seats(), 64);
/// assert_eq!(poll.parties()[1].name(), "VVD");
/// ```
pub fn parse_seat_listing(name: impl Into<String>, text: &str) -> Result<Dataset, ConfigError> {
    let mut parties: Vec<Party> = text
        .lines()
        .filter_map(parse_seat_line)
        .map(|(party, seats)| with_default_position(&party, seats))
        .collect();
    parties.sort_by(|a, b| b.seats().cmp(&a.seats()));
    Ok(Dataset::new(name, parties)?)
}

fn parse_seat_line(line: &str) -> Option<(String, u32)> {
    let line = line
        .replace("&nbsp;", " ")
        .replace("&#8203;", "")
        .replace('\u{200b}', "");
    let (name, rest) = line.trim().split_once(':')?;
    if name.is_empty()
        || !name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-')
    {
        return None;
    }

    let digits: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().ok().map(|seats| (name.to_string(), seats))
}

fn with_default_position(name: &str, seats: u32) -> Party {
    let position = default_position(name).unwrap_or_default();
    Party::new(name, seats).with_position(position.economic, position.social)
}

#[derive(Debug, Deserialize)]
struct DatasetFile {
    name: Option<String>,
    parties: Vec<PartyRecord>,
}

#[derive(Debug, Deserialize)]
struct PartyRecord {
    name: String,
    seats: u32,
    economic: Option<f64>,
    social: Option<f64>,
}

impl DatasetFile {
    fn into_dataset(self, fallback_name: String) -> Result<Dataset, ConfigError> {
        let parties = self
            .parties
            .into_iter()
            .map(|record| {
                let fallback = default_position(&record.name).unwrap_or_default();
                Party::try_new(
                    record.name,
                    record.seats,
                    record.economic.unwrap_or(fallback.economic),
                    record.social.unwrap_or(fallback.social),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Dataset::new(self.name.unwrap_or(fallback_name), parties)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_builtin_polls_fill_chamber() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 2);
        for poll in &catalog {
            assert_eq!(poll.total_seats(), 150);
            assert_eq!(poll.majority_threshold(), 76);
            assert!(poll.party("BVNL").is_some_and(|p| !p.is_eligible()));
        }
    }

    #[test]
    fn test_seat_line_cleanup() {
        let line = |name: &str, seats| Some((name.to_string(), seats));
        assert_eq!(parse_seat_line("\u{200b}GL-PvdA:&nbsp;25"), line("GL-PvdA", 25));
        assert_eq!(parse_seat_line("&#8203;PVV: 37"), line("PVV", 37));
        assert_eq!(parse_seat_line("VVD\u{200b}: 24"), line("VVD", 24));
        assert_eq!(parse_seat_line("&nbsp;CDA&#8203;:&#8203;5"), line("CDA", 5));
        assert_eq!(parse_seat_line("Total seats 150"), None);
        assert_eq!(parse_seat_line("Lijst Pim: 3"), None);
        assert_eq!(parse_seat_line("PVV: none"), None);
    }

    #[test]
    fn test_listing_keeps_entity_wrapped_names() {
        let poll = parse_seat_listing("p", "&#8203;PVV: 37\nVVD\u{200b}: 24\nGL: 13").unwrap();
        assert_eq!(poll.len(), 3);
        assert_eq!(poll.total_seats(), 74);
        let names: Vec<_> = poll.parties().iter().map(|p| p.name()).collect();
        assert_eq!(names, ["PVV", "VVD", "GL"]);
    }

    #[test]
    fn test_listing_duplicate_party_rejected() {
        assert!(parse_seat_listing("dup", "A: 1\nA: 2").is_err());
    }

    #[test]
    fn test_load_catalog_mixed_formats() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("a.toml"),
            r#"
                name = "toml-poll"
                [[parties]]
                name = "VVD"
                seats = 80
                [[parties]]
                name = "New"
                seats = 70
                economic = 4.0
                social = -0.2
            "#,
        )
        .unwrap();
        fs::write(
            dir.path().join("b.json"),
            r#"{"parties": [{"name": "X", "seats": 3, "economic": 0.5, "social": 0.5}]}"#,
        )
        .unwrap();
        fs::write(dir.path().join("c.yaml"), "parties:\n  - name: Y\n    seats: 9\n").unwrap();
        fs::write(dir.path().join("d.txt"), "PVV: 37\nCDA: 5\n").unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();

        let catalog = load_catalog(dir.path()).unwrap();
        let names: Vec<_> = catalog.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["toml-poll", "b", "c", "d"]);

        let toml_poll = &catalog[0];
        assert_eq!(toml_poll.party("VVD").unwrap().economic(), 0.7);
        assert_eq!(toml_poll.party("New").unwrap().economic(), 1.0);
        assert_eq!(catalog[3].party("PVV").unwrap().social(), -0.8);
    }

    #[test]
    fn test_negative_seats_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("bad.json"),
            r#"{"parties": [{"name": "X", "seats": -3}]}"#,
        )
        .unwrap();
        assert!(matches!(load_catalog(dir.path()), Err(ConfigError::Json(_))));
    }

    #[test]
    fn test_empty_directory_rejected() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_catalog(dir.path()), Err(ConfigError::Invalid(_))));
    }
}
