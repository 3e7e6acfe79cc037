//! Hand-written rosters with known answers.

use coalition_core::{Dataset, Party};

/// A(50, -0.8, 0.5), B(40, 0.1, 0.1), C(60, 0.9, -0.6); 150 seats.
pub fn three_party_dataset() -> Dataset {
    Dataset::new(
        "scenario",
        vec![
            Party::new("A", 50).with_position(-0.8, 0.5),
            Party::new("B", 40).with_position(0.1, 0.1),
            Party::new("C", 60).with_position(0.9, -0.6),
        ],
    )
    .expect("scenario roster is valid")
}

/// Two small polls over overlapping parties, plus a zero-seat party.
pub fn two_polls() -> Vec<Dataset> {
    let spring = Dataset::new(
        "spring",
        vec![
            Party::new("A", 50).with_position(-0.8, 0.5),
            Party::new("B", 40).with_position(0.1, 0.1),
            Party::new("C", 60).with_position(0.9, -0.6),
            Party::new("D", 0).with_position(0.0, 0.9),
        ],
    )
    .expect("spring roster is valid");
    let autumn = Dataset::new(
        "autumn",
        vec![
            Party::new("A", 30).with_position(-0.8, 0.5),
            Party::new("C", 45).with_position(0.9, -0.6),
            Party::new("E", 75).with_position(0.2, 0.2),
        ],
    )
    .expect("autumn roster is valid");
    vec![spring, autumn]
}

/// A 150-seat chamber of fifteen Dutch-style parties.
pub fn dutch_chamber() -> Dataset {
    let roster: [(&str, u32, f64, f64); 15] = [
        ("PVV", 37, 0.3, -0.8),
        ("VVD", 24, 0.7, 0.3),
        ("GL", 13, -0.7, 0.9),
        ("PvdA", 12, -0.6, 0.6),
        ("NSC", 20, 0.3, 0.1),
        ("D66", 9, -0.1, 0.8),
        ("BBB", 7, 0.4, -0.2),
        ("CDA", 5, 0.2, -0.4),
        ("SP", 5, -0.8, -0.1),
        ("DENK", 3, -0.4, -0.3),
        ("PvdD", 3, -0.5, 0.7),
        ("FvD", 3, 0.5, -0.7),
        ("SGP", 3, 0.1, -0.9),
        ("CU", 3, -0.1, -0.6),
        ("Volt", 3, -0.2, 0.9),
    ];
    let parties = roster
        .iter()
        .map(|&(name, seats, economic, social)| {
            Party::new(name, seats).with_position(economic, social)
        })
        .collect();
    Dataset::new("dutch", parties).expect("dutch roster is valid")
}

/// Owned names, for building request-style rule lists.
pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}
