use std::collections::HashMap;

use crate::radii::*;

#[test]
fn covalent() {
    let table = RadiusTable::covalent();
    assert_eq!(table.radius("N"), 0.71);
    assert_eq!(table.radius("H"), 0.31);
    assert_eq!(table.radius("Cl"), 1.02);
    assert!(table.contains("Cm"));
}

#[test]
fn unknown_symbols() {
    let table = RadiusTable::covalent();
    assert_eq!(table.get("Xx"), None);
    assert_eq!(table.radius("Xx"), DEFAULT_RADIUS);
    // lookups are case-sensitive
    assert_eq!(table.get("n"), None);

    let table = table.with_default(1.5);
    assert_eq!(table.radius("Xx"), 1.5);
    assert_eq!(table.default_radius(), 1.5);
}

#[test]
fn overrides() {
    let overrides =
        HashMap::from([("N".to_owned(), 0.8), ("Xx".to_owned(), 0.1)]);
    let table = RadiusTable::covalent().with_overrides(&overrides);
    assert_eq!(table.radius("N"), 0.8);
    assert_eq!(table.radius("Xx"), 0.1);
    assert_eq!(table.radius("C"), 0.76);

    let table = RadiusTable::empty(0.0).with_overrides(&overrides);
    assert_eq!(table.get("C"), None);
}

#[test]
fn no_duplicates() {
    let mut seen: Vec<_> = COVALENT_RADII.iter().map(|(s, _)| s).collect();
    seen.sort();
    seen.dedup();
    assert_eq!(seen.len(), COVALENT_RADII.len());
}
