//! tests for reading and writing XYZ files

use approx::assert_abs_diff_eq;
use test_case::test_case;

use crate::xyz::{load, parse};
use crate::*;

#[test]
fn load_ammonia() {
    let got = load("testfiles/ammonia.xyz").unwrap();
    let want = geometry![
        N  0.0000000000  0.0000000000  0.0000000000
        H  0.9356767484  0.0000000000 -0.3802749301
        H -0.4678383742  0.8103198339 -0.3802749301
        H -0.4678383742 -0.8103198339 -0.3802749301
    ];
    assert_eq!(got, want);
    assert_eq!(got.comment, "ammonia, N-H 1.01 A, H-N-H 106.7 deg");
}

#[test]
fn extra_columns_ignored() {
    let got = load("testfiles/extra.xyz").unwrap();
    assert_eq!(got.len(), 5);
    assert_eq!(got.symbols(), vec!["N", "H", "H", "H", "Cl"]);
    assert_abs_diff_eq!(got[1], Atom::new("H", 0.935677, 0.0, -0.380275));
    assert_abs_diff_eq!(got[4], Atom::new("Cl", 0.0, 0.0, 3.5));
}

#[test]
fn exponential_coordinates() {
    let got = parse("1\n\nN 1.0e-1 -2.5E+0 3\n").unwrap();
    assert_eq!(got, geometry![N 0.1 -2.5 3.0]);
}

#[test]
fn empty_geometry() {
    let got = load("testfiles/empty.xyz").unwrap();
    assert!(got.is_empty());
    assert_eq!(got.comment, "nothing here");
}

#[test]
fn missing_file() {
    let got = load("testfiles/nonexistent.xyz");
    assert_eq!(
        got,
        Err(LoadError::NotFound("testfiles/nonexistent.xyz".to_owned()))
    );
}

#[test_case("testfiles/short.xyz", FormatError::LineCountMismatch {
    expected: 6, found: 5 }; "too few lines")]
#[test_case("testfiles/garbled.xyz", FormatError::AtomCountMismatch {
    declared: 3, parsed: 2 }; "bad coordinate")]
fn load_format_errors(path: &str, want: FormatError) {
    assert_eq!(load(path), Err(LoadError::Format(want)));
}

#[test_case("" ; "empty input")]
#[test_case("three\ncomment\n" ; "word count")]
#[test_case("-1\ncomment\n" ; "negative count")]
#[test_case("2.5\ncomment\nN 0 0 0\nH 1 0 0\n" ; "fractional count")]
fn unreadable_count(input: &str) {
    assert_eq!(parse(input), Err(FormatError::AtomCountUnreadable));
}

#[test]
fn short_record_dropped() {
    // the H line only has two coordinates, so it is not an atom at all
    let got = parse("2\ncomment\nN 0.0 0.0 0.0\nH 1.0 0.0\n");
    assert_eq!(
        got,
        Err(FormatError::AtomCountMismatch {
            declared: 2,
            parsed: 1
        })
    );
}

#[test]
fn trailing_blank_line_counts() {
    let got = parse("1\ncomment\nN 0.0 0.0 0.0\n\n");
    assert_eq!(
        got,
        Err(FormatError::LineCountMismatch {
            expected: 3,
            found: 4
        })
    );
}

#[test]
fn padded_count() {
    let got = parse("  1  \ncomment\nN 0.0 0.0 0.0").unwrap();
    assert_eq!(got, geometry![N 0.0 0.0 0.0]);
}

#[test]
fn write_then_read() {
    let want = load("testfiles/extra.xyz").unwrap();
    let got = parse(&want.to_string()).unwrap();
    assert_abs_diff_eq!(got, want, epsilon = 1e-10);
    assert_eq!(got.comment, want.comment);

    let got = parse(&format!("{want:.4}")).unwrap();
    assert_abs_diff_eq!(got, want, epsilon = 1e-4);
}

#[test]
fn atom_from_str() {
    assert_eq!(
        "C 1.0 2.0 3.0 0.5".parse::<Atom>(),
        Ok(Atom::new("C", 1.0, 2.0, 3.0))
    );
    assert_eq!(
        "C 1.0 2.0".parse::<Atom>(),
        Err(AtomParseError::TooFewFields(3))
    );
    assert_eq!(
        "C 1.0 x 2.0".parse::<Atom>(),
        Err(AtomParseError::BadCoordinate)
    );
}
