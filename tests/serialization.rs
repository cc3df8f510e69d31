//! Integration tests for the plain-text matrix format.

use matriz::prelude::*;

#[test]
fn display_writes_header_then_rows() {
    let m = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    assert_eq!(m.to_string(), "2 2\n1 2 \n3 4 \n");
}

#[test]
fn parse_accepts_own_output() {
    let m = Matrix::from_vec(3, 2, vec![0.5, -1.0, 2.25, 1e-3, 7.0, -0.125]).unwrap();
    let back: Matrix = m.to_string().parse().unwrap();
    assert_eq!(back, m);
}

#[test]
fn parse_overwrites_prior_binding() {
    let mut m = Matrix::new(4, 4, 9.0);
    assert_eq!(m.shape(), (4, 4));
    m = "1 2\n5 6 \n".parse().unwrap();
    assert_eq!(m.shape(), (1, 2));
    assert_eq!(m.as_slice(), &[5.0, 6.0]);
}

#[test]
fn parse_ignores_trailing_tokens() {
    let m: Matrix = "2 2\n1 2 \n3 4 \nleftover".parse().unwrap();
    assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn write_to_and_read_from_round_trip() {
    let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.5, 5.5, 6.5]).unwrap();
    let mut buf = Vec::new();
    m.write_to(&mut buf).unwrap();

    let mut reader = buf.as_slice();
    let back = Matrix::read_from(&mut reader).unwrap();
    assert_eq!(back, m);
}

#[test]
fn read_from_consumes_exactly_one_matrix() {
    let a = Matrix::from_vec(1, 2, vec![1.0, 2.0]).unwrap();
    let b = Matrix::from_vec(2, 1, vec![3.0, 4.0]).unwrap();
    let mut buf = Vec::new();
    a.write_to(&mut buf).unwrap();
    b.write_to(&mut buf).unwrap();

    let mut reader = buf.as_slice();
    assert_eq!(Matrix::read_from(&mut reader).unwrap(), a);
    assert_eq!(Matrix::read_from(&mut reader).unwrap(), b);
}

#[test]
fn read_from_empty_matrix() {
    let mut reader = "0 0\n".as_bytes();
    let m = Matrix::read_from(&mut reader).unwrap();
    assert!(m.is_empty());
}

#[test]
fn read_from_reports_truncation() {
    let mut reader = "2 2\n1 2 \n".as_bytes();
    let err = Matrix::read_from(&mut reader).unwrap_err();
    assert!(matches!(err, Error::Parse { .. }));
}

#[test]
fn read_from_reports_short_row() {
    let mut reader = "2 2\n1 2 \n3 \n".as_bytes();
    let err = Matrix::read_from(&mut reader).unwrap_err();
    assert!(err.to_string().contains("parse error"));
}

#[test]
fn read_from_reports_missing_header() {
    let mut reader = "".as_bytes();
    assert!(Matrix::read_from(&mut reader).is_err());
}
