//! Matrix type for 2D numeric data.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io;
use std::ops::{Add, Index, IndexMut, Mul, Sub};
use std::str::FromStr;

/// A dense 2D matrix of `f64` values (row-major storage).
///
/// The matrix owns one contiguous buffer; element `(row, col)` lives at flat
/// index `row * cols + col`. A matrix with zero rows or zero columns is a
/// valid empty value, and every operation treats it as a no-op rather than
/// an error.
///
/// Producing operations ([`map`](Matrix::map), [`zip_with`](Matrix::zip_with),
/// [`dot`](Matrix::dot), [`transpose`](Matrix::transpose), the `+`/`-`/`*`
/// operators) return a fresh matrix. The in-place operations are
/// [`map_inplace`](Matrix::map_inplace), [`sub_inplace`](Matrix::sub_inplace),
/// and [`scale_mut`](Matrix::scale_mut).
///
/// A `Matrix` exclusively owns its buffer, so independent instances may be
/// used freely from different threads. Mutating a single instance from
/// multiple threads requires external synchronization by the caller.
///
/// # Examples
///
/// ```
/// use matriz::Matrix;
///
/// let m = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.get(1, 2), 6.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Matrix {
    data: Vec<f64>,
    cols: usize,
}

impl Matrix {
    /// Creates a matrix of the given shape with every entry set to `init`.
    #[must_use]
    pub fn new(rows: usize, cols: usize, init: f64) -> Self {
        Self {
            data: vec![init; rows * cols],
            cols,
        }
    }

    /// Creates a matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::new(rows, cols, 0.0)
    }

    /// Creates an identity matrix.
    #[must_use]
    pub fn eye(n: usize) -> Self {
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self { data, cols: n }
    }

    /// Creates a matrix from a row-major vector of data.
    ///
    /// # Errors
    ///
    /// Returns an error if data length doesn't match rows * cols.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::dimension_mismatch(
                format!("{} elements ({rows}x{cols})", rows * cols),
                format!("{} elements", data.len()),
            ));
        }
        Ok(Self { data, cols })
    }

    /// Returns the number of rows.
    ///
    /// Derived from the buffer length, so a matrix with zero columns
    /// reports zero rows.
    #[must_use]
    pub fn height(&self) -> usize {
        if self.cols == 0 {
            0
        } else {
            self.data.len() / self.cols
        }
    }

    /// Returns the number of columns, or zero for a matrix with no rows.
    #[must_use]
    pub fn width(&self) -> usize {
        if self.height() > 0 {
            self.cols
        } else {
            0
        }
    }

    /// Returns the shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Returns true if the matrix has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Gets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns the underlying row-major data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Creates a new matrix by applying a unary operation to every entry.
    ///
    /// An empty matrix is returned unchanged.
    #[must_use]
    pub fn map<F>(&self, op: F) -> Self
    where
        F: Fn(f64) -> f64,
    {
        if self.is_empty() {
            return self.clone();
        }
        Self {
            data: self.data.iter().map(|&v| op(v)).collect(),
            cols: self.cols,
        }
    }

    /// Applies a unary operation to every entry in place, without
    /// allocating a new buffer.
    pub fn map_inplace<F>(&mut self, op: F)
    where
        F: Fn(f64) -> f64,
    {
        for v in &mut self.data {
            *v = op(*v);
        }
    }

    /// Creates a new matrix by combining corresponding entries of `self`
    /// and `other` with a binary operation.
    ///
    /// An empty receiver returns an empty copy without consulting `other`.
    ///
    /// # Errors
    ///
    /// Returns an error if the two matrices differ in height, or in column
    /// count when non-empty.
    pub fn zip_with<F>(&self, other: &Self, op: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> f64,
    {
        if self.height() != other.height() {
            return Err(Error::dimension_mismatch(
                format!("{} rows", self.height()),
                format!("{} rows", other.height()),
            ));
        }
        if self.is_empty() {
            return Ok(self.clone());
        }
        if self.cols != other.cols {
            return Err(Error::dimension_mismatch(
                format!("{} columns", self.cols),
                format!("{} columns", other.cols),
            ));
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(&a, &b)| op(a, b))
            .collect();
        Ok(Self {
            data,
            cols: self.cols,
        })
    }

    /// Multiplies each element by a scalar, returning a new matrix.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        self.map(|v| v * scalar)
    }

    /// Multiplies each element by a scalar in place and returns the
    /// receiver for chaining.
    pub fn scale_mut(&mut self, scalar: f64) -> &mut Self {
        self.map_inplace(|v| v * scalar);
        self
    }

    /// Subtracts `rhs` from `self` element-wise in place.
    ///
    /// Fails before mutating any state, so the receiver is unchanged on
    /// error.
    ///
    /// # Errors
    ///
    /// Returns an error if the two matrices differ in total size or column
    /// count.
    pub fn sub_inplace(&mut self, rhs: &Self) -> Result<()> {
        if self.data.len() != rhs.data.len() || self.cols != rhs.cols {
            return Err(Error::dimension_mismatch(
                format!("{}x{}", self.height(), self.width()),
                format!("{}x{}", rhs.height(), rhs.width()),
            ));
        }
        for (v, &r) in self.data.iter_mut().zip(rhs.data.iter()) {
            *v -= r;
        }
        Ok(())
    }

    /// Matrix multiplication: standard O(n^3) triple loop.
    ///
    /// The result has shape `(self.height(), rhs.width())`. Each entry is
    /// accumulated by plain sequential `f64` addition, so results are
    /// subject to ordinary floating-point rounding.
    ///
    /// # Errors
    ///
    /// Returns an error if `self.width() != rhs.height()`.
    pub fn dot(&self, rhs: &Self) -> Result<Self> {
        if self.width() != rhs.height() {
            return Err(Error::dimension_mismatch(
                format!("{} rows", self.width()),
                format!("{} rows", rhs.height()),
            ));
        }
        let (rows, width) = (self.height(), self.width());
        let rhs_width = rhs.width();
        let mut result = Self::zeros(rows, rhs_width);
        for row in 0..rows {
            for col in 0..rhs_width {
                let mut sum = 0.0;
                for i in 0..width {
                    sum += self.get(row, i) * rhs.get(i, col);
                }
                result.data[row * rhs_width + col] = sum;
            }
        }
        Ok(result)
    }

    /// Returns the transpose of this matrix.
    ///
    /// A single total index permutation: every input cell is copied to
    /// exactly one output cell and every output cell is written exactly
    /// once. An empty matrix is returned unchanged.
    #[must_use]
    pub fn transpose(&self) -> Self {
        if self.is_empty() {
            return self.clone();
        }
        let (rows, cols) = (self.height(), self.cols);
        let mut data = vec![0.0; self.data.len()];
        for row in 0..rows {
            for col in 0..cols {
                data[col * rows + row] = self.data[row * cols + col];
            }
        }
        Self { data, cols: rows }
    }

    /// Writes the matrix to a stream in the text format (see the
    /// [`Display`](fmt::Display) impl).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_to<W: io::Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_fmt(format_args!("{self}"))?;
        Ok(())
    }

    /// Reads a matrix from a stream in the text format, consuming exactly
    /// the header line plus one line per row.
    ///
    /// # Errors
    ///
    /// Returns an error if the stream fails or the input is malformed or
    /// truncated.
    pub fn read_from<R: io::BufRead>(reader: &mut R) -> Result<Self> {
        let mut header = String::new();
        if reader.read_line(&mut header)? == 0 {
            return Err(Error::parse("missing header line"));
        }
        let (rows, cols) = parse_header(&header)?;
        let mut data = Vec::with_capacity(rows * cols);
        if rows * cols > 0 {
            let mut line = String::new();
            for row in 0..rows {
                line.clear();
                if reader.read_line(&mut line)? == 0 {
                    return Err(Error::parse(format!(
                        "expected {rows} value lines, found {row}"
                    )));
                }
                let before = data.len();
                for token in line.split_whitespace() {
                    data.push(parse_value(token)?);
                }
                if data.len() - before != cols {
                    return Err(Error::parse(format!(
                        "expected {cols} values per line, found {}",
                        data.len() - before
                    )));
                }
            }
        }
        Ok(Self { data, cols })
    }
}

fn parse_header(header: &str) -> Result<(usize, usize)> {
    let mut tokens = header.split_whitespace();
    let rows = match tokens.next() {
        Some(tok) => tok
            .parse()
            .map_err(|_| Error::parse(format!("invalid row count {tok:?}")))?,
        None => return Err(Error::parse("missing row count in header")),
    };
    let cols = match tokens.next() {
        Some(tok) => tok
            .parse()
            .map_err(|_| Error::parse(format!("invalid column count {tok:?}")))?,
        None => return Err(Error::parse("missing column count in header")),
    };
    Ok((rows, cols))
}

fn parse_value(token: &str) -> Result<f64> {
    token
        .parse()
        .map_err(|_| Error::parse(format!("invalid value {token:?}")))
}

/// Writes the shape header, then the values row by row.
///
/// The output is the format accepted by the [`FromStr`] impl: a
/// `rows cols` header line, then one line per row with each value
/// followed by a space.
impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} {}", self.height(), self.width())?;
        for row in 0..self.height() {
            for col in 0..self.cols {
                write!(f, "{} ", self.data[row * self.cols + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Parses the text format produced by the [`Display`](fmt::Display) impl.
///
/// The header gives the shape; exactly `rows * cols` whitespace-separated
/// value tokens must follow. Extra trailing tokens are ignored.
impl FromStr for Matrix {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s.splitn(2, '\n');
        let header = lines.next().unwrap_or("");
        let (rows, cols) = parse_header(header)?;
        let body = lines.next().unwrap_or("");
        let mut data = Vec::with_capacity(rows * cols);
        let mut tokens = body.split_whitespace();
        for i in 0..rows * cols {
            match tokens.next() {
                Some(tok) => data.push(parse_value(tok)?),
                None => {
                    return Err(Error::parse(format!(
                        "expected {} values, found {i}",
                        rows * cols
                    )))
                }
            }
        }
        Ok(Self { data, cols })
    }
}

/// Shape-aware equality: all zero-dimension matrices compare equal,
/// whatever column count they happen to remember.
impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut Self::Output {
        &mut self.data[row * self.cols + col]
    }
}

/// Elementwise sum.
///
/// # Panics
///
/// Panics on dimension mismatch with the [`Error::DimensionMismatch`]
/// message; use [`Matrix::zip_with`] for a fallible form.
impl Add for &Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Matrix {
        self.zip_with(rhs, |a, b| a + b)
            .unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Elementwise difference.
///
/// # Panics
///
/// Panics on dimension mismatch; see [`Matrix::zip_with`].
impl Sub for &Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Matrix {
        self.zip_with(rhs, |a, b| a - b)
            .unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Hadamard (elementwise) product, not matrix multiplication; see
/// [`Matrix::dot`] for the latter.
///
/// # Panics
///
/// Panics on dimension mismatch; see [`Matrix::zip_with`].
impl Mul for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        self.zip_with(rhs, |a, b| a * b)
            .unwrap_or_else(|e| panic!("{e}"))
    }
}

/// Elementwise scalar multiply; does not mutate the receiver.
impl Mul<f64> for &Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.mul_scalar(scalar)
    }
}

impl Add for Matrix {
    type Output = Matrix;

    fn add(self, rhs: Self) -> Matrix {
        &self + &rhs
    }
}

impl Sub for Matrix {
    type Output = Matrix;

    fn sub(self, rhs: Self) -> Matrix {
        &self - &rhs
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Matrix {
        &self * &rhs
    }
}

impl Mul<f64> for Matrix {
    type Output = Matrix;

    fn mul(self, scalar: f64) -> Matrix {
        self.mul_scalar(scalar)
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;

#[cfg(test)]
#[path = "tests_matrix_contract.rs"]
mod contract;
