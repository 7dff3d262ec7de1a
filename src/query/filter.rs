//! # Filter Expressions
//!
//! Parses operator-prefixed numeric values from query strings, such as
//! `<400`, `>=4.5` or a bare `350`.
//!
//! A value is at most two tokens: an optional operator prefix followed by a
//! non-negative decimal literal. Anything else yields [`FilterExpr::NoFilter`]
//! so a malformed value never rejects the request.

/// Comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    Gt,
    Lt,
    Gte,
    Lte,
}

/// Operator prefixes, longest first so `>=` is never read as `>`.
const PREFIXES: [(&str, CompareOp); 5] = [
    (">=", CompareOp::Gte),
    ("<=", CompareOp::Lte),
    (">", CompareOp::Gt),
    ("<", CompareOp::Lt),
    ("=", CompareOp::Eq),
];

impl CompareOp {
    /// Apply the operator as `actual <op> operand`
    pub fn evaluate(&self, actual: f64, operand: f64) -> bool {
        match self {
            CompareOp::Eq => actual == operand,
            CompareOp::Gt => actual > operand,
            CompareOp::Lt => actual < operand,
            CompareOp::Gte => actual >= operand,
            CompareOp::Lte => actual <= operand,
        }
    }
}

/// A single operator/operand pair
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Comparison {
    pub op: CompareOp,
    pub value: f64,
}

impl Comparison {
    pub fn new(op: CompareOp, value: f64) -> Self {
        Self { op, value }
    }

    /// Check a field value. Absent values never match.
    pub fn matches(&self, actual: Option<f64>) -> bool {
        actual.is_some_and(|v| self.op.evaluate(v, self.value))
    }
}

/// Parsed filter value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FilterExpr {
    /// Empty or malformed input; the field is unconstrained
    NoFilter,
    Comparison(Comparison),
}

impl FilterExpr {
    /// Parse a raw query-string value
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return FilterExpr::NoFilter;
        }

        let (op, rest) = PREFIXES
            .iter()
            .find_map(|(prefix, op)| raw.strip_prefix(prefix).map(|rest| (*op, rest)))
            .unwrap_or((CompareOp::Eq, raw));

        match parse_decimal(rest.trim_start()) {
            Some(value) => FilterExpr::Comparison(Comparison::new(op, value)),
            None => FilterExpr::NoFilter,
        }
    }

    /// The comparison, if one was parsed
    pub fn comparison(&self) -> Option<Comparison> {
        match self {
            FilterExpr::NoFilter => None,
            FilterExpr::Comparison(c) => Some(*c),
        }
    }
}

/// Accepts `digits` or `digits.digits`; no sign, exponent or bare dot.
fn parse_decimal(s: &str) -> Option<f64> {
    let (whole, fraction) = match s.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (s, None),
    };

    let all_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());

    if !all_digits(whole) || fraction.is_some_and(|f| !all_digits(f)) {
        return None;
    }

    s.parse().ok()
}
