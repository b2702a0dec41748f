//! Structure-query expression synthesis.
//!
//! Residue lists are parsed at the boundary into [`ResidueSpec`] values and
//! rendered back into the host's selection syntax here:
//!
//! ```text
//! chain A+C+E and resi 124-125+153-157+159
//! (chain A+C+E and resi 142) or (chain B+D+F and resi 100)
//! ```

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::AnnotateError;

/// One residue number or an inclusive residue range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "ResidueRepr")]
pub enum ResidueSpec {
    /// A single residue number.
    Single(u32),
    /// An inclusive range `lo..=hi`.
    Range(u32, u32),
}

impl ResidueSpec {
    /// Whether `resi` falls within this spec.
    #[must_use]
    pub const fn contains(self, resi: u32) -> bool {
        match self {
            Self::Single(n) => n == resi,
            Self::Range(lo, hi) => lo <= resi && resi <= hi,
        }
    }
}

impl fmt::Display for ResidueSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Single(n) => write!(f, "{n}"),
            Self::Range(lo, hi) => write!(f, "{lo}-{hi}"),
        }
    }
}

impl FromStr for ResidueSpec {
    type Err = AnnotateError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let token = token.trim();
        match token.split_once('-') {
            Some((lo, hi)) => {
                let lo = parse_number(lo, token)?;
                let hi = parse_number(hi, token)?;
                match lo.cmp(&hi) {
                    std::cmp::Ordering::Less => Ok(Self::Range(lo, hi)),
                    std::cmp::Ordering::Equal => Ok(Self::Single(lo)),
                    std::cmp::Ordering::Greater => {
                        Err(AnnotateError::ResidueParse(format!(
                            "range '{token}' is descending"
                        )))
                    }
                }
            }
            None => parse_number(token, token).map(Self::Single),
        }
    }
}

fn parse_number(text: &str, token: &str) -> Result<u32, AnnotateError> {
    match text.trim().parse::<u32>() {
        Ok(0) => Err(AnnotateError::ResidueParse(format!(
            "residue numbers start at 1 (got '{token}')"
        ))),
        Ok(n) => Ok(n),
        Err(_) => Err(AnnotateError::ResidueParse(format!(
            "'{token}' is not a residue number or range"
        ))),
    }
}

/// Manifest form: `142` or `"70-75"`.
#[derive(Deserialize)]
#[serde(untagged)]
enum ResidueRepr {
    Number(u32),
    Text(String),
}

impl TryFrom<ResidueRepr> for ResidueSpec {
    type Error = AnnotateError;

    fn try_from(repr: ResidueRepr) -> Result<Self, Self::Error> {
        match repr {
            ResidueRepr::Number(n) => {
                let text = n.to_string();
                parse_number(&text, &text).map(Self::Single)
            }
            ResidueRepr::Text(text) => text.parse(),
        }
    }
}

/// Parse residue text such as `"70-75+124-125"` or `"142, 189"`.
///
/// Tokens may be separated by `+`, `,` or whitespace. Empty text yields an
/// empty list.
pub fn parse_residues(text: &str) -> Result<Vec<ResidueSpec>, AnnotateError> {
    text.split(|c: char| c == '+' || c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(str::parse)
        .collect()
}

/// Render residues as `r1+lo-hi+...`. Duplicates pass through untouched.
#[must_use]
pub fn residue_list(residues: &[ResidueSpec]) -> String {
    residues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("+")
}

/// Build `chain {chain_group} and resi {residues}`.
pub fn build_expression(
    chain_group: &str,
    residues: &[ResidueSpec],
) -> Result<String, AnnotateError> {
    if residues.is_empty() {
        return Err(AnnotateError::EmptyInput(format!(
            "chain group {chain_group}"
        )));
    }
    Ok(format!("chain {chain_group} and resi {}", residue_list(residues)))
}

/// Combine two expressions with logical OR.
#[must_use]
pub fn combine(first: &str, second: &str) -> String {
    format!("({first}) or ({second})")
}

/// Combine any number of expressions with logical OR.
///
/// A single expression is returned as-is; two or more are each
/// parenthesised. Returns `None` for no expressions.
#[must_use]
pub fn combine_all(expressions: &[String]) -> Option<String> {
    match expressions {
        [] => None,
        [only] => Some(only.clone()),
        many => Some(
            many.iter()
                .map(|expr| format!("({expr})"))
                .collect::<Vec<_>>()
                .join(" or "),
        ),
    }
}
