//! Parser for the textual clause notation
//!
//! ```text
//! P(0,1) | ~P(1,1)        two-literal clause
//! {~P(2,-1)}              braces are optional
//! W3(1,2)                 "tile (1,2) shows a warning of 3"
//! []                      the empty clause
//! ```
//!
//! This is the same form `Display` produces, so printed clauses can be read
//! back in tests and debugging sessions.

use crate::error::{KnowledgeError, Result};
use crate::logic::{Clause, Literal, Location, Proposition, PropositionKind};
use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1, i32 as parse_i32, multispace0},
    combinator::{all_consuming, map, map_res, opt, value},
    multi::separated_list1,
    sequence::{delimited, preceded, separated_pair, tuple},
    IResult,
};

/// Parse a single clause
pub fn parse_clause(input: &str) -> Result<Clause> {
    run(clause, input)
}

/// Parse a single literal
pub fn parse_literal(input: &str) -> Result<Literal> {
    run(literal, input)
}

/// Parse one clause per line. Blank lines and `#` comments are skipped.
pub fn parse_clauses(input: &str) -> Result<Vec<Clause>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(n, line)| {
            let line = line.split('#').next().unwrap_or("").trim();
            if line.is_empty() {
                None
            } else {
                Some(parse_clause(line).map_err(|e| {
                    KnowledgeError::Parse(format!("line {}: {}", n + 1, e))
                }))
            }
        })
        .collect()
}

fn run<'a, T>(parser: impl FnMut(&'a str) -> IResult<&'a str, T>, input: &'a str) -> Result<T> {
    all_consuming(delimited(multispace0, parser, multispace0))(input)
        .map(|(_, parsed)| parsed)
        .map_err(|e| KnowledgeError::Parse(format!("{:?} in {:?}", e, input)))
}

fn ws<'a, T>(
    inner: impl FnMut(&'a str) -> IResult<&'a str, T>,
) -> impl FnMut(&'a str) -> IResult<&'a str, T> {
    delimited(multispace0, inner, multispace0)
}

fn clause(input: &str) -> IResult<&str, Clause> {
    alt((
        value(Clause::empty(), alt((tag("[]"), tag("{}")))),
        delimited(ws(char('{')), disjunction, ws(char('}'))),
        disjunction,
    ))(input)
}

fn disjunction(input: &str) -> IResult<&str, Clause> {
    map(separated_list1(ws(char('|')), literal), Clause::from_literals)(input)
}

fn literal(input: &str) -> IResult<&str, Literal> {
    let (input, negated) = opt(ws(alt((char('~'), char('¬')))))(input)?;
    let (input, proposition) = proposition(input)?;
    Ok((input, Literal::new(proposition, negated.is_none())))
}

fn proposition(input: &str) -> IResult<&str, Proposition> {
    map(tuple((kind, location)), |(kind, location)| {
        Proposition::new(kind, location)
    })(input)
}

fn kind(input: &str) -> IResult<&str, PropositionKind> {
    alt((
        map(
            preceded(char('W'), map_res(digit1, |d: &str| d.parse::<u8>())),
            PropositionKind::Warning,
        ),
        value(PropositionKind::Pit, char('P')),
    ))(input)
}

fn location(input: &str) -> IResult<&str, Location> {
    map(
        delimited(
            ws(char('(')),
            separated_pair(ws(parse_i32), char(','), ws(parse_i32)),
            ws(char(')')),
        ),
        |(col, row)| Location::new(col, row),
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(col: i32, row: i32) -> Proposition {
        Proposition::pit(Location::new(col, row))
    }

    #[test]
    fn test_parse_simple_clause() {
        let clause = parse_clause("P(0,1) | ~P(1,1)").unwrap();
        assert_eq!(clause, Clause::new([(p(0, 1), true), (p(1, 1), false)]));
    }

    #[test]
    fn test_parse_braced_and_spaced() {
        let clause = parse_clause("  { ~P( 2 , -1 ) |P(0,0)}").unwrap();
        assert_eq!(clause, Clause::new([(p(2, -1), false), (p(0, 0), true)]));
    }

    #[test]
    fn test_parse_empty_clause() {
        assert!(parse_clause("[]").unwrap().is_empty());
        assert!(parse_clause("{}").unwrap().is_empty());
    }

    #[test]
    fn test_parse_warning() {
        let lit = parse_literal("W3(1,2)").unwrap();
        assert_eq!(lit, Literal::positive(Proposition::warning(3, Location::new(1, 2))));
        let neg = parse_literal("¬W0(0,0)").unwrap();
        assert!(!neg.polarity);
    }

    #[test]
    fn test_display_round_trip() {
        let clause = Clause::new([
            (p(3, 4), false),
            (Proposition::warning(2, Location::new(-1, 0)), true),
            (p(0, 0), true),
        ]);
        assert_eq!(parse_clause(&clause.to_string()).unwrap(), clause);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_clause("Q(0,0)"), Err(KnowledgeError::Parse(_))));
        assert!(parse_clause("P(0,0) |").is_err());
        assert!(parse_clause("P(0)").is_err());
        assert!(parse_literal("W999(0,0)").is_err());
    }

    #[test]
    fn test_parse_clauses_lines() {
        let input = "
            # start tile is safe
            ~P(0,0)
            P(0,1) | P(1,0)   # one of these
        ";
        let clauses = parse_clauses(input).unwrap();
        assert_eq!(clauses.len(), 2);
        assert!(clauses[0].is_unit());

        let err = parse_clauses("P(0,0)\nnope").unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
