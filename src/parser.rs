use std::io::Read;
use std::str::FromStr;

use nom::character::complete::{alpha1, char, digit1, line_ending, multispace0, space0, space1};
use nom::combinator::{eof, map, map_res, opt, recognize};
use nom::multi::many0;
use nom::sequence::{pair, preceded, separated_pair, terminated, tuple};
use nom::{Finish, IResult, Parser};

use crate::error::{Error, Result};
use crate::grid::{Cell, Direction, Move};

pub fn base10_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(digit1, |s| N::from_str(s)).parse(input)
}

pub fn signed_numeric<N>(input: &str) -> IResult<&str, N>
where
    N: FromStr,
{
    map_res(recognize(pair(opt(char('-')), digit1)), |s| N::from_str(s)).parse(input)
}

pub fn nom_error_to_owned<I>(e: nom::error::Error<&I>) -> nom::error::Error<I::Owned>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
{
    let nom::error::Error { input, code } = e;
    nom::error::Error {
        input: input.to_owned(),
        code,
    }
}

// Lifetime hacks to make the `?` operator usable with nom results.
pub fn nom_parse_to_owned<I, O, P>(
    mut parser: P,
    input: &I,
) -> std::result::Result<O, nom::error::Error<I::Owned>>
where
    I: ToOwned + ?Sized,
    I::Owned: 'static,
    P: for<'i> Parser<&'i I, O, nom::error::Error<&'i I>>,
{
    match parser.parse(input).finish() {
        Ok((_i, o)) => Ok(o),
        Err(e) => Err(nom_error_to_owned(e)),
    }
}

/// A starting cell and the moves to make from it.
#[derive(Debug, PartialEq, Eq)]
pub struct Plan {
    pub origin: Cell,
    pub moves: Vec<Move>,
}

// A move line before validation. Unknown direction tokens and non-positive
// step counts are well-formed text but invalid moves.
type RawMove = (Result<Direction>, i64);

fn origin(input: &str) -> IResult<&str, Cell> {
    separated_pair(signed_numeric, space1, signed_numeric)
        .map(|(x, y)| Cell { x, y })
        .parse(input)
}

fn raw_move(input: &str) -> IResult<&str, RawMove> {
    separated_pair(map(alpha1, Direction::from_str), space1, signed_numeric).parse(input)
}

fn line<'a, O, P>(p: P) -> impl FnMut(&'a str) -> IResult<&'a str, O>
where
    P: Parser<&'a str, O, nom::error::Error<&'a str>>,
{
    preceded(line_ending, terminated(p, space0))
}

fn plan(input: &str) -> IResult<&str, (usize, Cell, Vec<RawMove>)> {
    terminated(
        tuple((
            terminated(base10_numeric, space0),
            line(origin),
            many0(line(raw_move)),
        )),
        tuple((multispace0, eof)),
    )
    .parse(input)
}

/// Parses a move count, an origin line and that many `<E|W|N|S> <steps>`
/// lines.
pub fn parse_plan(input: &str) -> Result<Plan> {
    let (expected, origin, raw) = nom_parse_to_owned(plan, input)?;

    if raw.len() != expected {
        return Err(Error::MoveCountMismatch {
            expected,
            found: raw.len(),
        });
    }

    let moves = raw
        .into_iter()
        .map(|(direction, steps)| Move::new(direction?, steps))
        .collect::<Result<Vec<Move>>>()?;

    Ok(Plan { origin, moves })
}

pub fn read_plan<R: Read>(mut reader: R) -> Result<Plan> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;

    parse_plan(&buffer)
}
