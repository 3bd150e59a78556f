use std::str::SplitWhitespace;

use winnow::{
    ascii::{dec_int, float, space0, Caseless},
    combinator::delimited,
    PResult, Parser,
};

use crate::{
    error::{FormatError, FormatErrorKind},
    source::{FileKind, Line},
};

/// Strips `keyword` from the start of `text`, ignoring ASCII case.
pub fn strip_keyword<'s>(text: &'s str, keyword: &str) -> Option<&'s str> {
    let mut input = text;
    let matched: PResult<&str> = Caseless(keyword).parse_next(&mut input);

    matched.ok().map(|_| input)
}

pub fn integer(text: &str) -> Option<i32> {
    parse_integer.parse(text).ok()
}

/// Only finite values: `nan`, `inf` and literals that overflow to infinity are rejected.
pub fn real(text: &str) -> Option<f64> {
    parse_float.parse(text).ok().filter(|f: &f64| f.is_finite())
}

fn parse_integer(input: &mut &str) -> PResult<i32> {
    delimited(space0, dec_int, space0).parse_next(input)
}

fn parse_float(input: &mut &str) -> PResult<f64> {
    delimited(space0, float, space0).parse_next(input)
}

/// One occurrence of a directive: the line it was found on and whatever follows its keyword.
#[derive(Clone, Copy, Debug)]
pub struct Field<'s> {
    pub file: FileKind,
    pub line: Line<'s>,
    pub directive: &'static str,
    pub rest: &'s str,
}

impl<'s> Field<'s> {
    pub fn new(file: FileKind, line: Line<'s>, directive: &'static str, rest: &'s str) -> Self {
        Self {
            file,
            line,
            directive,
            rest,
        }
    }

    /// Directive keyword without its trailing separator, for messages.
    pub fn name(&self) -> &'static str {
        self.directive.trim_end()
    }

    pub fn text(&self) -> &'s str {
        self.rest.trim()
    }

    pub fn tokens(&self) -> SplitWhitespace<'s> {
        self.rest.split_whitespace()
    }

    pub fn error(&self, kind: FormatErrorKind) -> FormatError {
        FormatError {
            file: self.file,
            line: self.line.number,
            text: self.line.text.to_owned(),
            kind,
        }
    }

    pub fn integer(&self) -> Result<i32, FormatError> {
        integer(self.rest).ok_or_else(|| self.invalid_integer())
    }

    pub fn real(&self) -> Result<f64, FormatError> {
        real(self.rest).ok_or_else(|| {
            self.error(FormatErrorKind::InvalidFloat {
                directive: self.name(),
            })
        })
    }

    /// Parses the first whitespace-delimited token, ignoring whatever comes after it.
    pub fn first_integer(&self) -> Result<i32, FormatError> {
        let token = self.tokens().next().ok_or_else(|| {
            self.error(FormatErrorKind::MissingValue {
                directive: self.name(),
            })
        })?;

        self.token_integer(token)
    }

    pub fn token_integer(&self, token: &str) -> Result<i32, FormatError> {
        integer(token).ok_or_else(|| self.invalid_integer())
    }

    fn invalid_integer(&self) -> FormatError {
        self.error(FormatErrorKind::InvalidInteger {
            directive: self.name(),
        })
    }
}
