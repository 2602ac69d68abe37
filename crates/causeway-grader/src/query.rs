//! Textual query protocol.
//!
//! Two forms are understood:
//!
//! - `guess: <edge-list literal>` (prefix case-insensitive). The bracketed
//!   literal is taken from the subject with its original case and `\'`/`\"`
//!   unescaped.
//! - `<n_samples>[ ,]<key=value ...>`. `password=<s>` carries the secret;
//!   every other value is a numeric literal (`True`/`False` count as 1/0).

use std::sync::LazyLock;

use regex::Regex;

use causeway_core::errors::QueryError;
use causeway_engine::grading::literal::{self, Literal};
use causeway_engine::{Intervention, Interventions};

static GUESS_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\s*guess:(.*)").ok());
static GUESS_LITERAL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[^{}()\[\]]*([\[({].*[\]})])[^{}()\[\]]*$").ok());
static SAMPLE_REQUEST: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(\d+)[ ,\s]*([^\n]*)").ok());
static SETTING: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"([_\w]+)=([-+]?[\d.\w]+)").ok());

const SECRET_KEY: &str = "password";

#[derive(Debug, Clone, PartialEq)]
pub enum Query {
    Sample(SampleQuery),
    Guess(GuessQuery),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SampleQuery {
    pub n_samples: usize,
    pub interventions: Interventions,
    pub secret: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessQuery {
    /// The edge-list literal, unescaped but otherwise verbatim.
    pub literal: String,
}

impl Query {
    pub fn parse(subject: &str) -> Result<Self, QueryError> {
        let lowered = subject.to_lowercase();
        if matches(&GUESS_PREFIX, &lowered) {
            return parse_guess(subject).map(Self::Guess);
        }
        parse_sample(subject).map(Self::Sample)
    }
}

fn matches(pattern: &LazyLock<Option<Regex>>, text: &str) -> bool {
    pattern.as_ref().is_some_and(|re| re.is_match(text))
}

fn parse_guess(subject: &str) -> Result<GuessQuery, QueryError> {
    let literal = GUESS_LITERAL
        .as_ref()
        .and_then(|re| re.captures(subject))
        .and_then(|caps| caps.get(1))
        .ok_or(QueryError::MissingGuess)?
        .as_str()
        .replace(r"\'", "'")
        .replace(r#"\""#, "\"");
    Ok(GuessQuery { literal })
}

fn parse_sample(subject: &str) -> Result<SampleQuery, QueryError> {
    let unrecognized = || QueryError::Unrecognized {
        subject: subject.to_string(),
    };
    let caps = SAMPLE_REQUEST
        .as_ref()
        .and_then(|re| re.captures(subject))
        .ok_or_else(unrecognized)?;
    let raw_count = caps.get(1).map_or("", |m| m.as_str());
    let n_samples = raw_count
        .parse::<usize>()
        .map_err(|_| QueryError::InvalidSampleCount {
            raw: raw_count.to_string(),
        })?;
    let settings = caps.get(2).map_or("", |m| m.as_str()).trim();

    let mut interventions = Interventions::new();
    let mut secret = None;
    let Some(setting) = SETTING.as_ref() else {
        return Err(unrecognized());
    };
    for caps in setting.captures_iter(settings) {
        let (_, [key, value]) = caps.extract();
        if key == SECRET_KEY {
            secret = Some(value.to_string());
        } else {
            interventions.insert(key, setting_value(key, value)?);
        }
    }

    Ok(SampleQuery {
        n_samples,
        interventions,
        secret,
    })
}

fn setting_value(key: &str, value: &str) -> Result<Intervention, QueryError> {
    match literal::parse(value) {
        Ok(Literal::Int(i)) => Ok(Intervention::from(i)),
        Ok(Literal::Float(f)) => Ok(Intervention::from(f)),
        Ok(Literal::Bool(b)) => Ok(Intervention::from(b)),
        _ => Err(QueryError::InvalidSetting {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
