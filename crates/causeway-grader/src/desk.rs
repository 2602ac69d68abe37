//! `GradingDesk`: handles one query message at a time for many senders.
//!
//! `handle` never fails. Unparsable queries, rejected samples and
//! ungradeable guesses become unsuccessful replies carrying a diagnostic and
//! the usage hint, so a long-running desk keeps serving other senders.

use std::collections::BTreeMap;

use tracing::{info, warn};

use causeway_core::config::GradingConfig;
use causeway_core::errors::{CausewayErrorCode, QueryError};
use causeway_core::{CausewayConfig, SampleResult};
use causeway_engine::{CausalModel, CausalSystem, GradeReport, SampleTable};

use crate::query::{GuessQuery, Query, SampleQuery};
use crate::tally::UserTally;

/// Appended to every reply for a query that could not be served.
pub const USAGE: &str = "\
Example of experiment query:
    20, X=1

Example of guess query:
    guess: [('A', 'B'), ('B', 'C')]
";

#[derive(Debug, Clone)]
pub enum Outcome {
    Samples(SampleTable),
    Graded(GradeReport),
    Failed { code: &'static str, message: String },
}

/// What the desk answers to one message.
#[derive(Debug, Clone)]
pub struct Reply {
    pub subject: String,
    pub body: String,
    pub outcome: Outcome,
}

impl Reply {
    pub fn is_success(&self) -> bool {
        !matches!(self.outcome, Outcome::Failed { .. })
    }

    fn failed(subject: &str, error: &(impl CausewayErrorCode + std::fmt::Display)) -> Self {
        Self {
            subject: format!("Unknown query: {subject}"),
            body: format!("{error}\n\n{USAGE}"),
            outcome: Outcome::Failed {
                code: error.error_code(),
                message: error.to_string(),
            },
        }
    }
}

pub struct GradingDesk<M> {
    system: CausalSystem<M>,
    grading: GradingConfig,
    tallies: BTreeMap<String, UserTally>,
}

impl<M: CausalModel> GradingDesk<M> {
    pub fn new(system: CausalSystem<M>, grading: GradingConfig) -> Self {
        Self {
            system,
            grading,
            tallies: BTreeMap::new(),
        }
    }

    pub fn from_config(model: M, config: &CausewayConfig) -> SampleResult<Self> {
        Ok(Self::new(
            CausalSystem::with_config(model, config)?,
            config.grading.clone(),
        ))
    }

    /// Serve one message from `sender` with the given subject line.
    pub fn handle(&mut self, sender: &str, subject: &str) -> Reply {
        if !self.grading.is_allowed(sender) {
            let error = QueryError::SenderNotAllowed {
                sender: sender.to_string(),
            };
            warn!(sender, "{}", error.coded_string());
            return Reply {
                subject: "Access denied".to_string(),
                body: error.to_string(),
                outcome: Outcome::Failed {
                    code: error.error_code(),
                    message: error.to_string(),
                },
            };
        }

        let tally = self.tallies.entry(sender.to_string()).or_default();
        tally.record_message();

        let reply = match Query::parse(subject) {
            Ok(Query::Sample(query)) => sample(&self.system, tally, subject, &query),
            Ok(Query::Guess(query)) => guess(&self.system, tally, subject, &query),
            Err(error) => Reply::failed(subject, &error),
        };

        if reply.is_success() {
            info!(sender, subject, reply = %reply.subject, "handled query");
        } else {
            warn!(sender, subject, reply = %reply.subject, "query not served");
        }
        reply
    }

    pub fn tally(&self, sender: &str) -> Option<&UserTally> {
        self.tallies.get(sender)
    }

    pub fn tallies(&self) -> &BTreeMap<String, UserTally> {
        &self.tallies
    }

    /// Competition cost of `sender`, once they have guessed correctly.
    pub fn score(&self, sender: &str) -> Option<u64> {
        self.tallies.get(sender)?.score(&self.grading)
    }

    /// Completed senders by ascending cost.
    pub fn leaderboard(&self) -> Vec<(&str, u64)> {
        let mut board: Vec<(&str, u64)> = self
            .tallies
            .iter()
            .filter_map(|(sender, tally)| Some((sender.as_str(), tally.score(&self.grading)?)))
            .collect();
        board.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        board
    }

    pub fn system(&self) -> &CausalSystem<M> {
        &self.system
    }
}

fn sample<M: CausalModel>(
    system: &CausalSystem<M>,
    tally: &mut UserTally,
    subject: &str,
    query: &SampleQuery,
) -> Reply {
    match system.sample(query.n_samples, &query.interventions, query.secret.as_deref()) {
        Ok(table) => {
            tally.record_experiment(table.n_rows());
            let line = format!("Data for query: {subject}");
            Reply {
                subject: line.clone(),
                body: line,
                outcome: Outcome::Samples(table),
            }
        }
        Err(error) => Reply::failed(subject, &error),
    }
}

fn guess<M: CausalModel>(
    system: &CausalSystem<M>,
    tally: &mut UserTally,
    subject: &str,
    query: &GuessQuery,
) -> Reply {
    match system.grade(query.literal.as_str()) {
        Ok(report) => {
            tally.record_guess(report.correct);
            let (line, verdict) = if report.correct {
                ("CORRECT GRAPH!", "CORRECT")
            } else {
                ("Incorrect graph.", "INCORRECT")
            };
            Reply {
                subject: line.to_string(),
                body: format!("The following graph is {verdict}: \n{}", query.literal),
                outcome: Outcome::Graded(report),
            }
        }
        Err(error) => Reply::failed(subject, &error),
    }
}
