//! src/search/run.rs
//! Sequential search loop.

use super::record::{MatchRecord, SearchReport, SearchStats};
use super::{Deadline, Search};
use crate::decode::{decode, DecodeCandidate};
use crate::keyspace::KeySpace;
use crate::score::{is_printable, score};
use crate::utils::latin1_decode;

impl Search {
    /// Search every token, single-threaded.
    ///
    /// Never fails: an empty report is a valid outcome.
    pub fn run<S: AsRef<str>>(&self, tokens: &[S]) -> SearchReport {
        let deadline = self.start_deadline();
        let mut report = SearchReport::default();

        for token in tokens {
            if deadline.expired() {
                report.stats.deadline_hit = true;
                break;
            }
            let token = token.as_ref();
            let candidates = decode(token);
            tracing::info!(token, candidates = candidates.len(), "decoded token");
            report.stats.tokens += 1;
            report.stats.candidates += candidates.len();

            for candidate in &candidates {
                if !self.scan_candidate(
                    token,
                    candidate,
                    &deadline,
                    &mut report.matches,
                    &mut report.stats,
                ) {
                    break;
                }
            }
            if report.stats.deadline_hit {
                break;
            }
        }

        self.finish(&mut report, &deadline);
        report
    }

    /// Exhaust the key space for one candidate.
    ///
    /// Returns `false` when the deadline stopped the scan early.
    pub(crate) fn scan_candidate(
        &self,
        token: &str,
        candidate: &DecodeCandidate,
        deadline: &Deadline,
        sink: &mut Vec<MatchRecord>,
        stats: &mut SearchStats,
    ) -> bool {
        if deadline.expired() {
            stats.deadline_hit = true;
            return false;
        }
        let data = candidate.bytes();
        let keys = KeySpace::new(
            &self.wordlist,
            &self.charset,
            self.max_key_len,
            self.derived_keys,
        );

        for key in keys {
            if deadline.expired() {
                stats.deadline_hit = true;
                return false;
            }
            stats.keys += 1;

            for &(kind, mode) in &self.combos {
                stats.trials += 1;
                let Some(recovered) = self.trial.attempt(data, kind, mode, key.bytes()) else {
                    continue;
                };
                if recovered.plaintext.is_empty() || !is_printable(&recovered.plaintext) {
                    continue;
                }
                let text = latin1_decode(&recovered.plaintext);
                let value = score(&text);
                sink.push(MatchRecord::new(
                    token,
                    candidate,
                    kind,
                    mode,
                    &key,
                    text,
                    value,
                    recovered.padding_valid,
                ));
            }
        }
        true
    }

    pub(crate) fn finish(&self, report: &mut SearchReport, deadline: &Deadline) {
        report.stats.matches = report.matches.len();
        report.stats.elapsed = deadline.elapsed();
        if report.stats.deadline_hit {
            tracing::info!(
                elapsed = ?report.stats.elapsed,
                "time limit reached, returning partial results"
            );
        }
        tracing::info!(
            tokens = report.stats.tokens,
            candidates = report.stats.candidates,
            keys = report.stats.keys,
            trials = report.stats.trials,
            matches = report.stats.matches,
            "search finished"
        );
    }
}
