#[cfg(feature = "batch-ops")]
use rayon::prelude::*;

#[cfg(feature = "batch-ops")]
use crate::decode::{decode, DecodeCandidate};
#[cfg(feature = "batch-ops")]
use crate::search::{MatchRecord, Search, SearchReport, SearchStats};

/// Parallel search: every (token, decode candidate) pair is one work unit.
///
/// Tokens are decoded up front (deadline checked per token); units then run on
/// the rayon pool, each worker filling its own buffer. Buffers are merged in
/// unit order, so the matches come out exactly as [`Search::run`] would order
/// them, deadline permitting.
#[cfg(feature = "batch-ops")]
pub fn search_batch<S>(search: &Search, tokens: &[S]) -> SearchReport
where
    S: AsRef<str> + Sync,
{
    let deadline = search.start_deadline();
    let mut report = SearchReport::default();

    let mut units: Vec<(&str, DecodeCandidate)> = Vec::new();
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
        units.extend(candidates.into_iter().map(|candidate| (token, candidate)));
    }

    let shards: Vec<(Vec<MatchRecord>, SearchStats)> = units
        .par_iter()
        .map(|(token, candidate)| {
            let mut sink = Vec::new();
            let mut stats = SearchStats::default();
            search.scan_candidate(token, candidate, &deadline, &mut sink, &mut stats);
            (sink, stats)
        })
        .collect();

    for (sink, stats) in shards {
        report.matches.extend(sink);
        report.stats.absorb(&stats);
    }

    search.finish(&mut report, &deadline);
    report
}

#[cfg(feature = "batch-ops")]
impl Search {
    /// Shorthand for [`search_batch`].
    pub fn run_parallel<S>(&self, tokens: &[S]) -> SearchReport
    where
        S: AsRef<str> + Sync,
    {
        search_batch(self, tokens)
    }
}
