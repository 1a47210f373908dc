//! # sentmd-model
//!
//! **Tier 2 (Aggregation)**
//!
//! Turns an ordered corpus of scored records into a [`SentimentReport`]:
//! overall total/average/label, category counts with percentages, and the
//! most positive/negative entries.
//!
//! Aggregation runs through [`Tally`], a mergeable partial aggregate. Extreme
//! ties always resolve to the lower input index, so aggregating chunks and
//! merging them in any grouping gives the same extremes and counts as one
//! sequential pass.

use sentmd_types::{
    CategoryBreakdown, CategoryCount, CorpusEntry, ExtremeEntry, Extremes, OverallLabel,
    OverallSentiment, ScanStats, ScoredText, SentimentReport,
};

/// Marker appended to truncated display text.
pub const ELLIPSIS: &str = "...";

/// Cut `text` to at most `cap` characters, ending in `...` when shortened.
///
/// Text of `cap` characters or fewer is returned verbatim.
pub fn truncate_text(text: &str, cap: usize) -> String {
    if sentmd_math::char_len(text) <= cap {
        return text.to_string();
    }
    let keep = cap.saturating_sub(ELLIPSIS.len());
    let mut out: String = text.chars().take(keep).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Running extreme: the sentiment and the input index that produced it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub sentiment: f64,
    pub index: usize,
}

impl Peak {
    fn beats_max(&self, other: &Peak) -> bool {
        self.sentiment > other.sentiment
            || (self.sentiment == other.sentiment && self.index < other.index)
    }

    fn beats_min(&self, other: &Peak) -> bool {
        self.sentiment < other.sentiment
            || (self.sentiment == other.sentiment && self.index < other.index)
    }
}

/// Partial aggregate over some subset of a corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tally {
    pub count: usize,
    pub total: f64,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
    pub max: Option<Peak>,
    pub min: Option<Peak>,
}

impl Tally {
    /// Fold one record in. Records should arrive in increasing `index` order
    /// within a tally; ties keep the earlier index either way.
    pub fn push(&mut self, index: usize, record: &ScoredText) {
        let sentiment = record.sentiment();
        self.count += 1;
        self.total += sentiment;

        if record.is_positive() {
            self.positive += 1;
        } else if record.is_negative() {
            self.negative += 1;
        } else {
            self.neutral += 1;
        }

        let peak = Peak { sentiment, index };
        if self.max.is_none_or(|m| peak.beats_max(&m)) {
            self.max = Some(peak);
        }
        if self.min.is_none_or(|m| peak.beats_min(&m)) {
            self.min = Some(peak);
        }
    }

    /// Combine two partial tallies.
    pub fn merge(self, other: Tally) -> Tally {
        Tally {
            count: self.count + other.count,
            total: self.total + other.total,
            positive: self.positive + other.positive,
            negative: self.negative + other.negative,
            neutral: self.neutral + other.neutral,
            max: pick(self.max, other.max, Peak::beats_max),
            min: pick(self.min, other.min, Peak::beats_min),
        }
    }

    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a CorpusEntry>) -> Self {
        let mut tally = Tally::default();
        for entry in entries {
            tally.push(entry.index, &entry.record);
        }
        tally
    }

    pub fn average(&self) -> Option<f64> {
        sentmd_math::mean(self.total, self.count)
    }
}

fn pick(a: Option<Peak>, b: Option<Peak>, beats: fn(&Peak, &Peak) -> bool) -> Option<Peak> {
    match (a, b) {
        (Some(a), Some(b)) => Some(if beats(&b, &a) { b } else { a }),
        (a, None) => a,
        (None, b) => b,
    }
}

fn overall(tally: &Tally) -> Option<OverallSentiment> {
    let average = tally.average()?;
    Some(OverallSentiment {
        total: tally.total,
        average,
        label: OverallLabel::from_average(average),
    })
}

fn categories(tally: &Tally) -> Option<CategoryBreakdown> {
    if tally.count == 0 {
        return None;
    }
    let count = |n: usize| CategoryCount {
        count: n,
        percent: sentmd_math::percent(n, tally.count).unwrap_or(0.0),
    };
    Some(CategoryBreakdown {
        positive: count(tally.positive),
        negative: count(tally.negative),
        neutral: count(tally.neutral),
    })
}

fn extreme(entries: &[CorpusEntry], peak: Peak, cap: usize) -> Option<ExtremeEntry> {
    let entry = entries
        .get(peak.index)
        .filter(|e| e.index == peak.index)
        .or_else(|| entries.iter().find(|e| e.index == peak.index))?;
    Some(ExtremeEntry {
        index: entry.index,
        line: entry.line,
        label: entry.label.clone(),
        sentiment: entry.record.sentiment(),
        text: entry.record.text().to_string(),
        display_text: truncate_text(entry.record.text(), cap),
    })
}

/// Build a report from a finished tally and the entries it was built over.
pub fn report_from_tally(
    tally: &Tally,
    entries: &[CorpusEntry],
    stats: ScanStats,
    display_cap: usize,
) -> SentimentReport {
    let extremes = match (tally.max, tally.min) {
        (Some(max), Some(min)) => extreme(entries, max, display_cap)
            .zip(extreme(entries, min, display_cap))
            .map(|(most_positive, most_negative)| Extremes {
                most_positive,
                most_negative,
            }),
        _ => None,
    };

    SentimentReport {
        stats,
        overall: overall(tally),
        categories: categories(tally),
        extremes,
        display_cap,
    }
}

/// Aggregate a whole corpus in one pass.
pub fn build_report(
    entries: &[CorpusEntry],
    stats: ScanStats,
    display_cap: usize,
) -> SentimentReport {
    let tally = Tally::from_entries(entries);
    report_from_tally(&tally, entries, stats, display_cap)
}

/// Entries ordered by record (sentiment, then text), input order breaking
/// remaining ties.
pub fn ranked(entries: &[CorpusEntry]) -> Vec<&CorpusEntry> {
    let mut out: Vec<&CorpusEntry> = entries.iter().collect();
    out.sort_by(|a, b| a.record.cmp(&b.record).then(a.index.cmp(&b.index)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(index: usize, text: &str, sentiment: f64) -> CorpusEntry {
        CorpusEntry {
            index,
            line: index + 1,
            label: "feed".into(),
            record: ScoredText::scored(text, sentiment).unwrap(),
        }
    }

    #[test]
    fn truncate_keeps_short_text() {
        assert_eq!(truncate_text("short", 100), "short");
        let exact = "x".repeat(100);
        assert_eq!(truncate_text(&exact, 100), exact);
    }

    #[test]
    fn truncate_cuts_to_cap_minus_three_plus_marker() {
        let long = "y".repeat(150);
        let got = truncate_text(&long, 100);
        assert_eq!(got.chars().count(), 100);
        assert!(got.ends_with("..."));
        assert_eq!(&got[..97], &long[..97]);
    }

    #[test]
    fn truncate_counts_characters_not_bytes() {
        let text = "é".repeat(10);
        let got = truncate_text(&text, 6);
        assert_eq!(got, "ééé...");
    }

    #[test]
    fn push_first_wins_on_ties() {
        let entries = vec![
            entry(0, "a", 0.5),
            entry(1, "b", 0.5),
            entry(2, "c", -0.5),
            entry(3, "d", -0.5),
        ];
        let tally = Tally::from_entries(&entries);
        assert_eq!(tally.max.unwrap().index, 0);
        assert_eq!(tally.min.unwrap().index, 2);
    }

    #[test]
    fn all_negative_corpus_still_has_a_most_positive() {
        let entries = vec![entry(0, "a", -0.2), entry(1, "b", -0.7)];
        let report = build_report(&entries, ScanStats::default(), 100);
        let extremes = report.extremes.unwrap();
        assert_eq!(extremes.most_positive.text, "a");
        assert_eq!(extremes.most_negative.text, "b");
    }

    #[test]
    fn merge_prefers_lower_index_on_ties() {
        let late = Tally::from_entries(&[entry(5, "late", 0.9)]);
        let early = Tally::from_entries(&[entry(1, "early", 0.9)]);
        assert_eq!(late.clone().merge(early.clone()).max.unwrap().index, 1);
        assert_eq!(early.merge(late).max.unwrap().index, 1);
    }

    #[test]
    fn merge_with_empty_is_identity() {
        let t = Tally::from_entries(&[entry(0, "a", 0.3), entry(1, "b", -0.1)]);
        assert_eq!(t.clone().merge(Tally::default()), t);
        assert_eq!(Tally::default().merge(t.clone()), t);
    }

    #[test]
    fn empty_corpus_has_no_sections() {
        let report = build_report(&[], ScanStats::default(), 100);
        assert!(report.overall.is_none());
        assert!(report.categories.is_none());
        assert!(report.extremes.is_none());
        assert!(!report.has_data());
    }

    #[test]
    fn ranked_orders_by_sentiment_then_text() {
        let entries = vec![
            entry(0, "b", 0.1),
            entry(1, "a", 0.1),
            entry(2, "z", -0.4),
        ];
        let texts: Vec<&str> = ranked(&entries).iter().map(|e| e.record.text()).collect();
        assert_eq!(texts, vec!["z", "a", "b"]);
    }
}
