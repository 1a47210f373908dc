//! # sentmd-format
//!
//! **Tier 3 (Formatting)**
//!
//! This crate handles the rendering and serialization of `sentmd` reports.
//! It supports a plain console report, Markdown, JSON receipts, and
//! TSV/CSV/JSONL per-record exports.
//!
//! ## What belongs here
//! * Serialization logic (JSON/CSV)
//! * Text and Markdown rendering
//! * Writing to stdout or any `Write`
//!
//! ## What does NOT belong here
//! * Business logic (scoring, aggregation)
//! * CLI arg parsing

use std::io::{self, Write};

use anyhow::Result;

use sentmd_types::{
    ExportFormat, ExportRow, ReportFormat, ScanStats, ScoreTrace, ScoredText, SentimentReceipt,
    SentimentReport, TokenVerdict,
};

// -------------
// Report output
// -------------

/// Write `receipt` to stdout in `format`.
pub fn print_report(receipt: &SentimentReceipt, format: ReportFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report_to(&mut out, receipt, format)?;
    out.flush()?;
    Ok(())
}

pub fn write_report_to<W: Write>(
    out: &mut W,
    receipt: &SentimentReceipt,
    format: ReportFormat,
) -> Result<()> {
    match format {
        ReportFormat::Text => write!(out, "{}", render_report_text(&receipt.report))?,
        ReportFormat::Md => write!(out, "{}", render_report_md(&receipt.report))?,
        ReportFormat::Json => writeln!(out, "{}", serde_json::to_string(receipt)?)?,
    }
    Ok(())
}

fn loaded_line(stats: &ScanStats) -> String {
    let mut s = format!(
        "Loaded: {}/{} messages\n",
        stats.analyzed, stats.lines_seen
    );
    if stats.failed > 0 {
        s.push_str(&format!("Failed records: {}\n", stats.failed));
    }
    s
}

/// Console report: a RESULTS section and a DETAILED STATISTICS section.
pub fn render_report_text(report: &SentimentReport) -> String {
    let mut s = loaded_line(&report.stats);
    s.push('\n');

    let Some(overall) = &report.overall else {
        s.push_str("No messages available for analysis.\n");
        return s;
    };

    s.push_str("=== RESULTS ===\n");
    s.push_str(&format!("Analyzed messages: {}\n", report.stats.analyzed));
    s.push_str(&format!("Total sentiment score: {:.6}\n", overall.total));
    s.push_str(&format!("Average sentiment score: {:.6}\n", overall.average));
    s.push_str(&format!("Overall rating: {}\n", overall.label));

    if let Some(c) = &report.categories {
        s.push_str("\n=== DETAILED STATISTICS ===\n");
        s.push_str(&format!(
            "Positive messages: {} ({:.1}%)\n",
            c.positive.count, c.positive.percent
        ));
        s.push_str(&format!(
            "Negative messages: {} ({:.1}%)\n",
            c.negative.count, c.negative.percent
        ));
        s.push_str(&format!(
            "Neutral messages: {} ({:.1}%)\n",
            c.neutral.count, c.neutral.percent
        ));
    }

    if let Some(x) = &report.extremes {
        s.push_str(&format!(
            "\nMost positive message ({:.6}):\n\"{}\"\n",
            x.most_positive.sentiment, x.most_positive.display_text
        ));
        s.push_str(&format!(
            "\nMost negative message ({:.6}):\n\"{}\"\n",
            x.most_negative.sentiment, x.most_negative.display_text
        ));
    }

    s
}

fn md_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Markdown tables for overview, categories and extremes.
pub fn render_report_md(report: &SentimentReport) -> String {
    let stats = &report.stats;
    let mut s = String::new();

    s.push_str("## Sentiment\n\n");
    s.push_str("|Metric|Value|\n");
    s.push_str("|---|---:|\n");
    s.push_str(&format!("|Lines seen|{}|\n", stats.lines_seen));
    s.push_str(&format!("|Analyzed|{}|\n", stats.analyzed));
    s.push_str(&format!("|Blank|{}|\n", stats.blank_lines));
    s.push_str(&format!("|Failed|{}|\n", stats.failed));

    match &report.overall {
        Some(o) => {
            s.push_str(&format!("|Total|{:.6}|\n", o.total));
            s.push_str(&format!("|Average|{:.6}|\n", o.average));
            s.push_str(&format!("|Label|{}|\n", o.label));
        }
        None => {
            s.push_str("\n_No data available._\n");
            return s;
        }
    }

    if let Some(c) = &report.categories {
        s.push_str("\n### Categories\n\n");
        s.push_str("|Class|Count|Percent|\n");
        s.push_str("|---|---:|---:|\n");
        for (name, cat) in [
            ("positive", &c.positive),
            ("negative", &c.negative),
            ("neutral", &c.neutral),
        ] {
            s.push_str(&format!("|{}|{}|{:.1}%|\n", name, cat.count, cat.percent));
        }
    }

    if let Some(x) = &report.extremes {
        s.push_str("\n### Extremes\n\n");
        s.push_str("|Kind|Line|Score|Text|\n");
        s.push_str("|---|---:|---:|---|\n");
        for (kind, e) in [
            ("most positive", &x.most_positive),
            ("most negative", &x.most_negative),
        ] {
            s.push_str(&format!(
                "|{}|{}|{:.6}|{}|\n",
                kind,
                e.line,
                e.sentiment,
                md_cell(&e.display_text)
            ));
        }
    }

    s
}

// -------------
// Export output
// -------------

/// Write per-record rows to stdout in `format`.
pub fn print_export(rows: &[ExportRow], format: ExportFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_export_to(&mut out, rows, format)?;
    out.flush()?;
    Ok(())
}

pub fn write_export_to<W: Write>(out: &mut W, rows: &[ExportRow], format: ExportFormat) -> Result<()> {
    match format {
        ExportFormat::Tsv => write_export_tsv_to(out, rows),
        ExportFormat::Csv => write_export_csv_to(out, rows),
        ExportFormat::Jsonl => write_export_jsonl_to(out, rows),
    }
}

const EXPORT_HEADER: [&str; 6] = ["index", "line", "label", "sentiment", "class", "text"];

fn export_fields(r: &ExportRow) -> [String; 6] {
    [
        r.index.to_string(),
        r.line.to_string(),
        r.label.clone(),
        format!("{:.6}", r.sentiment),
        r.class.as_str().to_string(),
        r.text.clone(),
    ]
}

/// TSV has no quoting, so embedded tabs in text become spaces.
pub fn write_export_tsv_to<W: Write>(out: &mut W, rows: &[ExportRow]) -> Result<()> {
    writeln!(out, "{}", EXPORT_HEADER.join("\t"))?;
    for r in rows {
        let fields = export_fields(r).map(|f| f.replace('\t', " "));
        writeln!(out, "{}", fields.join("\t"))?;
    }
    Ok(())
}

pub fn write_export_csv_to<W: Write>(out: &mut W, rows: &[ExportRow]) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(out);
    wtr.write_record(EXPORT_HEADER)?;
    for r in rows {
        wtr.write_record(export_fields(r))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_export_jsonl_to<W: Write>(out: &mut W, rows: &[ExportRow]) -> Result<()> {
    for row in rows {
        writeln!(out, "{}", serde_json::to_string(row)?)?;
    }
    Ok(())
}

// ------------------
// Score and explain
// ------------------

/// One `score<TAB>text` line per record.
pub fn render_scores_tsv(records: &[ScoredText]) -> String {
    let mut s = String::new();
    for r in records {
        s.push_str(&format!("{:.6}\t{}\n", r.sentiment(), r.text()));
    }
    s
}

/// Token-by-token trace as a Markdown table.
pub fn render_explain_md(trace: &ScoreTrace) -> String {
    let mut s = String::new();
    s.push_str(&format!("Text: \"{}\"\n", trace.text));
    s.push_str(&format!("Normalized: \"{}\"\n\n", trace.normalized));

    if trace.tokens.is_empty() {
        s.push_str("_No tokens._\n\n");
    } else {
        s.push_str("|#|Token|Verdict|Weight|\n");
        s.push_str("|---:|---|---|---:|\n");
        for (i, t) in trace.tokens.iter().enumerate() {
            let (verdict, weight) = match t.verdict {
                TokenVerdict::Stopword => ("stop-word", String::from("-")),
                TokenVerdict::Matched { weight } => ("matched", format!("{weight:.4}")),
                TokenVerdict::Unmatched => ("not in lexicon", String::from("-")),
            };
            s.push_str(&format!("|{}|{}|{}|{}|\n", i + 1, t.token, verdict, weight));
        }
        s.push('\n');
    }

    s.push_str(&format!("Matched tokens: {}\n", trace.matched));
    s.push_str(&format!("Raw score: {:.6}\n", trace.raw_score));
    s.push_str(&format!("Score: {:.6}\n", trace.score));
    s
}
