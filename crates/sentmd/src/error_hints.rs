use anyhow::Error;

pub(crate) fn format(err: &Error) -> String {
    let mut out = format!("Error: {err:#}");
    let hints = suggestions(err);
    if !hints.is_empty() {
        out.push_str("\n\nHints:\n");
        for hint in hints {
            out.push_str("- ");
            out.push_str(&hint);
            out.push('\n');
        }
    }
    out
}

fn suggestions(err: &Error) -> Vec<String> {
    let chain: Vec<String> = err.chain().map(|e| e.to_string()).collect();
    let haystack = chain.join(" | ").to_ascii_lowercase();
    let mut out: Vec<String> = Vec::new();

    if haystack.contains("corpus file not found") {
        push_hint(
            &mut out,
            "Pass the corpus path as the first argument, or `-` to read stdin.",
        );
        push_hint(
            &mut out,
            "Use an absolute path to avoid working-directory confusion.",
        );
    }

    if haystack.contains("failed to read corpus") {
        push_hint(&mut out, "Verify the corpus is a readable regular file.");
    }

    if haystack.contains("config file")
        && (haystack.contains("no such file") || haystack.contains("cannot find"))
    {
        push_hint(
            &mut out,
            "Check the `--config` path, or drop the flag to use `./sentmd.toml`.",
        );
    }

    if haystack.contains("toml") && (haystack.contains("parse") || haystack.contains("invalid")) {
        push_hint(
            &mut out,
            "Check `sentmd.toml` syntax; known sections are [resources], [scan], [report] and [export].",
        );
    }

    if haystack.contains("display cap") {
        push_hint(
            &mut out,
            "Use `--display-cap 4` or larger (one character plus `...`).",
        );
    }

    out
}

fn push_hint(out: &mut Vec<String>, hint: &str) {
    if !out.iter().any(|h| h == hint) {
        out.push(hint.to_string());
    }
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::{format, suggestions};

    #[test]
    fn suggests_for_missing_corpus() {
        let err = anyhow!("[corpus_not_found] corpus file not found: tweets.csv");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("`-` to read stdin")));
    }

    #[test]
    fn suggests_for_bad_toml() {
        let err = anyhow!("TOML parse error at line 1, column 1")
            .context("failed to load config file sentmd.toml");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("sentmd.toml` syntax")));
    }

    #[test]
    fn suggests_for_small_display_cap() {
        let err = anyhow!("[invalid_settings] Invalid settings: display cap must be at least 4, got 2");
        let hints = suggestions(&err);
        assert!(hints.iter().any(|h| h.contains("--display-cap 4")));
    }

    #[test]
    fn no_hints_for_unrelated_errors() {
        let err = anyhow!("something else");
        assert!(suggestions(&err).is_empty());
        assert_eq!(format(&err), "Error: something else");
    }

    #[test]
    fn format_includes_hints_section() {
        let err = anyhow!("corpus file not found: no-file");
        let rendered = format(&err);
        assert!(rendered.starts_with("Error:"));
        assert!(rendered.contains("Hints:"));
    }
}
