// retouch-core/tests/rewrite_tests.rs
//
// End-to-end coverage of the rewrite pass properties: count accuracy,
// order sensitivity, idempotence, and no-op safety.
use anyhow::Result;

use retouch_core::{
    rewrite_file, rewrite_string, RegexEngine, RewriteConfig, RewriteEngine, RewriteOptions,
    RewriteRule, WriteOutcome,
};

fn literal(name: &str, pattern: &str, replace_with: &str) -> RewriteRule {
    RewriteRule {
        name: name.to_string(),
        pattern: pattern.to_string(),
        pattern_type: "literal".to_string(),
        replace_with: replace_with.to_string(),
        ..Default::default()
    }
}

fn regex(name: &str, pattern: &str, replace_with: &str) -> RewriteRule {
    RewriteRule {
        name: name.to_string(),
        pattern: pattern.to_string(),
        pattern_type: "regex".to_string(),
        replace_with: replace_with.to_string(),
        ..Default::default()
    }
}

#[test_log::test]
fn test_palette_example_counts_and_output() -> Result<()> {
    let config = RewriteConfig {
        rules: vec![
            literal("rgba_bright_red", "rgba(204, 0, 0,", "rgba(139, 0, 0,"),
            literal("hex_bright_red", "#CC0000", "#8B0000"),
        ],
    };
    let document = "color: rgba(204, 0, 0, 1.0); border: #CC0000;";
    let (rewritten, report) = rewrite_string(config, document, "palette.css")?;

    assert_eq!(rewritten, "color: rgba(139, 0, 0, 1.0); border: #8B0000;");
    assert_eq!(report.tallies[0].occurrences, 1);
    assert_eq!(report.tallies[1].occurrences, 1);
    assert_eq!(report.total(), 2);
    Ok(())
}

#[test]
fn test_case_sensitive_rule_misses_lowercase() -> Result<()> {
    let config = RewriteConfig {
        rules: vec![literal("hex_bright_red", "#CC0000", "#8B0000")],
    };
    let document = "border: #cc0000;";
    let (rewritten, report) = rewrite_string(config, document, "palette.css")?;

    assert_eq!(rewritten, document);
    assert_eq!(report.total(), 0);
    Ok(())
}

#[test]
fn test_count_accuracy_non_overlapping_scan() -> Result<()> {
    // "aaaa" holds exactly two non-overlapping "aa" matches.
    let config = RewriteConfig {
        rules: vec![literal("pair", "aa", "b")],
    };
    let (rewritten, report) = rewrite_string(config, "aaaa", "t")?;
    assert_eq!(rewritten, "bb");
    assert_eq!(report.total(), 2);
    Ok(())
}

#[test]
fn test_order_sensitivity_with_overlapping_rules() -> Result<()> {
    // A broader rule placed first shadows the narrower one.
    let broad = regex("any_red_hex", "#..0000", "#8B0000");
    let narrow = literal("exact_red_hex", "#CC0000", "darkred");
    let document = "#CC0000";

    let (broad_first, report_bf) = rewrite_string(
        RewriteConfig { rules: vec![broad.clone(), narrow.clone()] },
        document,
        "t",
    )?;
    assert_eq!(broad_first, "#8B0000");
    assert_eq!(report_bf.tallies[0].occurrences, 1);
    assert_eq!(report_bf.tallies[1].occurrences, 0);

    let (narrow_first, report_nf) = rewrite_string(
        RewriteConfig { rules: vec![narrow, broad] },
        document,
        "t",
    )?;
    assert_eq!(narrow_first, "darkred");
    assert_eq!(report_nf.tallies[0].occurrences, 1);
    assert_eq!(report_nf.tallies[1].occurrences, 0);
    Ok(())
}

#[test]
fn test_idempotence_of_converging_rule_set() -> Result<()> {
    let config = RewriteConfig {
        rules: vec![
            literal("rgba_bright_red", "rgba(204, 0, 0,", "rgba(139, 0, 0,"),
            literal("hex_bright_red", "#CC0000", "#8B0000"),
        ],
    };
    let document = "rgba(204, 0, 0, 0.5) #CC0000 rgba(204, 0, 0, 1)";

    let (once, first_report) = rewrite_string(config.clone(), document, "t")?;
    let (twice, second_report) = rewrite_string(config, &once, "t")?;

    assert_eq!(once, twice);
    assert_eq!(first_report.total(), 3);
    assert_eq!(second_report.total(), 0);
    Ok(())
}

#[test]
fn test_rule_set_order_preserved_in_report() -> Result<()> {
    let config = RewriteConfig {
        rules: vec![
            literal("zulu", "z", "-"),
            literal("alpha", "a", "-"),
            literal("mike", "m", "-"),
        ],
    };
    let engine = RegexEngine::new(config)?;
    let report = engine.scan("zam", "t")?;
    let names: Vec<&str> = report.tallies.iter().map(|t| t.rule_name.as_str()).collect();
    assert_eq!(names, vec!["zulu", "alpha", "mike"]);
    Ok(())
}

#[test_log::test]
fn test_file_pass_no_op_leaves_bytes_untouched() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("page.html");
    let original = "<body style=\"color: #336699\">unrelated</body>";
    std::fs::write(&path, original)?;

    let config = RewriteConfig {
        rules: vec![literal("hex_bright_red", "#CC0000", "#8B0000")],
    };
    let (report, outcome) = rewrite_file(config, &path, &RewriteOptions::default())?;

    assert!(report.is_noop());
    assert_eq!(outcome, WriteOutcome::Skipped);
    assert_eq!(std::fs::read(&path)?, original.as_bytes());
    Ok(())
}

#[test]
fn test_file_pass_rewrites_in_place() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("viewer.html");
    std::fs::write(
        &path,
        "<style>.err { color: #CC0000; background: rgba(204, 0, 0, 0.1); }</style>",
    )?;

    let config = RewriteConfig {
        rules: vec![
            regex("rgba_bright_red", r"rgba\(204,\s*0,\s*0,", "rgba(139, 0, 0,"),
            literal("hex_bright_red", "#CC0000", "#8B0000"),
        ],
    };
    let (report, outcome) = rewrite_file(config, &path, &RewriteOptions::default())?;

    assert_eq!(outcome, WriteOutcome::Written);
    assert_eq!(report.total(), 2);
    assert_eq!(
        std::fs::read_to_string(&path)?,
        "<style>.err { color: #8B0000; background: rgba(139, 0, 0, 0.1); }</style>"
    );
    Ok(())
}

#[test]
fn test_multiline_flag_anchors_per_line() -> Result<()> {
    let mut rule = regex("strip_trailing_semicolon", ";$", "");
    rule.multiline = true;
    let config = RewriteConfig { rules: vec![rule] };
    let (rewritten, report) = rewrite_string(config, "a;\nb;\nc\n", "t")?;
    assert_eq!(rewritten, "a\nb\nc\n");
    assert_eq!(report.total(), 2);
    Ok(())
}
