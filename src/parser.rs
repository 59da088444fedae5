use std::collections::{HashMap, HashSet};

use regex::Regex;

use crate::error::AbaError;
use crate::framework::Framework;
use crate::literal::Literal;
use crate::rule::Rule;

/// Parses the line-oriented text format of §6 into a [`Framework`].
///
/// Syntax only: cross-reference checks (unknown literals, missing
/// contraries, ill-formed preferences) are left to [`Framework::new`], which
/// runs once over the fully-parsed value. This keeps the reader a pure
/// surface-syntax adapter, matching the scope the distilled spec draws
/// around it.
pub fn parse(input: &str) -> Result<Framework, AbaError> {
    let rule_re = Regex::new(r"^\[(?P<name>[^\]]+)\]\s*:\s*(?P<body>.*)$").unwrap();
    let contrary_re = Regex::new(r"^C\((?P<assumption>[^)]+)\)\s*:\s*(?P<contrary>.+)$").unwrap();

    let mut language: HashSet<Literal> = HashSet::new();
    let mut assumptions: HashSet<Literal> = HashSet::new();
    let mut contraries: HashMap<Literal, Literal> = HashMap::new();
    let mut rules: Vec<Rule> = vec![];
    let mut preferences: HashSet<(Literal, Literal)> = HashSet::new();

    for (lineno, raw_line) in input.lines().enumerate() {
        let line_number = lineno + 1;
        let line = strip_comment(raw_line).trim();
        if line.is_empty() {
            continue;
        }

        if let Some(rest) = line.strip_prefix("L:") {
            language = parse_literal_list(rest).into_iter().collect();
        } else if let Some(rest) = line.strip_prefix("A:") {
            assumptions = parse_literal_list(rest).into_iter().collect();
        } else if let Some(rest) = line.strip_prefix("PREF:") {
            let (betters, worse) = parse_preference(rest, line_number)?;
            for b in betters {
                preferences.insert((b, worse.clone()));
            }
        } else if let Some(caps) = contrary_re.captures(line) {
            let a = Literal::new(caps["assumption"].trim().to_string());
            let c = Literal::new(caps["contrary"].trim().to_string());
            contraries.insert(a, c);
        } else if let Some(caps) = rule_re.captures(line) {
            let name = caps["name"].trim().to_string();
            let body = caps["body"].trim();
            let (conclusion, premises) = parse_rule_body(body, line_number)?;
            rules.push(Rule::new(name, conclusion, premises));
        } else {
            return Err(AbaError::MalformedInput {
                line: line_number,
                reason: "line matches no known declaration shape".to_string(),
            });
        }
    }

    Framework::new(language, assumptions, contraries, rules, preferences)
}

fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(idx) => &line[..idx],
        None => line,
    }
}

fn parse_literal_list(rest: &str) -> Vec<Literal> {
    let trimmed = rest.trim().trim_start_matches('[').trim_end_matches(']');
    trimmed
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Literal::new)
        .collect()
}

fn parse_rule_body(body: &str, line: usize) -> Result<(Literal, Vec<Literal>), AbaError> {
    match body.split_once("<-") {
        Some((head, tail)) => {
            let head = head.trim();
            if head.is_empty() {
                return Err(AbaError::MalformedInput {
                    line,
                    reason: "rule has no conclusion".to_string(),
                });
            }
            let premises = tail
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(Literal::new)
                .collect();
            Ok((Literal::new(head), premises))
        }
        None => {
            let head = body.trim();
            if head.is_empty() {
                return Err(AbaError::MalformedInput {
                    line,
                    reason: "rule has no conclusion".to_string(),
                });
            }
            Ok((Literal::new(head), vec![]))
        }
    }
}

fn parse_preference(rest: &str, line: usize) -> Result<(Vec<Literal>, Literal), AbaError> {
    let (betters, worse) = rest.split_once('>').ok_or_else(|| AbaError::MalformedInput {
        line,
        reason: "preference line missing '>'".to_string(),
    })?;
    let betters: Vec<Literal> = betters
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Literal::new)
        .collect();
    let worse = worse.trim();
    if betters.is_empty() || worse.is_empty() {
        return Err(AbaError::MalformedInput {
            line,
            reason: "preference line needs at least one better item and a worse item".to_string(),
        });
    }
    Ok((betters, Literal::new(worse)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(s: &str) -> Literal {
        Literal::new(s)
    }

    #[test]
    fn test_parses_minimal_framework() {
        let input = "\
L: [a, b, p, q]
A: [a, b]
C(a): p
C(b): q
[r1]: p <- b
[r2]: q <- a
PREF: a > b
";
        let fw = parse(input).unwrap();
        assert_eq!(fw.language().len(), 4);
        assert_eq!(fw.assumptions().len(), 2);
        assert_eq!(fw.rules().len(), 2);
        assert_eq!(fw.preferences(), &[(lit("a"), lit("b"))]);
    }

    #[test]
    fn test_comments_and_blank_lines_are_skipped() {
        let input = "\
# this is the language
L: [a]
A: [a]

C(a): a
# a trailing comment
";
        let fw = parse(input).unwrap();
        assert_eq!(fw.language().len(), 1);
    }

    #[test]
    fn test_fact_rule_has_empty_premises() {
        let input = "\
L: [a, p]
A: [a]
C(a): p
[r1]: p
";
        let fw = parse(input).unwrap();
        assert!(fw.rules()[0].is_fact());
    }

    #[test]
    fn test_multi_better_preference_expands() {
        let input = "\
L: [a, b, c]
A: [a, b, c]
C(a): a
C(b): b
C(c): c
PREF: a, b > c
";
        let fw = parse(input).unwrap();
        let mut prefs = fw.preferences().to_vec();
        prefs.sort();
        assert_eq!(prefs, vec![(lit("a"), lit("c")), (lit("b"), lit("c"))]);
    }

    #[test]
    fn test_malformed_line_reports_line_number() {
        let input = "L: [a]\nthis is nonsense\n";
        let err = parse(input).unwrap_err();
        match err {
            AbaError::MalformedInput { line, .. } => assert_eq!(line, 2),
            other => panic!("expected MalformedInput, got {other:?}"),
        }
    }

    #[test]
    fn test_unknown_literal_surfaces_as_typed_error() {
        let input = "\
L: [a]
A: [a]
C(a): a
[r1]: p <- a
";
        let err = parse(input).unwrap_err();
        assert_eq!(err, AbaError::UnknownLiteral(lit("p")));
    }

    #[test]
    fn test_preference_on_non_assumption_surfaces_as_typed_error() {
        // S8: before any derivation work is attempted.
        let input = "\
L: [a, p]
A: [a]
C(a): p
PREF: p > a
";
        let err = parse(input).unwrap_err();
        assert_eq!(err, AbaError::PreferenceDomainError(lit("p")));
    }

    #[test]
    fn test_text_format_round_trips_against_hand_built_framework() {
        // S7: the parsed framework equals one hand-built with the
        // constructors used everywhere else, verifying the adapter without
        // coupling core tests to its grammar.
        use std::collections::{HashMap as StdHashMap, HashSet as StdHashSet};

        let input = "\
# a minimal two-assumption framework
L: [a, b, p, q]
A: [a, b]
C(a): p
C(b): q
[r1]: p <- b
[r2]: q <- a
PREF: a, b > q
";
        let parsed = parse(input).unwrap();

        let language: StdHashSet<Literal> = [lit("a"), lit("b"), lit("p"), lit("q")]
            .into_iter()
            .collect();
        let assumptions: StdHashSet<Literal> = [lit("a"), lit("b")].into_iter().collect();
        let contraries: StdHashMap<Literal, Literal> =
            [(lit("a"), lit("p")), (lit("b"), lit("q"))].into_iter().collect();
        let rules = vec![
            Rule::new("r1", lit("p"), vec![lit("b")]),
            Rule::new("r2", lit("q"), vec![lit("a")]),
        ];
        let preferences: StdHashSet<(Literal, Literal)> =
            [(lit("a"), lit("q")), (lit("b"), lit("q"))].into_iter().collect();
        let hand_built =
            Framework::new(language, assumptions, contraries, rules, preferences).unwrap();

        assert_eq!(parsed.language(), hand_built.language());
        assert_eq!(parsed.assumptions(), hand_built.assumptions());
        assert_eq!(parsed.rules(), hand_built.rules());
        assert_eq!(parsed.preferences(), hand_built.preferences());
    }
}
