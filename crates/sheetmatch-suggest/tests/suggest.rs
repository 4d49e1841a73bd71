use sheetmatch_suggest::{HeuristicSuggester, KeySuggester, KeySuggestion, apply_suggestion};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| (*name).to_string()).collect()
}

/// Suggester standing in for a remote service that is unavailable.
struct Offline;

impl KeySuggester for Offline {
    fn suggest(&self, _: &str, _: &[String], _: &str, _: &[String]) -> Option<KeySuggestion> {
        None
    }
}

fn fill_keys(
    suggester: &dyn KeySuggester,
    master_key: &mut Option<String>,
    lookup_key: &mut Option<String>,
    left: &[String],
    right: &[String],
) -> Option<String> {
    let suggestion = suggester.suggest("master", left, "lookup", right)?;
    apply_suggestion(master_key, lookup_key, &suggestion, left, right);
    Some(suggestion.reasoning)
}

#[test]
fn heuristic_fills_both_keys() {
    let left = headers(&["Email Address", "Full Name"]);
    let right = headers(&["email", "Plan"]);
    let mut master_key = None;
    let mut lookup_key = None;

    let reasoning = fill_keys(
        &HeuristicSuggester::default(),
        &mut master_key,
        &mut lookup_key,
        &left,
        &right,
    );

    assert!(reasoning.is_some());
    assert_eq!(master_key.as_deref(), Some("Email Address"));
    assert_eq!(lookup_key.as_deref(), Some("email"));
}

#[test]
fn unavailable_suggester_leaves_keys_alone() {
    let left = headers(&["id"]);
    let right = headers(&["id"]);
    let mut master_key = None;
    let mut lookup_key = Some("id".to_string());

    let reasoning = fill_keys(&Offline, &mut master_key, &mut lookup_key, &left, &right);

    assert_eq!(reasoning, None);
    assert_eq!(master_key, None);
    assert_eq!(lookup_key.as_deref(), Some("id"));
}
