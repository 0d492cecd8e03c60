use taskpad_core::{Direction, SuggestionEngine, MAX_SUGGESTIONS};

#[test]
fn substring_matches_keep_corpus_order() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("me");

    assert!(engine.is_open());
    assert_eq!(engine.matches(), ["Schedule meeting", "Attend meeting"]);
    assert_eq!(engine.selected(), None);
}

#[test]
fn match_list_is_capped() {
    let mut engine = SuggestionEngine::default();
    // "a" appears in far more than five corpus phrases.
    engine.update_input("a");

    assert_eq!(engine.matches().len(), MAX_SUGGESTIONS);
    assert_eq!(
        engine.matches(),
        [
            "Call mom",
            "Study for exam",
            "Pay bills",
            "Clean the house",
            "Read a book",
        ]
    );
}

#[test]
fn matching_is_case_insensitive_and_trimmed() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("  GYM  ");

    assert_eq!(engine.matches(), ["Go to gym"]);
}

#[test]
fn blank_or_unmatched_input_closes_the_panel() {
    let mut engine = SuggestionEngine::default();

    engine.update_input("meeting");
    assert!(engine.is_open());

    engine.update_input("");
    assert!(!engine.is_open());

    engine.update_input("meeting");
    engine.update_input("   ");
    assert!(!engine.is_open());

    engine.update_input("zzzzz");
    assert!(!engine.is_open());
    assert!(engine.matches().is_empty());
}

#[test]
fn navigation_clamps_at_both_ends() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("me");
    assert_eq!(engine.matches().len(), 2);

    // Down walks in and sticks at the last entry.
    engine.navigate(Direction::Down);
    assert_eq!(engine.selected(), Some(0));
    engine.navigate(Direction::Down);
    assert_eq!(engine.selected(), Some(1));
    engine.navigate(Direction::Down);
    assert_eq!(engine.selected(), Some(1));

    // Up walks back out to the resting position and stays there.
    engine.navigate(Direction::Up);
    assert_eq!(engine.selected(), Some(0));
    engine.navigate(Direction::Up);
    assert_eq!(engine.selected(), None);
    engine.navigate(Direction::Up);
    assert_eq!(engine.selected(), None);
}

#[test]
fn navigation_is_a_noop_while_closed() {
    let mut engine = SuggestionEngine::default();

    engine.navigate(Direction::Down);
    assert_eq!(engine.selected(), None);
    assert!(!engine.is_open());
}

#[test]
fn confirm_returns_the_highlight_and_closes() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("me");
    engine.navigate(Direction::Down);
    engine.navigate(Direction::Down);

    assert_eq!(engine.confirm().as_deref(), Some("Attend meeting"));
    assert!(!engine.is_open());
    assert_eq!(engine.selected(), None);
}

#[test]
fn confirm_without_highlight_leaves_the_panel_open() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("me");

    assert_eq!(engine.confirm(), None);
    assert!(engine.is_open());
}

#[test]
fn select_echoes_the_picked_phrase_and_closes() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("me");

    assert_eq!(engine.select("Schedule meeting"), "Schedule meeting");
    assert!(!engine.is_open());
}

#[test]
fn new_input_resets_the_highlight() {
    let mut engine = SuggestionEngine::default();
    engine.update_input("me");
    engine.navigate(Direction::Down);
    assert_eq!(engine.selected(), Some(0));

    engine.update_input("mee");
    assert!(engine.is_open());
    assert_eq!(engine.selected(), None);
}

#[test]
fn custom_corpus_is_honored() {
    let mut engine = SuggestionEngine::with_corpus(
        ["Feed the cat", "Feed the fish"].map(String::from),
    );
    engine.update_input("feed");

    assert_eq!(engine.matches(), ["Feed the cat", "Feed the fish"]);
}
