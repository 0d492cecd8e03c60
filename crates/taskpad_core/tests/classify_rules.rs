use taskpad_core::{classify, icon_for, Category, DEFAULT_ICON};

#[test]
fn common_phrases_map_to_their_categories() {
    assert_eq!(classify("Buy groceries"), Some(Category::Shopping));
    assert_eq!(classify("Study for exam"), Some(Category::Study));
    assert_eq!(classify("Call mom"), Some(Category::Phone));
    assert_eq!(classify("Pay bills"), Some(Category::Finance));
    assert_eq!(classify("Go to gym"), Some(Category::Exercise));
    assert_eq!(classify("Plan vacation"), Some(Category::Travel));
    assert_eq!(classify("Watch a movie"), Some(Category::Entertainment));
}

#[test]
fn unmatched_text_gets_the_default_icon() {
    assert_eq!(classify("xyz"), None);
    assert_eq!(icon_for("xyz"), DEFAULT_ICON);
}

#[test]
fn matching_is_case_insensitive() {
    assert_eq!(classify("BUY GROCERIES"), Some(Category::Shopping));
    assert_eq!(classify("sTuDy"), Some(Category::Study));
}

#[test]
fn first_rule_wins_when_several_match() {
    // "meeting" is a work keyword checked before the scheduling rule.
    assert_eq!(classify("Schedule a meeting"), Some(Category::Work));
    // "buy" (shopping) outranks "food".
    assert_eq!(classify("buy food"), Some(Category::Shopping));
    // Scheduling only wins once no earlier rule matches.
    assert_eq!(classify("appointment at noon"), Some(Category::Health));
    assert_eq!(classify("check the calendar"), Some(Category::Scheduling));
}

#[test]
fn keywords_match_whole_words_only() {
    // "homework" is its own study keyword; it must not fire the home rule
    // via its prefix.
    assert_eq!(classify("homework"), Some(Category::Study));
    // "homestead" contains "home" but not on a word boundary.
    assert_eq!(classify("visit the homestead"), Some(Category::Travel));
    assert_eq!(classify("deal with the homestead"), None);
}

#[test]
fn icons_follow_the_category() {
    assert_eq!(icon_for("Buy groceries"), Category::Shopping.icon());
    assert_eq!(icon_for("Write report"), Category::Work.icon());
    assert_eq!(icon_for("Clean the house"), Category::Home.icon());
}
