//! Dialogue domain: tests for conversation sequencing.

use super::resources::ActiveDialogue;

fn lines(texts: &[&str]) -> Vec<String> {
    texts.iter().map(|t| t.to_string()).collect()
}

#[test]
fn test_start_shows_the_first_line() {
    let mut dialogue = ActiveDialogue::default();
    dialogue.start("Keeper", lines(&["First.", "Second."]));

    assert!(dialogue.active);
    assert_eq!(dialogue.current_line(), Some("First."));
}

#[test]
fn test_advance_walks_every_line_then_ends() {
    let mut dialogue = ActiveDialogue::default();
    dialogue.start("Keeper", lines(&["First.", "Second.", "Third."]));

    dialogue.advance();
    assert_eq!(dialogue.current_line(), Some("Second."));
    dialogue.advance();
    assert_eq!(dialogue.current_line(), Some("Third."));
    dialogue.advance();

    assert!(!dialogue.active);
    assert_eq!(dialogue.current_line(), None);
    assert!(dialogue.lines.is_empty());
}

#[test]
fn test_starting_with_no_lines_does_not_activate() {
    let mut dialogue = ActiveDialogue::default();
    dialogue.start("Mute", Vec::new());

    assert!(!dialogue.active);
    assert_eq!(dialogue.current_line(), None);
}

#[test]
fn test_advance_after_end_is_a_no_op() {
    let mut dialogue = ActiveDialogue::default();
    dialogue.start("Keeper", lines(&["Only line."]));
    dialogue.advance();
    dialogue.advance();

    assert!(!dialogue.active);
    assert_eq!(dialogue.index, 0);
}

#[test]
fn test_restart_replaces_previous_conversation() {
    let mut dialogue = ActiveDialogue::default();
    dialogue.start("Keeper", lines(&["Old line."]));
    dialogue.start("Gardener", lines(&["New line."]));

    assert_eq!(dialogue.npc_name, "Gardener");
    assert_eq!(dialogue.current_line(), Some("New line."));
}
