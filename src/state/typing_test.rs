use super::*;

fn run_to_end(cursor: &mut TypingCursor) -> Vec<String> {
    let mut frames = Vec::new();
    let mut shown = String::new();
    while let Some(ch) = cursor.advance() {
        shown.push(ch);
        frames.push(shown.clone());
    }
    frames
}

#[test]
fn new_cursor_is_idle_and_shows_nothing() {
    let cursor = TypingCursor::new("Engineer");
    assert_eq!(cursor.phase(), TypingPhase::Idle);
    assert_eq!(cursor.rendered(), "");
}

#[test]
fn idle_cursor_does_not_advance() {
    let mut cursor = TypingCursor::new("abc");
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.phase(), TypingPhase::Idle);
}

#[test]
fn emits_exactly_one_update_per_character() {
    let text = "Cloud & Platform Engineer";
    let mut cursor = TypingCursor::new(text);
    cursor.start();
    let frames = run_to_end(&mut cursor);
    assert_eq!(frames.len(), text.chars().count());
    assert_eq!(frames.last().map(String::as_str), Some(text));
    assert_eq!(cursor.rendered(), text);
    assert_eq!(cursor.phase(), TypingPhase::Finished);
}

#[test]
fn finished_cursor_stays_inert() {
    let mut cursor = TypingCursor::new("hi");
    cursor.start();
    run_to_end(&mut cursor);
    for _ in 0..5 {
        assert_eq!(cursor.advance(), None);
    }
    cursor.start();
    assert_eq!(cursor.phase(), TypingPhase::Finished);
    assert_eq!(cursor.rendered(), "hi");
}

#[test]
fn multibyte_text_counts_characters() {
    let text = "Développeur · ☁";
    let mut cursor = TypingCursor::new(text);
    cursor.start();
    let frames = run_to_end(&mut cursor);
    assert_eq!(frames.len(), text.chars().count());
    assert_eq!(cursor.rendered(), text);
}

#[test]
fn empty_text_finishes_immediately() {
    let mut cursor = TypingCursor::new("");
    cursor.start();
    assert_eq!(cursor.phase(), TypingPhase::Finished);
    assert_eq!(cursor.advance(), None);
    assert_eq!(cursor.rendered(), "");
}

#[test]
fn rendered_tracks_progress() {
    let mut cursor = TypingCursor::new("abc");
    cursor.start();
    cursor.advance();
    assert_eq!(cursor.rendered(), "a");
    assert_eq!(cursor.phase(), TypingPhase::Typing { index: 1 });
}

#[test]
fn first_step_waits_initial_delay() {
    let config = Config::default();
    assert_eq!(step_delay(&config, 0), Duration::from_millis(500));
    assert_eq!(step_delay(&config, 1), Duration::from_millis(50));
    assert_eq!(step_delay(&config, 40), Duration::from_millis(50));
}
