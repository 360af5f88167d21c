use memento::{Editor, History, Signal, Snapshot};
use std::cell::RefCell;
use std::rc::Rc;

// Saves the current state, then types, so each saved entry is the state
// the next undo goes back to.
fn edit(editor: &mut Editor<256>, history: &mut History<Snapshot<256>, 32>, words: &str) {
    history.save(editor);
    editor.type_words(words);
}

#[test]
fn undo_inverts_the_last_save() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    editor.type_words("A");
    history.save(&editor);
    editor.type_words("B");
    assert_eq!(editor.content(), "AB");

    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "A");
}

#[test]
fn undo_and_redo_are_exact_inverses() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    editor.type_words("A");
    history.save(&editor);
    editor.type_words("B");
    history.save(&editor);
    editor.type_words("C");
    assert_eq!(editor.content(), "ABC");

    assert!(history.undo(&mut editor));
    assert!(history.redo(&mut editor));
    assert_eq!(editor.content(), "ABC");

    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "AB");
    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "A");
    assert!(history.redo(&mut editor));
    assert_eq!(editor.content(), "AB");
    assert!(history.redo(&mut editor));
    assert_eq!(editor.content(), "ABC");
}

#[test]
fn save_invalidates_redo() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    editor.type_words("A");
    history.save(&editor);
    editor.type_words("B");

    assert!(history.undo(&mut editor));
    assert!(history.can_redo());

    editor.type_words("X");
    history.save(&editor);
    assert!(!history.can_redo());
    assert_eq!(history.redo_len(), 0);
    assert!(!history.redo(&mut editor));
    assert_eq!(editor.content(), "AX");
}

#[test]
fn empty_history_is_a_noop() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    editor.type_words("untouched");

    assert!(!history.undo(&mut editor));
    assert!(!history.redo(&mut editor));
    assert_eq!(editor.content(), "untouched");
    assert!(history.is_empty());
}

#[test]
fn interleaved_undo_redo() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    editor.type_words("Java ");
    history.save(&editor);
    editor.type_words("Design ");
    history.save(&editor);
    editor.type_words("Patterns");
    assert_eq!(editor.content(), "Java Design Patterns");

    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "Java Design ");
    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "Java ");
    assert!(history.redo(&mut editor));
    assert_eq!(editor.content(), "Java Design ");
}

#[test]
fn go_to() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    for words in ["a", "b", "c", "d", "e"] {
        edit(&mut editor, &mut history, words);
    }
    assert_eq!(editor.content(), "abcde");

    assert!(history.go_to(&mut editor, 0));
    assert_eq!(history.len(), 0);
    assert_eq!(editor.content(), "");
    assert!(history.go_to(&mut editor, 5));
    assert_eq!(history.len(), 5);
    assert_eq!(editor.content(), "abcde");
    assert!(history.go_to(&mut editor, 1));
    assert_eq!(editor.content(), "a");
    assert!(history.go_to(&mut editor, 4));
    assert_eq!(editor.content(), "abcd");
    assert!(history.go_to(&mut editor, 2));
    assert_eq!(editor.content(), "ab");
    assert!(history.go_to(&mut editor, 3));
    assert_eq!(editor.content(), "abc");
    assert!(!history.go_to(&mut editor, 6));
    assert_eq!(history.len(), 3);
    assert_eq!(editor.content(), "abc");
}

#[test]
fn limit_evicts_the_oldest_entry() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::builder().limit(2).build();
    for words in ["a", "b", "c"] {
        history.save(&editor);
        editor.type_words(words);
    }
    assert_eq!(history.len(), 2);
    assert_eq!(history.limit(), 2);

    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "ab");
    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "a");
    assert!(!history.undo(&mut editor));
    assert_eq!(editor.content(), "a");
}

#[test]
fn entries_iterate_oldest_first() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    for words in ["a", "b"] {
        edit(&mut editor, &mut history, words);
    }
    let contents = history
        .entries()
        .map(|entry| entry.content())
        .collect::<Vec<_>>();
    assert_eq!(contents, ["", "a"]);

    assert!(history.undo(&mut editor));
    let redoable = history
        .redo_entries()
        .map(|entry| entry.content())
        .collect::<Vec<_>>();
    assert_eq!(redoable, ["ab"]);
}

#[test]
fn clear_empties_both_stacks() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    for words in ["a", "b", "c"] {
        edit(&mut editor, &mut history, words);
    }
    assert!(history.undo(&mut editor));
    assert!(history.can_undo());
    assert!(history.can_redo());

    history.clear();
    assert!(history.is_empty());
    assert!(!history.undo(&mut editor));
    assert!(!history.redo(&mut editor));
    assert_eq!(editor.content(), "ab");
}

#[test]
fn checkpoint_commit_keeps_changes() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    edit(&mut editor, &mut history, "a");

    let mut cp = history.checkpoint::<16>();
    cp.undo(&mut editor);
    cp.commit();
    assert_eq!(editor.content(), "");
    assert!(history.can_redo());

    assert!(history.redo(&mut editor));
    assert_eq!(editor.content(), "a");
}

#[test]
fn checkpoint_cancel_rolls_back() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();
    for words in ["a", "b", "c"] {
        edit(&mut editor, &mut history, words);
    }
    assert!(history.undo(&mut editor));
    assert_eq!(editor.content(), "ab");

    let mut cp = history.checkpoint::<16>();
    assert!(cp.undo(&mut editor));
    assert!(cp.undo(&mut editor));
    assert_eq!(editor.content(), "");
    assert!(cp.redo(&mut editor));
    cp.save(&editor);
    cp.cancel(&mut editor);

    assert_eq!(editor.content(), "ab");
    assert_eq!(history.len(), 2);
    assert_eq!(history.redo_len(), 1);
    assert!(history.redo(&mut editor));
    assert_eq!(editor.content(), "abc");
}

#[test]
fn signals_track_capabilities() {
    let signals = Rc::new(RefCell::new(Vec::new()));
    let inner = Rc::clone(&signals);
    let mut editor = Editor::<256>::new();
    let mut history = History::<Snapshot<256>, 32, _>::builder()
        .connect(move |signal| inner.borrow_mut().push(signal))
        .build();

    history.save(&editor);
    editor.type_words("a");
    assert!(history.undo(&mut editor));
    assert!(history.redo(&mut editor));
    assert_eq!(
        *signals.borrow(),
        vec![
            Signal::Undo(true),
            Signal::Undo(false),
            Signal::Redo(true),
            Signal::Undo(true),
            Signal::Redo(false),
        ]
    );
}
