use memento::{Editor, History};

fn main() {
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::new();

    editor.type_words("Java ");
    history.save(&editor);
    editor.type_words("Design ");
    history.save(&editor);
    editor.type_words("Patterns");
    assert_eq!(editor.content(), "Java Design Patterns");
    println!("Content: {}", editor.content());

    history.undo(&mut editor);
    assert_eq!(editor.content(), "Java Design ");
    println!("1st undo: {}", editor.content());

    history.undo(&mut editor);
    assert_eq!(editor.content(), "Java ");
    println!("2nd undo: {}", editor.content());

    history.redo(&mut editor);
    assert_eq!(editor.content(), "Java Design ");
    println!("Redo: {}", editor.content());

    println!("{}", history.display::<256>());
}
