use chrono::{DateTime, Local};
use heapless::String;
use memento::{Editor, History};
use std::time::SystemTime;
use std::{fmt::Write, io};

fn custom_st_fmt<const SIZE: usize>(_: SystemTime, at: SystemTime) -> String<SIZE> {
    let mut result = String::<SIZE>::new();
    let dt = DateTime::<Local>::from(at);
    result
        .write_fmt(format_args!("{}", dt.format("%H:%M:%S")))
        .expect("enough space");
    result
}

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut editor = Editor::<256>::new();
    let mut history = History::<_, 32>::builder().limit(10).build();

    loop {
        println!(
            "Enter a string. Use '<' to undo, '>' to redo, '~' to clear the history, and '! i' for goto: "
        );
        let mut buf = std::string::String::new();
        let n = stdin.read_line(&mut buf)?;
        if n == 0 {
            return Ok(());
        }

        // Clears the terminal.
        print!("{}c", 27 as char);

        let mut chars = buf.trim().chars();
        while let Some(c) = chars.next() {
            match c {
                '!' => {
                    let tail = chars.collect::<String<256>>();
                    let index = tail.trim().parse::<usize>().unwrap_or_default();
                    history.go_to(&mut editor, index);
                    break;
                }
                '<' => {
                    history.undo(&mut editor);
                }
                '>' => {
                    history.redo(&mut editor);
                }
                '~' => {
                    history.clear();
                }
                c => {
                    // Save the state being replaced so undo removes the
                    // keystroke.
                    history.save(&editor);
                    let mut words = String::<4>::new();
                    let _ = words.push(c);
                    editor.type_words(&words);
                }
            }
        }

        println!("{}\n", history.display::<256>().set_st_fmt(&custom_st_fmt));
        println!("Content: {}", editor.content());
    }
}
