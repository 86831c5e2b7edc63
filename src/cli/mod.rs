pub mod contact_commands;

use std::io::{self, Write};

use crate::model::AddressBook;

/// Run the interactive REPL against the given book.
pub fn run(book: &mut AddressBook) {
    println!("Contact Assistant");
    println!("Type 'help' for commands, 'exit' to quit.");
    println!();

    repl_loop(book);
}

fn repl_loop(book: &mut AddressBook) {
    loop {
        let input = match read_line("Enter command: ") {
            Some(s) => s,
            None => break,
        };

        let input = input.trim();
        if input.is_empty() {
            continue;
        }

        let (command, args) = parse_command(input);

        match command.to_lowercase().as_str() {
            "hello" => contact_commands::hello(),
            "add" => contact_commands::add(book, args),
            "change" => contact_commands::change(book, args),
            "delete" => contact_commands::delete(book, args),
            "phone" => contact_commands::phone(book, args),
            "show" if args.eq_ignore_ascii_case("all") => contact_commands::show_all(book),
            "help" | "?" => print_help(),
            _ => {
                if is_farewell(input) {
                    println!("Goodbye!");
                    break;
                }
                println!("Invalid command: {}", input);
            }
        }
    }
}

/// Prompt and read a line from stdin. Returns None on EOF.
fn read_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    io::stdout().flush().ok();
    let mut buf = String::new();
    match io::stdin().read_line(&mut buf) {
        Ok(0) => None,
        Ok(_) => Some(buf.trim_end_matches('\n').trim_end_matches('\r').to_string()),
        Err(_) => None,
    }
}

/// Split input into the command word and the rest.
fn parse_command(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.find(|c: char| c == ' ' || c == '\t') {
        Some(pos) => (&input[..pos], input[pos..].trim()),
        None => (input, ""),
    }
}

/// Checked only after no known command matched, so a contact named
/// "Bye" can still be added or deleted.
fn is_farewell(input: &str) -> bool {
    input.split_whitespace().any(|word| {
        matches!(
            word.to_lowercase().as_str(),
            "goodbye" | "good" | "bye" | "close" | "exit"
        )
    })
}

fn print_help() {
    println!(
        r#"
COMMANDS:

  hello                          Greeting
  add <name> <phone> <birthday>  Add a contact (phone: 10 digits, birthday: YYYY-MM-DD)
  change <name> <phone>          Replace a contact's first phone number
  delete <name>                  Remove a contact
  phone <name>                   Show a contact's phone numbers
  show all                       List every contact with days until birthday
  help                           Show this help
  exit / bye / close             Quit
"#
    );
}
