use contacts::model::AddressBook;

fn main() {
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                println!("Contact Assistant");
                println!();
                println!("Usage: contacts");
                println!();
                println!("An interactive contact manager. Contacts live in memory only");
                println!("and are discarded when the program exits.");
                println!();
                println!("Options:");
                println!("  -h, --help    Show this help");
                return;
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                eprintln!("Use --help for usage information.");
                std::process::exit(1);
            }
        }
    }

    let mut book = AddressBook::new();
    contacts::cli::run(&mut book);
}
