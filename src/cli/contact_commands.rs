use chrono::Local;

use crate::error::ContactError;
use crate::model::{AddressBook, Record};

pub fn hello() {
    println!("How can I help you?");
}

pub fn add(book: &mut AddressBook, args: &str) {
    let mut parts = args.splitn(3, ' ');
    let (name, phone, birthday) = match (parts.next(), parts.next(), parts.next()) {
        (Some(n), Some(p), Some(b)) if !n.is_empty() && !p.is_empty() && !b.is_empty() => (n, p, b),
        _ => {
            println!("Invalid command: add requires a name, phone number, and birthday.");
            return;
        }
    };

    let name = name.trim();
    let mut record = Record::new(name);
    if let Err(e) = record.add_phone(phone) {
        println!("{}", e);
    }
    if let Err(e) = record.set_birthday(birthday) {
        println!("{}", e);
    }
    book.add_record(record);

    println!(
        "{}'s phone number ({}) has been added to contacts.",
        name,
        phone_tail(phone)
    );
}

pub fn change(book: &mut AddressBook, args: &str) {
    let Some((name, new_phone)) = args.split_once(' ') else {
        println!("Invalid command: change requires a name and phone number.");
        return;
    };
    let name = name.trim();
    let new_phone = new_phone.trim();

    let Some(record) = book.get_mut(name) else {
        println!("{}", ContactError::NotInContacts { name: name.into() });
        return;
    };

    match record.edit_phone(0, new_phone) {
        // Out-of-range stays a silent no-op.
        Ok(()) | Err(ContactError::PhoneIndexOutOfRange { .. }) => {}
        Err(e) => println!("{}", e),
    }
    println!("{}'s phone number has been updated to {}.", name, new_phone);
}

pub fn delete(book: &mut AddressBook, args: &str) {
    let name = args.trim();
    if name.is_empty() {
        println!("Invalid command: delete requires a name.");
        return;
    }
    if book.remove(name).is_some() {
        println!("{} has been deleted from contacts.", name);
    } else {
        println!("{}", ContactError::NotInContacts { name: name.into() });
    }
}

pub fn phone(book: &AddressBook, args: &str) {
    let name = args.trim();
    if name.is_empty() {
        println!("Invalid command: phone requires a name.");
        return;
    }
    match book.get(name) {
        Some(record) => {
            println!("{}:", record.name());
            for p in record.phones() {
                println!("{}", p);
            }
        }
        None => println!("{}", ContactError::NotInContacts { name: name.into() }),
    }
}

pub fn show_all(book: &AddressBook) {
    if book.is_empty() {
        println!("No contacts to show.");
        return;
    }
    let today = Local::now().date_naive();
    for record in book.records() {
        println!("Name: {}", record.name());
        for p in record.phones() {
            println!("{}", p);
        }
        println!("{}", record.birthday());
        if let Some(days) = record.days_to_birthday(today) {
            println!("Days until birthday: {}", days);
        }
        println!();
    }
}

/// Last 10 characters of the phone argument with spaces stripped, as
/// echoed in the add confirmation.
fn phone_tail(phone: &str) -> String {
    let stripped: String = phone.chars().filter(|c| *c != ' ').collect();
    let skip = stripped.chars().count().saturating_sub(10);
    stripped.chars().skip(skip).collect()
}

#[cfg(test)]
mod tests {
    use super::phone_tail;

    #[test]
    fn phone_tail_takes_last_10_chars() {
        assert_eq!(phone_tail("+1 555 123 4567"), "5551234567");
    }

    #[test]
    fn phone_tail_keeps_short_input_whole() {
        assert_eq!(phone_tail("555 1234"), "5551234");
    }

    #[test]
    fn phone_tail_keeps_non_digit_formatting() {
        assert_eq!(phone_tail("555-123-4567"), "5-123-4567");
    }
}
