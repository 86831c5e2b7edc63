use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Invalid phone number. Please enter a 10-digit phone number.")]
    InvalidPhone,

    #[error("Invalid birthday format. Please use the format: YYYY-MM-DD")]
    InvalidBirthday,

    #[error("{name} is not in contacts.")]
    NotInContacts { name: String },

    #[error("phone index {index} out of range")]
    PhoneIndexOutOfRange { index: usize },
}

pub type ContactResult<T> = Result<T, ContactError>;
