pub mod field;
pub mod record;
pub mod book;

// Re-exports for convenience
pub use field::{Birthday, Phone};
pub use record::Record;
pub use book::{AddressBook, Pages};
