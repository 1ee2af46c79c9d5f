pub mod contact;
pub mod user;
pub mod validate;

pub use contact::{ContactSubmission, NewContactSubmission, validate_contact_submission};
pub use user::{NewUser, User, validate_new_user};
pub use validate::{ValidationError, ValidationIssue};
