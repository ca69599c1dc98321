//! Domain layer - business rules and contracts
//!
//! Everything in here is framework-free. The policy engines are pure
//! functions over caller-supplied inputs; all I/O lives behind the
//! repository and notifier traits.

pub mod entity {
    pub mod account;
    pub mod assignment;
    pub mod submission;

    pub use account::{Account, Principal};
    pub use assignment::Assignment;
    pub use submission::Submission;
}

pub mod value_object {
    pub mod email;
    pub mod submission_url;

    pub use email::Email;
    pub use submission_url::SubmissionUrl;
}

pub mod notifier;
pub mod policy;
pub mod repository;
pub mod validate;
