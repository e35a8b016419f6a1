//! The quiz subdomain.
//!
//! - [`question::Question`] — a single quiz item (Value Object)
//! - [`store::QuestionStore`] — the ordered, mutable question list with its
//!   JSON wire mapping

pub mod question;
pub mod store;
