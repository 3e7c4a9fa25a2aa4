//! Admit card download form
//!
//! Platform-independent core of the candidate login form: form state,
//! validation, download target derivation and the submit sequence, plus
//! the HTML view. Browser specifics (fetch, anchor-click downloads, DOM
//! events) live in `admitcard-wasm`.
//!
//! ```
//! use admitcard_core::{DobField, LoginForm, PortalConfig, SubmissionStart};
//!
//! let mut form = LoginForm::new(PortalConfig::default().with_static_file_root("/portal"));
//! let state = form.state_mut();
//! state.set_registration_number("UP12345");
//! state.set_date_of_birth(DobField::Day, "15");
//! state.set_date_of_birth(DobField::Month, "8");
//! state.set_date_of_birth(DobField::Year, "2001");
//!
//! match form.begin_submission() {
//!     SubmissionStart::Probe(target) => assert_eq!(target.url(), "/portal/files/UP12345.pdf"),
//!     other => panic!("unexpected {:?}", other),
//! }
//! ```

pub mod config;
pub mod error;
pub mod form;
pub mod options;
pub mod submit;
pub mod target;
pub mod view;

pub use config::{HelpDesk, PortalConfig};
pub use error::{ConfigError, DownloadError, ProbeError, SubmissionError};
pub use form::{DateOfBirth, DobField, FormField, FormState};
pub use submit::{
    FileDownloader, FileProbe, LoginForm, NoopDownloader, SubmissionHandler, SubmissionStart,
    SubmitOutcome,
};
pub use target::DownloadTarget;
