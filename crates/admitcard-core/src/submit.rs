//! Submission handler
//!
//! Validate, probe, download, reset. The network probe and the download
//! trigger are platform capabilities behind [`FileProbe`] and
//! [`FileDownloader`]; the browser implementations live in the wasm crate.
//!
//! The sequence is split into [`LoginForm::begin_submission`] and
//! [`LoginForm::complete_submission`] so that no borrow of the form is held
//! across the probe's `.await`. That is what lets a single-threaded UI keep
//! the form in an `Rc<RefCell<_>>` and still refuse re-entry while a probe
//! is outstanding.

use std::cell::RefCell;

use tracing::{debug, info, warn};

use crate::config::PortalConfig;
use crate::error::{DownloadError, ProbeError, SubmissionError};
use crate::form::FormState;
use crate::target::DownloadTarget;

/// Existence check against the static file host
#[allow(async_fn_in_trait)]
pub trait FileProbe {
    /// `Ok(())` for a 2xx response, an error for anything else
    async fn probe(&self, url: &str) -> Result<(), ProbeError>;
}

/// Hands a URL to the platform to be saved under `suggested_name`
pub trait FileDownloader {
    fn trigger(&self, url: &str, suggested_name: &str) -> Result<(), DownloadError>;
}

/// Downloader for headless use: logs the request and does nothing else
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDownloader;

impl FileDownloader for NoopDownloader {
    fn trigger(&self, url: &str, suggested_name: &str) -> Result<(), DownloadError> {
        debug!(url, suggested_name, "download requested (noop)");
        Ok(())
    }
}

/// How a call to [`SubmissionHandler::submit`] ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The file was found and handed to the downloader
    Downloaded(DownloadTarget),
    /// The attempt failed; the message is now on the form
    Failed(SubmissionError),
    /// Another submission was already in flight; nothing happened
    Busy,
}

impl SubmitOutcome {
    pub fn is_downloaded(&self) -> bool {
        matches!(self, SubmitOutcome::Downloaded(_))
    }
}

/// Result of trying to start a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStart {
    /// Inputs are present; probe this target next
    Probe(DownloadTarget),
    /// Validation failed and the attempt is already finished
    Rejected(SubmissionError),
    Busy,
}

/// Form state bound to the configuration it submits against
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    state: FormState,
    config: PortalConfig,
}

impl LoginForm {
    pub fn new(config: PortalConfig) -> Self {
        Self {
            state: FormState::new(),
            config,
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut FormState {
        &mut self.state
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn is_submitting(&self) -> bool {
        self.state.is_submitting
    }

    /// Steps 2 to 4: guard, clear error, validate, derive the target.
    ///
    /// A rejection leaves the inputs as they were and the form idle again.
    pub fn begin_submission(&mut self) -> SubmissionStart {
        if self.state.is_submitting {
            debug!("submission already in flight");
            return SubmissionStart::Busy;
        }

        self.state.is_submitting = true;
        self.state.set_error("");

        let missing = self.state.missing_fields();
        if !missing.is_empty() {
            debug!(?missing, "rejecting submission with empty fields");
            let err = SubmissionError::MissingFields;
            self.finish(Err(err.clone()));
            return SubmissionStart::Rejected(err);
        }

        SubmissionStart::Probe(self.config.download_target(&self.state.registration_number))
    }

    /// Steps 7 to 9: reset on success, show the message on failure, and
    /// always drop the submitting flag.
    pub fn complete_submission(&mut self, result: Result<(), SubmissionError>) {
        self.finish(result);
    }

    fn finish(&mut self, result: Result<(), SubmissionError>) {
        match result {
            Ok(()) => self.state.clear_inputs(),
            Err(err) => self.state.set_error(err.to_string()),
        }
        self.state.is_submitting = false;
    }
}

/// Runs the whole submit sequence against a probe and a downloader
#[derive(Debug, Clone)]
pub struct SubmissionHandler<P, D> {
    probe: P,
    downloader: D,
}

impl<P: FileProbe, D: FileDownloader> SubmissionHandler<P, D> {
    pub fn new(probe: P, downloader: D) -> Self {
        Self { probe, downloader }
    }

    pub fn probe(&self) -> &P {
        &self.probe
    }

    pub fn downloader(&self) -> &D {
        &self.downloader
    }

    /// Submit the form.
    ///
    /// `on_change` is called with the form after it enters the submitting
    /// state and again once the attempt has finished, so a view can disable
    /// the submit control and then show the result. It is not called for
    /// [`SubmitOutcome::Busy`]. The form is not borrowed while `on_change`
    /// runs beyond the shared borrow it is handed.
    pub async fn submit<F>(&self, form: &RefCell<LoginForm>, mut on_change: F) -> SubmitOutcome
    where
        F: FnMut(&LoginForm),
    {
        let start = form.borrow_mut().begin_submission();
        let target = match start {
            SubmissionStart::Busy => return SubmitOutcome::Busy,
            SubmissionStart::Rejected(err) => {
                on_change(&*form.borrow());
                return SubmitOutcome::Failed(err);
            }
            SubmissionStart::Probe(target) => target,
        };
        on_change(&*form.borrow());

        let result = self.fetch(&target).await;

        form.borrow_mut().complete_submission(result.clone());
        on_change(&*form.borrow());

        match result {
            Ok(()) => SubmitOutcome::Downloaded(target),
            Err(err) => SubmitOutcome::Failed(err),
        }
    }

    async fn fetch(&self, target: &DownloadTarget) -> Result<(), SubmissionError> {
        if let Err(err) = self.probe.probe(target.url()).await {
            warn!(url = target.url(), error = %err, "admit card probe failed");
            return Err(err.into());
        }

        self.downloader
            .trigger(target.url(), target.filename())
            .inspect_err(|err| warn!(url = target.url(), error = %err, "download trigger failed"))?;

        info!(filename = target.filename(), "admit card download triggered");
        Ok(())
    }
}
