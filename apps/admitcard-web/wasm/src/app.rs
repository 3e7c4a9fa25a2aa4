//! Mounted application
//!
//! Owns the form state and the root element it renders into. Input and
//! change events are delegated from the root and only update state, so the
//! control being typed into keeps focus. The view is re-rendered when a
//! submission starts and when it finishes.
//!
//! The page may arrive with the form already rendered by the server, and a
//! candidate can start typing before the bundle loads. `mount` reads those
//! controls into state before its first paint.

use std::cell::RefCell;
use std::rc::Rc;

use admitcard_core::view::{render_app, FORM_ID};
use admitcard_core::{
    DobField, FormField, LoginForm, PortalConfig, SubmissionHandler, SubmitOutcome,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, EventTarget, HtmlInputElement, HtmlSelectElement};

use crate::browser::{AnchorDownloader, FetchProbe};

const CONTROLS: [FormField; 4] = [
    FormField::RegistrationNumber,
    FormField::Dob(DobField::Day),
    FormField::Dob(DobField::Month),
    FormField::Dob(DobField::Year),
];

struct AppInner {
    root: Element,
    form: RefCell<LoginForm>,
    handler: SubmissionHandler<FetchProbe, AnchorDownloader>,
}

impl AppInner {
    fn paint(&self, form: &LoginForm) {
        self.root
            .set_inner_html(&render_app(form.state(), form.config()).into_string());
    }

    fn on_input(&self, event: &Event) {
        let Some((name, value)) = event.target().as_ref().and_then(control_value) else {
            return;
        };
        if let Some(field) = FormField::from_input_name(&name) {
            self.form.borrow_mut().state_mut().set_field(field, value);
        }
    }

    /// Copy non-empty values from controls already under the root
    fn adopt_rendered_values(&self) -> Result<(), JsValue> {
        let mut form = self.form.borrow_mut();
        for field in CONTROLS {
            let selector = format!("[name=\"{}\"]", field.input_name());
            let Some(control) = self.root.query_selector(&selector)? else {
                continue;
            };
            if let Some((_, value)) = control_value(&control) {
                if !value.is_empty() {
                    form.state_mut().set_field(field, value);
                }
            }
        }
        Ok(())
    }

    async fn submit(&self) -> SubmitOutcome {
        let outcome = self.handler.submit(&self.form, |form| self.paint(form)).await;
        log_outcome(&outcome);
        outcome
    }
}

/// Name and current value of an `<input>` or `<select>`
fn control_value(target: &EventTarget) -> Option<(String, String)> {
    if let Some(input) = target.dyn_ref::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    if let Some(select) = target.dyn_ref::<HtmlSelectElement>() {
        return Some((select.name(), select.value()));
    }
    None
}

fn is_login_form(event: &Event) -> bool {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .map(|el| el.id() == FORM_ID)
        .unwrap_or(false)
}

fn log_outcome(outcome: &SubmitOutcome) {
    match outcome {
        SubmitOutcome::Downloaded(target) => web_sys::console::log_1(
            &format!("Admit card download started: {}", target.filename()).into(),
        ),
        SubmitOutcome::Failed(err) => {
            web_sys::console::warn_1(&format!("Admit card request failed: {:?}", err).into())
        }
        SubmitOutcome::Busy => {}
    }
}

/// Short name for an outcome, as handed to JavaScript
pub fn outcome_label(outcome: &SubmitOutcome) -> &'static str {
    match outcome {
        SubmitOutcome::Downloaded(_) => "downloaded",
        SubmitOutcome::Failed(_) => "failed",
        SubmitOutcome::Busy => "busy",
    }
}

/// The admit card form mounted into a page element
#[wasm_bindgen]
pub struct AdmitCardApp {
    inner: Rc<AppInner>,
}

#[wasm_bindgen]
impl AdmitCardApp {
    /// Render into the element with id `root_id` and start handling events.
    ///
    /// `config_json` overrides the build-time configuration; missing keys
    /// keep their defaults.
    pub fn mount(root_id: &str, config_json: Option<String>) -> Result<AdmitCardApp, JsValue> {
        let config = match config_json {
            Some(json) if !json.is_empty() => {
                PortalConfig::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))?
            }
            _ => PortalConfig::from_build_env(),
        };

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or("No document")?;
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| JsValue::from_str(&format!("No element with id '{}'", root_id)))?;

        let inner = Rc::new(AppInner {
            root,
            form: RefCell::new(LoginForm::new(config)),
            handler: SubmissionHandler::new(FetchProbe, AnchorDownloader),
        });

        inner.adopt_rendered_values()?;
        inner.paint(&inner.form.borrow());
        attach_listeners(&inner)?;

        Ok(AdmitCardApp { inner })
    }

    /// Snapshot of the form state
    #[wasm_bindgen(getter)]
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(self.inner.form.borrow().state())
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    #[wasm_bindgen(getter, js_name = isSubmitting)]
    pub fn is_submitting(&self) -> bool {
        self.inner.form.borrow().is_submitting()
    }

    /// Set a control's value by its `name` attribute, as an input event would
    #[wasm_bindgen(js_name = setField)]
    pub fn set_field(&self, name: &str, value: &str) -> Result<(), JsValue> {
        let field = FormField::from_input_name(name)
            .ok_or_else(|| JsValue::from_str(&format!("Unknown field: {}", name)))?;
        self.inner.form.borrow_mut().state_mut().set_field(field, value);
        Ok(())
    }

    /// Re-render from the current state
    pub fn render(&self) {
        self.inner.paint(&self.inner.form.borrow());
    }

    /// Run a submission; resolves to "downloaded", "failed" or "busy"
    pub fn submit(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        wasm_bindgen_futures::future_to_promise(async move {
            let outcome = inner.submit().await;
            Ok(JsValue::from_str(outcome_label(&outcome)))
        })
    }
}

fn attach_listeners(inner: &Rc<AppInner>) -> Result<(), JsValue> {
    let on_input = {
        let inner = Rc::clone(inner);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| inner.on_input(&event))
    };
    inner
        .root
        .add_event_listener_with_callback("input", on_input.as_ref().unchecked_ref())?;
    inner
        .root
        .add_event_listener_with_callback("change", on_input.as_ref().unchecked_ref())?;
    on_input.forget();

    let on_submit = {
        let inner = Rc::clone(inner);
        Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            if !is_login_form(&event) {
                return;
            }
            event.prevent_default();
            let inner = Rc::clone(&inner);
            wasm_bindgen_futures::spawn_local(async move {
                inner.submit().await;
            });
        })
    };
    inner
        .root
        .add_event_listener_with_callback("submit", on_submit.as_ref().unchecked_ref())?;
    on_submit.forget();

    Ok(())
}


#[cfg(test)]
#[cfg(target_arch = "wasm32")]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_fresh(id: &str) -> AdmitCardApp {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_id(id);
        document.body().unwrap().append_child(&root).unwrap();
        AdmitCardApp::mount(id, None).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_mount_renders_form() {
        let app = mount_fresh("app-render");
        let html = app.inner.root.inner_html();
        assert!(html.contains("Candidate Login"));
        assert!(html.contains(FORM_ID));
        assert!(!app.is_submitting());
    }

    #[wasm_bindgen_test]
    fn test_mount_keeps_values_typed_before_load() {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        root.set_id("app-prefilled");
        root.set_inner_html(
            &render_app(&admitcard_core::FormState::new(), &PortalConfig::default()).into_string(),
        );
        document.body().unwrap().append_child(&root).unwrap();
        root.query_selector(r#"[name="registration_number"]"#)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlInputElement>()
            .unwrap()
            .set_value("UP12345");
        root.query_selector(r#"[name="dob_month"]"#)
            .unwrap()
            .unwrap()
            .dyn_into::<HtmlSelectElement>()
            .unwrap()
            .set_value("8");

        let app = AdmitCardApp::mount("app-prefilled", None).unwrap();

        let form = app.inner.form.borrow();
        assert_eq!(form.state().registration_number, "UP12345");
        assert_eq!(form.state().date_of_birth.month, "8");
        assert_eq!(form.state().date_of_birth.day, "");
        let html = app.inner.root.inner_html();
        assert!(html.contains(r#"value="UP12345""#));
        assert!(html.contains(r#"<option value="8" selected"#));
    }

    #[wasm_bindgen_test]
    fn test_mount_unknown_root_fails() {
        assert!(AdmitCardApp::mount("no-such-root", None).is_err());
    }

    #[wasm_bindgen_test]
    fn test_set_field_rejects_unknown_name() {
        let app = mount_fresh("app-fields");
        assert!(app.set_field("registration_number", "UP1").is_ok());
        assert!(app.set_field("email", "x").is_err());
        assert_eq!(
            app.inner.form.borrow().state().registration_number,
            "UP1"
        );
    }

    #[wasm_bindgen_test]
    async fn test_empty_submit_shows_validation_error() {
        let app = mount_fresh("app-submit");
        app.set_field("dob_day", "15").unwrap();

        let label = JsFuture::from(app.submit()).await.unwrap();

        assert_eq!(label.as_string().as_deref(), Some("failed"));
        let html = app.inner.root.inner_html();
        assert!(html.contains("Please fill in all fields"));
        // the browser serializes boolean attributes as `selected=""`
        assert!(html.contains(r#"<option value="15" selected"#));
    }
}
