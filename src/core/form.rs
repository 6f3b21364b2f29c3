//! Early-access form submission and the newsletter acknowledgement
//!
//! The submit button walks through
//! `Idle → Submitting → {Succeeded | Failed}` and reverts to `Idle` on a
//! timer. It stays disabled from the moment the request leaves until the
//! revert, so a form never has two submissions in flight.

use std::cell::Cell;
use std::rc::Rc;

use serde::Deserialize;

use super::scheduler::{Scheduler, TaskId};

/// How long the success label stays up
pub const SUCCESS_REVERT_MS: u32 = 4000;
/// How long either failure label stays up
pub const FAILURE_REVERT_MS: u32 = 3000;
/// How long the newsletter checkmark stays up
pub const NEWSLETTER_REVERT_MS: u32 = 2000;

pub const IDLE_LABEL: &str = "Get Early Access";
pub const IDLE_HOVER_LABEL: &str = "Join Free →";
pub const SUBMITTING_LABEL: &str = "Submitting...";
pub const SUCCESS_LABEL: &str = "You're In!";
pub const STATUS_FAILURE_LABEL: &str = "Something went wrong";
pub const NETWORK_FAILURE_LABEL: &str = "Network error";
pub const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #10b981, #059669)";

pub const NEWSLETTER_DONE_LABEL: &str = "✓";
pub const NEWSLETTER_DONE_BACKGROUND: &str = "#10b981";

/// Course selector value that reveals the free-text course field
pub const OTHER_COURSE_SENTINEL: &str = "Other";

/// Why a submission failed
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Form endpoint answered with HTTP {status}")]
    Status { status: u16, detail: Option<String> },
}

impl SubmitError {
    pub fn kind(&self) -> FailureKind {
        match self {
            SubmitError::Transport(_) => FailureKind::Network,
            SubmitError::Status { .. } => FailureKind::Status,
        }
    }
}

/// A submission that was refused before reaching the network
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum SubmitRejected {
    #[error("A submission is already in progress")]
    Busy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// The endpoint answered with a non-2xx status
    Status,
    /// No response at all
    Network,
}

/// Submit button affordance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(FailureKind),
}

impl SubmitState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmitState::Idle => IDLE_LABEL,
            SubmitState::Submitting => SUBMITTING_LABEL,
            SubmitState::Succeeded => SUCCESS_LABEL,
            SubmitState::Failed(FailureKind::Status) => STATUS_FAILURE_LABEL,
            SubmitState::Failed(FailureKind::Network) => NETWORK_FAILURE_LABEL,
        }
    }

    /// Secondary label revealed on hover, only while idle
    pub fn hover_label(&self) -> Option<&'static str> {
        matches!(self, SubmitState::Idle).then_some(IDLE_HOVER_LABEL)
    }

    pub fn is_disabled(&self) -> bool {
        !matches!(self, SubmitState::Idle)
    }

    /// Inline background override, if any
    pub fn background(&self) -> Option<&'static str> {
        matches!(self, SubmitState::Succeeded).then_some(SUCCESS_BACKGROUND)
    }

    /// Delay before this state falls back to `Idle`
    pub fn revert_after_ms(&self) -> Option<u32> {
        match self {
            SubmitState::Succeeded => Some(SUCCESS_REVERT_MS),
            SubmitState::Failed(_) => Some(FAILURE_REVERT_MS),
            SubmitState::Idle | SubmitState::Submitting => None,
        }
    }
}

/// Raw answer from the form endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointResponse {
    pub status: u16,
    pub body: String,
}

/// JSON body the form-collection service returns
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EndpointReply {
    #[serde(default)]
    pub ok: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub errors: Vec<EndpointFieldError>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointFieldError {
    #[serde(default)]
    pub field: Option<String>,
    pub message: String,
}

impl EndpointReply {
    pub fn parse(body: &str) -> Option<Self> {
        serde_json::from_str(body).ok()
    }

    /// Human-readable error summary, if the reply carries one
    pub fn summary(&self) -> Option<String> {
        let mut parts: Vec<String> = self.error.iter().cloned().collect();
        parts.extend(self.errors.iter().map(|e| match &e.field {
            Some(field) => format!("{field}: {}", e.message),
            None => e.message.clone(),
        }));
        (!parts.is_empty()).then(|| parts.join("; "))
    }
}

/// Map an endpoint answer to success (2xx) or [`SubmitError::Status`]
pub fn check_response(response: &EndpointResponse) -> Result<(), SubmitError> {
    if (200..300).contains(&response.status) {
        Ok(())
    } else {
        Err(SubmitError::Status {
            status: response.status,
            detail: EndpointReply::parse(&response.body).and_then(|r| r.summary()),
        })
    }
}

/// Outbound HTTP seam
#[allow(async_fn_in_trait)]
pub trait FormTransport {
    /// POST `fields` to `endpoint` as form data, accepting JSON back
    async fn post(
        &self,
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<EndpointResponse, SubmitError>;
}

/// Result of a submission that actually went out
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Delivered,
    Failed(SubmitError),
}

impl SubmitOutcome {
    pub fn is_delivered(&self) -> bool {
        matches!(self, SubmitOutcome::Delivered)
    }
}

/// Owns one form's [`SubmitState`]
///
/// Cloning shares the state, so a clone can be moved into a spawned future.
#[derive(Clone)]
pub struct SubmissionController {
    scheduler: Rc<dyn Scheduler>,
    state: Rc<Cell<SubmitState>>,
    on_change: Rc<dyn Fn(SubmitState)>,
}

impl SubmissionController {
    pub fn new(scheduler: Rc<dyn Scheduler>, on_change: impl Fn(SubmitState) + 'static) -> Self {
        Self {
            scheduler,
            state: Rc::new(Cell::new(SubmitState::Idle)),
            on_change: Rc::new(on_change),
        }
    }

    pub fn state(&self) -> SubmitState {
        self.state.get()
    }

    fn set_state(&self, state: SubmitState) {
        self.state.set(state);
        (self.on_change)(state);
    }

    /// Send the form and drive the button through its states
    ///
    /// Refused with [`SubmitRejected::Busy`] unless the button is idle.
    /// Failures are not retried.
    pub async fn submit<T: FormTransport>(
        &self,
        transport: &T,
        endpoint: &str,
        fields: &[(String, String)],
    ) -> Result<SubmitOutcome, SubmitRejected> {
        if self.state() != SubmitState::Idle {
            return Err(SubmitRejected::Busy);
        }
        self.set_state(SubmitState::Submitting);

        let result = match transport.post(endpoint, fields).await {
            Ok(response) => check_response(&response),
            Err(err) => Err(err),
        };

        let next = match &result {
            Ok(()) => SubmitState::Succeeded,
            Err(err) => SubmitState::Failed(err.kind()),
        };
        self.set_state(next);

        if let Some(delay) = next.revert_after_ms() {
            let controller = self.clone();
            self.scheduler.schedule_once(
                delay,
                Box::new(move || controller.set_state(SubmitState::Idle)),
            );
        }

        Ok(match result {
            Ok(()) => SubmitOutcome::Delivered,
            Err(err) => SubmitOutcome::Failed(err),
        })
    }
}

/// Visibility of the free-text course row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OtherCourseField {
    pub visible: bool,
    pub required: bool,
    /// Whether any typed value must be discarded
    pub clear: bool,
}

impl OtherCourseField {
    pub fn for_selection(value: &str) -> Self {
        let visible = value == OTHER_COURSE_SENTINEL;
        Self {
            visible,
            required: visible,
            clear: !visible,
        }
    }

    /// Value for the row's `display` style
    pub fn display(&self) -> &'static str {
        if self.visible { "flex" } else { "none" }
    }
}

/// Newsletter button checkmark with timed revert
#[derive(Clone)]
pub struct NewsletterAck {
    scheduler: Rc<dyn Scheduler>,
    acknowledged: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<TaskId>>>,
    on_change: Rc<dyn Fn(bool)>,
}

impl NewsletterAck {
    pub fn new(scheduler: Rc<dyn Scheduler>, on_change: impl Fn(bool) + 'static) -> Self {
        Self {
            scheduler,
            acknowledged: Rc::new(Cell::new(false)),
            pending: Rc::new(Cell::new(None)),
            on_change: Rc::new(on_change),
        }
    }

    pub fn is_acknowledged(&self) -> bool {
        self.acknowledged.get()
    }

    /// Show the checkmark; a repeat restarts the revert timer
    pub fn acknowledge(&self) {
        if let Some(previous) = self.pending.take() {
            self.scheduler.cancel(previous);
        }
        self.acknowledged.set(true);
        (self.on_change)(true);

        let acknowledged = self.acknowledged.clone();
        let pending = self.pending.clone();
        let on_change = self.on_change.clone();
        let id = self.scheduler.schedule_once(
            NEWSLETTER_REVERT_MS,
            Box::new(move || {
                pending.set(None);
                acknowledged.set(false);
                on_change(false);
            }),
        );
        self.pending.set(Some(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scheduler::VirtualScheduler;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeTransport {
        answer: Result<EndpointResponse, SubmitError>,
        calls: RefCell<Vec<(String, Vec<(String, String)>)>>,
    }

    impl FakeTransport {
        fn status(status: u16, body: &str) -> Self {
            Self {
                answer: Ok(EndpointResponse {
                    status,
                    body: body.to_string(),
                }),
                calls: RefCell::new(Vec::new()),
            }
        }

        fn offline() -> Self {
            Self {
                answer: Err(SubmitError::Transport("connection refused".into())),
                calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl FormTransport for FakeTransport {
        async fn post(
            &self,
            endpoint: &str,
            fields: &[(String, String)],
        ) -> Result<EndpointResponse, SubmitError> {
            self.calls
                .borrow_mut()
                .push((endpoint.to_string(), fields.to_vec()));
            self.answer.clone()
        }
    }

    fn fields() -> Vec<(String, String)> {
        vec![
            ("email".into(), "ada@example.com".into()),
            ("course".into(), "Biology".into()),
        ]
    }

    fn recording_controller(
        scheduler: &Rc<VirtualScheduler>,
    ) -> (SubmissionController, Rc<RefCell<Vec<SubmitState>>>) {
        let history = Rc::new(RefCell::new(Vec::new()));
        let sink = history.clone();
        let controller =
            SubmissionController::new(scheduler.clone(), move |s| sink.borrow_mut().push(s));
        (controller, history)
    }

    #[test]
    fn test_success_then_revert_after_4000ms() {
        let scheduler = VirtualScheduler::new();
        let (controller, history) = recording_controller(&scheduler);
        let transport = FakeTransport::status(200, r#"{"ok":true}"#);

        let outcome = block_on(controller.submit(&transport, "https://forms.test/f/1", &fields()));
        assert_eq!(outcome, Ok(SubmitOutcome::Delivered));
        assert_eq!(controller.state(), SubmitState::Succeeded);
        assert_eq!(controller.state().label(), SUCCESS_LABEL);
        assert!(controller.state().is_disabled());

        scheduler.advance(3999.0);
        assert!(controller.state().is_disabled());

        scheduler.advance(1.0);
        assert_eq!(controller.state(), SubmitState::Idle);
        assert_eq!(controller.state().label(), IDLE_LABEL);
        assert_eq!(controller.state().hover_label(), Some(IDLE_HOVER_LABEL));
        assert_eq!(
            *history.borrow(),
            vec![SubmitState::Submitting, SubmitState::Succeeded, SubmitState::Idle]
        );
    }

    #[test]
    fn test_server_error_then_revert_after_3000ms() {
        let scheduler = VirtualScheduler::new();
        let (controller, _) = recording_controller(&scheduler);
        let transport = FakeTransport::status(500, "");

        let outcome = block_on(controller.submit(&transport, "https://forms.test/f/1", &fields()));
        assert!(matches!(
            outcome,
            Ok(SubmitOutcome::Failed(SubmitError::Status { status: 500, .. }))
        ));
        assert_eq!(controller.state(), SubmitState::Failed(FailureKind::Status));
        assert_eq!(controller.state().label(), STATUS_FAILURE_LABEL);

        scheduler.advance(2999.0);
        assert!(controller.state().is_disabled());
        scheduler.advance(1.0);
        assert_eq!(controller.state(), SubmitState::Idle);
    }

    #[test]
    fn test_network_error_then_revert_after_3000ms() {
        let scheduler = VirtualScheduler::new();
        let (controller, _) = recording_controller(&scheduler);
        let transport = FakeTransport::offline();

        let outcome = block_on(controller.submit(&transport, "https://forms.test/f/1", &fields()));
        assert!(matches!(
            outcome,
            Ok(SubmitOutcome::Failed(SubmitError::Transport(_)))
        ));
        assert_eq!(controller.state().label(), NETWORK_FAILURE_LABEL);
        assert_eq!(controller.state().background(), None);

        scheduler.advance(3000.0);
        assert_eq!(controller.state(), SubmitState::Idle);
    }

    #[test]
    fn test_busy_controller_rejects_second_submit() {
        let scheduler = VirtualScheduler::new();
        let (controller, _) = recording_controller(&scheduler);
        let transport = FakeTransport::status(201, "");

        block_on(controller.submit(&transport, "https://forms.test/f/1", &fields())).unwrap();
        let second = block_on(controller.submit(&transport, "https://forms.test/f/1", &fields()));

        assert_eq!(second, Err(SubmitRejected::Busy));
        assert_eq!(transport.calls.borrow().len(), 1);

        scheduler.advance(f64::from(SUCCESS_REVERT_MS));
        assert!(block_on(controller.submit(&transport, "https://forms.test/f/1", &fields())).is_ok());
        assert_eq!(transport.calls.borrow().len(), 2);
    }

    #[test]
    fn test_fields_and_endpoint_reach_transport() {
        let scheduler = VirtualScheduler::new();
        let (controller, _) = recording_controller(&scheduler);
        let transport = FakeTransport::status(200, "");

        block_on(controller.submit(&transport, "https://forms.test/f/abc", &fields())).unwrap();

        let calls = transport.calls.borrow();
        assert_eq!(calls[0].0, "https://forms.test/f/abc");
        assert_eq!(calls[0].1, fields());
    }

    #[test]
    fn test_status_classification() {
        for status in [200, 201, 204, 299] {
            let response = EndpointResponse { status, body: String::new() };
            assert!(check_response(&response).is_ok(), "{status}");
        }
        for status in [199, 301, 400, 422, 500, 503] {
            let response = EndpointResponse { status, body: String::new() };
            assert!(check_response(&response).is_err(), "{status}");
        }
    }

    #[test]
    fn test_error_detail_from_reply_body() {
        let response = EndpointResponse {
            status: 422,
            body: r#"{"errors":[{"field":"email","code":"TYPE_EMAIL","message":"should be an email"}]}"#
                .to_string(),
        };

        let err = check_response(&response).unwrap_err();
        assert_eq!(
            err,
            SubmitError::Status {
                status: 422,
                detail: Some("email: should be an email".to_string()),
            }
        );
        assert_eq!(err.to_string(), "Form endpoint answered with HTTP 422");
    }

    #[test]
    fn test_reply_summary_variants() {
        let reply = EndpointReply::parse(r#"{"error":"Form not found"}"#).unwrap();
        assert_eq!(reply.summary(), Some("Form not found".to_string()));

        let reply = EndpointReply::parse(r#"{"ok":true}"#).unwrap();
        assert_eq!(reply.ok, Some(true));
        assert_eq!(reply.summary(), None);

        assert!(EndpointReply::parse("<html>").is_none());
    }

    #[test]
    fn test_state_affordances() {
        assert!(!SubmitState::Idle.is_disabled());
        assert!(SubmitState::Submitting.is_disabled());
        assert_eq!(SubmitState::Submitting.hover_label(), None);
        assert_eq!(SubmitState::Succeeded.background(), Some(SUCCESS_BACKGROUND));
        assert_eq!(SubmitState::Submitting.revert_after_ms(), None);
        assert_eq!(SubmitState::Idle.revert_after_ms(), None);
    }

    #[test]
    fn test_other_course_field() {
        let other = OtherCourseField::for_selection("Other");
        assert_eq!(other, OtherCourseField { visible: true, required: true, clear: false });
        assert_eq!(other.display(), "flex");

        let biology = OtherCourseField::for_selection("Biology");
        assert_eq!(biology, OtherCourseField { visible: false, required: false, clear: true });
        assert_eq!(biology.display(), "none");

        assert!(!OtherCourseField::for_selection("other").visible);
        assert!(!OtherCourseField::for_selection("").visible);
    }

    #[test]
    fn test_newsletter_ack_reverts() {
        let scheduler = VirtualScheduler::new();
        let shown = Rc::new(Cell::new(false));

        let sink = shown.clone();
        let ack = NewsletterAck::new(scheduler.clone(), move |on| sink.set(on));

        ack.acknowledge();
        assert!(shown.get());
        assert!(ack.is_acknowledged());

        scheduler.advance(1500.0);
        ack.acknowledge();
        scheduler.advance(1500.0);
        assert!(shown.get());

        scheduler.advance(500.0);
        assert!(!shown.get());
        assert!(!ack.is_acknowledged());
    }
}
