use axum::{
    async_trait,
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use std::{
    collections::HashMap,
    sync::{Arc, RwLock},
};
use tickets_service::{
    application::ApplicationState,
    gateway::{self, EventSection, EventSnapshot, EventsGateway},
    repository::InMemoryTicketsRepository,
    routing::routing,
    service::{
        admission_service::AdmissionServiceImpl, fanout_service::TracingFanoutService,
        tickets_service::TicketsServiceImpl,
    },
};
use tower::util::ServiceExt;
use uuid::Uuid;

///
/// Events gateway fed with fixed snapshots instead of an HTTP
/// events service.
///
#[derive(Default)]
pub struct StubEventsGateway {
    events: RwLock<HashMap<Uuid, EventSnapshot>>,
}

impl StubEventsGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put_event(&self, snapshot: EventSnapshot) {
        self.events.write().unwrap().insert(snapshot.id, snapshot);
    }
}

#[async_trait]
impl EventsGateway for StubEventsGateway {
    async fn event_snapshot(&self, event_id: Uuid) -> Result<EventSnapshot, gateway::Error> {
        self.events
            .read()
            .unwrap()
            .get(&event_id)
            .cloned()
            .ok_or(gateway::Error::EventNotExist(event_id))
    }
}

pub fn event_snapshot(event_id: Uuid, status: &str, sections: &[(&str, u32)]) -> EventSnapshot {
    EventSnapshot {
        id: event_id,
        status: status.to_string(),
        sections: sections
            .iter()
            .map(|(name, capacity)| EventSection {
                id: Uuid::new_v4(),
                name: name.to_string(),
                capacity: *capacity,
            })
            .collect(),
    }
}

pub fn create_application(events_gateway: Arc<StubEventsGateway>) -> Router {
    let tickets_repository = Arc::new(InMemoryTicketsRepository::new());

    let admission_service = Arc::new(AdmissionServiceImpl::new(
        events_gateway,
        tickets_repository.clone(),
    ));
    let tickets_service = Arc::new(TicketsServiceImpl::new(
        tickets_repository,
        admission_service,
        Arc::new(TracingFanoutService),
    ));

    routing().with_state(ApplicationState { tickets_service })
}

pub async fn post_json(
    app: &Router,
    uri: &str,
    body: serde_json::Value,
) -> (StatusCode, String) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();

    send(app, request).await
}

pub fn json_body(body: &str) -> serde_json::Value {
    serde_json::from_str(body).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = String::from_utf8(bytes.to_vec()).unwrap();

    (status, body)
}
