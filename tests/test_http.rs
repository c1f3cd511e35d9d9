pub mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::{json, Value};
use std::sync::Arc;
use uuid::Uuid;

const QR_IMAGE_BASE64: &str = "MTIzNA==";

fn generate_body(event_id: Uuid, items: Value) -> Value {
    json!({
        "event_id": event_id,
        "reservation_id": Uuid::new_v4(),
        "attendee_id": Uuid::new_v4(),
        "items": items,
    })
}

fn item(ticket_type: &str, price: f64, section_name: Option<&str>, qr_value: &str) -> Value {
    json!({
        "ticket_type": ticket_type,
        "price": price,
        "seat_id": null,
        "section_name": section_name,
        "qr_code_value": qr_value,
        "qr_code_image": QR_IMAGE_BASE64,
    })
}

#[tokio::test]
async fn generate_tickets_created() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[("VIP", 10)]));
    let app = create_application(events_gateway);

    let (status, body) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(
            event_id,
            json!([
                item("VIP", 250.0, Some("VIP"), "QR-1"),
                item("VIP", 250.0, Some("VIP"), "QR-2"),
            ]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    let ticket_ids = json_body(&body)
        .as_object()
        .unwrap()
        .get("ticket_ids")
        .unwrap()
        .as_array()
        .unwrap()
        .len();
    assert_eq!(ticket_ids, 2);
}

#[tokio::test]
async fn generate_tickets_capacity_exceeded() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[("VIP", 2)]));
    let app = create_application(events_gateway);

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(
            event_id,
            json!([
                item("VIP", 250.0, Some("VIP"), "QR-1"),
                item("VIP", 250.0, Some("VIP"), "QR-2"),
            ]),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([item("VIP", 250.0, Some("VIP"), "QR-3")])),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("remaining 0"));
    assert!(body.contains("requested 1"));
}

#[tokio::test]
async fn generate_tickets_event_not_published() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Borrador", &[]));
    let app = create_application(events_gateway);

    let (status, body) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([item("General", 100.0, None, "QR-1")])),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert!(body.contains("Borrador"));
}

#[tokio::test]
async fn generate_tickets_event_not_exist() {
    let app = create_application(Arc::new(StubEventsGateway::new()));

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(Uuid::new_v4(), json!([item("General", 100.0, None, "QR-1")])),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn generate_tickets_unknown_section() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[("VIP", 10)]));
    let app = create_application(events_gateway);

    let (status, body) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(
            event_id,
            json!([item("General", 100.0, Some("Balcony"), "QR-1")]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body.contains("Balcony"));
}

#[tokio::test]
async fn generate_tickets_section_required() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[("VIP", 10)]));
    let app = create_application(events_gateway);

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([item("General", 100.0, None, "QR-1")])),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn generate_tickets_unsectioned_event() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[]));
    let app = create_application(events_gateway);

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([item("General", 100.0, None, "QR-1")])),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
}

#[tokio::test]
async fn generate_tickets_empty_items() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[]));
    let app = create_application(events_gateway);

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([])),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn generate_tickets_seat_without_section() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[]));
    let app = create_application(events_gateway);

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(
            event_id,
            json!([{
                "ticket_type": "FrontRow",
                "price": 300.0,
                "seat_id": Uuid::new_v4(),
                "section_name": null,
                "qr_code_value": "QR-1",
                "qr_code_image": QR_IMAGE_BASE64,
            }]),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn confirm_tickets_not_exist() {
    let app = create_application(Arc::new(StubEventsGateway::new()));

    let (status, _) = post_json(
        &app,
        "/api/tickets/confirmar",
        json!({
            "payment_id": Uuid::new_v4(),
            "confirmed_at": "2026-08-06T12:00:00Z",
            "ticket_ids": [Uuid::new_v4()],
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validate_ticket_qr_code_not_exist() {
    let app = create_application(Arc::new(StubEventsGateway::new()));

    let (status, _) = post_json(
        &app,
        "/api/tickets/validar",
        json!({
            "qr_code": "QR-404",
            "location": "Gate A",
            "validator_id": Uuid::new_v4(),
            "validated_at": "2026-08-06T12:00:00Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validate_ticket_not_confirmed() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[]));
    let app = create_application(events_gateway);

    let (status, _) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([item("General", 100.0, None, "QR-1")])),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, _) = post_json(
        &app,
        "/api/tickets/validar",
        json!({
            "qr_code": "QR-1",
            "location": "Gate A",
            "validator_id": Uuid::new_v4(),
            "validated_at": "2026-08-06T12:00:00Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn cancel_ticket_not_exist() {
    let app = create_application(Arc::new(StubEventsGateway::new()));

    let (status, _) = post_json(
        &app,
        "/api/tickets/cancelar",
        json!({
            "ticket_id": Uuid::new_v4(),
            "reason": "changed plans",
            "cancelled_at": "2026-08-06T12:00:00Z",
        }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn cancel_ticket_twice_conflict() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[]));
    let app = create_application(events_gateway);

    let (status, body) = post_json(
        &app,
        "/api/tickets/generar",
        generate_body(event_id, json!([item("General", 100.0, None, "QR-1")])),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let ticket_id = json_body(&body)
        .as_object()
        .unwrap()
        .get("ticket_ids")
        .unwrap()
        .as_array()
        .unwrap()[0]
        .clone();

    let cancel_body = json!({
        "ticket_id": ticket_id,
        "reason": "changed plans",
        "cancelled_at": "2026-08-06T12:00:00Z",
    });

    let (status, _) = post_json(&app, "/api/tickets/cancelar", cancel_body.clone()).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = post_json(&app, "/api/tickets/cancelar", cancel_body).await;
    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn check_access_no_ticket() {
    let app = create_application(Arc::new(StubEventsGateway::new()));

    let (status, body) = get(
        &app,
        &format!(
            "/api/tickets/check-access?eventId={}&userId={}",
            Uuid::new_v4(),
            Uuid::new_v4()
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let body = json_body(&body);
    let object = body.as_object().unwrap();
    assert_eq!(object.get("hasAccess").unwrap(), false);
    assert_eq!(object.get("status").unwrap(), "None");
}

#[tokio::test]
async fn full_ticket_lifecycle() {
    let events_gateway = Arc::new(StubEventsGateway::new());
    let event_id = Uuid::new_v4();
    events_gateway.put_event(event_snapshot(event_id, "Publicado", &[]));
    let app = create_application(events_gateway);
    let attendee_id = Uuid::new_v4();

    // generate
    let (status, body) = post_json(
        &app,
        "/api/tickets/generar",
        json!({
            "event_id": event_id,
            "reservation_id": Uuid::new_v4(),
            "attendee_id": attendee_id,
            "items": [item("General", 100.0, None, "Q1")],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let ticket_id = json_body(&body)
        .as_object()
        .unwrap()
        .get("ticket_ids")
        .unwrap()
        .as_array()
        .unwrap()[0]
        .clone();

    // confirm
    let (status, _) = post_json(
        &app,
        "/api/tickets/confirmar",
        json!({
            "payment_id": Uuid::new_v4(),
            "confirmed_at": "2026-08-06T12:00:00Z",
            "ticket_ids": [ticket_id],
        }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // validate at the gate
    let (status, _) = post_json(
        &app,
        "/api/tickets/validar",
        json!({
            "qr_code": "Q1",
            "location": "Gate A",
            "validator_id": Uuid::new_v4(),
            "validated_at": "2026-08-06T18:00:00Z",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    // access check reports the used ticket
    let (status, body) = get(
        &app,
        &format!("/api/tickets/check-access?eventId={event_id}&userId={attendee_id}"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let body = json_body(&body);
    let object = body.as_object().unwrap();
    assert_eq!(object.get("hasAccess").unwrap(), true);
    assert_eq!(object.get("ticketId").unwrap(), &ticket_id);
    assert_eq!(object.get("ticketType").unwrap(), "General");
    assert_eq!(object.get("status").unwrap(), "Used");

    // used tickets cannot be cancelled
    let (status, _) = post_json(
        &app,
        "/api/tickets/cancelar",
        json!({
            "ticket_id": ticket_id,
            "reason": "too late",
            "cancelled_at": "2026-08-06T19:00:00Z",
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
}
