use actix_web::{post, web, HttpResponse};
use tracing::info;

use super::super::models::{PaymentNotification, WebhookOutcome};
use super::super::services::WebhookHandler;

/// Register `POST /webhook`
///
/// The handler is shared across workers, so it is passed in already wrapped.
pub fn configure(cfg: &mut web::ServiceConfig, handler: web::Data<WebhookHandler>) {
    cfg.app_data(handler).service(receive_notification);
}

/// Gateway payment notification
///
/// POST /webhook
///
/// # Request Body
/// * `{"PaymentId": "..."}` (a numeric id is accepted too)
///
/// The body is read as raw bytes regardless of Content-Type. A body that
/// cannot be read, or is not a JSON object, counts as a notification without
/// an id.
///
/// # Returns
/// * `200 OK` - Status looked up and recognised
/// * `404 Not Found` - PaymentId missing, body unreadable, status unrecognised, or lookup failed
#[post("/webhook")]
async fn receive_notification(
    body: Option<web::Bytes>,
    handler: web::Data<WebhookHandler>,
) -> HttpResponse {
    let notification = PaymentNotification::from_body(&body.unwrap_or_default());
    let outcome = handler.handle(&notification).await;
    info!(acknowledged = outcome.is_acknowledged(), "Webhook handled");
    outcome_response(&outcome)
}

/// Only an acknowledged status is a success; everything else is reported as 404
fn outcome_response(outcome: &WebhookOutcome) -> HttpResponse {
    match outcome {
        WebhookOutcome::Acknowledged { .. } => HttpResponse::Ok()
            .content_type("text/plain; charset=utf-8")
            .body("OK"),
        WebhookOutcome::MissingPaymentId
        | WebhookOutcome::UnhandledStatus { .. }
        | WebhookOutcome::LookupFailed { .. } => HttpResponse::NotFound()
            .content_type("text/plain; charset=utf-8")
            .body("Not Found"),
    }
}
