//! End-to-end flow: form controller -> HTTP transport -> submission handler

use chrono::NaiveDate;
use staysmart_core::{
    create_app,
    form::{FormController, FormField, HttpSubmitter, SubmissionStatus},
    AppState, Mailer, TimeSlot,
};

async fn spawn_service() -> String {
    let app = create_app(AppState::new(Mailer::Unconfigured));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}/api/schedule-demo", addr)
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 10).unwrap()
}

#[tokio::test]
async fn filled_form_submits_and_clears() {
    let endpoint = spawn_service().await;
    let submitter = HttpSubmitter::new(endpoint);

    let mut controller = FormController::new(today());
    controller.update_field(FormField::Name, "Ravi Kumar");
    controller.update_field(FormField::Email, "ravi@example.com");
    controller.update_field(FormField::Message, "Looking forward to it");
    assert!(controller.select_date(NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()));
    controller.select_time(TimeSlot::TenAm);

    controller.submit(&submitter).await;

    assert_eq!(controller.status(), &SubmissionStatus::Success);
    assert_eq!(controller.field(FormField::Name), "");
    assert_eq!(controller.selected_date(), None);

    controller.reset();
    assert_eq!(controller.status(), &SubmissionStatus::Idle);
}

#[tokio::test]
async fn server_side_rejection_surfaces_its_message() {
    let endpoint = spawn_service().await;
    let submitter = HttpSubmitter::new(endpoint);

    // Date and time are set, so the controller submits; the empty name is
    // the server's call to reject.
    let mut controller = FormController::new(today());
    controller.update_field(FormField::Email, "ravi@example.com");
    assert!(controller.select_date(NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()));
    controller.select_time(TimeSlot::NineAm);

    controller.submit(&submitter).await;

    assert_eq!(
        controller.status(),
        &SubmissionStatus::Error("name is required".to_string())
    );
}

#[tokio::test]
async fn unreachable_endpoint_yields_the_generic_message() {
    // Port 9 is discard; nothing listens there.
    let submitter = HttpSubmitter::new("http://127.0.0.1:9/api/schedule-demo");

    let mut controller = FormController::new(today());
    controller.update_field(FormField::Name, "Ravi Kumar");
    controller.update_field(FormField::Email, "ravi@example.com");
    assert!(controller.select_date(NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()));
    controller.select_time(TimeSlot::NineAm);

    controller.submit(&submitter).await;

    assert_eq!(
        controller.status(),
        &SubmissionStatus::Error("Something went wrong".to_string())
    );
}
