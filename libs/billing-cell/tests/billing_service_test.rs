// libs/billing-cell/tests/billing_service_test.rs

use assert_matches::assert_matches;
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_partial_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use billing_cell::error::BillingError;
use billing_cell::models::{
    CreateBillRequest, PaidStatus, UpdateBillRequest, UpdatePaymentRequest,
};
use billing_cell::services::BillingService;
use shared_utils::test_utils::TestConfig;

fn service_for(server: &MockServer) -> BillingService {
    BillingService::new(&TestConfig::with_store_url(&server.uri()).to_app_config())
}

fn stored_bill(id: &Uuid, paid_status: &str, balance: f64) -> serde_json::Value {
    json!({
        "id": id,
        "patient_name": "John Carter",
        "patient_id": "P100",
        "appointment_id": "A200",
        "total_amount": 100.0,
        "paid_amount": 40.0,
        "balance_amount": balance,
        "paid_status": paid_status,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn caller_supplied_balance_is_persisted_without_recomputation() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    // total 100, paid 40, but the caller says the balance is 50: the
    // service must forward 50 untouched, not derive 60.
    Mock::given(method("POST"))
        .and(path("/rest/v1/medical_bills"))
        .and(body_partial_json(json!({
            "total_amount": 100.0,
            "paid_amount": 40.0,
            "balance_amount": 50.0
        })))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!([stored_bill(&id, "partially paid", 50.0)])),
        )
        .mount(&server)
        .await;

    let service = service_for(&server);
    let bill = service
        .create(CreateBillRequest {
            patient_name: "John Carter".to_string(),
            patient_id: "P100".to_string(),
            appointment_id: "A200".to_string(),
            total_amount: 100.0,
            paid_amount: 40.0,
            balance_amount: 50.0,
            paid_status: PaidStatus::PartiallyPaid,
        })
        .await
        .unwrap();

    assert_eq!(bill.balance_amount, 50.0);
    assert_eq!(bill.paid_status, PaidStatus::PartiallyPaid);
}

#[tokio::test]
async fn get_all_requests_newest_first_order() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("GET"))
        .and(path("/rest/v1/medical_bills"))
        .and(query_param("order", "created_at.desc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_bill(&id, "unpaid", 100.0)])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let bills = service.get_all().await.unwrap();

    assert_eq!(bills.len(), 1);
    assert_eq!(bills[0].id, id);
}

#[tokio::test]
async fn payment_history_returns_settled_and_partially_settled_bills() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/medical_bills"))
        .and(query_param("patient_id", "eq.P100"))
        .and(query_param("paid_status", "in.(\"paid\",\"partially paid\")"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            stored_bill(&Uuid::new_v4(), "paid", 0.0),
            stored_bill(&Uuid::new_v4(), "partially paid", 50.0)
        ])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let bills = service.payment_history("P100").await.unwrap();

    assert_eq!(bills.len(), 2);
    assert!(bills
        .iter()
        .all(|b| matches!(b.paid_status, PaidStatus::Paid | PaidStatus::PartiallyPaid)));
}

#[tokio::test]
async fn payment_history_with_no_matches_is_an_error_not_an_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/medical_bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let err = service.payment_history("P999").await.unwrap_err();

    assert_matches!(err, BillingError::NoPaymentHistory);
}

#[tokio::test]
async fn payment_history_rejects_blank_user_id() {
    let server = MockServer::start().await;
    let service = service_for(&server);

    let err = service.payment_history("  ").await.unwrap_err();
    assert_matches!(err, BillingError::Validation(_));
}

#[tokio::test]
async fn update_payment_touches_only_the_status() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/medical_bills"))
        .and(query_param("id", format!("eq.{}", id)))
        .and(body_partial_json(json!({ "paid_status": "paid" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([stored_bill(&id, "paid", 50.0)])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let bill = service
        .update_payment(
            &id.to_string(),
            UpdatePaymentRequest {
                paid_status: PaidStatus::Paid,
            },
        )
        .await
        .unwrap();

    assert_eq!(bill.paid_status, PaidStatus::Paid);
    // Amounts are whatever the store already held
    assert_eq!(bill.balance_amount, 50.0);
}

#[tokio::test]
async fn full_update_replaces_editable_fields_as_supplied() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();

    Mock::given(method("PATCH"))
        .and(path("/rest/v1/medical_bills"))
        .and(body_partial_json(json!({
            "patient_name": "John Carter",
            "total_amount": 120.0,
            "paid_amount": 120.0,
            "balance_amount": 5.0,
            "paid_status": "paid"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{
            "id": id,
            "patient_name": "John Carter",
            "patient_id": "P100",
            "appointment_id": "A200",
            "total_amount": 120.0,
            "paid_amount": 120.0,
            "balance_amount": 5.0,
            "paid_status": "paid",
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-01T00:00:00Z"
        }])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let bill = service
        .update(
            &id.to_string(),
            UpdateBillRequest {
                patient_name: "John Carter".to_string(),
                total_amount: 120.0,
                paid_amount: 120.0,
                // Inconsistent with the amounts on purpose; stored as given
                balance_amount: 5.0,
                paid_status: PaidStatus::Paid,
            },
        )
        .await
        .unwrap();

    assert_eq!(bill.balance_amount, 5.0);
}

#[tokio::test]
async fn missing_bill_yields_not_found_on_get_update_and_delete() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/rest/v1/medical_bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path("/rest/v1/medical_bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/rest/v1/medical_bills"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let service = service_for(&server);
    let id = Uuid::new_v4().to_string();

    assert_matches!(service.get_by_id(&id).await.unwrap_err(), BillingError::NotFound);
    assert_matches!(
        service
            .update_payment(&id, UpdatePaymentRequest { paid_status: PaidStatus::Paid })
            .await
            .unwrap_err(),
        BillingError::NotFound
    );
    assert_matches!(service.delete(&id).await.unwrap_err(), BillingError::NotFound);
}
