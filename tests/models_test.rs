//! Deserialization tests for the platform wallet API model types.

use chrono::{TimeZone, Utc};

use dompet::DompetError;
use dompet::models::ApiEnvelope;
use dompet::models::balance::BalanceSnapshot;
use dompet::models::mutation::{MutationKind, MutationRecord};

const BALANCE_JSON: &str = include_str!("fixtures/balance.json");
const MUTATIONS_JSON: &str = include_str!("fixtures/mutations.json");
const ENVELOPE_ERROR_JSON: &str = include_str!("fixtures/envelope_error.json");

#[test]
fn balance_envelope_deserializes() {
    let envelope: ApiEnvelope<BalanceSnapshot> =
        serde_json::from_str(BALANCE_JSON).expect("failed to deserialize balance response");

    assert!(envelope.success);
    let snapshot = envelope.into_data().unwrap();
    assert_eq!(snapshot.balance, 50_000);
    assert_eq!(snapshot.available_balance, 45_000);
    assert_eq!(snapshot.bonus_balance, 2_500);
    assert_eq!(snapshot.hold_amount, 5_000);
    snapshot.validate().unwrap();
}

#[test]
fn mutations_envelope_deserializes_newest_first() {
    let envelope: ApiEnvelope<Vec<MutationRecord>> =
        serde_json::from_str(MUTATIONS_JSON).expect("failed to deserialize mutation response");

    let mutations = envelope.into_data().unwrap();
    assert_eq!(mutations.len(), 3);

    let newest = &mutations[0];
    assert_eq!(newest.id, 9042);
    assert_eq!(newest.kind, MutationKind::Credit);
    assert_eq!(newest.amount, 35_000);
    assert_eq!(newest.balance_after, 50_000);
    assert_eq!(newest.description, "Top Up via QRIS");
    assert_eq!(
        newest.created_at,
        Utc.with_ymd_and_hms(2025, 1, 14, 10, 45, 12).unwrap()
    );
    assert!(newest.transaction.is_none());

    let with_transaction = &mutations[1];
    assert_eq!(with_transaction.kind, MutationKind::Debit);
    assert_eq!(
        with_transaction
            .transaction
            .as_ref()
            .map(|t| t.transaction_code.as_str()),
        Some("TRX-20250114-00071")
    );
}

#[test]
fn mutation_without_transaction_field_defaults_to_none() {
    let json = r#"{
        "id": 1,
        "type": "debit",
        "amount": 100,
        "balance_after": 900,
        "description": "Admin fee",
        "created_at": "2025-01-14T00:00:00Z"
    }"#;

    let mutation: MutationRecord = serde_json::from_str(json).unwrap();
    assert!(mutation.transaction.is_none());
    assert_eq!(mutation.signed_amount(), -100);
}

#[test]
fn unknown_mutation_kind_is_rejected() {
    let json = r#"{
        "id": 1,
        "type": "transfer",
        "amount": 100,
        "balance_after": 900,
        "description": "??",
        "created_at": "2025-01-14T00:00:00Z"
    }"#;

    assert!(serde_json::from_str::<MutationRecord>(json).is_err());
}

#[test]
fn error_envelope_maps_to_api_error() {
    let envelope: ApiEnvelope<BalanceSnapshot> =
        serde_json::from_str(ENVELOPE_ERROR_JSON).unwrap();

    let err = envelope.into_data().unwrap_err();
    match err {
        DompetError::Api(message) => assert_eq!(message, "invalid signature"),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[test]
fn successful_envelope_without_data_is_malformed() {
    let json = r#"{ "success": true, "message": "OK", "data": null }"#;
    let envelope: ApiEnvelope<BalanceSnapshot> = serde_json::from_str(json).unwrap();

    assert!(matches!(
        envelope.into_data(),
        Err(DompetError::Malformed(_))
    ));
}

#[test]
fn snapshot_with_available_above_total_fails_validation() {
    let snapshot = BalanceSnapshot {
        balance: 10_000,
        available_balance: 12_000,
        bonus_balance: 0,
        hold_amount: 0,
    };

    let err = snapshot.validate().unwrap_err();
    assert!(err.to_string().contains("exceeds total balance"));
}

#[test]
fn snapshot_with_negative_figures_fails_validation() {
    let snapshot = BalanceSnapshot {
        balance: 10_000,
        available_balance: -1,
        bonus_balance: 0,
        hold_amount: 0,
    };

    assert!(matches!(
        snapshot.validate(),
        Err(DompetError::Malformed(_))
    ));
}

#[test]
fn mutation_kind_wire_names() {
    assert_eq!(MutationKind::Credit.as_str(), "credit");
    assert_eq!(MutationKind::Debit.as_str(), "debit");
    assert_eq!(
        serde_json::from_str::<MutationKind>("\"credit\"").unwrap(),
        MutationKind::Credit
    );
}
