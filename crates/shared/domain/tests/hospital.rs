use erbeds_domain::hospital::HospitalRecord;
use erbeds_domain::status::BedStatus;
use serde_json::json;

#[test]
fn decodes_upstream_item_and_keeps_passthrough_fields() {
    let raw = json!({
        "dutyName": "광주기독병원",
        "hvec": 7,
        "dutyTel3": "062-650-5114",
        "hpid": "A2900001",
        "hvidate": 20_241_018_093_000_i64
    });

    let record: HospitalRecord = serde_json::from_value(raw).expect("record decode");
    assert_eq!(record.name, "광주기독병원");
    assert_eq!(record.available_beds, Some(7));
    assert_eq!(record.phone.as_deref(), Some("062-650-5114"));
    assert_eq!(record.field("hpid"), Some(&json!("A2900001")));
    assert_eq!(record.status(), BedStatus::Green);
}

#[test]
fn missing_bed_count_is_unknown_not_zero() {
    let record: HospitalRecord =
        serde_json::from_value(json!({ "dutyName": "A" })).expect("record decode");
    assert_eq!(record.available_beds, None);
    assert!(record.phone.is_none());
    assert_eq!(record.status(), BedStatus::Red);
}

#[test]
fn numeric_strings_and_negative_counts_are_accepted() {
    let record: HospitalRecord =
        serde_json::from_value(json!({ "dutyName": "B", "hvec": " -2 ", "dutyTel3": 1_339 }))
            .expect("record decode");
    assert_eq!(record.available_beds, Some(-2));
    assert_eq!(record.phone.as_deref(), Some("1339"));
}

#[test]
fn garbage_bed_count_reads_as_absent() {
    let record: HospitalRecord =
        serde_json::from_value(json!({ "dutyName": "C", "hvec": "N/A" })).expect("record decode");
    assert_eq!(record.available_beds, None);
}

#[test]
fn serializes_back_with_upstream_names() {
    let record = HospitalRecord::new("A", Some(10), Some("111"));
    let value = serde_json::to_value(&record).expect("record encode");
    assert_eq!(value, json!({ "dutyName": "A", "hvec": 10, "dutyTel3": "111" }));
}
