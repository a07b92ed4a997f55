use pretty_assertions::assert_eq;

use super::*;

fn record(table: &mut ParameterTable, identifier: &str, value: &str, policy: CollisionPolicy) -> Result<(), TemplatizeError> {
    table.record(identifier.to_string(), value.to_string(), identifier, policy)
}

#[test]
fn keeps_insertion_order() {
    let mut table = ParameterTable::new();
    record(&mut table, "site_1", "Branch-A", CollisionPolicy::Overwrite).unwrap();
    record(&mut table, "site_1_element_1", "Router 1", CollisionPolicy::Overwrite).unwrap();
    record(&mut table, "site_1_address", "1 Main St", CollisionPolicy::Overwrite).unwrap();

    let keys: Vec<&str> = table.iter().map(|(key, _)| key).collect();
    assert_eq!(keys, vec!["site_1", "site_1_element_1", "site_1_address"]);
    assert_eq!(table.get("site_1_element_1"), Some("Router 1"));
    assert_eq!(table.len(), 3);
}

#[test]
fn collision_overwrites_in_place() {
    let mut table = ParameterTable::new();
    record(&mut table, "a_b", "first", CollisionPolicy::Overwrite).unwrap();
    record(&mut table, "other", "x", CollisionPolicy::Overwrite).unwrap();
    record(&mut table, "a_b", "second", CollisionPolicy::Overwrite).unwrap();

    let entries: Vec<(&str, &str)> = table.iter().collect();
    assert_eq!(entries, vec![("a_b", "second"), ("other", "x")]);
}

#[test]
fn collision_fails() {
    let mut table = ParameterTable::new();
    record(&mut table, "a_b", "first", CollisionPolicy::Fail).unwrap();
    let err = record(&mut table, "a_b", "second", CollisionPolicy::Fail).unwrap_err();
    assert_eq!(
        err,
        TemplatizeError::IdentifierCollision {
            identifier: "a_b".to_string(),
            path: "a_b".to_string(),
        }
    );
    assert_eq!(table.get("a_b"), Some("first"));
}

#[test]
fn csv_header_and_row() {
    let table: ParameterTable = vec![
        ("site_1".to_string(), "Branch-A".to_string()),
        ("site_1_element_1".to_string(), "Router 1".to_string()),
        ("site_1_note".to_string(), "a, b".to_string()),
        ("site_1_mgmt_ip".to_string(), String::new()),
    ]
    .into_iter()
    .collect();

    let csv = table.to_csv_string().unwrap();
    assert_eq!(
        csv,
        "site_1,site_1_element_1,site_1_note,site_1_mgmt_ip\nBranch-A,Router 1,\"a, b\",\n"
    );
}

#[test]
fn csv_empty_table() {
    let csv = ParameterTable::new().to_csv_string().unwrap();
    assert_eq!(csv, "");
    assert!(ParameterTable::read_csv(csv.as_bytes()).unwrap().is_empty());
}

#[test]
fn csv_reads_every_row() {
    let input = "site_1,site_1_hostname\nBranch-A,r1\nBranch-B,r2\n";
    let tables = ParameterTable::read_csv(input.as_bytes()).unwrap();

    assert_eq!(tables.len(), 2);
    assert_eq!(tables[0].get("site_1"), Some("Branch-A"));
    assert_eq!(tables[1].get("site_1_hostname"), Some("r2"));
}

#[test]
fn csv_rejects_ragged_rows() {
    let input = "a,b\n1\n";
    assert!(ParameterTable::read_csv(input.as_bytes()).is_err());
}
