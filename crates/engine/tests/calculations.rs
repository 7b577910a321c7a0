use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Statement};
use uuid::Uuid;

use engine::{CreateCalculationCmd, Engine, EngineError, Operation, UpdateCalculationCmd};
use migration::MigratorTrait;

async fn engine_with_db() -> (Engine, DatabaseConnection) {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    migration::Migrator::up(&db, None).await.unwrap();
    let backend = db.get_database_backend();
    for username in ["alice", "bob"] {
        db.execute(Statement::from_sql_and_values(
            backend,
            "INSERT INTO users (username, password) VALUES (?, ?)",
            vec![username.into(), "password".into()],
        ))
        .await
        .unwrap();
    }
    let engine = Engine::builder().database(db.clone()).build().await.unwrap();
    (engine, db)
}

fn add_cmd(user_id: &str, operand1: f64, operand2: f64) -> CreateCalculationCmd {
    CreateCalculationCmd::new(user_id, "add", operand1, operand2)
}

#[tokio::test]
async fn create_computes_result_and_stamps_owner() {
    let (engine, _db) = engine_with_db().await;

    let calculation = engine.create_calculation(add_cmd("alice", 2.0, 3.0)).await.unwrap();

    assert_eq!(calculation.result, 5.0);
    assert_eq!(calculation.operation, Operation::Add);
    assert_eq!(calculation.user_id, "alice");

    let stored = engine.calculation(calculation.id, "alice").await.unwrap();
    assert_eq!(stored, calculation);
}

#[tokio::test]
async fn create_divide_by_zero_persists_nothing() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_calculation(CreateCalculationCmd::new("alice", "divide", 5.0, 0.0))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::DivisionByZero);

    let listed = engine.list_calculations("alice", 0, 100).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn create_unknown_operation_carries_tag() {
    let (engine, _db) = engine_with_db().await;

    let err = engine
        .create_calculation(CreateCalculationCmd::new("alice", "modulo", 5.0, 2.0))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidOperation("modulo".to_string()));

    let listed = engine.list_calculations("alice", 0, 100).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn update_recomputes_result_from_merged_state() {
    let (engine, _db) = engine_with_db().await;

    let calculation = engine
        .create_calculation(CreateCalculationCmd::new("alice", "multiply", 4.0, 5.0))
        .await
        .unwrap();
    assert_eq!(calculation.result, 20.0);

    let updated = engine
        .update_calculation(UpdateCalculationCmd::new(calculation.id, "alice").operand1(10.0))
        .await
        .unwrap();

    assert_eq!(updated.operand1, 10.0);
    assert_eq!(updated.operand2, 5.0);
    assert_eq!(updated.operation, Operation::Multiply);
    assert_eq!(updated.result, 50.0);
    assert_eq!(updated.created_at, calculation.created_at);
}

#[tokio::test]
async fn update_can_switch_operation() {
    let (engine, _db) = engine_with_db().await;

    let calculation = engine.create_calculation(add_cmd("alice", 9.0, 3.0)).await.unwrap();

    let updated = engine
        .update_calculation(UpdateCalculationCmd::new(calculation.id, "alice").operation("divide"))
        .await
        .unwrap();

    assert_eq!(updated.operation, Operation::Divide);
    assert_eq!(updated.result, 3.0);
}

#[tokio::test]
async fn failed_recompute_leaves_record_untouched() {
    let (engine, _db) = engine_with_db().await;

    let calculation = engine
        .create_calculation(CreateCalculationCmd::new("alice", "divide", 10.0, 2.0))
        .await
        .unwrap();
    assert_eq!(calculation.result, 5.0);

    // Both fields of the update are rejected together: operand1 must not
    // stick while the zero divisor aborts the recompute.
    let err = engine
        .update_calculation(
            UpdateCalculationCmd::new(calculation.id, "alice")
                .operand1(100.0)
                .operand2(0.0),
        )
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::DivisionByZero);

    let stored = engine.calculation(calculation.id, "alice").await.unwrap();
    assert_eq!(stored, calculation);

    let err = engine
        .update_calculation(UpdateCalculationCmd::new(calculation.id, "alice").operation("modulo"))
        .await
        .unwrap_err();
    assert_eq!(err, EngineError::InvalidOperation("modulo".to_string()));

    let stored = engine.calculation(calculation.id, "alice").await.unwrap();
    assert_eq!(stored, calculation);
}

#[tokio::test]
async fn other_users_records_look_absent() {
    let (engine, _db) = engine_with_db().await;

    let calculation = engine.create_calculation(add_cmd("alice", 1.0, 2.0)).await.unwrap();
    let not_found = EngineError::KeyNotFound("calculation".to_string());

    let err = engine.calculation(calculation.id, "bob").await.unwrap_err();
    assert_eq!(err, not_found);

    let err = engine
        .update_calculation(UpdateCalculationCmd::new(calculation.id, "bob").operand1(9.0))
        .await
        .unwrap_err();
    assert_eq!(err, not_found);

    let err = engine.delete_calculation(calculation.id, "bob").await.unwrap_err();
    assert_eq!(err, not_found);

    // Alice's record survived Bob's attempts unchanged.
    let stored = engine.calculation(calculation.id, "alice").await.unwrap();
    assert_eq!(stored, calculation);

    let listed = engine.list_calculations("bob", 0, 100).await.unwrap();
    assert!(listed.is_empty());
}

#[tokio::test]
async fn delete_is_permanent_and_repeat_reports_not_found() {
    let (engine, _db) = engine_with_db().await;

    let calculation = engine.create_calculation(add_cmd("alice", 1.0, 1.0)).await.unwrap();

    engine.delete_calculation(calculation.id, "alice").await.unwrap();

    let err = engine.calculation(calculation.id, "alice").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("calculation".to_string()));

    let err = engine.delete_calculation(calculation.id, "alice").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("calculation".to_string()));
}

#[tokio::test]
async fn read_of_unknown_id_reports_not_found() {
    let (engine, _db) = engine_with_db().await;

    let err = engine.calculation(Uuid::new_v4(), "alice").await.unwrap_err();
    assert_eq!(err, EngineError::KeyNotFound("calculation".to_string()));
}

#[tokio::test]
async fn list_is_stable_and_paginated() {
    let (engine, _db) = engine_with_db().await;

    let mut ids = Vec::new();
    for n in 0..5 {
        let calculation = engine.create_calculation(add_cmd("alice", n as f64, 1.0)).await.unwrap();
        ids.push(calculation.id);
    }
    // Bob's record must never show up in Alice's pages.
    engine.create_calculation(add_cmd("bob", 7.0, 7.0)).await.unwrap();

    let all = engine.list_calculations("alice", 0, 100).await.unwrap();
    assert_eq!(all.iter().map(|c| c.id).collect::<Vec<_>>(), ids);
    assert!(all.iter().all(|c| c.user_id == "alice"));

    let page = engine.list_calculations("alice", 1, 2).await.unwrap();
    assert_eq!(page.iter().map(|c| c.id).collect::<Vec<_>>(), ids[1..3]);

    let tail = engine.list_calculations("alice", 4, 100).await.unwrap();
    assert_eq!(tail.iter().map(|c| c.id).collect::<Vec<_>>(), ids[4..]);

    let past_the_end = engine.list_calculations("alice", 10, 100).await.unwrap();
    assert!(past_the_end.is_empty());
}
