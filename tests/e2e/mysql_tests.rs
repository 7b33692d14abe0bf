//! End-to-end tests against a live MySQL server
//!
//! Environment variables (with defaults):
//! - MYSQL_HOST (default: 127.0.0.1)
//! - MYSQL_PORT (default: 3306)
//! - MYSQL_USER (default: root)
//! - MYSQL_PASSWORD (default: Password1)
//!
//! Run with: cargo test --test e2e_tests -- --ignored

use std::sync::LazyLock;

use pretty_assertions::assert_eq;
use rust_modelgen::catalog::MySqlCatalog;
use rust_modelgen::{
    generate_from_database, Catalog, ConnectionTarget, FailurePolicy, KeyRole, ModelGenError,
};
use sqlx::mysql::{MySqlConnectOptions, MySqlConnection};
use sqlx::{Connection, Executor};

use crate::common::TestContext;

/// Load environment variables from .env file (if present)
fn load_env() {
    let _ = dotenvy::dotenv();
}

/// MySQL connection configuration loaded from environment
static MYSQL_CONFIG: LazyLock<MySqlConfig> = LazyLock::new(|| {
    load_env();
    MySqlConfig {
        host: std::env::var("MYSQL_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
        port: std::env::var("MYSQL_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(3306),
        user: std::env::var("MYSQL_USER").unwrap_or_else(|_| "root".to_string()),
        password: std::env::var("MYSQL_PASSWORD").unwrap_or_else(|_| "Password1".to_string()),
    }
});

struct MySqlConfig {
    host: String,
    port: u16,
    user: String,
    password: String,
}

const TEST_DATABASE: &str = "modelgen_e2e";

const SCHEMA: &[&str] = &[
    "CREATE TABLE users (
        id int(11) NOT NULL AUTO_INCREMENT PRIMARY KEY,
        name varchar(255) NOT NULL,
        email varchar(255) NULL
    )",
    "CREATE TABLE OrderItems (
        order_id bigint unsigned NOT NULL PRIMARY KEY,
        price decimal(10,2) NOT NULL,
        status enum('new','paid') NOT NULL DEFAULT 'new',
        created_at datetime NULL
    )",
];

/// Go-driver DSN for the test database
fn dsn() -> String {
    format!(
        "{}:{}@tcp({}:{})/{}",
        MYSQL_CONFIG.user, MYSQL_CONFIG.password, MYSQL_CONFIG.host, MYSQL_CONFIG.port, TEST_DATABASE
    )
}

/// Recreate the test database with a fresh schema
fn setup_database() {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("Failed to build runtime");

    runtime.block_on(async {
        let options = MySqlConnectOptions::new()
            .host(&MYSQL_CONFIG.host)
            .port(MYSQL_CONFIG.port)
            .username(&MYSQL_CONFIG.user)
            .password(&MYSQL_CONFIG.password);
        let mut conn = MySqlConnection::connect_with(&options)
            .await
            .expect("Failed to connect to MySQL");

        conn.execute(format!("DROP DATABASE IF EXISTS {}", TEST_DATABASE).as_str())
            .await
            .expect("Failed to drop test database");
        conn.execute(format!("CREATE DATABASE {}", TEST_DATABASE).as_str())
            .await
            .expect("Failed to create test database");
        conn.execute(format!("USE {}", TEST_DATABASE).as_str())
            .await
            .expect("Failed to select test database");

        for statement in SCHEMA {
            conn.execute(*statement)
                .await
                .expect("Failed to create table");
        }

        conn.close().await.expect("Failed to close connection");
    });
}

#[test]
#[ignore = "requires a running MySQL server"]
fn test_catalog_reads_declaration_order() {
    setup_database();
    let target = ConnectionTarget::parse(&dsn()).unwrap();
    let mut catalog = MySqlCatalog::connect(&target).unwrap();

    let tables = catalog.list_tables().unwrap();
    assert!(tables.contains(&"users".to_string()), "{:?}", tables);
    assert!(tables.contains(&"OrderItems".to_string()), "{:?}", tables);

    let columns = catalog.describe_table("users").unwrap();
    let names: Vec<&str> = columns.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["id", "name", "email"]);

    assert_eq!(columns[0].key_role, KeyRole::Primary);
    assert!(columns[0].is_auto_generated);
    assert!(!columns[1].nullable);
    assert!(columns[2].nullable);

    let columns = catalog.describe_table("OrderItems").unwrap();
    assert_eq!(columns[2].default_value.as_deref(), Some("new"));

    catalog.close();
}

#[test]
#[ignore = "requires a running MySQL server"]
fn test_missing_table_is_schema_error() {
    setup_database();
    let target = ConnectionTarget::parse(&dsn()).unwrap();
    let mut catalog = MySqlCatalog::connect(&target).unwrap();

    match catalog.describe_table("no_such_table") {
        Err(ModelGenError::Schema { table, .. }) => assert_eq!(table, "no_such_table"),
        other => panic!("expected Schema error, got {:?}", other),
    }
}

#[test]
#[ignore = "requires a running MySQL server"]
fn test_generate_models_from_live_schema() {
    setup_database();
    let ctx = TestContext::new();

    let report =
        generate_from_database(&dsn(), &ctx.options(FailurePolicy::FailFast)).unwrap();

    assert!(report.is_success());
    assert_eq!(
        ctx.written_files(),
        vec!["orderitems.go".to_string(), "users.go".to_string()]
    );

    let users = ctx.read_model("users.go");
    assert!(users.contains("    Id int `orm:\"column(id);pk;auto;\" json:\"id\"`\n"));
    assert!(users.contains("    Name string\n"));
    assert!(users.contains("    Email string `orm:\"column(email);null;\" json:\"email\"`\n"));

    let items = ctx.read_model("orderitems.go");
    assert!(items.contains("    Price decimal(10,2)\n"));
    assert!(items.contains("    return \"OrderItems\"\n"));
}
