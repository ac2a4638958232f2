use clientele::adapter::inbound::cli::open_service;
use clientele::domain::{ContactMethod, CustomerForm};

fn form(name: &str) -> CustomerForm {
    CustomerForm {
        name: name.into(),
        ..CustomerForm::default()
    }
}

#[test]
fn records_survive_reopening_the_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("customers.db");

    {
        let service = open_service(&path, true).expect("open db");
        service
            .submit(&CustomerForm {
                address: "12 Analytical Row".into(),
                preferred_contact: "Phone".into(),
                phone: "020 7946 0000".into(),
                ..form("Ada")
            })
            .expect("submit");
    }

    let service = open_service(&path, false).expect("reopen db");
    let all = service.all().expect("list");
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].address.as_deref(), Some("12 Analytical Row"));
    assert_eq!(all[0].preferred_contact, Some(ContactMethod::Phone));
}

#[test]
fn ids_increase_and_recent_is_newest_first() {
    let dir = tempfile::tempdir().expect("temp dir");
    let service = open_service(&dir.path().join("c.db"), true).expect("open db");

    let first = service.submit(&form("one")).expect("submit");
    let second = service.submit(&form("two")).expect("submit");
    assert!(second.id > first.id);

    let recent: Vec<_> = service.recent().expect("recent").into_iter().map(|c| c.name).collect();
    assert_eq!(recent, ["two", "one"]);
    assert_eq!(service.count().expect("count"), 2);
}

#[test]
fn existing_customers_table_is_reused() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("legacy.db");

    // A file whose table was created before migrations were tracked.
    {
        use diesel::prelude::*;
        let mut conn =
            diesel::SqliteConnection::establish(&path.to_string_lossy()).expect("connect");
        diesel::sql_query(
            "CREATE TABLE customers (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                birthday TEXT,
                email TEXT,
                phone TEXT,
                address TEXT,
                preferred_contact TEXT CHECK(preferred_contact in ('Email','Phone','Mail')),
                created_at TEXT DEFAULT CURRENT_TIMESTAMP
            )",
        )
        .execute(&mut conn)
        .expect("create table");
        diesel::sql_query(
            "INSERT INTO customers(name, email, preferred_contact) VALUES ('Old', 'old@example.com', 'Email')",
        )
        .execute(&mut conn)
        .expect("seed row");
    }

    let service = open_service(&path, false).expect("open legacy db");
    service.submit(&form("New")).expect("submit");

    let names: Vec<_> = service.all().expect("list").into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Old", "New"]);
}
