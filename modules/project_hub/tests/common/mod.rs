//! Shared harness: an in-memory SQLite project hub with sample data

#![allow(dead_code)]

use project_hub::config::{Config, DatabaseConfig};
use project_hub::{Organization, Person, ProjectHub};

/// Fresh in-memory database, migrated and seeded with the sample data
pub async fn seeded_hub() -> ProjectHub {
    hub(true).await
}

/// Fresh in-memory database with the schema only
pub async fn empty_hub() -> ProjectHub {
    hub(false).await
}

async fn hub(seed: bool) -> ProjectHub {
    let config = Config {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        },
        seed_sample_data: seed,
        ..Config::default()
    };
    ProjectHub::init(&config).await.unwrap()
}

pub fn print_test_header(test_name: &str, purpose: &[&str]) {
    println!("\n🧪 TEST: {}", test_name);
    if let Some(first) = purpose.first() {
        println!("📋 PURPOSE: {}", first);
    }
    for line in purpose.iter().skip(1) {
        println!("   {}", line);
    }
}

/// Sample organization that owns the first two seeded projects
pub async fn sample_organization(hub: &ProjectHub) -> Organization {
    hub.organizations()
        .get_all_organizations()
        .await
        .unwrap()
        .into_iter()
        .next()
        .unwrap()
}

pub async fn create_person(hub: &ProjectHub, name: &str, email: &str) -> Person {
    let mut person = Person::new(name, email, None, None);
    hub.persons().create_person(&mut person).await.unwrap();
    person
}
