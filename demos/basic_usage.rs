// SPDX-License-Identifier: MIT OR Apache-2.0

//! Basic usage example for the service binding crate.
//!
//! This example demonstrates:
//! - Laying out a binding root with the three supported directory layouts
//! - Scanning it with the default strategies
//! - Reading well-known properties and typed credentials
//!
//! To run this example:
//! ```bash
//! # Optional: show the accessor's decisions
//! export RUST_LOG=bindenv=trace
//!
//! cargo run --example basic_usage
//! ```

use bindenv::prelude::*;
use std::fs;
use std::path::Path;

fn write_binding(root: &Path, service: &str, binding: &str, files: &[(&str, &str)]) -> Result<()> {
    let dir = root.join(service).join(binding);
    fs::create_dir_all(&dir)?;
    for (name, content) in files {
        fs::write(dir.join(name), content)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt::init();

    println!("=== Service Bindings: Basic Usage ===\n");

    let root = tempfile::tempdir()?;

    // One file per property
    write_binding(
        root.path(),
        "postgres",
        "orders-db",
        &[("url", "postgres://db:5432/orders"), ("username", "orders")],
    )?;
    // A single structured document
    write_binding(
        root.path(),
        "xsuaa",
        "auth",
        &[(
            "auth.json",
            r#"{"plan": "application", "tags": ["xsuaa"], "credentials": {"clientid": "sb-app"}}"#,
        )],
    )?;
    // The designated data document with lifted metadata
    write_binding(
        root.path(),
        "hana",
        "hana-1",
        &[(
            "data.json",
            r#"{"metadata": {"plan": "hdi-shared"}, "credentials": {"host": "hana.local", "port": 30015}}"#,
        )],
    )?;

    let accessor = LayeredServiceBindingAccessor::with_root_path(root.path());
    println!("Scanning '{}' with {:?}\n", accessor.root_path().display(), accessor.strategy_names());

    // Example 1: List every binding
    println!("--- Example 1: Discovered Bindings ---");
    let bindings = accessor.get_service_bindings()?;
    for binding in &bindings {
        println!(
            "✓ {} / {} (plan: {})",
            binding.get_service_name().unwrap_or("?"),
            binding.get_name().unwrap_or("?"),
            binding.get_service_plan().unwrap_or("-")
        );
    }

    // Example 2: Typed credentials
    println!("\n--- Example 2: Typed Credentials ---");
    if let Some(hana) = bindings.iter().find(|b| b.get_service_name() == Some("hana")) {
        let credentials = hana.get_credentials();
        match credentials.get_integer("port") {
            Ok(port) => println!("✓ hana port: {} (as integer)", port),
            Err(e) => println!("✗ hana port unreadable: {}", e),
        }
        match credentials.get_boolean("host") {
            Ok(flag) => println!("✓ hana host as boolean: {}", flag),
            Err(e) => println!("✗ {}", e),
        }
    }

    // Example 3: Missing keys
    println!("\n--- Example 3: Missing Keys ---");
    if let Some(db) = bindings.iter().find(|b| b.get_service_name() == Some("postgres")) {
        match db.properties().get_string("password") {
            Ok(password) => println!("✓ password: {}", password),
            Err(e) => println!("✗ {}", e),
        }
        println!("Tags: {:?}", db.get_tags());
    }

    println!("\n=== Example Complete ===");
    Ok(())
}
