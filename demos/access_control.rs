//! Role-Based Access Pipeline
//!
//! An authorization chain built from the dispatch broker: one handler checks
//! authentication, a second checks for the admin role. The first handler
//! that cannot satisfy its check records a failure and the chain halts.
//!
//! Run with: cargo run --example access_control

use std::sync::Arc;
use thiserror::Error;
use waypoint::broker::{Broker, Handler, Query};

struct LoginRequest {
    username: String,
    roles: Vec<String>,
}

#[derive(Default, Debug)]
struct LoginResult {
    authenticated: bool,
    admin: bool,
}

#[derive(Debug, Error)]
enum AccessError {
    #[error("UNAUTHENTICATED")]
    Unauthenticated,
    #[error("UNAUTHORIZED")]
    Unauthorized,
}

struct RequireAuthenticated;

impl Handler<LoginRequest, LoginResult> for RequireAuthenticated {
    fn handle(&self, query: &mut Query<LoginRequest, LoginResult>) {
        if query.data.roles.iter().any(|r| r == "user" || r == "admin") {
            query.result.authenticated = true;
        } else {
            query.fail(AccessError::Unauthenticated);
        }
    }
}

struct RequireAdmin;

impl Handler<LoginRequest, LoginResult> for RequireAdmin {
    fn handle(&self, query: &mut Query<LoginRequest, LoginResult>) {
        if query.data.roles.iter().any(|r| r == "admin") {
            query.result.admin = true;
        } else {
            query.fail(AccessError::Unauthorized);
        }
    }
}

fn basic_route() -> Broker<LoginRequest, LoginResult> {
    let mut broker = Broker::new();
    broker.subscribe(Arc::new(RequireAuthenticated));
    broker
}

fn admin_route() -> Broker<LoginRequest, LoginResult> {
    let mut broker = Broker::new();
    broker.subscribe(Arc::new(RequireAuthenticated));
    broker.subscribe(Arc::new(RequireAdmin));
    broker
}

fn check_access(broker: &Broker<LoginRequest, LoginResult>, name: &str, roles: &[&str]) {
    let mut query = Query::new(
        LoginRequest {
            username: name.to_string(),
            roles: roles.iter().map(|r| r.to_string()).collect(),
        },
        LoginResult::default(),
    );

    broker.fire(&mut query);

    match &query.error {
        Some(err) => println!("  {} -> denied: {err} ({:?})", query.data.username, query.result),
        None => println!("  {} -> granted ({:?})", query.data.username, query.result),
    }
}

fn main() {
    println!("=== Role-Based Access Pipeline ===\n");

    let users: [(&str, &[&str]); 3] =
        [("jack", &[]), ("john", &["user"]), ("jane", &["admin"])];

    println!("Basic route (authentication only):");
    let basic = basic_route();
    for (name, roles) in users {
        check_access(&basic, name, roles);
    }

    println!("\nAdmin route (authentication, then admin role):");
    let admin = admin_route();
    for (name, roles) in users {
        check_access(&admin, name, roles);
    }
}
