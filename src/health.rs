use actix_web::{get, web, HttpResponse, Responder};
use sea_orm::{ConnectionTrait, DatabaseConnection, Statement};
use serde::Serialize;
use std::sync::Arc;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadinessResponse {
    status: &'static str,
    database: &'static str,
}

/// What the readiness probe has to reach.
#[derive(Clone)]
pub enum ReadinessProbe {
    Database(Arc<DatabaseConnection>),
    /// In-memory store; nothing external to check.
    Memory,
}

impl ReadinessProbe {
    async fn database_status(&self) -> &'static str {
        match self {
            ReadinessProbe::Memory => "not_used",
            ReadinessProbe::Database(db) => {
                match db
                    .execute(Statement::from_string(
                        db.get_database_backend(),
                        "SELECT 1",
                    ))
                    .await
                {
                    Ok(_) => "ok",
                    Err(e) => {
                        tracing::warn!(error = %e, "Database readiness check failed");
                        "unhealthy"
                    }
                }
            }
        }
    }
}

/// LIVENESS PROBE
/// - No I/O
#[get("/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse { status: "ok" })
}

/// READINESS PROBE
/// - Pings the database when one is configured
#[get("/ready")]
pub async fn readiness(probe: web::Data<ReadinessProbe>) -> impl Responder {
    let database = probe.database_status().await;

    if database == "unhealthy" {
        HttpResponse::ServiceUnavailable().json(ReadinessResponse {
            status: "unhealthy",
            database,
        })
    } else {
        HttpResponse::Ok().json(ReadinessResponse {
            status: "ok",
            database,
        })
    }
}
