pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;

use crate::services::{
    catalog_service::CatalogService, exam_service::ExamService,
    identity_service::IdentityService, submission_service::SubmissionService,
};
use sqlx::SqlitePool;

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub identity_service: IdentityService,
    pub exam_service: ExamService,
    pub catalog_service: CatalogService,
    pub submission_service: SubmissionService,
}

impl AppState {
    pub fn new(pool: SqlitePool) -> Self {
        let identity_service = IdentityService::new(pool.clone());
        let exam_service = ExamService::new(pool.clone());
        let catalog_service = CatalogService::new(pool.clone());
        let submission_service = SubmissionService::new(pool.clone(), identity_service.clone());

        Self {
            pool,
            identity_service,
            exam_service,
            catalog_service,
            submission_service,
        }
    }
}
