use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::core::{IngestError, Pipeline};
use crate::models::{AnalysisRequest, AnalyzeResponse, ErrorResponse, HealthResponse, UploadQuery};
use crate::services::GraphRenderer;

/// Application state shared across all handlers
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub pipeline: Pipeline,
    pub renderer: GraphRenderer,
}

/// Configure all analysis routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/analyze", web::post().to(analyze))
        .route("/analyze/upload", web::post().to(analyze_upload))
        .route("/analyze/graph", web::post().to(analyze_graph));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Analyze a contacts export
///
/// POST /api/v1/analyze
///
/// Request body:
/// ```json
/// {
///   "profile": { "title": "string", "company": "string", "industry": "string" },
///   "contactsFile": "string",
///   "targetCompany": "string",
///   "targetRole": "string"
/// }
/// ```
async fn analyze(
    state: web::Data<AppState>,
    req: web::Json<AnalysisRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for analyze request: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    run_analysis(&state, &req)
}

/// Analyze a contacts export sent as the raw request body
///
/// POST /api/v1/analyze/upload?title=..&company=..&industry=..&target_company=..&target_role=..
async fn analyze_upload(
    state: web::Data<AppState>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> impl Responder {
    if let Err(errors) = query.validate() {
        tracing::info!("Validation failed for upload query: field_errors={:?}", errors);
        return validation_failed(errors);
    }

    tracing::debug!("Received contacts upload of {} bytes", body.len());

    let contacts_file = String::from_utf8_lossy(&body).into_owned();
    let request = query.into_inner().into_request(contacts_file);

    run_analysis(&state, &request)
}

/// Render the career path graph as an HTML page
///
/// POST /api/v1/analyze/graph
///
/// Takes the same body as `/analyze`; `targetCompany` and `targetRole` are required.
async fn analyze_graph(
    state: web::Data<AppState>,
    req: web::Json<AnalysisRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        return validation_failed(errors);
    }

    let missing_fields = req.profile.missing_fields();
    if !missing_fields.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Incomplete profile".to_string(),
            message: format!("Missing profile fields: {}", missing_fields.join(", ")),
            status_code: 400,
        });
    }

    if req.target().is_none() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing target".to_string(),
            message: "targetCompany and targetRole are required to build a graph".to_string(),
            status_code: 400,
        });
    }

    let analysis = match state.pipeline.analyze(&req) {
        Ok(analysis) => analysis,
        Err(e) => return ingest_failed(e),
    };

    let Some(graph) = analysis.graph else {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Missing target".to_string(),
            message: "No graph could be built for the requested target".to_string(),
            status_code: 400,
        });
    };

    match state.renderer.render(&graph) {
        Ok(html) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(html),
        Err(e) => {
            tracing::error!("Failed to render graph for {}: {}", graph.target, e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to render graph".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

fn run_analysis(state: &AppState, request: &AnalysisRequest) -> HttpResponse {
    match state.pipeline.run(request) {
        Ok(response) => {
            if let AnalyzeResponse::Completed(analysis) = &response {
                tracing::info!(
                    "Analysis {} complete: {} of {} contacts synergistic",
                    analysis.id,
                    analysis.retained_contacts,
                    analysis.total_contacts
                );
            }
            HttpResponse::Ok().json(response)
        }
        Err(e) => ingest_failed(e),
    }
}

fn ingest_failed(e: IngestError) -> HttpResponse {
    tracing::warn!("Contacts file rejected: {}", e);

    let error = match &e {
        IngestError::ParseFailure => "Parse failure",
        IngestError::ColumnMismatch { .. } => "Column mismatch",
    };

    HttpResponse::UnprocessableEntity().json(ErrorResponse {
        error: error.to_string(),
        message: e.to_string(),
        status_code: 422,
    })
}

fn validation_failed(errors: validator::ValidationErrors) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: errors.to_string(),
        status_code: 400,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingest_failure_status() {
        let response = ingest_failed(IngestError::ColumnMismatch { expected: 7, found: 3 });
        assert_eq!(response.status(), actix_web::http::StatusCode::UNPROCESSABLE_ENTITY);
    }
}
