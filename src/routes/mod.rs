//! HTTP route handlers.

use actix_web::HttpResponse;

use crate::services::ServiceError;

pub mod cliente;

/// Maps a service failure onto the HTTP status contract: not-found becomes a
/// bodyless `404`, anything else is logged and reported as `500`.
pub(crate) fn error_response(err: ServiceError) -> HttpResponse {
    match err {
        ServiceError::NotFound(_) => HttpResponse::NotFound().finish(),
        ServiceError::Repository(e) => {
            log::error!("Repository failure: {e}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
