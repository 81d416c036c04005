use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use validator::Validate;

use crate::domain::cliente::{NewCliente, UpdateCliente};
use crate::dto::cliente::{ClienteRequest, ClienteResponse};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::cliente as cliente_service;

#[post("")]
pub async fn create_cliente(
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ClienteRequest>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        log::error!("Failed to validate cliente payload: {e}");
        return HttpResponse::BadRequest().finish();
    }

    let nuevo: NewCliente = (&payload).into();

    match cliente_service::create_cliente(repo.get_ref(), &nuevo) {
        Ok(cliente) => HttpResponse::Created().json(ClienteResponse::from(cliente)),
        Err(e) => error_response(e),
    }
}

#[get("/{cliente_id}")]
pub async fn get_cliente(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match cliente_service::get_cliente_by_id(repo.get_ref(), cliente_id.into_inner()) {
        Ok(cliente) => HttpResponse::Ok().json(ClienteResponse::from(cliente)),
        Err(e) => error_response(e),
    }
}

#[put("/{cliente_id}")]
pub async fn update_cliente(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    web::Json(payload): web::Json<ClienteRequest>,
) -> impl Responder {
    if let Err(e) = payload.validate() {
        log::error!("Failed to validate cliente payload: {e}");
        return HttpResponse::BadRequest().finish();
    }

    let cambios: UpdateCliente = (&payload).into();

    match cliente_service::update_cliente(repo.get_ref(), cliente_id.into_inner(), &cambios) {
        Ok(cliente) => HttpResponse::Ok().json(ClienteResponse::from(cliente)),
        Err(e) => error_response(e),
    }
}

#[delete("/{cliente_id}")]
pub async fn delete_cliente(
    cliente_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match cliente_service::delete_cliente(repo.get_ref(), cliente_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(e) => error_response(e),
    }
}
