//! Thread endpoint handlers.

use crate::{error::GatewayError, models::Thread, services::ThreadClient};
use actix_web::{HttpResponse, web};

/// `POST /thread` - forward thread creation to the thread service.
pub async fn create_thread(
    thread: web::Json<Thread>,
    client: web::Data<ThreadClient>,
) -> Result<HttpResponse, GatewayError> {
    client.create(&thread).await?;
    Ok(HttpResponse::Ok().finish())
}

/// `GET /thread/{tid}` - fetch a thread from the thread service.
pub async fn get_thread(
    tid: web::Path<String>,
    client: web::Data<ThreadClient>,
) -> Result<web::Json<Thread>, GatewayError> {
    let thread = client.get(&tid).await?;
    Ok(web::Json(thread))
}
