//! Comment endpoint handlers.

use crate::{error::GatewayError, models::Comment, services::CommentClient};
use actix_web::{HttpResponse, web};

/// `POST /thread/{tid}/comment` - forward comment creation to the comment
/// service. The owning thread ID from the path overrides whatever the body
/// carries.
pub async fn create_comment(
    tid: web::Path<String>,
    comment: web::Json<Comment>,
    client: web::Data<CommentClient>,
) -> Result<HttpResponse, GatewayError> {
    let mut comment = comment.into_inner();
    comment.thread_id = tid.into_inner();

    client.create(&comment).await?;
    Ok(HttpResponse::Ok().finish())
}

/// `POST /thread/{tid}/comment/{cid}/like` - forward a like to the comment
/// service. Each call is one independent upstream request; the gateway does
/// not deduplicate.
pub async fn like_comment(
    path: web::Path<(String, String)>,
    client: web::Data<CommentClient>,
) -> Result<HttpResponse, GatewayError> {
    let (_tid, cid) = path.into_inner();

    client.like(&cid).await?;
    Ok(HttpResponse::Ok().finish())
}
