use actix_web::http::header;
use actix_web::{get, post, web, HttpResponse};
use serde_json::json;

use crate::dao::articles;
use crate::errors::ApiError;
use crate::model::NewArticle;
use crate::startup::AppState;

#[get("/articles")]
#[tracing::instrument(skip(app_state))]
pub async fn get_all_articles(app_state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let found = articles::get_all_articles(&app_state.db)
        .await
        .map_err(|e| ApiError::new(app_state.environment, e))?;

    Ok(HttpResponse::Ok().json(found))
}

#[post("/articles")]
#[tracing::instrument(skip(app_state))]
pub async fn create_article(
    new_article: web::Json<NewArticle>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let created = articles::insert_article(&app_state.db, &new_article.into_inner())
        .await
        .map_err(|e| ApiError::new(app_state.environment, e))?;

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/articles/{}", created.id)))
        .json(created))
}

#[get("/articles/{article_id}")]
#[tracing::instrument(skip(app_state))]
pub async fn get_article(
    article_id: web::Path<i32>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let article = articles::get_article_by_id(&app_state.db, article_id.into_inner())
        .await
        .map_err(|e| ApiError::new(app_state.environment, e))?;

    match article {
        Some(article) => Ok(HttpResponse::Ok().json(article)),
        None => Ok(HttpResponse::NotFound()
            .json(json!({ "error": { "message": "Article doesn't exist" } }))),
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(get_all_articles)
        .service(create_article)
        .service(get_article);
}
