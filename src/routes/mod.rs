use actix_web::{get, web, HttpResponse};

pub mod articles;

#[get("/")]
pub async fn hello() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain")
        .body("Hello, world!")
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(hello).configure(articles::configure);
}
