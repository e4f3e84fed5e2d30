use std::path::PathBuf;

use actix_files::{Files, NamedFile};
use actix_web::{
    App, HttpServer,
    dev::{ServiceRequest, ServiceResponse, fn_service},
    middleware::Logger,
    web,
};

mod config;

use config::SiteConfig;

/// Serves the prebuilt page. Anything the bundle doesn't have gets index.html,
/// except under `/images` where a missing file is a plain 404.
fn routes(config: SiteConfig) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let index: PathBuf = config.dist_dir.join("index.html");

        cfg.service(Files::new("/images", config.images_dir.clone()))
            .service(
                Files::new("/", config.dist_dir.clone())
                    .index_file("index.html")
                    .default_handler(fn_service(move |req: ServiceRequest| {
                        let index = index.clone();
                        async move {
                            let (req, _) = req.into_parts();
                            let file = NamedFile::open_async(index).await?;
                            let res = file.into_response(&req);
                            Ok(ServiceResponse::new(req, res))
                        }
                    })),
            );
    }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SiteConfig::from_env()?;
    log::info!(
        "serving {} (images from {}) on http://{}",
        config.dist_dir.display(),
        config.images_dir.display(),
        config.addr
    );

    let addr = config.addr;
    HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .configure(routes(config.clone()))
    })
    .bind(addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use pretty_assertions::assert_eq;
    use std::fs;

    fn site() -> (tempfile::TempDir, SiteConfig) {
        let dir = tempfile::tempdir().unwrap();
        let dist_dir = dir.path().join("dist");
        let images_dir = dir.path().join("images");
        fs::create_dir_all(&dist_dir).unwrap();
        fs::create_dir_all(&images_dir).unwrap();
        fs::write(dist_dir.join("index.html"), "<html>milyar</html>").unwrap();
        fs::write(images_dir.join("abfam.png"), b"png").unwrap();

        let config = SiteConfig {
            addr: "127.0.0.1:0".parse().unwrap(),
            dist_dir,
            images_dir,
        };
        (dir, config)
    }

    #[actix_web::test]
    async fn serves_index_at_root() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(routes(config))).await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(body, "<html>milyar</html>");
    }

    #[actix_web::test]
    async fn serves_project_images() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(routes(config))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/images/abfam.png").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn missing_image_is_not_found() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(routes(config))).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/images/movida.png").to_request()).await;
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn unknown_path_falls_back_to_index() {
        let (_dir, config) = site();
        let app = test::init_service(App::new().configure(routes(config))).await;

        let body = test::call_and_read_body(&app, test::TestRequest::get().uri("/side-tracks").to_request()).await;
        assert_eq!(body, "<html>milyar</html>");
    }
}
