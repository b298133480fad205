use crate::configuration::Settings;
use crate::credential_store::CredentialStore;
use crate::email_client::EmailClient;
use crate::routes::{
    check_health, cors_headers, login, login_json_config, preflight, review_email_json_config,
    send_review_email,
};
use actix_web::dev::Server;
use actix_web::http::Method;
use actix_web::web::Data;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn build(settings: Settings) -> Result<Self, anyhow::Error> {
        let email_client = settings
            .email_client
            .client()
            .context("Failed to build the email client")?;
        let credential_store = settings
            .credential_store
            .client()
            .context("Failed to build the credential store client")?;

        if !email_client.has_api_key() {
            tracing::warn!("RESEND_API_KEY is not set, review emails will be refused");
        }

        // Binding here lets a port of 0 resolve to a real one before the server starts
        let listener = TcpListener::bind(settings.application.get_url())
            .with_context(|| format!("Failed to bind {}", settings.application.get_url()))?;
        let port = listener.local_addr()?.port();
        let server = run(listener, email_client, credential_store)?;

        Ok(Self { port, server })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Resolves only when the server shuts down.
    pub async fn run_until_terminated(self) -> std::io::Result<()> {
        self.server.await
    }
}

fn run(
    listener: TcpListener,
    email_client: EmailClient,
    credential_store: CredentialStore,
) -> Result<Server, std::io::Error> {
    // Data<T> is an Arc, every worker shares the same clients
    let email_client = Data::new(email_client);
    let credential_store = Data::new(credential_store);

    let server = HttpServer::new(move || {
        App::new()
            // Every request gets a span with a request id
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(check_health))
            .service(
                web::resource("/send-review-email")
                    .app_data(review_email_json_config())
                    .route(web::post().to(send_review_email))
                    // Browsers send a pre-flight before the cross-origin POST
                    .route(web::method(Method::OPTIONS).to(preflight))
                    .wrap(cors_headers()),
            )
            .service(
                web::resource("/login")
                    .app_data(login_json_config())
                    .route(web::post().to(login)),
            )
            .app_data(email_client.clone())
            .app_data(credential_store.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
