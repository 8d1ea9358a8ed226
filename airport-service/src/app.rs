use std::{
    convert::Infallible,
    net::SocketAddr,
    sync::Arc,
    task::{Context, Poll},
};

use axum_core::body::Body;
use axum_server::tls_rustls::RustlsConfig;
use futures::future::BoxFuture;
use meltdown::Token;
use telemetry::{make_span::SpanFactory, request_id::MakeRequestId};
use tower::{ServiceBuilder, make::Shared, util::BoxCloneService};
use tower_http::{
    ServiceBuilderExt, catch_panic::CatchPanicLayer,
    normalize_path::NormalizePathLayer, trace::TraceLayer,
};
use tracing::{Level, info};

use crate::{
    app_state::{AppState, InnerAppState},
    cli,
    config::{Config, server::TlsConfig},
    endpoints,
    error::{init::InitError, runtime::RuntimeError},
    store::{object_store::ObjectStore, registry::AirportRegistry},
    utils::{catch_panic::PanicResponder, health_check::HealthCheckLayer},
};

pub type AppResponseBody = tower_http::body::UnsyncBoxBody<
    bytes::Bytes,
    Box<
        dyn std::error::Error
            + std::marker::Send
            + std::marker::Sync
            + 'static,
    >,
>;
pub type AppResponse = http::Response<AppResponseBody>;

pub type BoxedServiceStack =
    BoxCloneService<http::Request<Body>, AppResponse, Infallible>;

/// The top level app used to start the server.
/// The middleware stack is as follows:
/// 0. `CatchPanic`
/// 1. `SetRequestId`, generates `x-request-id` if the client sent none
/// 2. `Trace`, one span per request carrying the request id
/// 3. `PropagateRequestId`, copies `x-request-id` onto the response
/// 4. `NormalizePath`, trims trailing slashes
/// 5. `HealthCheck`, answers `GET /`
/// 6. The axum router with the airport endpoints
#[derive(Clone)]
pub struct App {
    pub state: AppState,
    pub service_stack: BoxedServiceStack,
}

impl tower::Service<http::Request<Body>> for App {
    type Response = AppResponse;
    type Error = Infallible;
    type Future = BoxFuture<'static, Result<Self::Response, Self::Error>>;

    #[inline]
    fn poll_ready(
        &mut self,
        ctx: &mut Context<'_>,
    ) -> Poll<Result<(), Self::Error>> {
        self.service_stack.poll_ready(ctx)
    }

    #[inline]
    fn call(&mut self, req: http::Request<Body>) -> Self::Future {
        tracing::trace!(uri = %req.uri(), method = %req.method(), version = ?req.version(), "app received request");
        self.service_stack.call(req)
    }
}

impl App {
    pub fn new(config: Config) -> Result<Self, InitError> {
        tracing::debug!("creating app");
        let state = Self::build_app_state(config)?;
        let service_stack = Self::build_service_stack(state.clone());
        Ok(Self {
            state,
            service_stack,
        })
    }

    /// Builds the object-store client and seeds the registry. A bad storage
    /// config fails here, at startup, never inside a request.
    fn build_app_state(config: Config) -> Result<AppState, InitError> {
        let object_store = ObjectStore::new(&config.storage, &config.upload)?;
        let registry = AirportRegistry::default();
        Ok(AppState(Arc::new(InnerAppState {
            config,
            registry,
            object_store,
        })))
    }

    fn build_service_stack(app_state: AppState) -> BoxedServiceStack {
        let router = endpoints::router(app_state);

        let service_stack = ServiceBuilder::new()
            .layer(CatchPanicLayer::custom(PanicResponder))
            .set_x_request_id(MakeRequestId)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(SpanFactory::new(Level::INFO))
                    .on_body_chunk(())
                    .on_eos(()),
            )
            .propagate_x_request_id()
            .layer(NormalizePathLayer::trim_trailing_slash())
            .layer(HealthCheckLayer::<Body, Infallible>::new())
            .service(router);

        BoxCloneService::new(service_stack)
    }
}

impl meltdown::Service for App {
    type Future = BoxFuture<'static, Result<(), RuntimeError>>;

    fn run(self, token: Token) -> Self::Future {
        Box::pin(async move {
            let app_state = self.state.clone();
            let config = app_state.config();
            let addr =
                SocketAddr::from((config.server.address, config.server.port));
            info!(address = %addr, tls = %config.server.tls, "server starting");

            let handle = axum_server::Handle::new();
            let make_service = Shared::new(
                ServiceBuilder::new()
                    .map_request(|req: http::Request<hyper::body::Incoming>| {
                        req.map(Body::new)
                    })
                    .service(self),
            );
            cli::helpers::show_welcome_banner(&addr);

            match &config.server.tls {
                TlsConfig::Enabled { cert, key } => {
                    let tls_config =
                        RustlsConfig::from_pem_file(cert.clone(), key.clone())
                            .await
                            .map_err(InitError::Tls)?;

                    tokio::select! {
                        biased;
                        server_output = axum_server::bind_rustls(addr, tls_config)
                            .handle(handle.clone())
                            .serve(make_service) => server_output.map_err(RuntimeError::Serve)?,
                        () = token => {
                            handle.graceful_shutdown(Some(config.server.shutdown_timeout));
                        }
                    };
                }
                TlsConfig::Disabled => {
                    tokio::select! {
                        biased;
                        server_output = axum_server::bind(addr)
                            .handle(handle.clone())
                            .serve(make_service) => server_output.map_err(RuntimeError::Serve)?,
                        () = token => {
                            handle.graceful_shutdown(Some(config.server.shutdown_timeout));
                        }
                    };
                }
            }
            Ok(())
        })
    }
}
