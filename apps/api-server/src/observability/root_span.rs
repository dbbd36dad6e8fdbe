//! Root span for `TracingLogger`, tagged with the echoed `X-Request-ID`.
//!
//! `tracing-actix-web` always records its own generated `request_id`;
//! `x_request_id` carries the value the client sees, so both land on the
//! same span. Requires `RequestIdMiddleware` to run outside `TracingLogger`.

use actix_web::{
    Error, HttpMessage,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
};
use tracing::Span;
use tracing_actix_web::{DefaultRootSpanBuilder, RootSpanBuilder};

use super::RequestId;

pub struct QuillRootSpanBuilder;

impl RootSpanBuilder for QuillRootSpanBuilder {
    fn on_request_start(request: &ServiceRequest) -> Span {
        let x_request_id = request
            .extensions()
            .get::<RequestId>()
            .map(|id| id.0.clone())
            .unwrap_or_default();

        tracing_actix_web::root_span!(request, x_request_id = %x_request_id)
    }

    fn on_request_end<B: MessageBody>(span: Span, outcome: &Result<ServiceResponse<B>, Error>) {
        DefaultRootSpanBuilder::on_request_end(span, outcome);
    }
}

#[cfg(test)]
mod tests {
    use std::fmt;
    use std::sync::{Arc, Mutex};

    use actix_web::{App, HttpResponse, test, web};
    use tracing::field::{Field, Visit};
    use tracing::Subscriber;
    use tracing::span::{Attributes, Id};
    use tracing_actix_web::TracingLogger;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    use super::*;
    use crate::observability::RequestIdMiddleware;

    /// Records every span field as `(name, value)`.
    #[derive(Clone, Default)]
    struct SpanFields(Arc<Mutex<Vec<(String, String)>>>);

    impl Visit for SpanFields {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.0
                .lock()
                .unwrap()
                .push((field.name().to_string(), format!("{value:?}")));
        }
    }

    impl<S: Subscriber> Layer<S> for SpanFields {
        fn on_new_span(&self, attrs: &Attributes<'_>, _id: &Id, _ctx: Context<'_, S>) {
            attrs.record(&mut self.clone());
        }
    }

    #[actix_web::test]
    async fn test_root_span_carries_echoed_request_id() {
        let fields = SpanFields::default();
        let subscriber = tracing_subscriber::registry().with(fields.clone());
        let _guard = tracing::subscriber::set_default(subscriber);

        let app = test::init_service(
            App::new()
                .wrap(TracingLogger::<QuillRootSpanBuilder>::new())
                .wrap(RequestIdMiddleware)
                .route("/", web::get().to(|| async { HttpResponse::Ok().finish() })),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/")
            .insert_header(("X-Request-ID", "abc-123"))
            .to_request();
        test::call_service(&app, req).await;

        let recorded = fields.0.lock().unwrap();
        assert!(
            recorded
                .iter()
                .any(|(name, value)| name == "x_request_id" && value == "abc-123"),
            "recorded fields: {recorded:?}"
        );
    }
}
