//! Test helpers shared by the graphkit crates.
//!
//! [`crate::tracing`] captures spans and events for instrumentation assertions
//! and [`profile`] reads the environment overrides applied to property suites.

pub mod profile;

pub mod tracing {
    //! A [`Layer`] that records closed spans and emitted events.

    use std::collections::HashMap;
    use std::fmt;
    use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

    use tracing::field::{Field, Visit};
    use tracing::span::{Attributes, Id, Record};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Layer;
    use tracing_subscriber::layer::Context;
    use tracing_subscriber::registry::LookupSpan;

    /// Captures span and event metadata so tests can assert on it after the
    /// instrumented call returns.
    ///
    /// Clones share storage, so one clone can be installed in a subscriber
    /// while another is queried.
    ///
    /// # Examples
    /// ```
    /// use graphkit_test_support::tracing::RecordingLayer;
    /// use tracing_subscriber::layer::SubscriberExt;
    ///
    /// let layer = RecordingLayer::default();
    /// let subscriber = tracing_subscriber::registry().with(layer.clone());
    /// tracing::subscriber::with_default(subscriber, || {
    ///     tracing::info_span!("demo.span", answer = 42).in_scope(|| {});
    /// });
    /// let span = layer.span("demo.span").expect("span recorded");
    /// assert_eq!(span.field("answer"), Some("42"));
    /// ```
    #[derive(Clone, Default)]
    pub struct RecordingLayer {
        spans: Arc<Mutex<Vec<SpanRecord>>>,
        events: Arc<Mutex<Vec<EventRecord>>>,
    }

    fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
        mutex.lock().unwrap_or_else(PoisonError::into_inner)
    }

    impl RecordingLayer {
        /// Closed spans in completion order.
        #[must_use]
        pub fn spans(&self) -> Vec<SpanRecord> {
            lock(&self.spans).clone()
        }

        /// Events in emission order.
        #[must_use]
        pub fn events(&self) -> Vec<EventRecord> {
            lock(&self.events).clone()
        }

        /// Returns the first closed span called `name`.
        #[must_use]
        pub fn span(&self, name: &str) -> Option<SpanRecord> {
            lock(&self.spans)
                .iter()
                .find(|span| span.name == name)
                .cloned()
        }

        /// Returns the events whose `message` field equals `message`.
        #[must_use]
        pub fn events_with_message(&self, message: &str) -> Vec<EventRecord> {
            lock(&self.events)
                .iter()
                .filter(|event| event.field("message") == Some(message))
                .cloned()
                .collect()
        }
    }

    /// A closed span with the fields recorded on it.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct SpanRecord {
        /// Span name from its metadata.
        pub name: String,
        /// Field values rendered as strings.
        pub fields: HashMap<String, String>,
    }

    impl SpanRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    /// An emitted event.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct EventRecord {
        /// Event level.
        pub level: Level,
        /// Event target, usually the emitting module path.
        pub target: String,
        /// Name of the innermost span the event was emitted in.
        pub span: Option<String>,
        /// Field values rendered as strings, including `message`.
        pub fields: HashMap<String, String>,
    }

    impl EventRecord {
        /// Returns the rendered value of `name`, if recorded.
        #[must_use]
        pub fn field(&self, name: &str) -> Option<&str> {
            self.fields.get(name).map(String::as_str)
        }
    }

    struct OpenSpan(SpanRecord);

    impl<S> Layer<S> for RecordingLayer
    where
        S: Subscriber + for<'span> LookupSpan<'span>,
    {
        fn on_new_span(&self, attrs: &Attributes<'_>, id: &Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            let mut record = SpanRecord {
                name: attrs.metadata().name().to_owned(),
                fields: HashMap::new(),
            };
            attrs.record(&mut Fields(&mut record.fields));
            span.extensions_mut().insert(OpenSpan(record));
        }

        fn on_record(&self, id: &Id, values: &Record<'_>, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().get_mut::<OpenSpan>() {
                values.record(&mut Fields(&mut record.fields));
            }
        }

        fn on_close(&self, id: Id, ctx: Context<'_, S>) {
            let Some(span) = ctx.span(&id) else {
                return;
            };
            if let Some(OpenSpan(record)) = span.extensions_mut().remove::<OpenSpan>() {
                lock(&self.spans).push(record);
            }
        }

        fn on_event(&self, event: &Event<'_>, ctx: Context<'_, S>) {
            let mut fields = HashMap::new();
            event.record(&mut Fields(&mut fields));
            let span = ctx.event_span(event).map(|span| span.name().to_owned());
            lock(&self.events).push(EventRecord {
                level: *event.metadata().level(),
                target: event.metadata().target().to_owned(),
                span,
                fields,
            });
        }
    }

    struct Fields<'a>(&'a mut HashMap<String, String>);

    impl Fields<'_> {
        fn put(&mut self, field: &Field, value: String) {
            self.0.insert(field.name().to_owned(), value);
        }
    }

    impl Visit for Fields<'_> {
        fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
            self.put(field, format!("{value:?}"));
        }

        fn record_str(&mut self, field: &Field, value: &str) {
            self.put(field, value.to_owned());
        }

        fn record_error(&mut self, field: &Field, value: &(dyn std::error::Error + 'static)) {
            self.put(field, value.to_string());
        }

        fn record_bool(&mut self, field: &Field, value: bool) {
            self.put(field, value.to_string());
        }

        fn record_i64(&mut self, field: &Field, value: i64) {
            self.put(field, value.to_string());
        }

        fn record_u64(&mut self, field: &Field, value: u64) {
            self.put(field, value.to_string());
        }

        fn record_f64(&mut self, field: &Field, value: f64) {
            self.put(field, value.to_string());
        }
    }

}
