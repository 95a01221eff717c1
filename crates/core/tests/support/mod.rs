//! Shared test helpers for `formguest-core` integration tests.
//!
//! In-memory fakes for every port so the tests can focus on behaviour instead
//! of boilerplate. Each fake records the calls that matter for assertions.

#![allow(dead_code)]

pub mod calendar;
pub mod forms;
pub mod properties;
pub mod triggers;

use std::sync::Arc;

use chrono::{DateTime, TimeZone, Utc};
use formguest_core::{
    CalendarDirectory, ConfigurationManager, EventResolver, FixedClock, SubmissionHandler,
    TriggerDispatcher,
};

pub use calendar::FakeCalendarPlatform;
pub use forms::FakeFormPlatform;
pub use properties::InMemoryPropertiesStore;
pub use triggers::InMemoryTriggerRegistry;

/// 2026-03-01 09:00 UTC, a Sunday.
pub fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap()
}

/// All fakes plus the services built on top of them.
pub struct Harness {
    pub calendar: FakeCalendarPlatform,
    pub form: FakeFormPlatform,
    pub properties: InMemoryPropertiesStore,
    pub triggers: InMemoryTriggerRegistry,
    pub directory: CalendarDirectory,
    pub resolver: EventResolver,
    pub manager: ConfigurationManager,
    pub handler: SubmissionHandler,
    pub dispatcher: TriggerDispatcher,
}

impl Harness {
    pub fn new(calendar: FakeCalendarPlatform) -> Self {
        let form = FakeFormPlatform::default();
        let properties = InMemoryPropertiesStore::default();
        let triggers = InMemoryTriggerRegistry::default();

        let directory = CalendarDirectory::new(Arc::new(calendar.clone()));
        let resolver = EventResolver::new(
            Arc::new(calendar.clone()),
            Arc::new(FixedClock(now())),
            chrono_tz::UTC,
        );
        let manager = ConfigurationManager::new(
            Arc::new(properties.clone()),
            Arc::new(triggers.clone()),
            Arc::new(form.clone()),
            directory.clone(),
            resolver.clone(),
        );
        let handler =
            SubmissionHandler::new(Arc::new(properties.clone()), Arc::new(calendar.clone()));
        let dispatcher = TriggerDispatcher::new(Arc::new(triggers.clone()), handler.clone());

        Self { calendar, form, properties, triggers, directory, resolver, manager, handler, dispatcher }
    }
}
