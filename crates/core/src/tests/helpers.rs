// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::io;
use std::sync::{Arc, Mutex};

use bookit_domain::{
    Booking, BookingReference, BookingRequest, RandomReferenceGenerator, ReferenceGenerator, Slot,
};

use crate::{
    BookingEngine, BookingStore, CatalogSeed, EngineConfig, InMemoryBookingStore,
    StaticCatalog, StaticPromoDirectory, StoreError,
};

pub type TestEngine<S, G> = BookingEngine<StaticCatalog, StaticPromoDirectory, S, G>;

/// Hands out a fixed list of references, repeating the last one forever.
pub struct SequenceReferenceGenerator {
    references: Vec<BookingReference>,
    next: usize,
}

impl SequenceReferenceGenerator {
    pub fn new(references: &[&str]) -> Self {
        Self {
            references: references
                .iter()
                .map(|r| BookingReference::parse(r).unwrap())
                .collect(),
            next: 0,
        }
    }
}

impl ReferenceGenerator for SequenceReferenceGenerator {
    fn generate(&mut self) -> BookingReference {
        let index: usize = self.next.min(self.references.len() - 1);
        self.next += 1;
        self.references[index].clone()
    }
}

/// A store whose every operation times out.
pub struct UnavailableStore;

impl BookingStore for UnavailableStore {
    fn is_slot_taken(&mut self, _slot: &Slot) -> Result<bool, StoreError> {
        Err(StoreError::Unavailable(String::from("timed out")))
    }

    fn insert_booking(&mut self, _booking: &Booking) -> Result<(), StoreError> {
        Err(StoreError::Unavailable(String::from("timed out")))
    }

    fn find_booking(
        &mut self,
        _reference: &BookingReference,
    ) -> Result<Option<Booking>, StoreError> {
        Err(StoreError::Unavailable(String::from("timed out")))
    }

    fn booked_slots(&mut self, _experience_id: &str) -> Result<Vec<Slot>, StoreError> {
        Err(StoreError::Unavailable(String::from("timed out")))
    }
}

/// A store that reports every slot as free but rejects every insert as
/// taken, as when a concurrent writer wins between check and insert.
pub struct RacingStore;

impl BookingStore for RacingStore {
    fn is_slot_taken(&mut self, _slot: &Slot) -> Result<bool, StoreError> {
        Ok(false)
    }

    fn insert_booking(&mut self, _booking: &Booking) -> Result<(), StoreError> {
        Err(StoreError::SlotTaken)
    }

    fn find_booking(
        &mut self,
        _reference: &BookingReference,
    ) -> Result<Option<Booking>, StoreError> {
        Ok(None)
    }

    fn booked_slots(&mut self, _experience_id: &str) -> Result<Vec<Slot>, StoreError> {
        Ok(Vec::new())
    }
}

pub fn create_engine_with<S: BookingStore, G: ReferenceGenerator>(
    store: S,
    generator: G,
) -> TestEngine<S, G> {
    let (catalog, promos): (StaticCatalog, StaticPromoDirectory) =
        CatalogSeed::builtin().into_parts();
    BookingEngine::new(catalog, promos, store, generator, EngineConfig::default())
}

pub fn create_test_engine() -> TestEngine<InMemoryBookingStore, RandomReferenceGenerator> {
    create_engine_with(InMemoryBookingStore::new(), RandomReferenceGenerator)
}

pub fn create_test_request(experience_id: &str, date: &str, time: &str) -> BookingRequest {
    BookingRequest {
        experience_id: experience_id.to_string(),
        date: date.to_string(),
        time: time.to_string(),
        full_name: String::from("Asha Rao"),
        email: String::from("asha@example.com"),
        promo_code: None,
        total_amount: None,
    }
}

pub fn is_reference_shaped(value: &str) -> bool {
    value.strip_prefix("REF-").is_some_and(|token| {
        token.len() >= 6
            && token
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    })
}

/// An in-memory log sink for a `tracing_subscriber::fmt` subscriber.
#[derive(Clone, Default)]
pub struct CapturedLog(Arc<Mutex<Vec<u8>>>);

impl CapturedLog {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for CapturedLog {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` with every event at every level written to `log`.
pub fn with_captured_log<T>(log: &CapturedLog, f: impl FnOnce() -> T) -> T {
    let writer: CapturedLog = log.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f)
}
