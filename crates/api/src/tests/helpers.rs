// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use bookit::{
    BookingEngine, CatalogSeed, EngineConfig, InMemoryBookingStore, StaticCatalog,
    StaticPromoDirectory,
};
use bookit_domain::RandomReferenceGenerator;

use crate::CreateBookingRequest;

pub type TestEngine = BookingEngine<
    StaticCatalog,
    StaticPromoDirectory,
    InMemoryBookingStore,
    RandomReferenceGenerator,
>;

pub fn create_test_engine() -> TestEngine {
    let (catalog, promos): (StaticCatalog, StaticPromoDirectory) =
        CatalogSeed::builtin().into_parts();
    BookingEngine::new(
        catalog,
        promos,
        InMemoryBookingStore::new(),
        RandomReferenceGenerator,
        EngineConfig::default(),
    )
}

pub fn create_valid_request() -> CreateBookingRequest {
    CreateBookingRequest {
        experience_id: String::from("1"),
        date: String::from("Oct 22"),
        time: String::from("09:00 am"),
        full_name: String::from("Asha Rao"),
        email: String::from("asha@example.com"),
        promo_code: None,
        total_amount: Some(998),
    }
}
