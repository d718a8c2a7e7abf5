use fake::Fake;
use fake::faker::address::raw::{
    BuildingNumber, CityName, CountryName, StateAbbr, StreetName, ZipCode,
};
use fake::faker::company::raw::CatchPhrase;
use fake::faker::internet::raw::FreeEmail;
use fake::faker::name::raw::{FirstName, LastName};
use fake::faker::phone_number::raw::PhoneNumber;
use fake::locales::{EN, PT_BR};
use rand::Rng;

use crate::errors::GenerationError;
use crate::faker_rs::locales::LocaleKey;
use crate::faker_rs::text;

/// Draws a `String` from a raw `fake` faker in the given locale.
macro_rules! localized {
    ($locale:expr, $rng:expr, $faker:ident $(, $arg:expr)*) => {
        match $locale {
            LocaleKey::EnUs => $faker(EN $(, $arg)*).fake_with_rng::<String, _>($rng),
            LocaleKey::PtBr => $faker(PT_BR $(, $arg)*).fake_with_rng::<String, _>($rng),
        }
    };
}

pub(crate) use localized;

/// Fake value source mixing several locales.
///
/// Every value picks one of the configured locales uniformly, so a single
/// record may combine names and addresses from different locales.
#[derive(Debug, Clone)]
pub struct FakeRsAdapter {
    locales: Vec<LocaleKey>,
}

impl FakeRsAdapter {
    pub fn new(locales: &[LocaleKey]) -> Result<Self, GenerationError> {
        if locales.is_empty() {
            return Err(GenerationError::InvalidOptions(
                "at least one faker locale is required".to_string(),
            ));
        }
        Ok(Self {
            locales: locales.to_vec(),
        })
    }

    fn locale<R: Rng + ?Sized>(&self, rng: &mut R) -> LocaleKey {
        if self.locales.len() == 1 {
            return self.locales[0];
        }
        self.locales[rng.random_range(0..self.locales.len())]
    }

    pub fn first_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, FirstName)
    }

    pub fn last_name<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, LastName)
    }

    pub fn email<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, FreeEmail)
    }

    pub fn phone<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, PhoneNumber)
    }

    pub fn city<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, CityName)
    }

    pub fn country<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, CountryName)
    }

    pub fn catch_phrase<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        localized!(self.locale(rng), rng, CatchPhrase)
    }

    /// Postal address flattened to one line (`street, city, state zip`).
    pub fn address<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        let locale = self.locale(rng);
        let building = localized!(locale, rng, BuildingNumber);
        let street = localized!(locale, rng, StreetName);
        let city = localized!(locale, rng, CityName);
        let state = localized!(locale, rng, StateAbbr);
        let zip = localized!(locale, rng, ZipCode);
        flatten_lines(&format!("{building} {street}\n{city}, {state} {zip}"))
    }

    /// Lorem text of at most `max_chars` characters.
    pub fn text<R: Rng + ?Sized>(&self, max_chars: usize, rng: &mut R) -> String {
        let locale = self.locale(rng);
        text::bounded_text(locale, max_chars, rng)
    }
}

fn flatten_lines(value: &str) -> String {
    value
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}
