use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::leet::leet;

/// Placeholder keys resolvable against a [`UserRecord`].
///
/// Lowercase keys resolve to normalized base fields, `CamelCase` keys to the
/// capitalized variants, and `*Leet` keys to the transliterated variants.
pub const PLACEHOLDER_KEYS: &[&str] = &[
    "firstName",
    "lastName",
    "birthYear",
    "birthMonth",
    "birthDay",
    "petName",
    "favoriteNumber",
    "hobby",
    "city",
    "partnerName",
    "FirstName",
    "LastName",
    "PetName",
    "City",
    "Hobby",
    "PartnerName",
    "firstNameLeet",
    "lastNameLeet",
];

/// Date formats accepted for `birth_date`, tried in order.
const BIRTH_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d-%m-%Y", "%m/%d/%Y", "%d/%m/%Y", "%Y/%m/%d"];

/// Raw personal facts as supplied by the host surface (form, flags, file).
///
/// All fields are optional free-form text; normalization happens when the
/// profile is turned into a [`UserRecord`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Birth date, accepted in a handful of common formats (ISO first).
    pub birth_date: Option<String>,
    pub pet_name: Option<String>,
    pub favorite_number: Option<String>,
    pub hobby: Option<String>,
    pub city: Option<String>,
    pub partner_name: Option<String>,
}

/// Normalized record for one generation request.
///
/// Base fields are trimmed and lowercased; derived fields (capitalized and
/// leet variants) are computed once at construction and never mutated, so
/// they stay pure functions of the base fields for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserRecord {
    first_name: String,
    last_name: String,
    pet_name: String,
    hobby: String,
    city: String,
    partner_name: String,
    favorite_number: String,
    birth_year: String,
    birth_month: String,
    birth_day: String,
    first_name_cap: String,
    last_name_cap: String,
    pet_name_cap: String,
    city_cap: String,
    hobby_cap: String,
    partner_name_cap: String,
    first_name_leet: String,
    last_name_leet: String,
}

impl UserRecord {
    /// Builds a normalized record from a raw profile.
    ///
    /// Fails only when a birth date is present but matches none of the
    /// accepted formats; every other field degrades to empty.
    pub fn from_profile(profile: &Profile) -> Result<Self> {
        let first_name = normalize(profile.first_name.as_deref());
        let last_name = normalize(profile.last_name.as_deref());
        let pet_name = normalize(profile.pet_name.as_deref());
        let hobby = normalize(profile.hobby.as_deref());
        let city = normalize(profile.city.as_deref());
        let partner_name = normalize(profile.partner_name.as_deref());
        let favorite_number = profile
            .favorite_number
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        let (birth_year, birth_month, birth_day) = match profile.birth_date.as_deref() {
            Some(raw) if !raw.trim().is_empty() => {
                let date = parse_birth_date(raw.trim())?;
                (
                    date.year().to_string(),
                    format!("{:02}", date.month()),
                    format!("{:02}", date.day()),
                )
            }
            _ => (String::new(), String::new(), String::new()),
        };

        let first_name_cap = capitalize(&first_name);
        let last_name_cap = capitalize(&last_name);
        let pet_name_cap = capitalize(&pet_name);
        let city_cap = capitalize(&city);
        let hobby_cap = capitalize(&hobby);
        let partner_name_cap = capitalize(&partner_name);
        let first_name_leet = leet(&first_name);
        let last_name_leet = leet(&last_name);

        Ok(Self {
            first_name,
            last_name,
            pet_name,
            hobby,
            city,
            partner_name,
            favorite_number,
            birth_year,
            birth_month,
            birth_day,
            first_name_cap,
            last_name_cap,
            pet_name_cap,
            city_cap,
            hobby_cap,
            partner_name_cap,
            first_name_leet,
            last_name_leet,
        })
    }

    /// Resolves a placeholder key to its value.
    ///
    /// Returns `None` for unknown keys and for fields that are empty, so
    /// callers can treat "missing" and "blank" uniformly.
    pub fn placeholder(&self, key: &str) -> Option<&str> {
        let value = match key {
            "firstName" => &self.first_name,
            "lastName" => &self.last_name,
            "birthYear" => &self.birth_year,
            "birthMonth" => &self.birth_month,
            "birthDay" => &self.birth_day,
            "petName" => &self.pet_name,
            "favoriteNumber" => &self.favorite_number,
            "hobby" => &self.hobby,
            "city" => &self.city,
            "partnerName" => &self.partner_name,
            "FirstName" => &self.first_name_cap,
            "LastName" => &self.last_name_cap,
            "PetName" => &self.pet_name_cap,
            "City" => &self.city_cap,
            "Hobby" => &self.hobby_cap,
            "PartnerName" => &self.partner_name_cap,
            "firstNameLeet" => &self.first_name_leet,
            "lastNameLeet" => &self.last_name_leet,
            _ => return None,
        };
        if value.is_empty() {
            None
        } else {
            Some(value.as_str())
        }
    }

    /// Favorite number, if one was supplied.
    pub fn favorite_number(&self) -> Option<&str> {
        if self.favorite_number.is_empty() {
            None
        } else {
            Some(&self.favorite_number)
        }
    }

    /// Non-empty raw fragments usable by the fallback combinator.
    pub fn fragments(&self) -> Vec<&str> {
        [
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.pet_name.as_str(),
            self.hobby.as_str(),
            self.city.as_str(),
            self.partner_name.as_str(),
            self.birth_year.as_str(),
            self.favorite_number.as_str(),
        ]
        .into_iter()
        .filter(|fragment| !fragment.is_empty())
        .collect()
    }

    /// True when no base field carries a value.
    pub fn is_empty(&self) -> bool {
        self.fragments().is_empty()
            && self.birth_month.is_empty()
            && self.birth_day.is_empty()
    }
}

fn normalize(value: Option<&str>) -> String {
    value.map(str::trim).unwrap_or_default().to_lowercase()
}

fn parse_birth_date(raw: &str) -> Result<NaiveDate> {
    for format in BIRTH_DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(raw, format) {
            return Ok(date);
        }
    }
    Err(Error::InvalidProfile(format!(
        "unrecognized birth date '{raw}'"
    )))
}

/// Uppercases the first letter of `text`, leaving the rest untouched.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
