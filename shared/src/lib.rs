use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

pub mod invoice;

/// A sellable tour product. The remote service owns package lifetimes; the
/// client only ever holds transient copies of what it fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Package {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub description: String,
    /// Unit price per traveler, in dollars.
    pub price: f64,
    pub image_url: String,
    /// Available travel dates as the server returns them (ISO 8601 strings).
    #[serde(default)]
    pub available_dates: Vec<String>,
    #[serde(default = "default_max_travelers")]
    pub max_travelers: u32,
}

fn default_max_travelers() -> u32 {
    50
}

/// What the customer has typed into the booking form. Lives only for the
/// duration of one booking session on the detail screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingFormInput {
    pub customer_name: String,
    pub email: String,
    pub phone_number: String,
    pub number_of_travelers: i32,
    pub special_requests: String,
}

impl Default for BookingFormInput {
    fn default() -> Self {
        Self {
            customer_name: String::new(),
            email: String::new(),
            phone_number: String::new(),
            number_of_travelers: 1,
            special_requests: String::new(),
        }
    }
}

/// Booking submission payload for `POST /bookings`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub package_id: String,
    pub customer_name: String,
    pub email: String,
    pub phone_number: String,
    pub number_of_travelers: i32,
    pub special_requests: String,
}

/// The server reports the new booking id either at the top level or nested
/// under `booking`, depending on the endpoint version. Accept both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateBookingResponse {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(default)]
    pub booking: Option<BookingRef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRef {
    #[serde(rename = "_id")]
    pub id: String,
}

impl CreateBookingResponse {
    pub fn booking_id(&self) -> Option<String> {
        self.id
            .clone()
            .or_else(|| self.booking.as_ref().map(|b| b.id.clone()))
    }
}

/// Admin credentials for `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Create/update payload for the admin package endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageUpsertRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
    pub image_url: String,
    pub available_dates: Vec<String>,
    pub max_travelers: u32,
}

/// The completed booking handed to the invoice screen. Constructed once
/// after a successful booking call and read-only from then on.
///
/// `total_price` is carried for completeness; anything that displays a
/// financial summary recomputes `price * travelers` instead of trusting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: Option<String>,
    pub customer_name: String,
    pub customer_email: String,
    pub package: Package,
    pub travelers: i32,
    pub travel_date: String,
    pub total_price: f64,
}

/// Booking form fields that validation can report against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BookingField {
    CustomerName,
    Email,
    PhoneNumber,
    NumberOfTravelers,
}

/// Field-scoped validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingValidationError {
    RequiredField,
    InvalidFormat,
    OutOfRange,
}

/// Result of one validation pass over the booking form. A field appears in
/// `errors` iff its current value fails; the set is rebuilt wholesale on
/// every pass, never merged with a previous one.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingValidation {
    pub is_valid: bool,
    pub errors: BTreeMap<BookingField, BookingValidationError>,
}

impl Default for BookingValidation {
    fn default() -> Self {
        Self {
            is_valid: true,
            errors: BTreeMap::new(),
        }
    }
}

impl BookingValidation {
    /// Inline message for a failing field, or `None` if the field passed.
    pub fn field_message(&self, field: BookingField) -> Option<&'static str> {
        self.errors.get(&field).map(|_| match field {
            BookingField::CustomerName => "Name is required",
            BookingField::Email => "Please enter a valid email address",
            BookingField::PhoneNumber => "Phone number must be 10 digits",
            BookingField::NumberOfTravelers => "At least 1 traveler is required",
        })
    }

    /// All failure messages combined into the single notification the
    /// booking screen shows alongside the inline field errors.
    pub fn summary(&self) -> String {
        self.errors
            .keys()
            .map(|field| match field {
                BookingField::CustomerName => "Please provide a valid name",
                BookingField::Email => "Invalid email format",
                BookingField::PhoneNumber => "Phone number must be exactly 10 digits",
                BookingField::NumberOfTravelers => "Minimum 1 traveler required",
            })
            .collect::<Vec<_>>()
            .join(" | ")
    }

    /// Drop a single field's error, used when the customer edits that field.
    pub fn clear_field(&mut self, field: BookingField) {
        self.errors.remove(&field);
        self.is_valid = self.errors.is_empty();
    }
}

/// Check every booking rule and produce a fresh error set. Rules are
/// independent; none short-circuits the others.
pub fn validate_booking(input: &BookingFormInput) -> BookingValidation {
    let mut errors = BTreeMap::new();

    if input.customer_name.trim().is_empty() {
        errors.insert(
            BookingField::CustomerName,
            BookingValidationError::RequiredField,
        );
    }

    if !is_valid_email(&input.email) {
        errors.insert(BookingField::Email, BookingValidationError::InvalidFormat);
    }

    if !is_valid_phone_number(&input.phone_number) {
        errors.insert(
            BookingField::PhoneNumber,
            BookingValidationError::InvalidFormat,
        );
    }

    if input.number_of_travelers < 1 {
        errors.insert(
            BookingField::NumberOfTravelers,
            BookingValidationError::OutOfRange,
        );
    }

    BookingValidation {
        is_valid: errors.is_empty(),
        errors,
    }
}

/// `local@domain.tld` shape: at least one non-space, non-`@` character
/// before the `@`, and a domain containing a dot with non-empty pieces on
/// both sides.
pub fn is_valid_email(email: &str) -> bool {
    fn plain_chunk(s: &str) -> bool {
        !s.is_empty() && !s.chars().any(|c| c.is_whitespace() || c == '@')
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    plain_chunk(local) && plain_chunk(host) && plain_chunk(tld)
}

/// Exactly 10 decimal digits, nothing else.
pub fn is_valid_phone_number(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

/// Split a comma/whitespace-separated string of dates into ISO `YYYY-MM-DD`
/// values. Tokens that do not parse as calendar dates are dropped silently.
pub fn parse_date_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| NaiveDate::parse_from_str(token, "%Y-%m-%d").ok())
        .map(|date| date.format("%Y-%m-%d").to_string())
        .collect()
}

/// Join stored dates back into the admin form's text representation,
/// trimming any time component the server may have attached.
pub fn format_date_list(dates: &[String]) -> String {
    dates
        .iter()
        .map(|date| date.split('T').next().unwrap_or(date))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Dollar amount with exactly two decimal places.
pub fn format_money(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> BookingFormInput {
        BookingFormInput {
            customer_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone_number: "1234567890".to_string(),
            number_of_travelers: 2,
            special_requests: String::new(),
        }
    }

    #[test]
    fn test_valid_input_passes() {
        let result = validate_booking(&valid_input());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert_eq!(result.summary(), "");
    }

    #[test]
    fn test_empty_name_is_required_field() {
        for name in ["", "   ", "\t\n"] {
            let mut input = valid_input();
            input.customer_name = name.to_string();
            let result = validate_booking(&input);
            assert!(!result.is_valid);
            assert_eq!(
                result.errors.get(&BookingField::CustomerName),
                Some(&BookingValidationError::RequiredField)
            );
            assert_eq!(
                result.field_message(BookingField::CustomerName),
                Some("Name is required")
            );
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last@sub.domain.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("abc"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@b."));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_invalid_email_reports_invalid_format() {
        let mut input = valid_input();
        input.email = "a@b".to_string();
        let result = validate_booking(&input);
        assert_eq!(
            result.errors.get(&BookingField::Email),
            Some(&BookingValidationError::InvalidFormat)
        );
    }

    #[test]
    fn test_phone_number_is_exactly_ten_digits() {
        assert!(is_valid_phone_number("1234567890"));
        assert!(!is_valid_phone_number("123"));
        assert!(!is_valid_phone_number("12345678901"));
        assert!(!is_valid_phone_number("123-456-7890"));
        assert!(!is_valid_phone_number("123456789a"));
        assert!(!is_valid_phone_number(""));
    }

    #[test]
    fn test_traveler_count_lower_bound() {
        let mut input = valid_input();
        input.number_of_travelers = 0;
        let result = validate_booking(&input);
        assert_eq!(
            result.errors.get(&BookingField::NumberOfTravelers),
            Some(&BookingValidationError::OutOfRange)
        );

        input.number_of_travelers = 1;
        assert!(validate_booking(&input).is_valid);
    }

    #[test]
    fn test_all_rules_checked_in_one_pass() {
        let input = BookingFormInput {
            customer_name: "  ".to_string(),
            email: "nope".to_string(),
            phone_number: "123".to_string(),
            number_of_travelers: 0,
            special_requests: String::new(),
        };
        let result = validate_booking(&input);
        assert_eq!(result.errors.len(), 4);
        assert_eq!(
            result.summary(),
            "Please provide a valid name | Invalid email format | \
             Phone number must be exactly 10 digits | Minimum 1 traveler required"
        );
    }

    #[test]
    fn test_error_set_is_recomputed_not_merged() {
        let mut input = valid_input();
        input.email = "broken".to_string();
        let first = validate_booking(&input);
        assert!(first.errors.contains_key(&BookingField::Email));

        input.email = "fixed@example.com".to_string();
        input.phone_number = "123".to_string();
        let second = validate_booking(&input);
        assert!(!second.errors.contains_key(&BookingField::Email));
        assert!(second.errors.contains_key(&BookingField::PhoneNumber));
    }

    #[test]
    fn test_clear_field_restores_validity() {
        let mut input = valid_input();
        input.phone_number = "123".to_string();
        let mut result = validate_booking(&input);
        assert!(!result.is_valid);

        result.clear_field(BookingField::PhoneNumber);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_parse_date_list_drops_unparsable_tokens() {
        let dates = parse_date_list("2024-07-15, 2024-08-20 notadate");
        assert_eq!(dates, vec!["2024-07-15", "2024-08-20"]);
    }

    #[test]
    fn test_parse_date_list_mixed_separators() {
        let dates = parse_date_list("2024-07-15,2024-08-20,  2024-09-01");
        assert_eq!(dates.len(), 3);
        assert!(parse_date_list("").is_empty());
        assert!(parse_date_list(" , ,, ").is_empty());
        // 2023 was not a leap year
        assert!(parse_date_list("2023-02-29").is_empty());
    }

    #[test]
    fn test_format_date_list_trims_time_component() {
        let dates = vec![
            "2024-07-15T00:00:00.000Z".to_string(),
            "2024-08-20".to_string(),
        ];
        assert_eq!(format_date_list(&dates), "2024-07-15 2024-08-20");
    }

    #[test]
    fn test_format_money_two_decimals() {
        assert_eq!(format_money(100.0), "$100.00");
        assert_eq!(format_money(99.999), "$100.00");
        assert_eq!(format_money(0.5), "$0.50");
    }

    #[test]
    fn test_booking_response_id_fallbacks() {
        let flat: CreateBookingResponse =
            serde_json::from_str(r#"{"_id": "abc123"}"#).unwrap();
        assert_eq!(flat.booking_id().as_deref(), Some("abc123"));

        let nested: CreateBookingResponse =
            serde_json::from_str(r#"{"booking": {"_id": "def456"}}"#).unwrap();
        assert_eq!(nested.booking_id().as_deref(), Some("def456"));

        let neither: CreateBookingResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(neither.booking_id(), None);
    }

    #[test]
    fn test_package_wire_names() {
        let json = r#"{
            "_id": "64f3a9b1c2d3e4f5a6b7c8d9",
            "title": "Alpine Trek",
            "description": "Five days in the mountains",
            "price": 499.5,
            "imageUrl": "https://example.com/alps.jpg",
            "availableDates": ["2024-07-15"],
            "maxTravelers": 12
        }"#;
        let package: Package = serde_json::from_str(json).unwrap();
        assert_eq!(package.id, "64f3a9b1c2d3e4f5a6b7c8d9");
        assert_eq!(package.image_url, "https://example.com/alps.jpg");
        assert_eq!(package.max_travelers, 12);

        let round_trip = serde_json::to_string(&package).unwrap();
        assert!(round_trip.contains("\"imageUrl\""));
        assert!(round_trip.contains("\"_id\""));
    }

    #[test]
    fn test_package_defaults_for_missing_fields() {
        let json = r#"{
            "_id": "1",
            "title": "T",
            "description": "D",
            "price": 1.0,
            "imageUrl": ""
        }"#;
        let package: Package = serde_json::from_str(json).unwrap();
        assert!(package.available_dates.is_empty());
        assert_eq!(package.max_travelers, 50);
    }
}
