//! Serde support.
//!
//! Dates and datetimes are written as canonical text and must name a real
//! date when read back. Epoch times and spans are written as their signed
//! nanosecond counts.

use core::fmt;
use core::marker::PhantomData;
use core::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};

use crate::*;

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor::<Self>::new("a date as YYYY-MM-DD"))
    }
}

impl Serialize for CalendarDateTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDateTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(TextVisitor::<Self>::new(
            "a datetime as YYYY-MM-DDTHH:MM:SS[.fffffffff][Z]",
        ))
    }
}

impl Serialize for EpochTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.ns)
    }
}

impl<'de> Deserialize<'de> for EpochTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(EpochTime::from_nanos)
    }
}

impl Serialize for Span {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.ns)
    }
}

impl<'de> Deserialize<'de> for Span {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        i64::deserialize(deserializer).map(Span::from_nanos)
    }
}

struct TextVisitor<T> {
    expecting: &'static str,
    _type: PhantomData<T>,
}

impl<T> TextVisitor<T> {
    fn new(expecting: &'static str) -> Self {
        Self {
            expecting,
            _type: PhantomData,
        }
    }
}

impl<'de, T> Visitor<'de> for TextVisitor<T>
where
    T: FromStr<Err = Error>,
{
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.expecting)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<T, E> {
        value.parse().map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text() {
        let dt = CalendarDateTime::new(2026, 2, 7, 10, 30, 15, 500_000_000);
        let json = serde_json::to_string(&dt).unwrap();
        assert_eq!(json, "\"2026-02-07T10:30:15.500000000Z\"");
        assert_eq!(serde_json::from_str::<CalendarDateTime>(&json).unwrap(), dt);

        let date = CalendarDate::new(2024, 2, 29);
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2024-02-29\"");
        assert_eq!(serde_json::from_str::<CalendarDate>(&json).unwrap(), date);
    }

    #[test]
    fn invalid_text() {
        let err = serde_json::from_str::<CalendarDate>("\"2023-02-29\"").unwrap_err();
        assert!(err.to_string().contains("not a valid calendar date"));
        assert!(serde_json::from_str::<CalendarDateTime>("\"yesterday\"").is_err());
        assert!(serde_json::from_str::<CalendarDate>("20230228").is_err());
    }

    #[test]
    fn nanoseconds() {
        let t = EpochTime::from_nanos(-1);
        assert_eq!(serde_json::to_string(&t).unwrap(), "-1");
        assert_eq!(serde_json::from_str::<EpochTime>("-1").unwrap(), t);

        let s = Span::from_millis(3);
        assert_eq!(serde_json::to_string(&s).unwrap(), "3000000");
        assert_eq!(serde_json::from_str::<Span>("3000000").unwrap(), s);
    }
}
