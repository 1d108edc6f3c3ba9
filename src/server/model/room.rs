//! Room domain models, the amenity tag set, and the availability search
//! criteria.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use entity::enums::{RoomKind, RoomStatus};
use rust_decimal::Decimal;

use crate::{
    model::room::{RoomDto, RoomKindDto, RoomSearchQuery, RoomStatusDto},
    server::{
        error::{internal::InternalError, AppError},
        model::booking::StayInterval,
        util::parse::{parse_amenity_list, parse_iso_date},
    },
};

impl From<RoomKind> for RoomKindDto {
    fn from(value: RoomKind) -> Self {
        match value {
            RoomKind::Single => Self::Single,
            RoomKind::Double => Self::Double,
            RoomKind::Suite => Self::Suite,
            RoomKind::Deluxe => Self::Deluxe,
        }
    }
}

impl From<RoomKindDto> for RoomKind {
    fn from(value: RoomKindDto) -> Self {
        match value {
            RoomKindDto::Single => Self::Single,
            RoomKindDto::Double => Self::Double,
            RoomKindDto::Suite => Self::Suite,
            RoomKindDto::Deluxe => Self::Deluxe,
        }
    }
}

impl From<RoomStatus> for RoomStatusDto {
    fn from(value: RoomStatus) -> Self {
        match value {
            RoomStatus::Available => Self::Available,
            RoomStatus::Occupied => Self::Occupied,
            RoomStatus::Maintenance => Self::Maintenance,
            RoomStatus::Cleaning => Self::Cleaning,
        }
    }
}

impl From<RoomStatusDto> for RoomStatus {
    fn from(value: RoomStatusDto) -> Self {
        match value {
            RoomStatusDto::Available => Self::Available,
            RoomStatusDto::Occupied => Self::Occupied,
            RoomStatusDto::Maintenance => Self::Maintenance,
            RoomStatusDto::Cleaning => Self::Cleaning,
        }
    }
}

/// Set of amenity tags attached to a room.
///
/// Stored as a JSON string array in a single text column. The set is
/// ordered (BTreeSet) so that the stored form is canonical: the same tags
/// always serialize to the same string regardless of input order. Tags are
/// trimmed on the way in and empty tags are dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AmenitySet(BTreeSet<String>);

impl AmenitySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            tags.into_iter()
                .map(|t| t.as_ref().trim().to_string())
                .filter(|t| !t.is_empty())
                .collect(),
        )
    }

    /// Decodes the stored column value. Fails with an internal error when
    /// the column does not hold a JSON string array; amenity data is only
    /// ever written through [`AmenitySet::to_storage`], so a decode failure
    /// means the row was written out-of-band.
    pub fn from_storage(raw: &str) -> Result<Self, InternalError> {
        let tags: Vec<String> =
            serde_json::from_str(raw).map_err(|source| InternalError::MalformedAmenities {
                value: raw.to_string(),
                source,
            })?;

        Ok(Self::from_tags(tags))
    }

    /// Canonical stored form: a JSON array of the tags in sorted order.
    pub fn to_storage(&self) -> String {
        serde_json::to_string(&self.0.iter().collect::<Vec<_>>())
            .unwrap_or_else(|_| "[]".to_string())
    }

    /// True when every tag of `required` is present in this set.
    pub fn contains_all(&self, required: &AmenitySet) -> bool {
        required.0.is_subset(&self.0)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0.into_iter().collect()
    }
}

/// Room catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub room_number: String,
    pub kind: RoomKind,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    pub amenities: AmenitySet,
    /// Administrative status maintained by staff; a second, independent
    /// availability layer on top of the booking-derived conflict check.
    pub status: RoomStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Room {
    /// Converts an entity row to the domain model, decoding the amenities
    /// column.
    pub fn from_entity(entity: entity::room::Model) -> Result<Self, AppError> {
        let amenities = AmenitySet::from_storage(&entity.amenities)?;

        Ok(Self {
            id: entity.id,
            room_number: entity.room_number,
            kind: entity.kind,
            price_per_night: entity.price_per_night,
            max_guests: entity.max_guests,
            description: entity.description,
            amenities,
            status: entity.status,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        })
    }

    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            room_number: self.room_number,
            kind: self.kind.into(),
            price_per_night: self.price_per_night,
            max_guests: self.max_guests,
            description: self.description,
            amenities: self.amenities.into_vec(),
            availability_status: self.status.into(),
        }
    }
}

/// Parameters for creating a room.
#[derive(Debug, Clone)]
pub struct CreateRoomParam {
    pub room_number: String,
    pub kind: RoomKind,
    pub price_per_night: Decimal,
    pub max_guests: i32,
    pub description: Option<String>,
    pub amenities: AmenitySet,
}

/// Partial room update (None keeps the current value; the double Option on
/// `description` distinguishes "leave alone" from "clear").
#[derive(Debug, Clone, Default)]
pub struct UpdateRoomParam {
    pub kind: Option<RoomKind>,
    pub price_per_night: Option<Decimal>,
    pub max_guests: Option<i32>,
    pub description: Option<Option<String>>,
    pub amenities: Option<AmenitySet>,
}

/// Column the availability search can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Price,
    Kind,
    MaxGuests,
    RoomNumber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

/// Validated input of the availability search.
///
/// All optional filters are conjunctive; an omitted filter imposes no
/// constraint. The stay interval is mandatory and already validated
/// (check-out strictly after check-in) by the time this struct exists.
#[derive(Debug, Clone)]
pub struct RoomSearchCriteria {
    pub stay: StayInterval,
    pub kind: Option<RoomKind>,
    pub min_price: Option<Decimal>,
    pub max_price: Option<Decimal>,
    /// Requested guest count; matches rooms with `max_guests >= this`.
    pub guests: Option<i32>,
    pub amenities: AmenitySet,
    pub sort_by: Option<SortField>,
    pub sort_order: SortOrder,
}

impl RoomSearchCriteria {
    /// Builds validated criteria from the raw query string, rejecting
    /// missing dates, malformed dates, inverted intervals and unknown enum
    /// values with a 400 before any storage is touched.
    pub fn from_query(query: RoomSearchQuery) -> Result<Self, AppError> {
        let check_in = query
            .check_in_date
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("checkInDate is required".to_string()))?;
        let check_out = query
            .check_out_date
            .as_deref()
            .ok_or_else(|| AppError::BadRequest("checkOutDate is required".to_string()))?;

        let stay = StayInterval::new(parse_iso_date(check_in)?, parse_iso_date(check_out)?)?;

        let kind = query.room_type.as_deref().map(parse_room_kind).transpose()?;

        if let Some(guests) = query.max_guests {
            if guests < 1 {
                return Err(AppError::BadRequest(
                    "maxGuests must be at least 1".to_string(),
                ));
            }
        }

        if let (Some(min), Some(max)) = (query.min_price, query.max_price) {
            if min > max {
                return Err(AppError::BadRequest(
                    "minPrice must not exceed maxPrice".to_string(),
                ));
            }
        }

        let amenities = match query.amenities.as_deref() {
            Some(raw) => AmenitySet::from_tags(parse_amenity_list(raw)?),
            None => AmenitySet::new(),
        };

        let sort_by = query.sort_by.as_deref().map(parse_sort_field).transpose()?;
        let sort_order = query
            .sort_order
            .as_deref()
            .map(parse_sort_order)
            .transpose()?
            .unwrap_or_default();

        Ok(Self {
            stay,
            kind,
            min_price: query.min_price,
            max_price: query.max_price,
            guests: query.max_guests,
            amenities,
            sort_by,
            sort_order,
        })
    }
}

fn parse_room_kind(value: &str) -> Result<RoomKind, AppError> {
    match value {
        "single" => Ok(RoomKind::Single),
        "double" => Ok(RoomKind::Double),
        "suite" => Ok(RoomKind::Suite),
        "deluxe" => Ok(RoomKind::Deluxe),
        other => Err(AppError::BadRequest(format!(
            "Unknown roomType '{}', expected one of: single, double, suite, deluxe",
            other
        ))),
    }
}

fn parse_sort_field(value: &str) -> Result<SortField, AppError> {
    match value {
        "price" => Ok(SortField::Price),
        "type" => Ok(SortField::Kind),
        "maxGuests" => Ok(SortField::MaxGuests),
        "roomNumber" => Ok(SortField::RoomNumber),
        other => Err(AppError::BadRequest(format!(
            "Unknown sortBy '{}', expected one of: price, type, maxGuests, roomNumber",
            other
        ))),
    }
}

fn parse_sort_order(value: &str) -> Result<SortOrder, AppError> {
    match value {
        "ASC" => Ok(SortOrder::Asc),
        "DESC" => Ok(SortOrder::Desc),
        other => Err(AppError::BadRequest(format!(
            "Unknown sortOrder '{}', expected ASC or DESC",
            other
        ))),
    }
}
