use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use users_sdk::{NewUser, UserPatch, UserView};
use utoipa::ToSchema;
use uuid::Uuid;

/// REST DTO for creating a new user
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserReq {
    pub first_name: String,
    pub last_name: String,
    /// RFC 3339 timestamp, a date-time without offset (read as UTC) or a plain `YYYY-MM-DD` date.
    #[serde(deserialize_with = "date_of_birth::deserialize")]
    #[schema(value_type = String, example = "1989-10-14T00:00:00Z")]
    pub date_of_birth: OffsetDateTime,
    pub birth_number: String,
}

/// REST DTO for updating a user (partial)
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserReq {
    /// Must match the id in the path.
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
}

/// REST DTO for user representation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub date_of_birth: OffsetDateTime,
    pub ruian: Option<i32>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct UserAgeDto {
    pub age: i32,
}

impl From<UserView> for UserDto {
    fn from(user: UserView) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            date_of_birth: user.date_of_birth,
            ruian: user.ruian,
        }
    }
}

impl From<CreateUserReq> for NewUser {
    fn from(req: CreateUserReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
            date_of_birth: req.date_of_birth,
            birth_number: req.birth_number,
        }
    }
}

impl From<UpdateUserReq> for UserPatch {
    fn from(req: UpdateUserReq) -> Self {
        Self {
            first_name: req.first_name,
            last_name: req.last_name,
        }
    }
}

mod date_of_birth {
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer};
    use time::format_description::well_known::Rfc3339;
    use time::macros::format_description;
    use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

    pub(super) fn parse(raw: &str) -> Option<OffsetDateTime> {
        if let Ok(dt) = OffsetDateTime::parse(raw, &Rfc3339) {
            return Some(dt.to_offset(UtcOffset::UTC));
        }
        let naive = format_description!(
            "[year]-[month]-[day]T[hour]:[minute]:[second][optional [.[subsecond]]]"
        );
        if let Ok(dt) = PrimitiveDateTime::parse(raw, naive) {
            return Some(dt.assume_utc());
        }
        Date::parse(raw, format_description!("[year]-[month]-[day]"))
            .ok()
            .map(|d| d.midnight().assume_utc())
    }

    pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<OffsetDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(raw.trim()).ok_or_else(|| {
            D::Error::custom(format!(
                "invalid dateOfBirth '{raw}', expected an RFC 3339 date-time or YYYY-MM-DD"
            ))
        })
    }
}
