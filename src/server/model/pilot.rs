//! Pilot domain models and parameters.
//!
//! Pilots are returned together with their competitions, which are nested in the
//! pilot representation rather than linked.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::pilot::PilotDto,
    server::{
        model::{competition::Competition, resource::Resource},
        util::hyperlink::ResourceUrls,
    },
};

/// Longest accepted pilot name.
pub const NAME_MAX_LENGTH: usize = 150;

/// Pilot gender, stored as a single letter code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    /// Accepted codes, in declaration order.
    pub const CODES: [&'static str; 2] = ["M", "F"];

    pub fn code(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "M" => Some(Self::Male),
            "F" => Some(Self::Female),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Pilot {
    pub id: i32,
    pub name: String,
    pub gender: Gender,
    pub races_count: i32,
    pub inserted_timestamp: DateTime<Utc>,
    /// Longest distance first.
    pub competitions: Vec<Competition>,
}

impl Pilot {
    /// Converts entity models to a domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The pilot entity from the database
    /// - `competitions` - The pilot's competitions, already ordered
    ///
    /// # Returns
    /// - `Ok(Pilot)` - Successfully converted domain model
    /// - `Err(DbErr::Custom)` - The stored gender code is unknown
    pub fn from_entity(
        entity: entity::pilot::Model,
        competitions: Vec<entity::competition::Model>,
    ) -> Result<Self, DbErr> {
        let gender = Gender::from_code(&entity.gender).ok_or_else(|| {
            DbErr::Custom(format!(
                "Unknown gender code '{}' for pilot {}",
                entity.gender, entity.id
            ))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            gender,
            races_count: entity.races_count,
            inserted_timestamp: entity.inserted_timestamp,
            competitions: competitions
                .into_iter()
                .map(Competition::from_entity)
                .collect(),
        })
    }

    pub fn into_dto(self, urls: &ResourceUrls) -> PilotDto {
        PilotDto {
            url: urls.detail(Resource::Pilots, self.id),
            pk: self.id,
            name: self.name,
            gender: self.gender.code().to_string(),
            gender_description: self.gender.description().to_string(),
            races_count: self.races_count,
            inserted_timestamp: self.inserted_timestamp,
            competitions: self
                .competitions
                .into_iter()
                .map(|c| c.into_dto(urls))
                .collect(),
        }
    }
}

/// Validated fields for creating or replacing a pilot.
#[derive(Debug, Clone, PartialEq)]
pub struct PilotParams {
    pub name: String,
    /// `None` keeps the stored value on update and means male on create.
    pub gender: Option<Gender>,
    pub races_count: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::fixture;

    #[test]
    fn gender_codes_round_trip() {
        for code in Gender::CODES {
            assert_eq!(Gender::from_code(code).map(Gender::code), Some(code));
        }
        assert_eq!(Gender::from_code("X"), None);
    }

    #[test]
    fn renders_nested_competitions() {
        let pilot = fixture::pilot::entity_builder().id(3).gender("F").build();
        let competition = fixture::competition::entity_builder()
            .id(9)
            .pilot_id(3)
            .drone_id(4)
            .build();

        let dto = Pilot::from_entity(pilot, vec![competition])
            .unwrap()
            .into_dto(&ResourceUrls::new("http://testserver"));

        assert_eq!(dto.url, "http://testserver/pilots/3/");
        assert_eq!(dto.gender, "F");
        assert_eq!(dto.gender_description, "Female");
        assert_eq!(dto.competitions.len(), 1);
        assert_eq!(dto.competitions[0].url, "http://testserver/competitions/9/");
        assert_eq!(dto.competitions[0].drone, "http://testserver/drones/4/");
    }

    #[test]
    fn rejects_unknown_stored_gender() {
        let pilot = fixture::pilot::entity_builder().gender("Q").build();

        assert!(Pilot::from_entity(pilot, vec![]).is_err());
    }
}
