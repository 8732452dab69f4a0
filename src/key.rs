//! Parses the object-key naming convention for sensor reports:
//! `<prefix>/<vehicle-id>.<extension>`, where the vehicle id is the
//! 24-character hex id of the vehicle's document in the fleet
//! database.

use bson::oid::ObjectId;
use thiserror::Error;

/// Failure to derive a vehicle id from an object key.
#[derive(Debug, Error)]
pub enum KeyError {
    #[error("object key {0:?} has no vehicle segment after the first '/'")]
    MissingSegment(String),

    #[error("segment {0:?} of object key is not a vehicle id: {1}")]
    InvalidId(String, bson::oid::Error),
}

/// Derives the vehicle id named by an object key.
pub fn vehicle_id(key: &str) -> Result<ObjectId, KeyError> {
    let segment = key
        .split('/')
        .nth(1)
        .ok_or_else(|| KeyError::MissingSegment(String::from(key)))?;
    let stem = segment.split('.').next().unwrap_or(segment);
    ObjectId::parse_str(stem).map_err(|e| KeyError::InvalidId(String::from(stem), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_id_from_directory_convention() {
        assert_eq!(
            vehicle_id("vehicles/507f1f77bcf86cd799439011/data.json").unwrap(),
            ObjectId::parse_str("507f1f77bcf86cd799439011").unwrap()
        );
    }

    #[test]
    fn extracts_id_from_filename_convention() {
        assert_eq!(
            vehicle_id("IIoT/6537c7b54a4588f9fd2ff8aa.txt").unwrap(),
            ObjectId::parse_str("6537c7b54a4588f9fd2ff8aa").unwrap()
        );
    }

    #[test]
    fn ignores_everything_after_the_first_dot() {
        assert_eq!(
            vehicle_id("IIoT/507f191e810c19729de860ea.2024-05-07.txt").unwrap(),
            ObjectId::parse_str("507f191e810c19729de860ea").unwrap()
        );
    }

    #[test]
    fn rejects_key_without_separator() {
        assert!(matches!(
            vehicle_id("507f1f77bcf86cd799439011.txt"),
            Err(KeyError::MissingSegment(_))
        ));
    }

    #[test]
    fn rejects_segment_that_is_not_hex() {
        assert!(matches!(
            vehicle_id("vehicles/not-a-vehicle.json"),
            Err(KeyError::InvalidId(_, _))
        ));
        assert!(matches!(
            vehicle_id("vehicles/507f1f77.json"),
            Err(KeyError::InvalidId(_, _))
        ));
        assert!(matches!(
            vehicle_id("vehicles/.json"),
            Err(KeyError::InvalidId(_, _))
        ));
    }
}
