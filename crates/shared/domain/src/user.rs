//! User domain entity and related types.

use serde::{Deserialize, Serialize};

/// User domain entity
///
/// `id` is assigned by the store on insert and never changes afterwards.
/// Email is a lookup key but is not guaranteed to be unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct User {
    /// Store-assigned identifier
    #[cfg_attr(feature = "openapi", schema(example = 1))]
    pub id: i64,
    /// Display name
    #[cfg_attr(feature = "openapi", schema(example = "Anyelo"))]
    pub name: String,
    /// Email address
    #[cfg_attr(feature = "openapi", schema(example = "anyelo@gmail.com"))]
    pub email: String,
    /// Age in years
    #[cfg_attr(feature = "openapi", schema(example = 20))]
    pub age: i32,
}

impl User {
    /// Check whether the user's age falls in `[min_age, max_age]`
    pub fn is_aged_between(&self, min_age: i32, max_age: i32) -> bool {
        min_age <= self.age && self.age <= max_age
    }
}

/// User creation data (id is assigned by the store)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub age: i32,
}

impl NewUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, age: i32) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            age,
        }
    }

    /// Attach the identifier the store assigned on insert
    pub fn into_user(self, id: i64) -> User {
        User {
            id,
            name: self.name,
            email: self.email,
            age: self.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_serializes_to_flat_object() {
        let user = NewUser::new("Isaac", "isaac@gmail.com", 21).into_user(7);
        let json = serde_json::to_value(&user).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "name": "Isaac",
                "email": "isaac@gmail.com",
                "age": 21
            })
        );
    }

    #[test]
    fn test_age_range_is_inclusive() {
        let user = NewUser::new("Anyelo", "anyelo@gmail.com", 20).into_user(1);

        assert!(user.is_aged_between(20, 20));
        assert!(user.is_aged_between(19, 21));
        assert!(!user.is_aged_between(21, 25));
        // Inverted bounds never match
        assert!(!user.is_aged_between(21, 19));
    }
}
