//! Response bodies

use gym_core::{PublicUser, Tenant};
use serde::Serialize;

/// Envelope for collection endpoints. An empty collection is `[]`, never `null`.
#[derive(Debug, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}

impl<T: Serialize> FromIterator<T> for ListResponse<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: &'static str,
    pub tenant: Tenant,
    pub admin: PublicUser,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_serializes_as_array() {
        let json = serde_json::to_value(ListResponse::<u32>::new(Vec::new())).unwrap();
        assert_eq!(json, serde_json::json!({"count": 0, "data": []}));
    }

    #[test]
    fn test_count_matches_data() {
        let list: ListResponse<u32> = (1..=3).collect();
        assert_eq!(list.count, 3);
        assert_eq!(list.data, vec![1, 2, 3]);
    }
}
