// ============================================================================
// Gym Infrastructure - Partial User Update
// File: crates/gym-infrastructure/src/database/postgres/user_update.rs
// Description: Builds a parameterized UPDATE from a sparse UserUpdate
// ============================================================================

use gym_core::{StoreError, UserUpdate};
use gym_shared::{TenantId, UserId};

/// Columns returned by every statement that yields a user row.
pub(crate) const USER_COLUMNS: &str =
    "id, tenant_id, first_name, last_name, email, password, role, created_at, updated_at";

/// A positional argument for an [`UpdateStatement`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateArg<'a> {
    Text(&'a str),
    Id(i32),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateStatement<'a> {
    pub sql: String,
    /// One entry per placeholder, `$1` first.
    pub args: Vec<UpdateArg<'a>>,
}

/// Builds `UPDATE users SET ... WHERE id = $k+1 AND tenant_id = $k+2`.
///
/// Only the fields present in `update` are assigned, numbered in the order
/// of [`UserUpdate::fields`]. An update with no present fields is rejected
/// with [`StoreError::EmptyUpdate`].
pub fn build_user_update(
    tenant_id: TenantId,
    user_id: UserId,
    update: &UserUpdate,
) -> Result<UpdateStatement<'_>, StoreError> {
    let mut assignments = Vec::with_capacity(UserUpdate::FIELD_COUNT);
    let mut args = Vec::with_capacity(UserUpdate::FIELD_COUNT + 2);

    for (column, value) in update.fields() {
        if let Some(value) = value {
            args.push(UpdateArg::Text(value));
            assignments.push(format!("{} = ${}", column, args.len()));
        }
    }

    if assignments.is_empty() {
        return Err(StoreError::EmptyUpdate);
    }

    let id_position = args.len() + 1;
    args.push(UpdateArg::Id(user_id));
    args.push(UpdateArg::Id(tenant_id));

    let sql = format!(
        "UPDATE users SET {} WHERE id = ${} AND tenant_id = ${} RETURNING {}",
        assignments.join(", "),
        id_position,
        id_position + 1,
        USER_COLUMNS
    );

    Ok(UpdateStatement { sql, args })
}

#[cfg(test)]
mod tests {
    use gym_core::Role;

    use super::*;

    /// The update with exactly the fields whose bit is set in `mask`.
    fn update_from_mask(mask: u8) -> UserUpdate {
        let pick = |bit: u8, value: &str| (mask & (1 << bit) != 0).then(|| value.to_string());
        UserUpdate {
            first_name: pick(0, "Johnny"),
            last_name: pick(1, "Bravo"),
            email: pick(2, "jbravo@email.com"),
            password: pick(3, "$2b$04$hash"),
            role: (mask & (1 << 4) != 0).then_some(Role::Trainer),
        }
    }

    #[test]
    fn test_every_field_subset_assigns_exactly_the_present_fields() {
        for mask in 0u8..32 {
            let update = update_from_mask(mask);
            let k = mask.count_ones() as usize;

            let result = build_user_update(6, 10, &update);
            if k == 0 {
                assert!(matches!(result, Err(StoreError::EmptyUpdate)));
                continue;
            }

            let statement = result.unwrap();
            let set_clause = statement
                .sql
                .split(" WHERE ")
                .next()
                .unwrap()
                .trim_start_matches("UPDATE users SET ");

            assert_eq!(set_clause.split(", ").count(), k, "mask {:05b}", mask);
            assert_eq!(statement.args.len(), k + 2, "mask {:05b}", mask);
            assert!(statement.sql.contains(&format!(
                "WHERE id = ${} AND tenant_id = ${}",
                k + 1,
                k + 2
            )));
            assert_eq!(statement.args[k], UpdateArg::Id(10));
            assert_eq!(statement.args[k + 1], UpdateArg::Id(6));
        }
    }

    #[test]
    fn test_placeholders_follow_fixed_field_order() {
        let update = UserUpdate {
            role: Some(Role::Admin),
            first_name: Some("Johnny".to_string()),
            email: Some("jbravo@email.com".to_string()),
            ..Default::default()
        };

        let statement = build_user_update(1, 2, &update).unwrap();

        assert_eq!(
            statement.sql,
            format!(
                "UPDATE users SET first_name = $1, email = $2, role = $3 \
                 WHERE id = $4 AND tenant_id = $5 RETURNING {}",
                USER_COLUMNS
            )
        );
        assert_eq!(
            statement.args,
            vec![
                UpdateArg::Text("Johnny"),
                UpdateArg::Text("jbravo@email.com"),
                UpdateArg::Text("admin"),
                UpdateArg::Id(2),
                UpdateArg::Id(1),
            ]
        );
    }

    #[test]
    fn test_output_is_deterministic() {
        let update = update_from_mask(0b10110);
        assert_eq!(
            build_user_update(3, 4, &update).unwrap(),
            build_user_update(3, 4, &update).unwrap()
        );
    }

    #[test]
    fn test_empty_string_is_a_present_field() {
        let update = UserUpdate {
            last_name: Some(String::new()),
            ..Default::default()
        };
        let statement = build_user_update(1, 1, &update).unwrap();
        assert_eq!(statement.args[0], UpdateArg::Text(""));
        assert!(statement.sql.starts_with("UPDATE users SET last_name = $1 WHERE"));
    }
}
