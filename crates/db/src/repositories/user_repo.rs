//! Repository for the `cms_users` table.

use harva_core::types::RowId;

use crate::models::user::{CmsUser, CreateUser};
use crate::store::{
    decode_rows, encode_row, fetch_optional, ContentStore, Filter, Select, StoreError,
};

const TABLE: &str = "cms_users";

pub struct UserRepo;

impl UserRepo {
    /// Find a user by email (exact match).
    pub async fn find_by_email(
        store: &dyn ContentStore,
        email: &str,
    ) -> Result<Option<CmsUser>, StoreError> {
        fetch_optional(store, Select::from(TABLE).filter(Filter::eq("email", email))).await
    }

    pub async fn find_by_id(
        store: &dyn ContentStore,
        id: RowId,
    ) -> Result<Option<CmsUser>, StoreError> {
        fetch_optional(store, Select::from(TABLE).filter(Filter::id(id))).await
    }

    /// Insert a new user, returning the stored row.
    pub async fn create(
        store: &dyn ContentStore,
        input: &CreateUser,
    ) -> Result<CmsUser, StoreError> {
        let rows = store.insert(TABLE, vec![encode_row(TABLE, input)?]).await?;
        decode_rows::<CmsUser>(rows)?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::MalformedRow {
                table: TABLE.to_string(),
                reason: "insert returned no row".into(),
            })
    }
}
