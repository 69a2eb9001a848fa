//! Privileged GoTrue admin client — the identity directory.
//!
//! Authenticates with the service role key. Listing entries without an
//! email (phone-only or anonymous identities) are dropped: the reset pass
//! intersects on email, so they can never match a target anyway.

use serde::Deserialize;

use super::error::ApiError;
use crate::config::SeedConfig;
use crate::seed::error::SeedError;
use crate::seed::traits::IdentityDirectory;
use crate::seed::types::IdentitySummary;

/// Demo fixtures fit in one page; GoTrue defaults to 50 per page.
const LIST_PAGE_SIZE: u32 = 1000;

pub struct SupabaseAdmin {
    base_url: String,
    service_role_key: String,
    client: reqwest::Client,
}

impl SupabaseAdmin {
    pub fn new(config: &SeedConfig) -> Self {
        Self {
            base_url: config.base_url.clone(),
            service_role_key: config.service_role_key.clone(),
            client: reqwest::Client::new(),
        }
    }

    async fn check(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        Err(ApiError::Status {
            service: "gotrue-admin",
            status: status.as_u16(),
            message: response.text().await.unwrap_or_default(),
        })
    }
}

impl IdentityDirectory for SupabaseAdmin {
    async fn list_identities(&self) -> Result<Vec<IdentitySummary>, SeedError> {
        let response = self
            .client
            .get(format!("{}/auth/v1/admin/users", self.base_url))
            .query(&[("per_page", LIST_PAGE_SIZE)])
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(ApiError::Http)?;
        let response = Self::check(response).await?;

        let listing: AdminListResponse = response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;

        Ok(listing
            .users
            .into_iter()
            .filter_map(|user| {
                user.email.map(|email| IdentitySummary { id: user.id, email })
            })
            .collect())
    }

    async fn delete_identity(&self, id: &str) -> Result<(), SeedError> {
        let response = self
            .client
            .delete(format!("{}/auth/v1/admin/users/{id}", self.base_url))
            .header("apikey", &self.service_role_key)
            .bearer_auth(&self.service_role_key)
            .send()
            .await
            .map_err(ApiError::Http)?;
        Self::check(response).await?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct AdminListResponse {
    users: Vec<AdminUser>,
}

#[derive(Debug, Deserialize)]
struct AdminUser {
    id: String,
    email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn listing_drops_entries_without_email() {
        let listing: AdminListResponse = serde_json::from_str(
            r#"{"users":[
                {"id":"1","email":"mark@x","role":"authenticated"},
                {"id":"2","email":null},
                {"id":"3","email":"lisa@x"}
            ]}"#,
        )
        .unwrap();
        let summaries: Vec<IdentitySummary> = listing
            .users
            .into_iter()
            .filter_map(|u| u.email.map(|email| IdentitySummary { id: u.id, email }))
            .collect();
        assert_eq!(summaries.len(), 2);
        assert_eq!(summaries[0].id, "1");
        assert_eq!(summaries[1].email, "lisa@x");
    }
}
