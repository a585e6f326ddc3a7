use async_trait::async_trait;

use crate::application::repos::{PostsRepo, RepoError, clamp_listing_limit};
use crate::domain::entities::PostRecord;
use crate::domain::types::PostStatus;

use super::super::PostgresRepositories;
use super::types::PostRow;
use crate::infra::db::map_sqlx_error;

const POST_COLUMNS: &str = "id, slug, title, author_name, excerpt, body, custom_css, status, \
     published_at, created_at, updated_at";

#[async_trait]
impl PostsRepo for PostgresRepositories {
    async fn find_published_by_slug(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE slug = $1 AND status = $2 AND published_at IS NOT NULL"
        );

        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(slug)
            .bind(PostStatus::Published)
            .fetch_optional(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(row.map(PostRecord::from))
    }

    async fn list_published(&self, limit: u32) -> Result<Vec<PostRecord>, RepoError> {
        let limit = i64::from(clamp_listing_limit(limit));
        let sql = format!(
            "SELECT {POST_COLUMNS} FROM posts \
             WHERE status = $1 AND published_at IS NOT NULL \
             ORDER BY published_at DESC, id DESC \
             LIMIT $2"
        );

        let rows = sqlx::query_as::<_, PostRow>(&sql)
            .bind(PostStatus::Published)
            .bind(limit)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(rows.into_iter().map(PostRecord::from).collect())
    }
}
