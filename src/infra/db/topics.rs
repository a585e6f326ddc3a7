use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    application::repos::{RepoError, TopicsRepo, clamp_listing_limit},
    domain::entities::{ReplyRecord, TopicRecord, TopicSummary, TopicThread},
    domain::types::ModerationStatus,
};

use super::{PostgresRepositories, map_sqlx_error};

// Reply count is a correlated subquery so topic rows and their counts come
// from the same snapshot.
const APPROVED_TOPICS_SQL: &str = "SELECT t.id, t.slug, t.title, t.author_name, t.body, \
         t.status, t.created_at, \
         (SELECT COUNT(*) FROM forum_replies r \
            WHERE r.topic_id = t.id AND r.status = $1) AS reply_count \
     FROM forum_topics t \
     WHERE t.status = $1 \
     ORDER BY t.created_at DESC, t.id DESC \
     LIMIT $2";

// Topic and its approved replies in one statement; a topic without replies
// yields a single row with NULL reply columns.
const APPROVED_THREAD_SQL: &str = "SELECT t.id, t.slug, t.title, t.author_name, t.body, \
         t.status, t.created_at, \
         r.id AS reply_id, r.author_name AS reply_author_name, r.body AS reply_body, \
         r.created_at AS reply_created_at \
     FROM forum_topics t \
     LEFT JOIN forum_replies r ON r.topic_id = t.id AND r.status = $2 \
     WHERE t.slug = $1 AND t.status = $2 \
     ORDER BY r.created_at ASC NULLS FIRST, r.id ASC";

#[derive(sqlx::FromRow)]
struct TopicSummaryRow {
    id: Uuid,
    slug: String,
    title: String,
    author_name: String,
    body: String,
    status: ModerationStatus,
    created_at: OffsetDateTime,
    reply_count: i64,
}

impl TryFrom<TopicSummaryRow> for TopicSummary {
    type Error = RepoError;

    fn try_from(row: TopicSummaryRow) -> Result<Self, Self::Error> {
        let reply_count = u64::try_from(row.reply_count)
            .map_err(|_| RepoError::from_persistence("reply count exceeds supported range"))?;

        Ok(Self {
            topic: TopicRecord {
                id: row.id,
                slug: row.slug,
                title: row.title,
                author_name: row.author_name,
                body: row.body,
                status: row.status,
                created_at: row.created_at,
            },
            reply_count,
        })
    }
}

#[derive(sqlx::FromRow)]
struct ThreadRow {
    id: Uuid,
    slug: String,
    title: String,
    author_name: String,
    body: String,
    status: ModerationStatus,
    created_at: OffsetDateTime,
    reply_id: Option<Uuid>,
    reply_author_name: Option<String>,
    reply_body: Option<String>,
    reply_created_at: Option<OffsetDateTime>,
}

impl ThreadRow {
    fn topic(&self) -> TopicRecord {
        TopicRecord {
            id: self.id,
            slug: self.slug.clone(),
            title: self.title.clone(),
            author_name: self.author_name.clone(),
            body: self.body.clone(),
            status: self.status,
            created_at: self.created_at,
        }
    }

    fn into_reply(self) -> Option<ReplyRecord> {
        match (self.reply_id, self.reply_created_at) {
            (Some(id), Some(created_at)) => Some(ReplyRecord {
                id,
                author_name: self.reply_author_name.unwrap_or_default(),
                body: self.reply_body.unwrap_or_default(),
                created_at,
            }),
            _ => None,
        }
    }
}

fn fold_thread(rows: Vec<ThreadRow>) -> Option<TopicThread> {
    let topic = rows.first()?.topic();
    let replies = rows.into_iter().filter_map(ThreadRow::into_reply).collect();
    Some(TopicThread { topic, replies })
}

#[async_trait]
impl TopicsRepo for PostgresRepositories {
    async fn list_approved_with_reply_counts(
        &self,
        limit: u32,
    ) -> Result<Vec<TopicSummary>, RepoError> {
        let limit = i64::from(clamp_listing_limit(limit));

        let rows = sqlx::query_as::<_, TopicSummaryRow>(APPROVED_TOPICS_SQL)
            .bind(ModerationStatus::Approved)
            .bind(limit)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        rows.into_iter().map(TopicSummary::try_from).collect()
    }

    async fn find_approved_thread(&self, slug: &str) -> Result<Option<TopicThread>, RepoError> {
        let rows = sqlx::query_as::<_, ThreadRow>(APPROVED_THREAD_SQL)
            .bind(slug)
            .bind(ModerationStatus::Approved)
            .fetch_all(self.pool())
            .await
            .map_err(map_sqlx_error)?;

        Ok(fold_thread(rows))
    }
}
