use sqlx::Result;

use crate::database::Pool;
use crate::model::{Article, NewArticle};

/// Return every article, in storage order.
#[tracing::instrument(skip(db))]
pub async fn get_all_articles(db: &Pool) -> Result<Vec<Article>> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, content, style, date_published FROM articles
        "#,
    )
    .fetch_all(db)
    .await
}

/// Return the article with the given id, or `None` if no row matches.
#[tracing::instrument(skip(db))]
pub async fn get_article_by_id(db: &Pool, article_id: i32) -> Result<Option<Article>> {
    sqlx::query_as::<_, Article>(
        r#"
        SELECT id, title, content, style, date_published FROM articles WHERE id = $1
        "#,
    )
    .bind(article_id)
    .fetch_optional(db)
    .await
}

/// Insert an article and return it with its server-assigned id and timestamp.
#[tracing::instrument(skip(db))]
pub async fn insert_article(db: &Pool, article: &NewArticle) -> Result<Article> {
    sqlx::query_as::<_, Article>(
        r#"
        INSERT INTO articles (title, content, style)
        VALUES ($1, $2, $3)
        RETURNING id, title, content, style, date_published
        "#,
    )
    .bind(&article.title)
    .bind(&article.content)
    .bind(&article.style)
    .fetch_one(db)
    .await
}

#[cfg(test)]
mod tests {
    use speculoos::prelude::*;
    use sqlx::PgPool;

    use super::*;
    use crate::model::ArticleStyle;

    #[sqlx::test]
    async fn empty_table_yields_empty_list(pool: PgPool) -> Result<()> {
        let articles = get_all_articles(&pool).await?;

        assert_that!(articles).is_empty();
        Ok(())
    }

    #[sqlx::test(fixtures("articles"))]
    async fn get_all_returns_every_row(pool: PgPool) -> Result<()> {
        let articles = get_all_articles(&pool).await?;

        assert_that!(articles).has_length(2);
        Ok(())
    }

    #[sqlx::test(fixtures("articles"))]
    async fn get_by_id_finds_the_matching_row(pool: PgPool) -> Result<()> {
        let article = get_article_by_id(&pool, 1).await?;

        let article = article.expect("article 1 should exist");
        assert_that!(article.title).is_equal_to(String::from("First post!"));
        assert_that!(article.style).is_equal_to(ArticleStyle::News);
        Ok(())
    }

    #[sqlx::test]
    async fn get_by_id_yields_none_for_unknown_id(pool: PgPool) -> Result<()> {
        let article = get_article_by_id(&pool, 42).await?;

        assert_that!(article).is_none();
        Ok(())
    }

    #[sqlx::test]
    async fn insert_assigns_id_and_timestamp(pool: PgPool) -> Result<()> {
        let candidate = NewArticle {
            title: Some(String::from("Rust without fear")),
            content: Some(String::from("Lorem ipsum")),
            style: Some(ArticleStyle::HowTo),
        };

        let created = insert_article(&pool, &candidate).await?;

        assert_that!(created.id).is_greater_than(0);
        assert_that!(created.title).is_equal_to(String::from("Rust without fear"));
        assert_that!(created.style).is_equal_to(ArticleStyle::HowTo);

        let fetched = get_article_by_id(&pool, created.id).await?;
        assert_that!(fetched).is_some();
        Ok(())
    }

    #[sqlx::test]
    async fn insert_without_title_is_rejected(pool: PgPool) {
        let candidate = NewArticle {
            title: None,
            content: Some(String::from("Lorem ipsum")),
            style: Some(ArticleStyle::Story),
        };

        let result = insert_article(&pool, &candidate).await;

        assert_that!(result).is_err();
    }
}
