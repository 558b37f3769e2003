use std::path::PathBuf;

use crate::{
    data_types::review::{NewReview, Review},
    database::json_store::JsonStore,
    error::Result,
    logln,
    util::DateTimeUtils,
};

pub struct ReviewsDB {
    store: JsonStore<Review>,
}

impl ReviewsDB {
    const CC: &str = "ReviewsDB";

    pub async fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: JsonStore::open(path).await?,
        })
    }

    /// Newest first
    pub async fn list(&self) -> Result<Vec<Review>> {
        self.store.list().await
    }

    pub async fn add(&self, submitted: NewReview) -> Result<Review> {
        let review = submitted.into_review(DateTimeUtils::now())?;
        self.store.append(review.clone()).await?;

        logln!("Stored review {} ({} stars)", review.id, review.rating);
        Ok(review)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[tokio::test]
    async fn added_reviews_are_listed_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let db = ReviewsDB::new(dir.path().join("data").join("reviews.json"))
            .await
            .unwrap();

        db.add(NewReview::new("Asha", 5, "Great trip")).await.unwrap();
        let latest = db.add(NewReview::new("Vikram", 4, "Good driver")).await.unwrap();

        let reviews = db.list().await.unwrap();
        assert_eq!(reviews.len(), 2);
        assert_eq!(reviews[0], latest);
        assert_eq!(reviews[1].name, "Asha");
    }

    #[tokio::test]
    async fn invalid_reviews_are_not_stored() {
        let dir = tempfile::tempdir().unwrap();
        let db = ReviewsDB::new(dir.path().join("reviews.json")).await.unwrap();

        let result = db.add(NewReview::new("", 5, "No name")).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert!(db.list().await.unwrap().is_empty());
    }
}
