use data_types::{
    booking::{Booking, BookingRequest},
    fare::{FareRequest, FareResult, Segment},
    gallery::GalleryImage,
    rates::RateTable,
    review::{NewReview, Review, ReviewSummary},
};
use database::{gallery_db::GalleryDB, reviews_db::ReviewsDB};
use error::{FareError, Result};
use pricing::{AmountFormatter, RateCard};
use util::settings::Settings;

pub mod data_types;
pub mod database;
pub mod error;
pub mod pricing;
pub mod util;
pub mod web;

pub use util::logging;

/// Everything the site's API serves, wired to its files on disk.
pub struct App {
    settings: Settings,
    rates: RateTable,
    reviews: ReviewsDB,
    gallery: GalleryDB,
}

impl App {
    const CC: &str = "App";

    /// Loads the rate table and opens the stores. Fails on a missing or
    /// incomplete rate table.
    pub async fn new(settings: Settings) -> Result<Self> {
        if settings.verbose {
            logging::set_global_level(logging::LogLevel::VERBOSE);
        }

        let rates = RateTable::load(&settings.rates_file)?;
        logln!("Loaded rates from {}", settings.rates_file.display());

        Self::with_rates(settings, rates).await
    }

    pub async fn with_rates(settings: Settings, rates: RateTable) -> Result<Self> {
        let reviews = ReviewsDB::new(settings.reviews_file()).await?;
        let gallery = GalleryDB::new(settings.gallery_dir(), settings.captions_file());

        Ok(Self {
            settings,
            rates,
            reviews,
            gallery,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rates(&self) -> &RateTable {
        &self.rates
    }

    pub fn estimate(&self, request: &FareRequest) -> std::result::Result<FareResult, FareError> {
        pricing::estimate(request, &self.rates)
    }

    pub fn estimate_with(
        &self,
        request: &FareRequest,
        formatter: &dyn AmountFormatter,
    ) -> std::result::Result<FareResult, FareError> {
        pricing::estimate_with(request, &self.rates, formatter)
    }

    pub fn rate_card(&self, segment: Segment, formatter: &dyn AmountFormatter) -> RateCard {
        pricing::rate_card(segment, &self.rates, formatter)
    }

    pub async fn list_reviews(&self) -> Result<Vec<Review>> {
        self.reviews.list().await
    }

    pub async fn add_review(&self, submitted: NewReview) -> Result<Review> {
        self.reviews.add(submitted).await
    }

    pub async fn review_summary(&self) -> Result<ReviewSummary> {
        Ok(ReviewSummary::from_reviews(&self.reviews.list().await?))
    }

    pub async fn list_gallery(&self, base_url: &str) -> Result<Vec<GalleryImage>> {
        self.gallery.list(base_url).await
    }

    pub fn book(&self, request: &BookingRequest) -> Result<Booking> {
        let booking = request.validate()?;
        logln!("Booking request for {} ({})", booking.service, booking.pickup);

        Ok(booking)
    }
}
