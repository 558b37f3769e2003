use rocket::{
    get,
    http::Status,
    post,
    serde::json::{self, Json},
    State,
};
use serde_derive::Serialize;

use crate::{
    data_types::{
        booking::BookingRequest,
        fare::{EstimateQuery, FareRequest, Segment},
        gallery::GalleryImage,
        rates::RateTable,
        review::{NewReview, Review, ReviewSummary},
    },
    error::{Error, FareError},
    pricing::{AmountFormatter, Inr, RateCard},
    web::responses::{ApiError, ApiResult, BaseUrl},
    App,
};

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateResponse {
    pub total_amount: f64,
    pub breakdown_text: String,
    /// Total as shown to customers, e.g. "₹2,360"
    pub display: String,
}

#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub message: String,
}

#[get("/api/health")]
pub fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[get("/api/gallery")]
pub async fn gallery(app: &State<App>, base_url: BaseUrl) -> ApiResult<Vec<GalleryImage>> {
    Ok(Json(app.list_gallery(&base_url.0).await?))
}

#[get("/api/reviews")]
pub async fn reviews(app: &State<App>) -> ApiResult<Vec<Review>> {
    Ok(Json(app.list_reviews().await?))
}

#[post("/api/reviews", data = "<review>")]
pub async fn add_review(
    app: &State<App>,
    review: Result<Json<NewReview>, json::Error<'_>>,
) -> Result<(Status, Json<Review>), ApiError> {
    let review = review.map_err(|e| Error::Validation(format!("Malformed review: {}", e)))?;
    let stored = app.add_review(review.into_inner()).await?;
    Ok((Status::Created, Json(stored)))
}

#[get("/api/reviews/summary")]
pub async fn review_summary(app: &State<App>) -> ApiResult<ReviewSummary> {
    Ok(Json(app.review_summary().await?))
}

#[get("/api/rates")]
pub fn rates(app: &State<App>) -> Json<RateTable> {
    Json(app.rates().clone())
}

/// Accepts a segment key ("suv") or a fleet car model ("Maruti Ertiga")
#[get("/api/fleet/<car>")]
pub fn fleet(app: &State<App>, car: &str) -> Json<RateCard> {
    let segment = car
        .parse::<Segment>()
        .unwrap_or_else(|_| Segment::for_car_model(car));

    Json(app.rate_card(segment, &Inr))
}

#[post("/api/estimate", data = "<query>")]
pub fn estimate(
    app: &State<App>,
    query: Result<Json<EstimateQuery>, json::Error<'_>>,
) -> ApiResult<EstimateResponse> {
    let query = query.map_err(|e| FareError::InvalidInput(e.to_string()))?;
    let request = FareRequest::try_from(query.into_inner())?;
    let result = app.estimate_with(&request, &Inr)?;

    Ok(Json(EstimateResponse {
        display: Inr.format(result.total_amount),
        total_amount: result.total_amount,
        breakdown_text: result.breakdown_text,
    }))
}

#[post("/api/bookings", data = "<booking>")]
pub fn book(
    app: &State<App>,
    booking: Result<Json<BookingRequest>, json::Error<'_>>,
) -> ApiResult<BookingResponse> {
    let booking = booking.map_err(|e| Error::Validation(format!("Malformed booking: {}", e)))?;
    let booking = app.book(&booking)?;

    Ok(Json(BookingResponse {
        message: booking.message(),
    }))
}
