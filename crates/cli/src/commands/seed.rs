//! Seed the database with demo data.
//!
//! Creates a demo customer plus a handful of bookings in assorted lifecycle
//! states, so a fresh checkout has something to show on the admin dashboard.
//!
//! # Usage
//!
//! ```bash
//! lp-cli seed
//! ```
//!
//! # Environment Variables
//!
//! - `LAUNDRYPRO_DATABASE_URL` - `PostgreSQL` connection string
//!   (falls back to `DATABASE_URL`)

use secrecy::SecretString;
use tracing::{info, warn};

use laundrypro_core::BookingStatus;
use laundrypro_web::db;
use laundrypro_web::services::{AuthError, AuthService, BookingDraft, BookingService};

/// Demo customer credentials (local development only).
const DEMO_EMAIL: &str = "demo@laundrypro.com";
const DEMO_PASSWORD: &str = "demopass123";

/// Errors that can occur while seeding.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Auth error: {0}")]
    Auth(#[from] laundrypro_web::services::auth::AuthError),

    #[error("Booking error: {0}")]
    Booking(#[from] laundrypro_web::services::bookings::BookingError),
}

/// Insert the demo customer and bookings.
///
/// Safe to run repeatedly: an already-registered demo customer is left
/// alone, and only the bookings are appended.
///
/// # Errors
///
/// Returns `SeedError` if the database is unreachable or an insert fails.
pub async fn run() -> Result<(), SeedError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("LAUNDRYPRO_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(SecretString::from)
        .map_err(|_| SeedError::MissingEnvVar("LAUNDRYPRO_DATABASE_URL"))?;

    let pool = db::create_pool(&database_url).await?;

    let auth = AuthService::new(&pool);
    let owner = match auth
        .register("Demo Customer", DEMO_EMAIL, "9000000001", DEMO_PASSWORD)
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id, "demo customer created");
            Some(user.id)
        }
        Err(AuthError::EmailTaken) => {
            warn!("demo customer already exists, reusing");
            auth.login(DEMO_EMAIL, DEMO_PASSWORD).await.ok().map(|u| u.id)
        }
        Err(e) => return Err(e.into()),
    };

    let bookings = BookingService::new(&pool);

    let drafts = [
        demo_draft("laundry", 6, false, "2025-06-01", "10:00"),
        demo_draft("ironing", 3, true, "2025-06-02", "14:30"),
        demo_draft("dry-cleaning", 2, false, "2025-06-03", "09:15"),
    ];
    let statuses = [
        BookingStatus::PickedUp,
        BookingStatus::InProcess,
        BookingStatus::Delivered,
    ];

    for (draft, status) in drafts.into_iter().zip(statuses) {
        let id = bookings.create(owner, draft).await?;
        if status != BookingStatus::PickedUp {
            bookings.update_status(id, status).await?;
        }
        info!(order_id = %id, %status, "demo booking created");
    }

    // One guest booking so the dashboard shows the ownerless case too
    let guest_id = bookings
        .create(None, demo_draft("laundry", 1, true, "2025-06-04", "18:45"))
        .await?;
    info!(order_id = %guest_id, "guest demo booking created");

    info!("Seeding complete!");
    Ok(())
}

fn demo_draft(
    service_type: &str,
    items: i32,
    express: bool,
    date: &str,
    time: &str,
) -> BookingDraft {
    BookingDraft {
        service_type: service_type.to_owned(),
        items,
        express_service: express,
        pickup_date: Some(date.to_owned()),
        pickup_time: Some(time.to_owned()),
        address: "42 Gandhi Road, Pune".to_owned(),
        phone: "9000000001".to_owned(),
        payment_method: "cash".to_owned(),
    }
}
