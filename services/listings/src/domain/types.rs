use chrono::{DateTime, Utc};
use rand::RngExt;
use uuid::Uuid;

/// A single-use code distributed as a QR link on a printed label.
#[derive(Debug, Clone)]
pub struct Code {
    pub id: Uuid,
    pub code: String,
    pub used: bool,
    pub is_demo: bool,
    pub created_at: DateTime<Utc>,
}

impl Code {
    /// Demo codes accept submissions indefinitely; everything else is
    /// single-use.
    pub fn is_redeemable(&self) -> bool {
        self.is_demo || !self.used
    }
}

/// One apartment listing collected through the form behind a code.
/// All attributes except `name` and `phone` are optional free text.
#[derive(Debug, Clone)]
pub struct Submission {
    pub id: Uuid,
    pub code: String,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub owner_name: Option<String>,
    pub price: Option<String>,
    pub size: Option<i32>,
    pub bedrooms: Option<String>,
    pub baths: Option<String>,
    pub condition: Option<String>,
    /// Public reference paths of stored images, in upload order.
    pub images: Vec<String>,
    pub submitted_at: DateTime<Utc>,
}

/// Dashboard login session backed by a database record.
#[derive(Debug, Clone)]
pub struct AdminSession {
    pub id: Uuid,
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl AdminSession {
    pub fn is_valid(&self) -> bool {
        self.expires_at > Utc::now()
    }
}

/// Where a redemption attempt stands for a given token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedemptionState {
    /// No code record matches the token.
    NotFound,
    /// The code exists but has already been consumed.
    AlreadyUsed,
    /// The code exists and accepts a submission.
    Open,
}

/// Charset for generated tokens: 64 URL-safe symbols, 6 bits per character.
const TOKEN_CHARSET: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

/// Code token length in characters (132 bits of entropy).
pub const CODE_TOKEN_LEN: usize = 22;

/// Admin session token length in characters.
pub const SESSION_TOKEN_LEN: usize = 32;

/// Generation attempts before issuing gives up with a duplicate-code error.
pub const CODE_ISSUE_ATTEMPTS: usize = 3;

/// Admin session time-to-live in seconds (24 hours).
pub const ADMIN_SESSION_TTL_SECS: i64 = 86_400;

/// Generate a random URL-safe token of `len` characters from the
/// thread-local CSPRNG.
pub fn generate_token(len: usize) -> String {
    let mut rng = rand::rng();
    (0..len)
        .map(|_| TOKEN_CHARSET[rng.random_range(0..TOKEN_CHARSET.len())] as char)
        .collect()
}
