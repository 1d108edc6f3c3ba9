use thiserror::Error;

/// Internal issues indicating unexpected behavior & possible bugs.
#[derive(Error, Debug)]
pub enum InternalError {
    /// A room's amenities column did not contain a valid JSON string array.
    ///
    /// Stored amenity data is always written through `AmenitySet`, so this
    /// points at out-of-band writes or data corruption. Results in a 500
    /// with a generic message returned to the client.
    #[error("Failed to decode amenities column '{value}': {source}")]
    MalformedAmenities {
        /// The raw column value that failed to decode.
        value: String,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Password hashing or verification failed at the library level (not a
    /// wrong password — an operational failure of the hasher itself).
    #[error("Password hash operation failed: {0}")]
    PasswordHash(String),

    /// Signing a JWT failed; the configured secret is unusable.
    #[error("Failed to sign access token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),
}
