pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Not found: {message}")]
	NotFound { message: String },
	#[error("Storage error: {message}")]
	Storage { message: String },
}
impl From<calldesk_storage::Error> for Error {
	fn from(err: calldesk_storage::Error) -> Self {
		match err {
			calldesk_storage::Error::Sqlx(inner) => Self::Storage { message: inner.to_string() },
			calldesk_storage::Error::InvalidArgument(message) => Self::InvalidRequest { message },
			calldesk_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}
