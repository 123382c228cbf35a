//! User-visible notices raised by editing operations.
//!
//! The host renders these as transient toasts; nothing here blocks or
//! persists. Persistence failures arrive at the level that matches their
//! handling: transient for retryable trouble, error when user action is
//! needed.

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticeLevel {
	#[default]
	Info,
	Warn,
	Error,
}

/// A transient, user-visible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
	pub level: NoticeLevel,
	pub title: String,
	pub body: String,
}

impl Notice {
	pub fn info(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Info,
			title: title.into(),
			body: body.into(),
		}
	}

	pub fn warn(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Warn,
			title: title.into(),
			body: body.into(),
		}
	}

	pub fn error(title: impl Into<String>, body: impl Into<String>) -> Self {
		Self {
			level: NoticeLevel::Error,
			title: title.into(),
			body: body.into(),
		}
	}
}
