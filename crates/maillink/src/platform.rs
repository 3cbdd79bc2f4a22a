//! Platform capabilities the launcher depends on
//!
//! These traits abstract over the OS (scheme probing, URL opening) and the
//! native action sheet, so the resolution logic can run against mobile hosts,
//! desktop shells, or test doubles.

use async_trait::async_trait;

use crate::error::Result;

/// Asks the OS whether a URL scheme can be opened
#[async_trait]
pub trait SchemeProber: Send + Sync {
    /// `scheme` is a registry scheme such as `googlegmail://`
    async fn can_open(&self, scheme: &str) -> Result<bool>;
}

/// Hands a URL to the OS
#[async_trait]
pub trait UrlLauncher: Send + Sync {
    async fn open_url(&self, url: &str) -> Result<()>;
}

/// Contents of an action sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceRequest {
    /// App titles followed by the cancel label
    pub options: Vec<String>,
    pub cancel_index: usize,
    pub title: Option<String>,
    pub message: Option<String>,
}

/// Outcome of an action sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Selected(usize),
    Cancelled,
}

impl Choice {
    /// Interpret a raw index returned by a native picker
    pub fn from_index(index: usize, cancel_index: usize) -> Self {
        if index == cancel_index {
            Choice::Cancelled
        } else {
            Choice::Selected(index)
        }
    }
}

/// Presents an action sheet and waits for the user
#[async_trait]
pub trait ChoicePicker: Send + Sync {
    async fn present_choice(&self, request: ChoiceRequest) -> Choice;
}
