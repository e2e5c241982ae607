//! Adapting remote rows to the shape a list view renders.

use super::canvas::Canvas;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Row shape the list view understands.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListViewData {
    pub title: String,
    pub content: String,
}

/// Row shape delivered by the remote service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteData {
    pub remote_title: String,
    pub remote_content: String,
}

/// Errors that can occur when adapting remote payloads.
#[derive(Debug, Error)]
pub enum AdapterError {
    #[error("Malformed remote payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

/// Renders rows onto a canvas.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListView;

impl ListView {
    pub fn show_list_view_data(&self, rows: &[ListViewData], canvas: &mut Canvas) {
        for row in rows {
            canvas.draw(format!(
                "ListViewData(title={}, content={})",
                row.title, row.content
            ));
        }
    }
}

/// Converts [`RemoteData`] into [`ListViewData`].
///
/// # Example
///
/// ```rust
/// use patterns::composition::{ListViewDataAdapter, RemoteData};
///
/// let row = ListViewDataAdapter.adapt(RemoteData {
///     remote_title: "Hello".to_string(),
///     remote_content: "World".to_string(),
/// });
///
/// assert_eq!(row.title, "Hello");
/// assert_eq!(row.content, "World");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct ListViewDataAdapter;

impl ListViewDataAdapter {
    pub fn adapt(&self, remote: RemoteData) -> ListViewData {
        remote.into()
    }

    /// Parse a JSON array of remote rows and adapt every row.
    pub fn adapt_json(&self, payload: &str) -> Result<Vec<ListViewData>, AdapterError> {
        let remote: Vec<RemoteData> = serde_json::from_str(payload)?;
        debug!(rows = remote.len(), "Adapting remote rows");
        Ok(remote
            .into_iter()
            .map(|row| self.adapt(row))
            .collect())
    }
}

impl From<RemoteData> for ListViewData {
    fn from(remote: RemoteData) -> Self {
        Self {
            title: remote.remote_title,
            content: remote.remote_content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapted_rows_render_in_order() {
        let payload = r#"[
            {"remoteTitle": "Breaking news", "remoteContent": "broken news"},
            {"remoteTitle": "Hello", "remoteContent": "World"}
        ]"#;

        let rows = ListViewDataAdapter.adapt_json(payload).unwrap();
        let mut canvas = Canvas::new();
        ListView.show_list_view_data(&rows, &mut canvas);

        assert_eq!(
            canvas.lines(),
            &[
                "ListViewData(title=Breaking news, content=broken news)",
                "ListViewData(title=Hello, content=World)",
            ]
        );
    }

    #[test]
    fn malformed_payload_is_rejected() {
        let result = ListViewDataAdapter.adapt_json(r#"[{"title": "wrong shape"}]"#);
        assert!(matches!(result, Err(AdapterError::MalformedPayload(_))));
    }

    #[test]
    fn empty_payload_adapts_to_nothing() {
        assert!(ListViewDataAdapter.adapt_json("[]").unwrap().is_empty());
    }
}
