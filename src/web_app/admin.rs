// web_app/admin.rs - Admin panel view-model
//
// The admin page keeps one `AdminPanel` in a signal. Transitions are plain
// methods so they can be tested without a browser:
//
//   Idle -> Analyzing -> Editing -> Publishing -> Idle
//                          \-> Deleting -> Editing/Idle
//
// Network calls live in the async drivers at the bottom of this file. A
// mutation's list refresh is only issued after the mutation succeeded.

use std::fmt;

use crate::web_app::client::{ApiClient, ApiError};
use crate::web_app::model::{DraftField, Product, ProductDraft};

/// Placeholder title shown while the backend analyzes a link
pub const ANALYZING_TITLE: &str = "AI Scanned... Writing Title...";
/// Placeholder description shown while the backend analyzes a link
pub const ANALYZING_DESCRIPTION: &str = "AI is thinking...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminPhase {
    #[default]
    Idle,
    Analyzing,
    Editing,
    Publishing,
    Deleting(i64),
}

/// Messages shown to the admin in a blocking alert
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdminNotice {
    LinkRequired,
    AnalysisFailed,
    Published,
    PublishFailed,
    PasswordRequired,
    DeleteFailed,
    RequestInFlight,
}

impl fmt::Display for AdminNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            AdminNotice::LinkRequired => "Please paste a link first!",
            AdminNotice::AnalysisFailed => "Analysis failed. Please enter details manually.",
            AdminNotice::Published => "Product Published Successfully! 🚀",
            AdminNotice::PublishFailed => "Failed to save. Check your Admin Password.",
            AdminNotice::PasswordRequired => "Please enter the admin password first.",
            AdminNotice::DeleteFailed => "Failed to delete. Check your Admin Password.",
            AdminNotice::RequestInFlight => "Please wait for the current request to finish.",
        };
        f.write_str(text)
    }
}

/// Everything needed to publish the current draft
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PublishRequest {
    pub draft: ProductDraft,
    pub secret: String,
}

/// A delete that passed the client-side password check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteRequest {
    pub id: i64,
    pub secret: String,
    /// Text for the blocking confirmation prompt
    pub prompt: String,
}

/// Result of a write call plus the list refresh that followed it
#[derive(Debug)]
pub struct MutationOutcome {
    pub result: Result<(), ApiError>,
    /// Present only when `result` succeeded
    pub refreshed: Option<Result<Vec<Product>, ApiError>>,
}

/// State of the admin page for one browser session
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdminPanel {
    pub link_input: String,
    pub secret: String,
    pub draft: ProductDraft,
    pub phase: AdminPhase,
    pub products: Vec<Product>,
    pub loading_products: bool,
}

impl AdminPanel {
    pub fn new() -> Self {
        Self {
            loading_products: true,
            ..Self::default()
        }
    }

    /// A request is outstanding; new actions are refused
    pub fn is_busy(&self) -> bool {
        matches!(
            self.phase,
            AdminPhase::Analyzing | AdminPhase::Publishing | AdminPhase::Deleting(_)
        )
    }

    /// The draft form is shown once there is something to preview
    pub fn shows_form(&self) -> bool {
        !self.draft.title.is_empty() || !self.draft.image_url.is_empty()
    }

    pub fn set_link_input(&mut self, value: String) {
        self.link_input = value;
    }

    pub fn set_secret(&mut self, value: String) {
        self.secret = value;
    }

    /// Manual edit of one draft field
    pub fn edit(&mut self, field: DraftField, value: String) {
        *field.get_mut(&mut self.draft) = value;
        if self.phase == AdminPhase::Idle {
            self.phase = AdminPhase::Editing;
        }
    }

    /// Start analyzing the pasted link, returning the URL to send.
    ///
    /// Placeholders are written into the draft right away.
    pub fn begin_analyze(&mut self) -> Result<String, AdminNotice> {
        if self.is_busy() {
            return Err(AdminNotice::RequestInFlight);
        }
        let url = self.link_input.trim();
        if url.is_empty() {
            return Err(AdminNotice::LinkRequired);
        }
        let url = url.to_string();

        self.draft.title = ANALYZING_TITLE.to_string();
        self.draft.description = ANALYZING_DESCRIPTION.to_string();
        self.phase = AdminPhase::Analyzing;
        Ok(url)
    }

    /// Apply the smart-scrape response.
    ///
    /// On success the whole draft is replaced. On failure only the
    /// description is cleared; the placeholder title stays.
    pub fn finish_analyze(&mut self, result: Result<ProductDraft, ApiError>) -> Option<AdminNotice> {
        self.phase = AdminPhase::Editing;
        match result {
            Ok(draft) => {
                self.draft = draft;
                None
            }
            Err(e) => {
                tracing::error!("Smart scrape failed: {}", e);
                self.draft.description.clear();
                Some(AdminNotice::AnalysisFailed)
            }
        }
    }

    /// Start publishing the draft
    pub fn begin_publish(&mut self) -> Result<PublishRequest, AdminNotice> {
        if self.is_busy() {
            return Err(AdminNotice::RequestInFlight);
        }
        if self.secret.is_empty() {
            return Err(AdminNotice::PasswordRequired);
        }
        self.phase = AdminPhase::Publishing;
        Ok(PublishRequest {
            draft: self.draft.clone(),
            secret: self.secret.clone(),
        })
    }

    /// Apply the outcome of a publish.
    ///
    /// Success resets the draft and the link input; failure leaves both
    /// untouched.
    pub fn finish_publish(&mut self, outcome: MutationOutcome) -> AdminNotice {
        match outcome.result {
            Ok(()) => {
                self.draft = ProductDraft::default();
                self.link_input.clear();
                self.phase = AdminPhase::Idle;
                if let Some(refreshed) = outcome.refreshed {
                    self.finish_load(refreshed);
                }
                AdminNotice::Published
            }
            Err(e) => {
                tracing::error!("Publishing product failed: {}", e);
                self.phase = AdminPhase::Editing;
                AdminNotice::PublishFailed
            }
        }
    }

    /// Check that a delete may be attempted; nothing is sent without a
    /// password.
    pub fn prepare_delete(&self, product: &Product) -> Result<DeleteRequest, AdminNotice> {
        if self.is_busy() {
            return Err(AdminNotice::RequestInFlight);
        }
        if self.secret.is_empty() {
            return Err(AdminNotice::PasswordRequired);
        }
        Ok(DeleteRequest {
            id: product.id,
            secret: self.secret.clone(),
            prompt: format!("Delete \"{}\"? This cannot be undone.", product.title),
        })
    }

    /// The admin confirmed the prompt
    pub fn begin_delete(&mut self, request: &DeleteRequest) {
        self.phase = AdminPhase::Deleting(request.id);
    }

    /// Apply the outcome of a delete. The list only changes through the
    /// refresh.
    pub fn finish_delete(&mut self, outcome: MutationOutcome) -> Option<AdminNotice> {
        self.phase = self.resting_phase();
        match outcome.result {
            Ok(()) => {
                if let Some(refreshed) = outcome.refreshed {
                    self.finish_load(refreshed);
                }
                None
            }
            Err(e) => {
                tracing::error!("Deleting product failed: {}", e);
                Some(AdminNotice::DeleteFailed)
            }
        }
    }

    /// Apply a product list fetch; failures are logged and keep the
    /// current list.
    pub fn finish_load(&mut self, result: Result<Vec<Product>, ApiError>) {
        self.loading_products = false;
        match result {
            Ok(products) => self.products = products,
            Err(e) => tracing::error!("Error fetching products: {}", e),
        }
    }

    fn resting_phase(&self) -> AdminPhase {
        if self.draft.is_empty() {
            AdminPhase::Idle
        } else {
            AdminPhase::Editing
        }
    }
}

/// Call the smart-scrape endpoint for `url`
pub async fn analyze(client: &ApiClient, url: &str) -> Result<ProductDraft, ApiError> {
    tracing::info!("Analyzing {}", url);
    client.smart_scrape(url).await
}

/// Publish, then re-fetch the list once the backend accepted the product
pub async fn publish(client: &ApiClient, request: &PublishRequest) -> MutationOutcome {
    let result = client
        .add_product(&request.draft, &request.secret)
        .await
        .map(|_| ());
    refresh_after(client, result).await
}

/// Delete, then re-fetch the list once the backend confirmed
pub async fn delete(client: &ApiClient, request: &DeleteRequest) -> MutationOutcome {
    let result = client
        .delete_product(request.id, &request.secret)
        .await
        .map(|_| ());
    refresh_after(client, result).await
}

async fn refresh_after(client: &ApiClient, result: Result<(), ApiError>) -> MutationOutcome {
    let refreshed = match result {
        Ok(()) => Some(client.list_products().await),
        Err(_) => None,
    };
    MutationOutcome { result, refreshed }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    fn status_error(status: StatusCode) -> ApiError {
        ApiError::Status {
            url: "http://localhost:5000/api/add-product".to_string(),
            status,
            body: String::new(),
        }
    }

    fn product(id: i64, title: &str) -> Product {
        Product {
            id,
            title: title.to_string(),
            image_url: "https://img.example/p.jpg".to_string(),
            link: "https://shop.example/p".to_string(),
            price: "₹100".to_string(),
            category: Some("Tech".to_string()),
            description: None,
        }
    }

    fn filled_draft() -> ProductDraft {
        ProductDraft {
            title: "X".to_string(),
            image_url: "https://img.example/x.jpg".to_string(),
            link: "https://shop.example/x".to_string(),
            price: "₹100".to_string(),
            category: "Tech".to_string(),
            description: "Great value".to_string(),
        }
    }

    #[test]
    fn test_new_panel_is_idle_and_loading() {
        let panel = AdminPanel::new();
        assert_eq!(panel.phase, AdminPhase::Idle);
        assert!(panel.loading_products);
        assert!(panel.draft.is_empty());
        assert!(!panel.shows_form());
    }

    #[test]
    fn test_analyze_requires_link() {
        let mut panel = AdminPanel::new();
        assert_eq!(panel.begin_analyze(), Err(AdminNotice::LinkRequired));

        panel.set_link_input("   ".to_string());
        assert_eq!(panel.begin_analyze(), Err(AdminNotice::LinkRequired));
        assert_eq!(panel.phase, AdminPhase::Idle);
        assert!(panel.draft.is_empty());
    }

    #[test]
    fn test_analyze_sets_placeholders() {
        let mut panel = AdminPanel::new();
        panel.set_link_input(" https://amzn.example/dp/123 ".to_string());

        let url = panel.begin_analyze().unwrap();
        assert_eq!(url, "https://amzn.example/dp/123");
        assert_eq!(panel.phase, AdminPhase::Analyzing);
        assert_eq!(panel.draft.title, ANALYZING_TITLE);
        assert_eq!(panel.draft.description, ANALYZING_DESCRIPTION);
        assert!(panel.shows_form());
        assert!(panel.is_busy());

        // Second click while the first request is outstanding
        assert_eq!(panel.begin_analyze(), Err(AdminNotice::RequestInFlight));
    }

    #[test]
    fn test_analyze_success_replaces_whole_draft() {
        let mut panel = AdminPanel::new();
        panel.set_link_input("https://amzn.example/dp/123".to_string());
        panel.edit(DraftField::Price, "typed before".to_string());
        panel.begin_analyze().unwrap();

        let scraped = ProductDraft {
            title: "Noise Cancelling Headphones".to_string(),
            ..ProductDraft::default()
        };
        assert_eq!(panel.finish_analyze(Ok(scraped.clone())), None);
        assert_eq!(panel.draft, scraped);
        assert_eq!(panel.phase, AdminPhase::Editing);
    }

    #[test]
    fn test_analyze_failure_clears_only_description() {
        let mut panel = AdminPanel::new();
        panel.set_link_input("https://amzn.example/dp/123".to_string());
        panel.edit(DraftField::Price, "₹499".to_string());
        panel.begin_analyze().unwrap();

        let notice = panel.finish_analyze(Err(status_error(StatusCode::BAD_GATEWAY)));
        assert_eq!(notice, Some(AdminNotice::AnalysisFailed));
        assert_eq!(panel.draft.description, "");
        assert_eq!(panel.draft.title, ANALYZING_TITLE);
        assert_eq!(panel.draft.price, "₹499");
        assert_eq!(panel.phase, AdminPhase::Editing);
    }

    #[test]
    fn test_edit_moves_idle_to_editing() {
        let mut panel = AdminPanel::new();
        panel.edit(DraftField::Title, "Handwritten".to_string());
        assert_eq!(panel.phase, AdminPhase::Editing);
        assert_eq!(panel.draft.title, "Handwritten");
        assert!(panel.shows_form());
    }

    #[test]
    fn test_publish_requires_secret() {
        let mut panel = AdminPanel::new();
        panel.draft = filled_draft();
        assert_eq!(panel.begin_publish(), Err(AdminNotice::PasswordRequired));
        assert_ne!(panel.phase, AdminPhase::Publishing);
    }

    #[test]
    fn test_publish_success_resets_draft_and_link() {
        let mut panel = AdminPanel::new();
        panel.set_link_input("https://shop.example/x".to_string());
        panel.set_secret("hunter2".to_string());
        panel.draft = filled_draft();

        let request = panel.begin_publish().unwrap();
        assert_eq!(request.draft, filled_draft());
        assert_eq!(request.secret, "hunter2");
        assert_eq!(panel.phase, AdminPhase::Publishing);

        let notice = panel.finish_publish(MutationOutcome {
            result: Ok(()),
            refreshed: Some(Ok(vec![product(1, "X")])),
        });
        assert_eq!(notice, AdminNotice::Published);
        assert!(panel.draft.is_empty());
        assert!(panel.link_input.is_empty());
        assert_eq!(panel.phase, AdminPhase::Idle);
        assert_eq!(panel.products.len(), 1);
        // The secret is kept for the next action
        assert_eq!(panel.secret, "hunter2");
    }

    #[test]
    fn test_publish_failure_keeps_draft() {
        let mut panel = AdminPanel::new();
        panel.set_link_input("https://shop.example/x".to_string());
        panel.set_secret("wrong".to_string());
        panel.draft = filled_draft();
        panel.begin_publish().unwrap();

        let notice = panel.finish_publish(MutationOutcome {
            result: Err(status_error(StatusCode::UNAUTHORIZED)),
            refreshed: None,
        });
        assert_eq!(notice, AdminNotice::PublishFailed);
        assert_eq!(panel.draft, filled_draft());
        assert_eq!(panel.link_input, "https://shop.example/x");
        assert_eq!(panel.phase, AdminPhase::Editing);
    }

    #[test]
    fn test_delete_requires_password() {
        let panel = AdminPanel::new();
        let result = panel.prepare_delete(&product(5, "Old Deal"));
        assert_eq!(result, Err(AdminNotice::PasswordRequired));
    }

    #[test]
    fn test_delete_flow() {
        let mut panel = AdminPanel::new();
        panel.finish_load(Ok(vec![product(5, "Old Deal"), product(6, "New Deal")]));
        panel.set_secret("hunter2".to_string());

        let request = panel.prepare_delete(&panel.products[0].clone()).unwrap();
        assert_eq!(request.id, 5);
        assert!(request.prompt.contains("Old Deal"));

        panel.begin_delete(&request);
        assert_eq!(panel.phase, AdminPhase::Deleting(5));
        assert!(panel.is_busy());
        // No optimistic removal
        assert_eq!(panel.products.len(), 2);

        let notice = panel.finish_delete(MutationOutcome {
            result: Ok(()),
            refreshed: Some(Ok(vec![product(6, "New Deal")])),
        });
        assert_eq!(notice, None);
        assert_eq!(panel.phase, AdminPhase::Idle);
        assert_eq!(panel.products, vec![product(6, "New Deal")]);
    }

    #[test]
    fn test_delete_failure_keeps_list() {
        let mut panel = AdminPanel::new();
        panel.finish_load(Ok(vec![product(5, "Old Deal")]));
        panel.set_secret("wrong".to_string());
        panel.draft = filled_draft();

        let request = panel.prepare_delete(&product(5, "Old Deal")).unwrap();
        panel.begin_delete(&request);
        let notice = panel.finish_delete(MutationOutcome {
            result: Err(status_error(StatusCode::UNAUTHORIZED)),
            refreshed: None,
        });
        assert_eq!(notice, Some(AdminNotice::DeleteFailed));
        assert_eq!(panel.products.len(), 1);
        assert_eq!(panel.phase, AdminPhase::Editing);
    }

    #[test]
    fn test_failed_load_keeps_previous_list() {
        let mut panel = AdminPanel::new();
        panel.finish_load(Ok(vec![product(1, "A")]));
        panel.finish_load(Err(status_error(StatusCode::INTERNAL_SERVER_ERROR)));
        assert!(!panel.loading_products);
        assert_eq!(panel.products.len(), 1);
    }

    #[test]
    fn test_notice_texts() {
        assert_eq!(
            AdminNotice::PublishFailed.to_string(),
            "Failed to save. Check your Admin Password."
        );
        assert_eq!(
            AdminNotice::AnalysisFailed.to_string(),
            "Analysis failed. Please enter details manually."
        );
        assert_eq!(AdminNotice::LinkRequired.to_string(), "Please paste a link first!");
    }
}
