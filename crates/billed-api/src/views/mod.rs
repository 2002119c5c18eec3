//! HTML views
//!
//! Each page is a plain function returning markup. `render` is the route
//! table: it picks the view for a `RoutePath` and feeds it the page state.

pub mod bills;
pub mod error;
pub mod layout;
pub mod login;
pub mod new_bill;

use billed_core::{DisplayBill, RoutePath};

pub use bills::{bills_ui, receipt_modal};
pub use error::{error_page, loading_page};
pub use login::login_ui;
pub use new_bill::{file_check_fragment, file_input, new_bill_ui};

/// Data handed to a view
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    pub data: Option<Vec<DisplayBill>>,
    pub error: Option<String>,
    pub loading: bool,
    /// Target of the new-bill button
    pub new_bill_route: Option<RoutePath>,
}

impl RenderState {
    pub fn with_data(data: Vec<DisplayBill>) -> Self {
        Self {
            data: Some(data),
            ..Self::default()
        }
    }

    pub fn with_error(error: impl Into<String>) -> Self {
        Self {
            error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn with_new_bill_route(mut self, route: RoutePath) -> Self {
        self.new_bill_route = Some(route);
        self
    }

    pub fn loading() -> Self {
        Self {
            loading: true,
            ..Self::default()
        }
    }
}

/// Form settings needed by the new-bill view
#[derive(Debug, Clone)]
pub struct FormOptions<'a> {
    pub accept: &'a [String],
    pub default_pct: u32,
}

/// Render the page behind `route`
pub fn render(route: RoutePath, state: &RenderState, form: &FormOptions<'_>) -> String {
    match route {
        RoutePath::Login => login_ui(state.error.as_deref()),
        RoutePath::Bills => bills_ui(state),
        RoutePath::NewBill => new_bill_ui(form.accept, form.default_pct),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_route_table() {
        let accept = vec!["png".to_string()];
        let form = FormOptions { accept: &accept, default_pct: 20 };

        let html = render(RoutePath::Login, &RenderState::default(), &form);
        assert!(html.contains("form-employee"));

        let bills = RenderState::with_data(Vec::new()).with_new_bill_route(RoutePath::NewBill);
        let html = render(RoutePath::Bills, &bills, &form);
        assert!(html.contains("btn-new-bill"));

        let html = render(RoutePath::Bills, &RenderState::with_error("Erreur 404"), &form);
        assert!(html.contains("Erreur 404"));

        let html = render(RoutePath::NewBill, &RenderState::default(), &form);
        assert!(html.contains("form-new-bill"));
    }
}
